use super::Parser;
use super::ast::{ArrowBody, Expr, ExprKind, Literal, Param};
use super::context::Context;
use super::expr_ops::{
    assign_op, infix_binding_power, is_logical_op, token_to_binop, token_to_logical_op,
    token_to_unary_op, update_op,
};
use crate::errors::{ErrorKind, SyntaxError};
use crate::lexer::token::TokenKind;

impl Parser {
    /// Parse a full expression. The comma operator is not part of the
    /// targeted subset, so this is assignment-expression parsing.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_assignment_expr()
    }

    pub(crate) fn parse_assignment_expr(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.start_offset();

        if self.check_ident("yield") {
            if let Some(expr) = self.parse_yield_expr(start)? {
                return Ok(expr);
            }
        }
        if let Some(arrow) = self.try_parse_arrow(start)? {
            return Ok(arrow);
        }

        let lhs = self.parse_conditional_expr()?;

        if let Some(op) = assign_op(self.peek()) {
            if !is_assignment_target(&lhs) {
                self.diagnostics.push(SyntaxError::new(
                    ErrorKind::InvalidAssignmentTarget,
                    "invalid assignment target",
                    lhs.span.start,
                    lhs.span.len().max(1),
                ));
            }
            self.advance();
            let value = self.parse_assignment_expr()?;
            return Ok(Expr {
                kind: ExprKind::Assign {
                    op,
                    target: Box::new(lhs),
                    value: Box::new(value),
                },
                span: self.span_from(start),
            });
        }

        Ok(lhs)
    }

    /// `yield` is an operator only in generator context; elsewhere it is a
    /// plain identifier unless an operand follows on the same line, which
    /// is a context violation worth keeping as a yield node.
    fn parse_yield_expr(&mut self, start: usize) -> Result<Option<Expr>, SyntaxError> {
        let in_generator = self.context().is_generator;
        if !in_generator {
            let operand_follows = matches!(self.peek_at(1), TokenKind::Star)
                || (!self.token_at(1).newline_before && starts_operand(self.peek_at(1)));
            if !operand_follows {
                return Ok(None);
            }
        }

        let keyword = self.advance().clone();
        if !in_generator {
            self.diagnostics.push(SyntaxError::new(
                ErrorKind::ContextViolation,
                "'yield' outside of a generator function",
                keyword.span.start,
                keyword.span.len(),
            ));
        }

        let delegate = if self.check(&TokenKind::Star) && !self.current().newline_before {
            self.advance();
            true
        } else {
            false
        };

        // the argument, if any, must start on the same line
        let argument = if delegate {
            Some(Box::new(self.parse_assignment_expr()?))
        } else if !self.current().newline_before && token_starts_expr(self.peek()) {
            Some(Box::new(self.parse_assignment_expr()?))
        } else {
            None
        };

        Ok(Some(Expr {
            kind: ExprKind::Yield { argument, delegate },
            span: self.span_from(start),
        }))
    }

    /// Detect an arrow-function head without committing: a single
    /// identifier directly before `=>`, or a parenthesized parameter list
    /// whose matching `)` is followed by `=>`, optionally `async`-prefixed.
    /// Scans ahead over tokens — no re-lexing, no unbounded backtracking.
    fn try_parse_arrow(&mut self, start: usize) -> Result<Option<Expr>, SyntaxError> {
        let is_async = self.check_ident("async")
            && !self.token_at(1).newline_before
            && self.arrow_head_at(self.pos + 1);
        let head = if is_async { self.pos + 1 } else { self.pos };
        if !self.arrow_head_at(head) {
            return Ok(None);
        }

        if is_async {
            self.advance(); // consume 'async'
        }

        let params = if self.check(&TokenKind::LeftParen) {
            match self.parse_params() {
                Ok(params) => params,
                Err(err) => {
                    return Err(SyntaxError::new(
                        ErrorKind::AmbiguousConstruct,
                        format!("invalid arrow function parameter list: {}", err.message),
                        err.offset(),
                        err.span.len(),
                    ));
                }
            }
        } else {
            let param_start = self.start_offset();
            let name = self.expect_ident()?;
            vec![Param {
                name,
                default: None,
                span: self.span_from(param_start),
            }]
        };

        self.expect(&TokenKind::Arrow)?;
        let body = self.parse_arrow_body(is_async)?;
        Ok(Some(Expr {
            kind: ExprKind::Arrow {
                params,
                body,
                is_async,
            },
            span: self.span_from(start),
        }))
    }

    /// Whether the token run starting at absolute position `pos` shapes an
    /// arrow head: `ident =>` or a balanced `( ... ) =>`.
    fn arrow_head_at(&self, pos: usize) -> bool {
        let last = self.tokens.len() - 1;
        match &self.tokens[pos.min(last)].kind {
            TokenKind::Ident(_) => {
                matches!(self.tokens[(pos + 1).min(last)].kind, TokenKind::Arrow)
            }
            TokenKind::LeftParen => self.scan_arrow_signature(pos + 1),
            _ => false,
        }
    }

    /// Scan ahead from just after a `(` for the matching `)` and check
    /// whether `=>` follows it.
    fn scan_arrow_signature(&self, start_pos: usize) -> bool {
        let mut i = start_pos;
        let mut paren_depth = 0usize;

        while i < self.tokens.len() {
            match &self.tokens[i].kind {
                TokenKind::LeftParen => paren_depth += 1,
                TokenKind::RightParen => {
                    if paren_depth == 0 {
                        return i + 1 < self.tokens.len()
                            && matches!(self.tokens[i + 1].kind, TokenKind::Arrow);
                    }
                    paren_depth -= 1;
                }
                TokenKind::Eof => return false,
                _ => {}
            }
            i += 1;
        }

        false
    }

    fn parse_arrow_body(&mut self, is_async: bool) -> Result<ArrowBody, SyntaxError> {
        if self.check(&TokenKind::LeftBrace) {
            Ok(ArrowBody::Block(self.parse_function_body(is_async, false)?))
        } else {
            self.push_context(Context::function(is_async, false));
            let expr = self.parse_assignment_expr();
            self.pop_context();
            Ok(ArrowBody::Expr(Box::new(expr?)))
        }
    }

    fn parse_conditional_expr(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.start_offset();
        let condition = self.parse_binary_expr(0)?;
        if !self.check(&TokenKind::Question) {
            return Ok(condition);
        }
        self.advance();
        let consequent = self.parse_assignment_expr()?;
        self.expect(&TokenKind::Colon)?;
        let alternate = self.parse_assignment_expr()?;
        Ok(Expr {
            kind: ExprKind::Conditional {
                condition: Box::new(condition),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            },
            span: self.span_from(start),
        })
    }

    /// Precedence climbing over binary and logical operators.
    fn parse_binary_expr(&mut self, min_bp: u8) -> Result<Expr, SyntaxError> {
        let start = self.start_offset();
        let mut lhs = self.parse_unary_expr()?;

        loop {
            let Some((l_bp, r_bp)) = infix_binding_power(self.peek()) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            let op_token = self.advance().kind.clone();
            let rhs = self.parse_binary_expr(r_bp)?;
            let span = self.span_from(start);

            lhs = if is_logical_op(&op_token) {
                Expr {
                    kind: ExprKind::Logical {
                        left: Box::new(lhs),
                        op: token_to_logical_op(&op_token),
                        right: Box::new(rhs),
                    },
                    span,
                }
            } else {
                Expr {
                    kind: ExprKind::Binary {
                        left: Box::new(lhs),
                        op: token_to_binop(&op_token),
                        right: Box::new(rhs),
                    },
                    span,
                }
            };
        }

        Ok(lhs)
    }

    fn parse_unary_expr(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.start_offset();

        if let Some(op) = token_to_unary_op(self.peek()) {
            self.advance();
            let operand = self.parse_unary_expr()?;
            return Ok(Expr {
                kind: ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span: self.span_from(start),
            });
        }

        if matches!(self.peek(), TokenKind::PlusPlus | TokenKind::MinusMinus) {
            let op = update_op(self.peek());
            self.advance();
            let target = self.parse_unary_expr()?;
            self.check_update_target(&target);
            return Ok(Expr {
                kind: ExprKind::Update {
                    op,
                    target: Box::new(target),
                    prefix: true,
                },
                span: self.span_from(start),
            });
        }

        if self.check_ident("await") {
            if let Some(expr) = self.parse_await_expr(start)? {
                return Ok(expr);
            }
        }

        self.parse_postfix_expr()
    }

    /// In async context `await` is reserved and always an operator.
    /// Elsewhere it stays an identifier unless an operand follows on the
    /// same line, which is kept as an await node plus a context violation.
    fn parse_await_expr(&mut self, start: usize) -> Result<Option<Expr>, SyntaxError> {
        let in_async = self.context().is_async;
        if !in_async {
            let operand_follows =
                !self.token_at(1).newline_before && starts_operand(self.peek_at(1));
            if !operand_follows {
                return Ok(None);
            }
        }

        let keyword = self.advance().clone();
        if !in_async {
            self.diagnostics.push(SyntaxError::new(
                ErrorKind::ContextViolation,
                "'await' outside of an async function",
                keyword.span.start,
                keyword.span.len(),
            ));
        }

        let operand = self.parse_unary_expr()?;
        Ok(Some(Expr {
            kind: ExprKind::Await(Box::new(operand)),
            span: self.span_from(start),
        }))
    }

    fn parse_postfix_expr(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.start_offset();
        let expr = self.parse_call_member_expr(true)?;

        // postfix ++/-- must sit on the same line as its operand
        if matches!(self.peek(), TokenKind::PlusPlus | TokenKind::MinusMinus)
            && !self.current().newline_before
        {
            let op = update_op(self.peek());
            self.advance();
            self.check_update_target(&expr);
            return Ok(Expr {
                kind: ExprKind::Update {
                    op,
                    target: Box::new(expr),
                    prefix: false,
                },
                span: self.span_from(start),
            });
        }

        Ok(expr)
    }

    /// Postfix loop composing member accesses and calls after a primary.
    /// With `allow_call` unset, stops before argument lists — the shape
    /// `new` needs for its callee.
    pub(crate) fn parse_call_member_expr(&mut self, allow_call: bool) -> Result<Expr, SyntaxError> {
        let start = self.start_offset();
        let mut expr = self.parse_primary_expr()?;

        loop {
            match self.peek() {
                TokenKind::Dot => {
                    self.advance();
                    let property = self.expect_property_name()?;
                    expr = Expr {
                        kind: ExprKind::Member {
                            object: Box::new(expr),
                            property,
                        },
                        span: self.span_from(start),
                    };
                }
                TokenKind::LeftBracket => {
                    self.advance();
                    let property = self.parse_expression()?;
                    self.expect(&TokenKind::RightBracket)?;
                    expr = Expr {
                        kind: ExprKind::ComputedMember {
                            object: Box::new(expr),
                            property: Box::new(property),
                        },
                        span: self.span_from(start),
                    };
                }
                TokenKind::LeftParen if allow_call => {
                    let args = self.parse_call_args()?;
                    expr = Expr {
                        kind: ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        span: self.span_from(start),
                    };
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    pub(crate) fn parse_call_args(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut args = Vec::new();
        while !self.check(&TokenKind::RightParen) && !self.is_at_end() {
            args.push(self.parse_assignment_expr()?);
            if !self.check(&TokenKind::RightParen) {
                self.expect(&TokenKind::Comma)?;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(args)
    }

    fn parse_primary_expr(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek() {
            TokenKind::Function => {
                let start = self.start_offset();
                return self.parse_function_expr(start, false);
            }
            TokenKind::Class => {
                let start = self.start_offset();
                self.advance();
                let class = self.parse_class_expr_tail()?;
                return Ok(Expr {
                    kind: ExprKind::ClassExpr(Box::new(class)),
                    span: self.span_from(start),
                });
            }
            TokenKind::New => return self.parse_new_expr(),
            TokenKind::Super => return self.parse_super_expr(),
            TokenKind::Import => return self.parse_import_call(),
            TokenKind::Ident(name) if name == "async" && self.at_async_function() => {
                let start = self.start_offset();
                self.advance();
                return self.parse_function_expr(start, true);
            }
            _ => {}
        }

        let start = self.start_offset();
        let token = self.advance().clone();
        let kind = match token.kind {
            TokenKind::Number(value) => ExprKind::Literal(Literal::Number(value)),
            TokenKind::String(value) => ExprKind::Literal(Literal::String(value)),
            TokenKind::Regex { pattern, flags } => {
                ExprKind::Literal(Literal::Regex { pattern, flags })
            }
            TokenKind::True => ExprKind::Literal(Literal::Boolean(true)),
            TokenKind::False => ExprKind::Literal(Literal::Boolean(false)),
            TokenKind::Null => ExprKind::Literal(Literal::Null),
            TokenKind::Undefined => ExprKind::Literal(Literal::Undefined),
            TokenKind::This => ExprKind::This,
            TokenKind::Ident(name) => ExprKind::Identifier(name),
            TokenKind::NoSubTemplate(text) => ExprKind::Literal(Literal::String(text)),
            TokenKind::TemplateHead(head) => return self.parse_template_parts(start, head),
            TokenKind::LeftParen => {
                let expr = self.parse_expression()?;
                self.expect(&TokenKind::RightParen)?;
                return Ok(expr);
            }
            TokenKind::LeftBrace => return self.parse_object_literal(start),
            TokenKind::LeftBracket => return self.parse_array_literal(start),
            other => {
                return Err(SyntaxError::new(
                    ErrorKind::UnexpectedToken,
                    format!("unexpected token {other:?} in expression"),
                    token.span.start,
                    token.span.len().max(1),
                ));
            }
        };

        Ok(Expr {
            kind,
            span: token.span,
        })
    }

    fn check_update_target(&mut self, target: &Expr) {
        if !is_assignment_target(target) {
            self.diagnostics.push(SyntaxError::new(
                ErrorKind::InvalidAssignmentTarget,
                "invalid increment/decrement target",
                target.span.start,
                target.span.len().max(1),
            ));
        }
    }
}

/// Identifiers and member expressions are writable; everything else is not.
fn is_assignment_target(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Identifier(_) | ExprKind::Member { .. } | ExprKind::ComputedMember { .. }
    )
}

/// Like `token_starts_expr`, but excludes `(` and `[`: outside their
/// contexts, `yield(x)` and `await[0]` are a call and a member access on
/// ordinary identifiers, not operator uses.
fn starts_operand(kind: &TokenKind) -> bool {
    token_starts_expr(kind) && !matches!(kind, TokenKind::LeftParen | TokenKind::LeftBracket)
}

/// Whether a token can begin an expression. Used to decide if contextual
/// `yield`/`await` carry an operand.
fn token_starts_expr(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Number(_)
            | TokenKind::String(_)
            | TokenKind::Regex { .. }
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null
            | TokenKind::Undefined
            | TokenKind::Ident(_)
            | TokenKind::This
            | TokenKind::Super
            | TokenKind::New
            | TokenKind::Function
            | TokenKind::Class
            | TokenKind::Import
            | TokenKind::Typeof
            | TokenKind::Void
            | TokenKind::Delete
            | TokenKind::Bang
            | TokenKind::Tilde
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::LeftParen
            | TokenKind::LeftBracket
            | TokenKind::LeftBrace
            | TokenKind::TemplateHead(_)
            | TokenKind::NoSubTemplate(_)
    )
}
