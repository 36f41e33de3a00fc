use super::Parser;
use super::ast::{Expr, ExprKind, FunctionExpr, ObjectProperty, TemplatePart};
use crate::errors::{ErrorKind, SyntaxError};
use crate::lexer::token::TokenKind;

impl Parser {
    /// A function expression, `function` not yet consumed; `start` covers
    /// a preceding `async` when there is one.
    pub(crate) fn parse_function_expr(
        &mut self,
        start: usize,
        is_async: bool,
    ) -> Result<Expr, SyntaxError> {
        self.expect(&TokenKind::Function)?;
        let is_generator = if self.check(&TokenKind::Star) {
            self.advance();
            true
        } else {
            false
        };
        let name = if matches!(self.peek(), TokenKind::Ident(_)) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let params = self.parse_params()?;
        let body = self.parse_function_body(is_async, is_generator)?;
        Ok(Expr {
            kind: ExprKind::Function(Box::new(FunctionExpr {
                name,
                params,
                body,
                is_async,
                is_generator,
            })),
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_new_expr(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.start_offset();
        self.advance(); // consume 'new'
        let callee = self.parse_call_member_expr(false)?;
        let args = if self.check(&TokenKind::LeftParen) {
            self.parse_call_args()?
        } else {
            Vec::new()
        };
        Ok(Expr {
            kind: ExprKind::New {
                callee: Box::new(callee),
                args,
            },
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_super_expr(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.start_offset();
        self.advance(); // consume 'super'
        let args = self.parse_call_args()?;
        Ok(Expr {
            kind: ExprKind::SuperCall { args },
            span: self.span_from(start),
        })
    }

    /// Dynamic import: `import(expr)`, an ordinary call whose callee is
    /// the reserved word `import`.
    pub(crate) fn parse_import_call(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.start_offset();
        self.advance(); // consume 'import'
        if !self.check(&TokenKind::LeftParen) {
            return Err(self.unexpected_token("expected '(' after 'import' in expression position"));
        }
        self.advance();
        let argument = self.parse_assignment_expr()?;
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr {
            kind: ExprKind::ImportCall {
                argument: Box::new(argument),
            },
            span: self.span_from(start),
        })
    }

    /// An object literal, `{` already consumed.
    pub(crate) fn parse_object_literal(&mut self, start: usize) -> Result<Expr, SyntaxError> {
        let mut properties = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            let prop_start = self.start_offset();
            let key = self.expect_property_name()?;

            let value = if self.check(&TokenKind::Colon) {
                self.advance();
                self.parse_assignment_expr()?
            } else if self.check(&TokenKind::LeftParen) {
                // shorthand method: `name(params) { ... }`
                let params = self.parse_params()?;
                let body = self.parse_function_body(false, false)?;
                Expr {
                    kind: ExprKind::Function(Box::new(FunctionExpr {
                        name: None,
                        params,
                        body,
                        is_async: false,
                        is_generator: false,
                    })),
                    span: self.span_from(prop_start),
                }
            } else if self.check(&TokenKind::Comma) || self.check(&TokenKind::RightBrace) {
                // shorthand property: `{ name }`
                Expr {
                    kind: ExprKind::Identifier(key.clone()),
                    span: self.span_from(prop_start),
                }
            } else {
                return Err(self.unexpected_token("expected ':', '(' or ',' after property name"));
            };

            properties.push(ObjectProperty {
                key,
                value,
                span: self.span_from(prop_start),
            });
            if !self.check(&TokenKind::RightBrace) {
                self.expect(&TokenKind::Comma)?;
            }
        }
        self.expect(&TokenKind::RightBrace)?;
        Ok(Expr {
            kind: ExprKind::Object { properties },
            span: self.span_from(start),
        })
    }

    /// An array literal, `[` already consumed. Trailing commas are fine;
    /// elisions are not part of the targeted subset.
    pub(crate) fn parse_array_literal(&mut self, start: usize) -> Result<Expr, SyntaxError> {
        let mut elements = Vec::new();
        while !self.check(&TokenKind::RightBracket) && !self.is_at_end() {
            elements.push(self.parse_assignment_expr()?);
            if !self.check(&TokenKind::RightBracket) {
                self.expect(&TokenKind::Comma)?;
            }
        }
        self.expect(&TokenKind::RightBracket)?;
        Ok(Expr {
            kind: ExprKind::Array { elements },
            span: self.span_from(start),
        })
    }

    /// The rest of a template literal after its head chunk: alternating
    /// substitution expressions and middle/tail chunks from the lexer.
    pub(crate) fn parse_template_parts(
        &mut self,
        start: usize,
        head: String,
    ) -> Result<Expr, SyntaxError> {
        let mut parts = Vec::new();
        if !head.is_empty() {
            parts.push(TemplatePart::Str(head));
        }
        loop {
            let expr = self.parse_expression()?;
            parts.push(TemplatePart::Expression(expr));
            let token = self.advance().clone();
            match token.kind {
                TokenKind::TemplateTail(text) => {
                    if !text.is_empty() {
                        parts.push(TemplatePart::Str(text));
                    }
                    break;
                }
                TokenKind::TemplateMiddle(text) => {
                    if !text.is_empty() {
                        parts.push(TemplatePart::Str(text));
                    }
                }
                other => {
                    return Err(SyntaxError::new(
                        ErrorKind::UnexpectedToken,
                        format!("expected template continuation, found {other:?}"),
                        token.span.start,
                        token.span.len().max(1),
                    ));
                }
            }
        }
        Ok(Expr {
            kind: ExprKind::TemplateLiteral { parts },
            span: self.span_from(start),
        })
    }
}
