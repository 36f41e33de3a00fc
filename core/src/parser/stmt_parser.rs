use super::Parser;
use super::ast::{FunctionDecl, Param, Stmt, StmtKind, VarDeclarator, VarKind};
use super::context::Context;
use crate::errors::{ErrorKind, SyntaxError};
use crate::lexer::token::TokenKind;

impl Parser {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.start_offset();
        let kind = match self.peek() {
            TokenKind::Let | TokenKind::Const | TokenKind::Var => self.parse_var_decl()?,
            TokenKind::Function => self.parse_function_decl(false)?,
            TokenKind::Class => self.parse_class_decl()?,
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Do => self.parse_do_while()?,
            TokenKind::For => self.parse_for()?,
            TokenKind::Switch => self.parse_switch()?,
            TokenKind::Return => self.parse_return()?,
            TokenKind::Break => self.parse_break()?,
            TokenKind::Continue => self.parse_continue()?,
            TokenKind::Throw => self.parse_throw()?,
            TokenKind::Try => self.parse_try()?,
            TokenKind::LeftBrace => StmtKind::Block(self.parse_block()?),
            TokenKind::Semicolon => {
                self.advance();
                StmtKind::Empty
            }
            // `import(...)` is an ordinary call expression, not a declaration
            TokenKind::Import if !matches!(self.peek_at(1), TokenKind::LeftParen) => {
                self.parse_import_decl()?
            }
            TokenKind::Export => self.parse_export_decl()?,
            TokenKind::Ident(name) if name == "async" && self.at_async_function() => {
                self.parse_async_function_decl()?
            }
            _ => self.parse_expr_stmt()?,
        };
        Ok(Stmt {
            kind,
            span: self.span_from(start),
        })
    }

    fn parse_var_decl(&mut self) -> Result<StmtKind, SyntaxError> {
        let (kind, declarations) = self.parse_var_declarations()?;
        self.consume_stmt_terminator();
        Ok(StmtKind::VarDecl { kind, declarations })
    }

    /// The declaration keyword and its declarators, without a terminator.
    /// Shared with `for(` headers, which terminate differently.
    pub(crate) fn parse_var_declarations(
        &mut self,
    ) -> Result<(VarKind, Vec<VarDeclarator>), SyntaxError> {
        let kind = match self.advance().kind {
            TokenKind::Let => VarKind::Let,
            TokenKind::Const => VarKind::Const,
            TokenKind::Var => VarKind::Var,
            _ => unreachable!("caller checked for a declaration keyword"),
        };

        let mut declarations = Vec::new();
        loop {
            let start = self.start_offset();
            let name = self.expect_ident()?;
            let init = if self.check(&TokenKind::Assign) {
                self.advance();
                Some(self.parse_assignment_expr()?)
            } else {
                None
            };
            declarations.push(VarDeclarator {
                name,
                init,
                span: self.span_from(start),
            });
            if self.check(&TokenKind::Comma) {
                self.advance();
                continue;
            }
            break;
        }
        Ok((kind, declarations))
    }

    pub(crate) fn parse_function_decl(&mut self, is_async: bool) -> Result<StmtKind, SyntaxError> {
        self.expect(&TokenKind::Function)?;
        let is_generator = if self.check(&TokenKind::Star) {
            self.advance();
            true
        } else {
            false
        };
        let name = self.expect_ident()?;
        let params = self.parse_params()?;
        let body = self.parse_function_body(is_async, is_generator)?;
        Ok(StmtKind::FunctionDecl(FunctionDecl {
            name,
            params,
            body,
            is_async,
            is_generator,
        }))
    }

    pub(crate) fn parse_async_function_decl(&mut self) -> Result<StmtKind, SyntaxError> {
        self.advance(); // consume 'async'
        self.parse_function_decl(true)
    }

    /// Parenthesized parameter list: identifiers with optional defaults.
    pub(crate) fn parse_params(&mut self) -> Result<Vec<Param>, SyntaxError> {
        self.expect(&TokenKind::LeftParen)?;
        let mut params = Vec::new();
        while !self.check(&TokenKind::RightParen) && !self.is_at_end() {
            let start = self.start_offset();
            let name = self.expect_ident()?;
            let default = if self.check(&TokenKind::Assign) {
                self.advance();
                Some(self.parse_assignment_expr()?)
            } else {
                None
            };
            params.push(Param {
                name,
                default,
                span: self.span_from(start),
            });
            if !self.check(&TokenKind::RightParen) {
                self.expect(&TokenKind::Comma)?;
            }
        }
        self.expect(&TokenKind::RightParen)?;
        Ok(params)
    }

    /// A function body block under a fresh async/generator context.
    pub(crate) fn parse_function_body(
        &mut self,
        is_async: bool,
        is_generator: bool,
    ) -> Result<Vec<Stmt>, SyntaxError> {
        self.push_context(Context::function(is_async, is_generator));
        let body = self.parse_block();
        self.pop_context();
        body
    }

    fn parse_if(&mut self) -> Result<StmtKind, SyntaxError> {
        self.advance(); // consume 'if'
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;

        // braces optional: the consequent is any single statement
        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = if self.check(&TokenKind::Else) {
            self.advance();
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(StmtKind::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> Result<StmtKind, SyntaxError> {
        self.advance(); // consume 'while'
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;
        let body = Box::new(self.parse_loop_body()?);
        Ok(StmtKind::While { condition, body })
    }

    fn parse_do_while(&mut self) -> Result<StmtKind, SyntaxError> {
        self.advance(); // consume 'do'
        let body = Box::new(self.parse_loop_body()?);
        self.expect(&TokenKind::While)?;
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;
        self.consume_stmt_terminator();
        Ok(StmtKind::DoWhile { body, condition })
    }

    /// A loop body statement with the loop flag set for `break`/`continue`.
    pub(crate) fn parse_loop_body(&mut self) -> Result<Stmt, SyntaxError> {
        self.enter_loop();
        let body = self.parse_statement();
        self.pop_context();
        body
    }

    fn parse_return(&mut self) -> Result<StmtKind, SyntaxError> {
        let keyword_span = self.current().span;
        self.advance(); // consume 'return'
        if !self.context().in_function {
            self.diagnostics.push(SyntaxError::new(
                ErrorKind::ContextViolation,
                "'return' outside of a function",
                keyword_span.start,
                keyword_span.len(),
            ));
        }

        // restricted production: the argument must start on the same line
        let value = if self.check(&TokenKind::Semicolon)
            || self.check(&TokenKind::RightBrace)
            || self.is_at_end()
            || self.current().newline_before
        {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume_stmt_terminator();
        Ok(StmtKind::Return(value))
    }

    fn parse_break(&mut self) -> Result<StmtKind, SyntaxError> {
        let keyword_span = self.current().span;
        self.advance(); // consume 'break'
        let context = self.context();
        if !context.in_loop && !context.in_switch {
            self.diagnostics.push(SyntaxError::new(
                ErrorKind::ContextViolation,
                "'break' outside of a loop or switch",
                keyword_span.start,
                keyword_span.len(),
            ));
        }
        self.consume_stmt_terminator();
        Ok(StmtKind::Break)
    }

    fn parse_continue(&mut self) -> Result<StmtKind, SyntaxError> {
        let keyword_span = self.current().span;
        self.advance(); // consume 'continue'
        if !self.context().in_loop {
            self.diagnostics.push(SyntaxError::new(
                ErrorKind::ContextViolation,
                "'continue' outside of a loop",
                keyword_span.start,
                keyword_span.len(),
            ));
        }
        self.consume_stmt_terminator();
        Ok(StmtKind::Continue)
    }

    fn parse_throw(&mut self) -> Result<StmtKind, SyntaxError> {
        self.advance(); // consume 'throw'
        let value = self.parse_expression()?;
        self.consume_stmt_terminator();
        Ok(StmtKind::Throw(value))
    }

    fn parse_try(&mut self) -> Result<StmtKind, SyntaxError> {
        self.advance(); // consume 'try'
        let try_block = self.parse_block()?;

        let mut catch_param = None;
        let mut catch_block = None;
        if self.check(&TokenKind::Catch) {
            self.advance();
            if self.check(&TokenKind::LeftParen) {
                self.advance();
                catch_param = Some(self.expect_ident()?);
                self.expect(&TokenKind::RightParen)?;
            }
            catch_block = Some(self.parse_block()?);
        }

        let finally_block = if self.check(&TokenKind::Finally) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        if catch_block.is_none() && finally_block.is_none() {
            return Err(self.unexpected_token("expected 'catch' or 'finally' after try block"));
        }

        Ok(StmtKind::TryCatch {
            try_block,
            catch_param,
            catch_block,
            finally_block,
        })
    }

    pub(crate) fn parse_block(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        self.expect(&TokenKind::LeftBrace)?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            let start_pos = self.pos;
            match self.parse_statement() {
                Ok(stmt) => stmts.push(stmt),
                Err(err) => {
                    self.diagnostics.push(err);
                    self.synchronize(start_pos);
                }
            }
        }
        self.expect(&TokenKind::RightBrace)?;
        Ok(stmts)
    }

    fn parse_expr_stmt(&mut self) -> Result<StmtKind, SyntaxError> {
        let expr = self.parse_expression()?;
        self.consume_stmt_terminator();
        Ok(StmtKind::Expr(expr))
    }
}
