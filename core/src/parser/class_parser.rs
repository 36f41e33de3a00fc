use super::Parser;
use super::ast::{ClassDecl, MethodDef, MethodKind, StmtKind};
use crate::errors::{ErrorKind, SyntaxError};
use crate::lexer::token::TokenKind;

impl Parser {
    pub(crate) fn parse_class_decl(&mut self) -> Result<StmtKind, SyntaxError> {
        self.advance(); // consume 'class'
        let name = Some(self.expect_ident()?);
        let class = self.parse_class_tail(name)?;
        Ok(StmtKind::Class(class))
    }

    /// A class in expression position, `class` already consumed; the name
    /// is optional there.
    pub(crate) fn parse_class_expr_tail(&mut self) -> Result<ClassDecl, SyntaxError> {
        let name = if matches!(self.peek(), TokenKind::Ident(_)) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        self.parse_class_tail(name)
    }

    fn parse_class_tail(&mut self, name: Option<String>) -> Result<ClassDecl, SyntaxError> {
        let superclass = if self.check(&TokenKind::Extends) {
            self.advance();
            Some(self.parse_call_member_expr(true)?)
        } else {
            None
        };

        self.expect(&TokenKind::LeftBrace)?;
        let mut body = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            if self.check(&TokenKind::Semicolon) {
                self.advance();
                continue;
            }
            body.push(self.parse_method_def()?);
        }
        self.expect(&TokenKind::RightBrace)?;

        Ok(ClassDecl {
            name,
            superclass,
            body,
        })
    }

    fn parse_method_def(&mut self) -> Result<MethodDef, SyntaxError> {
        let start = self.start_offset();
        let mut is_static = false;
        let mut is_async = false;
        let mut is_generator = false;
        let mut kind = MethodKind::Method;

        // each modifier word doubles as a method name when `(` follows it
        if self.check_ident("static") && !matches!(self.peek_at(1), TokenKind::LeftParen) {
            self.advance();
            is_static = true;
        }
        if self.check_ident("async")
            && !matches!(self.peek_at(1), TokenKind::LeftParen)
            && !self.token_at(1).newline_before
        {
            self.advance();
            is_async = true;
        }
        if self.check(&TokenKind::Star) {
            self.advance();
            is_generator = true;
        }
        if !is_async && !is_generator {
            if self.check_ident("get") && !matches!(self.peek_at(1), TokenKind::LeftParen) {
                self.advance();
                kind = MethodKind::Getter;
            } else if self.check_ident("set") && !matches!(self.peek_at(1), TokenKind::LeftParen) {
                self.advance();
                kind = MethodKind::Setter;
            }
        }

        let name = self.expect_property_name()?;
        let params = self.parse_params()?;

        // malformed accessor arity is worth a diagnostic, not a bailout
        if kind == MethodKind::Getter && !params.is_empty() {
            let err = self.error_at_prev(
                ErrorKind::UnexpectedToken,
                "getter must not declare parameters",
            );
            self.diagnostics.push(err);
        }
        if kind == MethodKind::Setter && params.len() != 1 {
            let err = self.error_at_prev(
                ErrorKind::UnexpectedToken,
                "setter must declare exactly one parameter",
            );
            self.diagnostics.push(err);
        }

        let body = self.parse_function_body(is_async, is_generator)?;

        if name == "constructor" && !is_static && !is_async && !is_generator
            && kind == MethodKind::Method
        {
            kind = MethodKind::Constructor;
        }

        Ok(MethodDef {
            name,
            params,
            body,
            is_static,
            is_async,
            is_generator,
            kind,
            span: self.span_from(start),
        })
    }
}
