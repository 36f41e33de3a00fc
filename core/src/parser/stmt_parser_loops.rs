use super::Parser;
use super::ast::{Stmt, StmtKind, VarKind};
use crate::errors::SyntaxError;
use crate::lexer::token::TokenKind;

enum ForHeader {
    Classic,
    In,
    Of,
}

impl Parser {
    pub(crate) fn parse_for(&mut self) -> Result<StmtKind, SyntaxError> {
        self.advance(); // consume 'for'
        self.expect(&TokenKind::LeftParen)?;
        match self.scan_for_header() {
            ForHeader::Of => self.parse_for_of(),
            ForHeader::In => self.parse_for_in(),
            ForHeader::Classic => self.parse_classic_for(),
        }
    }

    /// Decide between the three `for` forms by scanning the first clause:
    /// the first `;`, `of`, or `in` outside nested brackets settles it.
    fn scan_for_header(&self) -> ForHeader {
        let mut depth = 0usize;
        let mut i = self.pos;
        while i < self.tokens.len() {
            match &self.tokens[i].kind {
                TokenKind::LeftParen | TokenKind::LeftBracket | TokenKind::LeftBrace => depth += 1,
                TokenKind::RightParen if depth == 0 => return ForHeader::Classic,
                TokenKind::RightParen | TokenKind::RightBracket | TokenKind::RightBrace => {
                    depth = depth.saturating_sub(1);
                }
                TokenKind::Semicolon if depth == 0 => return ForHeader::Classic,
                TokenKind::In if depth == 0 => return ForHeader::In,
                TokenKind::Ident(name) if depth == 0 && name == "of" => return ForHeader::Of,
                TokenKind::Eof => return ForHeader::Classic,
                _ => {}
            }
            i += 1;
        }
        ForHeader::Classic
    }

    fn parse_for_of(&mut self) -> Result<StmtKind, SyntaxError> {
        let decl_kind = self.parse_optional_decl_kind();
        let variable = self.expect_ident()?;
        self.expect_contextual("of")?;
        let iterable = self.parse_assignment_expr()?;
        self.expect(&TokenKind::RightParen)?;
        let body = Box::new(self.parse_loop_body()?);
        Ok(StmtKind::ForOf {
            decl_kind,
            variable,
            iterable,
            body,
        })
    }

    fn parse_for_in(&mut self) -> Result<StmtKind, SyntaxError> {
        let decl_kind = self.parse_optional_decl_kind();
        let variable = self.expect_ident()?;
        self.expect(&TokenKind::In)?;
        let object = self.parse_assignment_expr()?;
        self.expect(&TokenKind::RightParen)?;
        let body = Box::new(self.parse_loop_body()?);
        Ok(StmtKind::ForIn {
            decl_kind,
            variable,
            object,
            body,
        })
    }

    fn parse_optional_decl_kind(&mut self) -> Option<VarKind> {
        let kind = match self.peek() {
            TokenKind::Let => VarKind::Let,
            TokenKind::Const => VarKind::Const,
            TokenKind::Var => VarKind::Var,
            _ => return None,
        };
        self.advance();
        Some(kind)
    }

    fn parse_classic_for(&mut self) -> Result<StmtKind, SyntaxError> {
        let init = if self.check(&TokenKind::Semicolon) {
            self.advance();
            None
        } else if matches!(
            self.peek(),
            TokenKind::Let | TokenKind::Const | TokenKind::Var
        ) {
            let start = self.start_offset();
            let (kind, declarations) = self.parse_var_declarations()?;
            let span = self.span_from(start);
            self.expect(&TokenKind::Semicolon)?;
            Some(Box::new(Stmt {
                kind: StmtKind::VarDecl { kind, declarations },
                span,
            }))
        } else {
            let start = self.start_offset();
            let expr = self.parse_expression()?;
            let span = self.span_from(start);
            self.expect(&TokenKind::Semicolon)?;
            Some(Box::new(Stmt {
                kind: StmtKind::Expr(expr),
                span,
            }))
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        let update = if self.check(&TokenKind::RightParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&TokenKind::RightParen)?;

        let body = Box::new(self.parse_loop_body()?);
        Ok(StmtKind::ForLoop {
            init,
            condition,
            update,
            body,
        })
    }
}
