use super::Parser;
use super::ast::{ExportDecl, ExportSpecifier, ImportDecl, ImportSpecifier, Stmt, StmtKind};
use crate::errors::{ErrorKind, SyntaxError};
use crate::lexer::token::TokenKind;

impl Parser {
    pub(crate) fn parse_import_decl(&mut self) -> Result<StmtKind, SyntaxError> {
        self.expect(&TokenKind::Import)?;

        let mut specifiers = Vec::new();
        if matches!(self.peek(), TokenKind::Ident(_)) {
            // default binding: `import greet from '...'`
            let local = self.expect_ident()?;
            specifiers.push(ImportSpecifier::Default(local));
            if self.check(&TokenKind::Comma) {
                self.advance();
            }
        }

        if self.check(&TokenKind::Star) {
            self.advance();
            self.expect_contextual("as")?;
            specifiers.push(ImportSpecifier::Namespace(self.expect_ident()?));
        } else if self.check(&TokenKind::LeftBrace) {
            self.advance();
            while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
                let imported = self.expect_import_name()?;
                let local = if self.check_ident("as") {
                    self.advance();
                    self.expect_ident()?
                } else if imported == "default" {
                    return Err(self.error_at_prev(
                        ErrorKind::UnexpectedToken,
                        "imported 'default' must be renamed with 'as'",
                    ));
                } else {
                    imported.clone()
                };
                specifiers.push(ImportSpecifier::Named { imported, local });
                if !self.check(&TokenKind::RightBrace) {
                    self.expect(&TokenKind::Comma)?;
                }
            }
            self.expect(&TokenKind::RightBrace)?;
        }

        self.expect_contextual("from")?;
        let source = self.expect_string_literal()?;
        self.consume_stmt_terminator();
        Ok(StmtKind::Import(ImportDecl { specifiers, source }))
    }

    /// An imported name may be the keyword `default` (renamed via `as`).
    fn expect_import_name(&mut self) -> Result<String, SyntaxError> {
        if self.check(&TokenKind::Default) {
            self.advance();
            Ok("default".to_string())
        } else {
            self.expect_ident()
        }
    }

    fn expect_export_name(&mut self) -> Result<String, SyntaxError> {
        if self.check(&TokenKind::Default) {
            self.advance();
            Ok("default".to_string())
        } else {
            self.expect_ident()
        }
    }

    pub(crate) fn parse_export_decl(&mut self) -> Result<StmtKind, SyntaxError> {
        self.expect(&TokenKind::Export)?;

        if self.check(&TokenKind::Default) {
            self.advance();
            if matches!(self.peek(), TokenKind::Function | TokenKind::Class)
                || (self.check_ident("async") && self.at_async_function())
            {
                let stmt = self.parse_decl_stmt()?;
                return Ok(StmtKind::Export(ExportDecl::DefaultStmt(Box::new(stmt))));
            }
            let expr = self.parse_assignment_expr()?;
            self.consume_stmt_terminator();
            return Ok(StmtKind::Export(ExportDecl::Default(expr)));
        }

        if self.check(&TokenKind::LeftBrace) {
            self.advance();
            let mut specifiers = Vec::new();
            while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
                let local = self.expect_ident()?;
                let exported = if self.check_ident("as") {
                    self.advance();
                    self.expect_export_name()?
                } else {
                    local.clone()
                };
                specifiers.push(ExportSpecifier { local, exported });
                if !self.check(&TokenKind::RightBrace) {
                    self.expect(&TokenKind::Comma)?;
                }
            }
            self.expect(&TokenKind::RightBrace)?;
            self.consume_stmt_terminator();
            return Ok(StmtKind::Export(ExportDecl::NamedList(specifiers)));
        }

        let stmt = self.parse_decl_stmt()?;
        Ok(StmtKind::Export(ExportDecl::NamedStmt(Box::new(stmt))))
    }

    /// The declaration forms valid after `export` / `export default`.
    fn parse_decl_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let start = self.start_offset();
        let kind = match self.peek() {
            TokenKind::Function => self.parse_function_decl(false)?,
            TokenKind::Class => self.parse_class_decl()?,
            TokenKind::Let | TokenKind::Const | TokenKind::Var => {
                let (kind, declarations) = self.parse_var_declarations()?;
                self.consume_stmt_terminator();
                StmtKind::VarDecl { kind, declarations }
            }
            TokenKind::Ident(name) if name == "async" && self.at_async_function() => {
                self.parse_async_function_decl()?
            }
            _ => return Err(self.unexpected_token("expected a declaration after 'export'")),
        };
        Ok(Stmt {
            kind,
            span: self.span_from(start),
        })
    }
}
