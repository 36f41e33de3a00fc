use super::Parser;
use super::ast::{Stmt, StmtKind, SwitchCase};
use crate::errors::SyntaxError;
use crate::lexer::token::TokenKind;

impl Parser {
    pub(crate) fn parse_switch(&mut self) -> Result<StmtKind, SyntaxError> {
        self.advance(); // consume 'switch'
        self.expect(&TokenKind::LeftParen)?;
        let discriminant = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;
        self.expect(&TokenKind::LeftBrace)?;

        self.enter_switch();
        let result = self.parse_switch_cases();
        self.pop_context();
        let cases = result?;

        self.expect(&TokenKind::RightBrace)?;
        Ok(StmtKind::Switch {
            discriminant,
            cases,
        })
    }

    fn parse_switch_cases(&mut self) -> Result<Vec<SwitchCase>, SyntaxError> {
        let mut cases = Vec::new();
        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            let start = self.start_offset();
            let test = if self.check(&TokenKind::Case) {
                self.advance();
                Some(self.parse_expression()?)
            } else if self.check(&TokenKind::Default) {
                self.advance();
                None
            } else {
                return Err(self.unexpected_token("expected 'case' or 'default' in switch body"));
            };
            self.expect(&TokenKind::Colon)?;
            let body = self.parse_switch_case_body();
            cases.push(SwitchCase {
                test,
                body,
                span: self.span_from(start),
            });
        }
        Ok(cases)
    }

    /// Statements owned by one clause, up to the next clause or the
    /// closing brace. `break` is an ordinary statement here.
    fn parse_switch_case_body(&mut self) -> Vec<Stmt> {
        let mut body = Vec::new();
        while !self.check(&TokenKind::Case)
            && !self.check(&TokenKind::Default)
            && !self.check(&TokenKind::RightBrace)
            && !self.is_at_end()
        {
            let start_pos = self.pos;
            match self.parse_statement() {
                Ok(stmt) => body.push(stmt),
                Err(err) => {
                    self.diagnostics.push(err);
                    self.synchronize(start_pos);
                }
            }
        }
        body
    }
}
