use super::Parser;
use crate::lexer::token::TokenKind;

impl Parser {
    /// Skip tokens until a likely statement boundary so one malformed
    /// statement does not swallow diagnostics for the rest of the input.
    ///
    /// `error_pos` is the position the failed statement started from; when
    /// the statement consumed nothing, one token is skipped unconditionally
    /// so the parse always makes progress. A `}` is never skipped past by
    /// the scan itself — it is left for the enclosing block to consume.
    pub(crate) fn synchronize(&mut self, error_pos: usize) {
        if self.pos == error_pos && !self.is_at_end() {
            self.advance();
        }
        while !self.is_at_end() {
            if matches!(
                self.tokens[self.pos - 1].kind,
                TokenKind::Semicolon | TokenKind::RightBrace
            ) {
                return;
            }
            match self.peek() {
                TokenKind::Let
                | TokenKind::Const
                | TokenKind::Var
                | TokenKind::Function
                | TokenKind::Class
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::For
                | TokenKind::Switch
                | TokenKind::Return
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Throw
                | TokenKind::Try
                | TokenKind::Import
                | TokenKind::Export
                | TokenKind::Case
                | TokenKind::Default
                | TokenKind::RightBrace => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
