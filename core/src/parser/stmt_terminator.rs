use super::Parser;
use crate::lexer::token::TokenKind;

impl Parser {
    /// Consume a statement terminator, applying automatic semicolon
    /// insertion: an explicit `;`, a following `}` or end of input, or a
    /// line break before the next token all end the statement. Anything
    /// else records an UnexpectedToken diagnostic and the statement is
    /// treated as terminated anyway so later statements still parse.
    pub(crate) fn consume_stmt_terminator(&mut self) {
        if self.check(&TokenKind::Semicolon) {
            self.advance();
            return;
        }
        if self.check(&TokenKind::RightBrace) || self.is_at_end() {
            return;
        }
        if self.current().newline_before {
            return;
        }
        let err = self.unexpected_token("expected ';'");
        self.diagnostics.push(err);
    }
}
