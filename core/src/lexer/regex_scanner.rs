use super::scanner::Scanner;
use super::token::TokenKind;

impl Scanner<'_> {
    /// Whether a `/` at the current position starts a regex literal rather
    /// than a division operator. Decided by the previous significant token:
    /// after anything that can end an expression, `/` divides.
    pub(super) fn regex_allowed(&self) -> bool {
        match self.tokens.last() {
            None => true,
            Some(token) => !token.kind.ends_expression(),
        }
    }

    /// Scan a regex literal, the opening `/` already consumed. A `/` inside
    /// a `[...]` character class does not terminate the literal.
    pub(super) fn scan_regex(&mut self, start: usize) -> TokenKind {
        let mut in_class = false;
        loop {
            match self.cursor.peek() {
                None | Some(b'\n') => {
                    self.diagnostic(
                        "unterminated regular expression literal",
                        start,
                        self.cursor.pos() - start,
                    );
                    let pattern = self.cursor.slice_from(start + 1).to_owned();
                    return TokenKind::Regex {
                        pattern,
                        flags: String::new(),
                    };
                }
                Some(b'\\') => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                Some(b'[') => {
                    in_class = true;
                    self.cursor.advance();
                }
                Some(b']') => {
                    in_class = false;
                    self.cursor.advance();
                }
                Some(b'/') if !in_class => break,
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }

        let pattern = self.cursor.slice_from(start + 1).to_owned();
        self.cursor.advance(); // closing '/'

        let flags_start = self.cursor.pos();
        while self.cursor.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.cursor.advance();
        }
        let flags = self.cursor.slice_from(flags_start).to_owned();

        TokenKind::Regex { pattern, flags }
    }
}
