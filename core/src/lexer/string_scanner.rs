use super::scanner::Scanner;
use super::token::TokenKind;

impl Scanner<'_> {
    /// Scan a quoted string, the opening quote already consumed. An
    /// unterminated string yields a diagnostic and a best-effort token
    /// holding the text read so far.
    pub(super) fn scan_string(&mut self, quote: u8, start: usize) -> TokenKind {
        let mut value = Vec::new();
        loop {
            match self.cursor.peek() {
                Some(c) if c == quote => {
                    self.cursor.advance();
                    break;
                }
                Some(b'\n') | None => {
                    self.diagnostic(
                        "unterminated string literal",
                        start,
                        self.cursor.pos() - start,
                    );
                    break;
                }
                Some(b'\\') => {
                    self.cursor.advance();
                    match self.cursor.advance() {
                        Some(b'n') => value.push(b'\n'),
                        Some(b't') => value.push(b'\t'),
                        Some(b'r') => value.push(b'\r'),
                        Some(b'0') => value.push(b'\0'),
                        Some(b'\\') => value.push(b'\\'),
                        Some(c) if c == quote => value.push(c),
                        Some(c) => {
                            value.push(b'\\');
                            value.push(c);
                        }
                        None => {
                            self.diagnostic(
                                "unterminated string literal",
                                start,
                                self.cursor.pos() - start,
                            );
                            break;
                        }
                    }
                }
                Some(_) => {
                    let c = self.cursor.advance().expect("peeked character is present");
                    value.push(c);
                }
            }
        }
        TokenKind::String(String::from_utf8_lossy(&value).into_owned())
    }

    /// Scan the opening chunk of a template literal, the backtick already
    /// consumed. Produces `NoSubTemplate` when the template has no
    /// substitutions, otherwise `TemplateHead` and an open substitution.
    pub(super) fn scan_template(&mut self, start: usize) -> TokenKind {
        let (text, ended) = self.scan_template_text(start);
        if ended {
            TokenKind::NoSubTemplate(text)
        } else {
            self.template_substitutions.push(self.brace_depth);
            TokenKind::TemplateHead(text)
        }
    }

    /// Scan a template chunk following a substitution's closing `}`.
    pub(super) fn scan_template_continue(&mut self, start: usize) -> TokenKind {
        let (text, ended) = self.scan_template_text(start);
        if ended {
            TokenKind::TemplateTail(text)
        } else {
            self.template_substitutions.push(self.brace_depth);
            TokenKind::TemplateMiddle(text)
        }
    }

    /// Read template text up to a closing backtick (`true`) or a `${`
    /// substitution start (`false`).
    fn scan_template_text(&mut self, start: usize) -> (String, bool) {
        let mut value = Vec::new();
        loop {
            match self.cursor.advance() {
                Some(b'`') => return (String::from_utf8_lossy(&value).into_owned(), true),
                Some(b'$') if self.cursor.peek() == Some(b'{') => {
                    self.cursor.advance();
                    return (String::from_utf8_lossy(&value).into_owned(), false);
                }
                Some(b'\\') => match self.cursor.advance() {
                    Some(b'n') => value.push(b'\n'),
                    Some(b't') => value.push(b'\t'),
                    Some(c) => value.push(c),
                    None => break,
                },
                Some(c) => value.push(c),
                None => break,
            }
        }
        self.diagnostic(
            "unterminated template literal",
            start,
            self.cursor.pos() - start,
        );
        (String::from_utf8_lossy(&value).into_owned(), true)
    }
}
