use super::cursor::Cursor;
use super::number_ident_scanner::is_ident_start;
use super::token::{Span, Token, TokenKind};
use crate::errors::{ErrorKind, SyntaxError};

/// Scans source code into a sequence of tokens.
///
/// Malformed input never aborts the scan: the offending text becomes a
/// best-effort token, a diagnostic is recorded alongside, and scanning
/// continues so the parser can still attempt structural recovery.
pub struct Scanner<'src> {
    pub(super) cursor: Cursor<'src>,
    pub(super) tokens: Vec<Token>,
    pub(super) diagnostics: Vec<SyntaxError>,
    newline_before: bool,
    /// Open-brace count outside template substitutions.
    pub(super) brace_depth: u32,
    /// Brace depth at each currently open `${`, innermost last. A `}` that
    /// matches the top entry resumes the template instead of closing a block.
    pub(super) template_substitutions: Vec<u32>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            newline_before: false,
            brace_depth: 0,
            template_substitutions: Vec::new(),
        }
    }

    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<SyntaxError>) {
        loop {
            self.skip_whitespace_and_comments();
            if self.cursor.is_at_end() {
                break;
            }

            let newline_before = self.newline_before;
            self.newline_before = false;
            let line = self.cursor.line();
            let column = self.cursor.column();
            let start = self.cursor.pos();

            match self.scan_token(start) {
                Some(kind) => {
                    let span = Span::new(start, self.cursor.pos());
                    self.tokens.push(Token {
                        kind,
                        span,
                        line,
                        column,
                        newline_before,
                    });
                }
                // invalid bytes are skipped; keep the line-break flag alive
                None => self.newline_before = newline_before,
            }
        }

        let eof_pos = self.cursor.pos();
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            span: Span::new(eof_pos, eof_pos),
            line: self.cursor.line(),
            column: self.cursor.column(),
            newline_before: self.newline_before,
        });

        (self.tokens, self.diagnostics)
    }

    pub(super) fn diagnostic(&mut self, message: impl Into<String>, start: usize, length: usize) {
        self.diagnostics.push(SyntaxError::new(
            ErrorKind::Lex,
            message,
            start,
            length.max(1),
        ));
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(b'\n') => {
                    self.newline_before = true;
                    self.cursor.advance();
                }
                Some(b' ' | b'\t' | b'\r') => {
                    self.cursor.advance();
                }
                Some(b'/') if self.cursor.peek_next() == Some(b'/') => {
                    // Line comment: skip until newline
                    while let Some(ch) = self.cursor.peek() {
                        if ch == b'\n' {
                            break;
                        }
                        self.cursor.advance();
                    }
                }
                Some(b'/') if self.cursor.peek_next() == Some(b'*') => {
                    // Block comment: skip until */
                    self.cursor.advance();
                    self.cursor.advance();
                    loop {
                        match self.cursor.advance() {
                            Some(b'*') if self.cursor.peek() == Some(b'/') => {
                                self.cursor.advance();
                                break;
                            }
                            Some(b'\n') => self.newline_before = true,
                            None => break,
                            _ => {}
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_token(&mut self, start: usize) -> Option<TokenKind> {
        let ch = self.cursor.advance()?;

        let kind = match ch {
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => {
                self.brace_depth += 1;
                TokenKind::LeftBrace
            }
            b'}' => self.right_brace_or_template(start),
            b'[' => TokenKind::LeftBracket,
            b']' => TokenKind::RightBracket,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'~' => TokenKind::Tilde,
            b'^' => TokenKind::Caret,
            b'.' => {
                if self.cursor.peek() == Some(b'.') && self.cursor.peek_next() == Some(b'.') {
                    self.cursor.advance();
                    self.cursor.advance();
                    TokenKind::DotDotDot
                } else {
                    TokenKind::Dot
                }
            }
            b'+' => {
                if self.cursor.match_char(b'+') {
                    TokenKind::PlusPlus
                } else if self.cursor.match_char(b'=') {
                    TokenKind::PlusEquals
                } else {
                    TokenKind::Plus
                }
            }
            b'-' => {
                if self.cursor.match_char(b'-') {
                    TokenKind::MinusMinus
                } else if self.cursor.match_char(b'=') {
                    TokenKind::MinusEquals
                } else {
                    TokenKind::Minus
                }
            }
            b'*' => {
                if self.cursor.match_char(b'*') {
                    TokenKind::StarStar
                } else if self.cursor.match_char(b'=') {
                    TokenKind::StarEquals
                } else {
                    TokenKind::Star
                }
            }
            b'/' => {
                if self.regex_allowed() {
                    self.scan_regex(start)
                } else if self.cursor.match_char(b'=') {
                    TokenKind::SlashEquals
                } else {
                    TokenKind::Slash
                }
            }
            b'%' => {
                if self.cursor.match_char(b'=') {
                    TokenKind::PercentEquals
                } else {
                    TokenKind::Percent
                }
            }
            b'=' => {
                if self.cursor.match_char(b'>') {
                    TokenKind::Arrow
                } else if self.cursor.match_char(b'=') {
                    if self.cursor.match_char(b'=') {
                        TokenKind::EqEqEq
                    } else {
                        TokenKind::EqEq
                    }
                } else {
                    TokenKind::Assign
                }
            }
            b'!' => {
                if self.cursor.match_char(b'=') {
                    if self.cursor.match_char(b'=') {
                        TokenKind::NotEqEq
                    } else {
                        TokenKind::NotEq
                    }
                } else {
                    TokenKind::Bang
                }
            }
            b'<' => {
                if self.cursor.match_char(b'<') {
                    TokenKind::LessLess
                } else if self.cursor.match_char(b'=') {
                    TokenKind::LessEq
                } else {
                    TokenKind::Less
                }
            }
            b'>' => {
                if self.cursor.match_char(b'>') {
                    if self.cursor.match_char(b'>') {
                        TokenKind::GreaterGreaterGreater
                    } else {
                        TokenKind::GreaterGreater
                    }
                } else if self.cursor.match_char(b'=') {
                    TokenKind::GreaterEq
                } else {
                    TokenKind::Greater
                }
            }
            b'&' => {
                if self.cursor.match_char(b'&') {
                    TokenKind::AmpAmp
                } else {
                    TokenKind::Amp
                }
            }
            b'|' => {
                if self.cursor.match_char(b'|') {
                    TokenKind::PipePipe
                } else {
                    TokenKind::Pipe
                }
            }
            b'?' => {
                if self.cursor.match_char(b'?') {
                    TokenKind::NullishCoalescing
                } else {
                    TokenKind::Question
                }
            }
            b'`' => self.scan_template(start),
            b'"' | b'\'' => self.scan_string(ch, start),
            c if c.is_ascii_digit() => self.scan_number(start),
            c if is_ident_start(c) => self.scan_identifier(start),
            _ => {
                // skip the rest of a multi-byte character in one go
                while self.cursor.peek().is_some_and(|b| b & 0xC0 == 0x80) {
                    self.cursor.advance();
                }
                self.diagnostic(
                    format!("unexpected character '{}'", self.cursor.slice_from(start)),
                    start,
                    self.cursor.pos() - start,
                );
                return None;
            }
        };

        Some(kind)
    }

    fn right_brace_or_template(&mut self, start: usize) -> TokenKind {
        if self.template_substitutions.last() == Some(&self.brace_depth) {
            self.template_substitutions.pop();
            self.scan_template_continue(start)
        } else {
            self.brace_depth = self.brace_depth.saturating_sub(1);
            TokenKind::RightBrace
        }
    }
}
