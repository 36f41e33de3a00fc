pub mod ast;
mod class_parser;
mod context;
mod expr_literals;
mod expr_ops;
mod expr_parser;
mod module_parser;
mod recovery;
mod stmt_parser;
mod stmt_parser_loops;
mod stmt_terminator;
mod switch_parser;

use crate::errors::{ErrorKind, SyntaxError};
use crate::lexer::token::{Span, Token, TokenKind};
use ast::Program;
use context::Context;

/// Parse a token stream into a Program AST plus the diagnostics met on the
/// way. A single malformed statement never aborts the parse: the parser
/// records a diagnostic, skips to the next statement boundary, and goes on.
pub fn parse(tokens: Vec<Token>) -> (Program, Vec<SyntaxError>) {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();
    (program, parser.diagnostics)
}

/// Recursive-descent parser over a token stream.
pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: Vec<SyntaxError>,
    contexts: Vec<Context>,
}

impl Parser {
    fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token {
                kind: TokenKind::Eof,
                span: Span::new(end, end),
                line: 1,
                column: 1,
                newline_before: false,
            });
        }
        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
            contexts: vec![Context::top_level()],
        }
    }

    fn parse_program(&mut self) -> Program {
        let mut body = Vec::new();
        while !self.is_at_end() {
            let start_pos = self.pos;
            match self.parse_statement() {
                Ok(stmt) => body.push(stmt),
                Err(err) => {
                    self.diagnostics.push(err);
                    self.synchronize(start_pos);
                }
            }
        }
        let end = self.tokens[self.tokens.len() - 1].span.end;
        Program {
            body,
            span: Span::new(0, end),
        }
    }

    pub(crate) fn peek(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    pub(crate) fn peek_at(&self, n: usize) -> &TokenKind {
        &self.token_at(n).kind
    }

    /// Token `n` positions ahead, clamped to the trailing `Eof`.
    pub(crate) fn token_at(&self, n: usize) -> &Token {
        let i = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[i]
    }

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn advance(&mut self) -> &Token {
        let i = self.pos;
        if !matches!(self.tokens[i].kind, TokenKind::Eof) {
            self.pos += 1;
        }
        &self.tokens[i]
    }

    pub(crate) fn expect(&mut self, expected: &TokenKind) -> Result<&Token, SyntaxError> {
        if self.peek() == expected {
            Ok(self.advance())
        } else {
            Err(self.unexpected_token(&format!("expected {expected:?}")))
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), TokenKind::Eof)
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.peek() == kind
    }

    /// Whether the current token is the given contextual word.
    pub(crate) fn check_ident(&self, word: &str) -> bool {
        matches!(self.peek(), TokenKind::Ident(name) if name == word)
    }

    pub(crate) fn expect_ident(&mut self) -> Result<String, SyntaxError> {
        if let TokenKind::Ident(name) = self.peek() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected_token("expected identifier"))
        }
    }

    /// Consume a contextual keyword that the lexer produced as an identifier.
    pub(crate) fn expect_contextual(&mut self, word: &str) -> Result<(), SyntaxError> {
        if self.check_ident(word) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected_token(&format!("expected '{word}'")))
        }
    }

    /// Property and method names admit reserved words (`obj.default`,
    /// `delete() {}`), not just identifiers.
    pub(crate) fn expect_property_name(&mut self) -> Result<String, SyntaxError> {
        if let TokenKind::Ident(name) = self.peek() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else if let Some(word) = self.peek().keyword_lexeme() {
            self.advance();
            Ok(word.to_string())
        } else {
            Err(self.unexpected_token("expected property name"))
        }
    }

    pub(crate) fn expect_string_literal(&mut self) -> Result<String, SyntaxError> {
        if let TokenKind::String(value) = self.peek() {
            let value = value.clone();
            self.advance();
            Ok(value)
        } else {
            Err(self.unexpected_token("expected module source string"))
        }
    }

    /// Whether the current `async` identifier prefixes a function keyword
    /// on the same line.
    pub(crate) fn at_async_function(&self) -> bool {
        matches!(self.peek_at(1), TokenKind::Function) && !self.token_at(1).newline_before
    }

    pub(crate) fn unexpected_token(&self, expected: &str) -> SyntaxError {
        let token = &self.tokens[self.pos];
        SyntaxError::new(
            ErrorKind::UnexpectedToken,
            format!("{expected}, found {:?}", token.kind),
            token.span.start,
            token.span.len().max(1),
        )
    }

    /// Error anchored at the last consumed token.
    pub(crate) fn error_at_prev(&self, kind: ErrorKind, message: impl Into<String>) -> SyntaxError {
        let token = &self.tokens[self.pos.saturating_sub(1)];
        SyntaxError::new(
            kind,
            message,
            token.span.start,
            token.span.len().max(1),
        )
    }

    /// Start offset of the token about to be consumed.
    pub(crate) fn start_offset(&self) -> usize {
        self.tokens[self.pos].span.start
    }

    /// Span from `start` to the end of the last consumed token.
    pub(crate) fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.tokens[self.pos.saturating_sub(1)].span.end)
    }
}
