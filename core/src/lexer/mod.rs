pub mod cursor;
mod number_ident_scanner;
mod regex_scanner;
pub mod scanner;
mod string_scanner;
pub mod token;

use crate::errors::SyntaxError;
use token::Token;

/// Tokenize source code into a list of tokens plus any lexical diagnostics.
/// The token list always ends with `Eof`, even for malformed input.
pub fn lex(source: &str) -> (Vec<Token>, Vec<SyntaxError>) {
    scanner::Scanner::new(source).scan_tokens()
}
