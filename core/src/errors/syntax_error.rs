use miette::Diagnostic;
use thiserror::Error;

/// Category of a syntax diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed literal or invalid character during tokenization.
    Lex,
    /// The parser expected one of a set of tokens and found another.
    UnexpectedToken,
    /// Assignment or increment applied to something that cannot be written.
    InvalidAssignmentTarget,
    /// `yield`/`await`/`break`/`continue`/`return` outside a valid
    /// enclosing context.
    ContextViolation,
    /// An arrow-function head was detected but its parameter list did not
    /// reparse as parameters.
    AmbiguousConstruct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single syntax diagnostic with its source location.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("SyntaxError: {message}")]
#[diagnostic(help("check the syntax around this location"))]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub severity: Severity,
    pub message: String,

    #[label("here")]
    pub span: miette::SourceSpan,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: message.into(),
            span: (offset, length).into(),
        }
    }

    pub fn warning(kind: ErrorKind, message: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: message.into(),
            span: (offset, length).into(),
        }
    }

    /// Byte offset this diagnostic points at.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}
