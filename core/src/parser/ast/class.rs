use serde::Serialize;

use super::expression::Expr;
use super::statement::{Param, Stmt};
use crate::lexer::token::Span;

/// A class declaration or expression. The name is absent only for
/// anonymous class expressions; the superclass is any left-hand-side
/// expression after `extends`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDecl {
    pub name: Option<String>,
    pub superclass: Option<Expr>,
    pub body: Vec<MethodDef>,
}

/// A method definition, in source order within the class body. The
/// constructor is the entry whose kind is `Constructor`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodDef {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
    pub is_static: bool,
    pub is_async: bool,
    pub is_generator: bool,
    pub kind: MethodKind,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MethodKind {
    Constructor,
    Method,
    Getter,
    Setter,
}
