mod class;
mod expression;
mod literal;
mod module;
mod statement;

pub use class::{ClassDecl, MethodDef, MethodKind};
pub use expression::{
    ArrowBody, AssignOp, BinOp, Expr, ExprKind, FunctionExpr, LogicalOp, ObjectProperty,
    TemplatePart, UnaryOp, UpdateOp,
};
pub use literal::Literal;
pub use module::{ExportDecl, ExportSpecifier, ImportDecl, ImportSpecifier};
pub use statement::{FunctionDecl, Param, Stmt, StmtKind, SwitchCase, VarDeclarator, VarKind};

use crate::lexer::token::Span;
use serde::Serialize;

/// A complete JavaScript program — a list of top-level statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub span: Span,
}
