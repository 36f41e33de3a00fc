use serde::Serialize;

use super::class::ClassDecl;
use super::literal::Literal;
use super::statement::{Param, Stmt};
use crate::lexer::token::Span;

/// An expression with its source span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Binary operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
    EqEq,
    NotEq,
    EqEqEq,
    NotEqEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Shl,
    Shr,
    UShr,
    BitAnd,
    BitOr,
    BitXor,
    In,
    Instanceof,
}

/// Unary operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Neg,
    Plus,
    Not,
    BitNot,
    Typeof,
    Void,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpdateOp {
    Inc,
    Dec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOp {
    And,
    Or,
    Nullish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

/// Expression AST nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExprKind {
    Literal(Literal),
    Identifier(String),
    This,
    TemplateLiteral {
        parts: Vec<TemplatePart>,
    },
    Array {
        elements: Vec<Expr>,
    },
    Object {
        properties: Vec<ObjectProperty>,
    },
    Function(Box<FunctionExpr>),
    Arrow {
        params: Vec<Param>,
        body: ArrowBody,
        is_async: bool,
    },
    ClassExpr(Box<ClassDecl>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Update {
        op: UpdateOp,
        target: Box<Expr>,
        prefix: bool,
    },
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    Conditional {
        condition: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Assign {
        op: AssignOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    New {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Member {
        object: Box<Expr>,
        property: String,
    },
    ComputedMember {
        object: Box<Expr>,
        property: Box<Expr>,
    },
    SuperCall {
        args: Vec<Expr>,
    },
    Yield {
        argument: Option<Box<Expr>>,
        delegate: bool,
    },
    Await(Box<Expr>),
    /// Dynamic `import(expr)` — a call whose callee is the reserved word
    /// `import`, usable anywhere a call expression is.
    ImportCall {
        argument: Box<Expr>,
    },
}

/// A function expression, named or anonymous.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionExpr {
    pub name: Option<String>,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
    pub is_async: bool,
    pub is_generator: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectProperty {
    pub key: String,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TemplatePart {
    Str(String),
    Expression(Expr),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ArrowBody {
    Expr(Box<Expr>),
    Block(Vec<Stmt>),
}
