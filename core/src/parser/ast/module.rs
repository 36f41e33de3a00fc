use serde::Serialize;

use super::expression::Expr;
use super::statement::Stmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportDecl {
    pub specifiers: Vec<ImportSpecifier>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ImportSpecifier {
    Named { imported: String, local: String },
    Default(String),
    Namespace(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExportDecl {
    /// `export <declaration>`
    NamedStmt(Box<Stmt>),
    /// `export default <expr>`
    Default(Expr),
    /// `export default <function/class declaration>`
    DefaultStmt(Box<Stmt>),
    /// `export { a, b as c }`
    NamedList(Vec<ExportSpecifier>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSpecifier {
    pub local: String,
    pub exported: String,
}
