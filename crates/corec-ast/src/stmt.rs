//! Statements and blocks.

use crate::expr::Expr;
use crate::types::TypeExpr;
use corec_util::{DefId, Span, Symbol};

#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Return(Option<Expr>),
    /// `defer <expr>`. The resolver still visits the expression; it has no
    /// effect on inference or control flow in this core.
    Defer(Expr),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Decl(DeclStmt),
    Break(Option<Symbol>),
    Continue(Option<Symbol>),
    Expr(Expr),
}

/// `const`/`var` local binding.
#[derive(Debug, Clone)]
pub struct DeclStmt {
    pub id: DefId,
    pub name: Symbol,
    pub ty: Option<TypeExpr>,
    pub init: Option<Expr>,
    pub mutable: bool,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_block: Block,
    pub else_clause: Option<Box<ElseClause>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ElseClause {
    Block(Block),
    If(IfStmt),
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Block,
    pub label: Option<Symbol>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ForStmt {
    pub binding: Symbol,
    pub binding_id: DefId,
    pub iter: Expr,
    pub body: Block,
    pub label: Option<Symbol>,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_holds_statements_in_order() {
        let block = Block {
            stmts: vec![Stmt::Break(None), Stmt::Continue(None)],
            span: Span::DUMMY,
        };
        assert_eq!(block.stmts.len(), 2);
    }
}
