//! Expression nodes.
//!
//! Every variant that produces a value carries a [`TypeSlot`], starting
//! unresolved and overwritten in place by the type inferencer.

use crate::pattern::Pattern;
use crate::types::{fresh_slot, TypeSlot};
use corec_util::{DefId, Span, Symbol};

/// A (possibly qualified) name, e.g. `foo`, `mod::Type`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub segments: Vec<Symbol>,
    pub span: Span,
}

impl Path {
    pub fn single(name: Symbol, span: Span) -> Self {
        Self { segments: vec![name], span }
    }
}

#[derive(Debug, Clone)]
pub enum Expr {
    IntLiteral(IntLiteralExpr),
    FloatLiteral(FloatLiteralExpr),
    BoolLiteral(BoolLiteralExpr),
    CharLiteral(CharLiteralExpr),
    StrLiteral(StrLiteralExpr),
    RangeLiteral(RangeLiteralExpr),
    TupleLiteral(TupleLiteralExpr),
    DeclRef(DeclRefExpr),
    FunCall(FunCallExpr),
    BinaryOp(BinaryOpExpr),
    UnaryOp(UnaryOpExpr),
    AdtInit(Box<AdtInitExpr>),
    FieldAccess(FieldAccessExpr),
    MethodCall(Box<MethodCallExpr>),
    Match(Box<MatchExpr>),
    IntrinsicCall(IntrinsicCallExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::IntLiteral(e) => e.span,
            Expr::FloatLiteral(e) => e.span,
            Expr::BoolLiteral(e) => e.span,
            Expr::CharLiteral(e) => e.span,
            Expr::StrLiteral(e) => e.span,
            Expr::RangeLiteral(e) => e.span,
            Expr::TupleLiteral(e) => e.span,
            Expr::DeclRef(e) => e.span,
            Expr::FunCall(e) => e.span,
            Expr::BinaryOp(e) => e.span,
            Expr::UnaryOp(e) => e.span,
            Expr::AdtInit(e) => e.span,
            Expr::FieldAccess(e) => e.span,
            Expr::MethodCall(e) => e.span,
            Expr::Match(e) => e.span,
            Expr::IntrinsicCall(e) => e.span,
        }
    }

    /// The type slot every value-producing expression carries.
    pub fn ty(&self) -> &TypeSlot {
        match self {
            Expr::IntLiteral(e) => &e.ty,
            Expr::FloatLiteral(e) => &e.ty,
            Expr::BoolLiteral(e) => &e.ty,
            Expr::CharLiteral(e) => &e.ty,
            Expr::StrLiteral(e) => &e.ty,
            Expr::RangeLiteral(e) => &e.ty,
            Expr::TupleLiteral(e) => &e.ty,
            Expr::DeclRef(e) => &e.ty,
            Expr::FunCall(e) => &e.ty,
            Expr::BinaryOp(e) => &e.ty,
            Expr::UnaryOp(e) => &e.ty,
            Expr::AdtInit(e) => &e.ty,
            Expr::FieldAccess(e) => &e.ty,
            Expr::MethodCall(e) => &e.ty,
            Expr::Match(e) => &e.ty,
            Expr::IntrinsicCall(e) => &e.ty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntLiteralExpr {
    pub value: i64,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone)]
pub struct FloatLiteralExpr {
    pub value: f64,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone)]
pub struct BoolLiteralExpr {
    pub value: bool,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone)]
pub struct CharLiteralExpr {
    pub value: char,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone)]
pub struct StrLiteralExpr {
    pub value: Symbol,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone)]
pub struct RangeLiteralExpr {
    pub start: Box<Expr>,
    pub end: Box<Expr>,
    pub inclusive: bool,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone)]
pub struct TupleLiteralExpr {
    pub elems: Vec<Expr>,
    pub span: Span,
    pub ty: TypeSlot,
}

/// A reference to a declaration by name. `decl` is filled in by the resolver.
#[derive(Debug, Clone)]
pub struct DeclRefExpr {
    pub name: Path,
    pub decl: Option<DefId>,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone)]
pub struct FunCallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    /// The function declaration the callee resolved to.
    pub decl: Option<DefId>,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl BinOp {
    pub fn is_logical(self) -> bool {
        matches!(self, BinOp::And | BinOp::Or)
    }

    pub fn is_comparison(self) -> bool {
        matches!(self, BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge)
    }

    pub fn is_equality(self) -> bool {
        matches!(self, BinOp::Eq | BinOp::Ne)
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(self, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod)
    }
}

#[derive(Debug, Clone)]
pub struct BinaryOpExpr {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Not,
    Ref,
}

#[derive(Debug, Clone)]
pub struct UnaryOpExpr {
    pub op: UnOp,
    pub operand: Box<Expr>,
    pub span: Span,
    pub ty: TypeSlot,
}

/// A single `name: value` member initializer inside an `AdtInit`.
#[derive(Debug, Clone)]
pub struct MemberInit {
    pub name: Symbol,
    pub value: Expr,
    /// The field or variant-payload-slot declaration this initializes.
    pub decl: Option<DefId>,
}

/// Construction of a struct or enum value.
///
/// `path` is `None` for an anonymous literal whose ADT type is recovered
/// from context during inference (see the `AdtInit` contract).
#[derive(Debug, Clone)]
pub struct AdtInitExpr {
    pub path: Option<Path>,
    pub decl: Option<DefId>,
    /// For enum construction, the variant named (e.g. `.Red`); `None` for structs.
    pub variant: Option<Symbol>,
    pub members: Vec<MemberInit>,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone)]
pub struct FieldAccessExpr {
    pub base: Box<Expr>,
    pub field: Symbol,
    pub decl: Option<DefId>,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone)]
pub struct MethodCallExpr {
    pub base: Expr,
    pub method: Symbol,
    pub args: Vec<Expr>,
    pub decl: Option<DefId>,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone)]
pub struct MatchArm {
    /// Pattern alternation: any one of these may match.
    pub patterns: Vec<Pattern>,
    pub guard: Option<Expr>,
    pub body: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct MatchExpr {
    pub scrutinee: Expr,
    pub arms: Vec<MatchArm>,
    pub span: Span,
    pub ty: TypeSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntrinsicKind {
    Panic,
    Assert,
    Unreachable,
    Typeof,
}

#[derive(Debug, Clone)]
pub struct IntrinsicCallExpr {
    pub kind: IntrinsicKind,
    pub args: Vec<Expr>,
    pub span: Span,
    pub ty: TypeSlot,
}

impl IntLiteralExpr {
    pub fn new(value: i64, span: Span) -> Self {
        Self { value, span, ty: fresh_slot() }
    }
}

impl FloatLiteralExpr {
    pub fn new(value: f64, span: Span) -> Self {
        Self { value, span, ty: fresh_slot() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expr_span_dispatches_by_variant() {
        let e = Expr::IntLiteral(IntLiteralExpr::new(1, Span::DUMMY));
        assert_eq!(e.span(), Span::DUMMY);
    }

    #[test]
    fn new_literal_starts_with_unresolved_type() {
        let lit = IntLiteralExpr::new(42, Span::DUMMY);
        use crate::types::TypeHandle;
        assert_eq!(*lit.ty.borrow(), TypeHandle::DUMMY);
    }
}
