//! Top-level and member declarations (fn, struct, enum, const, static, use).
//!
//! There is no `trait`/`impl` in this language's node list: methods are
//! declared directly inside the struct or enum that owns them.

use crate::stmt::Block;
use crate::types::TypeExpr;
use corec_util::{DefId, Span, Symbol};

/// Whether a top-level item is visible outside the module that declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone)]
pub enum Item {
    Fn(FnItem),
    Struct(StructItem),
    Enum(EnumItem),
    Use(UseItem),
    Const(ConstItem),
    Static(StaticItem),
}

impl Item {
    pub fn span(&self) -> Span {
        match self {
            Item::Fn(i) => i.span,
            Item::Struct(i) => i.span,
            Item::Enum(i) => i.span,
            Item::Use(i) => i.span,
            Item::Const(i) => i.span,
            Item::Static(i) => i.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenericParam {
    pub name: Symbol,
    pub id: DefId,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: Symbol,
    pub ty: TypeExpr,
    pub id: DefId,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct FnItem {
    pub id: DefId,
    pub name: Symbol,
    pub visibility: Visibility,
    pub generics: Vec<GenericParam>,
    pub params: Vec<Param>,
    pub ret_type: Option<TypeExpr>,
    pub body: Block,
    /// Set when this function is declared inside a struct or enum; binds `this`.
    pub is_method: bool,
    /// The struct/enum that owns this method, if any. Set by the owning
    /// item's constructor, never mutated afterward.
    pub parent: Option<DefId>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub id: DefId,
    pub name: Symbol,
    pub visibility: Visibility,
    pub ty: TypeExpr,
    pub default: Option<crate::expr::Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct StructItem {
    pub id: DefId,
    pub name: Symbol,
    pub visibility: Visibility,
    pub generics: Vec<GenericParam>,
    pub fields: Vec<Field>,
    pub methods: Vec<FnItem>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum VariantData {
    Unit,
    Tuple(Vec<TypeExpr>),
}

#[derive(Debug, Clone)]
pub struct Variant {
    pub id: DefId,
    pub name: Symbol,
    pub data: VariantData,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct EnumItem {
    pub id: DefId,
    pub name: Symbol,
    pub visibility: Visibility,
    pub generics: Vec<GenericParam>,
    pub variants: Vec<Variant>,
    pub methods: Vec<FnItem>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct UseItem {
    pub path: crate::expr::Path,
    pub alias: Option<Symbol>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ConstItem {
    pub id: DefId,
    pub name: Symbol,
    pub visibility: Visibility,
    pub ty: TypeExpr,
    pub value: crate::expr::Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct StaticItem {
    pub id: DefId,
    pub name: Symbol,
    pub visibility: Visibility,
    pub ty: TypeExpr,
    pub value: crate::expr::Expr,
    pub mutable: bool,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_span_dispatches_by_variant() {
        let item = Item::Use(UseItem {
            path: crate::expr::Path::single(Symbol::intern("foo"), Span::DUMMY),
            alias: None,
            span: Span::DUMMY,
        });
        assert_eq!(item.span(), Span::DUMMY);
    }
}
