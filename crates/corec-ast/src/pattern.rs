//! Match-arm patterns.

use crate::expr::{Expr, Path};
use corec_util::{DefId, Span, Symbol};

/// A single payload slot bound by a variant pattern, e.g. the `x` in
/// `.Some(x)`. Carries its own `id`, the same way `Param`, `DeclStmt`, and
/// every other binding site in this node set does.
#[derive(Debug, Clone)]
pub struct PatternBinding {
    pub name: Symbol,
    pub id: DefId,
}

#[derive(Debug, Clone)]
pub enum Pattern {
    /// `_`, matches anything and binds nothing.
    Wildcard(Span),
    /// A literal expression the scrutinee is compared against.
    Literal(Expr),
    /// An enum variant pattern, e.g. `.Some(x)`, binding each payload slot
    /// in order.
    Variant(Path, Vec<PatternBinding>),
}

impl Pattern {
    pub fn span(&self) -> Span {
        match self {
            Pattern::Wildcard(span) => *span,
            Pattern::Literal(e) => e.span(),
            Pattern::Variant(path, _) => path.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_carries_its_own_span() {
        let p = Pattern::Wildcard(Span::DUMMY);
        assert_eq!(p.span(), Span::DUMMY);
    }

    #[test]
    fn variant_pattern_span_comes_from_its_path() {
        let path = Path::single(Symbol::intern("Some"), Span::DUMMY);
        let p = Pattern::Variant(
            path,
            vec![PatternBinding { name: Symbol::intern("x"), id: DefId(0) }],
        );
        assert_eq!(p.span(), Span::DUMMY);
    }
}
