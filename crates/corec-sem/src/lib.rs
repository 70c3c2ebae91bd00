//! corec-sem - semantic analysis core.
//!
//! Consumes the node shapes declared in `corec-ast` and runs two passes over
//! them: name resolution ([`resolver`]) and Hindley-Milner type inference
//! ([`inferencer`]) over an interned, hash-consed type universe
//! ([`types`]) unified through a union-find forest ([`unifier`]).
//!
//! Resolution and inference never abort on the first problem: every failure
//! is recorded into a [`corec_util::diagnostic::Handler`] and the walk keeps
//! going, so a caller gets every diagnostic a module produces in one pass.

pub mod error;
pub mod inferencer;
pub mod resolver;
pub mod scope;
pub mod types;
pub mod unifier;

pub use error::{CoreError, CoreResult};
pub use inferencer::Inferencer;
pub use resolver::{EnumInfo, GlobalTable, ItemKind, Resolver, StructInfo};
pub use types::{BuiltinKind, Domain, Type, TypeContext};
pub use unifier::{TypeError, Unifier};

use corec_ast::Module;
use corec_util::diagnostic::Handler;

/// Run name resolution followed by type inference over a whole compilation
/// unit, returning the global item table built along the way.
pub fn analyze(handler: &Handler, modules: &mut [Module]) -> GlobalTable {
    tracing::debug!(modules = modules.len(), "starting semantic analysis");

    let mut resolver = Resolver::new(handler);
    resolver.resolve_modules(modules);
    let globals = resolver.into_globals();

    if handler.has_errors() {
        tracing::debug!(errors = handler.error_count(), "name resolution failed, skipping inference");
        return globals;
    }

    let mut inferencer = Inferencer::new(handler, &globals, modules);
    inferencer.infer(modules);
    tracing::debug!(errors = handler.error_count(), "semantic analysis finished");

    globals
}

#[cfg(test)]
mod tests {
    use super::*;
    use corec_ast::*;
    use corec_util::{DefIdGenerator, Span, Symbol};

    #[test]
    fn analyze_reports_undefined_names_without_panicking() {
        let handler = Handler::new();
        let gen = DefIdGenerator::new();
        let mut modules = vec![Module {
            path: Path::single(Symbol::intern("main"), Span::DUMMY),
            items: vec![Item::Fn(FnItem {
                id: gen.next(),
                name: Symbol::intern("main"),
                visibility: Visibility::Private,
                generics: vec![],
                params: vec![],
                ret_type: None,
                body: Block {
                    stmts: vec![Stmt::Expr(Expr::DeclRef(DeclRefExpr {
                        name: Path::single(Symbol::intern("missing"), Span::DUMMY),
                        decl: None,
                        span: Span::DUMMY,
                        ty: fresh_slot(),
                    }))],
                    span: Span::DUMMY,
                },
                is_method: false,
                parent: None,
                span: Span::DUMMY,
            })],
            span: Span::DUMMY,
        }];

        let globals = analyze(&handler, &mut modules);
        assert!(handler.has_errors());
        assert!(globals.items.contains_key(&Symbol::intern("main")));
    }
}
