//! The scope stack ("rib" chain) name resolution walks over.

use corec_util::{DefId, Idx, IndexVec, Symbol};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RibId(pub u32);

impl Idx for RibId {
    fn from_usize(idx: usize) -> Self {
        RibId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
pub struct Rib {
    pub bindings: HashMap<Symbol, DefId>,
    pub parent: Option<RibId>,
    pub kind: RibKind,
}

#[derive(Debug, Clone, Copy)]
pub enum RibKind {
    Module,
    Function,
    Block,
    /// `label` is `None` for an unlabeled loop.
    Loop(Option<Symbol>),
}

/// A stack of nested scopes, walked innermost-first on every lookup.
pub struct ScopeTree {
    pub ribs: IndexVec<RibId, Rib>,
    pub current_rib: RibId,
}

impl ScopeTree {
    pub fn new() -> Self {
        let mut ribs = IndexVec::new();
        let root = ribs.push(Rib { bindings: HashMap::new(), parent: None, kind: RibKind::Module });

        Self { ribs, current_rib: root }
    }

    pub fn enter_scope(&mut self, kind: RibKind) -> RibId {
        let new_rib =
            self.ribs.push(Rib { bindings: HashMap::new(), parent: Some(self.current_rib), kind });
        self.current_rib = new_rib;
        new_rib
    }

    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.ribs[self.current_rib].parent {
            self.current_rib = parent;
        }
    }

    pub fn add_binding(&mut self, name: Symbol, def_id: DefId) {
        self.ribs[self.current_rib].bindings.insert(name, def_id);
    }

    pub fn resolve(&self, name: Symbol) -> Option<DefId> {
        let mut rib_id = self.current_rib;

        loop {
            let rib = &self.ribs[rib_id];

            if let Some(&def_id) = rib.bindings.get(&name) {
                return Some(def_id);
            }

            match rib.parent {
                Some(parent) => rib_id = parent,
                None => return None,
            }
        }
    }

    /// The nearest enclosing loop rib's label, searched innermost-first.
    /// Returns `Some(None)` for the nearest unlabeled loop, `None` if there
    /// is no enclosing loop at all.
    pub fn innermost_loop(&self) -> Option<Option<Symbol>> {
        let mut rib_id = self.current_rib;
        loop {
            let rib = &self.ribs[rib_id];
            if let RibKind::Loop(label) = rib.kind {
                return Some(label);
            }
            rib_id = rib.parent?;
        }
    }

    /// Whether a loop with the given label (or any loop, if `label` is
    /// `None`) encloses the current scope.
    pub fn has_enclosing_loop(&self, label: Option<Symbol>) -> bool {
        let mut rib_id = self.current_rib;
        loop {
            let rib = &self.ribs[rib_id];
            if let RibKind::Loop(loop_label) = rib.kind {
                if label.is_none() || label == loop_label {
                    return true;
                }
            }
            match rib.parent {
                Some(parent) => rib_id = parent,
                None => return false,
            }
        }
    }

    /// All names visible from the current scope, innermost rib first, for
    /// building "did you mean" suggestions.
    pub fn visible_names(&self) -> Vec<Symbol> {
        let mut names = Vec::new();
        let mut rib_id = Some(self.current_rib);
        while let Some(id) = rib_id {
            let rib = &self.ribs[id];
            names.extend(rib.bindings.keys().copied());
            rib_id = rib.parent;
        }
        names
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corec_util::DefIdGenerator;

    #[test]
    fn resolve_finds_innermost_binding_first() {
        let gen = DefIdGenerator::new();
        let mut tree = ScopeTree::new();
        let name = Symbol::intern("x");
        let outer_id = gen.next();
        tree.add_binding(name, outer_id);

        tree.enter_scope(RibKind::Block);
        let inner_id = gen.next();
        tree.add_binding(name, inner_id);

        assert_eq!(tree.resolve(name), Some(inner_id));
        tree.exit_scope();
        assert_eq!(tree.resolve(name), Some(outer_id));
    }

    #[test]
    fn exit_scope_at_root_is_a_no_op() {
        let mut tree = ScopeTree::new();
        tree.exit_scope();
        assert_eq!(tree.current_rib, RibId(0));
    }

    #[test]
    fn has_enclosing_loop_respects_labels() {
        let mut tree = ScopeTree::new();
        assert!(!tree.has_enclosing_loop(None));

        let label = Symbol::intern("outer");
        tree.enter_scope(RibKind::Loop(Some(label)));
        assert!(tree.has_enclosing_loop(None));
        assert!(tree.has_enclosing_loop(Some(label)));
        assert!(!tree.has_enclosing_loop(Some(Symbol::intern("other"))));
    }
}
