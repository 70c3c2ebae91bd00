//! Identity for every binding site in the node set: functions, struct and
//! enum declarations, fields, variants, params, generics, and local `let`s
//! each carry a `DefId`, minted once where the node is built and never
//! reused. Name resolution's only job is producing a map from a source
//! name to one of these; type inference never looks at a name again once
//! it has the id.

use crate::Idx;
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefId(pub u32);

impl Idx for DefId {
    fn from_usize(idx: usize) -> Self {
        DefId(idx as u32)
    }
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Mints a fresh, globally unique `DefId` for every node that declares a
/// name. A single generator is shared across every module in a
/// compilation unit, so two functions in different files never collide.
pub struct DefIdGenerator {
    counter: AtomicU32,
}

impl DefIdGenerator {
    pub fn new() -> Self {
        Self { counter: AtomicU32::new(0) }
    }

    pub fn next(&self) -> DefId {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        if id == u32::MAX {
            panic!("DefId overflow! Compiler reached maximum number of definitions.");
        }
        DefId(id)
    }
}

impl Default for DefIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successive_calls_never_repeat_an_id() {
        let gen = DefIdGenerator::new();
        let a = gen.next();
        let b = gen.next();
        assert_ne!(a, b);
    }

    #[test]
    fn a_shared_generator_produces_ids_usable_across_modules() {
        let gen = DefIdGenerator::new();
        let fn_in_module_a = gen.next();
        let fn_in_module_b = gen.next();
        assert_ne!(fn_in_module_a, fn_in_module_b);
    }
}
