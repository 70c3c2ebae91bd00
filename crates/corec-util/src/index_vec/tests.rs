//! Tests for the arena `IndexVec`, phrased against the two handle kinds
//! that actually use it: a type-universe handle and a scope rib id.

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HandleId(u32);

impl Idx for HandleId {
    fn from_usize(idx: usize) -> Self {
        assert!(idx <= u32::MAX as usize);
        HandleId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[test]
fn new_arena_is_empty() {
    let arena: IndexVec<HandleId, &str> = IndexVec::new();
    assert!(arena.is_empty());
    assert_eq!(arena.len(), 0);
}

#[test]
fn push_returns_the_handle_to_look_the_value_up_by() {
    let mut arena: IndexVec<HandleId, &str> = IndexVec::new();
    let a = arena.push("i32");
    let b = arena.push("bool");

    assert_eq!(arena[a], "i32");
    assert_eq!(arena[b], "bool");
    assert_eq!(arena.len(), 2);
}

#[test]
fn handles_are_assigned_in_push_order() {
    let mut arena: IndexVec<HandleId, &str> = IndexVec::new();
    let a = arena.push("first");
    let b = arena.push("second");

    assert_eq!(a, HandleId(0));
    assert_eq!(b, HandleId(1));
}

#[test]
fn get_returns_none_past_the_end() {
    let mut arena: IndexVec<HandleId, &str> = IndexVec::new();
    arena.push("only");

    assert_eq!(arena.get(HandleId(0)), Some(&"only"));
    assert_eq!(arena.get(HandleId(5)), None);
}

#[test]
fn index_mut_overwrites_in_place() {
    let mut arena: IndexVec<HandleId, i32> = IndexVec::new();
    let id = arena.push(1);
    arena[id] = 2;
    assert_eq!(arena[id], 2);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn indexing_past_the_end_panics() {
    let arena: IndexVec<HandleId, i32> = IndexVec::new();
    let _ = arena[HandleId(0)];
}

#[test]
fn default_is_an_empty_arena() {
    let arena: IndexVec<HandleId, i32> = IndexVec::default();
    assert!(arena.is_empty());
}

#[test]
fn clone_is_independent_of_the_original() {
    let mut arena: IndexVec<HandleId, i32> = IndexVec::new();
    let id = arena.push(10);

    let cloned = arena.clone();
    arena[id] = 99;

    assert_eq!(arena[id], 99);
    assert_eq!(cloned[id], 10);
}

#[test]
fn many_pushes_preserve_earlier_handles() {
    let mut arena: IndexVec<HandleId, i32> = IndexVec::new();
    let handles: Vec<_> = (0..200).map(|v| arena.push(v)).collect();

    for (i, id) in handles.iter().enumerate() {
        assert_eq!(arena[*id], i as i32);
    }
}
