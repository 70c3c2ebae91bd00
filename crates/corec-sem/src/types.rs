//! The interned type universe.
//!
//! Every type is hash-consed: structurally identical factory calls return
//! the same [`TypeHandle`], so type identity is handle equality everywhere
//! except `Var`, whose identity is its own integer and whose domain
//! narrows in place as the unifier runs (see [`TypeContext::set_var_domain`]).

use corec_ast::TypeHandle;
use corec_util::{DefId, IndexVec, Symbol};
use rustc_hash::FxHashMap;
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Char,
    String,
    Range,
    Null,
}

impl BuiltinKind {
    pub fn is_integer(self) -> bool {
        use BuiltinKind::*;
        matches!(self, I8 | I16 | I32 | I64 | U8 | U16 | U32 | U64)
    }

    pub fn is_float(self) -> bool {
        matches!(self, BuiltinKind::F32 | BuiltinKind::F64)
    }

    /// The builtin a source-level type name denotes, if it is one.
    pub fn from_name(name: &str) -> Option<BuiltinKind> {
        use BuiltinKind::*;
        Some(match name {
            "i8" => I8,
            "i16" => I16,
            "i32" => I32,
            "i64" => I64,
            "u8" => U8,
            "u16" => U16,
            "u32" => U32,
            "u64" => U64,
            "f32" => F32,
            "f64" => F64,
            "bool" => Bool,
            "char" => Char,
            "string" => String,
            "range" => Range,
            "null" => Null,
            _ => return None,
        })
    }
}

/// The set of concrete shapes a type variable may resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Any,
    Int,
    Float,
    Adt,
}

impl Domain {
    /// `self ∩ other`, or `None` if the intersection is empty.
    pub fn intersect(self, other: Domain) -> Option<Domain> {
        use Domain::*;
        match (self, other) {
            (Any, x) | (x, Any) => Some(x),
            (Int, Int) => Some(Int),
            (Float, Float) => Some(Float),
            (Adt, Adt) => Some(Adt),
            _ => None,
        }
    }

    /// Whether a concrete type lies within this domain.
    pub fn accepts(self, ty: &Type) -> bool {
        match self {
            Domain::Any => true,
            Domain::Int => matches!(ty, Type::Builtin(k) if k.is_integer()),
            Domain::Float => matches!(ty, Type::Builtin(k) if k.is_float()),
            Domain::Adt => matches!(ty, Type::Adt { .. }),
        }
    }
}

/// A structural type key. `Var` is intentionally excluded: every
/// `fresh_var` call allocates a new slot rather than consulting this table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Builtin(BuiltinKind),
    /// A struct or enum, identified by name plus its declaration.
    Adt { name: Symbol, decl: DefId },
    Tuple(Vec<TypeHandle>),
    Fun { params: Vec<TypeHandle>, ret: TypeHandle },
    Ptr(TypeHandle),
    Ref(TypeHandle),
    /// An inference variable. Domain lives in [`TypeContext`]'s side table,
    /// not here, so that narrowing a domain never changes this handle's key.
    Var(u32),
    /// A generic parameter, referring back to its declaring item.
    Generic(DefId),
    Applied { base: TypeHandle, args: Vec<TypeHandle> },
    /// Poisoning sentinel: unifies with anything, suppresses cascades.
    Err,
}

/// Process-scoped arena interning every type reachable during a compilation.
pub struct TypeContext {
    arena: IndexVec<TypeHandle, Type>,
    interned: FxHashMap<Type, TypeHandle>,
    var_domains: RefCell<Vec<Domain>>,
    err_handle: TypeHandle,
}

impl TypeContext {
    pub fn new() -> Self {
        let mut arena = IndexVec::new();
        let err_handle = arena.push(Type::Err);
        let mut interned = FxHashMap::default();
        interned.insert(Type::Err, err_handle);

        Self { arena, interned, var_domains: RefCell::new(Vec::new()), err_handle }
    }

    fn intern(&mut self, ty: Type) -> TypeHandle {
        if let Some(&handle) = self.interned.get(&ty) {
            return handle;
        }
        let handle = self.arena.push(ty.clone());
        self.interned.insert(ty, handle);
        handle
    }

    pub fn builtin(&mut self, kind: BuiltinKind) -> TypeHandle {
        self.intern(Type::Builtin(kind))
    }

    pub fn adt(&mut self, name: Symbol, decl: DefId) -> TypeHandle {
        self.intern(Type::Adt { name, decl })
    }

    pub fn tuple(&mut self, elems: Vec<TypeHandle>) -> TypeHandle {
        self.intern(Type::Tuple(elems))
    }

    pub fn fun(&mut self, params: Vec<TypeHandle>, ret: TypeHandle) -> TypeHandle {
        self.intern(Type::Fun { params, ret })
    }

    pub fn ptr(&mut self, pointee: TypeHandle) -> TypeHandle {
        self.intern(Type::Ptr(pointee))
    }

    pub fn reference(&mut self, pointee: TypeHandle) -> TypeHandle {
        self.intern(Type::Ref(pointee))
    }

    pub fn generic(&mut self, param_decl: DefId) -> TypeHandle {
        self.intern(Type::Generic(param_decl))
    }

    pub fn applied(&mut self, base: TypeHandle, args: Vec<TypeHandle>) -> TypeHandle {
        self.intern(Type::Applied { base, args })
    }

    pub fn err(&self) -> TypeHandle {
        self.err_handle
    }

    /// Allocate a new, never-interned type variable with the given domain.
    pub fn fresh_var(&mut self, domain: Domain) -> TypeHandle {
        let id = self.var_domains.borrow().len() as u32;
        self.var_domains.borrow_mut().push(domain);
        // Pushed directly: a Var's identity is its integer, so it must
        // never share a handle with another Var even if domains match.
        self.arena.push(Type::Var(id))
    }

    pub fn domain_of_var(&self, id: u32) -> Domain {
        self.var_domains.borrow()[id as usize]
    }

    /// Narrow a variable's domain after a successful unification.
    pub fn set_var_domain(&self, id: u32, domain: Domain) {
        self.var_domains.borrow_mut()[id as usize] = domain;
    }

    pub fn get(&self, handle: TypeHandle) -> &Type {
        &self.arena[handle]
    }

    /// Clear all interned state. Handles from before a reset must not be used again.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structurally_identical_keys_share_a_handle() {
        let mut ctx = TypeContext::new();
        let a = ctx.builtin(BuiltinKind::I32);
        let b = ctx.builtin(BuiltinKind::I32);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_builtins_get_distinct_handles() {
        let mut ctx = TypeContext::new();
        let i32_ty = ctx.builtin(BuiltinKind::I32);
        let f64_ty = ctx.builtin(BuiltinKind::F64);
        assert_ne!(i32_ty, f64_ty);
    }

    #[test]
    fn fresh_var_never_aliases_even_with_same_domain() {
        let mut ctx = TypeContext::new();
        let v1 = ctx.fresh_var(Domain::Int);
        let v2 = ctx.fresh_var(Domain::Int);
        assert_ne!(v1, v2);
    }

    #[test]
    fn tuple_identity_is_structural_over_elements() {
        let mut ctx = TypeContext::new();
        let i32_ty = ctx.builtin(BuiltinKind::I32);
        let bool_ty = ctx.builtin(BuiltinKind::Bool);
        let t1 = ctx.tuple(vec![i32_ty, bool_ty]);
        let t2 = ctx.tuple(vec![i32_ty, bool_ty]);
        assert_eq!(t1, t2);
    }

    #[test]
    fn domain_intersection_table() {
        assert_eq!(Domain::Any.intersect(Domain::Int), Some(Domain::Int));
        assert_eq!(Domain::Int.intersect(Domain::Float), None);
        assert_eq!(Domain::Adt.intersect(Domain::Adt), Some(Domain::Adt));
    }

    #[test]
    fn from_name_recognizes_every_builtin_spelling() {
        assert_eq!(BuiltinKind::from_name("i32"), Some(BuiltinKind::I32));
        assert_eq!(BuiltinKind::from_name("string"), Some(BuiltinKind::String));
        assert_eq!(BuiltinKind::from_name("Point"), None);
    }

    #[test]
    fn reset_clears_interned_state() {
        let mut ctx = TypeContext::new();
        ctx.builtin(BuiltinKind::I32);
        ctx.reset();
        // after reset, the arena only holds the Err sentinel again
        assert_eq!(ctx.get(ctx.err()), &Type::Err);
    }
}
