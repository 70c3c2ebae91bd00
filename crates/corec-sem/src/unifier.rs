//! Union-find unification over the interned type universe.
//!
//! Only `Var` nodes participate in the union-find proper; every other type
//! is already canonical by construction (hash-consing), so unifying two
//! concrete types just recurses structurally until it bottoms out at a
//! `Var`, a kind mismatch, or `Err` (which swallows everything to stop a
//! single mistake from cascading into a wall of follow-on errors).
//!
//! [`Unifier`] holds only the union-find forest, not the type context
//! itself: a type inference pass needs `TypeContext` for plain interning
//! (`builtin`, `tuple`, ...) at the same time it needs to unify, and a
//! struct that borrowed the context exclusively couldn't share it.

use crate::types::{Domain, Type, TypeContext};
use corec_ast::TypeHandle;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum TypeError {
    Mismatch(TypeHandle, TypeHandle),
    Occurs(TypeHandle, TypeHandle),
    Domain(TypeHandle, TypeHandle),
    Arity(TypeHandle, TypeHandle),
}

struct Node {
    parent: Option<TypeHandle>,
    size: u32,
}

/// Owns the union-find forest over `Var` handles for one inference pass.
#[derive(Default)]
pub struct Unifier {
    nodes: HashMap<u32, Node>,
}

impl Unifier {
    pub fn new() -> Self {
        Self { nodes: HashMap::new() }
    }

    fn node_id(ctx: &TypeContext, handle: TypeHandle) -> Option<u32> {
        match ctx.get(handle) {
            Type::Var(id) => Some(*id),
            _ => None,
        }
    }

    /// Follow the union-find chain to this handle's current representative,
    /// compressing the path as it goes.
    pub fn find(&mut self, ctx: &TypeContext, handle: TypeHandle) -> TypeHandle {
        let Some(id) = Self::node_id(ctx, handle) else { return handle };
        let parent = self.nodes.get(&id).and_then(|n| n.parent);
        match parent {
            None => handle,
            Some(p) => {
                let root = self.find(ctx, p);
                self.nodes.entry(id).or_insert(Node { parent: None, size: 1 }).parent = Some(root);
                root
            }
        }
    }

    fn size_of(&self, ctx: &TypeContext, handle: TypeHandle) -> u32 {
        Self::node_id(ctx, handle).and_then(|id| self.nodes.get(&id)).map_or(1, |n| n.size)
    }

    fn occurs(&mut self, ctx: &TypeContext, var_handle: TypeHandle, in_handle: TypeHandle) -> bool {
        let root = self.find(ctx, in_handle);
        if root == var_handle {
            return true;
        }
        match ctx.get(root).clone() {
            Type::Tuple(elems) => elems.iter().any(|&e| self.occurs(ctx, var_handle, e)),
            Type::Fun { params, ret } => {
                params.iter().any(|&p| self.occurs(ctx, var_handle, p))
                    || self.occurs(ctx, var_handle, ret)
            }
            Type::Ptr(inner) | Type::Ref(inner) => self.occurs(ctx, var_handle, inner),
            Type::Applied { base, args } => {
                self.occurs(ctx, var_handle, base)
                    || args.iter().any(|&a| self.occurs(ctx, var_handle, a))
            }
            _ => false,
        }
    }

    /// Unify two types, narrowing domains and binding variables as needed.
    pub fn unify(
        &mut self,
        ctx: &mut TypeContext,
        a: TypeHandle,
        b: TypeHandle,
    ) -> Result<(), TypeError> {
        let ra = self.find(ctx, a);
        let rb = self.find(ctx, b);
        if ra == rb {
            return Ok(());
        }

        if ra == ctx.err() || rb == ctx.err() {
            return Ok(());
        }

        let a_is_var = Self::node_id(ctx, ra);
        let b_is_var = Self::node_id(ctx, rb);

        match (a_is_var, b_is_var) {
            (Some(id_a), Some(id_b)) => {
                let domain = ctx
                    .domain_of_var(id_a)
                    .intersect(ctx.domain_of_var(id_b))
                    .ok_or(TypeError::Domain(ra, rb))?;

                let (root_id, child_id) = if self.size_of(ctx, ra) >= self.size_of(ctx, rb) {
                    (id_a, id_b)
                } else {
                    (id_b, id_a)
                };
                let root_handle = if root_id == id_a { ra } else { rb };
                let new_size = self.size_of(ctx, ra) + self.size_of(ctx, rb);

                self.nodes.entry(child_id).or_insert(Node { parent: None, size: 1 }).parent =
                    Some(root_handle);
                self.nodes.entry(root_id).or_insert(Node { parent: None, size: 1 }).size =
                    new_size;
                ctx.set_var_domain(root_id, domain);
                Ok(())
            }
            (Some(id), None) => self.bind_var(ctx, id, ra, rb),
            (None, Some(id)) => self.bind_var(ctx, id, rb, ra),
            (None, None) => self.unify_concrete(ctx, ra, rb),
        }
    }

    fn bind_var(
        &mut self,
        ctx: &mut TypeContext,
        var_id: u32,
        var_handle: TypeHandle,
        concrete: TypeHandle,
    ) -> Result<(), TypeError> {
        if self.occurs(ctx, var_handle, concrete) {
            return Err(TypeError::Occurs(var_handle, concrete));
        }
        let domain = ctx.domain_of_var(var_id);
        if !domain.accepts(ctx.get(concrete)) {
            return Err(TypeError::Domain(var_handle, concrete));
        }
        self.nodes.entry(var_id).or_insert(Node { parent: None, size: 1 }).parent = Some(concrete);
        Ok(())
    }

    fn unify_concrete(
        &mut self,
        ctx: &mut TypeContext,
        a: TypeHandle,
        b: TypeHandle,
    ) -> Result<(), TypeError> {
        let ty_a = ctx.get(a).clone();
        let ty_b = ctx.get(b).clone();

        match (ty_a, ty_b) {
            (Type::Builtin(k1), Type::Builtin(k2)) if k1 == k2 => Ok(()),
            (Type::Generic(d1), Type::Generic(d2)) if d1 == d2 => Ok(()),
            (Type::Adt { decl: d1, .. }, Type::Adt { decl: d2, .. }) if d1 == d2 => Ok(()),
            (Type::Ptr(p1), Type::Ptr(p2)) => self.unify(ctx, p1, p2),
            (Type::Ref(p1), Type::Ref(p2)) => self.unify(ctx, p1, p2),
            (Type::Tuple(e1), Type::Tuple(e2)) => {
                if e1.len() != e2.len() {
                    return Err(TypeError::Arity(a, b));
                }
                for (x, y) in e1.iter().zip(e2.iter()) {
                    self.unify(ctx, *x, *y)?;
                }
                Ok(())
            }
            (Type::Fun { params: p1, ret: r1 }, Type::Fun { params: p2, ret: r2 }) => {
                if p1.len() != p2.len() {
                    return Err(TypeError::Arity(a, b));
                }
                for (x, y) in p1.iter().zip(p2.iter()) {
                    self.unify(ctx, *x, *y)?;
                }
                self.unify(ctx, r1, r2)
            }
            (Type::Applied { base: b1, args: a1 }, Type::Applied { base: b2, args: a2 }) => {
                if a1.len() != a2.len() {
                    return Err(TypeError::Arity(a, b));
                }
                self.unify(ctx, b1, b2)?;
                for (x, y) in a1.iter().zip(a2.iter()) {
                    self.unify(ctx, *x, *y)?;
                }
                Ok(())
            }
            _ => Err(TypeError::Mismatch(a, b)),
        }
    }

    /// The final handle a type resolves to: a concrete type with every
    /// reachable `Var` replaced by its union-find representative.
    pub fn resolve(&mut self, ctx: &mut TypeContext, handle: TypeHandle) -> TypeHandle {
        let root = self.find(ctx, handle);
        match ctx.get(root).clone() {
            Type::Tuple(elems) => {
                let resolved: Vec<_> = elems.iter().map(|&e| self.resolve(ctx, e)).collect();
                ctx.tuple(resolved)
            }
            Type::Fun { params, ret } => {
                let params: Vec<_> = params.iter().map(|&p| self.resolve(ctx, p)).collect();
                let ret = self.resolve(ctx, ret);
                ctx.fun(params, ret)
            }
            Type::Ptr(inner) => {
                let inner = self.resolve(ctx, inner);
                ctx.ptr(inner)
            }
            Type::Ref(inner) => {
                let inner = self.resolve(ctx, inner);
                ctx.reference(inner)
            }
            Type::Applied { base, args } => {
                let base = self.resolve(ctx, base);
                let args: Vec<_> = args.iter().map(|&a| self.resolve(ctx, a)).collect();
                ctx.applied(base, args)
            }
            _ => root,
        }
    }

    /// The domain a handle's root currently carries, or `Any` for a
    /// concrete type (which accepts no further narrowing anyway).
    pub fn domain_of(&mut self, ctx: &TypeContext, handle: TypeHandle) -> Domain {
        let root = self.find(ctx, handle);
        match Self::node_id(ctx, root) {
            Some(id) => ctx.domain_of_var(id),
            None => Domain::Any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuiltinKind;

    #[test]
    fn unifying_a_var_with_a_builtin_resolves_to_it() {
        let mut ctx = TypeContext::new();
        let i32_ty = ctx.builtin(BuiltinKind::I32);
        let var = ctx.fresh_var(Domain::Any);
        let mut u = Unifier::new();
        u.unify(&mut ctx, var, i32_ty).unwrap();
        assert_eq!(u.resolve(&mut ctx, var), i32_ty);
    }

    #[test]
    fn two_vars_unify_and_share_a_representative() {
        let mut ctx = TypeContext::new();
        let v1 = ctx.fresh_var(Domain::Any);
        let v2 = ctx.fresh_var(Domain::Any);
        let mut u = Unifier::new();
        u.unify(&mut ctx, v1, v2).unwrap();
        assert_eq!(u.find(&ctx, v1), u.find(&ctx, v2));
    }

    #[test]
    fn int_domain_rejects_float() {
        let mut ctx = TypeContext::new();
        let f64_ty = ctx.builtin(BuiltinKind::F64);
        let var = ctx.fresh_var(Domain::Int);
        let mut u = Unifier::new();
        assert!(matches!(u.unify(&mut ctx, var, f64_ty), Err(TypeError::Domain(_, _))));
    }

    #[test]
    fn mismatched_builtins_fail() {
        let mut ctx = TypeContext::new();
        let i32_ty = ctx.builtin(BuiltinKind::I32);
        let bool_ty = ctx.builtin(BuiltinKind::Bool);
        let mut u = Unifier::new();
        assert!(matches!(u.unify(&mut ctx, i32_ty, bool_ty), Err(TypeError::Mismatch(_, _))));
    }

    #[test]
    fn occurs_check_rejects_self_containing_tuple() {
        let mut ctx = TypeContext::new();
        let var = ctx.fresh_var(Domain::Any);
        let tuple = ctx.tuple(vec![var]);
        let mut u = Unifier::new();
        assert!(matches!(u.unify(&mut ctx, var, tuple), Err(TypeError::Occurs(_, _))));
    }

    #[test]
    fn err_swallows_any_mismatch() {
        let mut ctx = TypeContext::new();
        let err = ctx.err();
        let bool_ty = ctx.builtin(BuiltinKind::Bool);
        let mut u = Unifier::new();
        assert!(u.unify(&mut ctx, err, bool_ty).is_ok());
    }

    #[test]
    fn two_vars_narrow_each_others_domain_on_union() {
        let mut ctx = TypeContext::new();
        let v1 = ctx.fresh_var(Domain::Any);
        let v2 = ctx.fresh_var(Domain::Int);
        let mut u = Unifier::new();
        u.unify(&mut ctx, v1, v2).unwrap();
        assert_eq!(u.domain_of(&ctx, v1), Domain::Int);
    }
}
