//! Type inference.
//!
//! Two passes over an already-resolved module set. Collection walks every
//! function body post-order, assigning each expression a fresh type
//! variable and unifying as it goes. Finalization walks the same tree again,
//! replacing each slot with its unifier representative and defaulting any
//! `Var` that never got constrained past `Int`/`Float` to `i32`/`f64`.
//!
//! Generic items are instantiated fresh at every use site: a call to a
//! generic function, or a construction of a generic struct, gets its own
//! set of fresh type variables standing in for that item's parameters.

use crate::resolver::GlobalTable;
use crate::types::{BuiltinKind, Domain, Type, TypeContext};
use crate::unifier::{TypeError, Unifier};
use corec_ast::*;
use corec_util::diagnostic::{DiagnosticCode, Handler};
use corec_util::{DefId, Span, Symbol};
use std::collections::{HashMap, HashSet};

#[derive(Clone)]
struct FnSig {
    generics: Vec<(Symbol, DefId)>,
    params: Vec<TypeExpr>,
    ret: TypeExpr,
    parent: Option<DefId>,
}

#[derive(Clone)]
struct StructSig {
    name: Symbol,
    generics: Vec<(Symbol, DefId)>,
    fields: Vec<(Symbol, TypeExpr)>,
}

#[derive(Clone)]
struct EnumSig {
    name: Symbol,
    generics: Vec<(Symbol, DefId)>,
    variants: HashMap<Symbol, VariantData>,
}

pub struct Inferencer<'a> {
    handler: &'a Handler,
    globals: &'a GlobalTable,
    pub ctx: TypeContext,
    unifier: Unifier,
    env: HashMap<DefId, TypeHandle>,
    fn_sigs: HashMap<DefId, FnSig>,
    struct_sigs: HashMap<DefId, StructSig>,
    enum_sigs: HashMap<DefId, EnumSig>,
    current_ret: Vec<TypeHandle>,
    expected_stack: Vec<TypeHandle>,
}

impl<'a> Inferencer<'a> {
    pub fn new(handler: &'a Handler, globals: &'a GlobalTable, modules: &[Module]) -> Self {
        let (fn_sigs, struct_sigs, enum_sigs) = collect_signatures(modules);
        Self {
            handler,
            globals,
            ctx: TypeContext::new(),
            unifier: Unifier::new(),
            env: HashMap::new(),
            fn_sigs,
            struct_sigs,
            enum_sigs,
            current_ret: Vec::new(),
            expected_stack: Vec::new(),
        }
    }

    /// Run both passes over every module.
    pub fn infer(&mut self, modules: &mut [Module]) {
        for module in modules.iter_mut() {
            for item in &mut module.items {
                self.collect_item(item);
            }
        }
        for module in modules.iter_mut() {
            for item in &mut module.items {
                self.finalize_item(item);
            }
        }
    }

    // ---- type lowering ----

    fn lower(
        &mut self,
        ty: &TypeExpr,
        generics: &[(Symbol, DefId)],
        subst: &HashMap<DefId, TypeHandle>,
    ) -> TypeHandle {
        match ty {
            TypeExpr::Inferred => self.ctx.fresh_var(Domain::Any),
            TypeExpr::Named { path, args } => {
                let head = *path.segments.last().unwrap();
                if let Some(kind) = BuiltinKind::from_name(head.as_str()) {
                    return self.ctx.builtin(kind);
                }
                if let Some((_, gid)) = generics.iter().find(|(n, _)| *n == head) {
                    return subst.get(gid).copied().unwrap_or_else(|| self.ctx.generic(*gid));
                }
                let Some(&decl) = self.globals.items.get(&head) else { return self.ctx.err() };
                let base = self.ctx.adt(head, decl);
                if args.is_empty() {
                    return base;
                }
                let arg_handles: Vec<_> =
                    args.iter().map(|a| self.lower(a, generics, subst)).collect();
                self.ctx.applied(base, arg_handles)
            }
            TypeExpr::Tuple(elems) => {
                let handles: Vec<_> = elems.iter().map(|e| self.lower(e, generics, subst)).collect();
                self.ctx.tuple(handles)
            }
            TypeExpr::Ptr(inner) => {
                let inner = self.lower(inner, generics, subst);
                self.ctx.ptr(inner)
            }
            TypeExpr::Ref(inner) => {
                let inner = self.lower(inner, generics, subst);
                self.ctx.reference(inner)
            }
            TypeExpr::Fn(params, ret) => {
                let params: Vec<_> = params.iter().map(|p| self.lower(p, generics, subst)).collect();
                let ret = self.lower(ret, generics, subst);
                self.ctx.fun(params, ret)
            }
        }
    }

    fn adt_self(&mut self, name: Symbol, decl: DefId, generics: &[(Symbol, DefId)]) -> TypeHandle {
        let base = self.ctx.adt(name, decl);
        if generics.is_empty() {
            return base;
        }
        let args: Vec<_> = generics.iter().map(|(_, gid)| self.ctx.generic(*gid)).collect();
        self.ctx.applied(base, args)
    }

    fn adt_instance(
        &mut self,
        name: Symbol,
        decl: DefId,
        generics: &[(Symbol, DefId)],
        subst: &HashMap<DefId, TypeHandle>,
    ) -> TypeHandle {
        let base = self.ctx.adt(name, decl);
        if generics.is_empty() {
            return base;
        }
        let args: Vec<_> = generics.iter().map(|(_, gid)| subst[gid]).collect();
        self.ctx.applied(base, args)
    }

    fn peel_adt(&self, handle: TypeHandle) -> Option<(DefId, Vec<TypeHandle>)> {
        match self.ctx.get(handle) {
            Type::Adt { decl, .. } => Some((*decl, Vec::new())),
            Type::Applied { base, args } => match self.ctx.get(*base) {
                Type::Adt { decl, .. } => Some((*decl, args.clone())),
                _ => None,
            },
            Type::Ref(inner) => self.peel_adt(*inner),
            _ => None,
        }
    }

    fn render(&mut self, handle: TypeHandle) -> String {
        let root = self.unifier.find(&self.ctx, handle);
        match self.ctx.get(root).clone() {
            Type::Builtin(k) => format!("{:?}", k).to_lowercase(),
            Type::Adt { name, .. } => name.as_str().to_string(),
            Type::Tuple(elems) => {
                let parts: Vec<_> = elems.iter().map(|&e| self.render(e)).collect();
                format!("({})", parts.join(", "))
            }
            Type::Fun { params, ret } => {
                let parts: Vec<_> = params.iter().map(|&p| self.render(p)).collect();
                format!("fn({}) -> {}", parts.join(", "), self.render(ret))
            }
            Type::Ptr(inner) => format!("ptr {}", self.render(inner)),
            Type::Ref(inner) => format!("ref {}", self.render(inner)),
            Type::Var(_) => "_".to_string(),
            Type::Generic(_) => "<generic>".to_string(),
            Type::Applied { base, args } => {
                let parts: Vec<_> = args.iter().map(|&a| self.render(a)).collect();
                format!("{}<{}>", self.render(base), parts.join(", "))
            }
            Type::Err => "<error>".to_string(),
        }
    }

    fn check(&mut self, expected: TypeHandle, actual: TypeHandle, span: Span) {
        if let Err(err) = self.unifier.unify(&mut self.ctx, expected, actual) {
            self.report_type_error(err, span);
        }
    }

    fn report_type_error(&mut self, err: TypeError, span: Span) {
        let (code, message) = match err {
            TypeError::Mismatch(a, b) => (
                DiagnosticCode::E_INFER_TYPE_MISMATCH,
                format!("expected `{}`, found `{}`", self.render(a), self.render(b)),
            ),
            TypeError::Occurs(a, b) => (
                DiagnosticCode::E_INFER_CYCLIC_TYPE,
                format!("`{}` would have to contain itself to unify with `{}`", self.render(a), self.render(b)),
            ),
            TypeError::Domain(a, b) => (
                DiagnosticCode::E_INFER_DOMAIN_MISMATCH,
                format!("`{}` is not in the domain expected by `{}`", self.render(b), self.render(a)),
            ),
            TypeError::Arity(a, b) => (
                DiagnosticCode::E_INFER_ARITY_MISMATCH,
                format!("`{}` and `{}` disagree on arity", self.render(a), self.render(b)),
            ),
        };
        self.handler.build_error(span, message).code(code).emit(self.handler);
    }

    // ---- collection ----

    fn collect_item(&mut self, item: &mut Item) {
        match item {
            Item::Fn(f) => self.collect_fn(f),
            Item::Struct(s) => {
                for m in &mut s.methods {
                    self.collect_fn(m);
                }
            }
            Item::Enum(e) => {
                for m in &mut e.methods {
                    self.collect_fn(m);
                }
            }
            Item::Const(c) => {
                let declared = self.lower(&c.ty, &[], &HashMap::new());
                let actual = self.collect_expr(&mut c.value);
                self.check(declared, actual, c.span);
            }
            Item::Static(s) => {
                let declared = self.lower(&s.ty, &[], &HashMap::new());
                let actual = self.collect_expr(&mut s.value);
                self.check(declared, actual, s.span);
            }
            Item::Use(_) => {}
        }
    }

    fn collect_fn(&mut self, f: &mut FnItem) {
        let Some(sig) = self.fn_sigs.get(&f.id).cloned() else { return };

        let mut generics = Vec::new();
        if let Some(parent) = sig.parent {
            if let Some(s) = self.struct_sigs.get(&parent).cloned() {
                generics.extend(s.generics.clone());
                let this_ty = self.adt_self(s.name, parent, &s.generics);
                let this_ref = self.ctx.reference(this_ty);
                self.env.insert(parent, this_ref);
            } else if let Some(e) = self.enum_sigs.get(&parent).cloned() {
                generics.extend(e.generics.clone());
                let this_ty = self.adt_self(e.name, parent, &e.generics);
                let this_ref = self.ctx.reference(this_ty);
                self.env.insert(parent, this_ref);
            }
        }
        generics.extend(sig.generics.clone());

        for p in &f.params {
            let ty = self.lower(&p.ty, &generics, &HashMap::new());
            self.env.insert(p.id, ty);
        }
        let ret_ty = self.lower(&sig.ret, &generics, &HashMap::new());
        self.current_ret.push(ret_ty);
        self.collect_block(&mut f.body);
        self.current_ret.pop();
    }

    fn collect_block(&mut self, block: &mut Block) {
        for stmt in &mut block.stmts {
            self.collect_stmt(stmt);
        }
    }

    fn collect_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Return(expr) => {
                let ret = *self.current_ret.last().unwrap_or(&self.ctx.err());
                let actual = match expr {
                    Some(e) => self.collect_expr(e),
                    None => self.ctx.builtin(BuiltinKind::Null),
                };
                self.check(ret, actual, Span::DUMMY);
            }
            Stmt::Defer(e) | Stmt::Expr(e) => {
                self.collect_expr(e);
            }
            Stmt::If(if_stmt) => self.collect_if(if_stmt),
            Stmt::While(w) => {
                let cond = self.collect_expr(&mut w.cond);
                let bool_ty = self.ctx.builtin(BuiltinKind::Bool);
                self.check(bool_ty, cond, w.body.span);
                self.collect_block(&mut w.body);
            }
            Stmt::For(f) => {
                let iter_ty = self.collect_expr(&mut f.iter);
                let range_ty = self.ctx.builtin(BuiltinKind::Range);
                self.check(range_ty, iter_ty, f.body.span);
                let binding_ty = self.ctx.fresh_var(Domain::Int);
                self.env.insert(f.binding_id, binding_ty);
                self.collect_block(&mut f.body);
            }
            Stmt::Decl(d) => {
                let declared = d.ty.as_ref().map(|t| self.lower(t, &[], &HashMap::new()));
                let init_ty = d.init.as_mut().map(|e| self.collect_expr(e));
                let final_ty = match (declared, init_ty) {
                    (Some(dt), Some(it)) => {
                        self.check(dt, it, d.span);
                        dt
                    }
                    (Some(dt), None) => dt,
                    (None, Some(it)) => it,
                    (None, None) => self.ctx.fresh_var(Domain::Any),
                };
                self.env.insert(d.id, final_ty);
            }
            Stmt::Break(_) | Stmt::Continue(_) => {}
        }
    }

    fn collect_if(&mut self, if_stmt: &mut IfStmt) {
        let cond = self.collect_expr(&mut if_stmt.cond);
        let bool_ty = self.ctx.builtin(BuiltinKind::Bool);
        self.check(bool_ty, cond, if_stmt.span);
        self.collect_block(&mut if_stmt.then_block);
        match if_stmt.else_clause.as_deref_mut() {
            Some(ElseClause::Block(b)) => self.collect_block(b),
            Some(ElseClause::If(nested)) => self.collect_if(nested),
            None => {}
        }
    }

    fn collect_expr(&mut self, expr: &mut Expr) -> TypeHandle {
        let handle = match expr {
            Expr::IntLiteral(_) => self.ctx.fresh_var(Domain::Int),
            Expr::FloatLiteral(_) => self.ctx.fresh_var(Domain::Float),
            Expr::BoolLiteral(_) => self.ctx.builtin(BuiltinKind::Bool),
            Expr::CharLiteral(_) => self.ctx.builtin(BuiltinKind::Char),
            Expr::StrLiteral(_) => self.ctx.builtin(BuiltinKind::String),
            Expr::RangeLiteral(r) => {
                let start = self.collect_expr(&mut r.start);
                let end = self.collect_expr(&mut r.end);
                self.check(start, end, r.span);
                self.ctx.builtin(BuiltinKind::Range)
            }
            Expr::TupleLiteral(t) => {
                let elems: Vec<_> = t.elems.iter_mut().map(|e| self.collect_expr(e)).collect();
                self.ctx.tuple(elems)
            }
            Expr::DeclRef(r) => r.decl.and_then(|d| self.env.get(&d).copied()).unwrap_or_else(|| self.ctx.err()),
            Expr::FunCall(call) => self.collect_call(call),
            Expr::BinaryOp(b) => self.collect_binary(b),
            Expr::UnaryOp(u) => self.collect_unary(u),
            Expr::AdtInit(init) => self.collect_adt_init(init),
            Expr::FieldAccess(f) => self.collect_field_access(f),
            Expr::MethodCall(m) => self.collect_method_call(m),
            Expr::Match(m) => self.collect_match(m),
            Expr::IntrinsicCall(i) => self.collect_intrinsic(i),
        };
        *expr.ty().borrow_mut() = handle;
        handle
    }

    fn collect_call(&mut self, call: &mut FunCallExpr) -> TypeHandle {
        let callee_ty = self.collect_expr(&mut call.callee);
        let arg_tys: Vec<_> = call.args.iter_mut().map(|a| self.collect_expr(a)).collect();

        if let Some(decl) = call.decl {
            let Some(sig) = self.fn_sigs.get(&decl).cloned() else { return self.ctx.err() };
            let mut subst = HashMap::new();
            for (_, gid) in &sig.generics {
                subst.insert(*gid, self.ctx.fresh_var(Domain::Any));
            }
            if sig.params.len() != arg_tys.len() {
                self.handler
                    .build_error(
                        call.span,
                        format!("expected {} argument(s), found {}", sig.params.len(), arg_tys.len()),
                    )
                    .code(DiagnosticCode::E_INFER_ARITY_MISMATCH)
                    .emit(self.handler);
                return self.ctx.err();
            }
            for (p, a) in sig.params.iter().zip(arg_tys.iter()) {
                let expected = self.lower(p, &sig.generics, &subst);
                self.check(expected, *a, call.span);
            }
            return self.lower(&sig.ret, &sig.generics, &subst);
        }

        let root = self.unifier.resolve(&mut self.ctx, callee_ty);
        match self.ctx.get(root).clone() {
            Type::Fun { params, ret } => {
                if params.len() != arg_tys.len() {
                    self.handler
                        .build_error(call.span, "argument count does not match this function's arity")
                        .code(DiagnosticCode::E_INFER_ARITY_MISMATCH)
                        .emit(self.handler);
                    return self.ctx.err();
                }
                for (p, a) in params.iter().zip(arg_tys.iter()) {
                    self.check(*p, *a, call.span);
                }
                ret
            }
            _ => {
                self.handler
                    .build_error(call.span, "this value cannot be called")
                    .code(DiagnosticCode::E_INFER_NOT_CALLABLE)
                    .emit(self.handler);
                self.ctx.err()
            }
        }
    }

    fn collect_binary(&mut self, b: &mut BinaryOpExpr) -> TypeHandle {
        let left = self.collect_expr(&mut b.left);
        let right = self.collect_expr(&mut b.right);
        let bool_ty = self.ctx.builtin(BuiltinKind::Bool);
        if b.op.is_logical() {
            self.check(bool_ty, left, b.span);
            self.check(bool_ty, right, b.span);
            bool_ty
        } else if b.op.is_comparison() {
            self.check(left, right, b.span);
            bool_ty
        } else if b.op.is_equality() {
            // Equality operands unify but the comparison itself yields Null,
            // not Bool - this mirrors an odd quirk of the source language.
            self.check(left, right, b.span);
            self.ctx.builtin(BuiltinKind::Null)
        } else {
            self.check(left, right, b.span);
            left
        }
    }

    fn collect_unary(&mut self, u: &mut UnaryOpExpr) -> TypeHandle {
        let operand = self.collect_expr(&mut u.operand);
        match u.op {
            UnOp::Neg => operand,
            UnOp::Not => {
                let bool_ty = self.ctx.builtin(BuiltinKind::Bool);
                self.check(bool_ty, operand, u.span);
                bool_ty
            }
            UnOp::Ref => self.ctx.reference(operand),
        }
    }

    fn collect_adt_init(&mut self, init: &mut AdtInitExpr) -> TypeHandle {
        let Some(decl) = init.decl else {
            let expected = self.expected_stack.last().copied();
            for member in &mut init.members {
                self.collect_expr(&mut member.value);
            }
            return expected.unwrap_or_else(|| self.ctx.fresh_var(Domain::Adt));
        };

        if let Some(sig) = self.struct_sigs.get(&decl).cloned() {
            let mut subst = HashMap::new();
            for (_, gid) in &sig.generics {
                subst.insert(*gid, self.ctx.fresh_var(Domain::Any));
            }
            let result_ty = self.adt_instance(sig.name, decl, &sig.generics, &subst);
            for member in &mut init.members {
                let field_ty =
                    sig.fields.iter().find(|(n, _)| *n == member.name).map(|(_, t)| t.clone());
                let expected = match &field_ty {
                    Some(t) => self.lower(t, &sig.generics, &subst),
                    None => self.ctx.fresh_var(Domain::Any),
                };
                self.expected_stack.push(expected);
                let value_ty = self.collect_expr(&mut member.value);
                self.expected_stack.pop();
                self.check(expected, value_ty, init.span);
            }
            result_ty
        } else if let Some(sig) = self.enum_sigs.get(&decl).cloned() {
            let mut subst = HashMap::new();
            for (_, gid) in &sig.generics {
                subst.insert(*gid, self.ctx.fresh_var(Domain::Any));
            }
            let result_ty = self.adt_instance(sig.name, decl, &sig.generics, &subst);
            if let Some(variant_name) = init.variant {
                if let Some(VariantData::Tuple(tys)) = sig.variants.get(&variant_name).cloned() {
                    if tys.len() != init.members.len() {
                        self.handler
                            .build_error(init.span, "variant payload arity mismatch")
                            .code(DiagnosticCode::E_INFER_VARIANT_ARITY_MISMATCH)
                            .emit(self.handler);
                    }
                    for (member, ty) in init.members.iter_mut().zip(tys.iter()) {
                        let expected = self.lower(ty, &sig.generics, &subst);
                        let value_ty = self.collect_expr(&mut member.value);
                        self.check(expected, value_ty, init.span);
                    }
                }
            }
            result_ty
        } else {
            self.ctx.err()
        }
    }

    fn collect_field_access(&mut self, f: &mut FieldAccessExpr) -> TypeHandle {
        let base_ty = self.collect_expr(&mut f.base);
        let root = self.unifier.resolve(&mut self.ctx, base_ty);
        let Some((decl, type_args)) = self.peel_adt(root) else {
            self.handler
                .build_error(f.span, "this type has no fields")
                .code(DiagnosticCode::E_INFER_UNKNOWN_FIELD)
                .emit(self.handler);
            return self.ctx.err();
        };
        let Some(sig) = self.struct_sigs.get(&decl).cloned() else {
            self.handler
                .build_error(f.span, format!("no field `{}` on this type", f.field))
                .code(DiagnosticCode::E_INFER_UNKNOWN_FIELD)
                .emit(self.handler);
            return self.ctx.err();
        };
        let Some((_, field_ty)) = sig.fields.iter().find(|(n, _)| *n == f.field) else {
            self.handler
                .build_error(f.span, format!("no field `{}` on `{}`", f.field, sig.name))
                .code(DiagnosticCode::E_INFER_UNKNOWN_FIELD)
                .emit(self.handler);
            return self.ctx.err();
        };
        f.decl = self.globals.structs.get(&decl).and_then(|si| si.fields.get(&f.field)).map(|fi| fi.decl);
        let subst: HashMap<DefId, TypeHandle> =
            sig.generics.iter().map(|(_, gid)| *gid).zip(type_args.iter().copied()).collect();
        self.lower(&field_ty.clone(), &sig.generics, &subst)
    }

    fn collect_method_call(&mut self, m: &mut MethodCallExpr) -> TypeHandle {
        let base_ty = self.collect_expr(&mut m.base);
        let arg_tys: Vec<_> = m.args.iter_mut().map(|a| self.collect_expr(a)).collect();
        let root = self.unifier.resolve(&mut self.ctx, base_ty);
        let Some((decl, type_args)) = self.peel_adt(root) else {
            self.handler
                .build_error(m.span, "this type has no methods")
                .code(DiagnosticCode::E_INFER_UNKNOWN_METHOD)
                .emit(self.handler);
            return self.ctx.err();
        };

        let methods = self
            .globals
            .structs
            .get(&decl)
            .map(|si| &si.methods)
            .or_else(|| self.globals.enums.get(&decl).map(|ei| &ei.methods));
        let Some(method_id) = methods.and_then(|ms| ms.get(&m.method).copied()) else {
            self.handler
                .build_error(m.span, format!("no method `{}` found", m.method))
                .code(DiagnosticCode::E_INFER_UNKNOWN_METHOD)
                .emit(self.handler);
            return self.ctx.err();
        };
        m.decl = Some(method_id);
        let Some(sig) = self.fn_sigs.get(&method_id).cloned() else { return self.ctx.err() };

        let parent_generics = self
            .struct_sigs
            .get(&decl)
            .map(|s| s.generics.clone())
            .or_else(|| self.enum_sigs.get(&decl).map(|s| s.generics.clone()))
            .unwrap_or_default();
        let mut subst: HashMap<DefId, TypeHandle> = parent_generics
            .iter()
            .map(|(_, gid)| *gid)
            .zip(type_args.iter().copied())
            .collect();
        for (_, gid) in &sig.generics {
            subst.insert(*gid, self.ctx.fresh_var(Domain::Any));
        }
        let mut all_generics = parent_generics;
        all_generics.extend(sig.generics.clone());

        if sig.params.len() != arg_tys.len() {
            self.handler
                .build_error(
                    m.span,
                    format!("expected {} argument(s), found {}", sig.params.len(), arg_tys.len()),
                )
                .code(DiagnosticCode::E_INFER_ARITY_MISMATCH)
                .emit(self.handler);
            return self.ctx.err();
        }
        for (p, a) in sig.params.iter().zip(arg_tys.iter()) {
            let expected = self.lower(p, &all_generics, &subst);
            self.check(expected, *a, m.span);
        }
        self.lower(&sig.ret, &all_generics, &subst)
    }

    fn collect_match(&mut self, m: &mut MatchExpr) -> TypeHandle {
        let scrutinee_ty = self.collect_expr(&mut m.scrutinee);
        let result_ty = self.ctx.fresh_var(Domain::Any);
        let root = self.unifier.resolve(&mut self.ctx, scrutinee_ty);
        let scrutinee_adt = self.peel_adt(root);
        let scrutinee_is_bool = matches!(self.ctx.get(root), Type::Builtin(BuiltinKind::Bool));

        let mut covers_wildcard = false;
        let mut covered_variants = HashSet::new();
        let mut has_true = false;
        let mut has_false = false;

        for arm in &mut m.arms {
            for pattern in &mut arm.patterns {
                match pattern {
                    Pattern::Wildcard(_) => covers_wildcard = true,
                    Pattern::Literal(lit) => {
                        if let Expr::BoolLiteral(b) = lit {
                            if b.value {
                                has_true = true;
                            } else {
                                has_false = true;
                            }
                        }
                        let lit_ty = self.collect_expr(lit);
                        self.check(scrutinee_ty, lit_ty, arm.span);
                    }
                    Pattern::Variant(path, bindings) => {
                        let variant_name = *path.segments.last().unwrap();
                        if let Some((decl, type_args)) = &scrutinee_adt {
                            if let Some(sig) = self.enum_sigs.get(decl).cloned() {
                                covered_variants.insert(variant_name);
                                if let Some(VariantData::Tuple(tys)) =
                                    sig.variants.get(&variant_name).cloned()
                                {
                                    let subst: HashMap<DefId, TypeHandle> = sig
                                        .generics
                                        .iter()
                                        .map(|(_, gid)| *gid)
                                        .zip(type_args.iter().copied())
                                        .collect();
                                    for (binding, ty) in bindings.iter().zip(tys.iter()) {
                                        let handle = self.lower(ty, &sig.generics, &subst);
                                        self.env.insert(binding.id, handle);
                                    }
                                }
                            }
                        }
                        for binding in bindings.iter() {
                            if !self.env.contains_key(&binding.id) {
                                let h = self.ctx.fresh_var(Domain::Any);
                                self.env.insert(binding.id, h);
                            }
                        }
                    }
                }
            }
            if let Some(guard) = &mut arm.guard {
                let guard_ty = self.collect_expr(guard);
                let bool_ty = self.ctx.builtin(BuiltinKind::Bool);
                self.check(bool_ty, guard_ty, arm.span);
            }
            let body_ty = self.collect_expr(&mut arm.body);
            self.check(result_ty, body_ty, arm.span);
        }

        if !covers_wildcard {
            if let Some((decl, _)) = &scrutinee_adt {
                if let Some(sig) = self.enum_sigs.get(decl) {
                    let all: HashSet<_> = sig.variants.keys().copied().collect();
                    if !all.is_subset(&covered_variants) {
                        self.handler
                            .build_error(m.span, "match does not cover every variant")
                            .code(DiagnosticCode::E_INFER_NON_EXHAUSTIVE_MATCH)
                            .emit(self.handler);
                    }
                }
            } else if scrutinee_is_bool && !(has_true && has_false) {
                self.handler
                    .build_error(m.span, "match does not cover both `true` and `false`")
                    .code(DiagnosticCode::E_INFER_NON_EXHAUSTIVE_MATCH)
                    .emit(self.handler);
            }
        }

        result_ty
    }

    fn collect_intrinsic(&mut self, i: &mut IntrinsicCallExpr) -> TypeHandle {
        let arg_tys: Vec<TypeHandle> = i.args.iter_mut().map(|arg| self.collect_expr(arg)).collect();
        match i.kind {
            IntrinsicKind::Panic | IntrinsicKind::Unreachable => self.ctx.builtin(BuiltinKind::Null),
            IntrinsicKind::Assert => self.ctx.builtin(BuiltinKind::Null),
            IntrinsicKind::Typeof => arg_tys.first().copied().unwrap_or_else(|| self.ctx.err()),
        }
    }

    // ---- finalization ----

    fn finalize_item(&mut self, item: &mut Item) {
        match item {
            Item::Fn(f) => self.finalize_block(&mut f.body),
            Item::Struct(s) => {
                for m in &mut s.methods {
                    self.finalize_block(&mut m.body);
                }
            }
            Item::Enum(e) => {
                for m in &mut e.methods {
                    self.finalize_block(&mut m.body);
                }
            }
            Item::Const(c) => self.finalize_expr(&mut c.value),
            Item::Static(s) => self.finalize_expr(&mut s.value),
            Item::Use(_) => {}
        }
    }

    fn finalize_block(&mut self, block: &mut Block) {
        for stmt in &mut block.stmts {
            self.finalize_stmt(stmt);
        }
    }

    fn finalize_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Return(Some(e)) => self.finalize_expr(e),
            Stmt::Return(None) => {}
            Stmt::Defer(e) | Stmt::Expr(e) => self.finalize_expr(e),
            Stmt::If(if_stmt) => self.finalize_if(if_stmt),
            Stmt::While(w) => {
                self.finalize_expr(&mut w.cond);
                self.finalize_block(&mut w.body);
            }
            Stmt::For(f) => {
                self.finalize_expr(&mut f.iter);
                self.finalize_block(&mut f.body);
            }
            Stmt::Decl(d) => {
                if let Some(init) = &mut d.init {
                    self.finalize_expr(init);
                }
            }
            Stmt::Break(_) | Stmt::Continue(_) => {}
        }
    }

    fn finalize_if(&mut self, if_stmt: &mut IfStmt) {
        self.finalize_expr(&mut if_stmt.cond);
        self.finalize_block(&mut if_stmt.then_block);
        match if_stmt.else_clause.as_deref_mut() {
            Some(ElseClause::Block(b)) => self.finalize_block(b),
            Some(ElseClause::If(nested)) => self.finalize_if(nested),
            None => {}
        }
    }

    fn finalize_expr(&mut self, expr: &mut Expr) {
        match expr {
            Expr::IntLiteral(_)
            | Expr::FloatLiteral(_)
            | Expr::BoolLiteral(_)
            | Expr::CharLiteral(_)
            | Expr::StrLiteral(_)
            | Expr::DeclRef(_) => {}
            Expr::RangeLiteral(r) => {
                self.finalize_expr(&mut r.start);
                self.finalize_expr(&mut r.end);
            }
            Expr::TupleLiteral(t) => t.elems.iter_mut().for_each(|e| self.finalize_expr(e)),
            Expr::FunCall(call) => {
                self.finalize_expr(&mut call.callee);
                call.args.iter_mut().for_each(|a| self.finalize_expr(a));
            }
            Expr::BinaryOp(b) => {
                self.finalize_expr(&mut b.left);
                self.finalize_expr(&mut b.right);
            }
            Expr::UnaryOp(u) => self.finalize_expr(&mut u.operand),
            Expr::AdtInit(init) => init.members.iter_mut().for_each(|m| self.finalize_expr(&mut m.value)),
            Expr::FieldAccess(f) => self.finalize_expr(&mut f.base),
            Expr::MethodCall(m) => {
                self.finalize_expr(&mut m.base);
                m.args.iter_mut().for_each(|a| self.finalize_expr(a));
            }
            Expr::Match(m) => {
                self.finalize_expr(&mut m.scrutinee);
                for arm in &mut m.arms {
                    for pattern in &mut arm.patterns {
                        if let Pattern::Literal(e) = pattern {
                            self.finalize_expr(e);
                        }
                    }
                    if let Some(guard) = &mut arm.guard {
                        self.finalize_expr(guard);
                    }
                    self.finalize_expr(&mut arm.body);
                }
            }
            Expr::IntrinsicCall(i) => i.args.iter_mut().for_each(|a| self.finalize_expr(a)),
        }

        let current = *expr.ty().borrow();
        let resolved = self.unifier.resolve(&mut self.ctx, current);
        let final_ty = self.default_if_unconstrained(resolved);
        *expr.ty().borrow_mut() = final_ty;
    }

    fn default_if_unconstrained(&mut self, handle: TypeHandle) -> TypeHandle {
        match self.ctx.get(handle) {
            Type::Var(id) => {
                let id = *id;
                match self.ctx.domain_of_var(id) {
                    Domain::Int => self.ctx.builtin(BuiltinKind::I32),
                    Domain::Float => self.ctx.builtin(BuiltinKind::F64),
                    Domain::Any | Domain::Adt => handle,
                }
            }
            _ => handle,
        }
    }
}

fn collect_signatures(
    modules: &[Module],
) -> (HashMap<DefId, FnSig>, HashMap<DefId, StructSig>, HashMap<DefId, EnumSig>) {
    let mut fns = HashMap::new();
    let mut structs = HashMap::new();
    let mut enums = HashMap::new();

    let fn_sig = |f: &FnItem| FnSig {
        generics: f.generics.iter().map(|g| (g.name, g.id)).collect(),
        params: f.params.iter().map(|p| p.ty.clone()).collect(),
        ret: f.ret_type.clone().unwrap_or(TypeExpr::Inferred),
        parent: f.parent,
    };

    for module in modules {
        for item in &module.items {
            match item {
                Item::Fn(f) => {
                    fns.insert(f.id, fn_sig(f));
                }
                Item::Struct(s) => {
                    structs.insert(
                        s.id,
                        StructSig {
                            name: s.name,
                            generics: s.generics.iter().map(|g| (g.name, g.id)).collect(),
                            fields: s.fields.iter().map(|f| (f.name, f.ty.clone())).collect(),
                        },
                    );
                    for m in &s.methods {
                        fns.insert(m.id, fn_sig(m));
                    }
                }
                Item::Enum(e) => {
                    let variants = e.variants.iter().map(|v| (v.name, v.data.clone())).collect();
                    enums.insert(
                        e.id,
                        EnumSig {
                            name: e.name,
                            generics: e.generics.iter().map(|g| (g.name, g.id)).collect(),
                            variants,
                        },
                    );
                    for m in &e.methods {
                        fns.insert(m.id, fn_sig(m));
                    }
                }
                Item::Const(_) | Item::Static(_) | Item::Use(_) => {}
            }
        }
    }

    (fns, structs, enums)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolver;
    use corec_util::{DefIdGenerator, Handler};

    fn span() -> Span {
        Span::DUMMY
    }

    fn single_fn_module(gen: &DefIdGenerator, body: Vec<Stmt>, ret: Option<TypeExpr>) -> Module {
        Module {
            path: Path::single(Symbol::intern("main"), span()),
            items: vec![Item::Fn(FnItem {
                id: gen.next(),
                name: Symbol::intern("main"),
                visibility: Visibility::Private,
                generics: vec![],
                params: vec![],
                ret_type: ret,
                body: Block { stmts: body, span: span() },
                is_method: false,
                parent: None,
                span: span(),
            })],
            span: span(),
        }
    }

    fn decl(gen: &DefIdGenerator, name: &str, ty: Option<TypeExpr>, init: Option<Expr>) -> Stmt {
        Stmt::Decl(DeclStmt {
            id: gen.next(),
            name: Symbol::intern(name),
            ty,
            init,
            mutable: false,
            span: span(),
        })
    }

    fn int_lit(v: i64) -> Expr {
        Expr::IntLiteral(IntLiteralExpr::new(v, span()))
    }

    #[test]
    fn unconstrained_int_literal_defaults_to_i32() {
        let gen = DefIdGenerator::new();
        let handler = Handler::new();
        let mut modules = vec![single_fn_module(&gen, vec![decl(&gen, "x", None, Some(int_lit(1)))], None)];

        let mut resolver = Resolver::new(&handler);
        resolver.resolve_modules(&mut modules);
        let globals = resolver.into_globals();

        let mut inferencer = Inferencer::new(&handler, &globals, &modules);
        inferencer.infer(&mut modules);

        assert!(!handler.has_errors());
        let Item::Fn(f) = &modules[0].items[0] else { unreachable!() };
        let Stmt::Decl(d) = &f.body.stmts[0] else { unreachable!() };
        let ty = *d.init.as_ref().unwrap().ty().borrow();
        assert_eq!(inferencer.ctx.get(ty), &Type::Builtin(BuiltinKind::I32));
    }

    #[test]
    fn mismatched_let_annotation_is_reported() {
        let gen = DefIdGenerator::new();
        let handler = Handler::new();
        let bool_ty = TypeExpr::Named {
            path: Path::single(Symbol::intern("bool"), span()),
            args: vec![],
        };
        let mut modules =
            vec![single_fn_module(&gen, vec![decl(&gen, "x", Some(bool_ty), Some(int_lit(1)))], None)];

        let mut resolver = Resolver::new(&handler);
        resolver.resolve_modules(&mut modules);
        let globals = resolver.into_globals();

        let mut inferencer = Inferencer::new(&handler, &globals, &modules);
        inferencer.infer(&mut modules);

        assert!(handler.has_errors());
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_INFER_DOMAIN_MISMATCH)
        );
    }

    #[test]
    fn if_condition_must_be_bool() {
        let gen = DefIdGenerator::new();
        let handler = Handler::new();
        let if_stmt = Stmt::If(IfStmt {
            cond: int_lit(1),
            then_block: Block { stmts: vec![], span: span() },
            else_clause: None,
            span: span(),
        });
        let mut modules = vec![single_fn_module(&gen, vec![if_stmt], None)];

        let mut resolver = Resolver::new(&handler);
        resolver.resolve_modules(&mut modules);
        let globals = resolver.into_globals();

        let mut inferencer = Inferencer::new(&handler, &globals, &modules);
        inferencer.infer(&mut modules);

        assert!(handler.has_errors());
    }
}
