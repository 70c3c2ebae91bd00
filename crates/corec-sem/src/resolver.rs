//! Name resolution.
//!
//! Runs in two phases. Phase A scans every module's top-level items into a
//! [`GlobalTable`] before anything else happens, so a function can call a
//! sibling declared later in the file, or in another file entirely; it also
//! builds the *importables* table keyed by each module's qualified path,
//! with every public item additionally indexed under
//! `<module-path>::<item-name>`. Phase B then walks each module in its own
//! scope: imports, then signatures, then bodies, wiring every
//! `decl: Option<DefId>` slot in place as it goes.

use crate::scope::{RibKind, ScopeTree};
use corec_ast::*;
use corec_util::diagnostic::{DiagnosticCode, Handler, Label, Suggestion};
use corec_util::{DefId, Span, Symbol};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Fn,
    Struct,
    Enum,
    Const,
    Static,
}

/// A struct field's declaration plus whether it carries a default
/// initializer, so a missing-fields check can skip it.
#[derive(Debug, Clone, Copy)]
pub struct FieldInfo {
    pub decl: DefId,
    pub has_default: bool,
}

#[derive(Default)]
pub struct StructInfo {
    pub fields: HashMap<Symbol, FieldInfo>,
    pub methods: HashMap<Symbol, DefId>,
}

#[derive(Default)]
pub struct EnumInfo {
    pub variants: HashMap<Symbol, DefId>,
    pub methods: HashMap<Symbol, DefId>,
}

/// Every top-level item visible to every module, built before any body is walked.
#[derive(Default)]
pub struct GlobalTable {
    pub items: HashMap<Symbol, DefId>,
    pub kinds: HashMap<DefId, ItemKind>,
    pub structs: HashMap<DefId, StructInfo>,
    pub enums: HashMap<DefId, EnumInfo>,
    /// Index of the module (into the slice passed to `resolve_modules`) that
    /// declares each item, used to enforce the self-import rules.
    pub item_module: HashMap<DefId, usize>,
    pub item_visibility: HashMap<DefId, Visibility>,
}

impl GlobalTable {
    fn declare(&mut self, name: Symbol, id: DefId, kind: ItemKind, span: Span, handler: &Handler) {
        if self.items.insert(name, id).is_some() {
            handler
                .build_error(span, format!("the name `{}` is defined more than once", name))
                .code(DiagnosticCode::E_RESOLVE_DUPLICATE_DEF)
                .label(Label::primary(span, "redefined here"))
                .emit(handler);
        }
        self.kinds.insert(id, kind);
    }
}

/// What a qualified path names in the importables table.
#[derive(Clone, Copy)]
enum Importable {
    /// Index into the module slice passed to `resolve_modules`.
    Module(usize),
    Item(DefId),
}

/// Bounded edit distance: returns `None` if every candidate is farther than
/// `max_dist`. Ties go to whichever candidate comes first, so callers should
/// pass innermost-scope names first.
fn closest_match(target: &str, candidates: &[Symbol], max_dist: usize) -> Option<Symbol> {
    let mut best: Option<(Symbol, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(target, candidate.as_str());
        if dist == 0 || dist > max_dist {
            continue;
        }
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((candidate, dist));
        }
    }
    best.map(|(s, _)| s)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for i in 1..=a.len() {
        let mut prev = row[0];
        row[0] = i;
        for j in 1..=b.len() {
            let tmp = row[j];
            row[j] = if a[i - 1] == b[j - 1] {
                prev
            } else {
                1 + prev.min(row[j]).min(row[j - 1])
            };
            prev = tmp;
        }
    }
    row[b.len()]
}

/// Joins path segments into a single symbol (`a::b::c`), the same way a
/// qualified import binds a name into scope, so a later multi-segment
/// reference can be looked up by reconstructing the identical key.
fn join_path(segments: &[Symbol]) -> Symbol {
    let joined =
        segments.iter().map(|s| s.as_str()).collect::<Vec<_>>().join("::");
    Symbol::intern(&joined)
}

fn path_string(segments: &[Symbol]) -> String {
    segments.iter().map(|s| s.as_str()).collect::<Vec<_>>().join("::")
}

pub struct Resolver<'a> {
    handler: &'a Handler,
    globals: GlobalTable,
    scope: ScopeTree,
    /// Every module's qualified path, and every public item's qualified
    /// path, keyed the same way: `import`/`use` directives look themselves
    /// up here.
    importables: HashMap<Vec<Symbol>, Importable>,
    /// The generic parameters visible in the function body currently being
    /// walked, so a local `let`'s type annotation can reference them.
    current_generics: std::collections::HashSet<Symbol>,
}

impl<'a> Resolver<'a> {
    pub fn new(handler: &'a Handler) -> Self {
        Self {
            handler,
            globals: GlobalTable::default(),
            scope: ScopeTree::new(),
            importables: HashMap::new(),
            current_generics: std::collections::HashSet::new(),
        }
    }

    pub fn into_globals(self) -> GlobalTable {
        self.globals
    }

    /// Phase A + Phase B over every module in the compilation unit.
    pub fn resolve_modules(&mut self, modules: &mut [Module]) {
        for (idx, module) in modules.iter().enumerate() {
            self.importables.insert(module.path.segments.clone(), Importable::Module(idx));
        }
        for (idx, module) in modules.iter().enumerate() {
            self.declare_module_items(idx, module);
        }
        for (idx, module) in modules.iter_mut().enumerate() {
            self.scope.enter_scope(RibKind::Module);
            self.resolve_uses(idx, module);
            self.resolve_signatures(module);
            self.resolve_bodies(module);
            self.scope.exit_scope();
        }
    }

    fn declare_module_items(&mut self, idx: usize, module: &Module) {
        for item in &module.items {
            match item {
                Item::Fn(f) => self.declare_top_level(idx, module, f.name, f.id, ItemKind::Fn, f.visibility, f.span),
                Item::Const(c) => self.declare_top_level(
                    idx, module, c.name, c.id, ItemKind::Const, c.visibility, c.span,
                ),
                Item::Static(s) => self.declare_top_level(
                    idx, module, s.name, s.id, ItemKind::Static, s.visibility, s.span,
                ),
                Item::Struct(s) => {
                    self.declare_top_level(
                        idx, module, s.name, s.id, ItemKind::Struct, s.visibility, s.span,
                    );
                    let mut info = StructInfo::default();
                    for field in &s.fields {
                        let field_info =
                            FieldInfo { decl: field.id, has_default: field.default.is_some() };
                        if info.fields.insert(field.name, field_info).is_some() {
                            self.handler
                                .build_error(
                                    field.span,
                                    format!("field `{}` is declared more than once", field.name),
                                )
                                .code(DiagnosticCode::E_RESOLVE_DUPLICATE_FIELD)
                                .emit(self.handler);
                        }
                    }
                    for method in &s.methods {
                        info.methods.insert(method.name, method.id);
                    }
                    self.globals.structs.insert(s.id, info);
                }
                Item::Enum(e) => {
                    self.declare_top_level(
                        idx, module, e.name, e.id, ItemKind::Enum, e.visibility, e.span,
                    );
                    let mut info = EnumInfo::default();
                    for variant in &e.variants {
                        info.variants.insert(variant.name, variant.id);
                    }
                    for method in &e.methods {
                        info.methods.insert(method.name, method.id);
                    }
                    self.globals.enums.insert(e.id, info);
                }
                Item::Use(_) => {}
            }
        }
    }

    /// Declares a top-level item's name, records which module owns it and
    /// its visibility, and indexes it into the importables table under
    /// `<module-path>::<name>` when it's public.
    fn declare_top_level(
        &mut self,
        idx: usize,
        module: &Module,
        name: Symbol,
        id: DefId,
        kind: ItemKind,
        visibility: Visibility,
        span: Span,
    ) {
        self.globals.declare(name, id, kind, span, self.handler);
        self.globals.item_module.insert(id, idx);
        self.globals.item_visibility.insert(id, visibility);
        if visibility == Visibility::Public {
            let mut path = module.path.segments.clone();
            path.push(name);
            self.importables.insert(path, Importable::Item(id));
        }
    }

    /// Phase B step 1: resolve every `import`/`use` directive in this
    /// module, binding whatever it names into the module's own scope.
    fn resolve_uses(&mut self, idx: usize, module: &mut Module) {
        for item in &module.items {
            let Item::Use(use_item) = item else { continue };
            let segments = &use_item.path.segments;

            let Some(&target) = self.importables.get(segments) else {
                self.handler
                    .build_error(
                        use_item.path.span,
                        format!("no module or item at path `{}`", path_string(segments)),
                    )
                    .code(DiagnosticCode::E_RESOLVE_UNKNOWN_ITEM_PATH)
                    .emit(self.handler);
                continue;
            };

            match target {
                Importable::Module(target_idx) => {
                    if target_idx == idx {
                        self.handler
                            .build_error(use_item.path.span, "a module cannot import itself")
                            .code(DiagnosticCode::E_RESOLVE_SELF_IMPORT)
                            .emit(self.handler);
                        continue;
                    }
                    let alias = use_item.alias.unwrap_or_else(|| *segments.last().unwrap());
                    let public_items: Vec<(Symbol, DefId)> = self
                        .globals
                        .items
                        .iter()
                        .filter(|(_, id)| self.globals.item_module.get(id) == Some(&target_idx))
                        .filter(|(_, id)| {
                            self.globals.item_visibility.get(id) == Some(&Visibility::Public)
                        })
                        .map(|(&name, &id)| (name, id))
                        .collect();
                    for (name, id) in public_items {
                        self.bind_import(join_path(&[alias, name]), id, use_item.path.span);
                    }
                }
                Importable::Item(id) => {
                    if self.globals.item_module.get(&id) == Some(&idx) {
                        self.handler
                            .build_error(
                                use_item.path.span,
                                "cannot import an item that already lives in this module",
                            )
                            .code(DiagnosticCode::E_RESOLVE_IMPORT_FROM_OWN_MODULE)
                            .emit(self.handler);
                        continue;
                    }
                    let name = use_item.alias.unwrap_or_else(|| *segments.last().unwrap());
                    self.bind_import(name, id, use_item.path.span);
                }
            }
        }
    }

    /// Binds an imported name into the module scope currently open,
    /// rejecting a second import that reuses the same name.
    fn bind_import(&mut self, name: Symbol, id: DefId, span: Span) {
        let current = &self.scope.ribs[self.scope.current_rib].bindings;
        if current.contains_key(&name) {
            self.handler
                .build_error(span, format!("the name `{}` is already imported", name))
                .code(DiagnosticCode::E_RESOLVE_DUPLICATE_DEF)
                .emit(self.handler);
            return;
        }
        self.scope.add_binding(name, id);
    }

    fn resolve_signatures(&mut self, module: &mut Module) {
        for item in &module.items {
            match item {
                Item::Fn(f) => {
                    let generics = generic_names(&f.generics);
                    let mut seen = HashMap::new();
                    for p in &f.params {
                        if seen.insert(p.name, p.span).is_some() {
                            self.handler
                                .build_error(
                                    p.span,
                                    format!("parameter `{}` is bound more than once", p.name),
                                )
                                .code(DiagnosticCode::E_RESOLVE_DUPLICATE_PARAM)
                                .emit(self.handler);
                        }
                        self.check_type_expr(&p.ty, p.span, &generics);
                    }
                    if let Some(ret) = &f.ret_type {
                        self.check_type_expr(ret, f.span, &generics);
                    }
                }
                Item::Struct(s) => {
                    let struct_generics = generic_names(&s.generics);
                    for field in &s.fields {
                        self.check_type_expr(&field.ty, field.span, &struct_generics);
                    }
                    for method in &s.methods {
                        let mut method_generics = struct_generics.clone();
                        method_generics.extend(generic_names(&method.generics));
                        for p in &method.params {
                            self.check_type_expr(&p.ty, p.span, &method_generics);
                        }
                        if let Some(ret) = &method.ret_type {
                            self.check_type_expr(ret, method.span, &method_generics);
                        }
                    }
                }
                Item::Enum(e) => {
                    let enum_generics = generic_names(&e.generics);
                    for variant in &e.variants {
                        if let VariantData::Tuple(tys) = &variant.data {
                            for ty in tys {
                                self.check_type_expr(ty, variant.span, &enum_generics);
                            }
                        }
                    }
                    for method in &e.methods {
                        let mut method_generics = enum_generics.clone();
                        method_generics.extend(generic_names(&method.generics));
                        for p in &method.params {
                            self.check_type_expr(&p.ty, p.span, &method_generics);
                        }
                        if let Some(ret) = &method.ret_type {
                            self.check_type_expr(ret, method.span, &method_generics);
                        }
                    }
                }
                Item::Const(c) => self.check_type_expr(&c.ty, c.span, &Default::default()),
                Item::Static(s) => self.check_type_expr(&s.ty, s.span, &Default::default()),
                Item::Use(_) => {}
            }
        }
    }

    fn check_type_expr(&self, ty: &TypeExpr, span: Span, generics: &std::collections::HashSet<Symbol>) {
        match ty {
            TypeExpr::Inferred => {}
            TypeExpr::Named { path, args } => {
                let head = *path.segments.last().unwrap();
                let qualified_visible =
                    path.segments.len() > 1 && self.scope.resolve(join_path(&path.segments)).is_some();
                if !self.globals.items.contains_key(&head)
                    && !is_builtin_type_name(head)
                    && !generics.contains(&head)
                    && !qualified_visible
                {
                    self.handler
                        .build_error(path.span, format!("no type named `{}` found", head))
                        .code(DiagnosticCode::E_RESOLVE_UNKNOWN_TYPE)
                        .emit(self.handler);
                }
                for arg in args {
                    self.check_type_expr(arg, span, generics);
                }
            }
            TypeExpr::Tuple(elems) => {
                elems.iter().for_each(|e| self.check_type_expr(e, span, generics))
            }
            TypeExpr::Ptr(inner) | TypeExpr::Ref(inner) => {
                self.check_type_expr(inner, span, generics)
            }
            TypeExpr::Fn(params, ret) => {
                params.iter().for_each(|p| self.check_type_expr(p, span, generics));
                self.check_type_expr(ret, span, generics);
            }
        }
    }

    fn resolve_bodies(&mut self, module: &mut Module) {
        for item in &mut module.items {
            match item {
                Item::Fn(f) => self.resolve_fn(f, None),
                Item::Struct(s) => {
                    for method in &mut s.methods {
                        self.resolve_fn(method, Some(s.id));
                    }
                }
                Item::Enum(e) => {
                    for method in &mut e.methods {
                        self.resolve_fn(method, Some(e.id));
                    }
                }
                Item::Const(c) => self.resolve_expr(&mut c.value),
                Item::Static(s) => self.resolve_expr(&mut s.value),
                Item::Use(_) => {}
            }
        }
    }

    fn resolve_fn(&mut self, f: &mut FnItem, parent: Option<DefId>) {
        self.scope.enter_scope(RibKind::Function);
        if f.is_method {
            if let Some(p) = parent {
                self.scope.add_binding(corec_util::symbol::KW_THIS, p);
            }
        }
        for generic in &f.generics {
            self.scope.add_binding(generic.name, generic.id);
        }
        for param in &f.params {
            self.scope.add_binding(param.name, param.id);
        }
        let prev_generics = std::mem::replace(&mut self.current_generics, generic_names(&f.generics));
        self.resolve_block(&mut f.body);
        self.current_generics = prev_generics;
        self.scope.exit_scope();
    }

    fn resolve_block(&mut self, block: &mut Block) {
        self.scope.enter_scope(RibKind::Block);
        for stmt in &mut block.stmts {
            self.resolve_stmt(stmt);
        }
        self.scope.exit_scope();
    }

    fn resolve_stmt(&mut self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Return(expr) => {
                if let Some(e) = expr {
                    self.resolve_expr(e);
                }
            }
            Stmt::Defer(e) => self.resolve_expr(e),
            Stmt::Expr(e) => self.resolve_expr(e),
            Stmt::If(if_stmt) => self.resolve_if(if_stmt),
            Stmt::While(w) => {
                self.resolve_expr(&mut w.cond);
                self.scope.enter_scope(RibKind::Loop(w.label));
                self.resolve_block(&mut w.body);
                self.scope.exit_scope();
            }
            Stmt::For(f) => {
                self.resolve_expr(&mut f.iter);
                self.scope.enter_scope(RibKind::Loop(f.label));
                self.scope.add_binding(f.binding, f.binding_id);
                self.resolve_block(&mut f.body);
                self.scope.exit_scope();
            }
            Stmt::Decl(d) => {
                if let Some(init) = &mut d.init {
                    self.resolve_expr(init);
                }
                if let Some(ty) = &d.ty {
                    self.check_type_expr(ty, d.span, &self.current_generics);
                }
                self.scope.add_binding(d.name, d.id);
            }
            Stmt::Break(label) => self.check_loop_target(*label, break_continue_span()),
            Stmt::Continue(label) => self.check_loop_target(*label, break_continue_span()),
        }
    }

    fn check_loop_target(&self, label: Option<Symbol>, span: Span) {
        if self.scope.has_enclosing_loop(label) {
            return;
        }
        if label.is_some() && self.scope.has_enclosing_loop(None) {
            self.handler
                .build_error(span, "no enclosing loop with that label")
                .code(DiagnosticCode::E_RESOLVE_UNKNOWN_LABEL)
                .emit(self.handler);
        } else {
            self.handler
                .build_error(span, "break/continue outside of any loop")
                .code(DiagnosticCode::E_RESOLVE_BREAK_OUTSIDE_LOOP)
                .emit(self.handler);
        }
    }

    fn resolve_if(&mut self, if_stmt: &mut IfStmt) {
        self.resolve_expr(&mut if_stmt.cond);
        self.resolve_block(&mut if_stmt.then_block);
        match if_stmt.else_clause.as_deref_mut() {
            Some(ElseClause::Block(block)) => self.resolve_block(block),
            Some(ElseClause::If(nested)) => self.resolve_if(nested),
            None => {}
        }
    }

    fn resolve_expr(&mut self, expr: &mut Expr) {
        match expr {
            Expr::IntLiteral(_)
            | Expr::FloatLiteral(_)
            | Expr::BoolLiteral(_)
            | Expr::CharLiteral(_)
            | Expr::StrLiteral(_) => {}
            Expr::RangeLiteral(r) => {
                self.resolve_expr(&mut r.start);
                self.resolve_expr(&mut r.end);
            }
            Expr::TupleLiteral(t) => t.elems.iter_mut().for_each(|e| self.resolve_expr(e)),
            Expr::DeclRef(r) => self.resolve_decl_ref(r),
            Expr::FunCall(call) => {
                self.resolve_expr(&mut call.callee);
                if let Expr::DeclRef(r) = call.callee.as_ref() {
                    call.decl = r.decl;
                }
                call.args.iter_mut().for_each(|a| self.resolve_expr(a));
            }
            Expr::BinaryOp(b) => {
                self.resolve_expr(&mut b.left);
                self.resolve_expr(&mut b.right);
            }
            Expr::UnaryOp(u) => self.resolve_expr(&mut u.operand),
            Expr::AdtInit(init) => self.resolve_adt_init(init),
            Expr::FieldAccess(f) => self.resolve_expr(&mut f.base),
            Expr::MethodCall(m) => {
                self.resolve_expr(&mut m.base);
                m.args.iter_mut().for_each(|a| self.resolve_expr(a));
            }
            Expr::Match(m) => self.resolve_match(m),
            Expr::IntrinsicCall(i) => i.args.iter_mut().for_each(|a| self.resolve_expr(a)),
        }
    }

    fn resolve_decl_ref(&mut self, r: &mut DeclRefExpr) {
        let name = *r.name.segments.last().unwrap();
        r.decl = if r.name.segments.len() == 1 {
            self.scope.resolve(name).or_else(|| self.globals.items.get(&name).copied())
        } else {
            let qualified = join_path(&r.name.segments);
            self.scope.resolve(qualified).or_else(|| self.globals.items.get(&name).copied())
        };
        if r.decl.is_none() {
            self.undefined_name(name, r.name.span);
        }
    }

    fn undefined_name(&self, name: Symbol, span: Span) {
        let mut candidates = self.scope.visible_names();
        candidates.extend(self.globals.items.keys().copied());
        let builder = self
            .handler
            .build_error(span, format!("cannot find `{}` in this scope", name))
            .code(DiagnosticCode::E_RESOLVE_UNDEFINED_NAME)
            .label(Label::primary(span, "not found in this scope"));

        let builder = match closest_match(name.as_str(), &candidates, 3) {
            Some(suggestion) => builder
                .help(format!("a name with a similar spelling exists: `{}`", suggestion))
                .suggestion(Suggestion::new(
                    span,
                    suggestion.as_str(),
                    format!("did you mean `{}`?", suggestion),
                )),
            None => builder,
        };
        builder.emit(self.handler);
    }

    fn resolve_adt_init(&mut self, init: &mut AdtInitExpr) {
        let Some(path) = &init.path else {
            // Anonymous literal: type recovered from context during inference.
            for member in &mut init.members {
                self.resolve_expr(&mut member.value);
            }
            return;
        };
        let head = *path.segments.last().unwrap();
        let Some(&decl) = self.globals.items.get(&head) else {
            self.undefined_name(head, path.span);
            for member in &mut init.members {
                self.resolve_expr(&mut member.value);
            }
            return;
        };
        init.decl = Some(decl);

        if let Some(variant_name) = init.variant {
            if let Some(enum_info) = self.globals.enums.get(&decl) {
                if !enum_info.variants.contains_key(&variant_name) {
                    self.handler
                        .build_error(path.span, format!("enum has no variant `{}`", variant_name))
                        .code(DiagnosticCode::E_RESOLVE_UNKNOWN_VARIANT)
                        .emit(self.handler);
                }
            }
        } else if let Some(struct_info) = self.globals.structs.get(&decl) {
            let mut missing = Vec::new();
            for (field_name, field_info) in &struct_info.fields {
                let given = init.members.iter().any(|m| m.name == *field_name);
                if !given && !field_info.has_default {
                    missing.push(*field_name);
                }
            }
            if !missing.is_empty() {
                let names: Vec<_> = missing.iter().map(|s| s.as_str()).collect();
                self.handler
                    .build_error(path.span, format!("missing fields: {}", names.join(", ")))
                    .code(DiagnosticCode::E_RESOLVE_MISSING_FIELDS)
                    .emit(self.handler);
            }
            for member in &mut init.members {
                match struct_info.fields.get(&member.name) {
                    Some(field_info) => member.decl = Some(field_info.decl),
                    None => {
                        self.handler
                            .build_error(
                                path.span,
                                format!("no field `{}` on this struct", member.name),
                            )
                            .code(DiagnosticCode::E_INFER_UNKNOWN_FIELD_IN_LITERAL)
                            .emit(self.handler);
                    }
                }
            }
        }

        for member in &mut init.members {
            self.resolve_expr(&mut member.value);
        }
    }

    fn resolve_match(&mut self, m: &mut MatchExpr) {
        self.resolve_expr(&mut m.scrutinee);
        for arm in &mut m.arms {
            self.scope.enter_scope(RibKind::Block);
            for pattern in &mut arm.patterns {
                self.resolve_pattern(pattern);
            }
            if let Some(guard) = &mut arm.guard {
                self.resolve_expr(guard);
            }
            self.resolve_expr(&mut arm.body);
            self.scope.exit_scope();
        }
    }

    fn resolve_pattern(&mut self, pattern: &mut Pattern) {
        match pattern {
            Pattern::Wildcard(_) => {}
            Pattern::Literal(e) => self.resolve_expr(e),
            Pattern::Variant(path, bindings) => {
                let head = *path.segments.last().unwrap();
                if !self.globals.items.contains_key(&head) {
                    self.undefined_name(head, path.span);
                }
                let mut seen = std::collections::HashSet::new();
                for binding in bindings.iter() {
                    if !seen.insert(binding.name) {
                        self.handler
                            .build_error(
                                path.span,
                                format!("`{}` is bound more than once in this pattern", binding.name),
                            )
                            .code(DiagnosticCode::E_RESOLVE_DUPLICATE_BINDING)
                            .emit(self.handler);
                        continue;
                    }
                    self.scope.add_binding(binding.name, binding.id);
                }
            }
        }
    }
}

fn generic_names(generics: &[GenericParam]) -> std::collections::HashSet<Symbol> {
    generics.iter().map(|g| g.name).collect()
}

fn is_builtin_type_name(name: Symbol) -> bool {
    crate::types::BuiltinKind::from_name(name.as_str()).is_some()
}

/// `Break`/`Continue` carry no span of their own in this node set.
fn break_continue_span() -> Span {
    Span::DUMMY
}
