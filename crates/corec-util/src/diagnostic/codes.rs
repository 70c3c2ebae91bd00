//! Diagnostic codes for categorizing name-resolution and type-inference errors.
//!
//! [`DiagnosticCode`] uniquely identifies a diagnostic message so downstream
//! tooling can look up documentation or suppress specific warnings.
//!
//! # Examples
//!
//! ```
//! use corec_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_RESOLVE_UNDEFINED_NAME;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message.
///
/// Codes follow the format `{prefix}{number}` where `prefix` is `"E"` for
/// errors or `"W"` for warnings and `number` is zero-padded to 4 digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // NAME RESOLUTION (E1xxx)
    // =========================================================================

    /// E1001: identifier does not resolve to any visible declaration
    pub const E_RESOLVE_UNDEFINED_NAME: Self = Self::new("E", 1001);
    /// E1002: two declarations in the same scope share a name
    pub const E_RESOLVE_DUPLICATE_DEF: Self = Self::new("E", 1002);
    /// E1003: a function or method declares two parameters with the same name
    pub const E_RESOLVE_DUPLICATE_PARAM: Self = Self::new("E", 1003);
    /// E1004: a struct or enum variant declares the same field twice
    pub const E_RESOLVE_DUPLICATE_FIELD: Self = Self::new("E", 1004);
    /// E1005: a named type does not resolve to any struct or enum declaration
    pub const E_RESOLVE_UNKNOWN_TYPE: Self = Self::new("E", 1005);
    /// E1006: a struct literal omits one or more required fields
    pub const E_RESOLVE_MISSING_FIELDS: Self = Self::new("E", 1006);
    /// E1007: an enum initializer names a variant the enum does not declare
    pub const E_RESOLVE_UNKNOWN_VARIANT: Self = Self::new("E", 1007);
    /// E1008: `break`/`continue` used outside of any enclosing loop
    pub const E_RESOLVE_BREAK_OUTSIDE_LOOP: Self = Self::new("E", 1008);
    /// E1009: a labeled `break`/`continue` names a label with no enclosing loop of that name
    pub const E_RESOLVE_UNKNOWN_LABEL: Self = Self::new("E", 1009);
    /// E1010: a pattern rebinds a name already bound earlier in the same arm
    pub const E_RESOLVE_DUPLICATE_BINDING: Self = Self::new("E", 1010);
    /// E1011: an `import`/`use` path names no module or item in the importables table
    pub const E_RESOLVE_UNKNOWN_ITEM_PATH: Self = Self::new("E", 1011);
    /// E1012: a module imports itself
    pub const E_RESOLVE_SELF_IMPORT: Self = Self::new("E", 1012);
    /// E1013: an `import` names an item that already lives in the importing module
    pub const E_RESOLVE_IMPORT_FROM_OWN_MODULE: Self = Self::new("E", 1013);

    // =========================================================================
    // TYPE INFERENCE (E2xxx)
    // =========================================================================

    /// E2001: two types were required to unify but are structurally incompatible
    pub const E_INFER_TYPE_MISMATCH: Self = Self::new("E", 2001);
    /// E2002: a type variable would have to contain itself
    pub const E_INFER_CYCLIC_TYPE: Self = Self::new("E", 2002);
    /// E2003: a call or tuple supplies a different number of elements than expected
    pub const E_INFER_ARITY_MISMATCH: Self = Self::new("E", 2003);
    /// E2004: field access names a field the base type does not declare
    pub const E_INFER_UNKNOWN_FIELD: Self = Self::new("E", 2004);
    /// E2005: method call names a method the base type does not declare
    pub const E_INFER_UNKNOWN_METHOD: Self = Self::new("E", 2005);
    /// E2006: a variant pattern's payload arity does not match its declaration
    pub const E_INFER_VARIANT_ARITY_MISMATCH: Self = Self::new("E", 2006);
    /// E2007: a match over an enum or bool scrutinee does not cover every case
    pub const E_INFER_NON_EXHAUSTIVE_MATCH: Self = Self::new("E", 2007);
    /// E2008: a call expression's callee does not resolve to a function type
    pub const E_INFER_NOT_CALLABLE: Self = Self::new("E", 2008);
    /// E2009: a domain-restricted type variable was unified against an incompatible domain
    pub const E_INFER_DOMAIN_MISMATCH: Self = Self::new("E", 2009);
    /// E2010: a struct literal names a member that does not match any field on the struct
    pub const E_INFER_UNKNOWN_FIELD_IN_LITERAL: Self = Self::new("E", 2010);

    // =========================================================================
    // WARNINGS (W0xxx)
    // =========================================================================

    /// W0001: a local binding is never read after being declared
    pub const W_UNUSED_VARIABLE: Self = Self::new("W", 1);
    /// W0002: a match arm can never be reached because an earlier arm subsumes it
    pub const W_UNREACHABLE_ARM: Self = Self::new("W", 2);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const E_RESOLVE_UNDEFINED_NAME: DiagnosticCode = DiagnosticCode::E_RESOLVE_UNDEFINED_NAME;
pub const E_RESOLVE_DUPLICATE_DEF: DiagnosticCode = DiagnosticCode::E_RESOLVE_DUPLICATE_DEF;
pub const E_RESOLVE_DUPLICATE_PARAM: DiagnosticCode = DiagnosticCode::E_RESOLVE_DUPLICATE_PARAM;
pub const E_RESOLVE_DUPLICATE_FIELD: DiagnosticCode = DiagnosticCode::E_RESOLVE_DUPLICATE_FIELD;
pub const E_RESOLVE_UNKNOWN_TYPE: DiagnosticCode = DiagnosticCode::E_RESOLVE_UNKNOWN_TYPE;
pub const E_RESOLVE_MISSING_FIELDS: DiagnosticCode = DiagnosticCode::E_RESOLVE_MISSING_FIELDS;
pub const E_RESOLVE_UNKNOWN_VARIANT: DiagnosticCode = DiagnosticCode::E_RESOLVE_UNKNOWN_VARIANT;
pub const E_RESOLVE_BREAK_OUTSIDE_LOOP: DiagnosticCode = DiagnosticCode::E_RESOLVE_BREAK_OUTSIDE_LOOP;
pub const E_RESOLVE_UNKNOWN_LABEL: DiagnosticCode = DiagnosticCode::E_RESOLVE_UNKNOWN_LABEL;
pub const E_RESOLVE_DUPLICATE_BINDING: DiagnosticCode = DiagnosticCode::E_RESOLVE_DUPLICATE_BINDING;
pub const E_RESOLVE_UNKNOWN_ITEM_PATH: DiagnosticCode = DiagnosticCode::E_RESOLVE_UNKNOWN_ITEM_PATH;
pub const E_RESOLVE_SELF_IMPORT: DiagnosticCode = DiagnosticCode::E_RESOLVE_SELF_IMPORT;
pub const E_RESOLVE_IMPORT_FROM_OWN_MODULE: DiagnosticCode =
    DiagnosticCode::E_RESOLVE_IMPORT_FROM_OWN_MODULE;
pub const E_INFER_TYPE_MISMATCH: DiagnosticCode = DiagnosticCode::E_INFER_TYPE_MISMATCH;
pub const E_INFER_CYCLIC_TYPE: DiagnosticCode = DiagnosticCode::E_INFER_CYCLIC_TYPE;
pub const E_INFER_ARITY_MISMATCH: DiagnosticCode = DiagnosticCode::E_INFER_ARITY_MISMATCH;
pub const E_INFER_UNKNOWN_FIELD: DiagnosticCode = DiagnosticCode::E_INFER_UNKNOWN_FIELD;
pub const E_INFER_UNKNOWN_METHOD: DiagnosticCode = DiagnosticCode::E_INFER_UNKNOWN_METHOD;
pub const E_INFER_VARIANT_ARITY_MISMATCH: DiagnosticCode =
    DiagnosticCode::E_INFER_VARIANT_ARITY_MISMATCH;
pub const E_INFER_NON_EXHAUSTIVE_MATCH: DiagnosticCode =
    DiagnosticCode::E_INFER_NON_EXHAUSTIVE_MATCH;
pub const E_INFER_NOT_CALLABLE: DiagnosticCode = DiagnosticCode::E_INFER_NOT_CALLABLE;
pub const E_INFER_DOMAIN_MISMATCH: DiagnosticCode = DiagnosticCode::E_INFER_DOMAIN_MISMATCH;
pub const E_INFER_UNKNOWN_FIELD_IN_LITERAL: DiagnosticCode =
    DiagnosticCode::E_INFER_UNKNOWN_FIELD_IN_LITERAL;
pub const W_UNUSED_VARIABLE: DiagnosticCode = DiagnosticCode::W_UNUSED_VARIABLE;
pub const W_UNREACHABLE_ARM: DiagnosticCode = DiagnosticCode::W_UNREACHABLE_ARM;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_prefix_plus_four_digits() {
        assert_eq!(DiagnosticCode::E_RESOLVE_UNDEFINED_NAME.as_str(), "E1001");
        assert_eq!(DiagnosticCode::W_UNUSED_VARIABLE.as_str(), "W0001");
    }

    #[test]
    fn display_matches_as_str() {
        let code = DiagnosticCode::E_INFER_TYPE_MISMATCH;
        assert_eq!(format!("{}", code), code.as_str());
    }

    #[test]
    fn equality_is_by_prefix_and_number() {
        let a = DiagnosticCode::new("E", 1001);
        let b = DiagnosticCode::new("E", 1001);
        let c = DiagnosticCode::new("E", 1002);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn resolution_and_inference_codes_are_distinct() {
        assert_ne!(
            DiagnosticCode::E_RESOLVE_UNDEFINED_NAME,
            DiagnosticCode::E_INFER_TYPE_MISMATCH
        );
    }
}
