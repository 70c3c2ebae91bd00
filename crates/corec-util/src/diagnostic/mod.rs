//! Structured diagnostic reporting.
//!
//! Name resolution and type inference never stop at the first problem: every
//! failure is recorded here and accumulated into a [`Handler`], which the
//! driver inspects once a phase completes.
//!
//! # Examples
//!
//! ```
//! use corec_util::diagnostic::{DiagnosticBuilder, Span, DiagnosticCode};
//!
//! let diag = DiagnosticBuilder::error("unresolved name `foo`")
//!     .code(DiagnosticCode::E_RESOLVE_UNDEFINED_NAME)
//!     .span(Span::DUMMY)
//!     .help("did you mean `fool`?")
//!     .build();
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use codes::{
    E_INFER_ARITY_MISMATCH, E_INFER_CYCLIC_TYPE, E_INFER_DOMAIN_MISMATCH,
    E_INFER_NON_EXHAUSTIVE_MATCH, E_INFER_NOT_CALLABLE, E_INFER_TYPE_MISMATCH,
    E_INFER_UNKNOWN_FIELD, E_INFER_UNKNOWN_FIELD_IN_LITERAL, E_INFER_UNKNOWN_METHOD,
    E_INFER_VARIANT_ARITY_MISMATCH, E_RESOLVE_BREAK_OUTSIDE_LOOP, E_RESOLVE_DUPLICATE_BINDING,
    E_RESOLVE_DUPLICATE_DEF, E_RESOLVE_DUPLICATE_FIELD, E_RESOLVE_DUPLICATE_PARAM,
    E_RESOLVE_IMPORT_FROM_OWN_MODULE, E_RESOLVE_MISSING_FIELDS, E_RESOLVE_SELF_IMPORT,
    E_RESOLVE_UNDEFINED_NAME, E_RESOLVE_UNKNOWN_ITEM_PATH, E_RESOLVE_UNKNOWN_LABEL,
    E_RESOLVE_UNKNOWN_TYPE, E_RESOLVE_UNKNOWN_VARIANT, W_UNREACHABLE_ARM, W_UNUSED_VARIABLE,
};
pub use level::{ColorConfig, Level, LabelStyle};

pub use crate::Span;
use std::cell::RefCell;

/// A labeled span attached to a diagnostic, pointing at a relevant piece of source.
///
/// The primary label marks where the problem was detected; secondary labels
/// point at related declarations (e.g. the declaration a duplicate clashes with).
#[derive(Clone, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub style: LabelStyle,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self { span, message: message.into(), style: LabelStyle::Primary }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self { span, message: message.into(), style: LabelStyle::Secondary }
    }
}

/// A suggested source edit attached to a diagnostic.
#[derive(Clone, Debug)]
pub struct Suggestion {
    pub span: Span,
    pub replacement: String,
    pub message: String,
}

impl Suggestion {
    pub fn new(span: Span, replacement: impl Into<String>, message: impl Into<String>) -> Self {
        Self { span, replacement: replacement.into(), message: message.into() }
    }
}

/// A diagnostic message with severity, labeled spans, notes, and suggestions.
///
/// # Examples
///
/// ```
/// use corec_util::diagnostic::{Diagnostic, Level, Span};
///
/// let diag = Diagnostic::error("something went wrong", Span::DUMMY);
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub code: Option<DiagnosticCode>,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub helps: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            labels: Vec::new(),
            notes: Vec::new(),
            helps: Vec::new(),
            suggestions: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

/// Collects diagnostics emitted over the course of a compilation phase.
///
/// The resolver and inferencer each hold a `&Handler` rather than returning
/// `Result` from every walk step: a failed sub-walk records a diagnostic and
/// the walk continues, so a single module reports every error it can find
/// instead of stopping at the first one.
///
/// # Examples
///
/// ```
/// use corec_util::diagnostic::Handler;
///
/// let handler = Handler::new();
/// handler.build_error(corec_util::Span::DUMMY, "unresolved name `foo`").emit(&handler);
/// assert!(handler.has_errors());
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    panic_on_error: RefCell<bool>,
}

impl Handler {
    pub fn new() -> Self {
        Self { diagnostics: RefCell::new(Vec::new()), panic_on_error: RefCell::new(false) }
    }

    /// Create a handler that panics as soon as an error is emitted, for tests
    /// that assert a walk never produces one.
    pub fn new_panicking() -> Self {
        Self { diagnostics: RefCell::new(Vec::new()), panic_on_error: RefCell::new(true) }
    }

    fn emit(&self, diagnostic: Diagnostic) {
        if *self.panic_on_error.borrow() && diagnostic.level == Level::Error {
            panic!("diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Warning).count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn diagnostic_error_has_error_level() {
        let diag = Diagnostic::error("error message", Span::DUMMY);
        assert_eq!(diag.level, Level::Error);
    }

    #[test]
    fn diagnostic_builder_methods_accumulate() {
        let diag = Diagnostic::error("type mismatch", Span::DUMMY)
            .with_code(DiagnosticCode::E_INFER_TYPE_MISMATCH)
            .with_label(Label::primary(Span::DUMMY, "expected here"))
            .with_note("expected `i32`")
            .with_help("try adding a type annotation")
            .with_suggestion(Suggestion::new(Span::DUMMY, "i32", "annotate with i32"));

        assert_eq!(diag.code, Some(DiagnosticCode::E_INFER_TYPE_MISMATCH));
        assert_eq!(diag.labels.len(), 1);
        assert_eq!(diag.notes, vec!["expected `i32`"]);
        assert_eq!(diag.helps, vec!["try adding a type annotation"]);
        assert_eq!(diag.suggestions.len(), 1);
    }

    #[test]
    fn handler_starts_empty() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn handler_emit_diagnostic_tracks_errors() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn handler_clear_resets_counts() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        handler.clear();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn handler_panicking_panics_on_error() {
        let handler = Handler::new_panicking();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        }));
        assert!(result.is_err());
    }

    #[test]
    fn handler_build_error_attaches_code() {
        let handler = Handler::new();
        handler
            .build_error(Span::DUMMY, "unresolved name `foo`")
            .code(DiagnosticCode::E_RESOLVE_UNDEFINED_NAME)
            .emit(&handler);

        assert!(handler.has_errors());
        let diags = handler.diagnostics();
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_RESOLVE_UNDEFINED_NAME));
    }

    #[test]
    fn handler_build_warning_does_not_count_as_error() {
        let handler = Handler::new();
        handler
            .build_warning(Span::DUMMY, "unused variable `x`")
            .code(DiagnosticCode::W_UNUSED_VARIABLE)
            .emit(&handler);

        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);
    }
}
