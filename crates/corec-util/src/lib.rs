//! corec-util - shared foundation types for the corec compiler core.
//!
//! Interned symbols, source spans, structured diagnostics, and typed arena
//! indices used by `corec-ast` and `corec-sem`. Nothing in this crate knows
//! about any particular language construct; it only provides the plumbing
//! the rest of the compiler builds on.

pub mod def_id;
pub mod diagnostic;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use def_id::{DefId, DefIdGenerator};
pub use diagnostic::{
    ColorConfig, Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Label, LabelStyle,
    Level, SourceSnippet, Suggestion,
};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;
