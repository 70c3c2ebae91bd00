//! corec-ast - AST node definitions
//!
//! These are the node shapes the core consumes, not produces: nothing in
//! this crate builds an AST from source text. A module is assembled by
//! hand in tests, or by a parser living outside this workspace.

use crate::expr::Path;
use crate::Item;
use corec_util::Span;

/// A single source file's worth of top-level declarations.
///
/// `path` is the module's own qualified path (e.g. `["game", "physics"]`
/// for a module declared as `mod game::physics`), used as the key other
/// modules' `import`/`use` directives look it up by.
#[derive(Debug, Clone)]
pub struct Module {
    pub path: Path,
    pub items: Vec<Item>,
    pub span: Span,
}
