//! corec-ast - the Input AST contract.
//!
//! These are the node shapes a parser would build and the semantic core
//! consumes; no lexer or parser lives behind them in this workspace. Every
//! node carries a source span; every value-producing expression carries a
//! [`types::TypeSlot`] that starts unresolved and is overwritten in place
//! by name resolution and type inference.

pub mod ast;
pub mod expr;
pub mod items;
pub mod pattern;
pub mod stmt;
pub mod types;

pub use ast::Module;
pub use expr::{
    AdtInitExpr, BinOp, BinaryOpExpr, BoolLiteralExpr, CharLiteralExpr, DeclRefExpr, Expr,
    FieldAccessExpr, FloatLiteralExpr, FunCallExpr, IntLiteralExpr, IntrinsicCallExpr,
    IntrinsicKind, MatchArm, MatchExpr, MemberInit, MethodCallExpr, Path, RangeLiteralExpr,
    StrLiteralExpr, TupleLiteralExpr, UnOp, UnaryOpExpr,
};
pub use items::{
    ConstItem, EnumItem, Field, FnItem, GenericParam, Item, Param, StaticItem, StructItem,
    UseItem, Variant, VariantData, Visibility,
};
pub use pattern::{Pattern, PatternBinding};
pub use stmt::{Block, DeclStmt, ElseClause, ForStmt, IfStmt, Stmt, WhileStmt};
pub use types::{fresh_slot, TypeExpr, TypeHandle, TypeSlot};
