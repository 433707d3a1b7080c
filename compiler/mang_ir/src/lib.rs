//! Mang IR - arena-resident expressions and values
//!
//! This crate contains the data structures shared by the parser, the
//! serializer and the evaluator:
//! - Spans for source locations
//! - Names for interned identifiers
//! - `Kind` and `Handle`, the tagged reference into the arena
//! - Payload structs, statements and frame slots
//! - The `Arena` that owns all of them
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`; a `Handle` is a kind tag plus an
//!   index into the per-kind pool for that tag
//! - **Build, evaluate, discard**: the arena only grows, and a run ends by
//!   dropping or clearing it as a whole

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod handle;
mod interner;
mod kind;
mod name;
mod nodes;
mod ranges;
mod span;

pub use arena::{to_u32, Arena};
pub use handle::{Handle, ReadSite};
pub use interner::StringInterner;
pub use kind::Kind;
pub use name::Name;
pub use nodes::{
    Alternative, Argument, Conditional, Cons, DynamicExpression, EvaluatedDictionary,
    EvaluatedTable, EvaluatedTableView, Function, FunctionApplication, FunctionBuiltIn,
    FunctionMulti, IsExpression, LocalName, Lookup, LookupChild, Row, Slot, Statement, Table,
    TableRow, Tuple, TypedExpression, UnevaluatedDictionary,
};
pub use ranges::{AlternativeRange, ArgumentRange, ExprRange, RowRange, SlotRange, StatementRange};
pub use span::{Span, SpanError};
