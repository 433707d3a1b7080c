//! Mang Eval - dual-mode evaluator for mang_lang.
//!
//! One tree-walking [`Interpreter`] runs programs in two passes. The type
//! pass ([`EvalMode::Type`]) computes a sample of every value: scalars stand
//! for their kind, containers for their first element, and every branch of
//! a conditional is visited. The value pass ([`EvalMode::Value`]) computes
//! the result.
//!
//! Programs run on top of the standard library ([`PRELUDE`]), which in turn
//! runs on top of the builtin frame.
//!
//! # Entry points
//!
//! - [`evaluate_all`]: type pass, then value pass; returns the value
//! - [`evaluate`] / [`evaluate_types`]: one pass
//! - [`reformat`]: parse and print in canonical form
//!
//! Each entry point uses a fresh interpreter per pass, so read-site hop
//! counts never leak between passes or runs.

mod builtins;
mod check;
pub mod errors;
mod eval_mode;
pub mod interpreter;

pub use check::{boolean, boolean_types, check_types, is_equal};
pub use errors::{EvalError, EvalResult};
pub use eval_mode::EvalMode;
pub use interpreter::Interpreter;

use mang_ir::Arena;

/// Standard library source.
pub const PRELUDE: &str = include_str!("prelude.mang");

/// Check `source` with the type pass, then evaluate it.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate_all(source: &str) -> EvalResult<String> {
    run(source, EvalMode::Type)?;
    run(source, EvalMode::Value)
}

/// Value pass only.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(source: &str) -> EvalResult<String> {
    run(source, EvalMode::Value)
}

/// Type pass only.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate_types(source: &str) -> EvalResult<String> {
    run(source, EvalMode::Type)
}

/// Canonical form of `source`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn reformat(source: &str) -> EvalResult<String> {
    let mut arena = Arena::new();
    let expression = mang_parse::parse(&mut arena, source)?;
    Ok(mang_fmt::serialize(&arena, expression))
}

fn run(source: &str, mode: EvalMode) -> EvalResult<String> {
    let mut interpreter = Interpreter::new();
    let program = interpreter.parse(source)?;
    let environment = interpreter.prelude(mode)?;
    let result = interpreter.eval(program, environment, mode)?;
    tracing::debug!(mode = mode.name(), kind = %result.kind, "evaluated");
    Ok(interpreter.serialize(result, mode))
}

#[cfg(test)]
mod tests;
