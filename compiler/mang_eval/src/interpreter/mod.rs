//! Tree-walking interpreter shared by the value pass and the type pass.
//!
//! # Architecture
//!
//! Everything goes through [`Interpreter::eval`], which dispatches on the
//! expression kind. Evaluated kinds pass through unchanged. The
//! [`EvalMode`] only matters for `dynamic`, conditionals, `is`,
//! dictionaries and function application; every other kind is evaluated the
//! same way in both passes.
//!
//! - `lookup`: read sites and the hop-count cache
//! - `literals`: stack, tuple and table literals, child lookup, typed expressions
//! - `branches`: `if` and `is`
//! - `dictionary`: the statement executor
//! - `apply`: function application and container indexing
//!
//! # Environments
//!
//! An environment is an `EvaluatedDictionary` frame. The chain of parents
//! ends in the builtin frame, whose parent is `ANY`. A dictionary literal
//! opens a frame whose parent is the environment it is evaluated in; a call
//! opens a frame whose parent is the environment the function captured.

mod apply;
mod branches;
mod dictionary;
mod literals;
mod lookup;

use mang_fmt::{serialize, serialize_types};
use mang_ir::{Arena, Function, FunctionMulti, Handle, Kind, ReadSite};
use mang_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::builtins::builtin_frame;
use crate::errors::{unexpected_expression, EvalResult};
use crate::{EvalMode, PRELUDE};

/// Interpreter state for one run: the arena and the hop-count cache.
///
/// Hop counts are recorded on the first evaluation of each read site and
/// never invalidated, so one interpreter should run one pass. The entry
/// points in the crate root create a fresh interpreter per pass.
#[derive(Default)]
pub struct Interpreter {
    arena: Arena,
    hops: FxHashMap<ReadSite, u32>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    /// Cached hop count of a read site, if it has been evaluated.
    pub fn hop_count(&self, site: ReadSite) -> Option<u32> {
        self.hops.get(&site).copied()
    }

    /// Parse `source` into this interpreter's arena.
    pub fn parse(&mut self, source: &str) -> EvalResult<Handle> {
        Ok(mang_parse::parse(&mut self.arena, source)?)
    }

    /// Evaluate the standard library on top of the builtin frame.
    ///
    /// Returns the standard library frame, the environment user programs
    /// are evaluated in.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn prelude(&mut self, mode: EvalMode) -> EvalResult<Handle> {
        let builtins = builtin_frame(&mut self.arena);
        let prelude = self.parse(PRELUDE)?;
        let frame = self.eval(prelude, builtins, mode)?;
        tracing::debug!(
            definitions = self.arena.frame_slots(frame).len(),
            "prelude ready"
        );
        Ok(frame)
    }

    /// Evaluate `expression` in `env`.
    pub fn eval(&mut self, expression: Handle, env: Handle, mode: EvalMode) -> EvalResult<Handle> {
        ensure_sufficient_stack(|| self.eval_inner(expression, env, mode))
    }

    pub fn evaluate(&mut self, expression: Handle, env: Handle) -> EvalResult<Handle> {
        self.eval(expression, env, EvalMode::Value)
    }

    pub fn evaluate_types(&mut self, expression: Handle, env: Handle) -> EvalResult<Handle> {
        self.eval(expression, env, EvalMode::Type)
    }

    /// Text form of a result of `mode`.
    pub fn serialize(&self, handle: Handle, mode: EvalMode) -> String {
        match mode {
            EvalMode::Value => serialize(&self.arena, handle),
            EvalMode::Type => serialize_types(&self.arena, handle),
        }
    }

    fn eval_inner(&mut self, expression: Handle, env: Handle, mode: EvalMode) -> EvalResult<Handle> {
        match expression.kind {
            Kind::Number
            | Kind::Character
            | Kind::Yes
            | Kind::No
            | Kind::EmptyString
            | Kind::String
            | Kind::EmptyStack
            | Kind::EvaluatedStack
            | Kind::EvaluatedDictionary
            | Kind::EvaluatedTuple
            | Kind::EvaluatedTable
            | Kind::EvaluatedTableView => Ok(expression),

            Kind::Function => {
                let function = *self.arena.function(expression);
                Ok(self.arena.make_function(
                    expression.span,
                    Function {
                        environment: env,
                        ..function
                    },
                ))
            }
            Kind::FunctionDictionary => {
                let function = *self.arena.function_dictionary(expression);
                Ok(self.arena.make_function_dictionary(
                    expression.span,
                    FunctionMulti {
                        environment: env,
                        ..function
                    },
                ))
            }
            Kind::FunctionTuple => {
                let function = *self.arena.function_tuple(expression);
                Ok(self.arena.make_function_tuple(
                    expression.span,
                    FunctionMulti {
                        environment: env,
                        ..function
                    },
                ))
            }
            Kind::LookupSymbol => {
                let lookup = *self.arena.lookup_symbol(expression);
                self.lookup(lookup, env, expression.span)
            }

            Kind::Stack => self.eval_stack(expression, env, mode),
            Kind::Tuple => self.eval_tuple(expression, env, mode),
            Kind::Table => self.eval_table(expression, env, mode),
            Kind::LookupChild => self.eval_lookup_child(expression, env, mode),
            Kind::TypedExpression => self.eval_typed(expression, env, mode),

            Kind::DynamicExpression => match mode {
                EvalMode::Value => {
                    let inner = self.arena.dynamic(expression).inner;
                    self.eval(inner, env, mode)
                }
                EvalMode::Type => Ok(Handle::any(expression.span)),
            },
            Kind::Conditional => self.eval_conditional(expression, env, mode),
            Kind::Is => self.eval_is(expression, env, mode),
            Kind::Dictionary => {
                if mode.visits_all_branches() {
                    self.check_dictionary(expression, env)
                } else {
                    self.run_dictionary(expression, env)
                }
            }
            Kind::FunctionApplication => self.eval_application(expression, env, mode),

            kind @ (Kind::FunctionBuiltIn | Kind::Any) => Err(unexpected_expression(
                kind,
                match mode {
                    EvalMode::Value => "evaluate operation",
                    EvalMode::Type => "evaluate types operation",
                },
                expression.span,
            )),
        }
    }
}
