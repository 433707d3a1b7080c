//! `if` and `is`.
//!
//! The value pass picks one branch. The type pass evaluates every condition
//! and every branch, checks each branch against the `else` branch and
//! returns the `else` branch.

use mang_ir::{Alternative, Handle};

use super::Interpreter;
use crate::check::{boolean, check_types, is_equal};
use crate::errors::EvalResult;
use crate::EvalMode;

impl Interpreter {
    pub(super) fn eval_conditional(
        &mut self,
        expression: Handle,
        env: Handle,
        mode: EvalMode,
    ) -> EvalResult<Handle> {
        let conditional = *self.arena.conditional(expression);
        let alternatives = self.arena.alternatives(conditional.alternatives).to_vec();
        match mode {
            EvalMode::Value => {
                for alternative in alternatives {
                    let condition = self.eval(alternative.left, env, mode)?;
                    if boolean(&self.arena, condition)? {
                        return self.eval(alternative.right, env, mode);
                    }
                }
                self.eval(conditional.otherwise, env, mode)
            }
            EvalMode::Type => {
                for alternative in &alternatives {
                    self.eval(alternative.left, env, mode)?;
                }
                self.join_branches(&alternatives, conditional.otherwise, env, "if")
            }
        }
    }

    pub(super) fn eval_is(
        &mut self,
        expression: Handle,
        env: Handle,
        mode: EvalMode,
    ) -> EvalResult<Handle> {
        let is = *self.arena.is_expression(expression);
        let alternatives = self.arena.alternatives(is.alternatives).to_vec();
        let input = self.eval(is.input, env, mode)?;
        match mode {
            EvalMode::Value => {
                for alternative in alternatives {
                    let candidate = self.eval(alternative.left, env, mode)?;
                    if is_equal(&self.arena, input, candidate) {
                        return self.eval(alternative.right, env, mode);
                    }
                }
                self.eval(is.otherwise, env, mode)
            }
            EvalMode::Type => {
                for alternative in &alternatives {
                    self.eval(alternative.left, env, mode)?;
                }
                self.join_branches(&alternatives, is.otherwise, env, "is")
            }
        }
    }

    /// Type of a branching expression: the `else` branch, which every other
    /// branch must fit.
    fn join_branches(
        &mut self,
        alternatives: &[Alternative],
        otherwise: Handle,
        env: Handle,
        context: &str,
    ) -> EvalResult<Handle> {
        let result = self.eval(otherwise, env, EvalMode::Type)?;
        for alternative in alternatives {
            let branch = self.eval(alternative.right, env, EvalMode::Type)?;
            check_types(&self.arena, result, branch, context, alternative.right.span)?;
        }
        Ok(result)
    }
}
