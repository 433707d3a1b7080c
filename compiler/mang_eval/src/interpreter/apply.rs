//! Function application.
//!
//! `name!argument` looks `name` up through its read site, evaluates the
//! argument in the same mode and dispatches on what `name` is bound to:
//! one of the four function shapes, or a container, which is indexed.

use mang_fmt::serialize;
use mang_ir::{
    Argument, EvaluatedDictionary, Function, FunctionApplication, FunctionMulti, Handle, Kind,
    Slot, Span,
};

use super::Interpreter;
use crate::builtins;
use crate::check::check_types;
use crate::errors::{
    dynamic_argument, index_empty, index_out_of_range, missing_in_dictionary, missing_key,
    negative_index, static_argument, tuple_index_out_of_range, unexpected_expression,
    wrong_input_count, EvalError, EvalResult,
};
use crate::EvalMode;

impl Interpreter {
    pub(super) fn eval_application(
        &mut self,
        application: Handle,
        env: Handle,
        mode: EvalMode,
    ) -> EvalResult<Handle> {
        let FunctionApplication { callee, argument } = *self.arena.application(application);
        let span = application.span;
        let function = self.lookup(callee, env, span)?;
        let input = self.eval(argument, env, mode)?;
        match function.kind {
            Kind::Function => self.apply_function(function, input, mode, span),
            Kind::FunctionDictionary => self.apply_function_dictionary(function, input, mode, span),
            Kind::FunctionTuple => self.apply_function_tuple(function, input, mode, span),
            Kind::FunctionBuiltIn => builtins::call(&mut self.arena, mode, function, input, span),
            _ => match mode {
                EvalMode::Value => self.index(function, input, span),
                EvalMode::Type => self.index_types(function, input, span),
            },
        }
    }

    /// `in x out body`
    fn apply_function(
        &mut self,
        function: Handle,
        input: Handle,
        mode: EvalMode,
        span: Span,
    ) -> EvalResult<Handle> {
        let Function {
            environment,
            argument,
            body,
        } = *self.arena.function(function);
        self.check_argument(argument, input, environment, span)?;
        let slots = self.arena.push_slots([Slot {
            name: argument.name,
            value: input,
        }]);
        let frame = self.arena.make_frame(
            input.span,
            EvaluatedDictionary {
                parent: environment,
                slots,
            },
        );
        self.eval(body, frame, mode)
    }

    /// `in {x y} out body`. The body runs with the input dictionary as its
    /// environment.
    fn apply_function_dictionary(
        &mut self,
        function: Handle,
        input: Handle,
        mode: EvalMode,
        span: Span,
    ) -> EvalResult<Handle> {
        let FunctionMulti {
            environment,
            arguments,
            body,
        } = *self.arena.function_dictionary(function);
        match input.kind {
            Kind::EvaluatedDictionary => {}
            Kind::Any if mode.is_type() => return Ok(input),
            kind => {
                return Err(shape_error(
                    mode,
                    format!(
                        "I have found a type error. It happens when calling a function \
                         that is expecting a dictionary as input. But now it got a {kind}."
                    ),
                    span,
                ))
            }
        }
        let arguments = self.arena.arguments(arguments).to_vec();
        for argument in arguments {
            let value = self.arena.frame_lookup(input, argument.name).ok_or_else(|| {
                missing_in_dictionary(self.arena.name_text(argument.name), span)
            })?;
            self.check_argument(argument, value, environment, span)?;
        }
        self.eval(body, input, mode)
    }

    /// `in (x y) out body`
    fn apply_function_tuple(
        &mut self,
        function: Handle,
        input: Handle,
        mode: EvalMode,
        span: Span,
    ) -> EvalResult<Handle> {
        let FunctionMulti {
            environment,
            arguments,
            body,
        } = *self.arena.function_tuple(function);
        match input.kind {
            Kind::EvaluatedTuple => {}
            Kind::Any if mode.is_type() => return Ok(input),
            kind => {
                return Err(shape_error(
                    mode,
                    format!(
                        "I have found a type error. It happens when trying to call a \
                         function that takes a tuple. Instead of a tuple I got a {kind}."
                    ),
                    span,
                ))
            }
        }
        let arguments = self.arena.arguments(arguments).to_vec();
        let items = self.arena.tuple_items(input).to_vec();
        if arguments.len() != items.len() {
            return Err(wrong_input_count(span));
        }
        let mut slots = Vec::with_capacity(items.len());
        for (argument, value) in arguments.into_iter().zip(items) {
            self.check_argument(argument, value, environment, span)?;
            slots.push(Slot {
                name: argument.name,
                value,
            });
        }
        let slots = self.arena.push_slots(slots);
        let frame = self.arena.make_frame(
            input.span,
            EvaluatedDictionary {
                parent: environment,
                slots,
            },
        );
        self.eval(body, frame, mode)
    }

    /// `Type:name` parameters: the type is looked up where the function was
    /// defined and the input must be usable as that type.
    fn check_argument(
        &mut self,
        argument: Argument,
        input: Handle,
        environment: Handle,
        span: Span,
    ) -> EvalResult<()> {
        let Some(type_name) = argument.type_name else {
            return Ok(());
        };
        let expected = self.lookup(type_name, environment, span)?;
        check_types(&self.arena, input, expected, "function call", span)
    }

    /// Value-pass indexing of a container by `input`.
    fn index(&self, container: Handle, input: Handle, span: Span) -> EvalResult<Handle> {
        match container.kind {
            Kind::EvaluatedTable | Kind::EvaluatedTableView => {
                let key = serialize(&self.arena, input);
                match self.arena.table_row(container, &key) {
                    Some(row) => Ok(row.value),
                    None => Err(missing_key(key, span)),
                }
            }
            Kind::EvaluatedTuple => self.index_tuple(container, input, EvalMode::Value, span),
            Kind::EvaluatedStack => {
                let index = self.index_number(input, "stack", EvalMode::Value, span)?;
                let mut cell = *self.arena.evaluated_stack(container);
                for _ in 0..index {
                    match cell.rest.kind {
                        Kind::EvaluatedStack => cell = *self.arena.evaluated_stack(cell.rest),
                        _ => return Err(index_out_of_range("Stack", span)),
                    }
                }
                Ok(cell.top)
            }
            Kind::String => {
                let index = self.index_number(input, "string", EvalMode::Value, span)?;
                let mut cell = *self.arena.string(container);
                for _ in 0..index {
                    match cell.rest.kind {
                        Kind::String => cell = *self.arena.string(cell.rest),
                        _ => return Err(index_out_of_range("String", span)),
                    }
                }
                Ok(cell.top)
            }
            Kind::EmptyStack => Err(index_empty("stack", span)),
            Kind::EmptyString => Err(index_empty("string", span)),
            kind => Err(unexpected_expression(kind, "function application", span)),
        }
    }

    /// Type-pass indexing: containers answer with their sample element.
    fn index_types(&mut self, container: Handle, input: Handle, span: Span) -> EvalResult<Handle> {
        match container.kind {
            Kind::EvaluatedTable | Kind::EvaluatedTableView => {
                Ok(match self.arena.table_rows_of(container).first() {
                    Some(row) => row.value,
                    None => Handle::any(span),
                })
            }
            Kind::EvaluatedTuple => self.index_tuple(container, input, EvalMode::Type, span),
            Kind::EvaluatedStack => Ok(self.arena.evaluated_stack(container).top),
            Kind::String => Ok(self.arena.string(container).top),
            Kind::EmptyStack | Kind::Any => Ok(Handle::any(span)),
            Kind::EmptyString => Ok(self.arena.make_character(span, ' ')),
            kind => Err(unexpected_expression(kind, "function application", span)),
        }
    }

    /// Tuples are indexed for real in both passes.
    fn index_tuple(
        &self,
        tuple: Handle,
        input: Handle,
        mode: EvalMode,
        span: Span,
    ) -> EvalResult<Handle> {
        let index = self.index_number(input, "tuple", mode, span)?;
        let items = self.arena.tuple_items(tuple);
        items
            .get(index)
            .copied()
            .ok_or_else(|| tuple_index_out_of_range(items.len(), index, span))
    }

    fn index_number(
        &self,
        input: Handle,
        container: &str,
        mode: EvalMode,
        span: Span,
    ) -> EvalResult<usize> {
        if !input.is(Kind::Number) {
            return Err(shape_error(
                mode,
                format!(
                    "I have found a type error. It happens when indexing a {container}. \
                     The index is expected to be a NUMBER, but now it is a {}.",
                    input.kind
                ),
                span,
            ));
        }
        let number = self.arena.number(input);
        if number < 0.0 {
            return Err(negative_index(number, span));
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "non-negative; fractions truncate"
        )]
        let index = number as usize;
        Ok(index)
    }
}

fn shape_error(mode: EvalMode, message: String, span: Span) -> EvalError {
    match mode {
        EvalMode::Value => dynamic_argument(message, span),
        EvalMode::Type => static_argument(message, span),
    }
}
