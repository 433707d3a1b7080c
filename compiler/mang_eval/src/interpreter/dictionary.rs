//! Dictionary evaluation.
//!
//! A dictionary literal opens a frame with one slot per distinct write
//! target, all starting out as `ANY`, and runs its statements against that
//! frame. The value pass follows the loop jumps; the type pass walks the
//! statements once from top to bottom.

use mang_ir::{EvaluatedDictionary, Handle, Kind, LocalName, Slot, Span, Statement, StatementRange};

use super::Interpreter;
use crate::builtins::container;
use crate::check::{boolean, boolean_types};
use crate::errors::EvalResult;
use crate::EvalMode;

impl Interpreter {
    /// Frame for `dictionary` with every slot unset.
    fn open_frame(&mut self, dictionary: Handle, env: Handle) -> (Handle, StatementRange) {
        let literal = *self.arena.dictionary(dictionary);
        let unset = Handle::any(dictionary.span);
        let slots: Vec<Slot> = self
            .arena
            .slot_names(literal.slot_names)
            .iter()
            .map(|&name| Slot { name, value: unset })
            .collect();
        let slots = self.arena.push_slots(slots);
        let frame = self.arena.make_frame(
            dictionary.span,
            EvaluatedDictionary { parent: env, slots },
        );
        (frame, literal.statements)
    }

    fn statement(&self, statements: StatementRange, pc: usize) -> Statement {
        self.arena.statements(statements)[pc]
    }

    fn statement_span(&self, statements: StatementRange, pc: usize) -> Span {
        self.arena.statement_spans(statements)[pc]
    }

    /// Value pass.
    pub(super) fn run_dictionary(&mut self, dictionary: Handle, env: Handle) -> EvalResult<Handle> {
        let mode = EvalMode::Value;
        let (frame, statements) = self.open_frame(dictionary, env);
        let mut pc = 0;
        while pc < statements.len() {
            let span = self.statement_span(statements, pc);
            pc = match self.statement(statements, pc) {
                Statement::Definition { target, expression } => {
                    let value = self.eval(expression, frame, mode)?;
                    self.arena.set_slot(frame, target.slot, value);
                    pc + 1
                }
                Statement::PutAssignment { target, expression } => {
                    let item = self.eval(expression, frame, mode)?;
                    self.put_into(frame, target, item, expression.span)?;
                    pc + 1
                }
                Statement::PutEachAssignment { target, expression } => {
                    let mut source = self.eval(expression, frame, mode)?;
                    while boolean(&self.arena, source)? {
                        let item = container::take(&mut self.arena, source, expression.span)?;
                        self.put_into(frame, target, item, expression.span)?;
                        source = container::drop(&mut self.arena, source, expression.span)?;
                    }
                    pc + 1
                }
                Statement::DropAssignment { target } => {
                    let current = self.arena.slot_value(frame, target.slot);
                    let rest = container::drop(&mut self.arena, current, span)?;
                    self.arena.set_slot(frame, target.slot, rest);
                    pc + 1
                }
                Statement::While { condition, end } => {
                    let value = self.eval(condition, frame, mode)?;
                    if boolean(&self.arena, value)? {
                        pc + 1
                    } else {
                        end as usize + 1
                    }
                }
                Statement::WhileEnd { start } => start as usize,
                Statement::For {
                    item,
                    container: source,
                    end,
                } => {
                    let current = self.loop_container(frame, env, source, span)?;
                    if boolean(&self.arena, current)? {
                        self.arena.set_slot(frame, source.slot, current);
                        let first = container::take(&mut self.arena, current, span)?;
                        self.arena.set_slot(frame, item.slot, first);
                        pc + 1
                    } else {
                        end as usize + 1
                    }
                }
                Statement::ForSimple {
                    container: source,
                    end,
                } => {
                    let current = self.loop_container(frame, env, source, span)?;
                    if boolean(&self.arena, current)? {
                        self.arena.set_slot(frame, source.slot, current);
                        pc + 1
                    } else {
                        end as usize + 1
                    }
                }
                Statement::ForEnd { start } | Statement::ForSimpleEnd { start } => {
                    let source = match self.statement(statements, start as usize) {
                        Statement::For { container, .. } | Statement::ForSimple { container, .. } => {
                            container
                        }
                        other => unreachable!("loop end jumps to {other:?} instead of a for statement"),
                    };
                    let current = self.arena.slot_value(frame, source.slot);
                    let rest = container::drop(&mut self.arena, current, span)?;
                    self.arena.set_slot(frame, source.slot, rest);
                    start as usize
                }
                Statement::Return => break,
            };
        }
        Ok(frame)
    }

    /// Type pass: every statement once, no jumps.
    pub(super) fn check_dictionary(&mut self, dictionary: Handle, env: Handle) -> EvalResult<Handle> {
        let mode = EvalMode::Type;
        let (frame, statements) = self.open_frame(dictionary, env);
        let mut written = vec![false; self.arena.dictionary(dictionary).slot_names.len()];
        for pc in 0..statements.len() {
            let span = self.statement_span(statements, pc);
            match self.statement(statements, pc) {
                Statement::Definition { target, expression } => {
                    let value = self.eval(expression, frame, mode)?;
                    written[target.slot as usize] = true;
                    if !value.is(Kind::Any) {
                        self.arena.set_slot(frame, target.slot, value);
                    }
                }
                Statement::PutAssignment { target, expression } => {
                    let item = self.eval(expression, frame, mode)?;
                    self.put_sample(frame, target, item, expression.span)?;
                }
                Statement::PutEachAssignment { target, expression } => {
                    let source = self.eval(expression, frame, mode)?;
                    let item = container::take_typed(&mut self.arena, source, expression.span)?;
                    self.put_sample(frame, target, item, expression.span)?;
                }
                Statement::DropAssignment { target } => {
                    let current = self.arena.slot_value(frame, target.slot);
                    let rest = container::drop_typed(&mut self.arena, current, span)?;
                    self.arena.set_slot(frame, target.slot, rest);
                }
                Statement::While { condition, .. } => {
                    let value = self.eval(condition, frame, mode)?;
                    boolean_types(value)?;
                }
                Statement::For {
                    item,
                    container: source,
                    ..
                } => {
                    let current = self.loop_sample(frame, env, source, &written, span)?;
                    boolean_types(current)?;
                    self.arena.set_slot(frame, source.slot, current);
                    written[item.slot as usize] = true;
                    let sample = container::take_typed(&mut self.arena, current, span)?;
                    self.arena.set_slot(frame, item.slot, sample);
                }
                Statement::ForSimple {
                    container: source, ..
                } => {
                    let current = self.loop_sample(frame, env, source, &written, span)?;
                    boolean_types(current)?;
                    self.arena.set_slot(frame, source.slot, current);
                }
                Statement::WhileEnd { .. }
                | Statement::ForEnd { .. }
                | Statement::ForSimpleEnd { .. }
                | Statement::Return => {}
            }
        }
        Ok(frame)
    }

    /// Container of a `for` loop. A slot that was never written falls back
    /// to the name as seen from the enclosing environment.
    fn loop_container(
        &self,
        frame: Handle,
        env: Handle,
        name: LocalName,
        span: Span,
    ) -> EvalResult<Handle> {
        let current = self.arena.slot_value(frame, name.slot);
        if current.is(Kind::Any) {
            return self.walk(name.name, env, span).map(|(value, _)| value);
        }
        Ok(current)
    }

    /// Type-pass loop container. A slot this dictionary already defined as
    /// `ANY` stays `ANY`; anything else is looked up like in the value pass.
    fn loop_sample(
        &self,
        frame: Handle,
        env: Handle,
        name: LocalName,
        written: &[bool],
        span: Span,
    ) -> EvalResult<Handle> {
        let current = self.arena.slot_value(frame, name.slot);
        if current.is(Kind::Any) && written[name.slot as usize] {
            return Ok(current);
        }
        self.loop_container(frame, env, name, span)
    }

    /// `target += item`
    fn put_into(
        &mut self,
        frame: Handle,
        target: LocalName,
        item: Handle,
        span: Span,
    ) -> EvalResult<()> {
        let current = self.arena.slot_value(frame, target.slot);
        let input = self.arena.make_evaluated_tuple_of(Span::DUMMY, &[item, current]);
        let updated = container::put(&mut self.arena, input, span)?;
        self.arena.set_slot(frame, target.slot, updated);
        Ok(())
    }

    /// Type-pass `target += item`.
    fn put_sample(
        &mut self,
        frame: Handle,
        target: LocalName,
        item: Handle,
        span: Span,
    ) -> EvalResult<()> {
        let current = self.arena.slot_value(frame, target.slot);
        let input = self.arena.make_evaluated_tuple_of(Span::DUMMY, &[item, current]);
        let updated = container::put_typed(&mut self.arena, input, span)?;
        self.arena.set_slot(frame, target.slot, updated);
        Ok(())
    }
}
