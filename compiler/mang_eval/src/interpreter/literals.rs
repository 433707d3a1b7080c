//! Container literals, child lookup and typed expressions.

use mang_fmt::{serialize, serialize_types};
use mang_ir::{Cons, EvaluatedTable, Handle, Kind, LookupChild, Row, TypedExpression};

use super::Interpreter;
use crate::check::check_types;
use crate::errors::{missing_in_dictionary, unexpected_expression, EvalResult};
use crate::EvalMode;

impl Interpreter {
    /// `[a b c]`: items are evaluated front to back.
    pub(super) fn eval_stack(
        &mut self,
        stack: Handle,
        env: Handle,
        mode: EvalMode,
    ) -> EvalResult<Handle> {
        let mut items = Vec::new();
        let mut cell = stack;
        while cell.is(Kind::Stack) {
            let Cons { top, rest } = *self.arena.stack(cell);
            items.push(top);
            cell = rest;
        }
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            values.push(self.eval(item, env, mode)?);
        }
        let mut result = Handle::unit(Kind::EmptyStack, stack.span);
        for top in values.into_iter().rev() {
            result = self
                .arena
                .make_evaluated_stack(stack.span, Cons { top, rest: result });
        }
        Ok(result)
    }

    pub(super) fn eval_tuple(
        &mut self,
        tuple: Handle,
        env: Handle,
        mode: EvalMode,
    ) -> EvalResult<Handle> {
        let items = self.arena.tuple_items(tuple).to_vec();
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            values.push(self.eval(item, env, mode)?);
        }
        Ok(self.arena.make_evaluated_tuple_of(tuple.span, &values))
    }

    /// `<(k v) ...>`. Rows are keyed by the key's text in `mode`; a repeated
    /// key keeps the last row.
    pub(super) fn eval_table(
        &mut self,
        table: Handle,
        env: Handle,
        mode: EvalMode,
    ) -> EvalResult<Handle> {
        let rows = self.arena.table_rows(self.arena.table(table).rows).to_vec();
        let mut evaluated = EvaluatedTable::new();
        for row in rows {
            let key = self.eval(row.key, env, mode)?;
            let value = self.eval(row.value, env, mode)?;
            let label = match mode {
                EvalMode::Value => serialize(&self.arena, key),
                EvalMode::Type => serialize_types(&self.arena, key),
            };
            evaluated.insert(Row { label, key, value });
        }
        Ok(self.arena.make_evaluated_table(table.span, evaluated))
    }

    /// `name@child`
    pub(super) fn eval_lookup_child(
        &mut self,
        expression: Handle,
        env: Handle,
        mode: EvalMode,
    ) -> EvalResult<Handle> {
        let LookupChild { name, child } = *self.arena.lookup_child(expression);
        let child = self.eval(child, env, mode)?;
        match child.kind {
            Kind::EvaluatedDictionary => self
                .arena
                .frame_lookup(child, name)
                .ok_or_else(|| missing_in_dictionary(self.arena.name_text(name), expression.span)),
            Kind::Any if mode.is_type() => Ok(child),
            kind => Err(unexpected_expression(kind, "child lookup", expression.span)),
        }
    }

    /// `Type:value` evaluates to `value` after checking it against `Type`.
    pub(super) fn eval_typed(
        &mut self,
        expression: Handle,
        env: Handle,
        mode: EvalMode,
    ) -> EvalResult<Handle> {
        let TypedExpression { type_name, value } = *self.arena.typed(expression);
        let expected = self.lookup(type_name, env, expression.span)?;
        let value = self.eval(value, env, mode)?;
        check_types(&self.arena, expected, value, "typed expression", expression.span)?;
        Ok(value)
    }
}
