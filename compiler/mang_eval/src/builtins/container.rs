//! `clear`, `put`, `take`, `drop` and `get`.
//!
//! Containers are stacks, strings, tables and table views. Numbers and
//! booleans also act as containers: a number counts down under `drop`,
//! `yes` drops to `no`. Nothing here mutates an existing value.

use mang_fmt::{serialize, serialize_types};
use mang_ir::{Arena, Cons, EvaluatedTable, Handle, Kind, Row, Span};

use super::{binary_tuple, Check};
use crate::errors::{take_from_empty_table, unexpected_expression, EvalResult};

const OUT: Span = Span::DUMMY;

pub(super) fn clear(arena: &mut Arena, input: Handle, _span: Span) -> EvalResult<Handle> {
    match input.kind {
        Kind::EvaluatedStack | Kind::EmptyStack => Ok(Handle::unit(Kind::EmptyStack, OUT)),
        Kind::String | Kind::EmptyString => Ok(Handle::unit(Kind::EmptyString, OUT)),
        Kind::EvaluatedTable | Kind::EvaluatedTableView => {
            Ok(arena.make_evaluated_table(OUT, EvaluatedTable::new()))
        }
        Kind::Number => Ok(arena.make_number(OUT, 0.0)),
        Kind::Yes | Kind::No => Ok(Handle::boolean(false, OUT)),
        kind => Err(unexpected_expression(kind, "clear operation", input.span)),
    }
}

/// Keeps the sample: a cleared stack of numbers is still a stack of numbers.
pub(super) fn clear_typed(_arena: &mut Arena, input: Handle, _span: Span) -> EvalResult<Handle> {
    match input.kind {
        Kind::EvaluatedStack
        | Kind::EmptyStack
        | Kind::String
        | Kind::EmptyString
        | Kind::EvaluatedTable
        | Kind::EvaluatedTableView
        | Kind::Number
        | Kind::Yes
        | Kind::No
        | Kind::Any => Ok(input),
        kind => Err(unexpected_expression(kind, "clearTyped operation", input.span)),
    }
}

/// `put!(item container)`
pub(crate) fn put(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    let (item, collection) = binary_tuple(arena, input, "put", Check::Dynamic, span)?;
    match collection.kind {
        Kind::EvaluatedStack | Kind::EmptyStack => Ok(push_stack(arena, item, collection)),
        Kind::String | Kind::EmptyString => {
            string_item(item, Check::Dynamic, span)?;
            Ok(push_string(arena, item, collection))
        }
        Kind::EvaluatedTable | Kind::EvaluatedTableView => {
            let (key, value) = binary_tuple(arena, item, "put table", Check::Dynamic, span)?;
            let label = serialize(arena, key);
            Ok(put_row(arena, collection, Row { label, key, value }))
        }
        Kind::Number => put_number(arena, collection, item, Check::Dynamic, span),
        Kind::Yes | Kind::No => Ok(item),
        kind => Err(unexpected_expression(kind, "put operation", collection.span)),
    }
}

pub(crate) fn put_typed(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    let (item, collection) = binary_tuple(arena, input, "put", Check::Static, span)?;
    if item.is(Kind::Any) {
        return Ok(collection);
    }
    match collection.kind {
        Kind::EvaluatedStack | Kind::EmptyStack => Ok(push_stack(arena, item, collection)),
        Kind::Any => Ok(collection),
        Kind::String => {
            string_item(item, Check::Static, span)?;
            Ok(collection)
        }
        Kind::EmptyString => {
            string_item(item, Check::Static, span)?;
            Ok(push_string(arena, item, collection))
        }
        Kind::EvaluatedTable | Kind::EvaluatedTableView => {
            let (key, value) = binary_tuple(arena, item, "putTable", Check::Static, span)?;
            let label = serialize_types(arena, key);
            Ok(put_row(arena, collection, Row { label, key, value }))
        }
        Kind::Number => put_number(arena, collection, item, Check::Static, span),
        Kind::Yes | Kind::No => Ok(item),
        kind => Err(unexpected_expression(kind, "putTyped operation", collection.span)),
    }
}

fn push_stack(arena: &mut Arena, top: Handle, rest: Handle) -> Handle {
    arena.make_evaluated_stack(rest.span, Cons { top, rest })
}

fn push_string(arena: &mut Arena, top: Handle, rest: Handle) -> Handle {
    arena.make_string(rest.span, Cons { top, rest })
}

/// Copy of `table` with `row` inserted.
fn put_row(arena: &mut Arena, table: Handle, row: Row) -> Handle {
    let mut rows = EvaluatedTable::new();
    for existing in arena.table_rows_of(table) {
        rows.insert(existing.clone());
    }
    rows.insert(row);
    arena.make_evaluated_table(table.span, rows)
}

fn put_number(
    arena: &mut Arena,
    total: Handle,
    item: Handle,
    check: Check,
    span: Span,
) -> EvalResult<Handle> {
    match item.kind {
        Kind::Number => {
            let sum = arena.number(total) + arena.number(item);
            Ok(arena.make_number(OUT, sum))
        }
        Kind::Any => Ok(total),
        kind => Err(check.error(
            format!(
                "I found a {} type error for the operation put!(NUMBER item). \
                 It expects the item to be a NUMBER, but now it got a {kind}.",
                check.name()
            ),
            span,
        )),
    }
}

/// String cells only hold characters.
fn string_item(item: Handle, check: Check, span: Span) -> EvalResult<()> {
    if item.is(Kind::Character) {
        return Ok(());
    }
    Err(check.error(
        format!(
            "I found a {} type error for the operation put!(item STRING). \
             It expects the item to be a CHARACTER, but now it got a {}.",
            check.name(),
            item.kind
        ),
        span,
    ))
}

pub(crate) fn take(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    match input.kind {
        Kind::EvaluatedStack => Ok(arena.evaluated_stack(input).top),
        Kind::String => Ok(arena.string(input).top),
        Kind::EvaluatedTable | Kind::EvaluatedTableView => {
            let Some(row) = arena.table_rows_of(input).first() else {
                return Err(take_from_empty_table(span));
            };
            let pair = [row.key, row.value];
            Ok(arena.make_evaluated_tuple_of(OUT, &pair))
        }
        Kind::Number => Ok(arena.make_number(OUT, 1.0)),
        Kind::Yes | Kind::No => Ok(input),
        kind => Err(unexpected_expression(kind, "take", span)),
    }
}

pub(crate) fn take_typed(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    match input.kind {
        Kind::EvaluatedStack => Ok(arena.evaluated_stack(input).top),
        Kind::String => Ok(arena.string(input).top),
        Kind::EvaluatedTable | Kind::EvaluatedTableView => {
            let pair = match arena.table_rows_of(input).first() {
                Some(row) => [row.key, row.value],
                None => [Handle::any(input.span), Handle::any(input.span)],
            };
            Ok(arena.make_evaluated_tuple_of(OUT, &pair))
        }
        Kind::EmptyStack | Kind::Any => Ok(Handle::any(input.span)),
        Kind::EmptyString => Ok(arena.make_character(input.span, ' ')),
        Kind::Number | Kind::Yes | Kind::No => Ok(input),
        kind => Err(unexpected_expression(kind, "take", span)),
    }
}

pub(crate) fn drop(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    match input.kind {
        Kind::EvaluatedStack => Ok(arena.evaluated_stack(input).rest),
        Kind::String => Ok(arena.string(input).rest),
        Kind::EvaluatedTable | Kind::EvaluatedTableView => Ok(arena.drop_first_row(OUT, input)),
        Kind::EmptyStack | Kind::EmptyString | Kind::No => Ok(input),
        Kind::Number => {
            let n = arena.number(input) - 1.0;
            Ok(arena.make_number(OUT, n))
        }
        Kind::Yes => Ok(Handle::boolean(false, OUT)),
        kind => Err(unexpected_expression(kind, "drop", span)),
    }
}

pub(crate) fn drop_typed(_arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    match input.kind {
        Kind::EvaluatedStack
        | Kind::String
        | Kind::EvaluatedTable
        | Kind::EvaluatedTableView
        | Kind::EmptyStack
        | Kind::EmptyString
        | Kind::Number
        | Kind::Yes
        | Kind::No
        | Kind::Any => Ok(input),
        kind => Err(unexpected_expression(kind, "drop typed", span)),
    }
}

/// `get!(key table default)`
pub(super) fn get(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    let [key, table, default] = get_arguments(arena, input, Check::Dynamic, span)?;
    let label = serialize(arena, key);
    Ok(arena.table_row(table, &label).map_or(default, |row| row.value))
}

pub(super) fn get_typed(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    let [_, _, default] = get_arguments(arena, input, Check::Static, span)?;
    Ok(default)
}

fn get_arguments(
    arena: &Arena,
    input: Handle,
    check: Check,
    span: Span,
) -> EvalResult<[Handle; 3]> {
    let fail = |detail: String| {
        check.error(
            format!(
                "I found a {} type error for the function get!(key table default). {detail}",
                check.name()
            ),
            span,
        )
    };
    if !input.is(Kind::EvaluatedTuple) {
        return Err(fail(format!(
            "It expects a tuple of three items, but now it got a {}.",
            input.kind
        )));
    }
    let &[key, table, default] = arena.tuple_items(input) else {
        return Err(fail(format!(
            "It expects a tuple of three items, but now it got {} items.",
            arena.tuple_items(input).len()
        )));
    };
    let table_ok = match check {
        Check::Dynamic => matches!(table.kind, Kind::EvaluatedTable | Kind::EvaluatedTableView),
        Check::Static => matches!(
            table.kind,
            Kind::EvaluatedTable | Kind::EvaluatedTableView | Kind::Any
        ),
    };
    if !table_ok {
        return Err(fail(format!(
            "It expects a tuple where the second item is a table, but now it got a {}.",
            table.kind
        )));
    }
    Ok([key, table, default])
}
