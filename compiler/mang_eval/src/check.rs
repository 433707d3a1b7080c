//! Subtype checking, truthiness and structural equality.
//!
//! All three only read the arena. `check_types` is the same in both passes;
//! in the value pass it sees real values, in the type pass it sees samples.

use mang_ir::{Arena, Handle, Kind, Span};

use crate::errors::{
    inconsistent_tuple_size, name_not_in_dictionary, not_a_boolean, not_a_supertype,
    unexpected_expression, EvalResult,
};

/// Check that `sub` can be used where `sup` is expected.
///
/// `ANY` on either side always passes. Containers are compared through their
/// first element, tuples pointwise, dictionaries by the names of `sup`.
pub fn check_types(
    arena: &Arena,
    sup: Handle,
    sub: Handle,
    context: &str,
    span: Span,
) -> EvalResult<()> {
    use Kind::{
        Any, Character, EmptyStack, EmptyString, EvaluatedDictionary, EvaluatedStack,
        EvaluatedTuple, Function, FunctionBuiltIn, FunctionDictionary, FunctionTuple, No, Number,
        String, Yes,
    };

    match (sup.kind, sub.kind) {
        (Any, _)
        | (_, Any)
        | (Number, Number)
        | (Character, Character)
        | (Yes | No, Yes | No)
        | (Function, FunctionDictionary | FunctionTuple | FunctionBuiltIn | Function)
        | (FunctionDictionary | FunctionTuple | FunctionBuiltIn, Function)
        | (EmptyString | String, EmptyString | String)
        | (EmptyStack, EmptyStack | EvaluatedStack)
        | (EvaluatedStack, EmptyStack) => Ok(()),
        (EvaluatedStack, EvaluatedStack) => check_types(
            arena,
            arena.evaluated_stack(sup).top,
            arena.evaluated_stack(sub).top,
            context,
            span,
        ),
        (EvaluatedTuple, EvaluatedTuple) => {
            let sup_items = arena.tuple_items(sup);
            let sub_items = arena.tuple_items(sub);
            if sup_items.len() != sub_items.len() {
                return Err(inconsistent_tuple_size(context, span));
            }
            for (&sup_item, &sub_item) in sup_items.iter().zip(sub_items) {
                check_types(arena, sup_item, sub_item, context, span)?;
            }
            Ok(())
        }
        (EvaluatedDictionary, EvaluatedDictionary) => {
            for slot in arena.frame_slots(sup) {
                match arena.frame_lookup(sub, slot.name) {
                    Some(value) => check_types(arena, slot.value, value, context, span)?,
                    None => {
                        return Err(name_not_in_dictionary(
                            context,
                            arena.name_text(slot.name),
                            span,
                        ))
                    }
                }
            }
            Ok(())
        }
        (sup_kind, sub_kind) if is_table(sup_kind) && is_table(sub_kind) => {
            let (Some(sup_row), Some(sub_row)) = (
                arena.table_rows_of(sup).first(),
                arena.table_rows_of(sub).first(),
            ) else {
                return Ok(());
            };
            check_types(arena, sup_row.key, sub_row.key, context, span)?;
            check_types(arena, sup_row.value, sub_row.value, context, span)
        }
        (sup_kind, sub_kind) => Err(not_a_supertype(context, sup_kind, sub_kind, span)),
    }
}

fn is_table(kind: Kind) -> bool {
    matches!(kind, Kind::EvaluatedTable | Kind::EvaluatedTableView)
}

/// Truthiness used by `while`, `for`, `if` and `++=`.
pub fn boolean(arena: &Arena, value: Handle) -> EvalResult<bool> {
    match value.kind {
        Kind::EvaluatedTable | Kind::EvaluatedTableView => {
            Ok(!arena.table_rows_of(value).is_empty())
        }
        Kind::Number => Ok(arena.number(value) != 0.0),
        Kind::Yes | Kind::EvaluatedStack | Kind::String => Ok(true),
        Kind::No | Kind::EmptyStack | Kind::EmptyString => Ok(false),
        kind => Err(unexpected_expression(kind, "boolean operation", value.span)),
    }
}

/// Type-pass counterpart of [`boolean`]: only checks that `value` could be a condition.
pub fn boolean_types(value: Handle) -> EvalResult<()> {
    match value.kind {
        Kind::Number
        | Kind::Yes
        | Kind::No
        | Kind::EvaluatedTable
        | Kind::EvaluatedTableView
        | Kind::EvaluatedStack
        | Kind::EmptyStack
        | Kind::String
        | Kind::EmptyString
        | Kind::Any => Ok(()),
        kind => Err(not_a_boolean(kind, value.span)),
    }
}

/// Equality used by `is`. Kinds without a case compare unequal.
pub fn is_equal(arena: &Arena, left: Handle, right: Handle) -> bool {
    match (left.kind, right.kind) {
        (Kind::Number, Kind::Number) => arena.number(left) == arena.number(right),
        (Kind::Character, Kind::Character) => arena.character(left) == arena.character(right),
        (Kind::Yes, Kind::Yes)
        | (Kind::No, Kind::No)
        | (Kind::EmptyStack, Kind::EmptyStack)
        | (Kind::EmptyString, Kind::EmptyString) => true,
        (Kind::EvaluatedStack, Kind::EvaluatedStack) | (Kind::String, Kind::String) => {
            cells_equal(arena, left, right)
        }
        (Kind::EvaluatedTuple, Kind::EvaluatedTuple) => {
            let left = arena.tuple_items(left);
            let right = arena.tuple_items(right);
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(&l, &r)| is_equal(arena, l, r))
        }
        _ => false,
    }
}

/// Pairwise comparison of two stacks or two strings.
fn cells_equal(arena: &Arena, mut left: Handle, mut right: Handle) -> bool {
    loop {
        let (l, r) = match (left.kind, right.kind) {
            (Kind::EvaluatedStack, Kind::EvaluatedStack) => {
                (arena.evaluated_stack(left), arena.evaluated_stack(right))
            }
            (Kind::String, Kind::String) => (arena.string(left), arena.string(right)),
            (Kind::EmptyStack, Kind::EmptyStack) | (Kind::EmptyString, Kind::EmptyString) => {
                return true
            }
            _ => return false,
        };
        if !is_equal(arena, l.top, r.top) {
            return false;
        }
        left = l.rest;
        right = r.rest;
    }
}
