//! Number builtins.

use mang_ir::{Arena, Handle, Kind, Span};

use super::{binary_tuple, Check};
use crate::errors::{invalid_character_code, EvalError, EvalResult};

const OUT: Span = Span::DUMMY;

/// Both items of a binary tuple as numbers.
fn operands(arena: &Arena, input: Handle, function: &str, span: Span) -> EvalResult<(f64, f64)> {
    let (left, right) = binary_tuple(arena, input, function, Check::Dynamic, span)?;
    match (left.kind, right.kind) {
        (Kind::Number, Kind::Number) => Ok((arena.number(left), arena.number(right))),
        (l, r) => Err(not_two_numbers(function, l, r, Check::Dynamic, span)),
    }
}

/// Type-pass [`operands`]: `None` when either item is `ANY`.
fn operand_samples(
    arena: &Arena,
    input: Handle,
    function: &str,
    span: Span,
) -> EvalResult<Option<(f64, f64)>> {
    let (left, right) = binary_tuple(arena, input, function, Check::Static, span)?;
    match (left.kind, right.kind) {
        (Kind::Number, Kind::Number) => Ok(Some((arena.number(left), arena.number(right)))),
        (Kind::Any | Kind::Number, Kind::Any | Kind::Number) => Ok(None),
        (l, r) => Err(not_two_numbers(function, l, r, Check::Static, span)),
    }
}

#[cold]
fn not_two_numbers(function: &str, l: Kind, r: Kind, check: Check, span: Span) -> EvalError {
    check.error(
        format!(
            "I found a {} type error while calling the function {function}. \
             The function expected two numbers, but it got a {l} and a {r}.",
            check.name()
        ),
        span,
    )
}

/// The single input, which must be of kind `expected`. The type pass also
/// lets `ANY` through.
fn operand(
    input: Handle,
    expected: Kind,
    function: &str,
    check: Check,
    span: Span,
) -> EvalResult<Handle> {
    match input.kind {
        kind if kind == expected => Ok(input),
        Kind::Any if check == Check::Static => Ok(input),
        kind => Err(check.error(
            format!(
                "I found a {} type error while calling the function {function}. \
                 The function expected a {}, but it got a {kind}.",
                check.name(),
                expected.name()
            ),
            span,
        )),
    }
}

macro_rules! binary_number_builtins {
    ($($value:ident, $typed:ident, $name:literal, |$l:ident, $r:ident| $op:expr;)*) => { $(
        pub(super) fn $value(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
            let ($l, $r) = operands(arena, input, $name, span)?;
            Ok(arena.make_number(OUT, $op))
        }

        pub(super) fn $typed(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
            let result = match operand_samples(arena, input, $name, span)? {
                Some(($l, $r)) => $op,
                None => 0.0,
            };
            Ok(arena.make_number(OUT, result))
        }
    )* };
}

binary_number_builtins! {
    add, add_typed, "add", |l, r| l + r;
    mul, mul_typed, "mul", |l, r| l * r;
    sub, sub_typed, "sub", |l, r| l - r;
    div, div_typed, "div", |l, r| l / r;
    modulo, modulo_typed, "mod", |l, r| l % r;
}

pub(super) fn less(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    let (l, r) = operands(arena, input, "less", span)?;
    Ok(Handle::boolean(l < r, OUT))
}

/// Always `yes`: only the shape of the input is checked.
pub(super) fn less_typed(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    operand_samples(arena, input, "less", span)?;
    Ok(Handle::boolean(true, OUT))
}

macro_rules! unary_number_builtins {
    ($($value:ident, $typed:ident, $name:literal, $op:path;)*) => { $(
        pub(super) fn $value(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
            let number = operand(input, Kind::Number, $name, Check::Dynamic, span)?;
            let x = arena.number(number);
            Ok(arena.make_number(OUT, $op(x)))
        }

        pub(super) fn $typed(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
            operand(input, Kind::Number, $name, Check::Static, span)?;
            Ok(arena.make_number(OUT, 0.0))
        }
    )* };
}

unary_number_builtins! {
    round, round_typed, "round", f64::round;
    round_up, round_up_typed, "round_up", f64::ceil;
    round_down, round_down_typed, "round_down", f64::floor;
    sqrt, sqrt_typed, "sqrt", f64::sqrt;
}

/// Character code of a character.
pub(super) fn number(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    let character = operand(input, Kind::Character, "number", Check::Dynamic, span)?;
    let code = f64::from(u32::from(arena.character(character)));
    Ok(arena.make_number(OUT, code))
}

pub(super) fn number_typed(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    operand(input, Kind::Character, "number", Check::Static, span)?;
    Ok(arena.make_number(OUT, 0.0))
}

/// Character with a given code.
pub(super) fn character(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    let number = operand(input, Kind::Number, "character", Check::Dynamic, span)?;
    let code = arena.number(number);
    let character = to_char(code).ok_or_else(|| invalid_character_code(code, span))?;
    Ok(arena.make_character(OUT, character))
}

pub(super) fn character_typed(arena: &mut Arena, input: Handle, span: Span) -> EvalResult<Handle> {
    operand(input, Kind::Number, "character", Check::Static, span)?;
    Ok(arena.make_character(OUT, ' '))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "range is checked first"
)]
fn to_char(code: f64) -> Option<char> {
    if code.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&code) {
        char::from_u32(code as u32)
    } else {
        None
    }
}
