//! Native functions.
//!
//! Every builtin has a value variant and a typed variant. The interpreter
//! picks one by its [`EvalMode`]. The root environment frame binds each
//! name of [`BUILTINS`] to a `FunctionBuiltIn` whose id is its position in
//! the table.
//!
//! # Modules
//!
//! - `container`: `clear put take drop get`
//! - `arithmetic`: `add mul sub div mod less round round_up round_down sqrt number character`

mod arithmetic;
pub(crate) mod container;

use mang_ir::{Arena, EvaluatedDictionary, FunctionBuiltIn, Handle, Kind, Slot, Span};

use crate::errors::{dynamic_argument, static_argument, EvalError, EvalResult};
use crate::EvalMode;

/// A builtin receives the arena, its evaluated input and the span of the call.
pub type BuiltinFn = fn(&mut Arena, Handle, Span) -> EvalResult<Handle>;

pub struct Builtin {
    pub name: &'static str,
    pub value: BuiltinFn,
    pub typed: BuiltinFn,
}

pub static BUILTINS: &[Builtin] = &[
    Builtin { name: "clear", value: container::clear, typed: container::clear_typed },
    Builtin { name: "put", value: container::put, typed: container::put_typed },
    Builtin { name: "take", value: container::take, typed: container::take_typed },
    Builtin { name: "drop", value: container::drop, typed: container::drop_typed },
    Builtin { name: "get", value: container::get, typed: container::get_typed },
    Builtin { name: "add", value: arithmetic::add, typed: arithmetic::add_typed },
    Builtin { name: "mul", value: arithmetic::mul, typed: arithmetic::mul_typed },
    Builtin { name: "sub", value: arithmetic::sub, typed: arithmetic::sub_typed },
    Builtin { name: "div", value: arithmetic::div, typed: arithmetic::div_typed },
    Builtin { name: "mod", value: arithmetic::modulo, typed: arithmetic::modulo_typed },
    Builtin { name: "less", value: arithmetic::less, typed: arithmetic::less_typed },
    Builtin { name: "round", value: arithmetic::round, typed: arithmetic::round_typed },
    Builtin { name: "round_up", value: arithmetic::round_up, typed: arithmetic::round_up_typed },
    Builtin { name: "round_down", value: arithmetic::round_down, typed: arithmetic::round_down_typed },
    Builtin { name: "sqrt", value: arithmetic::sqrt, typed: arithmetic::sqrt_typed },
    Builtin { name: "number", value: arithmetic::number, typed: arithmetic::number_typed },
    Builtin { name: "character", value: arithmetic::character, typed: arithmetic::character_typed },
];

/// Root frame binding every builtin. Its parent is `ANY`.
pub fn builtin_frame(arena: &mut Arena) -> Handle {
    let slots: Vec<Slot> = BUILTINS
        .iter()
        .enumerate()
        .map(|(id, builtin)| Slot {
            name: arena.intern(builtin.name),
            value: arena.make_builtin(
                Span::DUMMY,
                FunctionBuiltIn {
                    id: mang_ir::to_u32(id, "builtins"),
                },
            ),
        })
        .collect();
    let slots = arena.push_slots(slots);
    arena.make_frame(
        Span::DUMMY,
        EvaluatedDictionary {
            parent: Handle::any(Span::DUMMY),
            slots,
        },
    )
}

/// Run builtin `function` on `input` in `mode`.
pub fn call(
    arena: &mut Arena,
    mode: EvalMode,
    function: Handle,
    input: Handle,
    span: Span,
) -> EvalResult<Handle> {
    let id = arena.builtin(function).id as usize;
    let Some(builtin) = BUILTINS.get(id) else {
        panic!("builtin id {id} out of range for table of {}", BUILTINS.len());
    };
    tracing::trace!(name = builtin.name, mode = mode.name(), "builtin");
    match mode {
        EvalMode::Value => (builtin.value)(arena, input, span),
        EvalMode::Type => (builtin.typed)(arena, input, span),
    }
}

/// How argument shape errors are reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Check {
    /// Value pass: runtime error.
    Dynamic,
    /// Type pass: static type error.
    Static,
}

impl Check {
    fn name(self) -> &'static str {
        match self {
            Check::Dynamic => "dynamic",
            Check::Static => "static",
        }
    }

    #[cold]
    fn error(self, message: String, span: Span) -> EvalError {
        match self {
            Check::Dynamic => dynamic_argument(message, span),
            Check::Static => static_argument(message, span),
        }
    }
}

/// The two items of an evaluated 2-tuple.
///
/// In the type pass an `ANY` input stands for a tuple of two `ANY`s.
fn binary_tuple(
    arena: &Arena,
    input: Handle,
    function: &str,
    check: Check,
    span: Span,
) -> EvalResult<(Handle, Handle)> {
    let fail = |detail: String| {
        check.error(
            format!(
                "I found a {} type error while calling the function {function}. \
                 The function expected a tuple of two items, but it got {detail}",
                check.name()
            ),
            span,
        )
    };
    match input.kind {
        Kind::EvaluatedTuple => match *arena.tuple_items(input) {
            [left, right] => Ok((left, right)),
            ref items => Err(fail(format!("{} items.", items.len()))),
        },
        Kind::Any if check == Check::Static => Ok((input, input)),
        kind => Err(fail(format!("a {kind}"))),
    }
}
