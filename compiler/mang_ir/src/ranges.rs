//! Arena range types.
//!
//! Compact `(start, len)` views into the shared pools of the [`Arena`](crate::Arena).

/// Define range types for arena-allocated data.
///
/// Each generated type has:
/// - `start: u32` and `len: u32` fields
/// - `EMPTY` constant
/// - `new()`, `is_empty()`, `len()`, `indices()` methods
/// - `Debug` implementation showing the range as `TypeName(start..end)`
macro_rules! define_range {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Absolute pool indices covered by this range.
            #[inline]
            pub fn indices(&self) -> ::std::ops::Range<usize> {
                self.start as usize..(self.start + self.len) as usize
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.start + self.len)
            }
        }
    )* };
}

define_range!(
    /// Items of a tuple in `Arena::expressions`.
    ExprRange,
    /// Statements of one dictionary literal.
    StatementRange,
    /// Parameters of a dictionary or tuple function.
    ArgumentRange,
    /// `left then right` pairs of a conditional or `is`.
    AlternativeRange,
    /// Slots of one environment frame, or slot names of one dictionary literal.
    SlotRange,
    /// Rows of an unevaluated table literal.
    RowRange,
);
