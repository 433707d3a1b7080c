//! Node and value kinds.

use std::fmt;

/// Tag of a [`Handle`](crate::Handle).
///
/// The tag selects which arena pool the handle's index points into.
/// Unevaluated syntax (`Dictionary`, `Tuple`, `Stack`, `Table`, lookups) and
/// evaluated values (`EvaluatedDictionary`, `EvaluatedTuple`, ...) are
/// distinct kinds, so the evaluator can pass values through unchanged.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    Character,
    Conditional,
    Is,
    Table,
    EvaluatedTable,
    EvaluatedTableView,
    Dictionary,
    EvaluatedDictionary,
    Tuple,
    EvaluatedTuple,
    Function,
    FunctionBuiltIn,
    FunctionDictionary,
    FunctionTuple,
    Stack,
    EvaluatedStack,
    EmptyStack,
    LookupChild,
    FunctionApplication,
    LookupSymbol,
    Number,
    String,
    EmptyString,
    Yes,
    No,
    DynamicExpression,
    TypedExpression,
    Any,
}

impl Kind {
    /// Upper-case display name used in error messages and type output.
    ///
    /// `Yes` and `No` share the name `BOOLEAN`.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Character => "CHARACTER",
            Kind::Conditional => "CONDITIONAL",
            Kind::Is => "IS",
            Kind::Table => "TABLE",
            Kind::EvaluatedTable => "EVALUATED_TABLE",
            Kind::EvaluatedTableView => "EVALUATED_TABLE_VIEW",
            Kind::Dictionary => "DICTIONARY",
            Kind::EvaluatedDictionary => "EVALUATED_DICTIONARY",
            Kind::Tuple => "TUPLE",
            Kind::EvaluatedTuple => "EVALUATED_TUPLE",
            Kind::Function => "FUNCTION",
            Kind::FunctionBuiltIn => "FUNCTION_BUILT_IN",
            Kind::FunctionDictionary => "FUNCTION_DICTIONARY",
            Kind::FunctionTuple => "FUNCTION_TUPLE",
            Kind::Stack => "STACK",
            Kind::EvaluatedStack => "EVALUATED_STACK",
            Kind::EmptyStack => "EMPTY_STACK",
            Kind::LookupChild => "LOOKUP_CHILD",
            Kind::FunctionApplication => "FUNCTION_APPLICATION",
            Kind::LookupSymbol => "LOOKUP_SYMBOL",
            Kind::Number => "NUMBER",
            Kind::String => "STRING",
            Kind::EmptyString => "EMPTY_STRING",
            Kind::Yes | Kind::No => "BOOLEAN",
            Kind::DynamicExpression => "DYNAMIC_EXPRESSION",
            Kind::TypedExpression => "TYPED_EXPRESSION",
            Kind::Any => "ANY",
        }
    }

    /// Kinds that carry no payload and always use index 0.
    #[inline]
    pub const fn is_unit(self) -> bool {
        matches!(
            self,
            Kind::Yes | Kind::No | Kind::EmptyStack | Kind::EmptyString | Kind::Any
        )
    }

    /// The four callable shapes.
    #[inline]
    pub const fn is_function(self) -> bool {
        matches!(
            self,
            Kind::Function | Kind::FunctionBuiltIn | Kind::FunctionDictionary | Kind::FunctionTuple
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
