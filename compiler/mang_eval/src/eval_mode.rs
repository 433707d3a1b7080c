//! Evaluation modes.
//!
//! The value pass and the type pass share one evaluator. `EvalMode` picks
//! the behavior at the handful of places where they differ: `dynamic`,
//! conditionals, `is`, dictionaries, application and the builtin table.

/// Which pass the interpreter is running.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Compute values. Loops run, conditionals pick one branch.
    #[default]
    Value,
    /// Compute types. Every branch is visited once, loops run zero or one time,
    /// containers are represented by a sample element.
    Type,
}

impl EvalMode {
    #[inline]
    pub fn is_type(self) -> bool {
        matches!(self, Self::Type)
    }

    /// Whether branches and loops are walked once each instead of executed.
    #[inline]
    pub fn visits_all_branches(self) -> bool {
        self.is_type()
    }

    pub fn name(self) -> &'static str {
        match self {
            EvalMode::Value => "value",
            EvalMode::Type => "type",
        }
    }
}
