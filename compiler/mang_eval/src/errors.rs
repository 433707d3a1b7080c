//! Evaluation errors and their constructors.
//!
//! Every failure of an entry point is an [`EvalError`]. Constructors are
//! `#[cold]` free functions so call sites stay one line and the messages
//! live in one place.

use mang_diagnostic::{Diagnostic, ErrorCode};
use mang_ir::{Kind, Span};
use mang_parse::ParseError;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Name not bound in any frame of the walked chain.
    #[error("Cannot find symbol {name} in {scope}")]
    MissingSymbol {
        name: String,
        scope: String,
        span: Span,
    },

    #[error("Cannot find key {key} in table")]
    MissingKey { key: String, span: Span },

    /// A value of a kind the operation has no case for.
    #[error("Unexpected expression {kind} for {operation}")]
    UnexpectedExpression {
        kind: Kind,
        operation: &'static str,
        span: Span,
    },

    /// Raised by the type pass, by typed expressions and by argument checks.
    #[error("{message}")]
    StaticType {
        code: ErrorCode,
        message: String,
        span: Span,
    },

    /// Arity, index and empty-container failures of the value pass.
    #[error("{message}")]
    Runtime {
        code: ErrorCode,
        message: String,
        span: Span,
    },
}

impl EvalError {
    pub fn span(&self) -> Span {
        match self {
            EvalError::Parse(error) => error.span,
            EvalError::MissingSymbol { span, .. }
            | EvalError::MissingKey { span, .. }
            | EvalError::UnexpectedExpression { span, .. }
            | EvalError::StaticType { span, .. }
            | EvalError::Runtime { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::Parse(error) => error.code,
            EvalError::MissingSymbol { .. } => ErrorCode::E6001,
            EvalError::MissingKey { .. } => ErrorCode::E6002,
            EvalError::UnexpectedExpression { .. } => ErrorCode::E6003,
            EvalError::StaticType { code, .. } | EvalError::Runtime { code, .. } => *code,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        if let EvalError::Parse(error) = self {
            return error.to_diagnostic();
        }
        let code = self.code();
        let diagnostic = Diagnostic::error(code)
            .with_message(self.to_string())
            .with_label(self.span(), code.label());
        match self {
            EvalError::MissingSymbol { name, .. } => diagnostic
                .with_note(format!("`{name}` is neither defined here nor in an enclosing dictionary")),
            _ => diagnostic,
        }
    }
}

// Lookup

#[cold]
pub fn missing_symbol(name: &str, environment: Kind, span: Span) -> EvalError {
    EvalError::MissingSymbol {
        name: name.to_string(),
        scope: format!("environment of type {environment}"),
        span,
    }
}

/// Name missing from a dictionary passed to `in {..} out ..` or read with `@`.
#[cold]
pub fn missing_in_dictionary(name: &str, span: Span) -> EvalError {
    EvalError::MissingSymbol {
        name: name.to_string(),
        scope: "dictionary".to_string(),
        span,
    }
}

#[cold]
pub fn missing_key(key: String, span: Span) -> EvalError {
    EvalError::MissingKey { key, span }
}

#[cold]
pub fn unexpected_expression(kind: Kind, operation: &'static str, span: Span) -> EvalError {
    EvalError::UnexpectedExpression {
        kind,
        operation,
        span,
    }
}

// Static types

#[cold]
pub fn not_a_supertype(context: &str, sup: Kind, sub: Kind, span: Span) -> EvalError {
    EvalError::StaticType {
        code: ErrorCode::E2001,
        message: format!("Static type error in {context}. {sup} is not a supertype for {sub}"),
        span,
    }
}

#[cold]
pub fn inconsistent_tuple_size(context: &str, span: Span) -> EvalError {
    EvalError::StaticType {
        code: ErrorCode::E2001,
        message: format!("Static type error in {context}. Inconsistent tuple size."),
        span,
    }
}

#[cold]
pub fn name_not_in_dictionary(context: &str, name: &str, span: Span) -> EvalError {
    EvalError::StaticType {
        code: ErrorCode::E2001,
        message: format!("Static type error in {context}. Could not find name {name} in dictionary"),
        span,
    }
}

#[cold]
pub fn not_a_boolean(kind: Kind, span: Span) -> EvalError {
    EvalError::StaticType {
        code: ErrorCode::E2002,
        message: format!("Static type error.\nCannot convert type {kind} to boolean."),
        span,
    }
}

/// Builtin argument of the wrong shape, found by the type pass.
#[cold]
pub fn static_argument(message: String, span: Span) -> EvalError {
    EvalError::StaticType {
        code: ErrorCode::E2001,
        message,
        span,
    }
}

// Runtime

/// Builtin or call argument of the wrong shape, found by the value pass.
#[cold]
pub fn dynamic_argument(message: String, span: Span) -> EvalError {
    EvalError::Runtime {
        code: ErrorCode::E6003,
        message,
        span,
    }
}

#[cold]
pub fn wrong_input_count(span: Span) -> EvalError {
    EvalError::Runtime {
        code: ErrorCode::E6004,
        message: "Wrong number of input to function".to_string(),
        span,
    }
}

#[cold]
pub fn negative_index(index: f64, span: Span) -> EvalError {
    EvalError::Runtime {
        code: ErrorCode::E6005,
        message: format!("Cannot have negative index: {index:.6}"),
        span,
    }
}

#[cold]
pub fn tuple_index_out_of_range(size: usize, index: usize, span: Span) -> EvalError {
    EvalError::Runtime {
        code: ErrorCode::E6005,
        message: format!("Tuple of size {size} indexed with {index}"),
        span,
    }
}

/// `what` is `Stack` or `String`.
#[cold]
pub fn index_out_of_range(what: &str, span: Span) -> EvalError {
    EvalError::Runtime {
        code: ErrorCode::E6005,
        message: format!("{what} index out of range"),
        span,
    }
}

/// `what` is `stack` or `string`.
#[cold]
pub fn index_empty(what: &str, span: Span) -> EvalError {
    EvalError::Runtime {
        code: ErrorCode::E6006,
        message: format!("I caught a run-time error when trying to index an empty {what}."),
        span,
    }
}

#[cold]
pub fn take_from_empty_table(span: Span) -> EvalError {
    EvalError::Runtime {
        code: ErrorCode::E6006,
        message: "Cannot take item from empty table".to_string(),
        span,
    }
}

#[cold]
pub fn invalid_character_code(code: f64, span: Span) -> EvalError {
    EvalError::Runtime {
        code: ErrorCode::E6003,
        message: format!("Cannot convert {code} to a character"),
        span,
    }
}
