//! Parse error type.

use mang_diagnostic::{Diagnostic, ErrorCode};
use mang_ir::Span;

use crate::Token;

/// Malformed source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
        }
    }

    #[cold]
    pub fn unknown_character(span: Span, text: &str) -> Self {
        ParseError::new(ErrorCode::E1001, format!("Unknown character {text}"), span)
    }

    #[cold]
    pub fn unrecognized_expression(span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            "Does not recognize expression to parse",
            span,
        )
    }

    #[cold]
    pub fn expected(span: Span, expected: &str, found: Token) -> Self {
        ParseError::new(
            ErrorCode::E1003,
            format!(
                "Parsing expected {expected} but got {}",
                found.display_name()
            ),
            span,
        )
    }

    #[cold]
    pub fn unexpected_end(span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1004,
            "Unexpected end of source while parsing",
            span,
        )
    }

    #[cold]
    pub fn unmatched_end(span: Span) -> Self {
        ParseError::new(ErrorCode::E1005, "end not matching while or for", span)
    }

    #[cold]
    pub fn unclosed_loop(span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1006,
            "while or for without matching end",
            span,
        )
    }

    #[cold]
    pub fn trailing_input(span: Span, found: Token) -> Self {
        ParseError::new(
            ErrorCode::E1007,
            format!(
                "Expected end of source after expression but got {}",
                found.display_name()
            ),
            span,
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.code.label())
    }
}
