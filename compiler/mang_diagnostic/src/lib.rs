//! Diagnostic system for error reporting.
//!
//! Every error the parser or evaluator raises becomes a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a labeled span saying where
//! - optional notes
//!
//! [`emitter::render`] turns one into terminal text with ariadne;
//! [`span_utils::LineOffsetTable`] maps byte offsets to 1-based rows and
//! columns for plain-text locations.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
