//! Error codes for all interpreter diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Parser errors
/// - E2xxx: Static type errors (type pass)
/// - E6xxx: Runtime and lookup errors (value pass)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser Errors (E1xxx)
    /// Character that starts no token
    E1001,
    /// Token that cannot start an expression
    E1002,
    /// Expected a specific token
    E1003,
    /// Unexpected end of source
    E1004,
    /// `end` without an open `while` or `for`
    E1005,
    /// `while` or `for` without a matching `end`
    E1006,
    /// Trailing input after the top-level expression
    E1007,

    // Static Type Errors (E2xxx)
    /// Incompatible types
    E2001,
    /// Value cannot be used as a condition
    E2002,

    // Runtime Errors (E6xxx)
    /// Symbol not found in any enclosing environment
    E6001,
    /// Key not found in table
    E6002,
    /// Operation received a value of the wrong kind
    E6003,
    /// Wrong number of inputs to a function
    E6004,
    /// Index out of range or negative
    E6005,
    /// Indexing or taking from an empty container
    E6006,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
        }
    }

    /// Short label shown next to the primary span.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unknown character",
            ErrorCode::E1002 => "not an expression",
            ErrorCode::E1003 => "unexpected token",
            ErrorCode::E1004 => "source ends here",
            ErrorCode::E1005 => "unmatched end",
            ErrorCode::E1006 => "loop is never closed",
            ErrorCode::E1007 => "unexpected trailing input",
            ErrorCode::E2001 => "incompatible types",
            ErrorCode::E2002 => "not a condition",
            ErrorCode::E6001 => "unknown symbol",
            ErrorCode::E6002 => "missing key",
            ErrorCode::E6003 => "unexpected value",
            ErrorCode::E6004 => "wrong number of inputs",
            ErrorCode::E6005 => "bad index",
            ErrorCode::E6006 => "empty container",
        }
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a static type error (E2xxx range).
    pub fn is_type_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is a runtime error (E6xxx range).
    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
