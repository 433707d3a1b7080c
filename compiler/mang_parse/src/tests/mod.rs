//! Parser tests.
//!
//! - `parser`: expression and statement shapes built into the arena
//! - `errors`: malformed source and the error each case reports
