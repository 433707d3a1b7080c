//! Recursive descent parser for mang_lang.
//!
//! Builds expressions directly into an [`Arena`]. Dictionary write targets
//! get their slots and loops get their jump indices here, so the evaluator
//! never has to resolve either.

mod cursor;
mod error;
mod grammar;
mod lexer;
mod loops;
mod slots;

pub use cursor::Cursor;
pub use error::ParseError;
pub use lexer::{lex, Token, TokenList};
pub use loops::{resolve_loops, RawStatement};
pub use slots::SlotIndexer;

use mang_ir::{Arena, Handle};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: &'a mut Arena,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str, arena: &'a mut Arena) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source),
            arena,
        }
    }

    /// Parse one expression that must span the whole token stream.
    pub fn parse_program(&mut self) -> Result<Handle, ParseError> {
        let expression = self.parse_expression()?;
        match self.cursor.current() {
            None => Ok(expression),
            Some(found) => Err(ParseError::trailing_input(
                self.cursor.current_span(),
                found,
            )),
        }
    }
}

/// Parse `source` into `arena`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(arena: &mut Arena, source: &str) -> Result<Handle, ParseError> {
    let tokens = lex(source)?;
    tracing::trace!(tokens = tokens.len(), "lexed");
    Parser::new(&tokens, source, arena).parse_program()
}

#[cfg(test)]
mod tests;
