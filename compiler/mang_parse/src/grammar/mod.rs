//! Expression grammar.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry point (`parse_expression`), substitutions, `if`, `is`,
//!   `dynamic`
//! - `literals.rs`: numbers, characters, strings, stacks, tuples, tables
//! - `function.rs`: `in ... out ...`
//! - `dictionary.rs`: dictionary literals and their statements

mod dictionary;
mod function;
mod literals;

use mang_ir::{
    Alternative, Conditional, DynamicExpression, FunctionApplication, Handle, IsExpression,
    Lookup, LookupChild, TypedExpression,
};
use mang_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser, Token};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested source does not
    /// overflow the native stack.
    pub(crate) fn parse_expression(&mut self) -> Result<Handle, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner())
    }

    fn parse_expression_inner(&mut self) -> Result<Handle, ParseError> {
        match self.cursor.peek()? {
            Token::LBracket => self.parse_stack(),
            Token::LBrace => self.parse_dictionary(),
            Token::LParen => self.parse_tuple(),
            Token::Lt => self.parse_table(),
            Token::Character => self.parse_character(),
            Token::String => self.parse_string(),
            Token::Yes => Ok(Handle::boolean(true, self.cursor.advance())),
            Token::No => Ok(Handle::boolean(false, self.cursor.advance())),
            Token::NegInf => {
                let span = self.cursor.advance();
                Ok(self.arena.make_number(span, f64::NEG_INFINITY))
            }
            Token::If => self.parse_conditional(),
            Token::Is => self.parse_is(),
            Token::In => self.parse_function(),
            Token::Dynamic => self.parse_dynamic(),
            Token::Number => self.parse_number(),
            Token::Name => self.parse_substitution(),
            _ => Err(ParseError::unrecognized_expression(
                self.cursor.current_span(),
            )),
        }
    }

    /// A fresh read site for `text`.
    pub(crate) fn lookup(&mut self, text: &str) -> Lookup {
        Lookup {
            name: self.arena.intern(text),
            site: self.arena.new_read_site(),
        }
    }

    /// `name`, `name@child`, `name!argument`, `name?argument`, `Type:value`.
    fn parse_substitution(&mut self) -> Result<Handle, ParseError> {
        let (text, name_span) = self.cursor.expect_name()?;
        match self.cursor.current() {
            Some(Token::At) => {
                self.cursor.advance();
                let name = self.arena.intern(text);
                let child = self.parse_expression()?;
                Ok(self
                    .arena
                    .make_lookup_child(name_span.merge(child.span), LookupChild { name, child }))
            }
            Some(Token::Bang | Token::Question) => {
                self.cursor.advance();
                let callee = self.lookup(text);
                let argument = self.parse_expression()?;
                Ok(self.arena.make_application(
                    name_span.merge(argument.span),
                    FunctionApplication { callee, argument },
                ))
            }
            Some(Token::Colon) => {
                self.cursor.advance();
                let type_name = self.lookup(text);
                let value = self.parse_expression()?;
                Ok(self.arena.make_typed(
                    name_span.merge(value.span),
                    TypedExpression { type_name, value },
                ))
            }
            _ => {
                let lookup = self.lookup(text);
                Ok(self.arena.make_lookup_symbol(name_span, lookup))
            }
        }
    }

    /// `left then right` pairs up to (not including) `else`. At least one.
    fn parse_alternatives(&mut self) -> Result<Vec<Alternative>, ParseError> {
        let mut alternatives = Vec::new();
        loop {
            let left = self.parse_expression()?;
            self.cursor.expect(Token::Then)?;
            let right = self.parse_expression()?;
            alternatives.push(Alternative { left, right });
            if self.cursor.check(Token::Else) {
                return Ok(alternatives);
            }
        }
    }

    /// `if a then b ... else c`
    fn parse_conditional(&mut self) -> Result<Handle, ParseError> {
        let start = self.cursor.expect(Token::If)?;
        let alternatives = self.parse_alternatives()?;
        self.cursor.expect(Token::Else)?;
        let otherwise = self.parse_expression()?;
        let alternatives = self.arena.push_alternatives(alternatives);
        Ok(self.arena.make_conditional(
            start.merge(otherwise.span),
            Conditional {
                alternatives,
                otherwise,
            },
        ))
    }

    /// `is x a then b ... else c`
    fn parse_is(&mut self) -> Result<Handle, ParseError> {
        let start = self.cursor.expect(Token::Is)?;
        let input = self.parse_expression()?;
        let alternatives = self.parse_alternatives()?;
        self.cursor.expect(Token::Else)?;
        let otherwise = self.parse_expression()?;
        let alternatives = self.arena.push_alternatives(alternatives);
        Ok(self.arena.make_is(
            start.merge(otherwise.span),
            IsExpression {
                input,
                alternatives,
                otherwise,
            },
        ))
    }

    fn parse_dynamic(&mut self) -> Result<Handle, ParseError> {
        let start = self.cursor.expect(Token::Dynamic)?;
        let inner = self.parse_expression()?;
        Ok(self
            .arena
            .make_dynamic(start.merge(inner.span), DynamicExpression { inner }))
    }
}
