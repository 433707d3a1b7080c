//! Function literals: `in x out e`, `in {x T:y} out e`, `in (x y) out e`.

use mang_ir::{Argument, ArgumentRange, Function, FunctionMulti, Handle, Span};

use crate::{ParseError, Parser, Token};

impl Parser<'_> {
    pub(super) fn parse_function(&mut self) -> Result<Handle, ParseError> {
        let start = self.cursor.expect(Token::In)?;
        // Captured when the literal is evaluated.
        let environment = Handle::any(Span::DUMMY);
        match self.cursor.peek()? {
            Token::LBrace => {
                self.cursor.advance();
                let arguments = self.parse_arguments(Token::RBrace)?;
                let body = self.parse_body()?;
                Ok(self.arena.make_function_dictionary(
                    start.merge(body.span),
                    FunctionMulti {
                        environment,
                        arguments,
                        body,
                    },
                ))
            }
            Token::LParen => {
                self.cursor.advance();
                let arguments = self.parse_arguments(Token::RParen)?;
                let body = self.parse_body()?;
                Ok(self.arena.make_function_tuple(
                    start.merge(body.span),
                    FunctionMulti {
                        environment,
                        arguments,
                        body,
                    },
                ))
            }
            _ => {
                let argument = self.parse_argument()?;
                let body = self.parse_body()?;
                Ok(self.arena.make_function(
                    start.merge(body.span),
                    Function {
                        environment,
                        argument,
                        body,
                    },
                ))
            }
        }
    }

    /// Arguments up to `close`, which is consumed.
    fn parse_arguments(&mut self, close: Token) -> Result<ArgumentRange, ParseError> {
        let mut arguments = Vec::new();
        while !self.cursor.check(close) {
            arguments.push(self.parse_argument()?);
        }
        self.cursor.advance();
        Ok(self.arena.push_arguments(arguments))
    }

    /// `name` or `Type:name`. The type is a read site.
    fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        let (first, _) = self.cursor.expect_name()?;
        if self.cursor.check(Token::Colon) {
            self.cursor.advance();
            let type_name = self.lookup(first);
            let (second, _) = self.cursor.expect_name()?;
            Ok(Argument {
                type_name: Some(type_name),
                name: self.arena.intern(second),
            })
        } else {
            Ok(Argument {
                type_name: None,
                name: self.arena.intern(first),
            })
        }
    }

    fn parse_body(&mut self) -> Result<Handle, ParseError> {
        self.cursor.expect(Token::Out)?;
        self.parse_expression()
    }
}
