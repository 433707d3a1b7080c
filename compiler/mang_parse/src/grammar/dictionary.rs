//! Dictionary literals and statements.

use mang_ir::{Handle, Statement, UnevaluatedDictionary};

use crate::{resolve_loops, ParseError, Parser, RawStatement, SlotIndexer, Token};

impl Parser<'_> {
    /// `{ statement* }`
    ///
    /// Each literal numbers its own write targets; nested dictionaries get a
    /// fresh indexer through recursion.
    pub(super) fn parse_dictionary(&mut self) -> Result<Handle, ParseError> {
        let start = self.cursor.expect(Token::LBrace)?;
        let mut indexer = SlotIndexer::new();
        let mut raw = Vec::new();
        let mut spans = Vec::new();
        while !self.cursor.check(Token::RBrace) {
            let from = self.cursor.current_span();
            raw.push(self.parse_statement(&mut indexer)?);
            spans.push(from.merge(self.cursor.previous_span()));
        }
        let end = self.cursor.advance();

        let statements = resolve_loops(raw)?;
        tracing::trace!(
            statements = statements.len(),
            slots = indexer.len(),
            "dictionary"
        );
        let statements = self.arena.push_statements(statements, spans);
        let slot_names = self.arena.push_slot_names(indexer.into_names());
        Ok(self.arena.make_dictionary(
            start.merge(end),
            UnevaluatedDictionary {
                statements,
                slot_names,
            },
        ))
    }

    fn parse_statement(&mut self, indexer: &mut SlotIndexer) -> Result<RawStatement, ParseError> {
        match self.cursor.peek()? {
            Token::While => {
                let start = self.cursor.advance();
                let condition = self.parse_expression()?;
                Ok(RawStatement::While {
                    condition,
                    span: start.merge(condition.span),
                })
            }
            Token::For => self.parse_for(indexer),
            Token::End => Ok(RawStatement::End(self.cursor.advance())),
            Token::Return => {
                self.cursor.advance();
                Ok(RawStatement::Plain(Statement::Return))
            }
            Token::Name => self.parse_named_element(indexer),
            found => Err(ParseError::expected(
                self.cursor.current_span(),
                "a statement",
                found,
            )),
        }
    }

    /// `for item in container` or `for container`.
    fn parse_for(&mut self, indexer: &mut SlotIndexer) -> Result<RawStatement, ParseError> {
        let start = self.cursor.expect(Token::For)?;
        let (first, first_span) = self.cursor.expect_name()?;
        let first = indexer.bind(self.arena.intern(first));
        if !self.cursor.check(Token::In) {
            return Ok(RawStatement::ForSimple {
                container: first,
                span: start.merge(first_span),
            });
        }
        self.cursor.advance();
        let (second, second_span) = self.cursor.expect_name()?;
        let container = indexer.bind(self.arena.intern(second));
        Ok(RawStatement::For {
            item: first,
            container,
            span: start.merge(second_span),
        })
    }

    /// `name=e`, `name+=e`, `name++=e`, `name--`.
    fn parse_named_element(
        &mut self,
        indexer: &mut SlotIndexer,
    ) -> Result<RawStatement, ParseError> {
        let (text, _) = self.cursor.expect_name()?;
        let target = indexer.bind(self.arena.intern(text));
        let statement = match self.cursor.peek()? {
            Token::Eq => {
                self.cursor.advance();
                Statement::Definition {
                    target,
                    expression: self.parse_expression()?,
                }
            }
            Token::PlusEq => {
                self.cursor.advance();
                Statement::PutAssignment {
                    target,
                    expression: self.parse_expression()?,
                }
            }
            Token::PlusPlusEq => {
                self.cursor.advance();
                Statement::PutEachAssignment {
                    target,
                    expression: self.parse_expression()?,
                }
            }
            Token::MinusMinus => {
                self.cursor.advance();
                Statement::DropAssignment { target }
            }
            found => {
                return Err(ParseError::expected(
                    self.cursor.current_span(),
                    "`=`",
                    found,
                ))
            }
        };
        Ok(RawStatement::Plain(statement))
    }
}
