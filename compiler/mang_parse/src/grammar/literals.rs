//! Literal parsing: numbers, characters, strings, stacks, tuples, tables.

use mang_ir::{to_u32, Cons, Handle, Kind, Span, Table, TableRow, Tuple};

use crate::{ParseError, Parser, Token};

impl Parser<'_> {
    pub(super) fn parse_number(&mut self) -> Result<Handle, ParseError> {
        let span = self.cursor.current_span();
        let value = self
            .cursor
            .slice()
            .parse::<f64>()
            .map_err(|_| ParseError::unrecognized_expression(span))?;
        self.cursor.advance();
        Ok(self.arena.make_number(span, value))
    }

    pub(super) fn parse_character(&mut self) -> Result<Handle, ParseError> {
        let span = self.cursor.current_span();
        let value = self
            .cursor
            .slice()
            .chars()
            .nth(1)
            .ok_or_else(|| ParseError::unrecognized_expression(span))?;
        self.cursor.advance();
        Ok(self.arena.make_character(span, value))
    }

    /// String literal, built by consing its characters back to front.
    pub(super) fn parse_string(&mut self) -> Result<Handle, ParseError> {
        let span = self.cursor.current_span();
        let text = self.cursor.slice();
        self.cursor.advance();
        let body = text
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or("");

        let mut string = Handle::unit(Kind::EmptyString, span);
        for (offset, c) in body.char_indices().rev() {
            let start = span.start + 1 + to_u32(offset, "source bytes");
            let char_span = Span::new(start, start + to_u32(c.len_utf8(), "source bytes"));
            let top = self.arena.make_character(char_span, c);
            string = self.arena.make_string(span, Cons { top, rest: string });
        }
        Ok(string)
    }

    /// Expressions up to `close`, which is consumed. Returns the span of `close`.
    fn parse_items(&mut self, close: Token) -> Result<(Vec<Handle>, Span), ParseError> {
        let mut items = Vec::new();
        while !self.cursor.check(close) {
            items.push(self.parse_expression()?);
        }
        Ok((items, self.cursor.advance()))
    }

    /// `[a b c]`, built by consing the items back to front.
    pub(super) fn parse_stack(&mut self) -> Result<Handle, ParseError> {
        let start = self.cursor.expect(Token::LBracket)?;
        let (items, end) = self.parse_items(Token::RBracket)?;
        let span = start.merge(end);
        let mut stack = Handle::unit(Kind::EmptyStack, span);
        for top in items.into_iter().rev() {
            stack = self.arena.make_stack(span, Cons { top, rest: stack });
        }
        Ok(stack)
    }

    pub(super) fn parse_tuple(&mut self) -> Result<Handle, ParseError> {
        let start = self.cursor.expect(Token::LParen)?;
        let (items, end) = self.parse_items(Token::RParen)?;
        let items = self.arena.push_expressions(items);
        Ok(self.arena.make_tuple(start.merge(end), Tuple { items }))
    }

    /// `<(key value) ...>`
    pub(super) fn parse_table(&mut self) -> Result<Handle, ParseError> {
        let start = self.cursor.expect(Token::Lt)?;
        let mut rows = Vec::new();
        while !self.cursor.check(Token::Gt) {
            self.cursor.expect(Token::LParen)?;
            let key = self.parse_expression()?;
            let value = self.parse_expression()?;
            self.cursor.expect(Token::RParen)?;
            rows.push(TableRow { key, value });
        }
        let end = self.cursor.advance();
        let rows = self.arena.push_table_rows(rows);
        Ok(self.arena.make_table(start.merge(end), Table { rows }))
    }
}
