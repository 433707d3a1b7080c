//! Token cursor for navigating the token stream.

use mang_ir::Span;

use crate::{ParseError, Token, TokenList};

/// Position in a [`TokenList`] plus the source it was lexed from.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Cursor {
            tokens,
            source,
            pos: 0,
        }
    }

    /// Current token, `None` at the end of the stream.
    #[inline]
    pub fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens.span(self.pos)
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens.span(self.pos - 1)
        } else {
            Span::DUMMY
        }
    }

    /// Source text of the current token.
    pub fn slice(&self) -> &'a str {
        let span = self.current_span();
        self.source.get(span.to_range()).unwrap_or("")
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn check(&self, token: Token) -> bool {
        self.current() == Some(token)
    }

    /// Consume the current token and return its span.
    #[inline]
    pub fn advance(&mut self) -> Span {
        let span = self.current_span();
        if !self.is_at_end() {
            self.pos += 1;
        }
        span
    }

    /// Current token, or an end-of-source error.
    pub fn peek(&self) -> Result<Token, ParseError> {
        self.current()
            .ok_or_else(|| ParseError::unexpected_end(self.tokens.end_span()))
    }

    /// Consume `token` or fail with an "expected" error.
    pub fn expect(&mut self, token: Token) -> Result<Span, ParseError> {
        let found = self.peek()?;
        if found == token {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(
                self.current_span(),
                token.display_name(),
                found,
            ))
        }
    }

    /// Consume a name token and return its text and span.
    pub fn expect_name(&mut self) -> Result<(&'a str, Span), ParseError> {
        let found = self.peek()?;
        if found == Token::Name {
            let text = self.slice();
            Ok((text, self.advance()))
        } else {
            Err(ParseError::expected(
                self.current_span(),
                Token::Name.display_name(),
                found,
            ))
        }
    }
}
