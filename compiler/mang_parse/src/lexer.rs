//! Tokenizer built on logos.
//!
//! Keywords are whole words: logos prefers the longest match, so `input`
//! lexes as a name and never as `in` followed by `put`.

use logos::Logos;
use mang_ir::Span;

use crate::ParseError;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
pub enum Token {
    // === Delimiters ===
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // === Punctuation ===
    #[token("@")]
    At,
    #[token("!")]
    Bang,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("++=")]
    PlusPlusEq,
    #[token("--")]
    MinusMinus,

    // === Keywords ===
    #[token("in")]
    In,
    #[token("out")]
    Out,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("is")]
    Is,
    #[token("yes")]
    Yes,
    #[token("no")]
    No,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("end")]
    End,
    #[token("return")]
    Return,
    #[token("dynamic")]
    Dynamic,

    // === Literals ===
    #[token("-inf")]
    NegInf,

    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?")]
    Number,

    // No escape sequences; a string runs to the next double quote.
    #[regex(r#""[^"]*""#)]
    String,

    #[regex(r"'(.|\n)'")]
    Character,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,
}

impl Token {
    /// Human-readable form used in "expected ... but got ..." messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Token::LBrace => "`{`",
            Token::RBrace => "`}`",
            Token::LBracket => "`[`",
            Token::RBracket => "`]`",
            Token::LParen => "`(`",
            Token::RParen => "`)`",
            Token::Lt => "`<`",
            Token::Gt => "`>`",
            Token::At => "`@`",
            Token::Bang => "`!`",
            Token::Question => "`?`",
            Token::Colon => "`:`",
            Token::Eq => "`=`",
            Token::PlusEq => "`+=`",
            Token::PlusPlusEq => "`++=`",
            Token::MinusMinus => "`--`",
            Token::In => "`in`",
            Token::Out => "`out`",
            Token::If => "`if`",
            Token::Then => "`then`",
            Token::Else => "`else`",
            Token::Is => "`is`",
            Token::Yes => "`yes`",
            Token::No => "`no`",
            Token::While => "`while`",
            Token::For => "`for`",
            Token::End => "`end`",
            Token::Return => "`return`",
            Token::Dynamic => "`dynamic`",
            Token::NegInf => "`-inf`",
            Token::Number => "a number",
            Token::String => "a string",
            Token::Character => "a character",
            Token::Name => "a name",
        }
    }
}

/// Tokens of one source text with their spans.
///
/// `tokens` and `spans` are parallel. `end` is the empty span just past the
/// last byte, reported when the parser runs out of input.
#[derive(Clone, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
    spans: Vec<Span>,
    end: Span,
}

impl TokenList {
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    /// Span of the token at `index`, or the end-of-source span.
    #[inline]
    pub fn span(&self, index: usize) -> Span {
        self.spans.get(index).copied().unwrap_or(self.end)
    }

    #[inline]
    pub fn end_span(&self) -> Span {
        self.end
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// Tokenize `source`.
///
/// A character that starts no token is an error.
pub fn lex(source: &str) -> Result<TokenList, ParseError> {
    let mut list = TokenList {
        end: Span::from_range(source.len()..source.len()),
        ..TokenList::default()
    };
    let mut lexer = Token::lexer(source);
    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match result {
            Ok(token) => {
                list.tokens.push(token);
                list.spans.push(span);
            }
            Err(()) => return Err(ParseError::unknown_character(span, lexer.slice())),
        }
    }
    Ok(list)
}
