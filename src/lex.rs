use std::fmt;

use logos::{Lexer, Logos};
use thiserror::Error;

pub type TokenStream = Vec<Token>;

/// Operator and assignment characters, keyed to the kind of token they produce.
pub const SYMBOLS: [(char, TokenKind); 5] = [
    ('+', TokenKind::Op),
    ('=', TokenKind::Assign),
    ('*', TokenKind::Op),
    ('/', TokenKind::Op),
    ('-', TokenKind::Op),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Name,
    Assign,
    Op,
    Num,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Name => "NAME",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Op => "OP",
            TokenKind::Num => "NUM",
        }
    }

    pub fn of_symbol(symbol: char) -> Option<TokenKind> {
        SYMBOLS
            .iter()
            .find(|(c, _)| *c == symbol)
            .map(|(_, kind)| *kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S) -> Token {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"{}\", \"{}\")", self.kind, self.lexeme)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("invalid character `{character}`")]
    InvalidCharacter { character: char, position: usize },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::InvalidCharacter { position, .. } => *position,
        }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
enum Lexeme {
    #[regex(r"[0-9]+")]
    Num,

    #[regex(r"\p{L}+")]
    Name,

    #[regex(r"[+=*/-]", Lexeme::symbol)]
    Symbol(TokenKind),
}

impl Lexeme {
    fn symbol(lex: &mut Lexer<Lexeme>) -> Option<TokenKind> {
        lex.slice().chars().next().and_then(TokenKind::of_symbol)
    }
}

/// Single-pass scanner over a source string.
///
/// Yields tokens until the input is exhausted. The first invalid character is
/// reported once and ends the sequence.
///
/// Numbers are runs of ASCII digits `0-9` only. Other Unicode decimal digits,
/// such as `٣`, are invalid characters. Names are runs of any Unicode letters.
pub struct Tokenizer<'src> {
    lex: Lexer<'src, Lexeme>,
    position: usize,
    done: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Tokenizer {
            lex: Lexeme::lexer(source),
            position: 0,
            done: false,
        }
    }

    /// Byte offset the scan has reached.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(next) = self.lex.next() else {
            self.done = true;
            self.position = self.lex.source().len();
            return None;
        };

        let span = self.lex.span();
        let slice = self.lex.slice();
        match next {
            Ok(lexeme) => {
                self.position = span.end;
                let kind = match lexeme {
                    Lexeme::Num => TokenKind::Num,
                    Lexeme::Name => TokenKind::Name,
                    Lexeme::Symbol(kind) => kind,
                };
                Some(Ok(Token::new(kind, slice)))
            }
            Err(()) => {
                self.done = true;
                self.position = span.start;
                let character = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                Some(Err(LexError::InvalidCharacter {
                    character,
                    position: span.start,
                }))
            }
        }
    }
}

impl<'src> std::iter::FusedIterator for Tokenizer<'src> {}

pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    Tokenizer::new(source).collect()
}
