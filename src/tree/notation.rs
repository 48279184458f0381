//! Tuple notation for flattened trees, e.g.
//! `("assign", "spam", ("binop", "+", ("name", "x"), ("num", 34)))`.

use std::ops::Range;
use std::str::FromStr;

use logos::{Lexer, Logos};
use num_bigint::BigInt;
use thiserror::Error;

use super::{Atom, Cell, Encoding};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid token `{token}`")]
    InvalidToken { token: String, position: usize },
    #[error("expected {expected}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: &'static str,
        position: usize,
    },
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd {
        expected: &'static str,
        position: usize,
    },
    #[error("unexpected input after the closing `)`")]
    TrailingInput { position: usize },
}

impl NotationError {
    pub fn position(&self) -> usize {
        match self {
            NotationError::InvalidToken { position, .. }
            | NotationError::Unexpected { position, .. }
            | NotationError::UnexpectedEnd { position, .. }
            | NotationError::TrailingInput { position } => *position,
        }
    }
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"\s+")]
enum Piece {
    #[token("(")]
    Open,
    #[token(")")]
    Close,
    #[token(",")]
    Comma,

    #[regex(r#""([^"\\]|\\.)*""#, Piece::string)]
    #[regex(r#"'([^'\\]|\\.)*'"#, Piece::string)]
    Str(String),

    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<BigInt>().ok())]
    Int(BigInt),
}

impl Piece {
    fn description(&self) -> &'static str {
        match self {
            Piece::Open => "`(`",
            Piece::Close => "`)`",
            Piece::Comma => "`,`",
            Piece::Str(_) => "string",
            Piece::Int(_) => "integer",
        }
    }

    fn string(lex: &mut Lexer<Piece>) -> Option<String> {
        let slice = lex.slice();
        unescape(&slice[1..slice.len() - 1])
    }
}

fn unescape(s: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let escaped = match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            'u' => {
                if chars.next()? != '{' {
                    return None;
                }
                let hex: String = chars.by_ref().take_while(|c| *c != '}').collect();
                char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?
            }
            other @ ('\\' | '"' | '\'') => other,
            _ => return None,
        };
        out.push(escaped);
    }

    Some(out)
}

struct Cursor<'a> {
    pieces: &'a [(Piece, Range<usize>)],
    position: usize,
    eof: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    fn peek(&self) -> Option<&'a (Piece, Range<usize>)> {
        self.pieces.get(self.position)
    }

    #[inline]
    fn step(&mut self) {
        self.position += 1;
    }

    fn expect(&mut self, want: Piece, expected: &'static str) -> Result<(), NotationError> {
        match self.peek() {
            Some((piece, _)) if *piece == want => {
                self.step();
                Ok(())
            }
            Some((piece, span)) => Err(NotationError::Unexpected {
                expected,
                found: piece.description(),
                position: span.start,
            }),
            None => Err(NotationError::UnexpectedEnd {
                expected,
                position: self.eof,
            }),
        }
    }

    fn tuple(&mut self) -> Result<Encoding, NotationError> {
        self.expect(Piece::Open, "`(`")?;

        let mut cells = Vec::new();
        loop {
            if let Some((Piece::Close, _)) = self.peek() {
                self.step();
                break;
            }

            cells.push(self.cell()?);

            match self.peek() {
                Some((Piece::Comma, _)) => self.step(),
                Some((Piece::Close, _)) => {
                    self.step();
                    break;
                }
                Some((piece, span)) => {
                    return Err(NotationError::Unexpected {
                        expected: "`,` or `)`",
                        found: piece.description(),
                        position: span.start,
                    })
                }
                None => {
                    return Err(NotationError::UnexpectedEnd {
                        expected: "`,` or `)`",
                        position: self.eof,
                    })
                }
            }
        }

        Ok(Encoding::new(cells))
    }

    fn cell(&mut self) -> Result<Cell, NotationError> {
        match self.peek() {
            Some((Piece::Open, _)) => Ok(Cell::Tree(self.tuple()?)),
            Some((Piece::Str(s), _)) => {
                self.step();
                Ok(Cell::Atom(Atom::Text(s.clone())))
            }
            Some((Piece::Int(n), _)) => {
                self.step();
                Ok(Cell::Atom(Atom::Int(n.clone())))
            }
            Some((piece, span)) => Err(NotationError::Unexpected {
                expected: "a cell",
                found: piece.description(),
                position: span.start,
            }),
            None => Err(NotationError::UnexpectedEnd {
                expected: "a cell",
                position: self.eof,
            }),
        }
    }
}

/// Reads a tree written in tuple notation.
pub fn parse(source: &str) -> Result<Encoding, NotationError> {
    let mut pieces = Vec::new();
    for (piece, span) in Piece::lexer(source).spanned() {
        match piece {
            Ok(piece) => pieces.push((piece, span)),
            Err(()) => {
                return Err(NotationError::InvalidToken {
                    token: source[span.clone()].to_owned(),
                    position: span.start,
                })
            }
        }
    }

    let mut cursor = Cursor {
        pieces: &pieces,
        position: 0,
        eof: source.trim_end().len(),
    };
    let tree = cursor.tuple()?;

    match cursor.peek() {
        Some((_, span)) => Err(NotationError::TrailingInput {
            position: span.start,
        }),
        None => Ok(tree),
    }
}

impl FromStr for Encoding {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
