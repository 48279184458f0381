//! Front end for a tiny assignment language: a tokenizer, a tree model with a
//! renderer, and a constant-folding simplifier.

pub mod cfg;
pub mod diagnostic;
pub mod lex;
pub mod span;
pub mod tree;

pub use lex::{tokenize, LexError, Token, TokenKind, TokenStream, Tokenizer};
pub use tree::{simplify_tree, to_source, Atom, Cell, Encoding, Expr, NotationError, Tag, TreeError};
