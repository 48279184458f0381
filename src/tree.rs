//! Expression trees, in both their flattened cell form and a typed form.
//!
//! Trees arrive as an [`Encoding`] (usually read from tuple notation), are decoded
//! into an [`Expr`] for rendering and folding, and are encoded back on the way out.

use thiserror::Error;

mod encoding;
mod expr;
mod notation;
mod render;
mod simplify;

pub use encoding::{Atom, Cell, Encoding, Tag};
pub use expr::Expr;
pub use notation::NotationError;
pub use render::to_source;
pub use simplify::simplify_tree;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("malformed tree at cell {index}: {reason}")]
    MalformedTree { index: usize, reason: &'static str },
    #[error("`{0}` is not an integer literal")]
    NotAnInteger(String),
}

impl TreeError {
    pub(crate) fn malformed(index: usize, reason: &'static str) -> TreeError {
        TreeError::MalformedTree { index, reason }
    }
}
