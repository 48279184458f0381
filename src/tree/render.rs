use std::fmt;

use super::expr::decode_at;
use super::{Encoding, Expr, TreeError};

/// Renders source text. Operands are spliced in without parentheses, and binary
/// operations are written infix.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Assign { target, value } => write!(f, "{target} = {value}"),
            Expr::BinOp { op, left, right } => write!(f, "{left} {op} {right}"),
            Expr::Name(name) => f.write_str(name),
            Expr::Num(value) | Expr::Atom(value) => write!(f, "{value}"),
            Expr::Tree(inner) => write!(f, "{inner}"),
        }
    }
}

/// Renders the expression that begins at cell `start`.
///
/// A `start` at or past the end of the encoding renders as empty text.
pub fn to_source(tree: &Encoding, start: usize) -> Result<String, TreeError> {
    if start >= tree.len() {
        return Ok(String::new());
    }

    let (expr, _) = decode_at(tree, start)?;
    Ok(expr.to_string())
}
