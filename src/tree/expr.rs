use crate::cells;

use super::{Atom, Cell, Encoding, Tag, TreeError};

/// Typed form of a tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    BinOp {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Name(String),
    /// Numeric literal. Holds source text until folded into an integer.
    Num(Atom),
    /// Operand written as a bare atom, such as an assignment target.
    Atom(Atom),
    /// A tree whose first cell is itself a nested tree, e.g. `(("name", "x"),)`.
    Tree(Box<Expr>),
}

impl Expr {
    pub fn assign(target: Expr, value: Expr) -> Expr {
        Expr::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn binop<S: Into<String>>(op: S, left: Expr, right: Expr) -> Expr {
        Expr::BinOp {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn name<S: Into<String>>(name: S) -> Expr {
        Expr::Name(name.into())
    }

    pub fn num<A: Into<Atom>>(value: A) -> Expr {
        Expr::Num(value.into())
    }

    pub fn decode(encoding: &Encoding) -> Result<Expr, TreeError> {
        if encoding.is_empty() {
            return Err(TreeError::malformed(0, "empty tree"));
        }

        let (expr, next) = decode_at(encoding, 0)?;
        if next != encoding.len() {
            return Err(TreeError::malformed(
                next,
                "trailing cells after a complete expression",
            ));
        }

        Ok(expr)
    }

    pub fn encode(&self) -> Encoding {
        match self {
            Expr::Assign { target, value } => cells![Tag::Assign, target.operand(), value.operand()],
            Expr::BinOp { op, left, right } => cells![
                Tag::BinOp,
                Atom::text(op.as_str()),
                left.operand(),
                right.operand()
            ],
            Expr::Name(name) => cells![Tag::Name, Atom::text(name.as_str())],
            Expr::Num(value) => cells![Tag::Num, value.clone()],
            Expr::Atom(atom) => cells![atom.clone()],
            Expr::Tree(inner) => cells![inner.encode()],
        }
    }

    fn operand(&self) -> Cell {
        match self {
            Expr::Atom(atom) => Cell::Atom(atom.clone()),
            expr => Cell::Tree(expr.encode()),
        }
    }
}

/// Decodes the expression whose first cell is `cells[index]`, returning it with
/// the index of the first cell after it.
pub(crate) fn decode_at(cells: &[Cell], index: usize) -> Result<(Expr, usize), TreeError> {
    let cell = cells
        .get(index)
        .ok_or_else(|| TreeError::malformed(index, "missing cell"))?;

    let atom = match cell {
        Cell::Tree(nested) => return Ok((Expr::Tree(Box::new(Expr::decode(nested)?)), index + 1)),
        Cell::Atom(atom) => atom,
    };

    let Some(tag) = atom.tag() else {
        return Ok((Expr::Atom(atom.clone()), index + 1));
    };

    let expr = match tag {
        Tag::Assign => Expr::assign(operand(cells, index + 1)?, operand(cells, index + 2)?),
        Tag::BinOp => {
            let op = payload(cells, index + 1)?
                .as_text()
                .ok_or_else(|| TreeError::malformed(index + 1, "operator must be text"))?;
            Expr::binop(op, operand(cells, index + 2)?, operand(cells, index + 3)?)
        }
        Tag::Name => {
            let name = payload(cells, index + 1)?
                .as_text()
                .ok_or_else(|| TreeError::malformed(index + 1, "identifier must be text"))?;
            Expr::name(name)
        }
        Tag::Num => Expr::Num(payload(cells, index + 1)?.clone()),
    };

    Ok((expr, index + 1 + tag.arity()))
}

fn operand(cells: &[Cell], index: usize) -> Result<Expr, TreeError> {
    match cells.get(index) {
        None => Err(TreeError::malformed(index, "missing operand")),
        Some(Cell::Tree(nested)) => Expr::decode(nested),
        Some(Cell::Atom(atom)) if atom.tag().is_some() => {
            Err(TreeError::malformed(index, "tag used as a bare operand"))
        }
        Some(Cell::Atom(atom)) => Ok(Expr::Atom(atom.clone())),
    }
}

fn payload(cells: &[Cell], index: usize) -> Result<&Atom, TreeError> {
    match cells.get(index) {
        None => Err(TreeError::malformed(index, "missing atom")),
        Some(Cell::Tree(_)) => Err(TreeError::malformed(index, "expected an atom, found a nested tree")),
        Some(Cell::Atom(atom)) => Ok(atom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spam() -> Encoding {
        cells![
            "assign",
            "spam",
            cells![
                "binop",
                "+",
                cells!["name", "x"],
                cells!["binop", "*", cells!["num", "34"], cells!["num", "567"]]
            ]
        ]
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            Expr::decode(&spam()),
            Ok(Expr::assign(
                Expr::Atom(Atom::text("spam")),
                Expr::binop(
                    "+",
                    Expr::name("x"),
                    Expr::binop("*", Expr::num("34"), Expr::num("567")),
                ),
            ))
        );
    }

    #[test]
    fn test_encode_restores_cells() {
        let tree = spam();
        assert_eq!(Expr::decode(&tree).unwrap().encode(), tree);
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(
            Expr::decode(&cells!["binop", "*", cells!["num", "2"]]),
            Err(TreeError::malformed(3, "missing operand"))
        );
    }

    #[test]
    fn test_trailing_cells() {
        assert_eq!(
            Expr::decode(&cells!["name", "x", "y"]),
            Err(TreeError::malformed(
                2,
                "trailing cells after a complete expression"
            ))
        );
    }

    #[test]
    fn test_spliced_operand_rejected() {
        assert_eq!(
            Expr::decode(&cells!["assign", "name", "x"]),
            Err(TreeError::malformed(1, "tag used as a bare operand"))
        );
    }

    #[test]
    fn test_nested_where_atom_required() {
        assert!(matches!(
            Expr::decode(&cells!["name", cells!["name", "x"]]),
            Err(TreeError::MalformedTree { index: 1, .. })
        ));
        assert!(matches!(
            Expr::decode(&cells!["binop", 1i64, "a", "b"]),
            Err(TreeError::MalformedTree { index: 1, .. })
        ));
    }

    #[test]
    fn test_empty() {
        assert!(Expr::decode(&Encoding::default()).is_err());
    }

    #[test]
    fn test_wrapped_tree_kept() {
        let wrapped = cells![cells!["name", "x"]];
        assert_eq!(
            Expr::decode(&wrapped),
            Ok(Expr::Tree(Box::new(Expr::name("x"))))
        );
        assert_eq!(Expr::decode(&wrapped).unwrap().encode(), wrapped);

        let operand = cells!["assign", "spam", cells![cells!["name", "x"]]];
        assert_eq!(Expr::decode(&operand).unwrap().encode(), operand);
    }
}
