use std::fmt;
use std::ops::Deref;

use num_bigint::BigInt;

use super::TreeError;

/// The four node tags of the flattened form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Assign,
    BinOp,
    Name,
    Num,
}

impl Tag {
    pub fn parse(s: &str) -> Option<Tag> {
        match s {
            "assign" => Some(Tag::Assign),
            "binop" => Some(Tag::BinOp),
            "name" => Some(Tag::Name),
            "num" => Some(Tag::Num),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Assign => "assign",
            Tag::BinOp => "binop",
            Tag::Name => "name",
            Tag::Num => "num",
        }
    }

    /// Operand cells that follow the tag.
    pub fn arity(&self) -> usize {
        match self {
            Tag::Assign => 2,
            Tag::BinOp => 3,
            Tag::Name | Tag::Num => 1,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw payload: tag text, operator, identifier or number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    Text(String),
    Int(BigInt),
}

impl Atom {
    pub fn text<S: Into<String>>(s: S) -> Atom {
        Atom::Text(s.into())
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            Atom::Text(s) => Tag::parse(s),
            Atom::Int(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Atom::Text(s) => Some(s),
            Atom::Int(_) => None,
        }
    }

    /// Integer value of a numeric payload. Text is parsed as a decimal integer of
    /// any length, surrounding whitespace ignored.
    pub fn to_int(&self) -> Result<BigInt, TreeError> {
        match self {
            Atom::Int(n) => Ok(n.clone()),
            Atom::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| TreeError::NotAnInteger(s.clone())),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Text(s) => f.write_str(s),
            Atom::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<Tag> for Atom {
    fn from(value: Tag) -> Self {
        Atom::Text(value.as_str().to_owned())
    }
}

impl From<&str> for Atom {
    fn from(value: &str) -> Self {
        Atom::Text(value.to_owned())
    }
}

impl From<i64> for Atom {
    fn from(value: i64) -> Self {
        Atom::Int(value.into())
    }
}

impl From<BigInt> for Atom {
    fn from(value: BigInt) -> Self {
        Atom::Int(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    Atom(Atom),
    Tree(Encoding),
}

impl From<Atom> for Cell {
    fn from(value: Atom) -> Self {
        Cell::Atom(value)
    }
}

impl From<Tag> for Cell {
    fn from(value: Tag) -> Self {
        Cell::Atom(value.into())
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Atom(value.into())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Atom(value.into())
    }
}

impl From<Encoding> for Cell {
    fn from(value: Encoding) -> Self {
        Cell::Tree(value)
    }
}

/// Flattened, position-addressed tree.
///
/// Each tag is followed by exactly [`Tag::arity`] operand cells, and every operand
/// is a single cell: either a bare atom or a nested encoding addressed from its own
/// offset 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Encoding(Vec<Cell>);

impl Encoding {
    pub fn new(cells: Vec<Cell>) -> Self {
        Encoding(cells)
    }
}

impl Deref for Encoding {
    type Target = [Cell];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Builds an [`Encoding`] from a tuple-like list of cells.
///
/// ```
/// use minifold::cells;
/// let tree = cells!["binop", "*", cells!["num", "34"], cells!["num", 567i64]];
/// assert_eq!(tree.to_string(), r#"("binop", "*", ("num", "34"), ("num", 567))"#);
/// ```
#[macro_export]
macro_rules! cells {
    ($($cell:expr),* $(,)?) => {
        $crate::tree::Encoding::new(vec![$($crate::tree::Cell::from($cell)),*])
    };
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Atom(Atom::Text(s)) => write!(f, "{s:?}"),
            Cell::Atom(Atom::Int(n)) => write!(f, "{n}"),
            Cell::Tree(tree) => write!(f, "{tree}"),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{cell}")?;
        }
        if self.0.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}
