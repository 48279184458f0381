use super::{Atom, Encoding, Expr, TreeError};

/// Operator eligible for folding. Other operators are always kept as written.
const FOLDABLE: &str = "*";

impl Expr {
    /// Returns a new tree with every multiplication of two literal numbers
    /// replaced by their product.
    ///
    /// Operands are simplified before their parent, so nested products fold
    /// bottom-up.
    pub fn simplify(&self) -> Result<Expr, TreeError> {
        Ok(match self {
            Expr::Assign { target, value } => Expr::assign(target.simplify()?, value.simplify()?),
            Expr::BinOp { op, left, right } => {
                let left = left.simplify()?;
                let right = right.simplify()?;

                match (&left, &right) {
                    (Expr::Num(l), Expr::Num(r)) if op == FOLDABLE => fold(l, r)?,
                    _ => Expr::binop(op.as_str(), left, right),
                }
            }
            Expr::Tree(inner) => Expr::Tree(Box::new(inner.simplify()?)),
            Expr::Name(_) | Expr::Num(_) | Expr::Atom(_) => self.clone(),
        })
    }
}

fn fold(left: &Atom, right: &Atom) -> Result<Expr, TreeError> {
    Ok(Expr::num(left.to_int()? * right.to_int()?))
}

/// Simplifies a flattened tree into a freshly built one. The input is left
/// untouched.
pub fn simplify_tree(tree: &Encoding) -> Result<Encoding, TreeError> {
    if tree.is_empty() {
        return Ok(Encoding::default());
    }

    Ok(Expr::decode(tree)?.simplify()?.encode())
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::cells;

    #[test]
    fn test_simplify_tree() {
        let tree = cells![
            "assign",
            "spam",
            cells![
                "binop",
                "+",
                cells!["name", "x"],
                cells!["binop", "*", cells!["num", 34i64], cells!["num", 567i64]]
            ]
        ];
        let simple = simplify_tree(&tree).unwrap();
        assert_eq!(
            simple,
            cells![
                "assign",
                "spam",
                cells!["binop", "+", cells!["name", "x"], cells!["num", 19278i64]]
            ]
        );
        assert_eq!(simplify_tree(&simple).unwrap(), simple);
    }

    #[test]
    fn test_text_literals_coerced() {
        let tree = cells!["binop", "*", cells!["num", "34"], cells!["num", "567"]];
        assert_eq!(simplify_tree(&tree).unwrap(), cells!["num", 19278i64]);
    }

    #[test]
    fn test_addition_kept() {
        let tree = cells!["binop", "+", cells!["num", "2"], cells!["num", "3"]];
        assert_eq!(simplify_tree(&tree).unwrap(), tree);
    }

    #[test]
    fn test_name_operand_kept() {
        let tree = cells!["binop", "*", cells!["name", "x"], cells!["num", "3"]];
        assert_eq!(simplify_tree(&tree).unwrap(), tree);
    }

    #[test]
    fn test_nested_products_fold_bottom_up() {
        let tree = cells![
            "binop",
            "*",
            cells!["binop", "*", cells!["num", "2"], cells!["num", "3"]],
            cells!["binop", "*", cells!["num", "4"], cells!["num", "5"]]
        ];
        assert_eq!(simplify_tree(&tree).unwrap(), cells!["num", 120i64]);
    }

    #[test]
    fn test_fold_under_unfoldable_parent() {
        let tree = cells![
            "binop",
            "/",
            cells!["binop", "*", cells!["num", "6"], cells!["num", "7"]],
            cells!["num", "2"]
        ];
        assert_eq!(
            simplify_tree(&tree).unwrap(),
            cells!["binop", "/", cells!["num", 42i64], cells!["num", "2"]]
        );
    }

    #[test]
    fn test_bare_operands_not_folded() {
        let tree = cells!["binop", "*", "3", "4"];
        assert_eq!(simplify_tree(&tree).unwrap(), tree);
    }

    #[test]
    fn test_input_untouched() {
        let expr = Expr::binop("*", Expr::num("3"), Expr::num("4"));
        let before = expr.clone();
        assert_eq!(expr.simplify().unwrap(), Expr::num(12i64));
        assert_eq!(expr, before);
    }

    #[test]
    fn test_not_an_integer() {
        let tree = cells!["binop", "*", cells!["num", "x"], cells!["num", "4"]];
        assert_eq!(
            simplify_tree(&tree),
            Err(TreeError::NotAnInteger("x".to_owned()))
        );
    }

    #[test]
    fn test_wide_literals() {
        let tree = cells![
            "binop",
            "*",
            cells!["num", "12345678901234567890"],
            cells!["num", "2"]
        ];
        let product: BigInt = "24691357802469135780".parse().unwrap();
        assert_eq!(simplify_tree(&tree).unwrap(), cells!["num", Atom::Int(product)]);

        let tree = cells![
            "binop",
            "*",
            cells!["num", 4294967296i64],
            cells!["num", 4294967296i64]
        ];
        let product: BigInt = "18446744073709551616".parse().unwrap();
        assert_eq!(simplify_tree(&tree).unwrap(), cells!["num", Atom::Int(product)]);
    }

    #[test]
    fn test_wrapped_operand_kept() {
        let tree = cells![
            "binop",
            "*",
            cells![cells!["num", "2"]],
            cells!["num", "3"]
        ];
        assert_eq!(simplify_tree(&tree).unwrap(), tree);

        let tree = cells!["assign", "spam", cells![cells!["name", "x"]]];
        assert_eq!(simplify_tree(&tree).unwrap(), tree);
    }

    #[test]
    fn test_fold_inside_wrapper() {
        let tree = cells![
            "assign",
            "z",
            cells![cells!["binop", "*", cells!["num", "6"], cells!["num", "7"]]]
        ];
        assert_eq!(
            simplify_tree(&tree).unwrap(),
            cells!["assign", "z", cells![cells!["num", 42i64]]]
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(simplify_tree(&Encoding::default()).unwrap(), Encoding::default());
    }
}
