use std::fs;

use minifold::{
    cells,
    cfg::{Config, CONFIG},
    simplify_tree, to_source, tokenize, Encoding, Expr, TokenKind,
};

const SPAM: &str = r#"("assign", "spam", ("binop", "+", ("name", "x"), ("binop", "*", ("num", "34"), ("num", "567"))))"#;

fn spam() -> Encoding {
    SPAM.parse().unwrap()
}

#[test]
fn render_then_tokenize() {
    let code = to_source(&spam(), 0).unwrap();
    assert_eq!(code, "spam = x + 34 * 567");

    let kinds: Vec<TokenKind> = tokenize(&code)
        .unwrap()
        .into_iter()
        .map(|tok| tok.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Name,
            TokenKind::Assign,
            TokenKind::Name,
            TokenKind::Op,
            TokenKind::Num,
            TokenKind::Op,
            TokenKind::Num,
        ]
    );
}

#[test]
fn simplify_then_render() {
    let simple = simplify_tree(&spam()).unwrap();
    assert_eq!(
        simple.to_string(),
        r#"("assign", "spam", ("binop", "+", ("name", "x"), ("num", 19278)))"#
    );
    assert_eq!(to_source(&simple, 0).unwrap(), "spam = x + 19278");
}

#[test]
fn simplify_leaves_input_alone() {
    let tree = spam();
    let before = tree.clone();
    let _ = simplify_tree(&tree).unwrap();
    assert_eq!(tree, before);
}

#[test]
fn folded_literal_survives_rerender() {
    let simple = simplify_tree(&spam()).unwrap();
    let code = to_source(&simple, 0).unwrap();
    let folded = tokenize(&code).unwrap().pop().unwrap();
    assert_eq!(folded.kind, TokenKind::Num);
    assert_eq!(folded.lexeme, "19278");

    // Rebuild the statement from the rendered tokens, as a parser would.
    let rebuilt = Expr::assign(
        Expr::Atom("spam".into()),
        Expr::binop("+", Expr::name("x"), Expr::num(folded.lexeme.as_str())),
    )
    .encode();
    let again = simplify_tree(&rebuilt).unwrap();
    assert_eq!(to_source(&again, 0).unwrap(), code);
}

#[test]
fn cells_macro_matches_notation() {
    let built = cells![
        "assign",
        "spam",
        cells![
            "binop",
            "+",
            cells!["name", "x"],
            cells!["binop", "*", cells!["num", "34"], cells!["num", "567"]]
        ]
    ];
    assert_eq!(built, spam());
}

#[test]
fn config_defaults_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = async_std::task::block_on(Config::parse(Some(&dir.path().to_path_buf()))).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(cfg.output.color);
}

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG),
        "[output]\ncolor = false\n\n[simplify]\nrender = true\n",
    )
    .unwrap();

    let cfg = async_std::task::block_on(Config::parse(Some(&dir.path().to_path_buf()))).unwrap();
    assert!(!cfg.output.color);
    assert!(!cfg.output.timings);
    assert!(cfg.simplify.render);
}

#[test]
fn config_rejects_bad_toml() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIG), "[output\n").unwrap();

    let cfg = async_std::task::block_on(Config::parse(Some(&dir.path().to_path_buf())));
    assert!(cfg.is_err());
}
