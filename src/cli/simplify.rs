use std::time::Instant;

use clap::Args;
use minifold::{cfg::Config, simplify_tree, to_source, TreeError};
use thiserror::Error;

use super::{finished, read_tree, InputArgs, InputError};

#[derive(Debug, Args)]
pub struct SimplifyArgs {
    #[clap(flatten)]
    input: InputArgs,
    /// Also print the simplified tree as source text
    #[clap(long, action)]
    render: bool,
}

#[derive(Debug, Error)]
pub enum SimplifyError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("could not read a tree from `{0}` due to previous error")]
    Notation(String),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

pub async fn simplify(args: SimplifyArgs, cfg: &Config) -> Result<(), SimplifyError> {
    let source = args.input.read().await?;
    let start = Instant::now();

    let Some(tree) = read_tree(&source).await else {
        return Err(SimplifyError::Notation(source.name.to_string()));
    };

    let simple = simplify_tree(&tree)?;
    println!("{simple}");

    if args.render || cfg.simplify.render {
        println!("{}", to_source(&simple, 0)?);
    }

    if cfg.output.timings {
        finished("simplifying", &source.name, start.elapsed());
    }

    Ok(())
}
