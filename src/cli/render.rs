use std::time::Instant;

use clap::Args;
use minifold::{cfg::Config, note, to_source, TreeError};
use thiserror::Error;

use super::{finished, read_tree, InputArgs, InputError};

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[clap(flatten)]
    input: InputArgs,
    /// Cell of the top-level tree to start rendering from
    #[clap(long, default_value_t = 0)]
    start: usize,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("could not read a tree from `{0}` due to previous error")]
    Notation(String),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

pub async fn render(args: RenderArgs, cfg: &Config) -> Result<(), RenderError> {
    let source = args.input.read().await?;
    let start = Instant::now();

    let Some(tree) = read_tree(&source).await else {
        return Err(RenderError::Notation(source.name.to_string()));
    };

    let code = to_source(&tree, args.start)?;
    if args.start >= tree.len() {
        note!("cell {} is past the end of the tree, nothing to render", args.start)
            .emit()
            .await;
    }
    println!("{code}");

    if cfg.output.timings {
        finished("rendering", &source.name, start.elapsed());
    }

    Ok(())
}
