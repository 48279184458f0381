use std::time::Instant;

use clap::Args;
use minifold::{cfg::Config, spanned_error};
use thiserror::Error;

use super::{finished, InputArgs, InputError};

#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[clap(flatten)]
    input: InputArgs,
}

#[derive(Debug, Error)]
pub enum TokenizeError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("could not tokenize `{0}` due to previous error")]
    Lex(String),
}

pub async fn tokenize(args: TokenizeArgs, cfg: &Config) -> Result<(), TokenizeError> {
    let source = args.input.read().await?;
    let start = Instant::now();

    let tokens = match minifold::tokenize(&source.text) {
        Ok(tokens) => tokens,
        Err(err) => {
            spanned_error!(source.span_at(err.position()), "{err}")
                .emit()
                .await;
            return Err(TokenizeError::Lex(source.name.to_string()));
        }
    };

    for token in &tokens {
        println!("{token}");
    }

    if cfg.output.timings {
        finished("tokenizing", &source.name, start.elapsed());
    }

    Ok(())
}
