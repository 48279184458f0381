use std::{path::PathBuf, sync::Arc, time::Duration};

use async_std::{fs, io::{self, prelude::*}};
use clap::Args;
use colored::Colorize;
use minifold::{
    span::{Lookup, Span},
    spanned_error, Encoding,
};
use thiserror::Error;

pub mod render;
pub mod simplify;
pub mod tokenize;

const STDIN: &str = "<stdin>";
const INLINE: &str = "<input>";

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Inline input (read from `--file` or stdin when omitted)
    input: Option<String>,
    /// A file to read the input from
    #[clap(short, long, conflicts_with = "input")]
    file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("unable to read `{}`", .0.display())]
    File(PathBuf, #[source] std::io::Error),
    #[error("unable to read stdin")]
    Stdin(#[source] std::io::Error),
}

impl InputArgs {
    pub async fn read(self) -> Result<Source, InputError> {
        if let Some(text) = self.input {
            return Ok(Source::new(INLINE, text));
        }

        if let Some(path) = self.file {
            return match fs::read_to_string(&path).await {
                Ok(text) => Ok(Source::new(path.display().to_string(), text)),
                Err(err) => Err(InputError::File(path, err)),
            };
        }

        let mut text = String::new();
        let mut stdin = io::stdin();
        stdin
            .read_to_string(&mut text)
            .await
            .map_err(InputError::Stdin)?;
        Ok(Source::new(STDIN, text))
    }
}

/// Input text with enough context to point diagnostics into it.
pub struct Source {
    pub name: Arc<String>,
    pub text: Arc<String>,
    lookup: Arc<Lookup>,
}

impl Source {
    pub fn new<N: Into<String>>(name: N, text: String) -> Self {
        let text = Arc::new(text);
        Source {
            name: Arc::new(name.into()),
            lookup: Arc::new(Lookup::new(text.clone())),
            text,
        }
    }

    pub fn span_at(&self, index: usize) -> Span {
        Span::at(self.name.clone(), self.lookup.clone(), index.min(self.text.len()))
    }
}

/// Reads a tree in tuple notation, emitting a diagnostic on failure.
pub async fn read_tree(source: &Source) -> Option<Encoding> {
    match source.text.parse::<Encoding>() {
        Ok(tree) => Some(tree),
        Err(err) => {
            spanned_error!(source.span_at(err.position()), "{err}")
                .emit()
                .await;
            None
        }
    }
}

pub fn finished(action: &str, name: &str, duration: Duration) {
    println!(
        "    {} {action} `{name}` in {}",
        "Finished".bold().green(),
        elapsed(duration),
    );
}

fn elapsed(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else {
        format!("{}.{:02}s", secs, duration.subsec_nanos() / 10_000_000)
    }
}
