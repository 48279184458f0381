use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use minifold::{cfg::Config, error};

mod cli;

use cli::{render::RenderArgs, simplify::SimplifyArgs, tokenize::TokenizeArgs};

#[derive(Debug, Parser)]
#[clap(name = "minifold", version)]
struct Args {
    /// The directory holding `Minifold.toml` (default to the current working directory)
    #[clap(short = 'd', long, alias = "dir", global = true)]
    home: Option<PathBuf>,
    /// Disables colored output
    #[clap(long, global = true, action)]
    no_color: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Splits source text into tokens
    Tokenize(TokenizeArgs),
    /// Renders a tree back into source text
    Render(RenderArgs),
    /// Folds multiplications of literal numbers in a tree
    Simplify(SimplifyArgs),
}

#[async_std::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match Config::parse(args.home.as_ref()).await {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("{err}").emit().await;
            return ExitCode::FAILURE;
        }
    };

    if args.no_color || !cfg.output.color {
        colored::control::set_override(false);
    }

    let result = match args.command {
        Command::Tokenize(args) => cli::tokenize::tokenize(args, &cfg)
            .await
            .map_err(|err| err.to_string()),
        Command::Render(args) => cli::render::render(args, &cfg)
            .await
            .map_err(|err| err.to_string()),
        Command::Simplify(args) => cli::simplify::simplify(args, &cfg)
            .await
            .map_err(|err| err.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}").emit().await;
            ExitCode::FAILURE
        }
    }
}
