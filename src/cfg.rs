use std::{io::ErrorKind, path::PathBuf};

use async_std::fs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG: &str = "Minifold.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to open config file")]
    Read(#[from] std::io::Error),
    #[error("error deserializing config file: {0}")]
    De(#[from] toml::de::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub simplify: Simplify,
}

impl Config {
    /// Loads `Minifold.toml` from `dir`, or the working directory.
    /// A missing file yields the defaults.
    pub async fn parse(dir: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let file = dir
            .map(|dir| dir.join(CONFIG))
            .unwrap_or(PathBuf::from(CONFIG));

        let content = match fs::read_to_string(file).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        };

        Ok(toml::from_str(&content)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Output {
    pub color: bool,
    pub timings: bool,
}

impl Default for Output {
    fn default() -> Self {
        Output {
            color: true,
            timings: false,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Simplify {
    /// Also print the folded tree as source text.
    pub render: bool,
}
