//! Configuration loading for chess-cli.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Render the board with FEN letters instead of unicode glyphs.
    #[serde(default)]
    pub ascii: bool,

    /// Starting position as a FEN string.
    #[serde(default)]
    pub fen: Option<String>,
}

impl Config {
    /// Loads configuration.
    ///
    /// With an explicit path the file must exist and parse. Otherwise
    /// `chess.toml` is looked up in the current directory or a parent,
    /// falling back to defaults when none is found.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        let paths = ["chess.toml", "../chess.toml", "../../chess.toml"];
        for path in paths {
            if Path::new(path).exists() {
                tracing::info!("Loading config from {}", path);
                return Self::read(Path::new(path));
            }
        }

        Ok(Config::default())
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
