//! Errors raised while loading themes and levels.
//!
//! Resolving a move never fails; malformed level data shows up as odd gameplay instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph { glyph: char, row: usize, column: usize },

    #[error("level has no player")]
    MissingPlayer,

    #[error("level has a second player at row {row}, column {column}")]
    MultiplePlayers { row: usize, column: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
