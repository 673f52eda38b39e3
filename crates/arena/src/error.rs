use std::io;
use std::path::PathBuf;

use gyroad_core::NotationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    #[error("not a square: {0}")]
    BadSquare(String),

    #[error("failed to start search thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("search thread exited without a result")]
    SearchLost,
}
