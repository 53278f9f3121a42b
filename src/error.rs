use std::path::PathBuf;
use thiserror::Error;

use crate::element::{DecodeError, MAX_SIDES};

/// Errors surfaced by the map maker outside of the UI loop
#[derive(Debug, Error)]
pub enum MapError {
    #[error("\"{}\" could not be accessed: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tool \"{0}\" is not implemented")]
    UnknownTool(String),

    #[error("Invalid shape record: {0}")]
    Decode(#[from] DecodeError),

    #[error("A polygon needs at least 2 sides, got {0}")]
    TooFewSides(usize),

    #[error("A polygon has at most {} sides, got {0}", MAX_SIDES)]
    TooManySides(usize),
}

impl MapError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type MapResult<T> = Result<T, MapError>;
