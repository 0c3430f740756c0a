use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Construction-time precondition violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum EngineError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    /// The starting tail sits one column left of `width / 4`.
    #[error("board must be at least 4 columns wide, got {width}")]
    BoardTooNarrow { width: u32 },
}

/// Failures while loading or validating [`crate::config::Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("frame interval must be at least 1 ms")]
    ZeroFrameInterval,

    #[error(transparent)]
    Engine(#[from] EngineError),
}
