//! Error types
//!
//! Everything that can fail outside the frame loop itself: score file I/O,
//! settings parsing and native window setup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the game
#[derive(Error, Debug)]
pub enum Error {
    /// Score file could not be read or written
    #[error("score file {path}: {source}")]
    ScoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line in the score file is not an integer
    #[error("score file line {line}: {text:?} is not a score")]
    MalformedScore {
        /// 1-based line number
        line: usize,
        /// Offending line (trimmed)
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Settings file exists but is not valid JSON for `Settings`
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// Native window could not be created
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    /// Pixel surface creation or presentation failed
    #[error("graphics: {0}")]
    Graphics(#[from] pixels::Error),
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, Error>;
