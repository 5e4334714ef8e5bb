// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use chunkmap::ViewerError;
use thiserror::Error;

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures reported by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// A viewer operation failed.
    #[error(transparent)]
    Viewer(#[from] ViewerError),

    /// The config file could not be read.
    #[error("cannot read config {path}: {source}")]
    ReadConfig {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// An empty search result is an expected outcome and exits with 1; bad
    /// input exits with 2 and environment failures with 3.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Viewer(ViewerError::NoMatchFound { .. }) => 1,
            Self::Viewer(
                ViewerError::InvalidSeedFormat { .. }
                | ViewerError::CoordinateOutOfRange { .. }
                | ViewerError::SearchRadiusTooLarge { .. }
                | ViewerError::Config { .. },
            ) => 2,
            Self::Viewer(ViewerError::Entropy { .. })
            | Self::ReadConfig { .. }
            | Self::Io(_)
            | Self::Json(_) => 3,
        }
    }
}
