// Copyright 2025 the Chunkmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Result alias for viewer operations.
pub type Result<T> = core::result::Result<T, ViewerError>;

/// Recoverable failures reported by [`Viewer`](crate::Viewer) operations.
///
/// A failed operation leaves the viewer state exactly as it was.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ViewerError {
    /// Seed text is not a 64-bit signed decimal integer.
    #[error("invalid seed format: {text:?}")]
    InvalidSeedFormat {
        /// The rejected input.
        text: String,
    },

    /// A search target lies outside the supported coordinate range.
    #[error("coordinate ({x}, {z}) is out of range (limit is ±{max})")]
    CoordinateOutOfRange {
        /// Requested block x.
        x: i64,
        /// Requested block z.
        z: i64,
        /// Largest supported absolute block coordinate.
        max: f64,
    },

    /// A search radius is larger than the configured maximum.
    #[error("search radius {radius} exceeds the maximum of {max}")]
    SearchRadiusTooLarge {
        /// Requested radius in cells.
        radius: i32,
        /// Configured maximum radius.
        max: i32,
    },

    /// The search neighbourhood holds no matching cell.
    #[error("no match found within {radius} cells of ({x}, {z})")]
    NoMatchFound {
        /// Requested block x.
        x: i64,
        /// Requested block z.
        z: i64,
        /// Search radius in cells.
        radius: i32,
    },

    /// The operating system could not provide a random seed.
    #[error("entropy source failed: {message}")]
    Entropy {
        /// Description from the entropy source.
        message: String,
    },

    /// Configuration could not be parsed or is inconsistent.
    #[error("invalid configuration: {message}")]
    Config {
        /// What is wrong with it.
        message: String,
    },
}

impl ViewerError {
    /// Builds a [`ViewerError::Config`].
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(error: serde_json::Error) -> Self {
        Self::config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ViewerError;

    #[test]
    fn messages_name_the_input() {
        let error = ViewerError::InvalidSeedFormat {
            text: "abc".into(),
        };
        assert_eq!(error.to_string(), "invalid seed format: \"abc\"");

        let error = ViewerError::CoordinateOutOfRange {
            x: 20_000_000,
            z: 0,
            max: 12_550_816.0,
        };
        assert_eq!(
            error.to_string(),
            "coordinate (20000000, 0) is out of range (limit is ±12550816)"
        );

        let error = ViewerError::SearchRadiusTooLarge {
            radius: 5000,
            max: 1024,
        };
        assert_eq!(
            error.to_string(),
            "search radius 5000 exceeds the maximum of 1024"
        );
    }

    #[test]
    fn json_errors_become_config_errors() {
        let error: ViewerError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(error, ViewerError::Config { .. }));
    }
}
