//! Error types for asset version labels.
//!
//! Each variant names the rejected input and the constraint it violated.

use thiserror::Error;

/// Errors arising from invalid version labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The label is empty.
    #[error("version label must not be empty")]
    Empty,

    /// The label exceeds the maximum length.
    #[error("version label \"{value}\" is longer than {max} characters")]
    TooLong {
        /// The rejected label.
        value: String,
        /// The maximum accepted length.
        max: usize,
    },

    /// The label contains a character that is unsafe in filenames or tags.
    #[error("version label \"{value}\" contains invalid character '{character}'")]
    InvalidCharacter {
        /// The rejected label.
        value: String,
        /// The first offending character.
        character: char,
    },
}

/// Result type alias using [`VersionError`].
pub type Result<T> = std::result::Result<T, VersionError>;
