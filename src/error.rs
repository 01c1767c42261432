// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Preview(PreviewError),
}

/// Errors raised while setting up a preview session.
///
/// Gesture handling itself never fails: malformed input is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// The preview was opened without any image locator.
    NoImages,
}

impl PreviewError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PreviewError::NoImages => "error-preview-no-images",
        }
    }
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::NoImages => write!(f, "No images to preview"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Preview(e) => write!(f, "Preview Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PreviewError> for Error {
    fn from(err: PreviewError) -> Self {
        Error::Preview(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
