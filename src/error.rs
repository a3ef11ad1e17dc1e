// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Platform(PlatformError),
}

/// Failures reported by host platform capabilities.
///
/// The control core never produces these itself; they come from the
/// collaborators a host wires in (window mode, orientation lock, engine).
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// Switching in or out of fullscreen failed.
    Fullscreen(String),

    /// The playback engine rejected a seek request.
    Seek(String),

    /// Generic error with raw message
    Other(String),
}

impl PlatformError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlatformError::Fullscreen(_) => "error-platform-fullscreen",
            PlatformError::Seek(_) => "error-platform-seek",
            PlatformError::Other(_) => "error-platform-general",
        }
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Fullscreen(msg) => write!(f, "Fullscreen change failed: {}", msg),
            PlatformError::Seek(msg) => write!(f, "Seek failed: {}", msg),
            PlatformError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Platform(e) => write!(f, "Platform Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Platform(err)
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
