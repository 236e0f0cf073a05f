use thiserror::Error;

/// Result type for nsfinder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for nsfinder operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Autoload manifest could not be read or understood
    #[error("Autoload manifest error in {path}: {message}")]
    Manifest { path: String, message: String },

    /// No registered prefix is an ancestor of the target namespace
    #[error("No registered namespace prefix matches '{namespace}'")]
    NoMatchingPrefix { namespace: String },

    /// Path construction was asked to strip a prefix the target does not start with
    #[error("Namespace '{target}' does not start with prefix '{prefix}'")]
    InvalidRemainder { prefix: String, target: String },
}

impl Error {
    /// Creates a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an autoload manifest error
    pub fn manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a no-matching-prefix error for the given target namespace
    pub fn no_matching_prefix(namespace: impl Into<String>) -> Self {
        Self::NoMatchingPrefix {
            namespace: namespace.into(),
        }
    }

    /// Creates an invalid remainder error
    pub fn invalid_remainder(prefix: impl Into<String>, target: impl Into<String>) -> Self {
        Self::InvalidRemainder {
            prefix: prefix.into(),
            target: target.into(),
        }
    }
}
