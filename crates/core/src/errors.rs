/// Result type alias for credchain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for credchain operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid caller-supplied input such as an unknown chain token or an
    /// incomplete task-role parameter combination
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A host capability this library depends on is not loaded
    #[error("extension '{extension}' is required but not loaded: {message}")]
    MissingDependency { extension: String, message: String },

    /// Invariant violations that callers should never be able to trigger
    #[error("internal error: {message}")]
    Internal { message: String },
}

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a missing-dependency error
    #[must_use]
    pub fn missing_dependency(extension: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MissingDependency {
            extension: extension.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }
}
