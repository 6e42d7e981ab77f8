//! Error type for oracle calls

use thiserror::Error;

/// Failure reported while talking to the implementation under test
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The implementation under test reported that the operation failed
    #[error("{operation} failed: {message}")]
    Failed { operation: String, message: String },

    /// The implementation returned a different number of results than requested
    #[error("{operation} returned {actual} results, but {expected} were expected")]
    ResultCount {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// The channel to the implementation broke down
    #[error("transport error during {operation}: {message}")]
    Transport { operation: String, message: String },
}

impl OracleError {
    /// Convenience constructor for [`OracleError::Failed`]
    pub fn failed(operation: &str, message: impl Into<String>) -> Self {
        Self::Failed {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`OracleError::Transport`]
    pub fn transport(operation: &str, message: impl Into<String>) -> Self {
        Self::Transport {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    /// Name of the operation that failed
    pub fn operation(&self) -> &str {
        match self {
            Self::Failed { operation, .. }
            | Self::ResultCount { operation, .. }
            | Self::Transport { operation, .. } => operation,
        }
    }
}

pub type Result<T> = std::result::Result<T, OracleError>;
