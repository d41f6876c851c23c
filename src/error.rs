//! Error types for Agrupar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Agrupar operations.
///
/// Provides detailed context about failures including dimension mismatches,
/// undersized cluster collections, and invalid hyperparameters.
///
/// # Examples
///
/// ```
/// use agrupar::error::AgruparError;
///
/// let err = AgruparError::DimensionMismatch {
///     expected: "3".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum AgruparError {
    /// Points of different dimensionality were compared or merged.
    DimensionMismatch {
        /// Expected dimension description
        expected: String,
        /// Actual dimension found
        actual: String,
    },

    /// A cluster collection had fewer entries than the operation requires.
    EmptyClusterSet {
        /// Minimum number of clusters the operation needs
        required: usize,
        /// Number of clusters actually present
        actual: usize,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Malformed input data (ragged row, unparsable field).
    FormatError {
        /// Error description
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AgruparError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgruparError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Point dimension mismatch: expected {expected}, got {actual}"
                )
            }
            AgruparError::EmptyClusterSet { required, actual } => {
                write!(
                    f,
                    "Cluster set too small: operation requires {required} clusters, found {actual}"
                )
            }
            AgruparError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            AgruparError::FormatError { message } => {
                write!(f, "Invalid input format: {message}")
            }
            AgruparError::Io(e) => write!(f, "I/O error: {e}"),
            AgruparError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AgruparError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgruparError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AgruparError {
    fn from(err: std::io::Error) -> Self {
        AgruparError::Io(err)
    }
}

impl From<&str> for AgruparError {
    fn from(msg: &str) -> Self {
        AgruparError::Other(msg.to_string())
    }
}

impl From<String> for AgruparError {
    fn from(msg: String) -> Self {
        AgruparError::Other(msg)
    }
}

impl AgruparError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a malformed-input error
    #[must_use]
    pub fn format_error(message: impl Into<String>) -> Self {
        Self::FormatError {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AgruparError>;
