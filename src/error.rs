//! Error types for the query builder.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QbError {
    /// A node reached a clause renderer that has no rendering for it.
    #[error("{node} is not supported in {clause} clause")]
    Unsupported { node: String, clause: &'static str },

    /// Insert or update built without any `field := value` pairs.
    #[error("{statement} statement requires at least one value")]
    EmptyValues { statement: &'static str },

    /// A `by` target that is neither a path nor a labeled binding.
    #[error("Invalid group by target: {0}")]
    InvalidGroupBy(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl QbError {
    /// Create an unsupported-construct error for the given clause.
    pub fn unsupported(node: impl Into<String>, clause: &'static str) -> Self {
        Self::Unsupported {
            node: node.into(),
            clause,
        }
    }
}

impl From<toml::de::Error> for QbError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.message().to_string())
    }
}

/// Result type alias for query builder operations.
pub type QbResult<T> = Result<T, QbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QbError::unsupported("unary operator `-`", "insert");
        assert_eq!(
            err.to_string(),
            "unary operator `-` is not supported in insert clause"
        );
    }

    #[test]
    fn test_empty_values_display() {
        let err = QbError::EmptyValues { statement: "update" };
        assert_eq!(err.to_string(), "update statement requires at least one value");
    }
}
