//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent failed tree queries and malformed tree notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("label not found: {0}")]
    LabelNotFound(String),

    #[error("invalid tree notation at offset {offset}: {reason}")]
    Parse { offset: usize, reason: String },
}

impl DomainError {
    pub(crate) fn parse(offset: usize, reason: impl Into<String>) -> Self {
        DomainError::Parse {
            offset,
            reason: reason.into(),
        }
    }
}
