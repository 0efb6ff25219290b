use thiserror::Error;

/// Errors raised when validating content payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
    #[error("No update data provided")]
    EmptyUpdate,
}
