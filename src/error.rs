use thiserror::Error;

/// Failure surfaced by the mutating actions.
///
/// Carries only the text of the underlying store error, so callers cannot
/// tell a validation failure from a missing row or a dropped connection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0}")]
    Persistence(String),
}

impl ActionError {
    pub fn persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}
