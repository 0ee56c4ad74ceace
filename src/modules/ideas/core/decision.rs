use crate::modules::ideas::core::idea::Collection;
use crate::shared::core::primitives::is_blank;

/// Reasons a pure decide function refuses a transition. Field names use the wire spelling.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("approver domain id and name are required")]
    MissingApprover,

    #[error("idea is not approved (currently in {0})")]
    NotApproved(Collection),
}

/// Takes a required input, treating absent and whitespace-only values alike.
pub fn require(value: Option<String>, field: &'static str) -> Result<String, DecideError> {
    match value {
        Some(v) if !is_blank(Some(&v)) => Ok(v),
        _ => Err(DecideError::MissingField(field)),
    }
}
