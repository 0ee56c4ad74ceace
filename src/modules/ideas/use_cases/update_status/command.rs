// Command data type for post-approval status tracking.
//
// The implementation date check (required, not in the future) belongs to the
// inbound adapter; the decider stores whatever date it is given.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    InProgress,
    Implemented {
        implemented_date: Option<String>,
        actual_savings: Option<String>,
    },
    NotInScope {
        reason: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatus {
    pub change: StatusChange,
    pub updated_at: DateTime<Utc>,
}
