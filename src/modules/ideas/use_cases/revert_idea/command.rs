// Command data type for sending a reviewed idea back to Pending.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevertIdea {
    pub reverted_by: Option<String>,
    pub reverted_by_domain_id: Option<String>,
    pub revert_reason: Option<String>,
    pub reverted_at: DateTime<Utc>,
}
