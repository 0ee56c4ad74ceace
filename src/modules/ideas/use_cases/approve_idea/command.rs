// Command data type for approving an idea.
//
// Approver identity comes from the reviewer's form; `approved_at` is stamped by the inbound adapter.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveIdea {
    pub approver_domain_id: Option<String>,
    pub approver_name: Option<String>,
    pub approved_at: DateTime<Utc>,
}
