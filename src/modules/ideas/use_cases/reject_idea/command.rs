use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectIdea {
    pub approver_domain_id: Option<String>,
    pub approver_name: Option<String>,
    pub rejection_comment: Option<String>,
    pub rejected_at: DateTime<Utc>,
}
