use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle partition of an idea. The wire names match the stored blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Collection {
    #[default]
    #[serde(rename = "pendingIdeas")]
    Pending,
    #[serde(rename = "approvedIdeas")]
    Approved,
    #[serde(rename = "rejectedIdeas")]
    Rejected,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Pending,
        Collection::Approved,
        Collection::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Pending => "pendingIdeas",
            Collection::Approved => "approvedIdeas",
            Collection::Rejected => "rejectedIdeas",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status text carried by a record. Post-approval sub-states plus the `Rejected`
/// marker; anything else found in stored data is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IdeaStatus {
    InProgress,
    Implemented,
    NotInScope,
    Rejected,
    Other(String),
}

impl IdeaStatus {
    pub fn as_str(&self) -> &str {
        match self {
            IdeaStatus::InProgress => "In Progress",
            IdeaStatus::Implemented => "Implemented",
            IdeaStatus::NotInScope => "Not in Scope",
            IdeaStatus::Rejected => "Rejected",
            IdeaStatus::Other(value) => value,
        }
    }
}

impl From<String> for IdeaStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "In Progress" => IdeaStatus::InProgress,
            "Implemented" => IdeaStatus::Implemented,
            "Not in Scope" => IdeaStatus::NotInScope,
            "Rejected" => IdeaStatus::Rejected,
            _ => IdeaStatus::Other(value),
        }
    }
}

impl From<IdeaStatus> for String {
    fn from(value: IdeaStatus) -> Self {
        match value {
            IdeaStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collection a record was sent back from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviousStatus {
    Approved,
    Rejected,
}

impl PreviousStatus {
    /// Anything not leaving Approved is recorded as leaving Rejected.
    pub fn leaving(collection: Collection) -> Self {
        match collection {
            Collection::Approved => PreviousStatus::Approved,
            _ => PreviousStatus::Rejected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PreviousStatus::Approved => "Approved",
            PreviousStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevertEntry {
    pub reverted_by: String,
    pub reverted_by_domain_id: String,
    pub revert_reason: String,
    pub revert_date_time: String,
    pub previous_status: PreviousStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationNote {
    pub note: String,
    pub timestamp: String,
    pub ba_name: String,
    pub ba_domain_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationNameChange {
    pub old_value: String,
    pub new_value: String,
    pub changed_by: String,
    pub changed_by_domain_id: String,
    pub change_date_time: String,
}

/// Who performed an action, as recorded in review fields and history entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub domain_id: String,
    pub name: String,
}

/// The single stored entity.
///
/// Submission fields are plain strings (defaulting to empty for legacy rows),
/// everything added by later transitions is optional, history arrays are
/// append-only. Fields this type does not know about are kept in `extra` so a
/// rewrite never drops data written by someone else.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    #[serde(default)]
    pub collection: Collection,
    #[serde(default)]
    pub idea_id: String,
    #[serde(default)]
    pub associate_domain_id: String,
    #[serde(default)]
    pub associate_name: String,
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub team_lead: String,
    #[serde(default)]
    pub functional_manager: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specify_application_name: Option<String>,
    #[serde(default)]
    pub idea_name: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub savings_type: String,
    #[serde(default)]
    pub savings_comment: String,
    #[serde(default)]
    pub submission_date_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver_domain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IdeaStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implemented_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_savings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_in_scope_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_in_scope_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implementation_notes_history: Vec<ImplementationNote>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub revert_history: Vec<RevertEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_name_history: Vec<ApplicationNameChange>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Idea {
    pub fn is_reverted(&self) -> bool {
        !self.revert_history.is_empty()
    }

    /// Application name as shown to users: the free-text specifier wins when
    /// the name is `Other` and a specifier was given.
    pub fn display_application_name(&self) -> &str {
        let name = self.application_name.as_deref().unwrap_or_default();
        match self.specify_application_name.as_deref() {
            Some(specified) if name == "Other" && !specified.is_empty() => specified,
            _ => name,
        }
    }
}
