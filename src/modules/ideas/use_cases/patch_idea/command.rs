// Command data type for partial edits by reviewers and managers.
//
// Purpose
// - Carry the scalar fields a caller may overwrite, plus the two edits that leave
//   an audit trail: a new implementation note and an application name change.
// - `id`, `collection` and the history arrays are not patchable; the lifecycle owns them.

use crate::modules::ideas::core::idea::Actor;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaPatch {
    pub idea_id: Option<String>,
    pub associate_domain_id: Option<String>,
    pub associate_name: Option<String>,
    pub function: Option<String>,
    pub team_lead: Option<String>,
    pub functional_manager: Option<String>,
    pub state: Option<String>,
    pub idea_name: Option<String>,
    pub problem_statement: Option<String>,
    pub solution: Option<String>,
    pub savings_type: Option<String>,
    pub savings_comment: Option<String>,
    pub approver_domain_id: Option<String>,
    pub approver_name: Option<String>,
    pub rejection_comment: Option<String>,
    pub implemented_date: Option<String>,
    pub actual_savings: Option<String>,
    pub application_name: Option<String>,
    pub specify_application_name: Option<String>,
    pub implementation_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchIdea {
    pub patch: IdeaPatch,
    pub editor: Option<Actor>,
    pub patched_at: DateTime<Utc>,
}
