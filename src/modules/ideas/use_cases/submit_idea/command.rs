// Command data type for submitting a new idea.
//
// Purpose
// - Carry the anonymous submission form as received. Every form field is optional here;
//   the decider decides which ones are required.
// - `id` and `submitted_at` are assigned by the inbound adapter, not by the submitter.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitIdea {
    pub id: String,
    pub idea_id: Option<String>,
    pub associate_domain_id: Option<String>,
    pub associate_name: Option<String>,
    pub function: Option<String>,
    pub team_lead: Option<String>,
    pub functional_manager: Option<String>,
    pub state: Option<String>,
    pub application_name: Option<String>,
    pub specify_application_name: Option<String>,
    pub idea_name: Option<String>,
    pub problem_statement: Option<String>,
    pub solution: Option<String>,
    pub savings_type: Option<String>,
    pub savings_comment: Option<String>,
    pub submission_date_time: Option<String>,
    pub submitted_at: DateTime<Utc>,
}
