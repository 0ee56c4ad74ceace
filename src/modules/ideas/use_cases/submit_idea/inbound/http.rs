use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::ideas::adapters::inbound::responses::{IdeaResponse, invalid_body};
use crate::modules::ideas::use_cases::submit_idea::command::SubmitIdea;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitIdeaBody {
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
}

impl SubmitIdeaBody {
    pub fn into_command(self) -> SubmitIdea {
        SubmitIdea {
            id: Uuid::now_v7().to_string(),
            idea_id: self.idea_id,
            associate_domain_id: self.associate_domain_id,
            associate_name: self.associate_name,
            function: self.function,
            team_lead: self.team_lead,
            functional_manager: self.functional_manager,
            state: self.state,
            application_name: self.application_name,
            specify_application_name: self.specify_application_name,
            idea_name: self.idea_name,
            problem_statement: self.problem_statement,
            solution: self.solution,
            savings_type: self.savings_type,
            savings_comment: self.savings_comment,
            submission_date_time: self.submission_date_time,
            submitted_at: Utc::now(),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitIdeaBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };

    match state.lifecycle.submit(body.into_command()).await {
        Ok(idea) => (StatusCode::CREATED, IdeaResponse::ok(idea)).into_response(),
        Err(err) => err.into_response(),
    }
}
