use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::ideas::adapters::inbound::responses::{IdeaResponse, invalid_body};
use crate::modules::ideas::use_cases::approve_idea::command::ApproveIdea;
use crate::shell::passcode::ReviewerPasscode;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveIdeaBody {
    pub approver_domain_id: Option<String>,
    pub approver_name: Option<String>,
}

pub async fn handle(
    _: ReviewerPasscode,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ApproveIdeaBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };

    let command = ApproveIdea {
        approver_domain_id: body.approver_domain_id,
        approver_name: body.approver_name,
        approved_at: Utc::now(),
    };

    match state.lifecycle.approve(&id, command).await {
        Ok(idea) => IdeaResponse::ok(idea).into_response(),
        Err(err) => err.into_response(),
    }
}
