use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::ideas::adapters::inbound::responses::{IdeaResponse, invalid_body};
use crate::modules::ideas::use_cases::revert_idea::command::RevertIdea;
use crate::shell::passcode::ReviewerPasscode;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevertIdeaBody {
    pub reverted_by: Option<String>,
    pub reverted_by_domain_id: Option<String>,
    pub revert_reason: Option<String>,
}

pub async fn handle(
    _: ReviewerPasscode,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RevertIdeaBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };

    let command = RevertIdea {
        reverted_by: body.reverted_by,
        reverted_by_domain_id: body.reverted_by_domain_id,
        revert_reason: body.revert_reason,
        reverted_at: Utc::now(),
    };

    match state.lifecycle.revert(&id, command).await {
        Ok(idea) => IdeaResponse::ok(idea).into_response(),
        Err(err) => err.into_response(),
    }
}
