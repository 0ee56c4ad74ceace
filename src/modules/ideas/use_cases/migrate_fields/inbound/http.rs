use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::ideas::use_cases::migrate_fields::mappings::{apply, preview};
use crate::shell::passcode::ReviewerPasscode;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub success: bool,
    pub updated_count: usize,
    pub errors: Vec<String>,
    pub total_ideas: usize,
}

pub async fn handle_preview(_: ReviewerPasscode, State(state): State<AppState>) -> Response {
    let ideas = state.lifecycle.snapshot().await;
    Json(preview(&ideas)).into_response()
}

/// Applies every mapping in a single write. `errors` stays empty: the write either
/// lands for all records or fails as a whole.
pub async fn handle_run(_: ReviewerPasscode, State(state): State<AppState>) -> Response {
    match state.lifecycle.rewrite_all(apply).await {
        Ok(outcome) => Json(MigrationReport {
            success: true,
            updated_count: outcome.changed,
            errors: Vec::new(),
            total_ideas: outcome.total,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}
