use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::modules::ideas::adapters::inbound::responses::json_error;
use crate::shell::passcode::ReviewerPasscode;
use crate::shell::state::AppState;

pub async fn handle(
    _: ReviewerPasscode,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.lifecycle.delete(&id).await {
        Ok(true) => Json(json!({ "success": true })).into_response(),
        Ok(false) => json_error(StatusCode::NOT_FOUND, format!("idea not found: {id}")),
        Err(err) => err.into_response(),
    }
}
