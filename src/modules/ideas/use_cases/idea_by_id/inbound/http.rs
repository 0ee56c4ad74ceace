use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::ideas::core::idea::Idea;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct IdeaByIdResponse {
    pub idea: Idea,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.lifecycle.fetch(&id).await {
        Ok(idea) => Json(IdeaByIdResponse { idea }).into_response(),
        Err(err) => err.into_response(),
    }
}
