use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::ideas::core::idea::Collection;
use crate::modules::ideas::use_cases::list_ideas::query::{
    IdeaFilter, all_view, collection_view, grouped_view,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListIdeasParams {
    pub collection: Option<String>,
}

/// `collection` selects one collection or `all`; anything else returns the three groups.
/// The remaining query parameters narrow the result (see `IdeaFilter`).
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListIdeasParams>,
    Query(filter): Query<IdeaFilter>,
) -> Response {
    let ideas = state.lifecycle.snapshot().await;
    match params.collection.as_deref() {
        Some("all") => Json(json!({ "ideas": all_view(ideas, &filter) })).into_response(),
        Some(name) => match Collection::parse(name) {
            Some(collection) => {
                Json(json!({ "ideas": collection_view(ideas, collection, &filter) }))
                    .into_response()
            }
            None => Json(grouped_view(ideas, &filter)).into_response(),
        },
        None => Json(grouped_view(ideas, &filter)).into_response(),
    }
}
