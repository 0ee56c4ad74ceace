use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::ideas::adapters::inbound::responses::json_error;
use crate::modules::ideas::use_cases::export_ideas::csv::{ExportView, render};
use crate::modules::ideas::use_cases::list_ideas::query::IdeaFilter;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ExportParams {
    #[serde(default)]
    pub view: ExportView,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
    Query(filter): Query<IdeaFilter>,
) -> Response {
    let ideas = params.view.select(state.lifecycle.snapshot().await, &filter);
    match render(params.view, &ideas) {
        Ok(document) => {
            let file_name = format!(
                "{}_{}.csv",
                params.view.file_stem(),
                Utc::now().format("%Y-%m-%d")
            );
            (
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{file_name}\""),
                    ),
                ],
                document,
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "csv export failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
