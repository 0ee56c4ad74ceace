use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::ideas::use_cases::dashboard::stats::DashboardStats;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let ideas = state.lifecycle.snapshot().await;
    Json(DashboardStats::compute(&ideas))
}
