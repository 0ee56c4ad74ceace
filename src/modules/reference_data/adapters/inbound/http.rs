use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::ideas::adapters::inbound::responses::json_error;
use crate::modules::reference_data::core::directory::{BusinessAnalyst, Employee};
use crate::modules::reference_data::core::vocabularies::Vocabularies;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceResponse {
    #[serde(flatten)]
    pub vocabularies: Vocabularies,
    pub business_analysts: &'static [BusinessAnalyst],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse<'a> {
    pub domain_id: &'a str,
    #[serde(flatten)]
    pub employee: &'a Employee,
}

pub async fn handle_reference(State(state): State<AppState>) -> impl IntoResponse {
    Json(ReferenceResponse {
        vocabularies: state.reference.vocabularies(),
        business_analysts: state.reference.business_analysts(),
    })
}

pub async fn handle_employee(
    State(state): State<AppState>,
    Path(domain_id): Path<String>,
) -> Response {
    match state.reference.employees.get(&domain_id) {
        Some(employee) => Json(EmployeeResponse {
            domain_id: &domain_id,
            employee,
        })
        .into_response(),
        None => json_error(
            StatusCode::NOT_FOUND,
            format!("employee not found: {domain_id}"),
        ),
    }
}
