use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::ideas::adapters::inbound::responses::{IdeaResponse, invalid_body, json_error};
use crate::modules::ideas::use_cases::update_status::command::{StatusChange, UpdateStatus};
use crate::shared::core::primitives::{non_blank, timestamp_millis};
use crate::shell::passcode::ReviewerPasscode;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusBody {
    pub status: String,
    pub implemented_date: Option<String>,
    pub actual_savings: Option<String>,
    pub not_in_scope_reason: Option<String>,
}

impl UpdateStatusBody {
    /// Maps the body onto a status change. An implemented status needs a date that
    /// parses and is not later than `now`.
    pub fn into_change(self, now: DateTime<Utc>) -> Result<StatusChange, String> {
        match self.status.as_str() {
            "In Progress" => Ok(StatusChange::InProgress),
            "Implemented" => {
                let Some(date) = non_blank(self.implemented_date.as_deref()) else {
                    return Err("implementedDate is required when status is Implemented".into());
                };
                match timestamp_millis(date) {
                    Some(ms) if ms <= now.timestamp_millis() => Ok(StatusChange::Implemented {
                        implemented_date: Some(date.to_string()),
                        actual_savings: self.actual_savings,
                    }),
                    Some(_) => Err("implementedDate cannot be in the future".into()),
                    None => Err(format!("implementedDate is not a date: {date}")),
                }
            }
            "Not in Scope" => Ok(StatusChange::NotInScope {
                reason: self.not_in_scope_reason,
            }),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

pub async fn handle(
    _: ReviewerPasscode,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };

    let now = Utc::now();
    let change = match body.into_change(now) {
        Ok(change) => change,
        Err(message) => return json_error(StatusCode::BAD_REQUEST, message),
    };

    let command = UpdateStatus {
        change,
        updated_at: now,
    };

    match state.lifecycle.update_status(&id, command).await {
        Ok(idea) => IdeaResponse::ok(idea).into_response(),
        Err(err) => err.into_response(),
    }
}
