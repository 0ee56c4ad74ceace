use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::ideas::adapters::inbound::responses::{IdeaResponse, invalid_body, json_error};
use crate::modules::ideas::core::idea::Actor;
use crate::modules::ideas::use_cases::patch_idea::command::{IdeaPatch, PatchIdea};
use crate::shared::core::primitives::non_blank;
use crate::shell::passcode::ReviewerPasscode;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchIdeaBody {
    #[serde(flatten)]
    pub patch: IdeaPatch,
    pub editor_domain_id: Option<String>,
    pub editor_name: Option<String>,
}

impl PatchIdeaBody {
    fn editor(&self) -> Option<Actor> {
        let domain_id = non_blank(self.editor_domain_id.as_deref())?;
        let name = non_blank(self.editor_name.as_deref())?;
        Some(Actor {
            domain_id: domain_id.to_string(),
            name: name.to_string(),
        })
    }
}

pub async fn handle(
    _: ReviewerPasscode,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PatchIdeaBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };
    if body
        .patch
        .application_name
        .as_deref()
        .is_some_and(|name| non_blank(Some(name)).is_none())
    {
        return json_error(StatusCode::BAD_REQUEST, "applicationName cannot be blank");
    }

    let command = PatchIdea {
        editor: body.editor(),
        patch: body.patch,
        patched_at: Utc::now(),
    };

    match state.lifecycle.patch(&id, command).await {
        Ok(idea) => IdeaResponse::ok(idea).into_response(),
        Err(err) => err.into_response(),
    }
}
