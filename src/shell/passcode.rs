// Shared-passcode gate for reviewer and manager routes.
//
// A route opts in by taking `ReviewerPasscode` as its first extractor. The header must
// equal the configured passcode exactly; when no passcode is configured every request passes.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::Response,
};

use crate::modules::ideas::adapters::inbound::responses::json_error;
use crate::shell::state::AppState;

pub const PASSCODE_HEADER: &str = "x-portal-passcode";

#[derive(Debug, Clone, Copy)]
pub struct ReviewerPasscode;

impl FromRequestParts<AppState> for ReviewerPasscode {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.passcode.as_deref() else {
            return Ok(ReviewerPasscode);
        };
        let supplied = parts
            .headers
            .get(PASSCODE_HEADER)
            .and_then(|value| value.to_str().ok());
        if supplied == Some(expected) {
            Ok(ReviewerPasscode)
        } else {
            tracing::debug!(path = %parts.uri.path(), "passcode rejected");
            Err(json_error(StatusCode::UNAUTHORIZED, "invalid passcode"))
        }
    }
}
