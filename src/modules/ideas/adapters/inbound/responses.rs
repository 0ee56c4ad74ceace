// Response shapes and error mapping shared by the idea HTTP adapters.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::modules::ideas::application::lifecycle::IdeaError;
use crate::modules::ideas::core::decision::DecideError;
use crate::modules::ideas::core::idea::Idea;

#[derive(Serialize)]
pub struct IdeaResponse {
    pub success: bool,
    pub idea: Idea,
}

impl IdeaResponse {
    pub fn ok(idea: Idea) -> Json<Self> {
        Json(Self {
            success: true,
            idea,
        })
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub fn invalid_body() -> Response {
    json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid JSON body")
}

impl IntoResponse for IdeaError {
    fn into_response(self) -> Response {
        let status = match &self {
            IdeaError::NotFound(_) => StatusCode::NOT_FOUND,
            IdeaError::Domain(DecideError::NotApproved(_)) => StatusCode::CONFLICT,
            IdeaError::Domain(_) => StatusCode::BAD_REQUEST,
            IdeaError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        json_error(status, self.to_string())
    }
}

#[cfg(test)]
mod responses_tests {
    use super::*;
    use crate::modules::ideas::core::idea::Collection;
    use crate::shared::infrastructure::record_store::StoreError;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(IdeaError::NotFound("x".into()), StatusCode::NOT_FOUND)]
    #[case(IdeaError::Domain(DecideError::MissingField("ideaName")), StatusCode::BAD_REQUEST)]
    #[case(IdeaError::Domain(DecideError::MissingApprover), StatusCode::BAD_REQUEST)]
    #[case(
        IdeaError::Domain(DecideError::NotApproved(Collection::Rejected)),
        StatusCode::CONFLICT
    )]
    #[case(
        IdeaError::StoreUnavailable(StoreError::Backend("down".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[tokio::test]
    async fn it_should_map_each_error_to_a_status(
        #[case] error: IdeaError,
        #[case] expected: StatusCode,
    ) {
        let message = error.to_string();
        let response = error.into_response();
        assert_eq!(response.status(), expected);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, json!({ "error": message }));
    }
}
