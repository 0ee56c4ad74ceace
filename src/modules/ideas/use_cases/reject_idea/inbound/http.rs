use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::ideas::adapters::inbound::responses::{IdeaResponse, invalid_body};
use crate::modules::ideas::use_cases::reject_idea::command::RejectIdea;
use crate::shell::passcode::ReviewerPasscode;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectIdeaBody {
    pub approver_domain_id: Option<String>,
    pub approver_name: Option<String>,
    pub rejection_comment: Option<String>,
}

pub async fn handle(
    _: ReviewerPasscode,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RejectIdeaBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };

    let command = RejectIdea {
        approver_domain_id: body.approver_domain_id,
        approver_name: body.approver_name,
        rejection_comment: body.rejection_comment,
        rejected_at: Utc::now(),
    };

    match state.lifecycle.reject(&id, command).await {
        Ok(idea) => IdeaResponse::ok(idea).into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod reject_idea_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::ideas::core::idea::Collection;
    use crate::shell::passcode::PASSCODE_HEADER;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::ideas::make_approved_idea;
    use crate::tests::fixtures::state::{TEST_PASSCODE, make_offline_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/ideas/{id}/reject", post(handle))
            .with_state(state)
    }

    fn reject(id: &str, body: &'static str) -> Request<Body> {
        Request::post(format!("/api/ideas/{id}/reject"))
            .header("content-type", "application/json")
            .header(PASSCODE_HEADER, TEST_PASSCODE)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_reject_an_approved_idea() {
        let idea = make_approved_idea();
        let (store, state) = make_test_state(vec![idea.clone()]);
        let response = app(state)
            .oneshot(reject(
                &idea.id,
                r#"{"approverDomainId":"R1","approverName":"Reviewer One","rejectionComment":"Out of budget"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["idea"]["status"], "Rejected");
        assert_eq!(json["idea"]["rejectionComment"], "Out of budget");
        assert!(json["idea"].get("approvalDateTime").is_none());
        assert_eq!(store.records().await[0].collection, Collection::Rejected);
    }

    #[tokio::test]
    async fn it_should_return_400_and_keep_the_collection_on_an_empty_comment() {
        let idea = make_approved_idea();
        let (store, state) = make_test_state(vec![idea.clone()]);
        let response = app(state)
            .oneshot(reject(
                &idea.id,
                r#"{"approverDomainId":"R1","approverName":"Reviewer One","rejectionComment":""}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "missing required field: rejectionComment");
        assert_eq!(store.records().await[0].collection, Collection::Approved);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let (_, state) = make_offline_state();
        let response = app(state)
            .oneshot(reject(
                "any",
                r#"{"approverDomainId":"R1","approverName":"Reviewer One","rejectionComment":"x"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
