// End to end test of the review flow over the assembled router.
//
// Submits through the public route, reviews through the gated routes, then reads the result
// back through the listing, dashboard and export routes.
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::passcode::PASSCODE_HEADER;
use crate::tests::fixtures::state::{TEST_PASSCODE, make_test_state};

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header(PASSCODE_HEADER, TEST_PASSCODE);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone().oneshot(request.body(body).unwrap()).await.unwrap()
}

async fn json_of(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn text_of(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn reviews_an_idea_from_submission_to_implementation() {
    let (store, state) = make_test_state(vec![]);
    let app = router(state);

    let submitted = send(
        &app,
        "POST",
        "/api/ideas/submit",
        Some(json!({
            "ideaId": "IDEA-1",
            "associateDomainId": "A1",
            "associateName": "Associate One",
            "function": "DDO",
            "teamLead": "Adhikary, Gopa",
            "functionalManager": "Ravindran, Arun Raj",
            "state": "Karnataka",
            "applicationName": "PEGA",
            "ideaName": "Auto-fill provider address",
            "problemStatement": "Addresses are re-keyed by hand.",
            "solution": "Pre-fill from the roster feed.",
            "savingsType": "Productivity Improvement",
            "savingsComment": "About 2 hours per week"
        })),
    )
    .await;
    assert_eq!(submitted.status(), StatusCode::CREATED);
    let id = json_of(submitted).await["idea"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let approved = send(
        &app,
        "POST",
        &format!("/api/ideas/{id}/approve"),
        Some(json!({"approverDomainId": "R1", "approverName": "Reviewer One"})),
    )
    .await;
    assert_eq!(approved.status(), StatusCode::OK);
    let approved = json_of(approved).await;
    assert_eq!(approved["idea"]["collection"], "approvedIdeas");
    assert_eq!(approved["idea"]["status"], "In Progress");

    let reverted = send(
        &app,
        "POST",
        &format!("/api/ideas/{id}/revert"),
        Some(json!({
            "revertedBy": "BA One",
            "revertedByDomainId": "B1",
            "revertReason": "needs more detail"
        })),
    )
    .await;
    assert_eq!(reverted.status(), StatusCode::OK);
    let reverted = json_of(reverted).await;
    assert_eq!(reverted["idea"]["collection"], "pendingIdeas");
    assert_eq!(reverted["idea"]["revertHistory"][0]["previousStatus"], "Approved");

    send(
        &app,
        "POST",
        &format!("/api/ideas/{id}/approve"),
        Some(json!({"approverDomainId": "R1", "approverName": "Reviewer One"})),
    )
    .await;
    let implemented = send(
        &app,
        "POST",
        &format!("/api/ideas/{id}/status"),
        Some(json!({
            "status": "Implemented",
            "implementedDate": "2024-04-01",
            "actualSavings": "120 hours"
        })),
    )
    .await;
    assert_eq!(implemented.status(), StatusCode::OK);

    let grouped = json_of(send(&app, "GET", "/api/ideas", None).await).await;
    assert_eq!(grouped["pendingIdeas"], json!([]));
    assert_eq!(grouped["approvedIdeas"][0]["status"], "Implemented");

    let dashboard = json_of(send(&app, "GET", "/api/dashboard", None).await).await;
    assert_eq!(dashboard["implementedIdeas"], 1);

    let export = send(&app, "GET", "/api/ideas/export?view=approved", None).await;
    assert_eq!(export.status(), StatusCode::OK);
    let csv = text_of(export).await;
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("\"120 hours\""));
    assert!(csv.contains("BA One (B1) - needs more detail"));

    assert_eq!(store.records().await.len(), 1);
}

#[tokio::test]
async fn a_failed_rejection_leaves_the_idea_pending() {
    let (store, state) = make_test_state(vec![]);
    let app = router(state);

    let submitted = send(
        &app,
        "POST",
        "/api/ideas/submit",
        Some(json!({
            "ideaId": "IDEA-2",
            "associateDomainId": "A1",
            "associateName": "Associate One",
            "function": "DDO",
            "teamLead": "Adhikary, Gopa",
            "functionalManager": "Ravindran, Arun Raj",
            "state": "Karnataka",
            "ideaName": "Batch the reminders",
            "problemStatement": "Reminders go out one by one.",
            "solution": "Send one digest per day.",
            "savingsType": "Cost Savings"
        })),
    )
    .await;
    let id = json_of(submitted).await["idea"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let writes_before = store.write_count();

    let rejected = send(
        &app,
        "POST",
        &format!("/api/ideas/{id}/reject"),
        Some(json!({
            "approverDomainId": "R1",
            "approverName": "Reviewer One",
            "rejectionComment": ""
        })),
    )
    .await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_of(rejected).await,
        json!({"error": "missing required field: rejectionComment"})
    );

    let fetched = json_of(send(&app, "GET", &format!("/api/ideas/{id}"), None).await).await;
    assert_eq!(fetched["idea"]["collection"], "pendingIdeas");
    assert_eq!(store.write_count(), writes_before);
}
