use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    response::Html,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::ideas::use_cases::approve_idea::inbound::http as approve_http;
use crate::modules::ideas::use_cases::dashboard::inbound::http as dashboard_http;
use crate::modules::ideas::use_cases::delete_idea::inbound::http as delete_http;
use crate::modules::ideas::use_cases::export_ideas::inbound::http as export_http;
use crate::modules::ideas::use_cases::idea_by_id::inbound::http as idea_by_id_http;
use crate::modules::ideas::use_cases::list_ideas::inbound::http as list_http;
use crate::modules::ideas::use_cases::migrate_fields::inbound::http as migrate_http;
use crate::modules::ideas::use_cases::patch_idea::inbound::http as patch_http;
use crate::modules::ideas::use_cases::reject_idea::inbound::http as reject_http;
use crate::modules::ideas::use_cases::revert_idea::inbound::http as revert_http;
use crate::modules::ideas::use_cases::submit_idea::inbound::http as submit_http;
use crate::modules::ideas::use_cases::update_status::inbound::http as status_http;
use crate::modules::reference_data::adapters::inbound::http as reference_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/api/ideas", get(list_http::handle))
        .route("/api/ideas/submit", post(submit_http::handle))
        .route("/api/ideas/export", get(export_http::handle))
        .route(
            "/api/ideas/migrate",
            get(migrate_http::handle_preview).post(migrate_http::handle_run),
        )
        .route(
            "/api/ideas/{id}",
            get(idea_by_id_http::handle)
                .patch(patch_http::handle)
                .delete(delete_http::handle),
        )
        .route("/api/ideas/{id}/approve", post(approve_http::handle))
        .route("/api/ideas/{id}/reject", post(reject_http::handle))
        .route("/api/ideas/{id}/revert", post(revert_http::handle))
        .route("/api/ideas/{id}/status", post(status_http::handle))
        .route("/api/dashboard", get(dashboard_http::handle))
        .route("/api/reference", get(reference_http::handle_reference))
        .route(
            "/api/reference/employees/{domain_id}",
            get(reference_http::handle_employee),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
