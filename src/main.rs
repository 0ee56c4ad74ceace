use anyhow::Context;
use idea_portal::config::AppConfig;
use idea_portal::modules::reference_data::core::directory::{EmployeeDirectory, ReferenceData};
use idea_portal::shell::http::router;
use idea_portal::shell::state::{AppState, build_record_store};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    if config.passcode.is_none() {
        tracing::warn!("IDEA_PORTAL_PASSCODE is not set, reviewer routes are open");
    }

    let employees = match &config.employees_path {
        Some(path) => EmployeeDirectory::load(path).await?,
        None => EmployeeDirectory::default(),
    };
    tracing::info!(employees = employees.len(), "reference data loaded");

    let store = build_record_store(&config.store);
    let state = AppState::new(store, ReferenceData::new(employees), config.passcode.clone());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    tracing::info!("Listening on http://{}", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
