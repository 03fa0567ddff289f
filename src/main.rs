use statcon::api::{self, app_state::AppState};
use statcon::config::loader::ConfigLoader;
use statcon::observability::{
    HealthCheckResult, ObservabilityState, create_observability_router, init_tracing,
};
use statcon::security::{LocalSessionStore, SessionSettings, SessionStore, spawn_refresh_loop};
use statcon::services::create_content_service;
use statcon::storage::{ContentRepository, StorageFactory};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;

    init_tracing(&config.logging, &config.app_name)?;
    info!(environment = %config.environment, "Starting Statcon...");

    let content_repository = StorageFactory::create_content_repository(&config.content).await?;
    let event_count = content_repository.list_events().await?.len();
    info!("Content repository initialized");

    let kv_store = StorageFactory::create_kv_store(&config.admin).await?;
    info!("Session storage initialized");

    let settings = SessionSettings::from_admin_config(&config.admin);
    let session_store: Arc<dyn SessionStore> =
        Arc::new(LocalSessionStore::from_settings(&settings, kv_store));
    info!(
        ttl_secs = settings.session_ttl.num_seconds(),
        "Session store initialized"
    );

    // Held for the lifetime of the server; dropping it stops the loop
    let _keep_alive = config.admin.keep_alive.then(|| {
        info!(
            interval_secs = settings.refresh_interval.num_seconds(),
            "Admin session keep-alive enabled"
        );
        spawn_refresh_loop(session_store.clone(), settings.refresh_period())
    });

    let content_service = create_content_service(content_repository);
    let app_state = AppState::new(content_service, session_store);
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
    ));
    observability_state
        .add_health_check(HealthCheckResult::healthy(
            "content",
            format!("{} events loaded", event_count),
        ))
        .await;
    observability_state
        .add_health_check(HealthCheckResult::healthy(
            "session_storage",
            format!("{:?}", config.admin.storage),
        ))
        .await;

    let api_router = api::create_router(app_state, &config.server.cors_allowed_origins);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
