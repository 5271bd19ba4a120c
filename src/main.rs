//! StudyHub server — personal knowledge organization API.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use studyhub_api::AppState;
use studyhub_auth::jwt::{JwtDecoder, JwtEncoder};
use studyhub_auth::password::PasswordHasher;
use studyhub_core::config::AppConfig;
use studyhub_database::StoreBackend;
use studyhub_service::account::AccountService;
use studyhub_service::ownership::OwnershipResolver;
use studyhub_service::resource::ResourceService;
use studyhub_service::subtopic::SubtopicService;
use studyhub_service::topic::TopicService;
use studyhub_storage::create_blob_store;

#[tokio::main]
async fn main() {
    let env = std::env::var("STUDYHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e:#}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!("Starting StudyHub v{}", env!("CARGO_PKG_VERSION"));

    let store = StoreBackend::connect(&config.database)
        .await
        .context("Store backend initialization failed")?;
    tracing::info!(provider = %config.database.provider, "Store backend ready");

    let blobs = create_blob_store(&config.blob)
        .await
        .context("Blob store initialization failed")?;
    tracing::info!(provider = blobs.provider_type(), "Blob store ready");

    let hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let resolver = OwnershipResolver::new(
        store.topics.clone(),
        store.subtopics.clone(),
        store.resources.clone(),
    );

    let state = AppState {
        config: Arc::new(config.clone()),
        jwt_decoder,
        accounts: Arc::new(AccountService::new(
            store.users.clone(),
            hasher,
            jwt_encoder,
        )),
        topics: Arc::new(TopicService::new(
            store.topics.clone(),
            store.subtopics.clone(),
            store.resources.clone(),
            resolver.clone(),
        )),
        subtopics: Arc::new(SubtopicService::new(
            store.subtopics.clone(),
            store.resources.clone(),
            resolver.clone(),
        )),
        resources: Arc::new(ResourceService::new(
            store.resources.clone(),
            blobs,
            resolver,
            config.blob.max_upload_size_bytes,
        )),
    };

    let app = studyhub_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!("Server shut down cleanly");

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
