use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, error};

use groups_api::{build_router, AppState};
use groups_core::GroupRepository;
use groups_infrastructure::{create_pool, run_migrations, InMemoryGroupRepository, PgGroupRepository};
use groups_shared::config::{AppConfig, DatabaseSettings};

/// `database.url` scheme that selects the process-local store
const MEMORY_URL_SCHEME: &str = "memory:";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    groups_shared::telemetry::init_telemetry(&config.log);

    info!("{} starting (env: {})...", config.app.name, config.app.env);

    // Connect to the store
    let group_repo = match connect_repository(&config.database).await {
        Ok(repo) => repo,
        Err(e) => {
            error!("Failed to initialize storage: {:#}", e);
            return Err(e);
        }
    };

    // Build router
    let state = AppState::new(group_repo);
    let app = build_router(state, &config.cors.allowed_origins);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn connect_repository(settings: &DatabaseSettings) -> anyhow::Result<Arc<dyn GroupRepository>> {
    if settings.url.starts_with(MEMORY_URL_SCHEME) {
        info!("Using in-memory group store; data is lost on shutdown");
        return Ok(Arc::new(InMemoryGroupRepository::new()));
    }

    info!("Connecting to database...");
    let pool = create_pool(settings).await?;
    info!("Database connection established.");

    if settings.run_migrations {
        run_migrations(&pool).await?;
        info!("Database migrations applied.");
    }

    Ok(Arc::new(PgGroupRepository::new(pool)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
