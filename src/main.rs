//! Server binary: loads configuration, connects to PostgreSQL and serves
//! the HTTP API until Ctrl+C.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cognitive_analyzer::adapters::auth::JwtSessionValidator;
use cognitive_analyzer::adapters::http::{build_router, HttpHandlers};
use cognitive_analyzer::adapters::postgres::{
    PostgresCourseCatalog, PostgresProfileRepository, PostgresResponseStore,
};
use cognitive_analyzer::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = config.database.connect().await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let handlers = HttpHandlers::wire(
        Arc::new(PostgresResponseStore::new(pool.clone())),
        Arc::new(PostgresProfileRepository::new(pool.clone())),
        Arc::new(PostgresCourseCatalog::new(pool)),
    );
    let validator = Arc::new(JwtSessionValidator::new(&config.jwt_config()));
    let app = build_router(handlers, validator, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
