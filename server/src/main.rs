#![recursion_limit = "256"]

mod config;
mod routes;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Router(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

async fn run() -> Result<(), StartupError> {
    let config = config::ServerConfig::from_env()?;
    tracing::info!(backend = %config.backend.url, "backend configured");

    let app = routes::app(config.backend).map_err(StartupError::Router)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "inco-colors listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("no .env loaded: {e}");
    }
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
