//! Binary entrypoint for the remember HTTP server.
//!
//! Configuration comes from environment variables, see [`ServerConfig`].

use remember_server::config::ServerConfig;
use remember_server::router::build_router;
use remember_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config)?;
    let app = build_router(state);

    let addr = config.listen_addr();
    tracing::info!(
        "remember server starting on {} (store: {:?}, key: {})",
        addr,
        config.backend,
        config.document_key()
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
