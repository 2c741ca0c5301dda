use board_auth::core::{AppState, Config};
use board_auth::create_router;
use board_auth::token::SystemTimeSource;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    let state = Arc::new(AppState::new(&config.token, Arc::new(SystemTimeSource)));
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
