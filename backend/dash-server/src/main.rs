use dash_auth::TokenService;
use dash_config::Config;
use dash_server::{AppState, build_router, logger};
use dash_store::Store;

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting dash-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let tokens = TokenService::with_hs256(config.auth.secret_bytes()?, config.auth.token_ttl());
    info!(
        "Access tokens valid for {}",
        humantime::format_duration(tokens.ttl())
    );
    let store = Store::seeded();
    warn!("All data is held in memory and is lost on restart");

    let app = build_router(AppState::new(tokens, store), config.cors.origin_header()?);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
