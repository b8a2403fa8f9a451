use anyhow::Context;
use canister::{CanisterInterface, IcCanister};
use post_likes_relay::app;
use post_likes_relay::config::RelayConfig;
use post_likes_relay::state::AppState;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Log initialized");

    let config = RelayConfig::from_env()?;

    tracing::info!("Loading canister interface from {}", config.candid_path.display());
    let interface = CanisterInterface::load(&config.candid_path)
        .context("Make sure to run 'dfx generate' first")?;

    let canister = IcCanister::connect(config.network, config.canister_id, interface)
        .await
        .context("Failed to initialize agent")?;

    tracing::info!(
        "Relay initialized with canister ID: {}",
        canister.canister_id()
    );

    let app_state = AppState::new(canister);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Relay listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
