mod capture;
mod config;
mod gesture;
mod output;
mod rate_limit;
mod server;
mod state;

use anyhow::Result;
use server::DaemonServer;
use state::DaemonState;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into()))
        .init();

    info!("handvol daemon (handvold) starting...");

    let config = config::load_config()?;

    let daemon_state = DaemonState::new(config);
    let state = Arc::new(Mutex::new(daemon_state));

    let server = DaemonServer::new(shared::ipc::CONTROL_SOCKET.into(), state);
    server.run().await?;

    Ok(())
}
