//! # Lifesteal Utils Client Runtime
//!
//! Boots the event bus and every feature, then ticks until Ctrl+C.

use std::sync::Arc;

use anyhow::{Context, Result};
use lsu_runtime::{ClientRuntime, RuntimeConfig};
use lsu_telemetry::{init_logging, TelemetryConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    if let Err(e) = init_logging(&telemetry) {
        eprintln!("Logging disabled: {e}");
    }

    let config = RuntimeConfig::from_env();
    info!(service = %telemetry.service_name, "Starting Lifesteal Utils runtime");

    let runtime = Arc::new(ClientRuntime::new(config).context("Failed to bootstrap client runtime")?);

    let ticking = Arc::clone(&runtime);
    let tick_loop = tokio::spawn(async move { ticking.run_until_shutdown().await });

    info!("Runtime is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")?;

    runtime.shutdown();
    match tick_loop.await {
        Ok(ticks) => info!(ticks, "Shutdown complete"),
        Err(e) => error!(error = %e, "Tick loop ended abnormally"),
    }

    Ok(())
}
