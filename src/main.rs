use crate::app_config::AppConfig;
use crate::display::display_listener;
use crate::domain::SpeedState;
use crate::fix_source::new_fix_source;
use crate::tracker::track;
use tokio::sync::watch;
use tokio::{signal, task};
use tracing::{error, info, warn};

mod app_config;
mod display;
mod domain;
mod extensions;
mod fix_source;
mod geo_location_deserializer;
mod speed_estimator;
mod tracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let initial_state = match config.core().geolocation_enabled() {
        true => SpeedState::WaitingForLocation,
        false => SpeedState::Unsupported,
    };
    let (tx, rx) = watch::channel(initial_state);
    let display = task::spawn(async move {
        display_listener(rx, std::io::stdout()).await;
    });
    info!("✅  Initialized display");

    if !config.core().geolocation_enabled() {
        warn!("⚠️ Geolocation is disabled");
        drop(tx);
        display.await?;
        return Ok(());
    }

    let source = match new_fix_source(&config).await {
        Ok(source) => source,
        Err(e) => {
            tx.send_replace(SpeedState::Failed(e.to_string()));
            drop(tx);
            display.await?;
            return Err(e.into());
        }
    };
    info!("✅  Initialized {} fix source", source.kind());
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    tokio::select! {
        result = track(source, config.core().poll_interval(), tx) => {
            if let Err(e) = result {
                error!("❌ Stopped tracking: {}", e);
            }
        }
        _ = signal::ctrl_c() => {
            info!("🛑 Received Ctrl-C, shutting down");
        }
    }

    display.await?;
    Ok(())
}
