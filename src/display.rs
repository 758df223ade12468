use crate::domain::SpeedState;
use std::io::Write;
use tokio::sync::watch::Receiver;
use tracing::{instrument, warn};

pub const TITLE: &str = "Speed Display";

/// Renders a state as the lines shown to the user.
pub fn render(state: &SpeedState) -> Vec<String> {
    match state {
        SpeedState::Reading(reading) => vec![
            format!("Current Speed: {:.2} km/h", reading.speed.kilometers_per_hour()),
            format!("Current Speed: {:.2} mph", reading.speed.miles_per_hour()),
        ],
        SpeedState::WaitingForLocation => vec!["Waiting for location data...".to_string()],
        SpeedState::Failed(error) => vec![format!("An error occurred: {}", error)],
        SpeedState::Unsupported => vec!["Geolocation is not supported on this device.".to_string()],
    }
}

/// Writes the current state and every following change to `out` until the tracker hangs up.
#[instrument(skip_all)]
pub async fn display_listener<W: Write>(mut rx: Receiver<SpeedState>, mut out: W) -> W {
    if let Err(e) = writeln!(out, "{}", TITLE) {
        warn!("⚠️ Could not write to the display: {}", e);
    }

    loop {
        let state = rx.borrow_and_update().clone();
        for line in render(&state) {
            if let Err(e) = writeln!(out, "{}", line) {
                warn!("⚠️ Could not write to the display: {}", e);
            }
        }
        if let Err(e) = out.flush() {
            warn!("⚠️ Could not flush the display: {}", e);
        }

        if rx.changed().await.is_err() {
            return out;
        }
    }
}
