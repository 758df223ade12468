use crate::domain::{GeoFix, SpeedReading, SpeedState};
use crate::fix_source::{FixSource, FixSourceError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch::Sender;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info, instrument};

/// Turns consecutive fixes into speed readings, remembering only the previous fix.
#[derive(Debug, Default)]
pub struct SpeedTracker {
    previous: Option<GeoFix>,
}

impl SpeedTracker {
    pub fn new() -> Self {
        SpeedTracker::default()
    }

    pub fn update(&mut self, fix: GeoFix) -> SpeedState {
        let state = match &self.previous {
            Some(previous) => SpeedState::Reading(SpeedReading {
                speed: fix.speed_since(previous),
                elapsed_seconds: fix.elapsed_seconds_since(previous),
                fix: fix.clone(),
            }),
            None => SpeedState::WaitingForLocation,
        };

        self.previous = Some(fix);
        state
    }
}

/// Polls `source` every `poll_interval` and publishes the resulting state on `tx`.
///
/// The first failing poll is published as [`SpeedState::Failed`] and ends tracking.
#[instrument(skip(source, tx), fields(source = source.kind()))]
pub async fn track(mut source: Box<dyn FixSource>, poll_interval: Duration, tx: Sender<SpeedState>) -> Result<(), TrackerError> {
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut tracker = SpeedTracker::new();

    info!("🏁 Tracking speed every {:?}", poll_interval);

    loop {
        ticker.tick().await;

        let fix = match source.next_fix().await {
            Ok(fix) => fix,
            Err(e) => {
                error!("❌ Could not get a fix: {}", e);
                tx.send_replace(SpeedState::Failed(e.to_string()));
                return Err(TrackerError::FixSource(e));
            }
        };

        let state = tracker.update(fix);
        if let SpeedState::Reading(reading) = &state {
            debug!(
                elapsed_seconds = reading.elapsed_seconds,
                latitude = reading.fix.location.latitude,
                longitude = reading.fix.location.longitude,
                "🚗 Current speed {}",
                reading.speed
            );
        }

        if tx.send(state).is_err() {
            info!("🛑 Display went away, stopping");
            return Err(TrackerError::DisplayClosed);
        }
    }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    FixSource(#[from] FixSourceError),
    #[error("nobody is listening for speed updates")]
    DisplayClosed,
}
