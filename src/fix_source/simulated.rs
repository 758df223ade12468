use crate::domain::{GeoFix, GeoLocation};
use crate::fix_source::{FixSource, FixSourceError};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument};

/// Cycles through a fixed route, stamping every location with the current time.
/// A route with a single location simulates a device that stands still.
#[derive(Debug)]
pub struct SimulatedFixSource {
    route: Vec<GeoLocation>,
    position: usize,
}

impl SimulatedFixSource {
    pub fn new(route: Vec<GeoLocation>) -> Result<Self, FixSourceError> {
        if route.is_empty() {
            return Err(FixSourceError::EmptyRoute);
        }

        Ok(SimulatedFixSource { route, position: 0 })
    }
}

#[async_trait]
impl FixSource for SimulatedFixSource {
    fn kind(&self) -> &'static str {
        "simulated"
    }

    #[instrument(fields(source = self.kind()), skip(self))]
    async fn next_fix(&mut self) -> Result<GeoFix, FixSourceError> {
        let location = self.route[self.position].clone();
        self.position = (self.position + 1) % self.route.len();

        debug!("🛰️ Simulated fix at {}, {}", location.latitude, location.longitude);
        Ok(GeoFix::new(location, Utc::now()))
    }
}
