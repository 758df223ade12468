use crate::domain::{GeoFix, Speed};

#[derive(Clone, Debug, PartialEq)]
pub struct SpeedReading {
    pub speed: Speed,
    pub fix: GeoFix,
    pub elapsed_seconds: f64,
}

/// The latest state of the speedometer as shown to the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SpeedState {
    #[default]
    WaitingForLocation,
    Reading(SpeedReading),
    Failed(String),
    Unsupported,
}
