use crate::domain::GeoLocation;
use crate::domain::Speed;
use crate::speed_estimator::calculate_speed;
use chrono::{DateTime, Utc};

/// A position sampled at a point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFix {
    pub location: GeoLocation,
    pub timestamp: DateTime<Utc>,
}

impl GeoFix {
    pub fn new(location: GeoLocation, timestamp: DateTime<Utc>) -> Self {
        GeoFix { location, timestamp }
    }

    /// Creates a fix from a timestamp in (fractional) seconds since the Unix epoch.
    /// Returns `None` if the timestamp is not representable.
    pub fn from_epoch_seconds(location: GeoLocation, seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }

        let mut whole_seconds = seconds.floor() as i64;
        let mut nanoseconds = ((seconds - seconds.floor()) * 1e9).round() as u32;
        if nanoseconds >= 1_000_000_000 {
            whole_seconds += 1;
            nanoseconds = 0;
        }

        let timestamp = DateTime::from_timestamp(whole_seconds, nanoseconds)?;
        Some(GeoFix { location, timestamp })
    }

    /// Seconds elapsed between `previous` and this fix, negative if `previous` is more recent.
    pub fn elapsed_seconds_since(&self, previous: &GeoFix) -> f64 {
        let elapsed = self.timestamp.signed_duration_since(previous.timestamp);
        match elapsed.num_nanoseconds() {
            Some(nanoseconds) => nanoseconds as f64 / 1e9,
            None => elapsed.num_milliseconds() as f64 / 1000.0, // Beyond ~292 years
        }
    }

    /// The ground speed needed to travel from `previous` to this fix.
    pub fn speed_since(&self, previous: &GeoFix) -> Speed {
        let meters_per_second = calculate_speed(
            previous.location.latitude,
            previous.location.longitude,
            self.location.latitude,
            self.location.longitude,
            self.elapsed_seconds_since(previous),
        );
        Speed::from_meters_per_second(meters_per_second)
    }
}
