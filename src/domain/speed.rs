use crate::extensions::speed_ext::SpeedConversions;
use std::fmt::Display;

/// A ground speed in meters per second.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Speed(f64);

impl Speed {
    pub fn from_meters_per_second(value: f64) -> Self {
        Speed(value)
    }

    pub fn meters_per_second(&self) -> f64 {
        self.0
    }

    pub fn kilometers_per_hour(&self) -> f64 {
        self.0.mps_to_kmh()
    }

    pub fn miles_per_hour(&self) -> f64 {
        self.0.mps_to_mph()
    }
}

impl Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} m/s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_to_road_units() {
        let speed = Speed::from_meters_per_second(10.0);

        assert_eq!(speed.meters_per_second(), 10.0);
        assert!((speed.kilometers_per_hour() - 36.0).abs() < 1e-9);
        assert!((speed.miles_per_hour() - 22.3694).abs() < 1e-9);
    }

    #[test]
    fn displays_meters_per_second_with_two_decimals() {
        assert_eq!(Speed::from_meters_per_second(3.14159).to_string(), "3.14 m/s");
    }
}
