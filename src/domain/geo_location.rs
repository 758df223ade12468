use thiserror::Error;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64, // In meters
}

impl GeoLocation {
    /// Creates a location at sea level, rejecting coordinates outside of [-90, 90] and [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoLocationError> {
        Self::with_altitude(latitude, longitude, 0.0)
    }

    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Result<Self, GeoLocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoLocationError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoLocationError::InvalidLongitude(longitude));
        }

        Ok(GeoLocation {
            latitude,
            longitude,
            altitude,
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GeoLocationError {
    #[error("invalid location latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid location longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(34.0522, -118.2437)]
    fn accepts_coordinates_within_range(#[case] latitude: f64, #[case] longitude: f64) {
        let location = GeoLocation::new(latitude, longitude).unwrap();
        assert_eq!(location.latitude, latitude);
        assert_eq!(location.longitude, longitude);
        assert_eq!(location.altitude, 0.0);
    }

    #[rstest]
    #[case(90.1, 0.0, GeoLocationError::InvalidLatitude(90.1))]
    #[case(-91.0, 0.0, GeoLocationError::InvalidLatitude(-91.0))]
    #[case(0.0, 180.5, GeoLocationError::InvalidLongitude(180.5))]
    #[case(0.0, -200.0, GeoLocationError::InvalidLongitude(-200.0))]
    fn rejects_coordinates_out_of_range(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: GeoLocationError) {
        assert_eq!(GeoLocation::new(latitude, longitude), Err(expected));
    }

    #[test]
    fn rejects_nan() {
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }
}
