use crate::domain::GeoLocation;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            #[serde(default)]
            altitude_m: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        GeoLocation::with_altitude(inner.latitude, inner.longitude, inner.altitude_m).map_err(D::Error::custom)
    }
}
