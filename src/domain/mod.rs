mod geo_fix;
mod geo_location;
mod speed;
mod speed_state;

pub use geo_fix::GeoFix;
pub use geo_location::{GeoLocation, GeoLocationError};
pub use speed::Speed;
pub use speed_state::{SpeedReading, SpeedState};
