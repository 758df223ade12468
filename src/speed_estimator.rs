/// Mean radius of the Earth in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the great-circle distance in meters between two points given in decimal degrees.
///
/// Coordinates are not range checked, out of range or NaN input yields a meaningless result.
pub fn haversine_distance(latitude1: f64, longitude1: f64, latitude2: f64, longitude2: f64) -> f64 {
    let lat1 = latitude1.to_radians();
    let lon1 = longitude1.to_radians();
    let lat2 = latitude2.to_radians();
    let lon2 = longitude2.to_radians();

    let delta_lat = lat2 - lat1;
    let delta_lon = lon2 - lon1;

    let a = (delta_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Returns the ground speed in meters per second between two points that are `time_difference` seconds apart.
///
/// A zero time difference yields a speed of 0.0.
pub fn calculate_speed(latitude1: f64, longitude1: f64, latitude2: f64, longitude2: f64, time_difference: f64) -> f64 {
    if time_difference == 0.0 {
        return 0.0;
    }

    haversine_distance(latitude1, longitude1, latitude2, longitude2) / time_difference
}
