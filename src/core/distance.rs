/// Earth's radius in miles
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Calculate the great-circle distance between two points in miles using the
/// spherical law of cosines
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in miles
#[inline]
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let arg = lat1_rad.sin() * lat2_rad.sin()
        + lat1_rad.cos() * lat2_rad.cos() * delta_lon.cos();

    // Floating-point error can push the argument marginally outside [-1, 1]
    // when the two points coincide; acos would return NaN without the clamp.
    EARTH_RADIUS_MILES * arg.clamp(-1.0, 1.0).acos()
}
