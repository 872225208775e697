// core/src/geo.rs
// Storsirkel-geometri for GPS-punkter.

/// Jordradius i miles (haversine).
pub const EARTH_RADIUS_MI: f64 = 3958.8;

/// Haversine-avstand mellom to lat/lng-punkter. Input i grader, output i miles.
pub fn haversine_mi(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MI * c
}
