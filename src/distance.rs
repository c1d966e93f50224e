//! Distance From Home
//!
//! Great-circle distance between the bus and the home reference point,
//! bucketed into a spoken phrase.

/// Earth radius in miles
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine great-circle distance in miles
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlam = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlam / 2.0).sin().powi(2);
    EARTH_RADIUS_MILES * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Bucket a distance into the spoken "from home" phrase
pub fn distance_phrase(miles: f64) -> String {
    if miles < 0.1 {
        "less than a tenth of a mile from home".to_string()
    } else if miles < 1.0 {
        // Nearest tenth; a whole-number result renders without a decimal
        let rounded = (miles * 10.0).round() / 10.0;
        format!("{} miles from home", rounded)
    } else {
        format!("{:.1} miles from home", miles)
    }
}
