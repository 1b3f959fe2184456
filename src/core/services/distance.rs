//! Great-circle distance between coordinates
//!
//! Unknown positions are treated as zero distance. A market without
//! coordinates therefore carries no travel cost and always falls inside any
//! search radius, which can favour it in rankings. Integrators should make
//! sure market positions are recorded.

use crate::core::models::{Coordinate, Market};

/// Mean Earth radius in km
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in km between two optional coordinates
///
/// Returns `0.0` when either side is missing or `(0, 0)`, and never NaN.
#[must_use]
pub fn distance_km(a: Option<Coordinate>, b: Option<Coordinate>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    if a.is_unset() || b.is_unset() {
        return 0.0;
    }

    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let cos_product = a.latitude.to_radians().cos() * b.latitude.to_radians().cos();
    let h = cos_product.mul_add((d_lng / 2.0).sin().powi(2), (d_lat / 2.0).sin().powi(2));
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().atan2((1.0 - h).clamp(0.0, 1.0).sqrt());
    let km = EARTH_RADIUS_KM * c;

    if km.is_finite() { km } else { 0.0 }
}

/// Keep markets at most `radius_km` from `origin` (inclusive)
#[must_use]
pub fn markets_within_radius(
    markets: &[Market],
    origin: Coordinate,
    radius_km: f64,
) -> Vec<Market> {
    markets
        .iter()
        .filter(|market| distance_km(Some(origin), market.location()) <= radius_km)
        .cloned()
        .collect()
}
