//! Core seams of the recommender.
//!
//! Distance is pluggable so hosts can swap in another great-circle
//! approximation; anything with a position can feed the nearest finder.

use crate::model::GeoPoint;

/// Computes the distance between two points, in kilometers.
///
/// Implementations must be symmetric and return zero for identical points.
pub trait DistanceMetric {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64;
}

/// Anything placed at a single point on the map.
pub trait Located {
    fn position(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    fn position(&self) -> GeoPoint {
        *self
    }
}
