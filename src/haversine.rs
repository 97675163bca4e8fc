//! Haversine great-circle distance.
//!
//! Ignores roads and elevation; good enough to rank vehicles a few hundred
//! meters from a pedestrian.

use crate::model::GeoPoint;
use crate::traits::DistanceMetric;

/// Degrees to radians.
const DEG_TO_RAD: f64 = 0.017453292519943295;

/// Earth diameter in kilometers (2 x 6371).
const EARTH_DIAMETER_KM: f64 = 12742.0;

/// Haversine distance metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        haversine_km(from, to)
    }
}

/// Great-circle distance between two points in kilometers.
///
/// The haversine term is clamped to `[0, 1]` so rounding near identical or
/// antipodal points can never push `sqrt`/`asin` out of their domain.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let GeoPoint { lat: lat1, lon: lon1 } = from;
    let GeoPoint { lat: lat2, lon: lon2 } = to;

    let hav = 0.5 - ((lat2 - lat1) * DEG_TO_RAD).cos() / 2.0
        + (lat1 * DEG_TO_RAD).cos()
            * (lat2 * DEG_TO_RAD).cos()
            * (1.0 - ((lon2 - lon1) * DEG_TO_RAD).cos())
            / 2.0;

    EARTH_DIAMETER_KM * hav.clamp(0.0, 1.0).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let p = GeoPoint::new(43.7384, 7.4246);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Monaco (43.7384, 7.4246) to Nice (43.7102, 7.2620), ~13.4 km
        let dist = haversine_km(GeoPoint::new(43.7384, 7.4246), GeoPoint::new(43.7102, 7.2620));
        assert!(dist > 12.5 && dist < 14.5, "Monaco to Nice should be ~13km, got {}", dist);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = GeoPoint::new(36.17, -115.14);
        let b = GeoPoint::new(34.05, -118.24);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn test_antipodal_points_stay_finite() {
        let dist = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!(dist.is_finite());
        // Half the circumference.
        assert!((dist - EARTH_DIAMETER_KM * std::f64::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_poles() {
        let north = GeoPoint::new(90.0, 0.0);
        let north_other_lon = GeoPoint::new(90.0, 123.0);
        let south = GeoPoint::new(-90.0, 45.0);

        assert!(haversine_km(north, north_other_lon).abs() < 1e-6);
        let pole_to_pole = haversine_km(north, south);
        assert!(pole_to_pole.is_finite());
        assert!((pole_to_pole - 20015.086).abs() < 0.01, "got {}", pole_to_pole);
    }

    #[test]
    fn test_metric_trait_delegates() {
        let a = GeoPoint::new(43.7390, 7.4250);
        let b = GeoPoint::new(43.7400, 7.4270);
        assert_eq!(Haversine.distance_km(a, b), haversine_km(a, b));
    }
}
