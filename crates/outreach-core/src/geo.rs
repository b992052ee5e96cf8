//! Great-circle distance and radius-overlay geometry.
//!
//! The dashboard filters search results by straight-line great-circle
//! distance and draws the search radius as a closed polygon ring. Both
//! use plain spherical math; sub-meter precision is irrelevant at the
//! city scale this tool operates on.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
const METERS_PER_LAT_DEGREE: f64 = 111_320.0;

/// A latitude/longitude pair in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Haversine great-circle distance between two points, in meters.
#[must_use]
pub fn distance_meters(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Whether `point` lies within `radius_meters` of `center`.
#[must_use]
pub fn within_radius(center: Coordinates, point: Coordinates, radius_meters: f64) -> bool {
    distance_meters(center, point) <= radius_meters
}

/// Closed polygon ring approximating a circle of `radius_meters` around
/// `center`, for the map's radius overlay.
///
/// Longitude offsets shrink by `cos(lat)` so the ring keeps its physical
/// shape away from the equator. The first point is repeated at the end
/// so the ring is closed, giving `steps + 1` points.
#[must_use]
pub fn circle_polygon(center: Coordinates, radius_meters: f64, steps: usize) -> Vec<Coordinates> {
    let lat_offset = radius_meters / METERS_PER_LAT_DEGREE;
    let lng_offset = lat_offset / (center.lat * PI / 180.0).cos();

    let mut ring = Vec::with_capacity(steps + 1);
    for i in 0..steps {
        #[allow(clippy::cast_precision_loss)]
        let angle = 2.0 * PI * (i as f64) / (steps as f64);
        ring.push(Coordinates {
            lat: center.lat + lat_offset * angle.sin(),
            lng: center.lng + lng_offset * angle.cos(),
        });
    }
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    const UOFT: Coordinates = Coordinates {
        lat: 43.6630,
        lng: -79.3960,
    };

    #[test]
    fn distance_to_self_is_zero() {
        assert!(distance_meters(UOFT, UOFT) < 1e-6);
    }

    #[test]
    fn distance_is_symmetric() {
        let cn_tower = Coordinates {
            lat: 43.6426,
            lng: -79.3871,
        };
        let ab = distance_meters(UOFT, cn_tower);
        let ba = distance_meters(cn_tower, UOFT);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn known_distance_toronto_downtown() {
        // UofT St. George to the CN Tower: roughly 2.4 km.
        let cn_tower = Coordinates {
            lat: 43.6426,
            lng: -79.3871,
        };
        let d = distance_meters(UOFT, cn_tower);
        assert!((2_000.0..3_000.0).contains(&d), "got {d}");
    }

    #[test]
    fn within_radius_boundary() {
        let near = Coordinates {
            lat: UOFT.lat + 0.001,
            lng: UOFT.lng,
        };
        // ~111 m north.
        assert!(within_radius(UOFT, near, 200.0));
        assert!(!within_radius(UOFT, near, 50.0));
    }

    #[test]
    fn circle_polygon_is_closed() {
        let ring = circle_polygon(UOFT, 5_000.0, 64);
        assert_eq!(ring.len(), 65);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn circle_polygon_stays_near_requested_radius() {
        let ring = circle_polygon(UOFT, 5_000.0, 64);
        for p in &ring {
            let d = distance_meters(UOFT, *p);
            // The meters-per-degree approximation drifts a little; a 3%
            // band is plenty for an overlay.
            assert!((d - 5_000.0).abs() < 150.0, "point at {d} m");
        }
    }

    #[test]
    fn circle_polygon_corrects_for_latitude() {
        let ring = circle_polygon(UOFT, 5_000.0, 4);
        // With the cos(lat) correction the east-west extent in degrees is
        // wider than the north-south extent.
        let lat_span = ring
            .iter()
            .map(|p| p.lat)
            .fold(f64::NEG_INFINITY, f64::max)
            - ring.iter().map(|p| p.lat).fold(f64::INFINITY, f64::min);
        let lng_span = ring
            .iter()
            .map(|p| p.lng)
            .fold(f64::NEG_INFINITY, f64::max)
            - ring.iter().map(|p| p.lng).fold(f64::INFINITY, f64::min);
        assert!(lng_span > lat_span);
    }
}
