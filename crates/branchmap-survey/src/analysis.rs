//! Proximity analytics over the surveyed branch network.

use branchmap_places::LatLng;
use geo::{GeodesicDistance, Point};

/// Radius for the "nearby branches" count, kilometers.
pub const NEARBY_RADIUS_KM: f64 = 2.0;

/// Ellipsoidal geodesic distance between two coordinates, in kilometers.
#[must_use]
pub fn geodesic_km(a: LatLng, b: LatLng) -> f64 {
    let pa = Point::new(a.lng, a.lat);
    let pb = Point::new(b.lng, b.lat);
    pa.geodesic_distance(&pb) / 1000.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityStats {
    /// Distance to the closest other branch, rounded to 2 decimals.
    /// `0.0` when there is no other branch to measure against.
    pub nearest_km: f64,
    /// Other branches within [`NEARBY_RADIUS_KM`] (inclusive).
    pub nearby_within_2km: u32,
}

/// Nearest-neighbor distance and nearby count for one branch against the
/// whole candidate set. `own_index` marks the branch's own slot in `all` so
/// it never measures against itself.
#[must_use]
pub fn proximity_stats(own: LatLng, own_index: usize, all: &[LatLng]) -> ProximityStats {
    let mut nearest = f64::INFINITY;
    let mut nearby = 0u32;

    for (i, other) in all.iter().enumerate() {
        if i == own_index {
            continue;
        }
        let d = geodesic_km(own, *other);
        if d < nearest {
            nearest = d;
        }
        if d <= NEARBY_RADIUS_KM {
            nearby += 1;
        }
    }

    let nearest_km = if nearest.is_finite() {
        (nearest * 100.0).round() / 100.0
    } else {
        0.0
    };

    ProximityStats {
        nearest_km,
        nearby_within_2km: nearby,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANGKOK: LatLng = LatLng { lat: 13.7563, lng: 100.5018 };

    #[test]
    fn geodesic_distance_is_symmetric() {
        let chiang_mai = LatLng { lat: 18.7883, lng: 98.9853 };
        let ab = geodesic_km(BANGKOK, chiang_mai);
        let ba = geodesic_km(chiang_mai, BANGKOK);
        assert!((ab - ba).abs() < 1e-9);
        // Bangkok to Chiang Mai is roughly 580 km as the crow flies.
        assert!(ab > 550.0 && ab < 620.0, "got {ab}");
    }

    #[test]
    fn zero_distance_for_identical_points() {
        assert!(geodesic_km(BANGKOK, BANGKOK).abs() < 1e-9);
    }

    #[test]
    fn nearest_and_nearby_for_close_pair() {
        // ~1.8 km due north of Bangkok reference point.
        let near = LatLng { lat: BANGKOK.lat + 0.016_278, lng: BANGKOK.lng };
        let far = LatLng { lat: 18.7883, lng: 98.9853 };
        let all = vec![BANGKOK, near, far];

        let stats = proximity_stats(BANGKOK, 0, &all);
        assert!((stats.nearest_km - 1.8).abs() <= 0.05, "got {}", stats.nearest_km);
        assert_eq!(stats.nearby_within_2km, 1);

        let stats = proximity_stats(near, 1, &all);
        assert_eq!(stats.nearby_within_2km, 1);
    }

    #[test]
    fn nearest_is_rounded_to_two_decimals() {
        let near = LatLng { lat: BANGKOK.lat + 0.016_278, lng: BANGKOK.lng };
        let stats = proximity_stats(BANGKOK, 0, &[BANGKOK, near]);
        let scaled = stats.nearest_km * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn singleton_branch_has_zero_stats() {
        let stats = proximity_stats(BANGKOK, 0, &[BANGKOK]);
        assert!((stats.nearest_km - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.nearby_within_2km, 0);
    }

    #[test]
    fn own_position_is_excluded() {
        // Two branches at the exact same coordinates: each still sees the
        // other at distance zero, but never itself.
        let all = vec![BANGKOK, BANGKOK];
        let stats = proximity_stats(BANGKOK, 0, &all);
        assert!((stats.nearest_km - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.nearby_within_2km, 1);
    }
}
