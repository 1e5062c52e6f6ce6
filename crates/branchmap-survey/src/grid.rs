//! Geographic grid generation for systematic territory sweeps.
//!
//! Tiles a bounding box into search centers at a configurable spacing. The
//! longitude step is sized from one fixed reference latitude for the whole
//! territory rather than per row. Changing that would shift tile counts and
//! coverage, so it stays fixed.

const KM_PER_LAT_DEGREE: f64 = 111.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone)]
pub struct GridConfig {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
    /// Physical distance between adjacent grid points in kilometers.
    /// Must be positive; the generator trusts the caller to have validated
    /// this (profile loading and the CLI both do).
    pub spacing_km: f64,
    /// Fixed reference latitude for the longitude step, degrees.
    pub ref_latitude_deg: f64,
}

impl GridConfig {
    /// Thailand at the given spacing. 16 km → ~5900 tiles.
    #[must_use]
    pub fn thailand(spacing_km: f64) -> Self {
        Self {
            lat_min: 5.6,
            lat_max: 20.5,
            lng_min: 97.3,
            lng_max: 105.7,
            spacing_km,
            ref_latitude_deg: 13.0,
        }
    }
}

/// Generate grid search centers across the configured bounds.
///
/// Latitude is the outer loop, longitude the inner; both step inclusively
/// (`<=` the max bound), so the last row/column may sit on the bound itself.
#[must_use]
pub fn generate_grid(config: &GridConfig) -> Vec<GridPoint> {
    let lat_step = config.spacing_km / KM_PER_LAT_DEGREE;
    let lng_step =
        config.spacing_km / (KM_PER_LAT_DEGREE * config.ref_latitude_deg.to_radians().cos());

    let mut points = Vec::new();
    let mut lat = config.lat_min;
    while lat <= config.lat_max {
        let mut lng = config.lng_min;
        while lng <= config.lng_max {
            points.push(GridPoint { lat, lng });
            lng += lng_step;
        }
        lat += lat_step;
    }
    points
}

/// Search radius in meters for one tile: `spacing * 1000 / √2`, so adjacent
/// circular searches fully cover the square tile between their centers.
#[must_use]
pub fn search_radius_m(spacing_km: f64) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (spacing_km * 1000.0 / std::f64::consts::SQRT_2) as u32
    }
}
