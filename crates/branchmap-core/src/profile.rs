use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Geographic bounding box for the survey territory, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

/// A survey profile: which brand to enumerate, over which territory, and in
/// which language the places API should answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyProfile {
    pub brand: String,
    /// Keyword passed verbatim to the nearby-search endpoint.
    pub search_keyword: String,
    pub language: String,
    /// Substrings that must appear (case-insensitively) in a hit's name for
    /// it to count as a branch of the brand. Multiple entries cover multiple
    /// scripts of the same brand name.
    pub brand_tokens: Vec<String>,
    pub bounds: Bounds,
    /// Fixed reference latitude for sizing the longitude grid step. One
    /// constant for the whole territory — a deliberate approximation.
    pub ref_latitude_deg: f64,
    #[serde(default = "default_spacing_km")]
    pub grid_spacing_km: f64,
}

fn default_spacing_km() -> f64 {
    16.0
}

impl SurveyProfile {
    /// The built-in Cafe Amazon / Thailand profile, matching
    /// `config/profile.yaml`.
    #[must_use]
    pub fn cafe_amazon_thailand() -> Self {
        Self {
            brand: "Cafe Amazon".to_string(),
            search_keyword: "Cafe Amazon คาเฟ่ อเมซอน".to_string(),
            language: "th".to_string(),
            brand_tokens: vec!["amazon".to_string(), "อเมซอน".to_string()],
            bounds: Bounds {
                lat_min: 5.6,
                lat_max: 20.5,
                lng_min: 97.3,
                lng_max: 105.7,
            },
            ref_latitude_deg: 13.0,
            grid_spacing_km: 16.0,
        }
    }
}

/// Load and validate a survey profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty brand tokens, inverted bounds, non-positive spacing).
pub fn load_profile(path: &Path) -> Result<SurveyProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let profile: SurveyProfile = serde_yaml::from_str(&content)?;
    validate_profile(&profile)?;

    Ok(profile)
}

fn validate_profile(profile: &SurveyProfile) -> Result<(), ConfigError> {
    if profile.brand_tokens.is_empty() {
        return Err(ConfigError::Validation(
            "brand_tokens must contain at least one token".to_string(),
        ));
    }
    if profile.brand_tokens.iter().any(|t| t.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "brand_tokens must not contain empty tokens".to_string(),
        ));
    }
    if profile.bounds.lat_min >= profile.bounds.lat_max {
        return Err(ConfigError::Validation(format!(
            "lat_min {} must be below lat_max {}",
            profile.bounds.lat_min, profile.bounds.lat_max
        )));
    }
    if profile.bounds.lng_min >= profile.bounds.lng_max {
        return Err(ConfigError::Validation(format!(
            "lng_min {} must be below lng_max {}",
            profile.bounds.lng_min, profile.bounds.lng_max
        )));
    }
    // Non-positive spacing would make the grid generator loop forever; the
    // generator trusts its input, so the check lives here.
    if profile.grid_spacing_km <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "grid_spacing_km must be positive, got {}",
            profile.grid_spacing_km
        )));
    }
    Ok(())
}
