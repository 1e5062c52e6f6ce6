//! Configuration for the branchmap survey pipeline.
//!
//! Two layers: [`AppConfig`] holds process-level settings sourced from
//! environment variables (API credential, timeouts, delays), and
//! [`SurveyProfile`] describes the survey itself (brand, territory, language)
//! loaded from a YAML file.

pub mod app_config;
pub mod config;
pub mod profile;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use profile::{load_profile, Bounds, SurveyProfile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read profile file {path}: {source}")]
    ProfileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile file: {0}")]
    ProfileParse(#[from] serde_yaml::Error),

    #[error("profile validation failed: {0}")]
    Validation(String),
}
