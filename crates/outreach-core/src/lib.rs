//! Shared domain types for the outreach workspace.
//!
//! Everything that crosses a crate boundary lives here: the business
//! display model, search parameters, hiring lifecycle states, and the
//! geographic and configuration helpers the clients and the dashboard
//! share.

pub mod app_config;
pub mod config;
pub mod geo;

mod business;

pub use app_config::AppConfig;
pub use business::{
    Business, BusinessKey, EmploymentType, HiringClassification, HiringStatus, SearchParams,
    UserLocation,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::Coordinates;

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    /// An environment variable was set to a value that failed to parse.
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
