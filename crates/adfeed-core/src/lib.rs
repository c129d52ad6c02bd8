//! Shared types and configuration for the adfeed workspace.

pub mod app_config;
pub mod config;
pub mod links;
pub mod products;
pub mod rules;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use links::LinkTemplates;
pub use products::{ProductRecord, AVAILABILITY_IN_STOCK, PRICE_CURRENCY_SUFFIX};
pub use rules::FeedRules;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
