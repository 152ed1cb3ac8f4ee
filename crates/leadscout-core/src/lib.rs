pub mod app_config;
pub mod config;
pub mod qualification;
pub mod types;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use qualification::{
    load_qualification, ClassifierPolicy, QualificationPolicy, ScoreWeights, SignalPolicy,
};
pub use types::{
    BusinessRecord, BusinessStatus, EnrichedRecord, OwnershipLabel, QualityScore,
    ScoreContribution, WebSignals,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read qualification policy at {path}: {source}")]
    PolicyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse qualification policy: {0}")]
    PolicyFileParse(#[from] serde_yaml::Error),

    #[error("invalid qualification policy: {0}")]
    Validation(String),
}
