//! Errors raised while loading or validating configuration.

use thiserror::Error;

/// Configuration could not be loaded or is not usable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration is not valid JSON for [`super::params::Params`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is outside the range the simulation supports.
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}
