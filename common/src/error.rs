use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or validating contract parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read contract file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid contract parameters in {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize contract parameters")]
    Serialize(#[from] toml::ser::Error),

    #[error("a contract needs at least one phase (phase 0 is the down payment)")]
    NoPhases,

    #[error("phase at position {position} has index {found}, expected {position}")]
    PhaseIndex { position: usize, found: usize },

    #[error("the sum of all phase costs does not fit in 64 bits")]
    CostOverflow,
}
