// ==========================================
// Childcare Occupancy Planner - Config Errors
// ==========================================
// Responsibility: facility snapshot loading failures
// ==========================================

use crate::domain::room::CatalogError;
use thiserror::Error;

/// Config-layer error type.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read facility snapshot '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid facility snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid room configuration: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result alias for the config layer.
pub type ConfigResult<T> = Result<T, ConfigError>;
