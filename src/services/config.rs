use crate::domain::models::Config;
use crate::errors::RraStatsError;
use std::path::Path;

/// Reads the Hjson config. Any failure maps to `ConfigurationMissing`.
pub fn load_config(path: &Path) -> Result<Config, RraStatsError> {
    let missing = |reason: String| RraStatsError::ConfigurationMissing {
        path: path.to_path_buf(),
        reason,
    };
    let raw = std::fs::read_to_string(path).map_err(|e| missing(e.to_string()))?;
    let config: Config = deser_hjson::from_str(&raw).map_err(|e| missing(e.to_string()))?;
    tracing::debug!(host = %config.host, x509cert = ?config.x509cert, "configuration loaded");
    Ok(config)
}
