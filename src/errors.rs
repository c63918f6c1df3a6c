use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RraStatsError {
    #[error("Could not load configuration file '{}': {reason}", path.display())]
    ConfigurationMissing { path: PathBuf, reason: String },
    #[error("Could not talk to EIS Host {host} HTTP errors GET /api/v1/risks: {status}")]
    Api { host: String, status: u16 },
    #[error("missing percent field for metric: {0}")]
    Schema(String),
}

impl RraStatsError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RraStatsError::ConfigurationMissing { .. } => 3,
            RraStatsError::Api { .. } => 4,
            RraStatsError::Schema(_) => 5,
        }
    }
}

/// Exit status for any error reaching `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<RraStatsError>()
        .map(RraStatsError::exit_code)
        .unwrap_or(1)
}
