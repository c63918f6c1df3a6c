use crate::domain::models::RisksDocument;
use sha2::{Digest, Sha256};
use std::path::Path;

pub fn body_digest(body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    hex::encode(hasher.finalize())
}

/// Persists the EIS body verbatim, whatever the response status was.
pub fn save_raw_response(path: &Path, body: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, body)?;
    tracing::info!(
        path = %path.display(),
        bytes = body.len(),
        sha256 = %body_digest(body),
        "raw EIS response saved"
    );
    Ok(())
}

pub fn parse_risks(body: &str) -> anyhow::Result<RisksDocument> {
    Ok(serde_json::from_str(body)?)
}

pub fn load_raw_response(path: &Path) -> anyhow::Result<RisksDocument> {
    let raw = std::fs::read_to_string(path)?;
    parse_risks(&raw)
}
