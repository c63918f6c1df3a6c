use crate::domain::models::{Config, RisksDocument, X509Cert};
use crate::errors::RraStatsError;
use crate::services::storage::{parse_risks, save_raw_response};
use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::path::Path;
use std::time::Duration;

const RISKS_PATH: &str = "/api/v1/risks";
const API_KEY_HEADER: &str = "SERVICEAPIKEY";
const TIMEOUT_MS: u64 = 30_000;

pub fn risks_url(host: &str) -> String {
    format!("{}{}", host.trim_end_matches('/'), RISKS_PATH)
}

fn build_client(x509cert: &X509Cert) -> anyhow::Result<Client> {
    let builder = Client::builder().timeout(Duration::from_millis(TIMEOUT_MS));
    let builder = match x509cert {
        X509Cert::Verify(true) => builder,
        X509Cert::Verify(false) => {
            tracing::warn!("TLS certificate verification disabled by x509cert: false");
            builder.danger_accept_invalid_certs(true)
        }
        X509Cert::Bundle(path) => {
            let pem = std::fs::read(path)
                .with_context(|| format!("reading CA bundle {}", path.display()))?;
            let certs = reqwest::Certificate::from_pem_bundle(&pem)?;
            if certs.is_empty() {
                anyhow::bail!("no certificates found in CA bundle {}", path.display());
            }
            tracing::debug!(bundle = %path.display(), certs = certs.len(), "using CA bundle");
            certs
                .into_iter()
                .fold(builder.tls_built_in_root_certs(false), |b, c| {
                    b.add_root_certificate(c)
                })
        }
    };
    Ok(builder.build()?)
}

/// One GET against EIS. The raw body hits `raw_out` before the status is checked.
pub fn fetch_risks(config: &Config, raw_out: &Path) -> anyhow::Result<RisksDocument> {
    let url = risks_url(&config.host);
    let client = build_client(&config.x509cert)?;
    tracing::info!(%url, "fetching risks from EIS");
    let resp = client
        .get(&url)
        .header(API_KEY_HEADER, &config.apikey)
        .send()?;
    let status = resp.status();
    let body = resp.text()?;

    save_raw_response(raw_out, &body)?;

    if status != StatusCode::OK {
        return Err(RraStatsError::Api {
            host: config.host.clone(),
            status: status.as_u16(),
        }
        .into());
    }
    parse_risks(&body)
}

#[cfg(test)]
mod tests {
    use super::{build_client, risks_url};
    use crate::domain::models::X509Cert;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture_bundle() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/eis-ca.pem")
    }

    #[test]
    fn client_builds_for_each_verify_flag() {
        assert!(build_client(&X509Cert::Verify(true)).is_ok());
        assert!(build_client(&X509Cert::Verify(false)).is_ok());
    }

    #[test]
    fn client_builds_from_pem_bundle() {
        assert!(build_client(&X509Cert::Bundle(fixture_bundle())).is_ok());
    }

    #[test]
    fn nonexistent_bundle_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let missing = tmp.path().join("missing.pem");
        assert!(build_client(&X509Cert::Bundle(missing)).is_err());
    }

    #[test]
    fn bundle_without_certificates_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let junk = tmp.path().join("junk.pem");
        fs::write(&junk, "not a certificate\n").expect("write junk bundle");
        let err = build_client(&X509Cert::Bundle(junk)).expect_err("empty bundle");
        assert!(err.to_string().contains("no certificates found"));
    }

    #[test]
    fn risks_url_tolerates_trailing_slash() {
        assert_eq!(
            risks_url("https://eis.example.net/"),
            "https://eis.example.net/api/v1/risks"
        );
        assert_eq!(
            risks_url("https://eis.example.net"),
            "https://eis.example.net/api/v1/risks"
        );
    }
}
