//! Single-shot loading of a catalog snapshot, over HTTP or from disk.
//!
//! A load either yields the complete record list or an error; there is no
//! retry and no partial result.

use reqwest::Client;
use std::path::Path;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::config::CatalogConfig;
use super::record::MovieRecord;

/// Longest slice of an error body kept in [`CatalogError::Http`].
const MAX_ERROR_BODY: usize = 512;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("network: {0}")]
    Net(#[from] reqwest::Error),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config: {0}")]
    Config(String),
}

/// Decode a JSON array of movie records.
pub fn decode_records(body: &[u8]) -> Result<Vec<MovieRecord>, CatalogError> {
    Ok(serde_json::from_slice(body)?)
}

/// Read a snapshot previously saved from the backend.
pub fn load_snapshot_file(path: &Path) -> Result<Vec<MovieRecord>, CatalogError> {
    let body = std::fs::read(path)?;
    let records = decode_records(&body)?;
    info!(path = %path.display(), count = records.len(), "catalog snapshot loaded");
    Ok(records)
}

#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: Client,
    endpoint: Url,
}

impl CatalogClient {
    pub fn new(cfg: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(concat!("ott-catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: cfg.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// GET the endpoint once and decode the body.
    pub async fn fetch(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        let started = Instant::now();
        debug!(endpoint = %self.endpoint, "fetching catalog snapshot");

        let resp = self.http.get(self.endpoint.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body: String = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(MAX_ERROR_BODY)
                .collect();
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "catalog fetch rejected");
            return Err(CatalogError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.bytes().await?;
        let records = decode_records(&body).inspect_err(|err| {
            warn!(endpoint = %self.endpoint, error = %err, "catalog payload is not a record array");
        })?;
        info!(
            endpoint = %self.endpoint,
            count = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalog snapshot fetched"
        );
        Ok(records)
    }
}
