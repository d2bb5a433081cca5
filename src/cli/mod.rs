pub mod list;
pub mod platforms;
pub mod table;

use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::PathBuf;
use tracing::debug;

use crate::catalog::config::parse_endpoint;
use crate::catalog::{load_snapshot_file, CatalogClient, CatalogConfig, MovieRecord};
use crate::normalization::platform::tokenize;

/// Where a command reads its snapshot from.
#[derive(Debug, Clone)]
pub enum SnapshotSource {
    Remote(CatalogConfig),
    File(PathBuf),
}

impl SnapshotSource {
    pub async fn load(&self) -> Result<Vec<MovieRecord>> {
        match self {
            SnapshotSource::Remote(cfg) => {
                let client = CatalogClient::new(cfg)?;
                client
                    .fetch()
                    .await
                    .with_context(|| format!("failed to load movies from {}", client.endpoint()))
            }
            SnapshotSource::File(path) => load_snapshot_file(path)
                .with_context(|| format!("failed to read snapshot {}", path.display())),
        }
    }
}

/// Source flags given on the command line. Each one set here wins over the
/// environment; `OTT_CATALOG_URL` is only consulted when neither `file` nor
/// `url` is given.
#[derive(Debug, Clone, Default)]
pub struct SourceOverrides {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl SourceOverrides {
    pub fn resolve(self) -> Result<SnapshotSource> {
        if let Some(path) = self.file {
            return Ok(SnapshotSource::File(path));
        }
        let mut cfg = match self.url {
            Some(raw) => CatalogConfig::with_endpoint_from_env(parse_endpoint(&raw)?),
            None => CatalogConfig::from_env()?,
        };
        if let Some(secs) = self.timeout_secs {
            cfg.timeout_secs = secs;
        }
        debug!(endpoint = %cfg.endpoint, timeout_secs = cfg.timeout_secs, "resolved catalog source");
        Ok(SnapshotSource::Remote(cfg))
    }
}

/// One line per raw field: `"Jio Cinema and Zee5" -> [Hotstar, ZEE5]`.
pub fn render_normalized(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| format!("{field:?} -> [{}]\n", tokenize(Some(field.as_str())).iter().join(", ")))
        .collect()
}
