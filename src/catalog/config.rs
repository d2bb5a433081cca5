use url::Url;

use super::source::CatalogError;
use crate::util::env::{env_opt, env_parse};

pub const DEFAULT_ENDPOINT: &str = "https://ott-release-backend.onrender.com/movies";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Where the snapshot comes from and how the listing is paged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub endpoint: Url,
    pub timeout_secs: u64,
    pub page_size: usize,
}

impl CatalogConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Read `OTT_CATALOG_URL`, `OTT_HTTP_TIMEOUT_SECS` and `OTT_PAGE_SIZE`.
    pub fn from_env() -> Result<Self, CatalogError> {
        let raw = env_opt("OTT_CATALOG_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Ok(Self::with_endpoint_from_env(parse_endpoint(&raw)?))
    }

    /// Explicit endpoint; timeout and page size still come from the environment.
    pub fn with_endpoint_from_env(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout_secs: timeout_from_env(),
            page_size: page_size_from_env(),
        }
    }
}

/// `OTT_HTTP_TIMEOUT_SECS`, or the default.
pub fn timeout_from_env() -> u64 {
    env_parse("OTT_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
}

/// `OTT_PAGE_SIZE`, or the default; never zero.
pub fn page_size_from_env() -> usize {
    env_parse("OTT_PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1)
}

/// Parse an http(s) endpoint URL.
pub fn parse_endpoint(raw: &str) -> Result<Url, CatalogError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| CatalogError::Config(format!("invalid catalog url {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::Config(format!(
            "unsupported scheme {other:?} in catalog url"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_endpoints() {
        let url = parse_endpoint(" http://localhost:8080/movies ").unwrap();
        assert_eq!(url.path(), "/movies");
        assert!(parse_endpoint(DEFAULT_ENDPOINT).is_ok());
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(matches!(
            parse_endpoint("ftp://example.com/movies"),
            Err(CatalogError::Config(_))
        ));
        assert!(matches!(parse_endpoint("not a url"), Err(CatalogError::Config(_))));
    }

    #[test]
    fn new_uses_defaults() {
        let cfg = CatalogConfig::new(parse_endpoint(DEFAULT_ENDPOINT).unwrap());
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cfg.page_size, DEFAULT_PAGE_SIZE);
    }
}
