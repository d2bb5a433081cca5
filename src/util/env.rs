//! Environment helpers: centralized dotenv loading and ergonomic getters.
//! Call `init_env()` once early in each binary (or rely on lazy Once).
use std::str::FromStr;
use std::sync::Once;
use tracing::warn;

static INIT: Once = Once::new();

/// Load `.env` from the working directory, falling back to the crate root.
/// Safe to call many times.
pub fn init_env() {
    INIT.call_once(|| {
        if dotenv::dotenv().is_ok() {
            return;
        }
        let candidate = format!("{}/.env", env!("CARGO_MANIFEST_DIR"));
        let _ = dotenv::from_filename(candidate);
    });
}

/// Get optional env var (None if unset or empty).
pub fn env_opt(key: &str) -> Option<String> {
    init_env();
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => None,
    }
}

/// Get parsed value with default fallback; unparsable values are logged and ignored.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match env_opt(key) {
        Some(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                warn!(target = "env", key, value = %raw, "unparsable value; using default");
                default
            }
        },
        None => default,
    }
}

/// Boolean flag; accepts 1/true/on/yes (case-insensitive) as true.
pub fn env_flag(key: &str, default: bool) -> bool {
    match env_opt(key) {
        Some(raw) => matches!(
            raw.to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        ),
        None => default,
    }
}
