//! Platform vocabulary and record filtering.
//!
//! Both operations are recomputed from the current snapshot on every call;
//! nothing here caches or mutates its inputs.

use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::record::MovieRecord;
use crate::normalization::platform::tokenize;

/// Sentinel that leads every vocabulary and selects every record.
pub const ALL_PLATFORMS: &str = "All";

/// Platform filter choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum PlatformSelection {
    #[default]
    All,
    Only(String),
}

impl PlatformSelection {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_PLATFORMS {
            PlatformSelection::All
        } else {
            PlatformSelection::Only(raw.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, PlatformSelection::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlatformSelection::All => ALL_PLATFORMS,
            PlatformSelection::Only(name) => name,
        }
    }

    fn admits(&self, record: &MovieRecord) -> bool {
        match self {
            PlatformSelection::All => true,
            PlatformSelection::Only(wanted) => lists_platform(record.platform.as_deref(), wanted),
        }
    }
}

impl From<&str> for PlatformSelection {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for PlatformSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canonical platform together with the number of tokens that mapped to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformCount {
    pub name: String,
    pub count: usize,
}

/// Count canonical platform occurrences across `records`, ranked by count
/// descending and then by name ascending.
///
/// A raw token that normalizes to the sentinel itself is folded into it and
/// not listed.
pub fn platform_counts(records: &[MovieRecord]) -> Vec<PlatformCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        for name in record.platforms() {
            *counts.entry(name).or_insert(0) += 1;
        }
    }
    counts.remove(ALL_PLATFORMS);

    counts
        .into_iter()
        .map(|(name, count)| PlatformCount { name, count })
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)))
        .collect()
}

/// Ranked platform vocabulary, always starting with [`ALL_PLATFORMS`].
pub fn build_vocabulary(records: &[MovieRecord]) -> Vec<String> {
    std::iter::once(ALL_PLATFORMS.to_string())
        .chain(platform_counts(records).into_iter().map(|entry| entry.name))
        .collect()
}

/// Records whose title contains `search_term` (case-insensitive) and that are
/// listed on `selected`. Input order is preserved.
pub fn filter<'a>(
    records: &'a [MovieRecord],
    search_term: &str,
    selected: &PlatformSelection,
) -> Vec<&'a MovieRecord> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| title_matches(record, &needle))
        .filter(|record| selected.admits(record))
        .collect()
}

fn title_matches(record: &MovieRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    match record.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_lowercase().contains(needle),
        _ => false,
    }
}

/// Whether a raw platform field lists `platform` after normalization.
pub fn lists_platform(field: Option<&str>, platform: &str) -> bool {
    tokenize(field).iter().any(|p| p == platform)
}
