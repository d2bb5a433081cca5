use anyhow::Result;
use tracing::info;

use super::SnapshotSource;
use crate::catalog::{platform_counts, MovieRecord, ALL_PLATFORMS};

#[derive(Debug, Clone)]
pub struct PlatformsConfig {
    pub source: SnapshotSource,
    /// Print occurrence counts next to each platform.
    pub counts: bool,
}

/// Menu label for a vocabulary entry.
pub fn platform_label(name: &str) -> &str {
    if name == ALL_PLATFORMS {
        "All Platforms"
    } else {
        name
    }
}

/// One line per vocabulary entry, sentinel first.
pub fn render_vocabulary(records: &[MovieRecord], with_counts: bool) -> String {
    let ranked = platform_counts(records);
    let mut out = String::new();
    if with_counts {
        // the sentinel has no token count of its own
        out.push_str(&format!("{:>5}  {}\n", "", platform_label(ALL_PLATFORMS)));
        for entry in &ranked {
            out.push_str(&format!("{:>5}  {}\n", entry.count, entry.name));
        }
    } else {
        out.push_str(platform_label(ALL_PLATFORMS));
        out.push('\n');
        for entry in &ranked {
            out.push_str(&entry.name);
            out.push('\n');
        }
    }
    out
}

pub async fn run(cfg: PlatformsConfig) -> Result<()> {
    let records = cfg.source.load().await?;
    let text = render_vocabulary(&records, cfg.counts);
    info!(records = records.len(), platforms = text.lines().count() - 1, "platforms: vocabulary built");
    print!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_vocabulary;

    fn records() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("A", "Netflix"),
            MovieRecord::new("B", "Amazon Prime Video, Zee5"),
            MovieRecord::new("C", "Netflix & Sony LIV"),
        ]
    }

    #[test]
    fn plain_listing_follows_vocabulary() {
        let records = records();
        let lines: Vec<String> = render_vocabulary(&records, false)
            .lines()
            .map(str::to_string)
            .collect();
        let expected: Vec<String> = build_vocabulary(&records)
            .iter()
            .map(|name| platform_label(name).to_string())
            .collect();
        assert_eq!(lines, expected);
        assert_eq!(lines[0], "All Platforms");
    }

    #[test]
    fn counted_listing_shows_totals() {
        let text = render_vocabulary(&records(), true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "       All Platforms");
        assert_eq!(lines[1], "    2  Netflix");
        assert_eq!(lines.len(), 5);
        // token counts, not record counts: five tokens across three records
        let total: usize = lines[1..]
            .iter()
            .map(|l| l.split_whitespace().next().unwrap().parse::<usize>().unwrap())
            .sum();
        assert_eq!(total, 5);
    }
}
