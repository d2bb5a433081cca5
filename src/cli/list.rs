use anyhow::Result;
use tracing::info;

use super::table::render_listing;
use super::SnapshotSource;
use crate::catalog::{FilterState, Pagination};

#[derive(Debug, Clone)]
pub struct ListConfig {
    pub source: SnapshotSource,
    pub filter: FilterState,
    /// One-based; clamped into range.
    pub page: usize,
    pub per_page: usize,
    /// Emit the current page as JSON instead of a table.
    pub json: bool,
}

pub async fn run(cfg: ListConfig) -> Result<()> {
    let records = cfg.source.load().await?;
    let filtered = cfg.filter.apply(&records);
    let pager = Pagination::new(filtered.len(), cfg.per_page, cfg.page);
    info!(
        total = records.len(),
        matched = filtered.len(),
        search = %cfg.filter.search_term,
        platform = %cfg.filter.selected_platform,
        page = pager.current_page(),
        "list: filtered catalog"
    );

    if cfg.json {
        let page = &filtered[pager.range()];
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        print!("{}", render_listing(&cfg.filter, records.len(), &filtered, &pager));
    }
    Ok(())
}
