//! Plain-text rendering of a catalog page.

use itertools::Itertools;

use crate::catalog::{FilterState, MovieRecord, PageSlot, Pagination};

const HEADERS: [&str; 5] = ["Movie", "Platform", "Available On", "Type", "IMDb Rating"];
const MAX_CELL_WIDTH: usize = 40;

fn clip(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        cell.to_string()
    } else {
        let mut out: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
        out.push_str("...");
        out
    }
}

fn cells(record: &MovieRecord) -> [String; 5] {
    [
        record.title(),
        record.platform.as_deref().unwrap_or_default(),
        record.available_on.as_deref().unwrap_or_default(),
        record.kind.as_deref().unwrap_or_default(),
        record.imdb_rating_display(),
    ]
    .map(clip)
}

fn push_row(out: &mut String, row: &[String; 5], widths: &[usize; 5]) {
    let line = row
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Header, separator and one line per record; `empty_message` replaces the
/// body when there are no rows.
pub fn render_table(rows: &[&MovieRecord], empty_message: &str) -> String {
    let body: Vec<[String; 5]> = rows.iter().map(|r| cells(r)).collect();
    let header = HEADERS.map(String::from);

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).join("-+-"));
    out.push('\n');
    if body.is_empty() {
        out.push_str(empty_message);
        out.push('\n');
    }
    for row in &body {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Page bar such as `< 1 ... 5 [6] 7 ... 10 >`; `None` for a single page.
pub fn render_page_bar(pager: &Pagination) -> Option<String> {
    if !pager.is_visible() {
        return None;
    }
    let current = pager.current_page();
    let slots = pager
        .page_bar()
        .into_iter()
        .map(|slot| match slot {
            PageSlot::Page(n) if n == current => format!("[{n}]"),
            other => other.to_string(),
        })
        .join(" ");
    let prev = if pager.has_previous() { "<" } else { " " };
    let next = if pager.has_next() { ">" } else { " " };
    Some(format!(
        "Showing {} to {} of {} movies\n{prev} {slots} {next}   Page {current} of {}",
        pager.first_item(),
        pager.last_item(),
        pager.total_items(),
        pager.total_pages(),
    ))
}

/// Full listing: table, summary line and page bar.
pub fn render_listing(
    state: &FilterState,
    total_records: usize,
    filtered: &[&MovieRecord],
    pager: &Pagination,
) -> String {
    let page = &filtered[pager.range()];
    let mut out = render_table(page, FilterState::empty_message(total_records));
    out.push('\n');
    out.push_str(&state.summary(filtered.len(), total_records));
    out.push('\n');
    if let Some(bar) = render_page_bar(pager) {
        out.push_str(&bar);
        out.push('\n');
    }
    out
}
