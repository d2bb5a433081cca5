use super::index::{filter, PlatformSelection};
use super::record::MovieRecord;

/// Transient search/platform choice owned by whoever renders the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub selected_platform: PlatformSelection,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, selected_platform: PlatformSelection) -> Self {
        Self {
            search_term: search_term.into(),
            selected_platform,
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn select_platform(&mut self, platform: PlatformSelection) {
        self.selected_platform = platform;
    }

    /// Back to an empty search over all platforms.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True once the user has narrowed the view in any way.
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || !self.selected_platform.is_all()
    }

    pub fn apply<'a>(&self, records: &'a [MovieRecord]) -> Vec<&'a MovieRecord> {
        filter(records, &self.search_term, &self.selected_platform)
    }

    /// Footer line under the table.
    pub fn summary(&self, shown: usize, total: usize) -> String {
        if self.is_active() {
            format!("Showing {shown} of {total} movies")
        } else {
            format!("Showing all {total} movies")
        }
    }

    /// Placeholder row when nothing is left to show.
    pub fn empty_message(total: usize) -> &'static str {
        if total == 0 {
            "No data available"
        } else {
            "No movies match your search criteria"
        }
    }
}
