//! Page window over a filtered listing plus the compact page bar.

use std::fmt;
use std::ops::Range;

/// Most slots the page bar shows, gaps included.
pub const MAX_PAGE_SLOTS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Gap,
}

impl fmt::Display for PageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSlot::Page(n) => write!(f, "{n}"),
            PageSlot::Gap => f.write_str("..."),
        }
    }
}

/// One-based pagination state. The current page is always clamped into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    per_page: usize,
    current_page: usize,
}

impl Pagination {
    pub fn new(total_items: usize, per_page: usize, current_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(per_page).max(1);
        Self {
            total_items,
            per_page,
            current_page: current_page.clamp(1, total_pages),
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Zero for an empty listing.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Zero-based slice bounds of the current page.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    /// One-based index of the first item on the page, 0 when empty.
    pub fn first_item(&self) -> usize {
        let range = self.range();
        if range.is_empty() {
            0
        } else {
            range.start + 1
        }
    }

    /// One-based index of the last item on the page, 0 when empty.
    pub fn last_item(&self) -> usize {
        self.range().end
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// A bar is only worth drawing with more than one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn page_bar(&self) -> Vec<PageSlot> {
        let total = self.total_pages();
        let current = self.current_page;

        if total <= MAX_PAGE_SLOTS {
            return (1..=total).map(PageSlot::Page).collect();
        }

        let mut slots = Vec::with_capacity(MAX_PAGE_SLOTS);
        if current <= 4 {
            slots.extend((1..=5).map(PageSlot::Page));
            slots.push(PageSlot::Gap);
            slots.push(PageSlot::Page(total));
        } else if current >= total - 3 {
            slots.push(PageSlot::Page(1));
            slots.push(PageSlot::Gap);
            slots.extend((total - 4..=total).map(PageSlot::Page));
        } else {
            slots.push(PageSlot::Page(1));
            slots.push(PageSlot::Gap);
            slots.extend((current - 1..=current + 1).map(PageSlot::Page));
            slots.push(PageSlot::Gap);
            slots.push(PageSlot::Page(total));
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Gap, Page};

    #[test]
    fn short_listings_show_every_page() {
        let p = Pagination::new(60, 20, 2);
        assert_eq!(p.page_bar(), vec![Page(1), Page(2), Page(3)]);
        assert!(p.is_visible());
        assert!(!Pagination::new(20, 20, 1).is_visible());
    }

    #[test]
    fn bar_near_start() {
        let p = Pagination::new(100, 10, 1);
        assert_eq!(
            p.page_bar(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(10)]
        );
        assert!(!p.has_previous());
        assert!(p.has_next());
    }

    #[test]
    fn bar_in_middle() {
        let p = Pagination::new(100, 10, 6);
        assert_eq!(
            p.page_bar(),
            vec![Page(1), Gap, Page(5), Page(6), Page(7), Gap, Page(10)]
        );
    }

    #[test]
    fn bar_near_end() {
        let p = Pagination::new(100, 10, 9);
        assert_eq!(
            p.page_bar(),
            vec![Page(1), Gap, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert!(!Pagination::new(100, 10, 10).has_next());
    }

    #[test]
    fn last_page_is_partial() {
        let p = Pagination::new(45, 20, 3);
        assert_eq!(p.range(), 40..45);
        assert_eq!((p.first_item(), p.last_item()), (41, 45));
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        assert_eq!(Pagination::new(45, 20, 99).current_page(), 3);
        assert_eq!(Pagination::new(45, 20, 0).current_page(), 1);
        assert_eq!(Pagination::new(5, 0, 1).per_page(), 1);
    }

    #[test]
    fn empty_listing() {
        let p = Pagination::new(0, 20, 4);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.range(), 0..0);
        assert_eq!((p.first_item(), p.last_item()), (0, 0));
        assert!(p.page_bar().is_empty());
        assert!(!p.has_next());
    }
}
