//! A pagination component tracking a window over a row set.
//!
//! This component handles pagination state only; it does not render pages
//! of content. It keeps a zero-based page counter and a page size, and
//! knows how many items and pages exist in total. Totals can come from
//! two places:
//!
//! - [`set_total_items`](Model::set_total_items) derives the page count
//!   from an in-memory item count (client-side pagination), or
//! - [`set_remote_totals`](Model::set_remote_totals) trusts counts
//!   reported by a backend that pages server-side and only ever hands the
//!   client one page of rows at a time.
//!
//! Either way the current page is clamped so it can never point past the
//! end, and [`slice_bounds`](Model::slice_bounds) can never produce an
//! out-of-range slice.
//!
//! # Examples
//!
//! ```rust
//! use datatable_widgets::paginator::Model;
//!
//! let mut p = Model::new().with_per_page(10).with_total_items(34);
//! assert_eq!(p.total_pages, 4);
//! assert_eq!(p.item_range(), (1, 10));
//!
//! p.next_page();
//! assert_eq!(p.page, 1);
//! assert_eq!(p.item_range(), (11, 20));
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;

/// Key bindings for paginator navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Go to the previous page.
    pub prev_page: key::Binding,
    /// Go to the next page.
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// Pagination state: current page, page size, and totals.
///
/// The page counter is zero-based internally; displays are one-based
/// (see [`view`](Model::view) and [`item_range`](Model::item_range)).
///
/// # Examples
///
/// ```rust
/// use datatable_widgets::paginator::Model;
///
/// // Backend reports 34 matching records across 2 pages; we hold one
/// // page of rows locally.
/// let mut p = Model::new().with_per_page(20);
/// p.set_remote_totals(34, 2);
///
/// assert_eq!(p.total_pages, 2);
/// assert_eq!(p.item_range(), (1, 20));
/// p.next_page();
/// assert_eq!(p.item_range(), (21, 34));
/// assert!(p.on_last_page());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The current page, zero-based.
    pub page: usize,
    /// The number of items per page. Always at least 1.
    pub per_page: usize,
    /// The total number of pages. Always at least 1.
    pub total_pages: usize,
    /// The total number of items being paged over.
    pub total_items: usize,
    /// Format string for [`view`](Model::view), e.g. `"%d/%d"`.
    pub page_format: String,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            total_pages: 1,
            total_items: 0,
            page_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator with default settings: page size 10, one
    /// empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern). A size of zero is rejected
    /// and the previous size kept.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        if per_page > 0 {
            self.per_page = per_page;
        }
        self
    }

    /// Sets the total item count and derives the page count (builder
    /// pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the page size. A size of zero is rejected and the previous
    /// size kept; an accepted change returns to the first page and
    /// recomputes the page count from the stored item count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datatable_widgets::paginator::Model;
    ///
    /// let mut p = Model::new().with_per_page(20).with_total_items(34);
    /// p.page = 1;
    ///
    /// p.set_per_page(10);
    /// assert_eq!(p.page, 0);
    /// assert_eq!(p.total_pages, 4);
    ///
    /// p.set_per_page(0); // rejected
    /// assert_eq!(p.per_page, 10);
    /// ```
    pub fn set_per_page(&mut self, per_page: usize) {
        if per_page == 0 {
            return;
        }
        self.per_page = per_page;
        self.page = 0;
        self.recompute_pages();
    }

    /// Sets the total item count and derives the page count from the
    /// current page size. Zero items still yield one (empty) page. The
    /// current page is clamped to the new range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datatable_widgets::paginator::Model;
    ///
    /// let mut p = Model::new().with_per_page(10);
    /// p.set_total_items(95);
    /// assert_eq!(p.total_pages, 10);
    ///
    /// p.set_total_items(0);
    /// assert_eq!(p.total_pages, 1);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_items = items;
        self.recompute_pages();
    }

    /// Adopts totals reported by a server-side pager: the overall item
    /// count and page count as the backend sees them. The page count is
    /// floored at 1 and the current page clamped, so malformed or
    /// missing metadata degrades to a single empty page instead of an
    /// inconsistent state.
    pub fn set_remote_totals(&mut self, items: usize, pages: usize) {
        self.total_items = items;
        self.total_pages = pages.max(1);
        self.clamp_page();
    }

    fn recompute_pages(&mut self) {
        self.total_pages = if self.total_items == 0 {
            1
        } else {
            self.total_items.div_ceil(self.per_page)
        };
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }

    /// Returns `(start, end)` slice bounds into a slice of the given
    /// length for the current page. Both bounds are clamped to the
    /// length, so the result is always a valid range even when the page
    /// counter and the slice disagree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datatable_widgets::paginator::Model;
    ///
    /// let items: Vec<i32> = (1..=25).collect();
    /// let mut p = Model::new().with_per_page(10).with_total_items(items.len());
    /// p.page = 2;
    /// let (start, end) = p.slice_bounds(items.len());
    /// assert_eq!(&items[start..end], &[21, 22, 23, 24, 25]);
    /// ```
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Returns the one-based inclusive item range shown on the current
    /// page, `(0, 0)` when there are no items.
    ///
    /// The range is computed against the total item count, so in
    /// server-paged setups it reflects the position within the full
    /// dataset rather than within the locally held rows.
    pub fn item_range(&self) -> (usize, usize) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let start = (self.page * self.per_page + 1).min(self.total_items);
        let end = ((self.page + 1) * self.per_page).min(self.total_items);
        (start, end)
    }

    /// Goes to the given zero-based page, clamped to the valid range.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.total_pages - 1);
    }

    /// Returns to the first page.
    pub fn first_page(&mut self) {
        self.page = 0;
    }

    /// Goes to the previous page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Goes to the next page, stopping at the last.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns true if the current page is the first.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Returns true if the current page is the last.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages - 1
    }

    /// Handles prev/next page key messages.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
        }
    }

    /// Renders the one-based page indicator, e.g. `"3/10"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datatable_widgets::paginator::Model;
    ///
    /// let p = Model::new().with_per_page(10).with_total_items(50);
    /// assert_eq!(p.view(), "1/5");
    /// ```
    pub fn view(&self) -> String {
        self.page_format
            .replacen("%d", &(self.page + 1).to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_items_is_one_empty_page() {
        let p = Model::new().with_per_page(10).with_total_items(0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.item_range(), (0, 0));
        assert_eq!(p.slice_bounds(0), (0, 0));
    }

    #[test]
    fn page_clamps_when_totals_shrink() {
        let mut p = Model::new().with_per_page(10).with_total_items(50);
        p.page = 4;
        p.set_total_items(11);
        assert_eq!(p.total_pages, 2);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn remote_totals_floor_pages_at_one() {
        let mut p = Model::new().with_per_page(20);
        p.page = 3;
        p.set_remote_totals(0, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.page, 0);
        assert_eq!(p.total_items, 0);
    }

    #[test]
    fn per_page_change_returns_to_first_page() {
        let mut p = Model::new().with_per_page(20).with_total_items(34);
        p.page = 1;
        p.set_per_page(10);
        assert_eq!(p.page, 0);
        assert_eq!(p.total_pages, 4);
    }

    #[test]
    fn zero_per_page_is_rejected() {
        let mut p = Model::new().with_per_page(20).with_total_items(34);
        p.page = 1;
        p.set_per_page(0);
        assert_eq!(p.per_page, 20);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn slice_bounds_never_exceed_length() {
        let mut p = Model::new().with_per_page(10).with_total_items(100);
        p.page = 9;
        // Slice shorter than the page counter implies.
        assert_eq!(p.slice_bounds(5), (5, 5));
    }

    #[test]
    fn item_range_on_partial_last_page() {
        let mut p = Model::new().with_per_page(20).with_total_items(34);
        p.next_page();
        assert_eq!(p.item_range(), (21, 34));
        p.next_page();
        assert_eq!(p.page, 1, "next_page stops at the last page");
    }
}
