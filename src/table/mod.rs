//! A data table component that reconciles server-side pagination with
//! client-side search, sort, selection, and row expansion.
//!
//! Back-office list screens usually sit on a REST backend that pages
//! server-side: the client holds one page of rows plus the backend's
//! totals. At the same time users expect to narrow, reorder, and check
//! rows instantly, without a round trip. This component owns the state
//! machine that keeps those two worlds consistent:
//!
//! - While no search query is active, pagination numbers are the
//!   backend's ([`ServerTotals`]) and page changes emit a
//!   [`PageRequestMsg`] command for the host application to fetch.
//! - The moment any query becomes non-blank, pagination flips to the
//!   locally filtered rows: totals, page count, and slicing are all
//!   computed client-side and page changes stay local.
//!
//! Which side governs is derived from the search state on every call,
//! never stored, so the numbers shown and the math behind them cannot
//! disagree within a frame.
//!
//! Every state change runs one fixed derivation (filter, then a stable
//! sort, then clamping of selection/expansion/cursor, then totals), so
//! checked-row indices always point into the visible (filtered and
//! sorted) rows and are silently dropped when the visible set shrinks
//! past them.
//!
//! # Examples
//!
//! ```rust
//! use datatable_widgets::table::{Column, Model, ServerTotals};
//! use std::collections::HashMap;
//!
//! fn row(name: &str, status: &str) -> HashMap<String, String> {
//!     HashMap::from([
//!         ("name".to_string(), name.to_string()),
//!         ("status".to_string(), status.to_string()),
//!     ])
//! }
//!
//! let mut table = Model::new(vec![
//!     Column::new("Name", "name"),
//!     Column::new("Status", "status"),
//! ])
//! .with_per_page(20)
//! .with_rows(vec![row("ACME Corp", "ACTIVE"), row("Globex", "SUSPENDED")])
//! .with_server_totals(ServerTotals::new(34, 2));
//!
//! // Server paging governs while no search is active.
//! let info = table.page_info();
//! assert_eq!((info.page, info.total_rows, info.total_pages), (1, 34, 2));
//!
//! // Typing a query flips the numbers to the locally filtered rows.
//! table.set_search("name", "acme");
//! let info = table.page_info();
//! assert_eq!((info.total_rows, info.total_pages), (1, 1));
//! assert_eq!(table.page_rows().len(), 1);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! Page changes in server mode return a command. The host application
//! fetches the requested page and hands the response back:
//!
//! ```rust,ignore
//! fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!     if let Some(req) = msg.downcast_ref::<PageRequestMsg>() {
//!         return Some(self.fetch_developers(req.page, req.per_page));
//!     }
//!     if let Some(resp) = msg.downcast_ref::<DevelopersLoadedMsg>() {
//!         self.table.set_rows(resp.rows.clone());
//!         self.table.set_server_totals(Some(ServerTotals::new(
//!             resp.total_elements,
//!             resp.total_pages,
//!         )));
//!         return None;
//!     }
//!     self.table.update(&msg)
//! }
//! ```

mod filter;
mod keys;
mod rendering;
mod sort;
mod style;
#[cfg(test)]
mod tests;
mod types;

pub use filter::{MatchMode, SearchState};
pub use keys::TableKeyMap;
pub use style::TableStyles;
pub use types::{
    Column, PageInfo, PageRequestMsg, PaginationMode, RowAction, RowActionMsg, ServerTotals,
    SortColumn, SortDirection, TableRow,
};

use crate::paginator;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::collections::BTreeSet;

/// The hybrid data table model.
///
/// Generic over the row type `R`; rows only need to expose named field
/// values through [`TableRow`]. Row identity is positional: selection
/// and expansion track indices into the visible (filtered and sorted)
/// row list, not persistent keys, and sorting relabels which row an
/// index refers to.
#[derive(Debug, Clone)]
pub struct Model<R: TableRow> {
    /// Key bindings.
    pub keymap: TableKeyMap,
    /// Visual styles used by [`view`](Model::view).
    pub styles: TableStyles,

    columns: Vec<Column>,
    rows: Vec<R>,
    search: SearchState,
    match_mode: MatchMode,
    sort: Option<SortColumn>,
    /// Indices into `rows` after filter + sort, in display order.
    visible: Vec<usize>,
    /// Indices into `visible` of checked rows.
    selected: BTreeSet<usize>,
    /// Indices into `visible` of rows with an open detail panel.
    expanded: BTreeSet<usize>,
    /// Highlight position within the current page's rows.
    cursor: usize,
    paginator: paginator::Model,
    server_totals: ServerTotals,
}

impl<R: TableRow> Model<R> {
    /// Creates an empty table with the given columns, page size 10,
    /// and no active search or sort.
    pub fn new(columns: Vec<Column>) -> Self {
        let mut model = Self {
            keymap: TableKeyMap::default(),
            styles: TableStyles::default(),
            columns,
            rows: Vec::new(),
            search: SearchState::new(),
            match_mode: MatchMode::default(),
            sort: None,
            visible: Vec::new(),
            selected: BTreeSet::new(),
            expanded: BTreeSet::new(),
            cursor: 0,
            paginator: paginator::Model::new(),
            server_totals: ServerTotals::default(),
        };
        model.refresh();
        model
    }

    /// Sets the initial rows (builder pattern).
    pub fn with_rows(mut self, rows: Vec<R>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Sets the page size (builder pattern). Zero is rejected.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        if per_page > 0 {
            self.paginator.set_per_page(per_page);
            self.refresh();
        }
        self
    }

    /// Sets the server pagination metadata (builder pattern).
    pub fn with_server_totals(mut self, totals: ServerTotals) -> Self {
        self.set_server_totals(Some(totals));
        self
    }

    /// Sets the match mode used by search queries (builder pattern).
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self.refresh();
        self
    }

    /// Replaces the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: TableKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles (builder pattern).
    pub fn with_styles(mut self, styles: TableStyles) -> Self {
        self.styles = styles;
        self
    }

    // ---- Rows & metadata -------------------------------------------------

    /// Replaces the loaded rows with a new page of the same logical
    /// dataset (typically the response to a [`PageRequestMsg`]).
    ///
    /// The page counter is kept; selection, expansion, and cursor are
    /// clamped to the new visible range.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.refresh();
    }

    /// Seeds the table with a different logical dataset (e.g. after a
    /// record was deleted and the list refetched): selection and
    /// expansion are cleared and the table returns to the first page.
    pub fn reset_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.selected.clear();
        self.expanded.clear();
        self.cursor = 0;
        self.paginator.first_page();
        self.refresh();
    }

    /// Adopts pagination metadata from the backend. `None` (metadata
    /// missing or malformed upstream) degrades to a single empty page
    /// rather than failing.
    pub fn set_server_totals(&mut self, totals: Option<ServerTotals>) {
        self.server_totals = totals.unwrap_or_default();
        self.refresh();
    }

    /// The server pagination metadata last adopted.
    pub fn server_totals(&self) -> ServerTotals {
        self.server_totals
    }

    /// The loaded rows, unfiltered, in load order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// The table's columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    // ---- Search ----------------------------------------------------------

    /// Sets the search query for a field and recomputes the table.
    ///
    /// Any edit that leaves a query active returns the table to the
    /// first page of the filtered rows. Clearing the last active query
    /// hands pagination back to the server; because the loaded rows may
    /// belong to a page the counter no longer points at, the table
    /// resets to the first page and returns a page-0 [`PageRequestMsg`]
    /// command so the caller re-syncs instead of showing stale rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datatable_widgets::table::{Column, Model};
    /// use std::collections::HashMap;
    ///
    /// let rows: Vec<HashMap<String, String>> = vec![
    ///     HashMap::from([("name".to_string(), "ACME Corp".to_string())]),
    ///     HashMap::from([("name".to_string(), "Globex".to_string())]),
    /// ];
    /// let mut table = Model::new(vec![Column::new("Name", "name")]).with_rows(rows);
    ///
    /// let cmd = table.set_search("name", "acme");
    /// assert!(cmd.is_none(), "entering a search stays local");
    /// assert_eq!(table.page_rows().len(), 1);
    ///
    /// let cmd = table.set_search("name", "");
    /// assert!(cmd.is_some(), "leaving search re-syncs with the backend");
    /// ```
    pub fn set_search(
        &mut self,
        field: impl Into<String>,
        query: impl Into<String>,
    ) -> Option<Cmd> {
        let was_searching = self.search.has_active();
        self.search.set(field, query);
        let searching = self.search.has_active();
        if searching || was_searching {
            self.paginator.first_page();
        }
        self.refresh();
        if was_searching && !searching {
            return Some(self.request_page(0));
        }
        None
    }

    /// Clears every search query. Returns the same re-sync command as
    /// [`set_search`](Model::set_search) when this leaves local mode.
    pub fn clear_search(&mut self) -> Option<Cmd> {
        let was_searching = self.search.has_active();
        self.search.clear();
        if !was_searching {
            return None;
        }
        self.paginator.first_page();
        self.refresh();
        Some(self.request_page(0))
    }

    /// The current search state.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Returns true if at least one search query is non-blank.
    pub fn has_active_search(&self) -> bool {
        self.search.has_active()
    }

    /// Which side currently governs pagination numbers. Derived from
    /// the search state, never stored.
    pub fn pagination_mode(&self) -> PaginationMode {
        if self.search.has_active() {
            PaginationMode::Local
        } else {
            PaginationMode::Server
        }
    }

    // ---- Sort ------------------------------------------------------------

    /// Sorts by the given field, flipping the direction when the field
    /// is already the sort column (the usual header-click behavior).
    pub fn sort_by(&mut self, field: impl Into<String>) {
        let field = field.into();
        self.sort = match self.sort.take() {
            Some(prev) if prev.field == field => Some(SortColumn {
                field,
                direction: prev.direction.flipped(),
            }),
            _ => Some(SortColumn::ascending(field)),
        };
        self.refresh();
    }

    /// Sets or clears the sort column directly.
    pub fn set_sort(&mut self, sort: Option<SortColumn>) {
        self.sort = sort;
        self.refresh();
    }

    /// The current sort column, if any.
    pub fn sort_column(&self) -> Option<&SortColumn> {
        self.sort.as_ref()
    }

    // ---- Pagination ------------------------------------------------------

    /// Goes to the given zero-based page, clamped to the valid range.
    ///
    /// In local mode this only moves the slicing window. In server mode
    /// the page counter moves and a [`PageRequestMsg`] command is
    /// returned in the same call, so the displayed page and the fetch
    /// that fills it can never disagree.
    pub fn go_to_page(&mut self, page: usize) -> Option<Cmd> {
        self.paginator.go_to(page);
        self.clamp_cursor();
        match self.pagination_mode() {
            PaginationMode::Local => None,
            PaginationMode::Server => Some(self.request_page(self.paginator.page)),
        }
    }

    /// Goes to the next page, if any. See [`go_to_page`](Model::go_to_page).
    pub fn next_page(&mut self) -> Option<Cmd> {
        if self.paginator.on_last_page() {
            return None;
        }
        self.go_to_page(self.paginator.page + 1)
    }

    /// Goes to the previous page, if any. See [`go_to_page`](Model::go_to_page).
    pub fn prev_page(&mut self) -> Option<Cmd> {
        if self.paginator.on_first_page() {
            return None;
        }
        self.go_to_page(self.paginator.page - 1)
    }

    /// Changes the page size. Zero is rejected and the previous size
    /// kept. An accepted change always returns to the first page; in
    /// server mode it also returns a refetch command for page 0 at the
    /// new size.
    pub fn set_per_page(&mut self, per_page: usize) -> Option<Cmd> {
        if per_page == 0 {
            return None;
        }
        self.paginator.set_per_page(per_page);
        self.refresh();
        match self.pagination_mode() {
            PaginationMode::Local => None,
            PaginationMode::Server => Some(self.request_page(0)),
        }
    }

    /// The current page size.
    pub fn per_page(&self) -> usize {
        self.paginator.per_page
    }

    /// The pagination numbers to display, one-based and inclusive,
    /// computed under the current mode.
    pub fn page_info(&self) -> PageInfo {
        let (start_item, end_item) = self.paginator.item_range();
        PageInfo {
            page: self.paginator.page + 1,
            per_page: self.paginator.per_page,
            total_rows: self.paginator.total_items,
            total_pages: self.paginator.total_pages,
            start_item,
            end_item,
        }
    }

    // ---- Derived rows ----------------------------------------------------

    /// The rows to render this frame: the current local slice of the
    /// visible rows, or the whole loaded page in server mode (the
    /// backend already returned exactly one page's worth).
    pub fn page_rows(&self) -> Vec<&R> {
        let (start, end) = self.page_bounds();
        self.visible[start..end]
            .iter()
            .map(|&i| &self.rows[i])
            .collect()
    }

    /// All visible rows (after filter and sort, before page slicing).
    pub fn visible_rows(&self) -> Vec<&R> {
        self.visible.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Number of visible rows.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The row at the given visible index.
    pub fn row(&self, index: usize) -> Option<&R> {
        self.visible.get(index).map(|&i| &self.rows[i])
    }

    // ---- Selection & expansion -------------------------------------------

    /// Toggles selection of a visible row. Out-of-range indices are
    /// ignored.
    pub fn toggle_row(&mut self, index: usize) {
        if index >= self.visible.len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Selects every visible row, or clears the selection when every
    /// visible row is already selected. Selection is scoped to what is
    /// on screen, not the backend's full dataset.
    pub fn toggle_all(&mut self) {
        let len = self.visible.len();
        if len > 0 && self.selected.len() == len {
            self.selected.clear();
        } else {
            self.selected = (0..len).collect();
        }
    }

    /// Replaces the selection; out-of-range indices are dropped.
    pub fn set_selected(&mut self, indices: impl IntoIterator<Item = usize>) {
        let len = self.visible.len();
        self.selected = indices.into_iter().filter(|&i| i < len).collect();
    }

    /// Indices of the checked rows, ascending.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Returns true if the visible row at `index` is checked.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Toggles the detail panel of a visible row. Out-of-range indices
    /// are ignored.
    pub fn toggle_expanded(&mut self, index: usize) {
        if index >= self.visible.len() {
            return;
        }
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    /// Replaces the set of expanded rows; out-of-range indices are
    /// dropped.
    pub fn set_expanded(&mut self, indices: impl IntoIterator<Item = usize>) {
        let len = self.visible.len();
        self.expanded = indices.into_iter().filter(|&i| i < len).collect();
    }

    /// Indices of the expanded rows, ascending.
    pub fn expanded_rows(&self) -> Vec<usize> {
        self.expanded.iter().copied().collect()
    }

    /// Returns true if the visible row at `index` has its detail panel
    /// open.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    // ---- Cursor ----------------------------------------------------------

    /// The highlight position within the current page's rows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor up one row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row.
    pub fn cursor_down(&mut self) {
        let len = self.page_len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// The cursor position as an index into the visible rows, `None`
    /// when the current page is empty.
    pub fn cursor_visible_index(&self) -> Option<usize> {
        let (start, end) = self.page_bounds();
        let index = start + self.cursor;
        (index < end).then_some(index)
    }

    // ---- Row actions -----------------------------------------------------

    /// Emits a [`RowActionMsg`] for the visible row at `index`, or
    /// `None` when the index is out of range. The table names the
    /// action; the host application implements it.
    pub fn row_action(&self, action: RowAction, index: usize) -> Option<Cmd> {
        if index >= self.visible.len() {
            return None;
        }
        Some(Box::pin(async move {
            Some(Box::new(RowActionMsg { action, row: index }) as Msg)
        }))
    }

    // ---- Elm plumbing ----------------------------------------------------

    /// Handles key messages: page navigation, cursor movement, and
    /// selection/expansion toggles. Returns the refetch command page
    /// navigation produces in server mode.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.next_page.matches(key_msg) {
            return self.next_page();
        }
        if self.keymap.prev_page.matches(key_msg) {
            return self.prev_page();
        }
        if self.keymap.cursor_up.matches(key_msg) {
            self.cursor_up();
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.cursor_down();
        } else if self.keymap.toggle_select.matches(key_msg) {
            if let Some(index) = self.cursor_visible_index() {
                self.toggle_row(index);
            }
        } else if self.keymap.select_all.matches(key_msg) {
            self.toggle_all();
        } else if self.keymap.toggle_expand.matches(key_msg) {
            if let Some(index) = self.cursor_visible_index() {
                self.toggle_expanded(index);
            }
        }
        None
    }

    // ---- Internal derivation ---------------------------------------------

    /// Recomputes the visible rows and everything hanging off them.
    /// Runs after every mutation, in a fixed order: filter, stable
    /// sort, index clamping, totals.
    fn refresh(&mut self) {
        self.visible = if self.search.has_active() {
            self.rows
                .iter()
                .enumerate()
                .filter(|(_, row)| filter::row_matches(*row, &self.search, self.match_mode))
                .map(|(i, _)| i)
                .collect()
        } else {
            (0..self.rows.len()).collect()
        };

        if let Some(sort) = &self.sort {
            let rows = &self.rows;
            self.visible
                .sort_by(|&a, &b| sort::compare_rows(&rows[a], &rows[b], sort));
        }

        let len = self.visible.len();
        self.selected.retain(|&i| i < len);
        self.expanded.retain(|&i| i < len);

        match self.pagination_mode() {
            PaginationMode::Local => self.paginator.set_total_items(len),
            PaginationMode::Server => self
                .paginator
                .set_remote_totals(self.server_totals.rows, self.server_totals.pages),
        }
        self.clamp_cursor();
    }

    /// Bounds of the current page within the visible rows.
    fn page_bounds(&self) -> (usize, usize) {
        match self.pagination_mode() {
            PaginationMode::Local => self.paginator.slice_bounds(self.visible.len()),
            PaginationMode::Server => (0, self.visible.len()),
        }
    }

    fn page_len(&self) -> usize {
        let (start, end) = self.page_bounds();
        end - start
    }

    fn clamp_cursor(&mut self) {
        let len = self.page_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn request_page(&self, page: usize) -> Cmd {
        let per_page = self.paginator.per_page;
        Box::pin(async move { Some(Box::new(PageRequestMsg { page, per_page }) as Msg) })
    }
}
