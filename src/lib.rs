#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/datatable-widgets/")]

//! # datatable-widgets
//!
//! A hybrid server/client paginated data table component for building
//! terminal applications with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! List screens over REST backends live in two pagination worlds at
//! once: the backend pages server-side and reports its own totals,
//! while search, sort, row selection, and row expansion are instant,
//! client-side operations over the one page of rows the client holds.
//! This crate provides the component that keeps the two consistent:
//! while no search is active the backend's numbers govern and page
//! changes emit fetch commands; the moment a query becomes non-blank,
//! totals and slicing flip to the locally filtered rows and pagination
//! stays local.
//!
//! Components follow the Elm Architecture pattern of bubbletea-rs with
//! `update()` and `view()` methods, type-safe key bindings, and
//! lipgloss styling, in the same shape as the bubbletea-widgets
//! component family.
//!
//! ## Components
//!
//! - [`table`]: the hybrid data table ([`table::Model`])
//! - [`paginator`]: standalone pagination state with local or
//!   server-reported totals
//! - [`key`]: key bindings with help metadata
//!
//! ## Quick start
//!
//! ```rust
//! use datatable_widgets::prelude::*;
//! use std::collections::HashMap;
//!
//! fn record(name: &str, status: &str) -> HashMap<String, String> {
//!     HashMap::from([
//!         ("name".to_string(), name.to_string()),
//!         ("status".to_string(), status.to_string()),
//!     ])
//! }
//!
//! // One server page of rows plus the backend's totals.
//! let mut table = DataTable::new(vec![
//!     Column::new("Name", "name"),
//!     Column::new("Status", "status"),
//! ])
//! .with_per_page(20)
//! .with_rows(vec![
//!     record("ACME Corp", "ACTIVE"),
//!     record("Globex", "SUSPENDED"),
//!     record("Initech", "ACTIVE"),
//! ])
//! .with_server_totals(ServerTotals::new(34, 2));
//!
//! assert_eq!(table.page_info().total_rows, 34);
//!
//! // Searching narrows the loaded rows and flips totals to them.
//! table.set_search("status", "active");
//! assert_eq!(table.page_info().total_rows, 2);
//!
//! // Sorting and selection operate on the filtered rows.
//! table.sort_by("name");
//! table.toggle_all();
//! assert_eq!(table.selected_rows(), vec![0, 1]);
//! ```
//!
//! ## Emitted messages
//!
//! The table never performs I/O. When it needs another server page it
//! returns a command that resolves to [`table::PageRequestMsg`]; row
//! actions resolve to [`table::RowActionMsg`]. The host application
//! handles both in its own `update` and feeds responses back with
//! [`table::Model::set_rows`] and [`table::Model::set_server_totals`].

pub mod key;
pub mod paginator;
pub mod table;

/// Convenient re-exports of the most commonly used types.
pub mod prelude {
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::Model as Paginator;
    pub use crate::table::{
        Column, MatchMode, Model as DataTable, PageInfo, PageRequestMsg, PaginationMode,
        RowAction, RowActionMsg, SearchState, ServerTotals, SortColumn, SortDirection,
        TableKeyMap, TableRow, TableStyles,
    };
}
