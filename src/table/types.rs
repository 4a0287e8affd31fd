//! Core types for the data table component.
//!
//! This module contains the row access trait, column descriptions, sort
//! configuration, pagination metadata, and the messages the table emits
//! through the bubbletea-rs command system.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Trait for records the table can display, search, and sort.
///
/// A row is an opaque bag of named fields with displayable values. The
/// table never enumerates a row's fields; it only looks up the fields
/// named by its columns and active search queries. Returning `None`
/// means the row has no such field, which fails any search on that
/// field and sorts after rows that do have it.
///
/// # Examples
///
/// ```rust
/// use datatable_widgets::table::TableRow;
/// use std::borrow::Cow;
///
/// struct Account {
///     name: String,
///     balance: i64,
/// }
///
/// impl TableRow for Account {
///     fn field(&self, name: &str) -> Option<Cow<'_, str>> {
///         match name {
///             "name" => Some(Cow::Borrowed(&self.name)),
///             "balance" => Some(Cow::Owned(self.balance.to_string())),
///             _ => None,
///         }
///     }
/// }
///
/// let row = Account { name: "ACME Corp".into(), balance: 1200 };
/// assert_eq!(row.field("name").unwrap(), "ACME Corp");
/// assert!(row.field("missing").is_none());
/// ```
pub trait TableRow {
    /// Returns the display value of the named field, or `None` if the
    /// row has no such field.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl TableRow for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl TableRow for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

/// JSON objects as a REST backend returns them. `Null` counts as an
/// absent field, strings are borrowed, and other primitives are
/// stringified.
impl TableRow for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

/// A table column: the header title and the row field it displays.
///
/// # Examples
///
/// ```rust
/// use datatable_widgets::table::Column;
///
/// let col = Column::new("Developer", "developer_name").with_width(24);
/// assert_eq!(col.field, "developer_name");
/// assert_eq!(col.width, Some(24));
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Header text.
    pub title: String,
    /// Name of the row field rendered in this column.
    pub field: String,
    /// Fixed display width; derived from contents when `None`.
    pub width: Option<usize>,
}

impl Column {
    /// Creates a column with the given header title and row field name.
    pub fn new(title: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            field: field.into(),
            width: None,
        }
    }

    /// Fixes the column's display width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
}

/// Sort direction for a sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest values first.
    #[default]
    Ascending,
    /// Largest values first; the exact mirror of ascending.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The single sorted column, if any. The table supports at most one
/// sort column at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortColumn {
    /// The row field sorted by.
    pub field: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortColumn {
    /// Creates an ascending sort on the given field.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort on the given field.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Which side currently governs pagination numbers.
///
/// The mode is derived from the search state on every call (it is
/// `Local` exactly while at least one search query is non-blank), so
/// the totals shown to the user and the math that computes them can
/// never fall out of step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// Totals and slicing come from the locally filtered rows.
    Local,
    /// Totals come from the backend's page metadata; the loaded rows
    /// already are exactly one page.
    Server,
}

/// Pagination metadata reported by a server-side pager.
///
/// Owned by the data-fetching layer and read-only to the table. Missing
/// metadata is represented by [`ServerTotals::default`], which shows a
/// single empty page rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerTotals {
    /// Total matching records across all pages.
    pub rows: usize,
    /// Total pages at the current page size. Floored at 1 on use.
    pub pages: usize,
}

impl Default for ServerTotals {
    fn default() -> Self {
        Self { rows: 0, pages: 1 }
    }
}

impl ServerTotals {
    /// Creates totals from a backend page response.
    pub fn new(rows: usize, pages: usize) -> Self {
        Self { rows, pages }
    }
}

/// The pagination numbers to display for the current frame.
///
/// All values are one-based and inclusive, ready for a "21-34 of 34"
/// style status line. Every field of a given `PageInfo` comes from a
/// single numbering system, local or server, never a mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page, one-based.
    pub page: usize,
    /// Rows per page.
    pub per_page: usize,
    /// Total rows under the current mode.
    pub total_rows: usize,
    /// Total pages under the current mode, at least 1.
    pub total_pages: usize,
    /// One-based ordinal of the first row on this page, 0 when empty.
    pub start_item: usize,
    /// One-based ordinal of the last row on this page, 0 when empty.
    pub end_item: usize,
}

/// Message emitted when the table needs a different page from the
/// backend.
///
/// The host application's `update` should react by fetching
/// `page`/`per_page` from its data source and handing the response back
/// via [`Model::set_rows`](super::Model::set_rows) and
/// [`Model::set_server_totals`](super::Model::set_server_totals). The
/// page number uses the transport convention: zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequestMsg {
    /// Requested page, zero-based.
    pub page: usize,
    /// Requested page size.
    pub per_page: usize,
}

/// An action a host application can offer on individual rows.
///
/// The table only names the action and the row it targets; the business
/// logic lives in the host application's handling of
/// [`RowActionMsg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Open the row's detail screen.
    View,
    /// Open the row's edit form.
    Edit,
    /// Delete the row.
    Delete,
    /// An application-defined action dispatched by name.
    Custom(String),
}

/// Message emitted when a row action is triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionMsg {
    /// The triggered action.
    pub action: RowAction,
    /// Index of the target row within the visible (filtered and
    /// sorted) rows.
    pub row: usize,
}
