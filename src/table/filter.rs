//! Search state and the row matching stage.
//!
//! Search is per-field: each searchable field carries its own free-text
//! query, and a row is visible only when it matches every non-blank
//! query (logical AND across fields). Matching is case-insensitive
//! substring containment by default; [`MatchMode::Fuzzy`] swaps in skim
//! style fuzzy matching for a filter-as-you-type feel.
//!
//! Search only ever narrows the rows currently held in memory. Whether
//! any query is active also decides the pagination mode, so
//! [`SearchState::has_active`] is the single source of that flag.

use super::types::TableRow;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static MATCHER: Lazy<SkimMatcherV2> = Lazy::new(SkimMatcherV2::default);

/// How field values are matched against search queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Skim-style fuzzy matching.
    Fuzzy,
}

/// Per-field free-text search queries.
///
/// Blank queries (empty or whitespace-only) are inert: they match every
/// row and do not count as an active search.
///
/// # Examples
///
/// ```rust
/// use datatable_widgets::table::SearchState;
///
/// let mut search = SearchState::new();
/// assert!(!search.has_active());
///
/// search.set("name", "acme");
/// assert!(search.has_active());
/// assert_eq!(search.query("name"), "acme");
///
/// search.set("name", "");
/// assert!(!search.has_active());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    queries: BTreeMap<String, String>,
}

impl SearchState {
    /// Creates an empty search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query for a field. An empty query removes the entry.
    pub fn set(&mut self, field: impl Into<String>, query: impl Into<String>) {
        let field = field.into();
        let query = query.into();
        if query.is_empty() {
            self.queries.remove(&field);
        } else {
            self.queries.insert(field, query);
        }
    }

    /// Returns the query for a field, `""` when none is set.
    pub fn query(&self, field: &str) -> &str {
        self.queries.get(field).map(String::as_str).unwrap_or("")
    }

    /// Removes every query.
    pub fn clear(&mut self) {
        self.queries.clear();
    }

    /// Returns true if at least one query is non-blank.
    pub fn has_active(&self) -> bool {
        self.queries.values().any(|q| !q.trim().is_empty())
    }

    /// Iterates over `(field, query)` pairs, blank queries included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.queries.iter().map(|(f, q)| (f.as_str(), q.as_str()))
    }
}

/// Returns true if the row satisfies every non-blank query.
///
/// A field named by a query but absent on the row fails that query;
/// a row can never match on a field it does not have.
pub(super) fn row_matches<R: TableRow>(row: &R, search: &SearchState, mode: MatchMode) -> bool {
    search.queries.iter().all(|(field, query)| {
        if query.trim().is_empty() {
            return true;
        }
        match row.field(field) {
            None => false,
            Some(value) => match mode {
                MatchMode::Substring => value.to_lowercase().contains(&query.to_lowercase()),
                MatchMode::Fuzzy => MATCHER.fuzzy_match(&value, query).is_some(),
            },
        }
    })
}
