//! Styling for the data table component.
//!
//! All default styles use `AdaptiveColor` so they remain readable on
//! both light and dark terminal backgrounds, and every style can be
//! replaced field by field.
//!
//! # Examples
//!
//! ```rust
//! use datatable_widgets::table::TableStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = TableStyles::default();
//! styles.header = Style::new().bold(true).underline(true);
//! ```

use lipgloss_extras::prelude::*;

/// Styles for the table's visual elements.
#[derive(Debug, Clone)]
pub struct TableStyles {
    /// Column header row.
    pub header: Style,
    /// The row under the cursor.
    pub cursor_row: Style,
    /// The `[x]` marker on checked rows.
    pub selected_marker: Style,
    /// Detail panel lines under expanded rows.
    pub detail: Style,
    /// Status line (item range, page indicator, selection count).
    pub status: Style,
    /// Placeholder shown when no rows match.
    pub no_rows: Style,
}

impl Default for TableStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            header: Style::new()
                .bold(true)
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                }),
            cursor_row: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            selected_marker: Style::new().foreground(AdaptiveColor {
                Light: "#059669",
                Dark: "#10B981",
            }),
            detail: Style::new().foreground(subdued.clone()),
            status: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            no_rows: Style::new().foreground(subdued),
        }
    }
}
