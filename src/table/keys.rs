//! Key bindings for table navigation and row interaction.
//!
//! ## Navigation keys
//!
//! - **Cursor movement**: `↑/k` (up), `↓/j` (down)
//! - **Page navigation**: `→/l/pgdn` (next page), `←/h/pgup` (prev page)
//!
//! ## Row keys
//!
//! - **Toggle selection**: `space` (check/uncheck the cursor row)
//! - **Select all**: `a` (check every visible row, or clear when all
//!   are already checked)
//! - **Expand/collapse**: `enter` (open/close the cursor row's detail
//!   panel)

use crate::key::{self, KeyMap as KeyMapTrait};
use crossterm::event::KeyCode;

/// Key bindings for table navigation, selection, and expansion.
#[derive(Debug, Clone)]
pub struct TableKeyMap {
    /// Move the cursor up one row.
    pub cursor_up: key::Binding,
    /// Move the cursor down one row.
    pub cursor_down: key::Binding,
    /// Go to the previous page.
    pub prev_page: key::Binding,
    /// Go to the next page.
    pub next_page: key::Binding,
    /// Toggle selection of the cursor row.
    pub toggle_select: key::Binding,
    /// Select or clear all visible rows.
    pub select_all: key::Binding,
    /// Expand or collapse the cursor row's detail panel.
    pub toggle_expand: key::Binding,
}

impl Default for TableKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            prev_page: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::Right,
                KeyCode::Char('l'),
                KeyCode::PageDown,
            ])
            .with_help("→/l", "next page"),
            toggle_select: key::Binding::new(vec![KeyCode::Char(' ')])
                .with_help("space", "toggle select"),
            select_all: key::Binding::new(vec![KeyCode::Char('a')]).with_help("a", "select all"),
            toggle_expand: key::Binding::new(vec![KeyCode::Enter])
                .with_help("enter", "expand/collapse"),
        }
    }
}

impl KeyMapTrait for TableKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.prev_page,
            &self.next_page,
            &self.toggle_select,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down],
            vec![&self.prev_page, &self.next_page],
            vec![&self.toggle_select, &self.select_all, &self.toggle_expand],
        ]
    }
}
