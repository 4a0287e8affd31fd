//! View rendering for the data table.
//!
//! Renders the header row, the rows of the current page with cursor and
//! selection markers, detail panels under expanded rows, and a status
//! line carrying the one-based item range, the page indicator, and the
//! selection count. Column widths follow the widest cell on the page
//! unless a column fixes its own width.

use super::types::TableRow;
use super::Model;
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

impl<R: TableRow> Model<R> {
    /// Renders the table as a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datatable_widgets::table::{Column, Model};
    /// use std::collections::HashMap;
    ///
    /// let rows: Vec<HashMap<String, String>> = vec![
    ///     HashMap::from([("name".to_string(), "ACME Corp".to_string())]),
    /// ];
    /// let table = Model::new(vec![Column::new("Name", "name")]).with_rows(rows);
    /// let view = table.view();
    /// assert!(view.contains("ACME Corp"));
    /// ```
    pub fn view(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&self.view_header(&widths));
        out.push('\n');

        let rows = self.page_rows();
        if rows.is_empty() {
            out.push_str(&self.styles.no_rows.clone().render("No rows."));
            out.push('\n');
        } else {
            let (page_start, _) = self.page_bounds();
            for (line_index, row) in rows.iter().enumerate() {
                let visible_index = page_start + line_index;
                out.push_str(&self.view_row(row, line_index, visible_index, &widths));
                out.push('\n');
                if self.is_expanded(visible_index) {
                    out.push_str(&self.view_detail(row));
                }
            }
        }

        out.push_str(&self.status_line());
        out
    }

    /// Renders the status line alone, e.g. `"21-34 of 34 · page 2/2"`.
    pub fn status_line(&self) -> String {
        let info = self.page_info();
        let mut status = format!(
            "{}-{} of {} · page {}/{}",
            info.start_item, info.end_item, info.total_rows, info.page, info.total_pages
        );
        let selected = self.selected_rows().len();
        if selected > 0 {
            status.push_str(&format!(" · {selected} selected"));
        }
        self.styles.status.clone().render(&status)
    }

    fn view_header(&self, widths: &[usize]) -> String {
        // Align with the "> [x] " prefix of row lines.
        let mut line = String::from("      ");
        for (column, width) in self.columns().iter().zip(widths) {
            line.push_str(&pad(&column.title, *width));
            line.push_str("  ");
        }
        self.styles.header.clone().render(line.trim_end())
    }

    fn view_row(&self, row: &R, line_index: usize, visible_index: usize, widths: &[usize]) -> String {
        let is_cursor = line_index == self.cursor();
        let selected = self.is_selected(visible_index);

        let mut line = String::new();
        line.push_str(if is_cursor { "> " } else { "  " });
        line.push_str(if selected { "[x] " } else { "[ ] " });
        for (column, width) in self.columns().iter().zip(widths) {
            let value = row.field(&column.field).unwrap_or(Cow::Borrowed(""));
            line.push_str(&pad(&value, *width));
            line.push_str("  ");
        }
        let line = line.trim_end().to_string();

        if is_cursor {
            self.styles.cursor_row.clone().render(&line)
        } else if selected {
            self.styles.selected_marker.clone().render(&line)
        } else {
            line
        }
    }

    fn view_detail(&self, row: &R) -> String {
        let mut out = String::new();
        for column in self.columns() {
            let value = row.field(&column.field).unwrap_or(Cow::Borrowed(""));
            let line = format!("      {}: {}", column.title, value);
            out.push_str(&self.styles.detail.clone().render(&line));
            out.push('\n');
        }
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let rows = self.page_rows();
        self.columns()
            .iter()
            .map(|column| {
                if let Some(width) = column.width {
                    return width;
                }
                let cells = rows
                    .iter()
                    .filter_map(|row| row.field(&column.field))
                    .map(|value| value.width())
                    .max()
                    .unwrap_or(0);
                cells.max(column.title.width())
            })
            .collect()
    }
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
