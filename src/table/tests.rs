//! Tests for the data table component.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::{Cmd, KeyMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::collections::HashMap;

    fn record(name: &str, status: &str, amount: &str) -> HashMap<String, String> {
        HashMap::from([
            ("name".to_string(), name.to_string()),
            ("status".to_string(), status.to_string()),
            ("amount".to_string(), amount.to_string()),
        ])
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("Name", "name"),
            Column::new("Status", "status"),
            Column::new("Amount", "amount"),
        ]
    }

    /// One loaded server page of 20 developer records; three of them
    /// (positions 2, 7, 15) match "acme" case-insensitively.
    fn developer_page() -> Vec<HashMap<String, String>> {
        (0..20)
            .map(|i| match i {
                2 => record("ACME Corp", "ACTIVE", "120"),
                7 => record("Acme Ltd", "SUSPENDED", "75"),
                15 => record("acme holdings", "ACTIVE", "310"),
                _ => record(&format!("Vendor {i}"), "ACTIVE", &format!("{}", i * 10)),
            })
            .collect()
    }

    fn developer_table() -> Model<HashMap<String, String>> {
        Model::new(columns())
            .with_per_page(20)
            .with_rows(developer_page())
            .with_server_totals(ServerTotals::new(34, 2))
    }

    fn names(table: &Model<HashMap<String, String>>) -> Vec<String> {
        table
            .page_rows()
            .iter()
            .map(|r| r.field("name").unwrap().into_owned())
            .collect()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        })
    }

    async fn page_request(cmd: Cmd) -> PageRequestMsg {
        let msg = cmd.await.expect("command should produce a message");
        *msg.downcast_ref::<PageRequestMsg>()
            .expect("expected a PageRequestMsg")
    }

    // ---- Pagination modes ------------------------------------------------

    #[test]
    fn server_mode_reports_backend_totals() {
        let table = developer_table();

        assert_eq!(table.pagination_mode(), PaginationMode::Server);
        let info = table.page_info();
        assert_eq!(info.page, 1);
        assert_eq!(info.total_rows, 34);
        assert_eq!(info.total_pages, 2);
        assert_eq!(info.start_item, 1);
        assert_eq!(info.end_item, 20);
        // The backend already returned one page's worth; no local slicing.
        assert_eq!(table.page_rows().len(), 20);
    }

    #[test]
    fn search_flips_totals_to_the_filtered_rows() {
        let mut table = developer_table();
        table.set_search("name", "ACME");

        assert_eq!(table.pagination_mode(), PaginationMode::Local);
        let info = table.page_info();
        assert_eq!(info.total_rows, 3);
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.page, 1);
        assert_eq!(info.start_item, 1);
        assert_eq!(info.end_item, 3);
        assert_eq!(
            names(&table),
            vec!["ACME Corp", "Acme Ltd", "acme holdings"]
        );
    }

    #[test]
    fn local_totals_never_read_server_metadata() {
        let mut table = developer_table();
        // Deliberately absurd backend totals; search must ignore them.
        table.set_server_totals(Some(ServerTotals::new(9999, 500)));
        table.set_search("status", "suspended");

        let info = table.page_info();
        assert_eq!(info.total_rows, 1);
        assert_eq!(info.total_pages, 1);
    }

    #[test]
    fn blank_queries_leave_server_mode_untouched() {
        let mut table = developer_table();
        let cmd = table.set_search("name", "   ");
        assert!(cmd.is_none());
        assert_eq!(table.pagination_mode(), PaginationMode::Server);
        assert_eq!(table.page_info().total_rows, 34);
    }

    #[test]
    fn missing_metadata_degrades_to_an_empty_page() {
        let mut table = developer_table();
        table.set_server_totals(None);
        let info = table.page_info();
        assert_eq!(info.total_rows, 0);
        assert_eq!(info.total_pages, 1);
    }

    // ---- Page changes ----------------------------------------------------

    #[tokio::test]
    async fn server_page_change_updates_counter_and_requests_fetch() {
        let mut table = developer_table();
        let cmd = table.go_to_page(1).expect("server mode must refetch");

        // Counter and request are produced by the same call.
        assert_eq!(table.page_info().page, 2);
        let req = page_request(cmd).await;
        assert_eq!(req.page, 1, "transport pages are zero-based");
        assert_eq!(req.per_page, 20);
    }

    #[test]
    fn local_page_change_is_silent() {
        let mut table = developer_table().with_per_page(2);
        table.set_search("name", "acme"); // 3 matches, 2 pages
        assert_eq!(table.page_info().total_pages, 2);

        let cmd = table.go_to_page(1);
        assert!(cmd.is_none(), "no network traffic while searching");
        assert_eq!(table.page_info().page, 2);
        assert_eq!(names(&table), vec!["acme holdings"]);
    }

    #[tokio::test]
    async fn per_page_change_resets_to_first_page_and_refetches() {
        let mut table = developer_table();
        table.go_to_page(1);
        assert_eq!(table.page_info().page, 2);

        let cmd = table.set_per_page(10).expect("server mode must refetch");
        assert_eq!(table.page_info().page, 1);
        let req = page_request(cmd).await;
        assert_eq!((req.page, req.per_page), (0, 10));
    }

    #[test]
    fn per_page_change_resets_page_in_local_mode_without_fetching() {
        let mut table = developer_table().with_per_page(2);
        table.set_search("status", "active");
        table.go_to_page(3);
        assert!(table.page_info().page > 1);

        let cmd = table.set_per_page(5);
        assert!(cmd.is_none());
        assert_eq!(table.page_info().page, 1);
    }

    #[test]
    fn zero_per_page_is_rejected_and_keeps_the_previous_size() {
        let mut table = developer_table();
        let cmd = table.set_per_page(0);
        assert!(cmd.is_none());
        assert_eq!(table.per_page(), 20);
    }

    #[test]
    fn search_edits_return_to_the_first_page() {
        let mut table = developer_table().with_per_page(2);
        table.set_search("status", "active");
        table.go_to_page(4);
        assert!(table.page_info().page > 1);

        table.set_search("status", "activ");
        assert_eq!(table.page_info().page, 1);
    }

    #[tokio::test]
    async fn clearing_the_last_query_resyncs_from_page_zero() {
        let mut table = developer_table();
        table.go_to_page(1); // browsing server page 2
        table.set_search("name", "acme");
        assert_eq!(table.pagination_mode(), PaginationMode::Local);

        let cmd = table
            .set_search("name", "")
            .expect("leaving search must re-sync");
        assert_eq!(table.pagination_mode(), PaginationMode::Server);
        assert_eq!(table.page_info().page, 1);
        let req = page_request(cmd).await;
        assert_eq!((req.page, req.per_page), (0, 20));
    }

    #[tokio::test]
    async fn clear_search_behaves_like_clearing_every_query() {
        let mut table = developer_table();
        table.set_search("name", "acme");
        table.set_search("status", "active");

        let cmd = table.clear_search().expect("leaving search must re-sync");
        assert!(!table.has_active_search());
        assert_eq!(page_request(cmd).await.page, 0);

        // A second clear is a no-op.
        assert!(table.clear_search().is_none());
    }

    // ---- Filtering -------------------------------------------------------

    #[test]
    fn filters_and_across_fields() {
        let mut table = developer_table();
        table.set_search("name", "acme");
        table.set_search("status", "active");
        assert_eq!(names(&table), vec!["ACME Corp", "acme holdings"]);
    }

    #[test]
    fn empty_search_is_an_identity_pass() {
        let table = developer_table();
        assert_eq!(table.visible_len(), 20);
        let original: Vec<String> = developer_page()
            .iter()
            .map(|r| r.field("name").unwrap().into_owned())
            .collect();
        assert_eq!(names(&table), original);
    }

    #[test]
    fn search_on_a_field_rows_lack_matches_nothing() {
        let mut table = developer_table();
        table.set_search("nonexistent_field", "x");
        assert_eq!(table.visible_len(), 0);
        let info = table.page_info();
        assert_eq!((info.start_item, info.end_item), (0, 0));
        assert_eq!(info.total_pages, 1);
    }

    // ---- Sorting ---------------------------------------------------------

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let rows = vec![
            record("Alpha", "ACTIVE", "1"),
            record("Beta", "SUSPENDED", "2"),
            record("Gamma", "ACTIVE", "3"),
            record("Delta", "SUSPENDED", "4"),
        ];
        let mut table = Model::new(columns()).with_rows(rows);

        table.set_sort(Some(SortColumn::ascending("status")));
        assert_eq!(names(&table), vec!["Alpha", "Gamma", "Beta", "Delta"]);

        // Sorting again with the same config must not jitter the order.
        table.set_sort(Some(SortColumn::ascending("status")));
        assert_eq!(names(&table), vec!["Alpha", "Gamma", "Beta", "Delta"]);

        // Descending mirrors the groups; ties keep their original order.
        table.set_sort(Some(SortColumn::descending("status")));
        assert_eq!(names(&table), vec!["Beta", "Delta", "Alpha", "Gamma"]);
    }

    #[test]
    fn sort_by_toggles_direction_on_repeated_fields() {
        let mut table = developer_table();
        table.sort_by("name");
        assert_eq!(
            table.sort_column(),
            Some(&SortColumn::ascending("name"))
        );
        table.sort_by("name");
        assert_eq!(
            table.sort_column(),
            Some(&SortColumn::descending("name"))
        );
        table.sort_by("status");
        assert_eq!(
            table.sort_column(),
            Some(&SortColumn::ascending("status"))
        );
    }

    #[test]
    fn numeric_columns_sort_numerically() {
        let rows = vec![
            record("A", "ACTIVE", "100"),
            record("B", "ACTIVE", "9"),
            record("C", "ACTIVE", "25"),
        ];
        let mut table = Model::new(columns()).with_rows(rows);
        table.sort_by("amount");
        assert_eq!(names(&table), vec!["B", "C", "A"]);
    }

    #[test]
    fn no_sort_preserves_filter_order() {
        let mut table = developer_table();
        table.set_search("name", "acme");
        assert_eq!(
            names(&table),
            vec!["ACME Corp", "Acme Ltd", "acme holdings"]
        );
    }

    // ---- Selection & expansion -------------------------------------------

    #[test]
    fn toggle_row_is_symmetric_and_bounds_checked() {
        let mut table = developer_table();
        table.toggle_row(3);
        assert!(table.is_selected(3));
        table.toggle_row(3);
        assert!(!table.is_selected(3));

        table.toggle_row(999);
        assert!(table.selected_rows().is_empty());
    }

    #[test]
    fn toggle_all_round_trips() {
        let mut table = developer_table();
        table.set_search("name", "acme");

        table.toggle_all();
        assert_eq!(table.selected_rows(), vec![0, 1, 2]);
        table.toggle_all();
        assert!(table.selected_rows().is_empty());
    }

    #[test]
    fn toggle_all_selects_only_visible_rows() {
        let mut table = developer_table();
        table.set_search("status", "suspended"); // 1 match out of 20
        table.toggle_all();
        assert_eq!(table.selected_rows(), vec![0]);
    }

    #[test]
    fn selection_is_clamped_when_the_visible_set_shrinks() {
        let mut table = developer_table();
        table.toggle_row(5);
        table.toggle_row(17);
        table.set_search("name", "acme"); // narrows to 3 rows
        assert!(table.selected_rows().is_empty(), "5 and 17 are out of range");
    }

    #[test]
    fn clearing_search_keeps_in_range_selection() {
        let mut table = developer_table();
        table.set_search("name", "acme");
        table.toggle_all();
        assert_eq!(table.selected_rows(), vec![0, 1, 2]);

        table.set_search("name", "");
        // Back to 20 visible rows; the indices are still in range and
        // survive. Only out-of-range entries are ever dropped.
        assert_eq!(table.selected_rows(), vec![0, 1, 2]);
    }

    #[test]
    fn bulk_setters_drop_out_of_range_indices() {
        let mut table = developer_table();
        table.set_selected([1, 5, 400]);
        assert_eq!(table.selected_rows(), vec![1, 5]);
        table.set_expanded([0, 19, 20]);
        assert_eq!(table.expanded_rows(), vec![0, 19]);
    }

    #[test]
    fn expansion_mirrors_selection_semantics() {
        let mut table = developer_table();
        table.toggle_expanded(2);
        assert!(table.is_expanded(2));
        table.set_search("status", "suspended"); // 1 visible row
        assert!(table.expanded_rows().is_empty());
    }

    #[test]
    fn reset_rows_seeds_a_fresh_dataset() {
        let mut table = developer_table();
        table.go_to_page(1);
        table.toggle_row(0);
        table.toggle_expanded(1);

        table.reset_rows(vec![record("New", "ACTIVE", "1")]);
        assert!(table.selected_rows().is_empty());
        assert!(table.expanded_rows().is_empty());
        assert_eq!(table.page_info().page, 1);
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn set_rows_keeps_the_page_counter() {
        let mut table = developer_table();
        table.go_to_page(1);
        table.set_rows(vec![record("Page two row", "ACTIVE", "1")]);
        assert_eq!(table.page_info().page, 2);
    }

    // ---- Row actions -----------------------------------------------------

    #[tokio::test]
    async fn row_actions_are_dispatched_by_message() {
        let table = developer_table();
        let cmd = table
            .row_action(RowAction::Delete, 4)
            .expect("index 4 is visible");
        let msg = cmd.await.unwrap();
        let action = msg.downcast_ref::<RowActionMsg>().unwrap();
        assert_eq!(action.action, RowAction::Delete);
        assert_eq!(action.row, 4);

        assert!(table.row_action(RowAction::View, 999).is_none());
    }

    // ---- Key handling ----------------------------------------------------

    #[tokio::test]
    async fn next_page_key_refetches_in_server_mode() {
        let mut table = developer_table();
        let cmd = table.update(&key(KeyCode::Right)).expect("refetch");
        assert_eq!(table.page_info().page, 2);
        assert_eq!(page_request(cmd).await.page, 1);

        // Already on the last page: no-op, no fetch.
        assert!(table.update(&key(KeyCode::Right)).is_none());
    }

    #[test]
    fn cursor_keys_drive_selection_and_expansion() {
        let mut table = developer_table();
        table.update(&key(KeyCode::Down));
        table.update(&key(KeyCode::Down));
        assert_eq!(table.cursor(), 2);

        table.update(&key(KeyCode::Char(' ')));
        assert_eq!(table.selected_rows(), vec![2]);

        table.update(&key(KeyCode::Enter));
        assert_eq!(table.expanded_rows(), vec![2]);

        table.update(&key(KeyCode::Char('a')));
        assert_eq!(table.selected_rows().len(), 20);
    }

    #[test]
    fn cursor_clamps_to_the_page() {
        let mut table = developer_table();
        for _ in 0..50 {
            table.update(&key(KeyCode::Down));
        }
        assert_eq!(table.cursor(), 19);

        table.set_search("name", "acme");
        assert!(table.cursor() < 3);

        table.update(&key(KeyCode::Up));
        table.update(&key(KeyCode::Up));
        table.update(&key(KeyCode::Up));
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn non_key_messages_are_ignored() {
        let mut table = developer_table();
        let msg: Msg = Box::new(42_u32);
        assert!(table.update(&msg).is_none());
        assert_eq!(table.page_info().page, 1);
    }

    // ---- Rendering -------------------------------------------------------

    #[test]
    fn view_renders_rows_and_status() {
        let table = developer_table();
        let view = table.view();
        assert!(view.contains("Name"));
        assert!(view.contains("ACME Corp"));
        assert!(view.contains("1-20 of 34"));
        assert!(view.contains("page 1/2"));
    }

    #[test]
    fn view_marks_selection_and_expansion() {
        let mut table = developer_table();
        table.toggle_row(2);
        table.toggle_expanded(2);
        let view = table.view();
        assert!(view.contains("[x]"));
        assert!(view.contains("Status: ACTIVE"));
        assert!(view.contains("1 selected"));
    }

    #[test]
    fn empty_table_renders_a_placeholder() {
        let table: Model<HashMap<String, String>> = Model::new(columns());
        let view = table.view();
        assert!(view.contains("No rows."));
        assert!(view.contains("0-0 of 0"));
    }
}
