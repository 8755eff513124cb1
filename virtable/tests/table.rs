use std::rc::Rc;
use std::time::{Duration, Instant};

use serde_json::{json, Value};
use virtable::{
    Axis, ColumnSpec, Fixed, Size, SortChange, SortDirection, Table, TableConfig, TableError,
    TableEvent, TableHooks, TextMetrics,
};

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("id").header("ID").width(100.0).resizable(),
        ColumnSpec::new("name").header("Name").width(200.0).sortable(),
        ColumnSpec::new("email").header("Email").width(300.0),
    ]
}

fn rows(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({"key": i, "id": i, "name": format!("user {i}"), "email": null}))
        .collect()
}

fn tree() -> Vec<Value> {
    vec![
        json!({
            "key": "a",
            "name": "root",
            "children": [
                {"key": "a1", "name": "child", "children": [{"key": "a1x", "name": "leaf"}]},
                {"key": "a2", "name": "child"}
            ]
        }),
        json!({"key": "b", "name": "other"}),
    ]
}

/// 400 wide, 200 tall (160 of body under a 40 header).
fn table(count: usize) -> Table<Value> {
    Table::new(TableConfig::new().width(400.0), columns(), rows(count)).unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_tree_requires_row_key() {
    let result = Table::<Value>::new(TableConfig::new().tree(true).row_key(None), columns(), tree());
    assert!(matches!(result, Err(TableError::MissingRowKey)));
}

#[test]
fn test_tree_accepts_key_hook() {
    let hooks = TableHooks::new().row_key(|record: &Value, _| record["key"].to_string());
    let result = Table::with_hooks(TableConfig::new().tree(true).row_key(None), hooks, columns(), tree());
    assert!(result.is_ok());
}

#[test]
fn test_missing_cell_pair_fails_fast() {
    let mut columns = columns();
    columns[1].cell = None;
    let result = Table::<Value>::new(TableConfig::new(), columns, rows(1));
    assert!(matches!(result, Err(TableError::MissingCellPair { index: 1 })));
}

#[test]
fn test_unkeyed_rows_are_allowed_outside_tree_mode() {
    let table = Table::new(TableConfig::new().row_key(None), columns(), rows(2)).unwrap();
    assert_eq!(table.rows()[1].key, "_1");
}

// ============================================================================
// Geometry Tests
// ============================================================================

#[test]
fn test_flex_columns_fill_table() {
    let columns = vec![
        ColumnSpec::new("a").flex_grow(1.0),
        ColumnSpec::new("b").flex_grow(2.0),
    ];
    let table = Table::new(TableConfig::new().width(1000.0), columns, rows(1)).unwrap();
    let layout = table.column_layout();

    assert!((layout.total_width - 1000.0).abs() < 1e-9);
    assert!((layout.columns[1].width - 2.0 * layout.columns[0].width).abs() < 1e-9);
    assert!((table.row_width() - 1000.0).abs() < 1e-9);
}

#[test]
fn test_row_width_is_at_least_table_width() {
    let columns = vec![ColumnSpec::new("a").width(100.0)];
    let table = Table::new(TableConfig::new().width(400.0), columns, rows(1)).unwrap();
    assert_eq!(table.row_width(), 400.0);
}

#[test]
fn test_measure_reads_container_width() {
    let mut table = Table::new(TableConfig::new(), columns(), rows(3)).unwrap();
    assert_eq!(table.table_width(), 0.0);

    table.measure(&TextMetrics::new(Size::new(500.0, 300.0)));
    assert_eq!(table.table_width(), 500.0);
    assert_eq!(table.viewport().table_width, 500.0);
}

#[test]
fn test_container_resize_is_debounced() {
    let start = Instant::now();
    let mut table = Table::new(TableConfig::new(), columns(), rows(3)).unwrap();
    table.measure(&TextMetrics::new(Size::new(500.0, 300.0)));
    table.wheel(50.0, 0.0, start);
    assert_eq!(table.scroll_x(), -50.0);

    table.on_container_resize(520.0, start);
    table.on_container_resize(550.0, start + Duration::from_millis(100));

    table.tick(start + Duration::from_millis(450));
    assert_eq!(table.table_width(), 500.0);
    assert_eq!(table.scroll_x(), -50.0);

    table.tick(start + Duration::from_millis(500));
    assert_eq!(table.table_width(), 550.0);
    assert_eq!(table.scroll_x(), 0.0);
}

#[test]
fn test_fixed_width_ignores_container_resize() {
    let start = Instant::now();
    let mut table = table(3);
    table.on_container_resize(900.0, start);
    table.tick(start + Duration::from_secs(1));
    assert_eq!(table.table_width(), 400.0);
}

#[test]
fn test_auto_height() {
    let config = TableConfig::new().width(400.0).auto_height(true).min_height(100.0);
    let mut table = Table::new(config, columns(), rows(5)).unwrap();
    assert_eq!(table.table_height(), 40.0 + 5.0 * 46.0);
    assert!(table.wheel(0.0, 100.0, Instant::now()).is_empty());

    table.set_data(rows(0));
    assert_eq!(table.table_height(), 100.0);
}

// ============================================================================
// Resize Tests
// ============================================================================

#[test]
fn test_resize_commits_override() {
    let mut table = table(3);
    let now = Instant::now();

    assert!(table.resize_start(0, 100.0));
    table.pointer_move(150.0, 0.0, now);

    let plan = table.plan();
    assert!(plan.is_column_resizing);
    assert_eq!(plan.resize_guide, Some(150.0));

    let events = table.pointer_up();
    assert_eq!(
        events,
        vec![TableEvent::ColumnResized {
            data_key: "id".to_string(),
            index: 0,
            width: 150.0,
        }]
    );

    let layout = table.column_layout();
    assert_eq!(layout.columns[0].width, 150.0);
    assert_eq!(layout.columns[1].left, 150.0);
    assert_eq!(table.overrides().get("id", 0), Some(150.0));
    assert!(!table.is_column_resizing());

    // Survives a data change
    table.set_data(rows(5));
    assert_eq!(table.column_layout().columns[0].width, 150.0);
}

#[test]
fn test_resize_clamps() {
    let mut table = table(3);
    let now = Instant::now();

    table.resize_start(0, 100.0);
    table.pointer_move(-1000.0, 0.0, now);
    table.pointer_up();
    assert_eq!(table.column_layout().columns[0].width, 20.0);

    table.resize_start(0, 0.0);
    table.pointer_move(50_000.0, 0.0, now);
    table.pointer_up();
    assert_eq!(table.column_layout().columns[0].width, 20_000.0);
}

#[test]
fn test_resize_refused_for_fixed_width_and_flex_columns() {
    let columns = vec![
        ColumnSpec::new("a").width(100.0),
        ColumnSpec::new("b").flex_grow(1.0).resizable(),
    ];
    let mut table = Table::new(TableConfig::new().width(400.0), columns, rows(1)).unwrap();
    assert!(!table.resize_start(0, 0.0));
    assert!(!table.resize_start(1, 0.0));
    assert!(!table.resize_start(7, 0.0));
    assert!(table.interaction().is_idle());
}

#[test]
fn test_resize_guide_follows_scroll() {
    let mut table = table(3);
    table.wheel(40.0, 0.0, Instant::now());
    table.resize_start(0, 100.0);
    assert_eq!(table.plan().resize_guide, Some(100.0 - 40.0));
}

// ============================================================================
// Sort Tests
// ============================================================================

#[test]
fn test_sort_toggle() {
    let mut table = table(3);

    let events = table.header_click(1);
    assert_eq!(
        events,
        vec![TableEvent::SortChanged(SortChange {
            column: "name".to_string(),
            direction: SortDirection::Desc,
        })]
    );

    let events = table.header_click(1);
    assert_eq!(
        events,
        vec![TableEvent::SortChanged(SortChange {
            column: "name".to_string(),
            direction: SortDirection::Asc,
        })]
    );
    assert_eq!(table.sort().column(), Some("name"));
}

#[test]
fn test_unsortable_header_does_nothing() {
    let mut table = table(3);
    assert!(table.header_click(2).is_empty());
    assert!(table.header_click(42).is_empty());
    assert_eq!(table.sort().column(), None);
}

#[test]
fn test_configured_sort() {
    let config = TableConfig::new().sort("name", SortDirection::Asc);
    let mut table = Table::new(config, columns(), rows(1)).unwrap();
    assert_eq!(table.sort().direction_for("name"), Some(SortDirection::Asc));

    let events = table.header_click(1);
    assert!(matches!(
        &events[..],
        [TableEvent::SortChanged(SortChange { direction: SortDirection::Desc, .. })]
    ));
}

// ============================================================================
// Scroll Tests
// ============================================================================

#[test]
fn test_wheel_clamps_to_bottom() {
    // 10 rows of 46 = 460 of content in a 160 body
    let mut table = table(10);
    let now = Instant::now();

    let events = table.wheel(0.0, 1000.0, now);
    assert_eq!(events, vec![TableEvent::Scrolled { x: 0.0, y: -310.0 }]);

    assert!(table.wheel(0.0, 1000.0, now).is_empty());
    assert_eq!(table.scroll_y(), -310.0);

    table.wheel(0.0, -50.0, now);
    assert_eq!(table.scroll_y(), -260.0);
}

#[test]
fn test_wheel_rejected_at_origin() {
    let mut table = table(10);
    assert!(table.wheel(0.0, -20.0, Instant::now()).is_empty());
    assert!(table.wheel(0.0, 0.0, Instant::now()).is_empty());
}

#[test]
fn test_disabled_scroll() {
    let config = TableConfig::new().width(400.0).disabled_scroll(true);
    let mut table = Table::new(config, columns(), rows(10)).unwrap();

    assert!(table.wheel(0.0, 100.0, Instant::now()).is_empty());
    let plan = table.plan();
    assert!(plan.vertical.is_none());
    assert!(plan.horizontal.is_none());
}

#[test]
fn test_loading_blocks_wheel() {
    let mut table = table(10);
    table.set_loading(true);

    assert!(table.wheel(0.0, 100.0, Instant::now()).is_empty());
    assert_eq!(table.plan().loading.as_deref(), Some("Loading..."));

    table.set_loading(false);
    assert!(!table.wheel(0.0, 100.0, Instant::now()).is_empty());
}

#[test]
fn test_scrolling_flag_clears_when_idle() {
    let start = Instant::now();
    let mut table = table(10);

    table.wheel(0.0, 10.0, start);
    assert!(table.is_scrolling());
    assert!(table.plan().is_scrolling);

    assert!(table.tick(start + Duration::from_millis(100)).is_empty());
    assert_eq!(table.tick(start + Duration::from_millis(150)), vec![TableEvent::ScrollIdle]);
    assert!(!table.is_scrolling());
}

#[test]
fn test_wheel_moves_thumb() {
    let mut table = table(10);
    table.wheel(0.0, 115.0, Instant::now());
    // 460 of content on a 160 track
    assert_eq!(table.scrollbar(Axis::Vertical).offset(), 40.0);
}

#[test]
fn test_touch_scrolls_with_finger() {
    let now = Instant::now();
    let mut table = table(10);

    assert!(table.touch_move(0.0, 60.0, now).is_empty());
    table.touch_start(0.0, 100.0);
    table.touch_move(0.0, 60.0, now);
    assert_eq!(table.scroll_y(), -40.0);
    table.touch_move(0.0, 50.0, now);
    assert_eq!(table.scroll_y(), -50.0);
}

#[test]
fn test_body_scroll_is_taken_over() {
    let now = Instant::now();
    let mut table = table(10);

    assert!(table.body_scroll(0.0, 0.0, now).is_empty());
    let events = table.body_scroll(0.0, 30.0, now);
    assert_eq!(events, vec![TableEvent::Scrolled { x: 0.0, y: -30.0 }]);
}

#[test]
fn test_programmatic_scroll() {
    let now = Instant::now();
    let mut table = table(10);

    table.scroll_top(92.0, now);
    assert_eq!(table.scroll_y(), -92.0);
    assert_eq!(table.scrollbar(Axis::Vertical).offset(), 32.0);

    table.scroll_top(10_000.0, now);
    assert_eq!(table.scroll_y(), -310.0);

    table.scroll_left(50.0, now);
    assert_eq!(table.scroll_x(), -50.0);
    table.scroll_left(0.0, now);
    assert_eq!(table.scroll_x(), 0.0);
}

#[test]
fn test_scrollbar_thumb_drag() {
    let now = Instant::now();
    let mut table = table(10);

    // Thumb starts at the top of the track, just below the header
    assert!(table.scrollbar_press(Axis::Vertical, 395.0, 50.0, now).is_empty());
    assert!(table.scrollbar(Axis::Vertical).is_pressed());

    let events = table.pointer_move(395.0, 60.0, now);
    assert_eq!(events, vec![TableEvent::Scrolled { x: 0.0, y: -28.75 }]);
    assert_eq!(table.scrollbar(Axis::Vertical).offset(), 10.0);

    table.pointer_up();
    assert!(!table.scrollbar(Axis::Vertical).is_pressed());
    assert!(table.pointer_move(395.0, 100.0, now).is_empty());
}

#[test]
fn test_scrollbar_track_click_jumps() {
    let now = Instant::now();
    let mut table = table(10);

    let events = table.scrollbar_press(Axis::Vertical, 395.0, 160.0, now);
    assert_eq!(events.len(), 1);
    assert!(table.scroll_y() < 0.0);
    assert!(table.scrollbar(Axis::Vertical).offset() > 0.0);
    assert!(table.interaction().is_idle());
}

#[test]
fn test_hidden_scrollbar_ignores_press() {
    let now = Instant::now();
    let mut table = table(2);
    assert!(table.scrollbar_press(Axis::Vertical, 395.0, 100.0, now).is_empty());
    assert!(table.interaction().is_idle());
}

#[test]
fn test_column_change_resets_horizontal_scroll() {
    let now = Instant::now();
    let mut table = table(3);
    table.wheel(100.0, 0.0, now);
    assert_eq!(table.scroll_x(), -100.0);

    let mut wider = columns();
    wider.push(ColumnSpec::new("phone").width(100.0));
    table.set_columns(wider).unwrap();
    assert_eq!(table.scroll_x(), 0.0);
}

#[test]
fn test_same_column_count_keeps_horizontal_scroll() {
    let now = Instant::now();
    let mut table = table(3);
    table.wheel(100.0, 0.0, now);

    let mut wider = columns();
    wider[2].width = 400.0;
    table.set_columns(wider).unwrap();
    assert_eq!(table.scroll_x(), -100.0);
}

#[test]
fn test_shrinking_content_resets_vertical_scroll() {
    let now = Instant::now();
    let mut table = table(10);
    table.wheel(0.0, 1000.0, now);
    assert_eq!(table.scroll_y(), -310.0);

    table.set_data(rows(2));
    assert_eq!(table.scroll_y(), 0.0);
    assert_eq!(table.scrollbar(Axis::Vertical).offset(), 0.0);
}

#[test]
fn test_same_data_is_ignored() {
    let data = Rc::new(rows(3));
    let mut table = Table::new(TableConfig::new().width(400.0), columns(), Rc::clone(&data)).unwrap();
    table.set_data(Rc::clone(&data));
    assert!(Rc::ptr_eq(table.data(), &data));
    assert_eq!(table.body_row_count(), 3);
}

// ============================================================================
// Windowing Tests
// ============================================================================

#[test]
fn test_virtualized_plan_renders_window() {
    let config = TableConfig::new().width(400.0).virtualized(true);
    let mut table = Table::new(config, columns(), rows(100)).unwrap();

    let plan = table.plan();
    assert_eq!(plan.rows.len(), 6);
    assert_eq!(plan.top_pad, 0.0);
    assert_eq!(plan.bottom_pad, 94.0 * 46.0);
    assert_eq!(plan.total_height(), plan.content_height);

    table.wheel(0.0, 460.0, Instant::now());
    let plan = table.plan();
    assert_eq!(plan.rows[0].index, 9);
    assert_eq!(plan.rows[0].top, 9.0 * 46.0);
    assert_eq!(plan.rows.len(), 7);
    assert_eq!(plan.total_height(), 4600.0);
}

#[test]
fn test_plain_table_renders_every_row() {
    let table = table(100);
    let plan = table.plan();
    assert_eq!(plan.rows.len(), 100);
    assert_eq!(plan.bottom_pad, 0.0);
}

#[test]
fn test_word_wrap_measures_rows() {
    let columns = vec![ColumnSpec::new("name").width(100.0)];
    let data = vec![
        json!({"key": 1, "name": "hello world foo"}),
        json!({"key": 2, "name": "x"}),
    ];
    let config = TableConfig::new().word_wrap(true).virtualized(true);
    let mut table = Table::new(config, columns, data).unwrap();

    table.measure(&TextMetrics::new(Size::new(400.0, 300.0)));

    let plan = table.plan();
    // (100 - 20) / 8 = 10 columns: two lines of 20, plus padding
    assert_eq!(plan.rows[0].height, 66.0);
    assert_eq!(plan.rows[1].height, 46.0);
    assert_eq!(table.row_heights().get(0), Some(40.0));
    assert_eq!(plan.rows.len(), 2);
}

#[test]
fn test_word_wrap_disables_windowing() {
    let config = TableConfig::new().width(400.0).virtualized(true).word_wrap(true);
    let mut table = Table::new(config, columns(), rows(100)).unwrap();
    table.measure(&TextMetrics::new(Size::new(400.0, 300.0)));

    let plan = table.plan();
    assert_eq!(plan.rows.len(), 100);
    assert_eq!(plan.top_pad, 0.0);
    assert_eq!(plan.bottom_pad, 0.0);

    table.wheel(0.0, 1000.0, Instant::now());
    let plan = table.plan();
    assert_eq!(plan.rows.len(), 100);
    assert_eq!(plan.rows[0].index, 0);
    assert_eq!(plan.top_pad, 0.0);
}

#[test]
fn test_column_resize_drops_wrapped_heights() {
    let columns = vec![ColumnSpec::new("name").header("Name").width(100.0).resizable()];
    let data = vec![json!({"key": 1, "name": "hello world foo bar baz"})];
    let metrics = TextMetrics::new(Size::new(400.0, 300.0));
    let mut table = Table::new(TableConfig::new().word_wrap(true), columns, data).unwrap();
    assert!(table.needs_measure());

    table.measure(&metrics);
    assert!(!table.needs_measure());
    // 10 columns per line: "hello" / "world foo" / "bar baz"
    assert_eq!(table.plan().rows[0].height, 86.0);

    table.resize_start(0, 100.0);
    table.pointer_move(200.0, 0.0, Instant::now());
    table.pointer_up();

    let plan = table.plan();
    assert!(plan.needs_measure);
    assert!(table.row_heights().is_empty());
    assert_eq!(plan.rows[0].height, 46.0);

    // 22 columns per line: "hello world foo bar" / "baz"
    table.measure(&metrics);
    assert!(!table.needs_measure());
    assert_eq!(table.plan().rows[0].height, 66.0);
}

#[test]
fn test_geometry_changes_request_measure() {
    let start = Instant::now();
    let columns = vec![ColumnSpec::new("name").header("Name").flex_grow(1.0)];
    let data = vec![json!({"key": 1, "name": "hello world foo bar baz"})];
    let mut table = Table::new(TableConfig::new().word_wrap(true), columns, data).unwrap();
    table.measure(&TextMetrics::new(Size::new(400.0, 300.0)));
    assert!(!table.needs_measure());

    table.on_container_resize(600.0, start);
    table.tick(start + Duration::from_millis(400));
    assert!(table.needs_measure());

    table.measure(&TextMetrics::new(Size::new(600.0, 300.0)));
    assert!(!table.needs_measure());

    table
        .set_columns(vec![ColumnSpec::new("name").header("Name").width(300.0)])
        .unwrap();
    assert!(table.needs_measure());
}

#[test]
fn test_plain_rows_never_need_measure() {
    let mut table = table(3);
    table.measure(&TextMetrics::new(Size::new(400.0, 300.0)));
    assert!(!table.needs_measure());
    assert!(!table.plan().needs_measure);
}

#[test]
fn test_custom_row_height() {
    let hooks = TableHooks::new().row_height(|record: &Value| record.get("tall").and_then(Value::as_f64));
    let data = vec![json!({"key": 1, "tall": 80}), json!({"key": 2})];
    let mut table = Table::with_hooks(TableConfig::new().width(400.0), hooks, columns(), data).unwrap();

    let plan = table.plan();
    assert_eq!(plan.rows[0].height, 80.0);
    assert_eq!(plan.rows[1].height, 46.0);
    assert_eq!(plan.rows[1].top, 80.0);
    assert_eq!(table.content_height(), 126.0);

    table.set_data(vec![json!({"key": 3, "tall": 0})]);
    assert_eq!(table.plan().rows[0].height, 46.0);
}

#[test]
fn test_empty_message() {
    let table = table(0);
    let plan = table.plan();
    assert!(plan.rows.is_empty());
    assert_eq!(plan.message.as_deref(), Some("No data found"));
    assert!(table.plan().loading.is_none());
}

#[test]
fn test_row_at() {
    let now = Instant::now();
    let mut table = table(10);

    assert_eq!(table.row_at(50.0).map(|row| row.key.as_str()), Some("1"));
    table.scroll_top(46.0, now);
    assert_eq!(table.row_at(0.0).map(|row| row.key.as_str()), Some("1"));
    assert!(table.row_at(10_000.0).is_none());
}

// ============================================================================
// Tree Tests
// ============================================================================

fn tree_table(config: TableConfig) -> Table<Value> {
    Table::new(config.width(400.0).tree(true), columns(), tree()).unwrap()
}

#[test]
fn test_tree_starts_collapsed() {
    let table = tree_table(TableConfig::new());
    let keys: Vec<String> = table.plan().rows.into_iter().map(|row| row.key).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(table.rows().len(), 5);
}

#[test]
fn test_tree_toggle() {
    let mut table = tree_table(TableConfig::new());

    let events = table.toggle_expanded("a");
    assert_eq!(
        events,
        vec![TableEvent::ExpandChanged {
            open: true,
            key: "a".to_string(),
        }]
    );

    let plan = table.plan();
    let keys: Vec<&str> = plan.rows.iter().map(|row| row.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "a1", "a2", "b"]);

    let a1 = plan.row("a1").unwrap();
    assert_eq!(a1.depth, 1);
    assert_eq!(a1.indent, 40.0);
    assert!(a1.has_children);
    assert!(!a1.expanded);
    assert!(plan.row("a").unwrap().expanded);

    let events = table.toggle_expanded("a");
    assert!(matches!(&events[..], [TableEvent::ExpandChanged { open: false, .. }]));
    assert_eq!(table.body_row_count(), 2);
}

#[test]
fn test_tree_expand_all() {
    let table = tree_table(TableConfig::new().default_expand_all_rows(true));
    assert_eq!(table.body_row_count(), 5);
}

#[test]
fn test_tree_default_expanded_keys() {
    // a1 is expanded but hidden under a collapsed root
    let table = tree_table(TableConfig::new().default_expanded_row_keys(["a1"]));
    assert_eq!(table.body_row_count(), 2);
}

#[test]
fn test_controlled_expansion_only_reports() {
    let mut table = tree_table(TableConfig::new().expanded_row_keys(["a"]));
    assert_eq!(table.body_row_count(), 4);

    let events = table.toggle_expanded("a");
    assert!(matches!(&events[..], [TableEvent::ExpandChanged { open: false, .. }]));
    assert_eq!(table.body_row_count(), 4);

    table.set_expanded_row_keys(["a", "a1"]);
    assert_eq!(table.body_row_count(), 5);
}

// ============================================================================
// Detail Row Tests
// ============================================================================

#[test]
fn test_expanded_detail_row_adds_height() {
    let hooks = TableHooks::new().detail(|_: &Value| true);
    let config = TableConfig::new().width(400.0).default_expanded_row_keys(["1"]);
    let table = Table::with_hooks(config, hooks, columns(), rows(3)).unwrap();

    let plan = table.plan();
    assert_eq!(plan.rows[1].height, 146.0);
    assert_eq!(plan.rows[1].expanded_height, 100.0);
    assert_eq!(plan.rows[0].expanded_height, 0.0);
    assert_eq!(plan.rows[2].top, 46.0 + 146.0);
    assert_eq!(table.content_height(), 3.0 * 46.0 + 100.0);
}

#[test]
fn test_detail_rows_need_hook() {
    let config = TableConfig::new().width(400.0).default_expanded_row_keys(["1"]);
    let table = Table::new(config, columns(), rows(3)).unwrap();
    assert_eq!(table.plan().rows[1].height, 46.0);
}

#[test]
fn test_expand_all_with_detail_includes_leaves() {
    let hooks = TableHooks::new().detail(|_: &Value| true);
    let config = TableConfig::new().width(400.0).default_expand_all_rows(true);
    let table = Table::with_hooks(config, hooks, columns(), rows(2)).unwrap();
    assert_eq!(table.content_height(), 2.0 * 146.0);
}

// ============================================================================
// Cell Tests
// ============================================================================

#[test]
fn test_span_merges_empty_cells() {
    let columns = vec![
        ColumnSpec::new("id").header("ID").width(100.0),
        ColumnSpec::new("name").header("Name").width(200.0).col_span(2),
        ColumnSpec::new("email").header("Email").width(300.0),
    ];
    let table = Table::new(TableConfig::new().width(400.0), columns, rows(1)).unwrap();

    let plan = table.plan();
    let cells = &plan.rows[0].cells;
    assert_eq!(cells.cell(1).map(|c| c.width), Some(500.0));
    assert!(cells.cell(2).is_some_and(|c| c.removed));
    assert_eq!(cells.rendered().count(), 2);

    // Header cells all have content
    let header = plan.header.as_ref().unwrap();
    assert_eq!(header.rendered().count(), 3);
}

#[test]
fn test_hidden_header() {
    let table = Table::new(TableConfig::new().width(400.0).show_header(false), columns(), rows(1)).unwrap();
    let plan = table.plan();
    assert!(plan.header.is_none());
    assert_eq!(plan.header_height, 0.0);
}

#[test]
fn test_pinned_groups_and_shadows() {
    let columns = vec![
        ColumnSpec::new("id").header("ID").width(100.0).fixed(Fixed::Left),
        ColumnSpec::new("name").header("Name").width(200.0),
        ColumnSpec::new("email").header("Email").width(300.0).fixed(Fixed::Right),
    ];
    let mut table = Table::new(TableConfig::new().width(400.0), columns, rows(20)).unwrap();

    let plan = table.plan();
    let header = plan.header.as_ref().unwrap();
    assert_eq!(header.left.len(), 1);
    assert_eq!(header.scroll.len(), 1);
    assert_eq!(header.right_offset, 400.0 - 300.0 - 10.0);
    assert_eq!(plan.rows[0].cells.right[0].left, 0.0);

    assert!(!plan.shadows.header);
    assert!(!plan.shadows.left);
    assert!(plan.shadows.right);

    let now = Instant::now();
    table.wheel(1000.0, 10.0, now);
    let plan = table.plan();
    assert_eq!(plan.scroll_x, -210.0);
    assert!(plan.shadows.header);
    assert!(plan.shadows.left);
    assert!(!plan.shadows.right);
}

#[test]
fn test_pinned_columns_do_not_group_without_overflow() {
    let columns = vec![
        ColumnSpec::new("id").width(100.0).fixed(Fixed::Left),
        ColumnSpec::new("name").width(100.0),
    ];
    let table = Table::new(TableConfig::new().width(400.0), columns, rows(1)).unwrap();
    let plan = table.plan();
    assert!(!plan.rows[0].cells.is_grouped());
    assert!(!plan.shadows.left && !plan.shadows.right);
}

#[test]
fn test_render_sink_receives_plan() {
    let table = table(3);
    let mut seen = 0;
    table.render(&mut |plan: &virtable::RenderPlan| seen = plan.rows.len());
    assert_eq!(seen, 3);
}
