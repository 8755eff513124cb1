//! The table engine: owns derived state and turns input into render plans.
//!
//! A [`Table`] holds the caller's data and columns behind `Rc`s and derives
//! everything else from them: flattened rows, column geometry, row
//! heights, scroll extents. Every mutation re-derives what it touched
//! before returning, so [`Table::plan`] always reflects the latest input.

use std::rc::Rc;
use std::time::Instant;

use crate::column::{validate_columns, ColumnSpec};
use crate::config::TableConfig;
use crate::debounce::{Debouncer, RESIZE_DEBOUNCE_MS};
use crate::error::{Result, TableError};
use crate::event::{InputEvent, TableEvent};
use crate::interaction::{ColumnResize, Interaction};
use crate::layout::{CellGroups, CellSlot, ColumnLayout, ColumnOverrides, GeometryCache, GeometryKey};
use crate::measure::{CellProbe, MeasurementProvider};
use crate::plan::{RenderPlan, RenderSink, Shadows, VisibleRow};
use crate::record::{Record, RowKey};
use crate::rows::{
    find_all_parents, find_row_keys, flatten, indent_for, passthrough, record_at, ExpansionState,
    FlattenedRow, HeightPolicy, RowHeightCache,
};
use crate::scroll::{Axis, Scrollbar, ViewportState, SCROLLBAR_WIDTH};
use crate::sort::{SortDirection, SortState};
use crate::window::{compute_window, ScrollActivity, Window};

type KeyFn<R> = Box<dyn Fn(&R, usize) -> String>;
type HeightFn<R> = Box<dyn Fn(&R) -> Option<f64>>;
type DetailFn<R> = Box<dyn Fn(&R) -> bool>;

/// Behavior supplied as code rather than configuration.
pub struct TableHooks<R> {
    row_key: Option<KeyFn<R>>,
    row_height: Option<HeightFn<R>>,
    detail: Option<DetailFn<R>>,
}

impl<R> TableHooks<R> {
    pub fn new() -> Self {
        Self {
            row_key: None,
            row_height: None,
            detail: None,
        }
    }

    /// Compute row keys from the record and its index. Takes precedence
    /// over the configured key field.
    pub fn row_key(mut self, f: impl Fn(&R, usize) -> String + 'static) -> Self {
        self.row_key = Some(Box::new(f));
        self
    }

    /// Per-row height. Returning `None` (or a non-positive height) keeps
    /// the configured row height.
    pub fn row_height(mut self, f: impl Fn(&R) -> Option<f64> + 'static) -> Self {
        self.row_height = Some(Box::new(f));
        self
    }

    /// Rows for which this returns true get an expandable detail region
    /// below their cells. Ignored in tree mode.
    pub fn detail(mut self, f: impl Fn(&R) -> bool + 'static) -> Self {
        self.detail = Some(Box::new(f));
        self
    }
}

impl<R> Default for TableHooks<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// A row that takes part in the body layout.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BodyRow {
    /// Position in the flattened row list.
    row: usize,
    top: f64,
    height: f64,
    detail: bool,
}

/// A virtualized table.
///
/// # Example
///
/// ```
/// use std::time::Instant;
/// use serde_json::json;
/// use virtable::{ColumnSpec, Table, TableConfig};
///
/// let columns = vec![ColumnSpec::new("name").header("Name").width(200.0)];
/// let data = vec![json!({"key": 1, "name": "ada"}), json!({"key": 2, "name": "grace"})];
/// let mut table = Table::new(TableConfig::new().width(400.0), columns, data).unwrap();
///
/// table.wheel(0.0, 30.0, Instant::now());
/// let plan = table.plan();
/// assert_eq!(plan.rows.len(), 2);
/// ```
pub struct Table<R: Record> {
    config: TableConfig,
    row_key: RowKey<R>,
    row_height: Option<HeightFn<R>>,
    detail: Option<DetailFn<R>>,

    data: Rc<Vec<R>>,
    columns: Rc<Vec<ColumnSpec>>,
    columns_version: u64,
    column_count: usize,

    rows: Vec<FlattenedRow>,
    expansion: ExpansionState,
    /// Expansion is owned by the caller; toggles only report.
    controlled_expansion: bool,

    overrides: ColumnOverrides,
    geometry: GeometryCache,
    layout: Rc<ColumnLayout>,
    heights: RowHeightCache,
    body: Vec<BodyRow>,

    width: f64,
    viewport: ViewportState,
    scrollbar_x: Scrollbar,
    scrollbar_y: Scrollbar,
    interaction: Interaction,
    touch: Option<(f64, f64)>,
    sort: SortState,
    activity: ScrollActivity,
    resize_timer: Debouncer,
    pending_width: Option<f64>,
}

impl<R: Record> Table<R> {
    pub fn new(
        config: TableConfig,
        columns: impl Into<Rc<Vec<ColumnSpec>>>,
        data: impl Into<Rc<Vec<R>>>,
    ) -> Result<Self> {
        Self::with_hooks(config, TableHooks::new(), columns, data)
    }

    /// Build a table, failing on configuration errors.
    pub fn with_hooks(
        config: TableConfig,
        hooks: TableHooks<R>,
        columns: impl Into<Rc<Vec<ColumnSpec>>>,
        data: impl Into<Rc<Vec<R>>>,
    ) -> Result<Self> {
        let columns = columns.into();
        let data = data.into();
        validate_columns(&columns)?;

        let row_key = match (hooks.row_key, config.row_key.as_deref()) {
            (Some(f), _) => RowKey::Func(f),
            (None, Some(field)) if !field.is_empty() => RowKey::field(field),
            _ if config.is_tree => return Err(TableError::MissingRowKey),
            // Unkeyed rows fall back to synthetic keys
            _ => RowKey::field(""),
        };

        let rows = derive_rows(&config, data.as_slice(), &row_key);

        let (expansion, controlled_expansion) = match &config.expanded_row_keys {
            Some(keys) => (ExpansionState::from_keys(keys.iter().cloned()), true),
            None if config.default_expand_all_rows => {
                let keys = find_row_keys(data.as_slice(), &row_key, hooks.detail.is_some());
                (ExpansionState::from_keys(keys), false)
            }
            None => (
                ExpansionState::from_keys(config.default_expanded_row_keys.iter().cloned()),
                false,
            ),
        };

        let mut sort = SortState::new(config.default_sort_type);
        if config.sort_column.is_some() || config.sort_type.is_some() {
            sort.set(
                config.sort_column.clone(),
                config.sort_type.unwrap_or(config.default_sort_type),
            );
        }

        let mut table = Self {
            width: config.width.unwrap_or(0.0),
            row_key,
            row_height: hooks.row_height,
            detail: hooks.detail,
            column_count: columns.len(),
            data,
            columns,
            columns_version: 0,
            rows,
            expansion,
            controlled_expansion,
            overrides: ColumnOverrides::new(),
            geometry: GeometryCache::new(),
            layout: Rc::new(ColumnLayout::default()),
            heights: RowHeightCache::new(),
            body: Vec::new(),
            viewport: ViewportState::new(),
            scrollbar_x: Scrollbar::new(Axis::Horizontal),
            scrollbar_y: Scrollbar::new(Axis::Vertical),
            interaction: Interaction::Idle,
            touch: None,
            sort,
            activity: ScrollActivity::new(),
            resize_timer: Debouncer::new(RESIZE_DEBOUNCE_MS),
            pending_width: None,
            config,
        };
        table.update_layout();

        log::debug!(
            "[table] created with {} columns, {} rows (tree: {})",
            table.columns.len(),
            table.rows.len(),
            table.config.is_tree
        );
        Ok(table)
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Replace the data. Data that is the same allocation is ignored.
    pub fn set_data(&mut self, data: impl Into<Rc<Vec<R>>>) {
        let data = data.into();
        if Rc::ptr_eq(&self.data, &data) {
            return;
        }
        self.data = data;
        self.rows = derive_rows(&self.config, self.data.as_slice(), &self.row_key);
        self.heights.clear();
        log::debug!("[table] data replaced, {} rows", self.rows.len());
        self.update_layout();
    }

    /// Replace the columns. Resize overrides survive for columns that keep
    /// their data key and position.
    pub fn set_columns(&mut self, columns: impl Into<Rc<Vec<ColumnSpec>>>) -> Result<()> {
        let columns = columns.into();
        if Rc::ptr_eq(&self.columns, &columns) {
            return Ok(());
        }
        validate_columns(&columns)?;

        self.columns = columns;
        self.columns_version += 1;
        self.overrides.retain_columns(self.columns.as_slice());
        log::debug!("[columns] replaced, version {}", self.columns_version);
        self.update_layout();
        Ok(())
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
    }

    /// Sync the sort state after the data source sorted on its own.
    pub fn set_sort(&mut self, column: Option<&str>, direction: SortDirection) {
        self.sort.set(column.map(str::to_string), direction);
    }

    /// Take control of expansion: the table shows exactly these keys and
    /// toggles only report.
    pub fn set_expanded_row_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expansion = ExpansionState::from_keys(keys);
        self.controlled_expansion = true;
        self.update_layout();
    }

    /// Read the container size and, in word-wrap mode, every row height.
    pub fn measure(&mut self, provider: &dyn MeasurementProvider) {
        if self.config.width.is_none() {
            let width = provider.container().width;
            if width != self.width {
                self.apply_width(width);
            }
        }
        if self.config.word_wrap {
            self.measure_rows(provider);
        }
    }

    /// Measure the tallest cell of every body row.
    pub fn measure_rows(&mut self, provider: &dyn MeasurementProvider) {
        let mut measured = Vec::with_capacity(self.body.len());

        for body in &self.body {
            let Some(record) = self
                .rows
                .get(body.row)
                .and_then(|row| record_at(self.data.as_slice(), &row.path))
            else {
                continue;
            };

            let tallest = self
                .layout
                .columns
                .iter()
                .map(|column| {
                    let probe = CellProbe {
                        row: body.row,
                        column: column.index,
                        data_key: &column.data_key,
                        text: record.text(&column.data_key),
                        width: column.width,
                    };
                    provider.cell(&probe).height
                })
                .fold(0.0, f64::max);
            measured.push((body.row, tallest));
        }

        log::debug!("[rows] measured {} rows", measured.len());
        for (row, height) in measured {
            self.heights.set(row, height);
        }
        self.update_layout();
    }

    /// The container changed width. Applied once resizing settles.
    pub fn on_container_resize(&mut self, width: f64, now: Instant) {
        if self.config.width.is_some() {
            return;
        }
        self.pending_width = Some(width);
        self.resize_timer.trigger(now);
    }

    /// Run due timers.
    pub fn tick(&mut self, now: Instant) -> Vec<TableEvent> {
        let mut events = Vec::new();
        if self.resize_timer.should_execute(now) {
            if let Some(width) = self.pending_width.take() {
                self.apply_width(width);
            }
        }
        if self.activity.poll(now) {
            events.push(TableEvent::ScrollIdle);
        }
        events
    }

    /// Dispatch a raw input event.
    pub fn handle(&mut self, event: InputEvent, now: Instant) -> Vec<TableEvent> {
        match event {
            InputEvent::Wheel { delta_x, delta_y } => self.wheel(delta_x, delta_y, now),
            InputEvent::TouchStart { x, y } => {
                self.touch_start(x, y);
                Vec::new()
            }
            InputEvent::TouchMove { x, y } => self.touch_move(x, y, now),
            InputEvent::BodyScroll { left, top } => self.body_scroll(left, top, now),
            InputEvent::ScrollbarDown { axis, x, y } => self.scrollbar_press(axis, x, y, now),
            InputEvent::ResizeHandleDown { column, x } => {
                self.resize_start(column, x);
                Vec::new()
            }
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y, now),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::HeaderClick { column } => self.header_click(column),
            InputEvent::Toggle { key } => self.toggle_expanded(&key),
            InputEvent::ContainerResized { width } => {
                self.on_container_resize(width, now);
                Vec::new()
            }
        }
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Scroll by a wheel delta. Each axis only moves if it has room to.
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64, now: Instant) -> Vec<TableEvent> {
        if self.config.disabled_scroll || self.config.loading {
            return Vec::new();
        }

        let dx = if self.viewport.can_scroll_x(delta_x) { delta_x } else { 0.0 };
        let dy = if self.viewport.can_scroll_y(delta_y) { delta_y } else { 0.0 };
        if dx == 0.0 && dy == 0.0 {
            log::trace!("[scroll] wheel ({}, {}) rejected", delta_x, delta_y);
            return Vec::new();
        }
        self.scroll_by(dx, dy, now)
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.touch = Some((x, y));
    }

    /// Follow a touch drag. Content moves with the finger.
    pub fn touch_move(&mut self, x: f64, y: f64, now: Instant) -> Vec<TableEvent> {
        let Some((last_x, last_y)) = self.touch.replace((x, y)) else {
            return Vec::new();
        };
        self.wheel(last_x - x, last_y - y, now)
    }

    /// The native body element scrolled to `(left, top)`. The offset is
    /// taken over as a synthetic scroll; the host resets the native one.
    pub fn body_scroll(&mut self, left: f64, top: f64, now: Instant) -> Vec<TableEvent> {
        if left == 0.0 && top == 0.0 {
            return Vec::new();
        }
        self.scroll_by(left, top, now)
    }

    /// Scroll so the body shows content from `top` down.
    pub fn scroll_top(&mut self, top: f64, now: Instant) -> Vec<TableEvent> {
        self.viewport.set_scroll_y(-top);
        self.scrollbar_y.sync_to_content(self.viewport.scroll_y);
        self.scrolled(now)
    }

    /// Scroll so the body shows content from `left` on.
    pub fn scroll_left(&mut self, left: f64, now: Instant) -> Vec<TableEvent> {
        self.viewport.set_scroll_x(-left);
        self.scrollbar_x.sync_to_content(self.viewport.scroll_x);
        self.scrolled(now)
    }

    fn scroll_by(&mut self, dx: f64, dy: f64, now: Instant) -> Vec<TableEvent> {
        self.viewport.apply_delta(dx, dy);
        self.scrollbar_x.on_wheel_scroll(dx);
        self.scrollbar_y.on_wheel_scroll(dy);
        self.scrolled(now)
    }

    fn scroll_axis(&mut self, axis: Axis, delta: f64, now: Instant) -> Vec<TableEvent> {
        match axis {
            Axis::Horizontal => self.viewport.apply_delta(delta, 0.0),
            Axis::Vertical => self.viewport.apply_delta(0.0, delta),
        };
        self.scrolled(now)
    }

    fn scrolled(&mut self, now: Instant) -> Vec<TableEvent> {
        self.activity.touch(now);
        log::trace!(
            "[scroll] x={} y={}",
            self.viewport.scroll_x,
            self.viewport.scroll_y
        );
        vec![TableEvent::Scrolled {
            x: self.viewport.scroll_x,
            y: self.viewport.scroll_y,
        }]
    }

    // -------------------------------------------------------------------------
    // Pointer interaction
    // -------------------------------------------------------------------------

    /// Pointer pressed on a scrollbar at table position `(x, y)`.
    ///
    /// Pressing the thumb starts a drag; pressing the track jumps toward
    /// the pointer.
    pub fn scrollbar_press(&mut self, axis: Axis, x: f64, y: f64, now: Instant) -> Vec<TableEvent> {
        if self.config.disabled_scroll {
            return Vec::new();
        }
        self.cancel_interaction();

        let header_height = self.config.visible_header_height();
        let (bar, position, pointer) = match axis {
            Axis::Horizontal => (&mut self.scrollbar_x, x, x),
            Axis::Vertical => (&mut self.scrollbar_y, y - header_height, y),
        };
        if bar.is_hidden() {
            return Vec::new();
        }

        if bar.handle_contains(position) {
            bar.press();
            self.interaction = Interaction::DraggingScrollbar { axis, last: pointer };
            return Vec::new();
        }

        let delta = bar.click_track(position);
        self.scroll_axis(axis, delta, now)
    }

    /// Start resizing `column` from pointer x. Returns false when the
    /// column cannot be resized.
    pub fn resize_start(&mut self, column: usize, x: f64) -> bool {
        let Some(spec) = self.columns.get(column) else {
            return false;
        };
        if !spec.can_resize() {
            log::debug!("[columns] column {} is not resizable", column);
            return false;
        }
        let Some(resolved) = self.layout.get(column) else {
            return false;
        };

        let resize = ColumnResize::new(
            &resolved.data_key,
            column,
            resolved.width,
            resolved.left,
            resolved.fixed,
            x,
        );
        self.cancel_interaction();
        self.interaction = Interaction::ResizingColumn(resize);
        true
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, now: Instant) -> Vec<TableEvent> {
        match &mut self.interaction {
            Interaction::DraggingScrollbar { axis, last } => {
                let axis = *axis;
                let pointer = match axis {
                    Axis::Horizontal => x,
                    Axis::Vertical => y,
                };
                let delta = pointer - *last;
                *last = pointer;
                if delta == 0.0 {
                    return Vec::new();
                }

                let content_delta = match axis {
                    Axis::Horizontal => self.scrollbar_x.drag_by(delta),
                    Axis::Vertical => self.scrollbar_y.drag_by(delta),
                };
                self.scroll_axis(axis, content_delta, now)
            }
            Interaction::ResizingColumn(resize) => {
                resize.move_to(x);
                Vec::new()
            }
            Interaction::Idle => Vec::new(),
        }
    }

    /// End the current drag. A column resize is committed.
    pub fn pointer_up(&mut self) -> Vec<TableEvent> {
        match std::mem::take(&mut self.interaction) {
            Interaction::DraggingScrollbar { axis, .. } => {
                self.scrollbar_mut(axis).release();
                Vec::new()
            }
            Interaction::ResizingColumn(resize) => {
                self.overrides
                    .set(&resize.data_key, resize.index, resize.width);
                log::debug!(
                    "[columns] resized {}#{} to {}",
                    resize.data_key,
                    resize.index,
                    resize.width
                );
                self.update_layout();
                vec![TableEvent::ColumnResized {
                    data_key: resize.data_key,
                    index: resize.index,
                    width: resize.width,
                }]
            }
            Interaction::Idle => Vec::new(),
        }
    }

    fn cancel_interaction(&mut self) {
        if let Interaction::DraggingScrollbar { axis, .. } = std::mem::take(&mut self.interaction) {
            self.scrollbar_mut(axis).release();
        }
    }

    fn scrollbar_mut(&mut self, axis: Axis) -> &mut Scrollbar {
        match axis {
            Axis::Horizontal => &mut self.scrollbar_x,
            Axis::Vertical => &mut self.scrollbar_y,
        }
    }

    /// A header cell was clicked. Sortable columns report a sort change.
    pub fn header_click(&mut self, column: usize) -> Vec<TableEvent> {
        let Some(spec) = self.columns.get(column) else {
            return Vec::new();
        };
        if !spec.sortable {
            return Vec::new();
        }
        vec![TableEvent::SortChanged(self.sort.click(spec.data_key()))]
    }

    /// Flip a row's expansion and report it.
    pub fn toggle_expanded(&mut self, key: &str) -> Vec<TableEvent> {
        let open = !self.expansion.is_expanded(key);
        if !self.controlled_expansion {
            self.expansion.toggle(key);
            self.update_layout();
        }
        log::debug!("[rows] toggle {} -> open: {}", key, open);
        vec![TableEvent::ExpandChanged {
            open,
            key: key.to_string(),
        }]
    }

    /// Row under body-relative y coordinate `y`.
    pub fn row_at(&self, y: f64) -> Option<&FlattenedRow> {
        let y = y - self.viewport.scroll_y;
        let body = self
            .body
            .iter()
            .find(|body| y >= body.top && y < body.top + body.height)?;
        self.rows.get(body.row)
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Rows to render for the current scroll position.
    pub fn window(&self) -> Window {
        if self.config.virtualized && !self.config.word_wrap {
            let heights: Vec<f64> = self.body.iter().map(|body| body.height).collect();
            compute_window(
                &heights,
                self.viewport.scroll_y,
                self.viewport.table_height,
                self.config.window_overscan(),
            )
        } else {
            Window::full(self.body.len())
        }
    }

    pub fn plan(&self) -> RenderPlan {
        let window = self.window();
        let grouped = self.is_grouped();

        let rows: Vec<VisibleRow> = self
            .body
            .iter()
            .skip(window.start)
            .take(window.len())
            .filter_map(|body| self.visible_row(body, grouped))
            .collect();

        let header = self.config.show_header.then(|| {
            let cells = self
                .layout
                .columns
                .iter()
                .map(|column| CellSlot {
                    column: column.index,
                    left: column.left,
                    width: column.width,
                    fixed: column.fixed,
                    col_span: column.col_span,
                    empty: column.header.is_none(),
                    removed: false,
                })
                .collect();
            self.group(cells, grouped)
        });

        let (scroll_x, scroll_y) = (self.viewport.scroll_x, self.viewport.scroll_y);
        let shadows = Shadows {
            header: scroll_y < 0.0,
            left: grouped && scroll_x < 0.0,
            right: grouped && self.width - self.layout.total_width - SCROLLBAR_WIDTH != scroll_x,
        };
        let scrollbars = !self.config.disabled_scroll;

        RenderPlan {
            columns: Rc::clone(&self.layout),
            header,
            rows,
            top_pad: window.top_pad,
            bottom_pad: window.bottom_pad,
            scroll_x,
            scroll_y,
            content_width: self.viewport.content_width,
            content_height: self.viewport.content_height,
            table_width: self.width,
            table_height: self.table_height(),
            header_height: self.config.visible_header_height(),
            row_width: self.row_width(),
            horizontal: scrollbars.then(|| self.scrollbar_x.geometry()),
            vertical: scrollbars.then(|| self.scrollbar_y.geometry()),
            shadows,
            is_scrolling: self.activity.is_scrolling(),
            is_column_resizing: self.interaction.is_resizing(),
            needs_measure: self.needs_measure(),
            resize_guide: self.interaction.resize().map(|resize| resize.guide_x(scroll_x)),
            message: self
                .body
                .is_empty()
                .then(|| self.config.empty_message.clone()),
            loading: self
                .config
                .loading
                .then(|| self.config.loading_message.clone()),
        }
    }

    pub fn render(&self, sink: &mut dyn RenderSink) {
        sink.render(&self.plan());
    }

    fn visible_row(&self, body: &BodyRow, grouped: bool) -> Option<VisibleRow> {
        let row = self.rows.get(body.row)?;
        let record = record_at(self.data.as_slice(), &row.path)?;

        let cells = self
            .layout
            .columns
            .iter()
            .map(|column| CellSlot {
                column: column.index,
                left: column.left,
                width: column.width,
                fixed: column.fixed,
                col_span: column.col_span,
                empty: record.is_empty_at(&column.data_key),
                removed: false,
            })
            .collect();

        Some(VisibleRow {
            index: body.row,
            key: row.key.clone(),
            path: row.path.clone(),
            top: body.top,
            height: body.height,
            depth: row.depth,
            has_children: row.has_children,
            expanded: self.expansion.is_expanded(&row.key),
            expanded_height: if body.detail {
                self.config.row_expanded_height
            } else {
                0.0
            },
            indent: if self.config.is_tree {
                indent_for(row.depth)
            } else {
                0.0
            },
            cells: self.group(cells, grouped),
        })
    }

    fn group(&self, cells: Vec<CellSlot>, grouped: bool) -> CellGroups {
        if grouped {
            CellGroups::split(cells, self.width)
        } else {
            CellGroups::single(cells)
        }
    }

    /// Pinned columns only split off when the content overflows.
    fn is_grouped(&self) -> bool {
        self.layout.has_fixed() && self.viewport.has_overflow_x()
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    fn update_layout(&mut self) {
        let key = GeometryKey::new(self.columns_version, self.width, self.overrides.version());
        let layout = self.geometry.get_or_resolve(
            key,
            self.columns.as_slice(),
            self.width,
            &self.overrides,
        );
        // Wrapped heights only hold for the widths they were measured at
        if self.config.word_wrap && !Rc::ptr_eq(&layout, &self.layout) && !self.heights.is_empty() {
            log::debug!("[rows] column geometry changed, dropping {} measured heights", self.heights.len());
            self.heights.clear();
        }
        self.layout = layout;

        self.body = self.body_rows();
        let content_height: f64 = self.body.iter().map(|body| body.height).sum();
        let body_height = (self.table_height_for(content_height) - self.config.visible_header_height()).max(0.0);

        let previous_content_width = self.viewport.content_width;
        self.viewport.content_width = self.layout.total_width;
        self.viewport.content_height = content_height;
        self.viewport.table_width = self.width;
        self.viewport.table_height = body_height;

        let column_count = self.columns.len();
        if column_count != self.column_count && previous_content_width != self.layout.total_width {
            log::debug!("[scroll] column set changed, resetting horizontal scroll");
            self.viewport.scroll_x = 0.0;
            self.scrollbar_x.reset(0.0);
        }
        self.column_count = column_count;

        if content_height < body_height && self.viewport.scroll_y != 0.0 {
            log::debug!("[scroll] content fits, resetting vertical scroll");
            self.viewport.scroll_y = 0.0;
            self.scrollbar_y.reset(0.0);
        }

        self.viewport.clamp();
        self.scrollbar_x.set_lengths(self.width, self.layout.total_width);
        self.scrollbar_y.set_lengths(body_height, content_height);
    }

    fn body_rows(&self) -> Vec<BodyRow> {
        let policy = HeightPolicy {
            row_height: self.config.row_height,
            word_wrap: self.config.word_wrap,
            expanded_height: self.config.row_expanded_height,
            custom: self
                .row_height
                .as_ref()
                .map(|f| &**f as &dyn Fn(&R) -> Option<f64>),
        };

        let mut body = Vec::with_capacity(self.rows.len());
        let mut top = 0.0;

        for (index, row) in self.rows.iter().enumerate() {
            if self.config.is_tree && !self.expansion.shows(&find_all_parents(&self.rows, index)) {
                continue;
            }
            let Some(record) = record_at(self.data.as_slice(), &row.path) else {
                continue;
            };

            let detail = self.detail_open(record, &row.key);
            let height = policy.height(&self.heights, record, index, detail);
            body.push(BodyRow {
                row: index,
                top,
                height,
                detail,
            });
            top += height;
        }
        body
    }

    fn detail_open(&self, record: &R, key: &str) -> bool {
        !self.config.is_tree
            && self
                .detail
                .as_ref()
                .is_some_and(|has_detail| has_detail(record))
            && self.expansion.is_expanded(key)
    }

    fn table_height_for(&self, content_height: f64) -> f64 {
        if self.config.auto_height {
            (self.config.visible_header_height() + content_height).max(self.config.min_height)
        } else {
            self.config.height
        }
    }

    fn apply_width(&mut self, width: f64) {
        log::debug!("[table] width {} -> {}", self.width, width);
        self.width = width;
        self.viewport.scroll_x = 0.0;
        self.scrollbar_x.reset(0.0);
        self.update_layout();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn data(&self) -> &Rc<Vec<R>> {
        &self.data
    }

    pub fn columns(&self) -> &Rc<Vec<ColumnSpec>> {
        &self.columns
    }

    /// Every flattened row, visible or not.
    pub fn rows(&self) -> &[FlattenedRow] {
        &self.rows
    }

    /// Record behind a flattened row.
    pub fn record(&self, row: &FlattenedRow) -> Option<&R> {
        record_at(self.data.as_slice(), &row.path)
    }

    /// Number of rows taking part in the body (expanded, not windowed).
    pub fn body_row_count(&self) -> usize {
        self.body.len()
    }

    pub fn column_layout(&self) -> Rc<ColumnLayout> {
        Rc::clone(&self.layout)
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn scroll_x(&self) -> f64 {
        self.viewport.scroll_x
    }

    pub fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y
    }

    pub fn table_width(&self) -> f64 {
        self.width
    }

    pub fn table_height(&self) -> f64 {
        self.table_height_for(self.viewport.content_height)
    }

    pub fn content_height(&self) -> f64 {
        self.viewport.content_height
    }

    /// Width of each rendered row.
    pub fn row_width(&self) -> f64 {
        self.layout.total_width.max(self.width)
    }

    pub fn scrollbar(&self, axis: Axis) -> &Scrollbar {
        match axis {
            Axis::Horizontal => &self.scrollbar_x,
            Axis::Vertical => &self.scrollbar_y,
        }
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn is_scrolling(&self) -> bool {
        self.activity.is_scrolling()
    }

    pub fn is_column_resizing(&self) -> bool {
        self.interaction.is_resizing()
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn overrides(&self) -> &ColumnOverrides {
        &self.overrides
    }

    pub fn row_heights(&self) -> &RowHeightCache {
        &self.heights
    }

    /// Whether word-wrapped rows are waiting for [`Table::measure`]: some
    /// body row has no height measured at the current column widths.
    pub fn needs_measure(&self) -> bool {
        self.config.word_wrap && self.body.iter().any(|body| self.heights.get(body.row).is_none())
    }
}

fn derive_rows<R: Record>(config: &TableConfig, data: &[R], row_key: &RowKey<R>) -> Vec<FlattenedRow> {
    if config.is_tree {
        flatten(data, row_key)
    } else {
        passthrough(data, row_key)
    }
}
