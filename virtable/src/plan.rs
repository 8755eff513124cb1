//! Render plans: everything the UI layer needs to paint one frame.

use std::rc::Rc;

use crate::layout::{CellGroups, ColumnLayout};
use crate::scroll::ScrollbarPlan;

/// Edge shadows that hint at scrolled-away content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shadows {
    /// Rows are scrolled up under the header.
    pub header: bool,
    /// Content is scrolled under the left-pinned group.
    pub left: bool,
    /// Content continues under the right-pinned group.
    pub right: bool,
}

/// A body row selected for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow {
    /// Position in the flattened row list.
    pub index: usize,
    pub key: String,
    /// Child indices from the top-level data down to the record.
    pub path: Vec<usize>,
    /// Offset from the top of the body content.
    pub top: f64,
    /// Full height, including any open detail region.
    pub height: f64,
    pub depth: usize,
    pub has_children: bool,
    /// The row key is in the expansion set.
    pub expanded: bool,
    /// Height of the open detail region, 0 when closed.
    pub expanded_height: f64,
    /// Left padding of the first cell (0 outside tree mode).
    pub indent: f64,
    pub cells: CellGroups,
}

/// One frame of table output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub columns: Rc<ColumnLayout>,
    /// Header cells, `None` when the header is hidden.
    pub header: Option<CellGroups>,
    pub rows: Vec<VisibleRow>,
    /// Height of the rows skipped above `rows`.
    pub top_pad: f64,
    /// Height of the rows skipped below `rows`.
    pub bottom_pad: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub content_width: f64,
    pub content_height: f64,
    pub table_width: f64,
    pub table_height: f64,
    pub header_height: f64,
    /// Width of every row: the wider of the columns and the table.
    pub row_width: f64,
    /// `None` when scrolling is disabled.
    pub horizontal: Option<ScrollbarPlan>,
    pub vertical: Option<ScrollbarPlan>,
    pub shadows: Shadows,
    pub is_scrolling: bool,
    pub is_column_resizing: bool,
    /// Wrapped row heights are stale; the host should measure again.
    pub needs_measure: bool,
    /// Table x of the resize guide line while a column resize is active.
    pub resize_guide: Option<f64>,
    /// Placeholder shown when no rows render.
    pub message: Option<String>,
    /// Loading overlay text.
    pub loading: Option<String>,
}

impl RenderPlan {
    /// Combined height of the rendered rows.
    pub fn rows_height(&self) -> f64 {
        self.rows.iter().map(|row| row.height).sum()
    }

    /// Height of the body content: rendered rows plus both pads.
    pub fn total_height(&self) -> f64 {
        self.top_pad + self.rows_height() + self.bottom_pad
    }

    pub fn row(&self, key: &str) -> Option<&VisibleRow> {
        self.rows.iter().find(|row| row.key == key)
    }
}

/// Paints render plans. Implemented by the UI layer.
pub trait RenderSink {
    fn render(&mut self, plan: &RenderPlan);
}

impl<F: FnMut(&RenderPlan)> RenderSink for F {
    fn render(&mut self, plan: &RenderPlan) {
        self(plan)
    }
}
