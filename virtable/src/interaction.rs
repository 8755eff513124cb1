//! Pointer interaction state: at most one drag at a time.

use crate::column::Fixed;
use crate::scroll::Axis;

/// Narrowest width a resize drag can produce.
pub const MIN_COLUMN_WIDTH: f64 = 20.0;
/// Widest width a resize drag can produce.
pub const MAX_COLUMN_WIDTH: f64 = 20_000.0;

/// What the pointer is currently doing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Dragging a scrollbar thumb. `last` is the previous pointer
    /// coordinate along the axis.
    DraggingScrollbar { axis: Axis, last: f64 },
    ResizingColumn(ColumnResize),
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Interaction::ResizingColumn(_))
    }

    pub fn resize(&self) -> Option<&ColumnResize> {
        match self {
            Interaction::ResizingColumn(resize) => Some(resize),
            _ => None,
        }
    }
}

/// An in-flight column resize drag.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnResize {
    pub data_key: String,
    /// Declaration index of the column.
    pub index: usize,
    /// Width when the drag started.
    pub initial_width: f64,
    /// Column offset from the first column.
    pub left: f64,
    pub fixed: Fixed,
    /// Pointer x of the previous move.
    pub last_x: f64,
    /// Total pointer travel since the drag started.
    pub cursor_delta: f64,
    /// Current (clamped) width.
    pub width: f64,
}

impl ColumnResize {
    pub fn new(data_key: &str, index: usize, width: f64, left: f64, fixed: Fixed, x: f64) -> Self {
        Self {
            data_key: data_key.to_string(),
            index,
            initial_width: width,
            left,
            fixed,
            last_x: x,
            cursor_delta: 0.0,
            width,
        }
    }

    /// Follow the pointer to `x`. Returns the new width.
    pub fn move_to(&mut self, x: f64) -> f64 {
        self.move_by(x - self.last_x);
        self.last_x = x;
        self.width
    }

    /// Accumulate a pointer delta. Returns the new width.
    pub fn move_by(&mut self, delta: f64) -> f64 {
        self.cursor_delta += delta;
        self.width = (self.initial_width + self.cursor_delta).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
        self.width
    }

    /// Table x of the resize guide line. Pinned columns do not scroll.
    pub fn guide_x(&self, scroll_x: f64) -> f64 {
        let x = self.width + self.left;
        match self.fixed {
            Fixed::None => x + scroll_x,
            Fixed::Left | Fixed::Right => x,
        }
    }
}
