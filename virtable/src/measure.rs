//! Measurement interface between the engine and the UI layer.
//!
//! The engine never looks at rendered output itself. It asks a
//! [`MeasurementProvider`] for the container size during layout and, in
//! word-wrap mode, for the rendered height of each cell.

use crate::text::wrapped_line_count;

/// A measured width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A body cell whose rendered size is being probed.
#[derive(Debug, Clone, PartialEq)]
pub struct CellProbe<'a> {
    /// Index of the row in the flattened row list.
    pub row: usize,
    /// Declaration index of the column.
    pub column: usize,
    pub data_key: &'a str,
    /// Text the cell displays, `None` for an empty cell.
    pub text: Option<String>,
    /// Resolved column width.
    pub width: f64,
}

/// Reads rendered geometry back from the UI layer.
pub trait MeasurementProvider {
    /// Size of the table's container element.
    fn container(&self) -> Size;

    /// Rendered size of a word-wrapped body cell.
    fn cell(&self, probe: &CellProbe<'_>) -> Size;
}

/// Estimates cell heights by word-wrapping cell text.
///
/// Useful headless or in terminals, where one display column maps to a
/// fixed `char_width`. Browser hosts should measure real elements instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub container: Size,
    /// Width of one display column.
    pub char_width: f64,
    pub line_height: f64,
    /// Horizontal padding inside each cell (both sides combined).
    pub padding: f64,
}

impl TextMetrics {
    pub fn new(container: Size) -> Self {
        Self {
            container,
            char_width: 8.0,
            line_height: 20.0,
            padding: 20.0,
        }
    }

    pub fn char_width(mut self, width: f64) -> Self {
        self.char_width = width;
        self
    }

    pub fn line_height(mut self, height: f64) -> Self {
        self.line_height = height;
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Display columns that fit in a cell of `width`.
    fn columns_for(&self, width: f64) -> usize {
        if self.char_width <= 0.0 {
            return 0;
        }
        ((width - self.padding).max(0.0) / self.char_width).floor() as usize
    }
}

impl MeasurementProvider for TextMetrics {
    fn container(&self) -> Size {
        self.container
    }

    fn cell(&self, probe: &CellProbe<'_>) -> Size {
        let Some(text) = probe.text.as_deref() else {
            return Size::new(probe.width, 0.0);
        };
        let lines = wrapped_line_count(text, self.columns_for(probe.width).max(1));
        Size::new(probe.width, lines as f64 * self.line_height)
    }
}
