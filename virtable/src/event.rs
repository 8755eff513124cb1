use crate::scroll::Axis;
use crate::sort::SortChange;

/// Raw input delivered by the host
///
/// Pointer coordinates are relative to the table's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Wheel or trackpad delta. Positive values scroll toward the end.
    Wheel { delta_x: f64, delta_y: f64 },
    /// First touch point of a touch gesture
    TouchStart { x: f64, y: f64 },
    /// Touch point moved
    TouchMove { x: f64, y: f64 },
    /// The native body element scrolled (e.g. focus moved into view)
    BodyScroll { left: f64, top: f64 },
    /// Pointer pressed on a scrollbar
    ScrollbarDown { axis: Axis, x: f64, y: f64 },
    /// Pointer pressed on a column's resize handle
    ResizeHandleDown { column: usize, x: f64 },
    /// Pointer moved (while dragging)
    PointerMove { x: f64, y: f64 },
    /// Pointer released
    PointerUp,
    /// Header cell clicked
    HeaderClick { column: usize },
    /// Tree toggle or expand control clicked
    Toggle { key: String },
    /// Container width changed
    ContainerResized { width: f64 },
}

/// Notifications the table reports back to the host
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Scroll offsets changed
    Scrolled { x: f64, y: f64 },
    /// A sortable header was clicked
    SortChanged(SortChange),
    /// A row was expanded or collapsed
    ExpandChanged { open: bool, key: String },
    /// A column resize drag was committed
    ColumnResized {
        data_key: String,
        index: usize,
        width: f64,
    },
    /// Scrolling stopped
    ScrollIdle,
}
