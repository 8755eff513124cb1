//! Layout and virtualization engine for data tables.
//!
//! The engine turns columns, rows and a scroll position into a
//! [`RenderPlan`]: resolved column geometry, the slice of rows to paint and
//! the space taken by rows left out, scrollbar geometry and edge shadows.
//! Painting and input capture belong to the host UI layer, which feeds raw
//! input back in through [`Table::handle`].

pub mod column;
pub mod config;
pub mod debounce;
pub mod error;
pub mod event;
pub mod interaction;
pub mod layout;
pub mod logging;
pub mod measure;
pub mod plan;
pub mod record;
pub mod rows;
pub mod scroll;
pub mod sort;
pub mod table;
pub mod text;
pub mod window;

pub use column::{validate_columns, ColumnSpec, Fixed};
pub use config::TableConfig;
pub use debounce::Debouncer;
pub use error::{Result, TableError};
pub use event::{InputEvent, TableEvent};
pub use interaction::{ColumnResize, Interaction};
pub use layout::{resolve, CellGroups, CellSlot, ColumnLayout, ColumnOverrides, ResolvedColumn};
pub use logging::init_file_logger;
pub use measure::{CellProbe, MeasurementProvider, Size, TextMetrics};
pub use plan::{RenderPlan, RenderSink, Shadows, VisibleRow};
pub use record::{Record, RowKey};
pub use rows::{ExpansionState, FlattenedRow};
pub use scroll::{Axis, Scrollbar, ScrollbarPlan, ViewportState};
pub use sort::{SortChange, SortDirection, SortState};
pub use table::{Table, TableHooks};
pub use window::{compute_window, Window};
