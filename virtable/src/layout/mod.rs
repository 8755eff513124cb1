//! Column geometry: width resolution and cell spans.

mod flex;
mod span;

pub use flex::{
    resolve, ColumnLayout, ColumnOverrides, GeometryCache, GeometryKey, OverrideKey,
    ResolvedColumn, DEFAULT_FLEX_MIN_WIDTH,
};
pub use span::{col_span_cells, reset_left, CellGroups, CellSlot};
