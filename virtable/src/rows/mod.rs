//! Row flattening, tree expansion and row heights.

mod height;
mod tree;

pub use height::{HeightPolicy, RowHeightCache, CELL_PADDING_HEIGHT};
pub use tree::{
    find_all_parents, find_row_keys, flatten, passthrough, record_at, ExpansionState,
    FlattenedRow,
};

/// Indentation step per tree level.
pub const LAYER_WIDTH: f64 = 30.0;

/// Left padding of the first cell of a row at `depth`.
pub fn indent_for(depth: usize) -> f64 {
    depth as f64 * LAYER_WIDTH + 10.0
}
