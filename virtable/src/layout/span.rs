use crate::column::Fixed;
use crate::scroll::SCROLLBAR_WIDTH;

/// One cell of a header or body row, positioned by its column.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSlot {
    /// Declaration index of the column.
    pub column: usize,
    pub left: f64,
    pub width: f64,
    pub fixed: Fixed,
    pub col_span: Option<usize>,
    /// The bound value (body) or header content is null.
    pub empty: bool,
    /// Folded into a spanning neighbour. Renders as nothing.
    pub removed: bool,
}

/// Merge empty neighbours into cells that declare a column span.
///
/// A cell with `col_span = n` looks at the next `n - 1` cells and absorbs
/// each empty one: the neighbour is marked removed and its width is added
/// to the spanning cell. Runs once, left to right; a cell already folded
/// into a neighbour never spans itself. Spans past the end of the row stop
/// at the last cell.
pub fn col_span_cells(cells: &mut [CellSlot]) {
    for i in 0..cells.len() {
        if cells[i].removed {
            continue;
        }
        let Some(span) = cells[i].col_span else {
            continue;
        };

        let mut width = cells[i].width;
        for next in cells.iter_mut().skip(i + 1).take(span.saturating_sub(1)) {
            if next.empty && !next.removed {
                width += next.width;
                next.removed = true;
            }
        }
        cells[i].width = width;
    }
}

/// Restart `left` offsets at zero, packing cells in order.
pub fn reset_left(cells: &mut [CellSlot]) {
    let mut left = 0.0;
    for cell in cells {
        cell.left = left;
        left += cell.width;
    }
}

/// A row's cells, split into pinned and scrolling groups.
///
/// When the table has no pinned columns (or everything fits) all cells are
/// in `scroll`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellGroups {
    pub left: Vec<CellSlot>,
    pub scroll: Vec<CellSlot>,
    pub right: Vec<CellSlot>,
    pub left_width: f64,
    pub right_width: f64,
    /// Table x position of the right-pinned group.
    pub right_offset: f64,
}

impl CellGroups {
    /// All cells in one scrolling group.
    pub fn single(mut cells: Vec<CellSlot>) -> Self {
        col_span_cells(&mut cells);
        Self {
            scroll: cells,
            ..Default::default()
        }
    }

    /// Partition cells by their pinned edge.
    ///
    /// Right-pinned cells are laid out from zero inside their group, which
    /// sits against the right edge of the table, clear of the vertical
    /// scrollbar. Spans merge within a group, never across groups.
    pub fn split(cells: Vec<CellSlot>, table_width: f64) -> Self {
        let mut groups = Self::default();

        for cell in cells {
            match cell.fixed {
                Fixed::Left => {
                    groups.left_width += cell.width;
                    groups.left.push(cell);
                }
                Fixed::Right => {
                    groups.right_width += cell.width;
                    groups.right.push(cell);
                }
                Fixed::None => groups.scroll.push(cell),
            }
        }

        reset_left(&mut groups.right);
        col_span_cells(&mut groups.left);
        col_span_cells(&mut groups.scroll);
        col_span_cells(&mut groups.right);

        if !groups.right.is_empty() {
            groups.right_offset = table_width - groups.right_width - SCROLLBAR_WIDTH;
        }
        groups
    }

    /// Whether cells were split into pinned groups.
    pub fn is_grouped(&self) -> bool {
        !self.left.is_empty() || !self.right.is_empty()
    }

    /// Every cell, left group first.
    pub fn iter(&self) -> impl Iterator<Item = &CellSlot> {
        self.left.iter().chain(&self.scroll).chain(&self.right)
    }

    /// Cells that actually render.
    pub fn rendered(&self) -> impl Iterator<Item = &CellSlot> {
        self.iter().filter(|cell| !cell.removed)
    }

    /// Cell for a column, wherever it ended up.
    pub fn cell(&self, column: usize) -> Option<&CellSlot> {
        self.iter().find(|cell| cell.column == column)
    }
}
