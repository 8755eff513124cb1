use std::collections::HashMap;
use std::rc::Rc;

use crate::column::{ColumnSpec, Fixed};

/// Width a flex column never shrinks below unless it declares `min_width`.
pub const DEFAULT_FLEX_MIN_WIDTH: f64 = 60.0;

/// A column after layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColumn {
    /// Declaration index.
    pub index: usize,
    pub data_key: String,
    /// Cumulative x offset from the first column.
    pub left: f64,
    pub width: f64,
    pub fixed: Fixed,
    pub is_first: bool,
    pub is_last: bool,
    pub resizable: bool,
    pub sortable: bool,
    pub flex_grow: f64,
    pub col_span: Option<usize>,
    pub header: Option<String>,
}

/// Resolved geometry for every column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnLayout {
    pub columns: Vec<ResolvedColumn>,
    pub total_width: f64,
}

impl ColumnLayout {
    pub fn get(&self, index: usize) -> Option<&ResolvedColumn> {
        self.columns.get(index)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether any column is pinned to an edge.
    pub fn has_fixed(&self) -> bool {
        self.columns.iter().any(|c| c.fixed != Fixed::None)
    }

    /// Column under content-space x coordinate `x`.
    pub fn column_at(&self, x: f64) -> Option<&ResolvedColumn> {
        self.columns
            .iter()
            .find(|c| x >= c.left && x < c.left + c.width)
    }
}

/// Identity of a column for resize overrides: its data key and position.
pub type OverrideKey = (String, usize);

/// User-dragged column widths.
///
/// Every change bumps `version`, which the geometry cache keys on.
#[derive(Debug, Clone, Default)]
pub struct ColumnOverrides {
    widths: HashMap<OverrideKey, f64>,
    version: u64,
}

impl ColumnOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, data_key: &str, index: usize) -> Option<f64> {
        self.widths.get(&(data_key.to_string(), index)).copied()
    }

    pub fn set(&mut self, data_key: &str, index: usize, width: f64) {
        self.widths.insert((data_key.to_string(), index), width);
        self.version += 1;
    }

    /// Drop overrides for columns that no longer exist at the same position.
    pub fn retain_columns(&mut self, columns: &[ColumnSpec]) {
        let before = self.widths.len();
        self.widths.retain(|(key, index), _| {
            columns
                .get(*index)
                .is_some_and(|column| column.data_key() == key)
        });
        if self.widths.len() != before {
            self.version += 1;
        }
    }

    pub fn clear(&mut self) {
        if !self.widths.is_empty() {
            self.widths.clear();
            self.version += 1;
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Resolve column widths and offsets.
///
/// Flex columns split whatever width the fixed columns leave over, in
/// proportion to `flex_grow`, but never go below their minimum. Until the
/// table width is known (`table_width == 0`) they keep their declared
/// width. Non-flex columns use their resize override, else their width.
pub fn resolve(columns: &[ColumnSpec], table_width: f64, overrides: &ColumnOverrides) -> ColumnLayout {
    let total_flex_grow: f64 = columns.iter().filter(|c| c.is_flex()).map(|c| c.flex_grow).sum();
    let total_fixed_width: f64 = columns.iter().filter(|c| !c.is_flex()).map(|c| c.width).sum();
    let last = columns.len().saturating_sub(1);

    let mut left = 0.0;
    let mut resolved = Vec::with_capacity(columns.len());

    for (index, column) in columns.iter().enumerate() {
        let data_key = column.data_key();

        let width = if column.is_flex() && table_width > 0.0 && total_flex_grow > 0.0 {
            let share = (table_width - total_fixed_width) / total_flex_grow * column.flex_grow;
            share.max(column.min_width.unwrap_or(DEFAULT_FLEX_MIN_WIDTH))
        } else if column.is_flex() {
            column.width
        } else {
            overrides.get(data_key, index).unwrap_or(column.width)
        };

        resolved.push(ResolvedColumn {
            index,
            data_key: data_key.to_string(),
            left,
            width,
            fixed: column.fixed,
            is_first: index == 0,
            is_last: index == last,
            resizable: column.resizable,
            sortable: column.sortable,
            flex_grow: column.flex_grow,
            col_span: column.col_span,
            header: column.header_content().map(str::to_string),
        });
        left += width;
    }

    ColumnLayout {
        columns: resolved,
        total_width: left,
    }
}

/// Inputs a cached layout was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryKey {
    pub columns_version: u64,
    pub table_width_bits: u64,
    pub overrides_version: u64,
}

impl GeometryKey {
    pub fn new(columns_version: u64, table_width: f64, overrides_version: u64) -> Self {
        Self {
            columns_version,
            table_width_bits: table_width.to_bits(),
            overrides_version,
        }
    }
}

/// Memoized column layout, recomputed only when its key changes.
#[derive(Debug, Default)]
pub struct GeometryCache {
    entry: Option<(GeometryKey, Rc<ColumnLayout>)>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached layout for `key`, resolving it first on a miss.
    pub fn get_or_resolve(
        &mut self,
        key: GeometryKey,
        columns: &[ColumnSpec],
        table_width: f64,
        overrides: &ColumnOverrides,
    ) -> Rc<ColumnLayout> {
        if let Some((cached_key, layout)) = &self.entry {
            if *cached_key == key {
                return Rc::clone(layout);
            }
        }

        let layout = Rc::new(resolve(columns, table_width, overrides));
        log::debug!(
            "[columns] resolved {} columns, total width {} (table width {})",
            layout.len(),
            layout.total_width,
            table_width
        );
        self.entry = Some((key, Rc::clone(&layout)));
        layout
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn is_cached(&self, key: GeometryKey) -> bool {
        self.entry.as_ref().is_some_and(|(k, _)| *k == key)
    }
}
