use std::collections::HashMap;

/// Padding added around the tallest wrapped cell of a row.
pub const CELL_PADDING_HEIGHT: f64 = 26.0;

/// Measured content heights of word-wrapped rows, by flattened row index.
///
/// Holds the tallest cell of each row, without padding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowHeightCache {
    heights: HashMap<usize, f64>,
}

impl RowHeightCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.heights.get(&index).copied()
    }

    pub fn set(&mut self, index: usize, height: f64) {
        self.heights.insert(index, height);
    }

    pub fn clear(&mut self) {
        self.heights.clear();
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

/// How a table sizes its rows.
pub struct HeightPolicy<'a, R> {
    pub row_height: f64,
    pub word_wrap: bool,
    pub expanded_height: f64,
    /// Caller-supplied height. `None` or a non-positive result falls back
    /// to `row_height`.
    pub custom: Option<&'a dyn Fn(&R) -> Option<f64>>,
}

impl<R> HeightPolicy<'_, R> {
    /// Height of one row.
    ///
    /// A custom height function wins; otherwise word-wrap rows use their
    /// measured height plus padding; otherwise every row is `row_height`.
    /// Rows with an open detail region add `expanded_height` on top.
    pub fn height(&self, cache: &RowHeightCache, record: &R, index: usize, detail_open: bool) -> f64 {
        let base = if let Some(custom) = self.custom {
            custom(record)
                .filter(|h| *h > 0.0)
                .unwrap_or(self.row_height)
        } else if self.word_wrap {
            match cache.get(index) {
                Some(measured) if measured > 0.0 => measured + CELL_PADDING_HEIGHT,
                _ => self.row_height,
            }
        } else {
            self.row_height
        };

        if detail_open {
            base + self.expanded_height
        } else {
            base
        }
    }
}
