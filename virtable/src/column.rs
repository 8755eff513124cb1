//! Column declarations.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

pub const DEFAULT_COLUMN_WIDTH: f64 = 100.0;

/// Which edge, if any, a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fixed {
    #[default]
    None,
    Left,
    Right,
}

/// The header half of a column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderCell {
    /// Header content. `None` lets a spanning neighbour absorb this header.
    pub content: Option<String>,
}

/// The body half of a column.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyCell {
    /// Key of the record value this column displays.
    pub data_key: String,
}

/// A column as declared by the caller.
///
/// A usable column has both a header cell and a body cell; [`ColumnSpec::new`]
/// creates both.
///
/// # Example
///
/// ```
/// use virtable::{ColumnSpec, Fixed};
///
/// let columns = vec![
///     ColumnSpec::new("id").header("ID").width(60.0).fixed(Fixed::Left),
///     ColumnSpec::new("name").header("Name").flex_grow(1.0).sortable(),
///     ColumnSpec::new("email").header("Email").width(200.0).resizable(),
/// ];
/// assert_eq!(columns[1].data_key(), "name");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub width: f64,
    pub min_width: Option<f64>,
    /// Share of leftover width. Zero means fixed width.
    pub flex_grow: f64,
    pub fixed: Fixed,
    pub resizable: bool,
    pub col_span: Option<usize>,
    pub sortable: bool,
    pub header: Option<HeaderCell>,
    pub cell: Option<BodyCell>,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_COLUMN_WIDTH,
            min_width: None,
            flex_grow: 0.0,
            fixed: Fixed::None,
            resizable: false,
            col_span: None,
            sortable: false,
            header: None,
            cell: None,
        }
    }
}

impl ColumnSpec {
    /// A column bound to `data_key` with an empty header.
    pub fn new(data_key: impl Into<String>) -> Self {
        Self {
            header: Some(HeaderCell::default()),
            cell: Some(BodyCell {
                data_key: data_key.into(),
            }),
            ..Default::default()
        }
    }

    /// Data key of the body cell (empty if the body cell is missing).
    pub fn data_key(&self) -> &str {
        self.cell.as_ref().map_or("", |cell| cell.data_key.as_str())
    }

    /// Header content, if any.
    pub fn header_content(&self) -> Option<&str> {
        self.header.as_ref().and_then(|h| h.content.as_deref())
    }

    /// Whether this column takes part in flex distribution.
    pub fn is_flex(&self) -> bool {
        self.flex_grow > 0.0
    }

    /// Whether a resize drag may start on this column. Flex columns are
    /// always sized by the flex policy, so they never resize.
    pub fn can_resize(&self) -> bool {
        self.resizable && !self.is_flex()
    }

    pub fn header(mut self, content: impl Into<String>) -> Self {
        self.header = Some(HeaderCell {
            content: Some(content.into()),
        });
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn flex_grow(mut self, flex_grow: f64) -> Self {
        self.flex_grow = flex_grow.max(0.0);
        self
    }

    pub fn fixed(mut self, fixed: Fixed) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    pub fn col_span(mut self, span: usize) -> Self {
        self.col_span = Some(span.max(1));
        self
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Check column declarations before any layout runs.
///
/// A column without both cells is a hard error. Declaring both `resizable`
/// and `flex_grow` is only logged: the flex policy wins.
pub fn validate_columns(columns: &[ColumnSpec]) -> Result<()> {
    for (index, column) in columns.iter().enumerate() {
        if column.header.is_none() || column.cell.is_none() {
            return Err(TableError::MissingCellPair { index });
        }
        if column.resizable && column.is_flex() {
            log::warn!(
                "[columns] cannot set 'resizable' and 'flex_grow' together, column index: {}",
                index
            );
        }
    }
    Ok(())
}
