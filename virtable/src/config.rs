//! Table configuration.
//!
//! `TableConfig` is the closed set of data options a table understands.
//! Behavior that has to be code (row keys, custom heights, detail rows)
//! lives in [`TableHooks`](crate::TableHooks).

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::sort::SortDirection;

pub const DEFAULT_HEIGHT: f64 = 200.0;
pub const DEFAULT_ROW_HEIGHT: f64 = 46.0;
pub const DEFAULT_HEADER_HEIGHT: f64 = 40.0;
pub const DEFAULT_ROW_EXPANDED_HEIGHT: f64 = 100.0;

/// Options for a single table instance.
///
/// Defaults match a plain, non-virtualized table 200 units tall with rows
/// keyed by their `"key"` field.
///
/// # Example
///
/// ```
/// use virtable::TableConfig;
///
/// let config = TableConfig::new().height(400.0).virtualized(true);
/// assert_eq!(config.row_height, 46.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Fixed table width. `None` means measure the container.
    pub width: Option<f64>,
    /// Table height when not auto-sized.
    pub height: f64,
    /// Grow the table to fit its rows instead of scrolling.
    pub auto_height: bool,
    /// Lower bound for auto-sized tables.
    pub min_height: f64,
    pub row_height: f64,
    pub header_height: f64,
    pub show_header: bool,
    /// Extra height added to a row whose detail region is expanded.
    pub row_expanded_height: f64,
    /// Field holding each row's key. Ignored when a key function is hooked.
    pub row_key: Option<String>,
    pub is_tree: bool,
    pub default_expand_all_rows: bool,
    pub default_expanded_row_keys: Vec<String>,
    /// Controlled expansion. When set, toggling only reports changes.
    pub expanded_row_keys: Option<Vec<String>>,
    pub sort_column: Option<String>,
    pub sort_type: Option<SortDirection>,
    pub default_sort_type: SortDirection,
    pub disabled_scroll: bool,
    pub loading: bool,
    /// Size rows to their wrapped content. Disables windowing.
    pub word_wrap: bool,
    pub virtualized: bool,
    /// Slack below the viewport kept rendered while windowing.
    /// Defaults to `row_expanded_height`.
    pub overscan: Option<f64>,
    pub class_prefix: String,
    pub empty_message: String,
    pub loading_message: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: DEFAULT_HEIGHT,
            auto_height: false,
            min_height: 0.0,
            row_height: DEFAULT_ROW_HEIGHT,
            header_height: DEFAULT_HEADER_HEIGHT,
            show_header: true,
            row_expanded_height: DEFAULT_ROW_EXPANDED_HEIGHT,
            row_key: Some("key".to_string()),
            is_tree: false,
            default_expand_all_rows: false,
            default_expanded_row_keys: Vec::new(),
            expanded_row_keys: None,
            sort_column: None,
            sort_type: None,
            default_sort_type: SortDirection::Desc,
            disabled_scroll: false,
            loading: false,
            word_wrap: false,
            virtualized: false,
            overscan: None,
            class_prefix: "rs-table".to_string(),
            empty_message: "No data found".to_string(),
            loading_message: "Loading...".to_string(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration document. Missing fields take defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| TableError::Config(e.to_string()))
    }

    /// Header height actually taken up (0 when the header is hidden).
    pub fn visible_header_height(&self) -> f64 {
        if self.show_header {
            self.header_height
        } else {
            0.0
        }
    }

    /// Slack used by the virtualization window.
    pub fn window_overscan(&self) -> f64 {
        self.overscan.unwrap_or(self.row_expanded_height)
    }

    /// Class name for a table part under the configured prefix.
    pub fn class_name(&self, part: &str) -> String {
        if self.class_prefix.is_empty() || part.is_empty() {
            return String::new();
        }
        format!("{}-{}", self.class_prefix, part)
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn auto_height(mut self, enabled: bool) -> Self {
        self.auto_height = enabled;
        self
    }

    pub fn min_height(mut self, min_height: f64) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn header_height(mut self, header_height: f64) -> Self {
        self.header_height = header_height;
        self
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    pub fn row_expanded_height(mut self, height: f64) -> Self {
        self.row_expanded_height = height;
        self
    }

    /// Key rows by `field`. `None` leaves rows unkeyed unless a key hook is set.
    pub fn row_key(mut self, field: Option<&str>) -> Self {
        self.row_key = field.map(str::to_string);
        self
    }

    pub fn tree(mut self, enabled: bool) -> Self {
        self.is_tree = enabled;
        self
    }

    pub fn default_expand_all_rows(mut self, enabled: bool) -> Self {
        self.default_expand_all_rows = enabled;
        self
    }

    pub fn default_expanded_row_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_expanded_row_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn expanded_row_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded_row_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort(mut self, column: &str, direction: SortDirection) -> Self {
        self.sort_column = Some(column.to_string());
        self.sort_type = Some(direction);
        self
    }

    pub fn default_sort_type(mut self, direction: SortDirection) -> Self {
        self.default_sort_type = direction;
        self
    }

    pub fn disabled_scroll(mut self, disabled: bool) -> Self {
        self.disabled_scroll = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn word_wrap(mut self, enabled: bool) -> Self {
        self.word_wrap = enabled;
        self
    }

    pub fn virtualized(mut self, enabled: bool) -> Self {
        self.virtualized = enabled;
        self
    }

    pub fn overscan(mut self, overscan: f64) -> Self {
        self.overscan = Some(overscan);
        self
    }

    pub fn class_prefix(mut self, prefix: &str) -> Self {
        self.class_prefix = prefix.to_string();
        self
    }

    pub fn empty_message(mut self, message: &str) -> Self {
        self.empty_message = message.to_string();
        self
    }
}
