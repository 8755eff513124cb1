//! Sort state for a table with a single active sort column.
//!
//! The table never reorders rows. It only tracks which column is active and
//! in which direction, and reports changes so the data source can supply
//! rows that are already sorted.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for the data source to sort by `column` in `direction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChange {
    pub column: String,
    pub direction: SortDirection,
}

/// Tracks the active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    column: Option<String>,
    direction: SortDirection,
    default_direction: SortDirection,
}

impl SortState {
    /// Start unsorted. The first click on a column uses `default_direction`.
    pub fn new(default_direction: SortDirection) -> Self {
        Self {
            column: None,
            direction: default_direction,
            default_direction,
        }
    }

    /// The active sort column, if any.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Direction of the active sort (or the default when unsorted).
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn default_direction(&self) -> SortDirection {
        self.default_direction
    }

    /// Whether `column` is the active sort column.
    pub fn is_active(&self, column: &str) -> bool {
        self.column.as_deref() == Some(column)
    }

    /// Direction shown for `column`, `None` if it is not the active column.
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        self.is_active(column).then_some(self.direction)
    }

    /// Handle a click on a sortable header.
    ///
    /// Clicking the active column toggles its direction; clicking any other
    /// column makes it active with the default direction.
    pub fn click(&mut self, column: &str) -> SortChange {
        if self.is_active(column) {
            self.direction = self.direction.toggled();
        } else {
            self.column = Some(column.to_string());
            self.direction = self.default_direction;
        }
        log::debug!("[sort] {} -> {}", column, self.direction);
        SortChange {
            column: column.to_string(),
            direction: self.direction,
        }
    }

    /// Replace the sort state (e.g. when the data source sorted on its own).
    pub fn set(&mut self, column: Option<String>, direction: SortDirection) {
        self.column = column;
        self.direction = direction;
    }

    /// Back to unsorted.
    pub fn clear(&mut self) {
        self.column = None;
        self.direction = self.default_direction;
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortDirection::default())
    }
}
