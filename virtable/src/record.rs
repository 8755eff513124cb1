//! Row records supplied by the data source.

use serde_json::Value;

/// A row of table data.
///
/// Records are opaque to the engine apart from two things: looking up the
/// value bound to a column's data key, and (in tree mode) listing child
/// records.
///
/// A provided implementation for [`serde_json::Value`] treats objects as
/// records, resolves dotted keys (`"owner.name"`) and reads children from
/// the `"children"` field.
pub trait Record {
    /// Value bound to `data_key`. `None` and `Some(Value::Null)` both mean
    /// the cell is empty.
    fn value(&self, data_key: &str) -> Option<&Value>;

    /// Child records, if this record has a children list.
    fn children(&self) -> Option<&[Self]>
    where
        Self: Sized;

    /// Whether the cell bound to `data_key` has nothing to show.
    fn is_empty_at(&self, data_key: &str) -> bool {
        matches!(self.value(data_key), None | Some(Value::Null))
    }

    /// Display text for the cell bound to `data_key`.
    fn text(&self, data_key: &str) -> Option<String> {
        self.value(data_key).and_then(value_to_text)
    }
}

impl Record for Value {
    fn value(&self, data_key: &str) -> Option<&Value> {
        if data_key.is_empty() {
            return None;
        }
        data_key
            .split('.')
            .try_fold(self, |value, segment| match value {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }

    fn children(&self) -> Option<&[Value]> {
        self.as_object()?
            .get("children")?
            .as_array()
            .map(Vec::as_slice)
    }
}

/// Render a cell value as text. Null has no text.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// How to extract a row's key.
pub enum RowKey<R> {
    /// Read the key from a field (numbers are stringified).
    Field(String),
    /// Compute the key from the record and its row index.
    Func(Box<dyn Fn(&R, usize) -> String>),
}

impl<R: Record> RowKey<R> {
    pub fn field(name: &str) -> Self {
        RowKey::Field(name.to_string())
    }

    pub fn func(f: impl Fn(&R, usize) -> String + 'static) -> Self {
        RowKey::Func(Box::new(f))
    }

    /// The record's key, if it has one.
    pub fn key_of(&self, record: &R, index: usize) -> Option<String> {
        match self {
            RowKey::Field(name) => record.value(name).and_then(value_to_text),
            RowKey::Func(f) => Some(f(record, index)),
        }
    }

    /// The record's key, falling back to a synthetic per-index key.
    pub fn key_or_synthetic(&self, record: &R, index: usize) -> String {
        self.key_of(record, index)
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| synthetic_key(index))
    }
}

impl<R> std::fmt::Debug for RowKey<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowKey::Field(name) => f.debug_tuple("Field").field(name).finish(),
            RowKey::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// Key used for rows that do not carry one.
pub fn synthetic_key(index: usize) -> String {
    format!("_{index}")
}
