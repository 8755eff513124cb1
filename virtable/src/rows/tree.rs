use std::collections::HashSet;

use crate::record::{Record, RowKey};

/// A record's place in the flattened row list.
///
/// Rows refer to their records by index path and to their parents by
/// position in the flattened list, so replacing the source data never
/// leaves anything dangling: the list is simply rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedRow {
    /// Child indices from the top-level data down to this record.
    pub path: Vec<usize>,
    /// Position of the parent row in the flattened list.
    pub parent: Option<usize>,
    pub key: String,
    pub depth: usize,
    /// The record carries a children list (possibly empty).
    pub has_children: bool,
}

/// Flatten a tree of records depth-first, parents before children.
pub fn flatten<R: Record>(data: &[R], row_key: &RowKey<R>) -> Vec<FlattenedRow> {
    let mut rows = Vec::new();
    flatten_into(data, row_key, None, &[], &mut rows);
    rows
}

fn flatten_into<R: Record>(
    items: &[R],
    row_key: &RowKey<R>,
    parent: Option<usize>,
    parent_path: &[usize],
    rows: &mut Vec<FlattenedRow>,
) {
    let depth = parent_path.len();

    for (i, item) in items.iter().enumerate() {
        let index = rows.len();
        let mut path = parent_path.to_vec();
        path.push(i);

        let children = item.children();
        rows.push(FlattenedRow {
            path: path.clone(),
            parent,
            key: row_key.key_or_synthetic(item, index),
            depth,
            has_children: children.is_some(),
        });

        if let Some(children) = children {
            flatten_into(children, row_key, Some(index), &path, rows);
        }
    }
}

/// Wrap top-level records as rows without descending into children.
pub fn passthrough<R: Record>(data: &[R], row_key: &RowKey<R>) -> Vec<FlattenedRow> {
    data.iter()
        .enumerate()
        .map(|(index, item)| FlattenedRow {
            path: vec![index],
            parent: None,
            key: row_key.key_or_synthetic(item, index),
            depth: 0,
            has_children: false,
        })
        .collect()
}

/// Follow an index path back to its record.
pub fn record_at<'a, R: Record>(data: &'a [R], path: &[usize]) -> Option<&'a R> {
    let (first, rest) = path.split_first()?;
    let mut record = data.get(*first)?;
    for index in rest {
        record = record.children()?.get(*index)?;
    }
    Some(record)
}

/// Keys of every row that has children, in depth-first order.
///
/// With `include_leaves`, top-level rows without children are included
/// too (used when every row can expand a detail region). Nested leaves
/// never are.
pub fn find_row_keys<R: Record>(data: &[R], row_key: &RowKey<R>, include_leaves: bool) -> Vec<String> {
    let mut keys = Vec::new();
    let mut index = 0;
    collect_row_keys(data, row_key, include_leaves, &mut index, &mut keys);
    keys
}

fn collect_row_keys<R: Record>(
    items: &[R],
    row_key: &RowKey<R>,
    include_leaves: bool,
    index: &mut usize,
    keys: &mut Vec<String>,
) {
    for item in items {
        let key = row_key.key_or_synthetic(item, *index);
        *index += 1;

        match item.children() {
            Some(children) => {
                keys.push(key);
                collect_row_keys(children, row_key, false, index, keys);
            }
            None if include_leaves => keys.push(key),
            None => {}
        }
    }
}

/// Keys of every ancestor of `rows[index]`, nearest first.
pub fn find_all_parents(rows: &[FlattenedRow], index: usize) -> Vec<String> {
    let mut parents = Vec::new();
    let mut current = rows.get(index).and_then(|row| row.parent);

    while let Some(parent) = current {
        let Some(row) = rows.get(parent) else {
            break;
        };
        parents.push(row.key.clone());
        current = row.parent;
    }
    parents
}

/// Set of expanded row keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    keys: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn expand(&mut self, key: &str) {
        self.keys.insert(key.to_string());
    }

    pub fn collapse(&mut self, key: &str) {
        self.keys.remove(key);
    }

    /// Flip `key` and return whether it is now expanded.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    /// Whether a row with these ancestors is visible: every ancestor has to
    /// be expanded.
    pub fn shows(&self, parents: &[String]) -> bool {
        parents.iter().all(|key| self.keys.contains(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
