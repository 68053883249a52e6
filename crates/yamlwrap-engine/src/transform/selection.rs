use std::{collections::BTreeSet, fmt, sync::Arc};

use serde_yaml::Value;

use crate::error::SelectionError;

/// One step from a document root towards a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, ".{key}"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

/// Renders a path like `.records[2].body`.
pub fn format_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    path.iter().map(ToString::to_string).collect()
}

pub type SelectionPredicate = Arc<dyn Fn(&[PathSegment], Option<&str>, &str) -> bool + Send + Sync>;

/// Decides which string scalars are transformed.
///
/// Key lists act on the record level: the keys of the root mapping, or of
/// each mapping directly inside a root sequence. A scalar is judged by the
/// first mapping key on its path, so everything nested under a selected key
/// is selected too.
#[derive(Clone, Default)]
pub enum SelectionPolicy {
    /// Every string scalar.
    #[default]
    All,
    /// Only scalars under these record-level keys.
    Include(Vec<String>),
    /// Every scalar except those under these record-level keys.
    Exclude(Vec<String>),
    /// Caller-supplied predicate over (path, nearest key, value).
    Custom(SelectionPredicate),
}

impl SelectionPolicy {
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&[PathSegment], Option<&str>, &str) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    pub fn selects(&self, path: &[PathSegment], key: Option<&str>, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Include(keys) => record_key(path).is_some_and(|k| keys.iter().any(|x| x == k)),
            Self::Exclude(keys) => !record_key(path).is_some_and(|k| keys.iter().any(|x| x == k)),
            Self::Custom(predicate) => predicate(path, key, value),
        }
    }

    /// Checks that every listed key occurs at the record level of at least
    /// one document. Empty documents have no record level and are skipped;
    /// if all documents are empty there is nothing to select and the check
    /// passes.
    pub fn validate(&self, documents: &[Value]) -> Result<(), SelectionError> {
        let keys = match self {
            Self::Include(keys) | Self::Exclude(keys) => keys,
            Self::All | Self::Custom(_) => return Ok(()),
        };

        let mut present = BTreeSet::new();
        let mut any_records = false;
        for document in documents {
            for record in records(document) {
                any_records = true;
                present.extend(record.keys().map(key_label));
            }
        }
        if !any_records {
            return Ok(());
        }

        match keys.iter().find(|k| !present.contains(k.as_str())) {
            Some(key) => Err(SelectionError::MissingKey { key: key.clone() }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Include(keys) => f.debug_tuple("Include").field(keys).finish(),
            Self::Exclude(keys) => f.debug_tuple("Exclude").field(keys).finish(),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Text of a mapping key as used in paths and key lists.
pub fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "~".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn record_key(path: &[PathSegment]) -> Option<&str> {
    path.iter().find_map(|segment| match segment {
        PathSegment::Key(key) => Some(key.as_str()),
        PathSegment::Index(_) => None,
    })
}

fn records(document: &Value) -> Vec<&serde_yaml::Mapping> {
    match document {
        Value::Mapping(map) => vec![map],
        Value::Sequence(items) => items.iter().filter_map(Value::as_mapping).collect(),
        Value::Tagged(tagged) => records(&tagged.value),
        _ => vec![],
    }
}
