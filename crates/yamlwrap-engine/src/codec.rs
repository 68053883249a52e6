//! Loading and dumping YAML documents.
//!
//! The transform only talks to the [`Loader`] and [`Dumper`] traits so that
//! callers can swap in their own representation rules per invocation instead
//! of configuring the YAML library globally.

use serde::Deserialize;
use serde_yaml::Value;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid YAML: {0}")]
    Parse(#[source] serde_yaml::Error),
    #[error("cannot serialize YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Parses serialized text into one value per YAML document.
pub trait Loader: Send + Sync {
    fn load(&self, text: &str) -> Result<Vec<Value>, CodecError>;
}

/// Serializes documents back into one string.
pub trait Dumper: Send + Sync {
    fn dump(&self, documents: &[Value]) -> Result<String, CodecError>;
}

/// Default codec backed by `serde_yaml`.
///
/// Mapping order is preserved. Multi-line strings are emitted as literal
/// block scalars, which keeps wrapped prose readable in diffs. Documents
/// after the first are introduced with `---`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl YamlCodec {
    pub const DOCUMENT_SEPARATOR: &'static str = "---\n";
}

impl Loader for YamlCodec {
    fn load(&self, text: &str) -> Result<Vec<Value>, CodecError> {
        serde_yaml::Deserializer::from_str(text)
            .map(|document| Value::deserialize(document).map_err(CodecError::Parse))
            .collect()
    }
}

impl Dumper for YamlCodec {
    fn dump(&self, documents: &[Value]) -> Result<String, CodecError> {
        let mut out = String::new();
        for (i, document) in documents.iter().enumerate() {
            if i > 0 {
                out.push_str(Self::DOCUMENT_SEPARATOR);
            }
            out.push_str(&serde_yaml::to_string(document).map_err(CodecError::Serialize)?);
        }
        Ok(out)
    }
}

/// Loads with the default codec.
pub fn load(text: &str) -> Result<Vec<Value>, CodecError> {
    YamlCodec.load(text)
}

/// Dumps with the default codec.
pub fn dump(documents: &[Value]) -> Result<String, CodecError> {
    YamlCodec.dump(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preserves_mapping_order() {
        let docs = load("zebra: 1\napple: 2\nmango: 3\n").unwrap();
        let keys: Vec<_> = docs[0]
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);

        let dumped = dump(&docs).unwrap();
        assert_eq!(dumped, "zebra: 1\napple: 2\nmango: 3\n");
    }

    #[test]
    fn round_trips_multiple_documents() {
        let text = "a: 1\n---\nb: two\n";
        let docs = load(text).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(load(&dump(&docs).unwrap()).unwrap(), docs);
    }

    #[test]
    fn round_trips_multiline_strings() {
        let docs = load("body: |-\n  line one\n\n  line two\n").unwrap();
        assert_eq!(docs[0]["body"].as_str(), Some("line one\n\nline two"));
        assert_eq!(load(&dump(&docs).unwrap()).unwrap(), docs);
    }

    #[test]
    fn rejects_invalid_yaml() {
        let err = load("key: [unclosed").unwrap_err();
        assert!(matches!(err, CodecError::Parse(_)));
    }
}
