use crate::codec::CodecError;

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Failed to parse document: {0}")]
    DocumentParse(#[source] CodecError),
    #[error("Failed to serialize document: {0}")]
    DocumentDump(#[source] CodecError),
    #[error("Invalid selection: {0}")]
    Selection(#[from] SelectionError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("key \"{key}\" does not occur in any top-level mapping")]
    MissingKey { key: String },
}

/// Malformed structure inside a text scalar. Never fatal: the affected
/// region is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureWarning {
    #[error("code fence opened on line {line} is never closed; passing the rest of the text through unchanged")]
    UnterminatedFence { line: usize },
}
