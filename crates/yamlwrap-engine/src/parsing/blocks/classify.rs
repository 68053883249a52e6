use super::{
    kinds::{CodeFence, FenceSig, IndentedCode},
    open::{BlockOpen, try_open_leaf},
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of segmentation: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Byte length of the leading whitespace.
    pub indent: usize,
    /// Width of the leading whitespace in columns, tabs expanded.
    pub columns: usize,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    /// The block this line would open, if any.
    pub opener: Option<BlockOpen>,
}

/// Classifies individual lines for the segmentation phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        let is_blank = line.trim().is_empty();
        let indent = line.len() - line.trim_start().len();

        LineClass {
            is_blank,
            indent,
            columns: IndentedCode::columns(line),
            fence_sig: CodeFence::sig(line),
            opener: if is_blank { None } else { try_open_leaf(line) },
        }
    }
}
