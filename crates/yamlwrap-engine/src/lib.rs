//! # yamlwrap-engine
//!
//! Keeps Markdown-flavoured prose inside YAML documents diff-friendly.
//!
//! Each selected string scalar is segmented into blocks (paragraphs, list
//! items, quoted paragraphs, HTML blocks, headers, code, rules, blank
//! lines). The prose blocks can then be *unwrapped* to one line each, for
//! downstream markup processing, or *wrapped* to a fixed width, for version
//! control. Every operation is idempotent and leaves code, headers, rules
//! and blank lines exactly as they were.
//!
//! ```text
//! YAML text → codec::Loader → Value tree → transform → codec::Dumper → YAML text
//!                                            │
//!                      scalar → parsing::segment → join / wrapping::wrap_block → reassemble
//! ```

pub mod codec;
pub mod error;
pub mod io;
pub mod lint;
pub mod parsing;
pub mod transform;
pub mod wrapping;

use std::num::NonZeroUsize;

pub use codec::{CodecError, Dumper, Loader, YamlCodec};
pub use error::{SelectionError, StructureWarning, TransformError};
pub use parsing::{
    blocks::{BlockTag, TextBlock},
    join, reassemble, segment, segment_checked,
};
pub use transform::{
    DEFAULT_WIDTH, Operation, PathSegment, SelectionPolicy, TransformConfig, transform,
    transform_if_changed, transform_value,
};
pub use wrapping::{MarkdownWrapper, ParagraphWrapper, wrap_block};

/// Unwraps one text scalar: one line per paragraph, list item, quoted
/// paragraph and HTML block.
///
/// Useful on its own for resolving line-break-sensitive markup in text that
/// never passes through YAML.
pub fn unwrap(text: &str) -> String {
    Operation::Unwrap.apply(text, DEFAULT_WIDTH, &MarkdownWrapper)
}

/// Wraps one text scalar to `width` columns.
pub fn wrap(text: &str, width: NonZeroUsize) -> String {
    Operation::Wrap.apply(text, width, &MarkdownWrapper)
}

/// Unwraps, then wraps one text scalar to `width` columns.
pub fn rewrap(text: &str, width: NonZeroUsize) -> String {
    Operation::Rewrap.apply(text, width, &MarkdownWrapper)
}
