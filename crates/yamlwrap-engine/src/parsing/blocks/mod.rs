//! # Block Segmentation
//!
//! Two-phase segmentation of a text scalar into structural blocks.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (indentation, blank status, fence signature, block opener)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` state machine tracks the
//!    open block and emits `TextBlock`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`TextBlock`, `BlockTag`)
//! - **`kinds`**: Block-specific syntax knowledge (CodeFence, IndentedCode, HtmlBlock, ListItem, Header,
//!   ThematicBreak, BlockQuote, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every input line lands in exactly one block, in order, unmodified
//! - Fenced code blocks are raw zones: blank lines and openers inside are absorbed
//! - A blank line always forms its own block
//! - Indented code opens only after a blank line or at the start, outside lists

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use open::{BlockOpen, opens_block};
pub use types::{BlockTag, TextBlock};
