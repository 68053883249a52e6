use std::{fmt, num::NonZeroUsize};

use crate::{
    parsing::{join, reassemble, segment},
    wrapping::{ParagraphWrapper, wrap_block},
};

/// What to do with each selected text scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// One line per paragraph, list item, quoted paragraph and HTML block.
    Unwrap,
    /// Reflow those blocks to the target width.
    Wrap,
    /// Unwrap, then wrap. The canonical form for version control.
    Rewrap,
}

impl Operation {
    /// Applies this operation to one text scalar.
    ///
    /// `Wrap` expects unwrapped input but the adapter joins any block that
    /// is not, so it produces the same result as `Rewrap`.
    pub fn apply(self, text: &str, width: NonZeroUsize, wrapper: &dyn ParagraphWrapper) -> String {
        let blocks = segment(text);
        let blocks: Vec<_> = match self {
            Operation::Unwrap => blocks.into_iter().map(join).collect(),
            Operation::Wrap => blocks
                .into_iter()
                .map(|b| wrap_block(b, width, wrapper))
                .collect(),
            Operation::Rewrap => blocks
                .into_iter()
                .map(|b| wrap_block(join(b), width, wrapper))
                .collect(),
        };
        reassemble(&blocks)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Unwrap => "unwrap",
            Operation::Wrap => "wrap",
            Operation::Rewrap => "rewrap",
        })
    }
}
