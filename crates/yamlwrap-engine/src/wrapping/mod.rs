//! Reflowing of joined paragraphs, list items, quoted paragraphs and HTML
//! blocks.
//!
//! The line-breaking itself is delegated to a [`ParagraphWrapper`]. This
//! module owns the block-level concerns around it: list and quote markers,
//! indentation, and making sure the wrapped block reads back as the same
//! block.

pub mod markdown;

use std::num::NonZeroUsize;

use unicode_width::UnicodeWidthStr;

use crate::parsing::{
    blocks::{
        BlockTag, TextBlock,
        kinds::{BlockQuote, ListItem, Paragraph},
    },
    join, join_lines, reassemble, segment_fragment,
};

pub use markdown::MarkdownWrapper;

/// Breaks one logical line of prose into lines of at most `width` columns.
///
/// Implementations must only break at spaces, returning lines separated by
/// `\n` without leading or trailing whitespace around each break. Anything
/// else makes the output fail verification and the line is left unwrapped.
pub trait ParagraphWrapper: Send + Sync {
    fn wrap_line(&self, line: &str, width: usize) -> String;
}

impl<F> ParagraphWrapper for F
where
    F: Fn(&str, usize) -> String + Send + Sync,
{
    fn wrap_line(&self, line: &str, width: usize) -> String {
        self(line, width)
    }
}

/// Joins `block` if needed, then reflows it to `width` columns.
///
/// List item continuation lines are indented to align under the item text.
/// Quoted paragraphs continue on lazy lines without `>`. HTML blocks measure
/// the width from their first tag and continue unindented. Headers, code,
/// quoted markup, rules and blank lines pass through unchanged.
pub fn wrap_block(
    block: TextBlock,
    width: NonZeroUsize,
    wrapper: &dyn ParagraphWrapper,
) -> TextBlock {
    if !block.is_joinable() {
        return block;
    }

    let joined = join(block);
    let [line] = joined.lines.as_slice() else {
        return joined;
    };

    let (prefix, hanging, body) = split_prefix(joined.tag, line);
    if body.is_empty() {
        return joined;
    }

    let reserved = match joined.tag {
        BlockTag::HtmlBlock => 0,
        _ => prefix.width(),
    };
    let avail = width.get().saturating_sub(reserved).max(1);
    let wrapped = wrapper.wrap_line(body, avail);
    let lines: Vec<String> = wrapped
        .split('\n')
        .enumerate()
        .map(|(i, l)| {
            if i == 0 {
                format!("{prefix}{l}")
            } else {
                format!("{hanging}{l}")
            }
        })
        .collect();

    let candidate = TextBlock::new(joined.tag, lines);
    if reads_back_as(&candidate, line) {
        candidate
    } else {
        log::debug!("wrapper output does not read back as one block; leaving line unwrapped");
        joined
    }
}

/// Splits a joined line into (first-line prefix, continuation prefix, body).
fn split_prefix(tag: BlockTag, line: &str) -> (&str, String, &str) {
    if tag == BlockTag::ListItem
        && let Some(marker) = ListItem::marker(line)
    {
        let (prefix, body) = line.split_at(marker.content_start());
        let marker_cols = prefix[marker.indent..].width();
        let hanging = format!("{}{}", &prefix[..marker.indent], " ".repeat(marker_cols));
        return (prefix, hanging, body);
    }

    match tag {
        BlockTag::BlockQuote => {
            let (prefix, body) = BlockQuote::split(line);
            (prefix, String::new(), body)
        }
        BlockTag::HtmlBlock => {
            let (indent, body) = Paragraph::split_indent(line);
            (indent, String::new(), body)
        }
        _ => {
            let (indent, body) = Paragraph::split_indent(line);
            (indent, indent.to_string(), body)
        }
    }
}

/// The wrapped block must segment as exactly itself and join back to the
/// original line, or a later unwrap/wrap would not reproduce it.
fn reads_back_as(candidate: &TextBlock, original: &str) -> bool {
    let seg = segment_fragment(&reassemble(std::slice::from_ref(candidate)));
    matches!(seg.blocks.as_slice(), [b] if b == candidate) && join_lines(&candidate.lines) == original
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn width(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn block(tag: BlockTag, lines: &[&str]) -> TextBlock {
        TextBlock::new(tag, lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn wraps_paragraph() {
        let out = wrap_block(
            block(BlockTag::Paragraph, &["A short line."]),
            width(10),
            &MarkdownWrapper,
        );
        assert_eq!(out.lines, vec!["A short", "line."]);
    }

    #[test]
    fn joins_before_wrapping() {
        let out = wrap_block(
            block(BlockTag::Paragraph, &["a a", "a a a", "a"]),
            width(7),
            &MarkdownWrapper,
        );
        assert_eq!(out.lines, vec!["a a a a", "a a"]);
    }

    #[test]
    fn list_item_continuations_align_under_text() {
        let out = wrap_block(
            block(BlockTag::ListItem, &["- item one continued"]),
            width(10),
            &MarkdownWrapper,
        );
        assert_eq!(out.lines, vec!["- item one", "  continued"]);
    }

    #[test]
    fn nested_ordinal_item_keeps_indent() {
        let out = wrap_block(
            block(BlockTag::ListItem, &["   10. alpha beta gamma"]),
            width(16),
            &MarkdownWrapper,
        );
        assert_eq!(out.lines, vec!["   10. alpha", "       beta", "       gamma"]);
    }

    #[test]
    fn indented_paragraph_keeps_indent() {
        let out = wrap_block(
            block(BlockTag::Paragraph, &["  indented text here"]),
            width(12),
            &MarkdownWrapper,
        );
        assert_eq!(out.lines, vec!["  indented", "  text here"]);
    }

    #[test]
    fn html_block_is_measured_from_its_tag() {
        let out = wrap_block(
            block(BlockTag::HtmlBlock, &["    <td>The only data</td>"]),
            width(15),
            &MarkdownWrapper,
        );
        assert_eq!(out.lines, vec!["    <td>The only", "data</td>"]);
    }

    #[test]
    fn quoted_paragraph_continues_lazily() {
        let out = wrap_block(
            block(BlockTag::BlockQuote, &["> b b", "b"]),
            width(5),
            &MarkdownWrapper,
        );
        assert_eq!(out.lines, vec!["> b b", "b"]);

        let out = wrap_block(
            block(BlockTag::BlockQuote, &["> > nested quote text"]),
            width(16),
            &MarkdownWrapper,
        );
        assert_eq!(out.lines, vec!["> > nested quote", "text"]);
    }

    #[test]
    fn opaque_blocks_pass_through() {
        let fence = block(BlockTag::CodeFence, &["```", "code  line that is long", "```"]);
        assert_eq!(wrap_block(fence.clone(), width(3), &MarkdownWrapper), fence);
        let header = block(BlockTag::Header, &["# A header that is long"]);
        assert_eq!(wrap_block(header.clone(), width(3), &MarkdownWrapper), header);
        let code = block(BlockTag::IndentedCode, &["    let x = some_long_call();"]);
        assert_eq!(wrap_block(code.clone(), width(3), &MarkdownWrapper), code);
        let bare = block(BlockTag::QuotedMarkup, &[">"]);
        assert_eq!(wrap_block(bare.clone(), width(3), &MarkdownWrapper), bare);
    }

    #[test]
    fn misbehaving_wrapper_falls_back_to_joined_line() {
        let bullets = |line: &str, _width: usize| line.replace(' ', "\n- ");
        let out = wrap_block(
            block(BlockTag::Paragraph, &["one two", "three"]),
            width(5),
            &bullets,
        );
        assert_eq!(out.lines, vec!["one two three"]);
    }

    #[test]
    fn injected_wrapper_is_used() {
        let one_word_per_line = |line: &str, _width: usize| line.replace(' ', "\n");
        let out = wrap_block(
            block(BlockTag::Paragraph, &["one two three"]),
            width(80),
            &one_word_per_line,
        );
        assert_eq!(out.lines, vec!["one", "two", "three"]);
    }
}
