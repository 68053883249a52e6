pub mod blocks;

use blocks::{BlockBuilder, MarkdownLineClassifier, TextBlock};

use crate::error::StructureWarning;

/// The blocks of one text scalar plus anything odd noticed on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub blocks: Vec<TextBlock>,
    pub warnings: Vec<StructureWarning>,
}

/// Splits `text` into blocks, returning structural warnings alongside.
pub fn segment_checked(text: &str) -> Segmentation {
    segment_with(BlockBuilder::new(), text)
}

/// Segments lines that continue a block from earlier in a text, as a
/// wrapped block does. Indented first lines are not read as code.
pub(crate) fn segment_fragment(text: &str) -> Segmentation {
    segment_with(BlockBuilder::continuing(), text)
}

fn segment_with(mut builder: BlockBuilder, text: &str) -> Segmentation {
    let classifier = MarkdownLineClassifier;
    for line in text.split('\n') {
        let lc = classifier.classify(line);
        builder.push(line, &lc);
    }

    let (blocks, warnings) = builder.finish();
    Segmentation { blocks, warnings }
}

/// Splits `text` into blocks. Structural warnings are logged, not returned;
/// the malformed region is kept as an opaque block either way.
pub fn segment(text: &str) -> Vec<TextBlock> {
    let Segmentation { blocks, warnings } = segment_checked(text);
    for warning in &warnings {
        log::warn!("{warning}");
    }
    blocks
}

/// Collapses the interior line breaks of a paragraph, list item, quoted
/// paragraph or HTML block into single spaces. Other blocks, and blocks that are already one line, come back as-is.
pub fn join(block: TextBlock) -> TextBlock {
    if !block.is_joinable() || block.is_joined() {
        return block;
    }
    let line = join_lines(&block.lines);
    TextBlock::new(block.tag, vec![line])
}

/// Joins lines with one space, dropping whitespace adjacent to each break.
///
/// Leading whitespace of the first line and trailing whitespace of the last
/// line are kept.
pub fn join_lines(lines: &[String]) -> String {
    let last = lines.len().saturating_sub(1);
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        let mut part = line.as_str();
        if i > 0 {
            part = part.trim_start();
            out.push(' ');
        }
        if i < last {
            part = part.trim_end();
        }
        out.push_str(part);
    }
    out
}

/// Concatenates blocks back into one string, one `\n` between lines.
pub fn reassemble(blocks: &[TextBlock]) -> String {
    let lines: Vec<&str> = blocks
        .iter()
        .flat_map(|b| b.lines.iter().map(String::as_str))
        .collect();
    lines.join("\n")
}
