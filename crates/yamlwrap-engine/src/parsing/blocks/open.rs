use super::kinds::{
    BlockQuote, CodeFence, FenceSig, Header, HtmlBlock, ListItem, ListMarker, ThematicBreak,
};

/// A block opener detected at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode(FenceSig),
    Header,
    ThematicBreak,
    BlockQuote,
    ListItem(ListMarker),
    Html,
}

pub fn try_open_leaf(line: &str) -> Option<BlockOpen> {
    // Precedence: fence beats everything else.
    if let Some(sig) = CodeFence::sig(line) {
        return Some(BlockOpen::FencedCode(sig));
    }
    if Header::opens(line) {
        return Some(BlockOpen::Header);
    }
    // `- - -` is a rule, not a list item
    if ThematicBreak::opens(line) {
        return Some(BlockOpen::ThematicBreak);
    }
    if BlockQuote::opens(line) {
        return Some(BlockOpen::BlockQuote);
    }
    if let Some(marker) = ListItem::marker(line) {
        return Some(BlockOpen::ListItem(marker));
    }
    HtmlBlock::opens(line).then_some(BlockOpen::Html)
}

/// Whether `text`, placed at the start of a line, would end the paragraph
/// it continues.
///
/// Wrappers use this to avoid breaking a line right before a word such as
/// `-`, `3.` or `---` that would then be read back as a new block. HTML
/// cannot interrupt a paragraph, so a break before a tag is safe.
pub fn opens_block(text: &str) -> bool {
    if !matches!(try_open_leaf(text), None | Some(BlockOpen::Html)) {
        return true;
    }
    text.split_whitespace()
        .next()
        .is_some_and(|word| Header::underlines(word) || ThematicBreak::opens(word))
}
