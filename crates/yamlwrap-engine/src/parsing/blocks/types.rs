/// The structural role of a block inside a text scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTag {
    /// Prose; the default when no other opener matches.
    Paragraph,
    /// A bullet or ordinal list item with its continuation lines.
    ListItem,
    /// A one-line ATX header, or a setext header with its underline.
    Header,
    /// A fenced code block including both fences. Opaque.
    CodeFence,
    /// A run of lines indented four or more columns. Opaque.
    IndentedCode,
    /// Raw HTML up to the first line ending in `>`.
    HtmlBlock,
    /// A quoted paragraph: one `>` line plus its lazy continuation lines.
    BlockQuote,
    /// A `>` line holding anything but prose, such as a bare `>` or a
    /// quoted list item or fence. Opaque.
    QuotedMarkup,
    /// A horizontal rule. Opaque.
    ThematicBreak,
    /// One whitespace-only line.
    BlankLine,
}

/// One structural unit inside a text scalar.
///
/// `lines` hold the raw text without line terminators. Joining the lines of
/// all blocks of a scalar with `\n` reproduces the scalar exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub tag: BlockTag,
    pub lines: Vec<String>,
}

impl TextBlock {
    pub fn new(tag: BlockTag, lines: Vec<String>) -> Self {
        Self { tag, lines }
    }

    /// Whether interior line breaks of this block are insignificant.
    pub fn is_joinable(&self) -> bool {
        matches!(
            self.tag,
            BlockTag::Paragraph | BlockTag::ListItem | BlockTag::BlockQuote | BlockTag::HtmlBlock
        )
    }

    pub fn is_joined(&self) -> bool {
        self.lines.len() <= 1
    }
}
