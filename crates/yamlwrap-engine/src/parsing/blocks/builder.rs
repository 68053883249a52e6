use crate::error::StructureWarning;

use super::{
    classify::LineClass,
    kinds::{BlockQuote, CodeFence, FenceSig, Header, HtmlBlock, IndentedCode},
    open::{BlockOpen, try_open_leaf},
    types::{BlockTag, TextBlock},
};

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        lines: Vec<String>,
    },
    ListItem {
        marker_indent: usize,
        lines: Vec<String>,
    },
    Quote {
        lines: Vec<String>,
    },
    Html {
        lines: Vec<String>,
    },
    IndentedCode {
        lines: Vec<String>,
    },
    Fence {
        sig: FenceSig,
        opened_at: usize,
        lines: Vec<String>,
    },
}

/// State machine turning classified lines into [`TextBlock`]s.
pub struct BlockBuilder {
    leaf: LeafState,
    line_no: usize,
    /// Whether the previous line was blank, or there was none.
    after_blank: bool,
    /// Inside a list, where deep indentation continues an item instead of
    /// opening indented code.
    in_list: bool,
    /// An open fence inside a quote, whose lines are kept as markup.
    quoted_fence: Option<FenceSig>,
    out: Vec<TextBlock>,
    warnings: Vec<StructureWarning>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            line_no: 0,
            after_blank: true,
            in_list: false,
            quoted_fence: None,
            out: vec![],
            warnings: vec![],
        }
    }

    /// A builder for lines taken from the middle of a text, where the first
    /// line does not follow a blank line.
    pub fn continuing() -> Self {
        Self {
            after_blank: false,
            ..Self::new()
        }
    }

    pub fn push(&mut self, line: &str, c: &LineClass) {
        self.line_no += 1;
        let after_blank = std::mem::replace(&mut self.after_blank, c.is_blank);

        if self.in_fence() {
            self.consume_fence_line(line, c);
            return;
        }

        if c.opener != Some(BlockOpen::BlockQuote) {
            self.quoted_fence = None;
        }

        if c.is_blank {
            self.flush_leaf();
            self.emit(BlockTag::BlankLine, line);
            return;
        }

        if c.columns >= IndentedCode::MIN_INDENT {
            if let LeafState::IndentedCode { lines } = &mut self.leaf {
                lines.push(line.to_string());
                return;
            }
            if after_blank && !self.in_list {
                self.flush_leaf();
                self.leaf = LeafState::IndentedCode {
                    lines: vec![line.to_string()],
                };
                return;
            }
        }

        if c.columns == 0 && !matches!(c.opener, Some(BlockOpen::ListItem(_))) {
            self.in_list = false;
        }

        if Header::underlines(line)
            && matches!(self.leaf, LeafState::Paragraph { .. } | LeafState::Html { .. })
        {
            self.close_setext_header(line);
            return;
        }

        match c.opener {
            Some(BlockOpen::FencedCode(sig)) => {
                self.flush_leaf();
                self.leaf = LeafState::Fence {
                    sig,
                    opened_at: self.line_no,
                    lines: vec![line.to_string()],
                };
            }
            Some(BlockOpen::Header) => {
                self.flush_leaf();
                self.emit(BlockTag::Header, line);
            }
            Some(BlockOpen::ThematicBreak) => {
                self.flush_leaf();
                self.emit(BlockTag::ThematicBreak, line);
            }
            Some(BlockOpen::ListItem(marker)) => {
                self.flush_leaf();
                self.in_list = true;
                self.leaf = LeafState::ListItem {
                    marker_indent: marker.indent,
                    lines: vec![line.to_string()],
                };
            }
            Some(BlockOpen::BlockQuote) => self.push_quote(line),
            Some(BlockOpen::Html) => self.extend_text(line, c.indent, true),
            None => self.extend_text(line, c.indent, false),
        }
    }

    /// Emits any open block. An unterminated fence becomes a code block
    /// running to the end of the text and is reported as a warning.
    pub fn finish(mut self) -> (Vec<TextBlock>, Vec<StructureWarning>) {
        // EOF flush
        self.flush_leaf();
        self.flush_fence();
        (self.out, self.warnings)
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn emit(&mut self, tag: BlockTag, line: &str) {
        self.out.push(TextBlock::new(tag, vec![line.to_string()]));
    }

    fn consume_fence_line(&mut self, line: &str, c: &LineClass) {
        let LeafState::Fence { sig, lines, .. } = &mut self.leaf else {
            return;
        };
        lines.push(line.to_string());

        if CodeFence::closes(*sig, c.fence_sig) {
            let lines = std::mem::take(lines);
            self.out.push(TextBlock::new(BlockTag::CodeFence, lines));
            self.leaf = LeafState::None;
        }
    }

    /// Every `>` line starts a new block. Only quoted prose is joinable;
    /// quoted fences, lists, headers and blank `>` lines are kept verbatim.
    fn push_quote(&mut self, line: &str) {
        self.flush_leaf();
        let (_, content) = BlockQuote::split(line);

        if let Some(open) = self.quoted_fence {
            if CodeFence::closes(open, CodeFence::sig(content)) {
                self.quoted_fence = None;
            }
            self.emit(BlockTag::QuotedMarkup, line);
            return;
        }

        if let Some(sig) = CodeFence::sig(content) {
            self.quoted_fence = Some(sig);
            self.emit(BlockTag::QuotedMarkup, line);
            return;
        }

        if content.trim().is_empty()
            || IndentedCode::indented(content)
            || try_open_leaf(content).is_some()
            || Header::underlines(content)
        {
            self.emit(BlockTag::QuotedMarkup, line);
            return;
        }

        self.leaf = LeafState::Quote {
            lines: vec![line.to_string()],
        };
    }

    fn extend_text(&mut self, line: &str, indent: usize, html: bool) {
        // List items absorb lines indented past their marker; anything else
        // at the marker's indentation or less starts a new block. Quotes
        // take lazy continuation lines.
        let continues = match &self.leaf {
            LeafState::Paragraph { .. } | LeafState::Quote { .. } | LeafState::Html { .. } => true,
            LeafState::ListItem { marker_indent, .. } => indent > *marker_indent,
            _ => false,
        };

        if continues {
            if let LeafState::Paragraph { lines }
            | LeafState::ListItem { lines, .. }
            | LeafState::Quote { lines }
            | LeafState::Html { lines } = &mut self.leaf
            {
                lines.push(line.to_string());
            }
        } else {
            self.flush_leaf();
            let lines = vec![line.to_string()];
            self.leaf = if html {
                LeafState::Html { lines }
            } else {
                LeafState::Paragraph { lines }
            };
        }

        if matches!(self.leaf, LeafState::Html { .. }) && HtmlBlock::closes(line) {
            self.flush_leaf();
        }
    }

    fn close_setext_header(&mut self, underline: &str) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph { mut lines } | LeafState::Html { mut lines } = prev {
            lines.push(underline.to_string());
            self.out.push(TextBlock::new(BlockTag::Header, lines));
        }
    }

    fn flush_leaf(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        let block = match prev {
            LeafState::None => return,
            LeafState::Paragraph { lines } => TextBlock::new(BlockTag::Paragraph, lines),
            LeafState::ListItem { lines, .. } => TextBlock::new(BlockTag::ListItem, lines),
            LeafState::Quote { lines } => TextBlock::new(BlockTag::BlockQuote, lines),
            LeafState::Html { lines } => TextBlock::new(BlockTag::HtmlBlock, lines),
            LeafState::IndentedCode { lines } => TextBlock::new(BlockTag::IndentedCode, lines),
            fence @ LeafState::Fence { .. } => {
                self.leaf = fence; // put back; fences only close on their own delimiter
                return;
            }
        };
        self.out.push(block);
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            opened_at, lines, ..
        } = prev
        {
            self.warnings
                .push(StructureWarning::UnterminatedFence { line: opened_at });
            self.out.push(TextBlock::new(BlockTag::CodeFence, lines));
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
