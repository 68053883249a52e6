use super::IndentedCode;

/// Header block type: ATX (`#` through `######`) or setext (a paragraph
/// underlined with `=` or `-`).
///
/// Headers are never joined with their neighbours, and the lines of a
/// setext header are kept as written.
pub struct Header;

impl Header {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;
    pub const SETEXT_MARKERS: [char; 2] = ['=', '-'];

    pub fn opens(line: &str) -> bool {
        let t = line.trim_start();
        let level = t.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return false;
        }
        matches!(t[level..].chars().next(), None | Some(' ' | '\t'))
    }

    /// Whether `line` turns the paragraph above it into a setext header.
    pub fn underlines(line: &str) -> bool {
        if IndentedCode::columns(line) >= IndentedCode::MIN_INDENT {
            return false;
        }
        let t = line.trim();
        t.chars()
            .next()
            .filter(|c| Self::SETEXT_MARKERS.contains(c))
            .is_some_and(|marker| t.chars().all(|c| c == marker))
    }
}
