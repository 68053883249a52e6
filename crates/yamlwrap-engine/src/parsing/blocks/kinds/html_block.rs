/// HTML block type.
///
/// Opens on a line whose text starts with a tag, comment or declaration.
/// The block ends after the first line ending in `>`, so a break between
/// `>` and the next `<` line is never joined. Text lines before that point
/// are joined and reflowed like prose.
pub struct HtmlBlock;

impl HtmlBlock {
    pub const OPEN: char = '<';
    pub const CLOSE: char = '>';

    pub fn opens(line: &str) -> bool {
        let mut chars = line.trim_start().chars();
        chars.next() == Some(Self::OPEN)
            && matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
    }

    pub fn closes(line: &str) -> bool {
        line.trim_end().ends_with(Self::CLOSE)
    }
}
