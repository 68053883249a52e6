/// Indented code block type.
///
/// A line indented four or more columns opens one when it follows a blank
/// line or starts the text, outside any list. Following lines indented as
/// far belong to it. The block is passed through verbatim.
pub struct IndentedCode;

impl IndentedCode {
    pub const MIN_INDENT: usize = 4;
    pub const TAB_STOP: usize = 4;

    /// Width of the leading whitespace in columns, tabs advancing to the
    /// next tab stop.
    pub fn columns(line: &str) -> usize {
        let mut col = 0;
        for c in line.chars() {
            match c {
                ' ' => col += 1,
                '\t' => col += Self::TAB_STOP - col % Self::TAB_STOP,
                _ => break,
            }
        }
        col
    }

    pub fn indented(line: &str) -> bool {
        !line.trim().is_empty() && Self::columns(line) >= Self::MIN_INDENT
    }
}
