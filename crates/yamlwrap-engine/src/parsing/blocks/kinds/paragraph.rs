/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// block opener matches. Their interior line breaks are insignificant and may
/// be joined or reflowed.
pub struct Paragraph;

impl Paragraph {
    /// Splits a paragraph line into its leading indentation and its text.
    pub fn split_indent(line: &str) -> (&str, &str) {
        let body = line.trim_start();
        line.split_at(line.len() - body.len())
    }
}
