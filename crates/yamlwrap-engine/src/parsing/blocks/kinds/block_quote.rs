/// Blockquote block type.
///
/// A quoted paragraph is one `>` line plus any lazy continuation lines
/// without a `>`. Each new `>` line starts a new quoted paragraph, so a
/// bare `>` line separates paragraphs inside a quote.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn opens(line: &str) -> bool {
        line.trim_start().starts_with(Self::PREFIX)
    }

    /// Splits a quote line into its prefix (indentation plus every `>`,
    /// each with one optional following space) and the quoted content.
    pub fn split(line: &str) -> (&str, &str) {
        let b = line.as_bytes();
        let mut i = b.iter().take_while(|&&c| c == b' ' || c == b'\t').count();
        while i < b.len() && b[i] == b'>' {
            i += 1;
            if i < b.len() && b[i] == b' ' {
                i += 1;
            }
        }
        line.split_at(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_quotes() {
        assert!(BlockQuote::opens("> quoted"));
        assert!(BlockQuote::opens(">> nested"));
        assert!(BlockQuote::opens("   >"));
    }

    #[test]
    fn rejects_inline_greater_than() {
        assert!(!BlockQuote::opens("a > b"));
    }

    #[test]
    fn splits_prefix_from_content() {
        assert_eq!(BlockQuote::split("> b b"), ("> ", "b b"));
        assert_eq!(BlockQuote::split("  > > nested"), ("  > > ", "nested"));
        assert_eq!(BlockQuote::split(">"), (">", ""));
        assert_eq!(BlockQuote::split(">      code"), ("> ", "     code"));
    }
}
