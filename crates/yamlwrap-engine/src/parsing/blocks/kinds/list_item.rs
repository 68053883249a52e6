/// Position of a list marker within its line.
///
/// All offsets are byte offsets; list markers and the whitespace around
/// them are ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    /// Leading whitespace before the marker.
    pub indent: usize,
    /// The marker itself plus the whitespace separating it from the item text.
    pub width: usize,
}

impl ListMarker {
    /// Byte offset where the item text begins.
    pub fn content_start(self) -> usize {
        self.indent + self.width
    }
}

/// List item block type: bullet (`-`, `*`, `+`) or ordinal (`1.`, `2)`).
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDINAL_DELIMITERS: [u8; 2] = [b'.', b')'];
    /// CommonMark caps ordinals at nine digits.
    pub const MAX_ORDINAL_DIGITS: usize = 9;

    pub fn marker(line: &str) -> Option<ListMarker> {
        let b = line.as_bytes();
        let indent = b.iter().take_while(|c| matches!(c, b' ' | b'\t')).count();

        let mut i = indent;
        if i < b.len() && Self::BULLETS.contains(&b[i]) {
            i += 1;
        } else {
            let digits = b[i..].iter().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 || digits > Self::MAX_ORDINAL_DIGITS {
                return None;
            }
            i += digits;
            if i < b.len() && Self::ORDINAL_DELIMITERS.contains(&b[i]) {
                i += 1;
            } else {
                return None;
            }
        }

        // The marker must be followed by whitespace or end the line.
        let spacing = b[i..]
            .iter()
            .take_while(|c| matches!(c, b' ' | b'\t'))
            .count();
        if spacing == 0 && i < b.len() {
            return None;
        }

        Some(ListMarker {
            indent,
            width: i - indent + spacing,
        })
    }
}
