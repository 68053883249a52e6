/// Thematic break block type: three or more `*`, `-` or `_`, optionally
/// separated by spaces. Always one line, never joined.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['*', '-', '_'];
    pub const MIN_LEN: usize = 3;

    pub fn opens(line: &str) -> bool {
        let t = line.trim();
        let Some(marker) = t.chars().next().filter(|c| Self::MARKERS.contains(c)) else {
            return false;
        };
        let mut count = 0;
        for c in t.chars() {
            if c == marker {
                count += 1;
            } else if !matches!(c, ' ' | '\t') {
                return false;
            }
        }
        count >= Self::MIN_LEN
    }
}
