#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// What a single line looks like when read as a fence delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Number of fence characters in the leading run.
    pub len: usize,
    /// True when nothing but the fence run is on the line (a valid closer).
    pub bare: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: char = '`';
    pub const TILDE: char = '~';
    pub const MIN_LEN: usize = 3;

    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim();
        let (kind, ch) = if t.starts_with(Self::BACKTICK) {
            (FenceKind::Backticks, Self::BACKTICK)
        } else if t.starts_with(Self::TILDE) {
            (FenceKind::Tildes, Self::TILDE)
        } else {
            return None;
        };

        let len = t.chars().take_while(|&c| c == ch).count();
        if len < Self::MIN_LEN {
            return None;
        }

        Some(FenceSig {
            kind,
            len,
            bare: t[len * ch.len_utf8()..].trim().is_empty(),
        })
    }

    /// A fence closes on a bare run of the same character that is at least
    /// as long as the opening run.
    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        matches!(sig, Some(s) if s.bare && s.kind == open.kind && s.len >= open.len)
    }
}
