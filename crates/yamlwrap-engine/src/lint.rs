//! Checks that can run over each selected scalar through
//! [`TransformConfig::with_lint`](crate::TransformConfig::with_lint).

/// Paragraphs longer than this many characters are worth splitting: markup
/// resolvers and human readers both slow down on very long paragraphs.
pub const DEFAULT_LONG_PARAGRAPH_THRESHOLD: usize = 1200;

const EXCERPT_CHARS: usize = 50;

/// Returns the opening of every unwrapped paragraph longer than `threshold`
/// characters.
pub fn long_paragraphs(text: &str, threshold: usize) -> Vec<String> {
    crate::unwrap(text)
        .split('\n')
        .filter(|line| line.chars().count() > threshold)
        .map(|line| line.chars().take(EXCERPT_CHARS).collect())
        .collect()
}

/// Logs every paragraph in `text` longer than `threshold` characters.
pub fn warn_on_long_paragraph(text: &str, threshold: usize) {
    for excerpt in long_paragraphs(text, threshold) {
        log::info!("Long paragraph begins \"{excerpt}...\".");
    }
}
