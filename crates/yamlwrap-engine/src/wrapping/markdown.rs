use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag};
use unicode_width::UnicodeWidthStr;

use super::ParagraphWrapper;
use crate::parsing::blocks::opens_block;

/// Greedy Markdown-aware line filler.
///
/// Breaks only at a single space between two non-space characters, and
/// never:
///
/// - inside a link, image, emphasis, strong or strikethrough span,
/// - inside an inline code span or inline HTML,
/// - before a word that would open a new block at the start of a line,
///   such as a list marker, a rule or a setext underline.
///
/// Words longer than the width are left whole on a line of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownWrapper;

impl ParagraphWrapper for MarkdownWrapper {
    fn wrap_line(&self, line: &str, width: usize) -> String {
        let protected = protected_ranges(line);
        let atoms = split_atoms(line, &protected);
        fill(&atoms, width).join("\n")
    }
}

/// Byte ranges of inline constructs that must stay on one line.
fn protected_ranges(line: &str) -> Vec<Range<usize>> {
    Parser::new_ext(line, Options::ENABLE_STRIKETHROUGH)
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            Event::Start(
                Tag::Link { .. }
                | Tag::Image { .. }
                | Tag::Emphasis
                | Tag::Strong
                | Tag::Strikethrough,
            )
            | Event::Code(_)
            | Event::InlineHtml(_) => Some(range),
            _ => None,
        })
        .collect()
}

/// Splits `line` at every legal break point.
fn split_atoms<'a>(line: &'a str, protected: &[Range<usize>]) -> Vec<&'a str> {
    let b = line.as_bytes();
    let mut atoms = Vec::new();
    let mut start = 0;

    for i in 1..b.len().saturating_sub(1) {
        let lone_space = b[i] == b' ' && b[i - 1] != b' ' && b[i + 1] != b' ';
        if !lone_space
            || protected.iter().any(|r| r.start < i && i < r.end)
            || opens_block(&line[i + 1..])
        {
            continue;
        }
        atoms.push(&line[start..i]);
        start = i + 1;
    }

    atoms.push(&line[start..]);
    atoms
}

fn fill(atoms: &[&str], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for atom in atoms {
        let w = atom.width();
        if current.is_empty() {
            current.push_str(atom);
            current_width = w;
        } else if current_width + 1 + w <= width {
            current.push(' ');
            current.push_str(atom);
            current_width += 1 + w;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(atom);
            current_width = w;
        }
    }

    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn wrap(line: &str, width: usize) -> String {
        MarkdownWrapper.wrap_line(line, width)
    }

    #[rstest]
    #[case("A short line.", 10, "A short\nline.")]
    #[case("aa bb", 3, "aa\nbb")]
    #[case("a a", 7, "a a")]
    #[case("b b b b", 6, "b b b\nb")]
    #[case("c-c-c-c", 3, "c-c-c-c")]
    #[case("", 5, "")]
    fn fills_greedily(#[case] line: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(wrap(line, width), expected);
    }

    #[test]
    fn never_breaks_inside_link() {
        assert_eq!(
            wrap("see [the full docs](https://example.com/a) now", 10),
            "see\n[the full docs](https://example.com/a)\nnow"
        );
    }

    #[test]
    fn never_breaks_inside_code_span() {
        assert_eq!(wrap("run `cargo fmt --all` first", 8), "run\n`cargo fmt --all`\nfirst");
    }

    #[test]
    fn never_breaks_inside_emphasis() {
        assert_eq!(wrap("a *b c* d", 3), "a\n*b c*\nd");
    }

    #[test]
    fn does_not_start_a_line_with_a_list_marker() {
        assert_eq!(wrap("one - two", 3), "one -\ntwo");
        assert_eq!(wrap("in 1984. Then", 4), "in 1984.\nThen");
    }

    #[test]
    fn does_not_start_a_line_with_a_rule_or_underline() {
        assert_eq!(wrap("Some text ---", 9), "Some\ntext ---");
        assert_eq!(wrap("x = y", 1), "x =\ny");
        assert_eq!(wrap("then *** and", 4), "then ***\nand");
    }

    #[test]
    fn runs_of_spaces_are_not_break_points() {
        assert_eq!(wrap("aa   aa", 2), "aa   aa");
    }

    #[test]
    fn measures_display_width() {
        assert_eq!(wrap("日本 語", 4), "日本\n語");
    }
}
