//! ANSI-aware text measurement, truncation, and padding.
//!
//! Escape sequences are invisible: they never count toward display width and
//! every function in this module keeps them, in order, in its output. Only
//! visible characters are ever removed.
//!
//! Widths are summed per code point with `unicode-width`:
//!
//! - combining marks and other zero-width code points count 0 cells
//! - East Asian wide/fullwidth glyphs and most emoji count 2 cells
//! - everything else, including East Asian *ambiguous* code points, counts 1
//!
//! Treating ambiguous code points as narrow matches what terminals do outside
//! CJK locales; it is a policy, not a universal truth.
//!
//! # Example
//!
//! ```rust
//! use standout_layout::width::{display_width, strip_ansi, truncate};
//!
//! assert_eq!(display_width("\x1b[31mhello\x1b[0m"), 5);
//! assert_eq!(display_width("你好"), 4);
//! assert_eq!(strip_ansi("\x1b[1mbold\x1b[0m"), "bold");
//! assert_eq!(truncate("hello world", 5, "…"), "hell…");
//! ```

use std::borrow::Cow;

use unicode_width::UnicodeWidthChar;

use crate::position::Align;

/// Tail appended when content is truncated and no other tail is configured.
pub const DEFAULT_ELLIPSIS: &str = "…";

const ESC: char = '\x1b';

/// A piece of a string: either a whole escape sequence or one visible char.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Escape(&'a str),
    Text(char),
}

struct Tokens<'a> {
    rest: &'a str,
}

fn tokens(s: &str) -> Tokens<'_> {
    Tokens { rest: s }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let c = self.rest.chars().next()?;
        if c == ESC {
            let len = escape_len(self.rest);
            let (seq, rest) = self.rest.split_at(len);
            self.rest = rest;
            return Some(Token::Escape(seq));
        }
        self.rest = &self.rest[c.len_utf8()..];
        Some(Token::Text(c))
    }
}

/// Byte length of the escape sequence at the start of `s` (which begins with ESC).
///
/// CSI sequences run through parameter/intermediate bytes to a final byte in
/// `@..=~`; OSC sequences run to BEL or ST. Any other ESC swallows one
/// following byte in `@..=_`. A malformed sequence ends before the first byte
/// that cannot belong to it, so the result always lands on a char boundary.
fn escape_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.get(1) {
        Some(b'[') => {
            let mut i = 2;
            while let Some(&b) = bytes.get(i) {
                if (0x40..=0x7e).contains(&b) {
                    return i + 1;
                }
                if !(0x20..=0x3f).contains(&b) {
                    return i;
                }
                i += 1;
            }
            i
        }
        Some(b']') => {
            let mut i = 2;
            while let Some(&b) = bytes.get(i) {
                match b {
                    0x07 => return i + 1,
                    0x1b if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
                    _ => i += 1,
                }
            }
            // Unterminated OSC: back up to a char boundary.
            while !s.is_char_boundary(i) {
                i -= 1;
            }
            i
        }
        Some(b) if (0x40..=0x5f).contains(b) => 2,
        _ => 1,
    }
}

/// Removes every escape sequence, leaving the visible text.
///
/// Borrows when there is nothing to strip.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains(ESC) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        tokens(s)
            .filter_map(|t| match t {
                Token::Text(c) => Some(c),
                Token::Escape(_) => None,
            })
            .collect(),
    )
}

/// Display width of one code point: 0, 1 or 2 cells.
///
/// Control characters have no width.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Width of a single line, ignoring escape sequences.
fn line_width(line: &str) -> usize {
    tokens(line)
        .map(|t| match t {
            Token::Text(c) => char_width(c),
            Token::Escape(_) => 0,
        })
        .sum()
}

/// Display width of `s` in terminal cells.
///
/// For multi-line input this is the width of the widest line.
pub fn display_width(s: &str) -> usize {
    s.split('\n').map(line_width).max().unwrap_or(0)
}

/// Display width of each line of `s`.
///
/// An empty string is one line of width 0.
pub fn line_widths(s: &str) -> Vec<usize> {
    s.split('\n').map(line_width).collect()
}

/// Number of lines in `s`. An empty string counts as one line.
pub fn line_count(s: &str) -> usize {
    s.split('\n').count()
}

/// Truncates every line of `s` to at most `width` cells, ending cut lines with `tail`.
///
/// - Lines that already fit are returned unchanged.
/// - When `tail` alone is at least `width` wide, the line becomes the tail
///   cut down to `width` (with no further tail).
/// - Otherwise the visible text is cut to `width - display_width(tail)` cells
///   and `tail` is appended.
///
/// A cut line is always exactly `width` cells: if a wide glyph straddles the
/// cut, the lost cell is filled with a space. Escape sequences in the cut-off
/// part are kept so styling is still reset.
///
/// ```rust
/// use standout_layout::width::truncate;
///
/// assert_eq!(truncate("hello world", 5, "…"), "hell…");
/// assert_eq!(truncate("short", 10, "…"), "short");
/// assert_eq!(truncate("hello", 2, "..."), "..");
/// ```
pub fn truncate(s: &str, width: usize, tail: &str) -> String {
    if !s.contains('\n') {
        return truncate_line(s, width, tail);
    }
    s.split('\n')
        .map(|line| truncate_line(line, width, tail))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn truncate_line(line: &str, width: usize, tail: &str) -> String {
    if line_width(line) <= width {
        return line.to_string();
    }
    let tail_width = line_width(tail);
    if tail_width >= width {
        return cut_to_width(tail, width);
    }
    let mut out = cut_to_width(line, width - tail_width);
    out.push_str(tail);
    out
}

/// Keeps visible characters up to `width` cells and every escape sequence.
///
/// When the line overflows, the result is padded to exactly `width` cells.
fn cut_to_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut used = 0;
    let mut overflowed = false;

    for token in tokens(line) {
        match token {
            Token::Escape(seq) => out.push_str(seq),
            Token::Text(c) => {
                if overflowed {
                    continue;
                }
                let w = char_width(c);
                if used + w > width {
                    overflowed = true;
                    continue;
                }
                out.push(c);
                used += w;
            }
        }
    }

    if overflowed {
        out.push_str(&spaces(width - used));
    }
    out
}

/// Pads `s` on the left (right-aligns) to `width` cells. Wider input is unchanged.
///
/// ```rust
/// use standout_layout::width::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad(s, width, Align::Right)
}

/// Pads `s` on the right (left-aligns) to `width` cells. Wider input is unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    pad(s, width, Align::Left)
}

/// Centers `s` in `width` cells; an odd leftover cell goes on the right.
///
/// ```rust
/// use standout_layout::width::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad(s, width, Align::Center)
}

fn pad(s: &str, width: usize, align: Align) -> String {
    let (before, after) = align.split(width.saturating_sub(line_width(s)));
    format!("{}{}{}", spaces(before), s, spaces(after))
}

pub(crate) fn spaces(n: usize) -> String {
    " ".repeat(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- strip_ansi ---

    #[test]
    fn strip_plain_text_borrows() {
        assert!(matches!(strip_ansi("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn strip_sgr_sequences() {
        assert_eq!(strip_ansi("\x1b[1;31mred\x1b[0m"), "red");
        assert_eq!(strip_ansi("\x1b[38;2;255;0;0mx\x1b[0m"), "x");
    }

    #[test]
    fn strip_osc_hyperlink() {
        let link = "\x1b]8;;https://example.com\x1b\\link\x1b]8;;\x1b\\";
        assert_eq!(strip_ansi(link), "link");
    }

    #[test]
    fn strip_lone_escape() {
        assert_eq!(strip_ansi("a\x1b"), "a");
    }

    #[test]
    fn malformed_csi_keeps_following_text() {
        // The sequence stops at the first byte that cannot belong to it.
        assert_eq!(strip_ansi("\x1b[12你好"), "你好");
    }

    // --- widths ---

    #[test]
    fn width_ignores_ansi() {
        assert_eq!(display_width("\x1b[31mhello\x1b[0m"), 5);
    }

    #[test]
    fn width_counts_wide_glyphs() {
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("日本語abc"), 9);
    }

    #[test]
    fn width_of_combining_marks() {
        // "e" + combining acute accent
        assert_eq!(display_width("e\u{301}"), 1);
    }

    #[test]
    fn ambiguous_width_is_narrow() {
        // U+00B1 PLUS-MINUS SIGN is East Asian ambiguous.
        assert_eq!(char_width('±'), 1);
    }

    #[test]
    fn width_of_multiline_is_widest_line() {
        assert_eq!(display_width("ab\nabcd\n"), 4);
        assert_eq!(line_widths("ab\nabcd\n"), vec![2, 4, 0]);
    }

    #[test]
    fn empty_string_is_one_line() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_widths(""), vec![0]);
        assert_eq!(display_width(""), 0);
        assert_eq!(line_count("a\nb"), 2);
    }

    // --- truncate ---

    #[test]
    fn truncate_fitting_is_unchanged() {
        assert_eq!(truncate("hello", 5, "…"), "hello");
        assert_eq!(truncate("", 0, "…"), "");
    }

    #[test]
    fn truncate_appends_tail() {
        assert_eq!(truncate("hello world", 5, "…"), "hell…");
        assert_eq!(truncate("hello world", 8, "..."), "hello...");
    }

    #[test]
    fn truncate_tail_wider_than_width() {
        assert_eq!(truncate("hello world", 2, "..."), "..");
        assert_eq!(truncate("hello world", 3, "..."), "...");
        assert_eq!(truncate("hello", 0, "…"), "");
    }

    #[test]
    fn truncate_fills_straddled_wide_glyph() {
        // 4 cells available before the tail, "你好世" needs 6: keep "你好" (4).
        assert_eq!(truncate("你好世界", 5, "…"), "你好…");
        // 3 cells available: "你" (2) fits, the next glyph straddles.
        let out = truncate("你好世界", 4, "…");
        assert_eq!(out, "你 …");
        assert_eq!(display_width(&out), 4);
    }

    #[test]
    fn truncate_keeps_escape_sequences() {
        let out = truncate("\x1b[31mhello world\x1b[0m", 5, "…");
        assert_eq!(out, "\x1b[31mhell\x1b[0m…");
        assert_eq!(display_width(&out), 5);
    }

    #[test]
    fn truncate_each_line() {
        assert_eq!(truncate("abcdef\nab", 4, "…"), "abc…\nab");
    }

    // --- padding ---

    #[test]
    fn pad_variants() {
        assert_eq!(pad_right("42", 5), "42   ");
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_center("hi", 10), "    hi    ");
        assert_eq!(pad_center("", 3), "   ");
    }

    #[test]
    fn pad_preserves_ansi() {
        let styled = "\x1b[1mhi\x1b[0m";
        let out = pad_right(styled, 4);
        assert_eq!(out, "\x1b[1mhi\x1b[0m  ");
        assert_eq!(display_width(&out), 4);
    }
}
