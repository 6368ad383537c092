//! Composing rendered blocks.
//!
//! Blocks are plain strings, one row per line, exactly what
//! [`Style::render`](crate::Style::render) returns. Composition treats every
//! line as an opaque unit: embedded escape sequences are copied through in
//! order and never re-parsed, and all fill added here is unstyled space.
//!
//! ```rust
//! use standout_layout::{join_horizontal, join_vertical, Align, VerticalAlign};
//!
//! let side_by_side = join_horizontal(VerticalAlign::Top, &["a\nb", " ", "x\ny\nz"]);
//! assert_eq!(side_by_side, "a x\nb y\n  z");
//!
//! let stacked = join_vertical(Align::Right, &["wide", "n"]);
//! assert_eq!(stacked, "wide\n   n");
//! ```
//!
//! No gap is inserted between blocks; pass a separator block (such as `" "`)
//! where spacing is wanted.

use crate::position::{Align, VerticalAlign};
use crate::width::{display_width, spaces, truncate_line, DEFAULT_ELLIPSIS};

/// Places blocks side by side.
///
/// The result is as tall as the tallest block. Shorter blocks get blank rows
/// of their own width, distributed per `align`, and ragged lines are padded
/// on the right so each block keeps a straight edge. An empty slice gives an
/// empty string, a single block is returned unchanged.
pub fn join_horizontal<S: AsRef<str>>(align: VerticalAlign, blocks: &[S]) -> String {
    match blocks {
        [] => return String::new(),
        [only] => return only.as_ref().to_string(),
        _ => {}
    }

    let blocks: Vec<Vec<&str>> = blocks
        .iter()
        .map(|block| block.as_ref().split('\n').collect())
        .collect();
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

    let mut rows = vec![String::new(); height];
    for lines in &blocks {
        let width = lines.iter().map(|line| display_width(line)).max().unwrap_or(0);
        let (above, _) = align.split(height - lines.len());
        for (i, row) in rows.iter_mut().enumerate() {
            match i.checked_sub(above).and_then(|j| lines.get(j)) {
                Some(line) => {
                    row.push_str(line);
                    row.push_str(&spaces(width - display_width(line)));
                }
                None => row.push_str(&spaces(width)),
            }
        }
    }
    rows.join("\n")
}

/// Stacks blocks top to bottom.
///
/// Every line narrower than the widest block is padded per `align`. An
/// empty slice gives an empty string, a single block is returned unchanged.
pub fn join_vertical<S: AsRef<str>>(align: Align, blocks: &[S]) -> String {
    match blocks {
        [] => return String::new(),
        [only] => return only.as_ref().to_string(),
        _ => {}
    }

    let width = blocks
        .iter()
        .map(|block| display_width(block.as_ref()))
        .max()
        .unwrap_or(0);
    blocks
        .iter()
        .flat_map(|block| block.as_ref().split('\n'))
        .map(|line| align_line(line, width, align))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Positions `block` in a `width` x `height` area.
///
/// The result is exactly `height` lines of exactly `width` cells. Lines that
/// are too wide are truncated with `…`; when the block has too many lines,
/// the rows kept are chosen by `vertical`.
///
/// ```rust
/// use standout_layout::{place, Align, VerticalAlign};
///
/// let out = place(5, 3, Align::Center, VerticalAlign::Middle, "hi");
/// assert_eq!(out, "     \n hi  \n     ");
/// ```
pub fn place(
    width: usize,
    height: usize,
    horizontal: Align,
    vertical: VerticalAlign,
    block: &str,
) -> String {
    place_vertical(height, vertical, &place_horizontal(width, horizontal, block))
}

/// Fits every line of `block` to exactly `width` cells.
pub fn place_horizontal(width: usize, align: Align, block: &str) -> String {
    block
        .split('\n')
        .map(|line| align_line(&truncate_line(line, width, DEFAULT_ELLIPSIS), width, align))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fits `block` to exactly `height` lines.
///
/// Blank rows are as wide as the block. Extra rows are dropped from the end
/// for [`VerticalAlign::Top`], from the start for [`VerticalAlign::Bottom`],
/// and from both ends for [`VerticalAlign::Middle`].
pub fn place_vertical(height: usize, align: VerticalAlign, block: &str) -> String {
    let width = display_width(block);
    let lines: Vec<String> = block
        .split('\n')
        .map(|line| align_line(line, width, Align::Left))
        .collect();

    if lines.len() >= height {
        let (skip, _) = align.split(lines.len() - height);
        return lines[skip..skip + height].join("\n");
    }

    let (above, below) = align.split(height - lines.len());
    let blank = spaces(width);
    std::iter::repeat(blank.clone())
        .take(above)
        .chain(lines)
        .chain(std::iter::repeat(blank).take(below))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pads one line to `width` cells with unstyled space.
fn align_line(line: &str, width: usize, align: Align) -> String {
    let (before, after) = align.split(width.saturating_sub(display_width(line)));
    if before == 0 && after == 0 {
        return line.to_string();
    }
    format!("{}{}{}", spaces(before), line, spaces(after))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::line_widths;

    #[test]
    fn empty_and_single() {
        let none: [&str; 0] = [];
        assert_eq!(join_horizontal(VerticalAlign::Top, &none), "");
        assert_eq!(join_vertical(Align::Left, &none), "");
        assert_eq!(join_horizontal(VerticalAlign::Bottom, &["a\nbcd"]), "a\nbcd");
        assert_eq!(join_vertical(Align::Center, &["a\nbcd"]), "a\nbcd");
    }

    #[test]
    fn horizontal_top() {
        let out = join_horizontal(VerticalAlign::Top, &["a\nb", " ", "x\ny\nz"]);
        assert_eq!(out, "a x\nb y\n  z");
    }

    #[test]
    fn horizontal_bottom_and_middle() {
        let out = join_horizontal(VerticalAlign::Bottom, &["a", "x\ny\nz"]);
        assert_eq!(out, " x\n y\naz");
        let out = join_horizontal(VerticalAlign::Middle, &["a", "w\nx\ny\nz"]);
        assert_eq!(out, " w\nax\n y\n z");
    }

    #[test]
    fn horizontal_squares_ragged_blocks() {
        let out = join_horizontal(VerticalAlign::Top, &["abc\na", "|\n|"]);
        assert_eq!(out, "abc|\na  |");
    }

    #[test]
    fn horizontal_keeps_escapes() {
        let red = "\x1b[31mr\x1b[0m";
        let out = join_horizontal(VerticalAlign::Top, &[red, "\x1b[1mb\x1b[0m\nc"]);
        assert_eq!(out, "\x1b[31mr\x1b[0m\x1b[1mb\x1b[0m\n c");
    }

    #[test]
    fn vertical_alignment() {
        assert_eq!(join_vertical(Align::Left, &["abcd", "ab"]), "abcd\nab  ");
        assert_eq!(join_vertical(Align::Center, &["abcd", "a"]), "abcd\n a  ");
        assert_eq!(join_vertical(Align::Right, &["abcd", "a\nab"]), "abcd\n   a\n  ab");
    }

    #[test]
    fn vertical_measures_without_escapes() {
        let out = join_vertical(Align::Right, &["\x1b[1mab\x1b[0m", "abc"]);
        assert_eq!(out, " \x1b[1mab\x1b[0m\nabc");
    }

    #[test]
    fn place_pads_and_truncates() {
        let out = place(4, 2, Align::Right, VerticalAlign::Bottom, "toolong\nx");
        assert_eq!(out, "too…\n   x");
        let out = place(3, 3, Align::Left, VerticalAlign::Top, "");
        assert_eq!(out, "   \n   \n   ");
    }

    #[test]
    fn place_vertical_crops_by_alignment() {
        let block = "1\n2\n3\n4\n5";
        assert_eq!(place_vertical(2, VerticalAlign::Top, block), "1\n2");
        assert_eq!(place_vertical(2, VerticalAlign::Bottom, block), "4\n5");
        assert_eq!(place_vertical(3, VerticalAlign::Middle, block), "2\n3\n4");
    }

    #[test]
    fn place_is_exact() {
        let out = place(7, 4, Align::Center, VerticalAlign::Middle, "你好\nok");
        assert_eq!(out.split('\n').count(), 4);
        assert!(line_widths(&out).into_iter().all(|w| w == 7));
    }
}
