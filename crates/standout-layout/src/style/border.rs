//! Border character sets.
//!
//! A [`Border`] is plain data: the edge and corner glyphs of a box plus the
//! connectors used where inner dividers meet it. Every built-in style is a
//! table entry, and a custom border is just another value.
//!
//! | name               | sample |
//! |--------------------|--------|
//! | `normal`           | `┌─┐`  |
//! | `rounded`          | `╭─╮`  |
//! | `thick`            | `┏━┓`  |
//! | `double`           | `╔═╗`  |
//! | `block`            | `███`  |
//! | `outer_half_block` | `▛▀▜`  |
//! | `inner_half_block` | `▗▄▖`  |
//! | `hidden`           | `   `  |
//! | `ascii`            | `+-+`  |

/// Glyphs for drawing a box. Each glyph is expected to be one cell wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Border {
    pub top: char,
    pub bottom: char,
    pub left: char,
    pub right: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    /// `├`-style connector on the left edge.
    pub middle_left: char,
    /// `┤`-style connector on the right edge.
    pub middle_right: char,
    /// `┼`-style crossing.
    pub middle: char,
    /// `┬`-style connector on the top edge.
    pub middle_top: char,
    /// `┴`-style connector on the bottom edge.
    pub middle_bottom: char,
}

impl Border {
    pub const NORMAL: Border = Border {
        top: '─',
        bottom: '─',
        left: '│',
        right: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        middle_left: '├',
        middle_right: '┤',
        middle: '┼',
        middle_top: '┬',
        middle_bottom: '┴',
    };

    pub const ROUNDED: Border = Border {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..Border::NORMAL
    };

    pub const THICK: Border = Border {
        top: '━',
        bottom: '━',
        left: '┃',
        right: '┃',
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        middle_left: '┣',
        middle_right: '┫',
        middle: '╋',
        middle_top: '┳',
        middle_bottom: '┻',
    };

    pub const DOUBLE: Border = Border {
        top: '═',
        bottom: '═',
        left: '║',
        right: '║',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        middle_left: '╠',
        middle_right: '╣',
        middle: '╬',
        middle_top: '╦',
        middle_bottom: '╩',
    };

    pub const BLOCK: Border = Border::uniform('█');

    pub const OUTER_HALF_BLOCK: Border = Border {
        top: '▀',
        bottom: '▄',
        left: '▌',
        right: '▐',
        top_left: '▛',
        top_right: '▜',
        bottom_left: '▙',
        bottom_right: '▟',
        ..Border::uniform(' ')
    };

    pub const INNER_HALF_BLOCK: Border = Border {
        top: '▄',
        bottom: '▀',
        left: '▐',
        right: '▌',
        top_left: '▗',
        top_right: '▖',
        bottom_left: '▝',
        bottom_right: '▘',
        ..Border::uniform(' ')
    };

    /// Takes up space without drawing anything.
    pub const HIDDEN: Border = Border::uniform(' ');

    pub const ASCII: Border = Border {
        top: '-',
        bottom: '-',
        left: '|',
        right: '|',
        ..Border::uniform('+')
    };

    /// A border drawn with the same glyph everywhere.
    pub const fn uniform(glyph: char) -> Border {
        Border {
            top: glyph,
            bottom: glyph,
            left: glyph,
            right: glyph,
            top_left: glyph,
            top_right: glyph,
            bottom_left: glyph,
            bottom_right: glyph,
            middle_left: glyph,
            middle_right: glyph,
            middle: glyph,
            middle_top: glyph,
            middle_bottom: glyph,
        }
    }

    /// Looks a built-in border up by name (`rounded`, `double`, ...).
    ///
    /// Hyphens and underscores are interchangeable; `light` and `heavy`
    /// are accepted for `normal` and `thick`.
    pub fn by_name(name: &str) -> Option<Border> {
        let name = name.trim().to_ascii_lowercase().replace('-', "_");
        BORDERS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, border)| *border)
    }

    /// Names of the built-in borders, in table order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BORDERS.iter().map(|(name, _)| *name)
    }
}

impl Default for Border {
    fn default() -> Self {
        Border::NORMAL
    }
}

const BORDERS: [(&str, Border); 11] = [
    ("normal", Border::NORMAL),
    ("light", Border::NORMAL),
    ("rounded", Border::ROUNDED),
    ("thick", Border::THICK),
    ("heavy", Border::THICK),
    ("double", Border::DOUBLE),
    ("block", Border::BLOCK),
    ("outer_half_block", Border::OUTER_HALF_BLOCK),
    ("inner_half_block", Border::INNER_HALF_BLOCK),
    ("hidden", Border::HIDDEN),
    ("ascii", Border::ASCII),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::char_width;

    fn glyphs(border: &Border) -> [char; 13] {
        [
            border.top,
            border.bottom,
            border.left,
            border.right,
            border.top_left,
            border.top_right,
            border.bottom_left,
            border.bottom_right,
            border.middle_left,
            border.middle_right,
            border.middle,
            border.middle_top,
            border.middle_bottom,
        ]
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Border::by_name("rounded"), Some(Border::ROUNDED));
        assert_eq!(Border::by_name("Outer-Half-Block"), Some(Border::OUTER_HALF_BLOCK));
        assert_eq!(Border::by_name("heavy"), Some(Border::THICK));
        assert_eq!(Border::by_name("dotted"), None);
    }

    #[test]
    fn every_builtin_glyph_is_one_cell() {
        for name in Border::names() {
            let border = Border::by_name(name).unwrap();
            for glyph in glyphs(&border) {
                assert_eq!(char_width(glyph), 1, "{name}: {glyph:?}");
            }
        }
    }

    #[test]
    fn rounded_shares_edges_with_normal() {
        assert_eq!(Border::ROUNDED.top, Border::NORMAL.top);
        assert_eq!(Border::ROUNDED.top_left, '╭');
        assert_eq!(Border::ROUNDED.middle, '┼');
    }

    #[test]
    fn hidden_is_blank() {
        assert!(glyphs(&Border::HIDDEN).iter().all(|g| *g == ' '));
    }
}
