//! The [`Style`] descriptor.

use super::attributes::{Attribute, Attributes};
use super::border::Border;
use super::color::Color;
use crate::position::{Align, Sides, VerticalAlign};
use crate::width::char_width;

/// How a block of text should look: attributes, colors, and a box model.
///
/// Every field is optional, and unset is distinct from `false` or `0`.
/// Builder methods take the style by value and return the changed copy, so a
/// style is never modified behind anyone's back. Clone a style to branch it:
///
/// ```rust
/// use standout_layout::{Align, Style};
///
/// let base = Style::new().bold(true).padding_symmetric(0, 1);
/// let title = base.clone().foreground("#ff6b35").align(Align::Center).width(20);
/// let note = base.clone().italic(true);
///
/// assert_eq!(base.get_width(), None);
/// assert_eq!(title.get_width(), Some(20));
/// assert_eq!(note.get_width(), None);
/// ```
///
/// Layering, from the inside out: content (`width`, `align`), padding,
/// border, height limits, margin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub(crate) attributes: Attributes,
    pub(crate) foreground: Option<Color>,
    pub(crate) background: Option<Color>,
    pub(crate) width: Option<usize>,
    pub(crate) height: Option<usize>,
    pub(crate) max_width: Option<usize>,
    pub(crate) max_height: Option<usize>,
    pub(crate) align: Option<Align>,
    pub(crate) align_vertical: Option<VerticalAlign>,
    pub(crate) padding: Sides<usize>,
    pub(crate) margin: Sides<usize>,
    pub(crate) border: Option<Border>,
    pub(crate) border_sides: Sides<bool>,
    pub(crate) border_foreground: Option<Color>,
    pub(crate) border_background: Option<Color>,
    pub(crate) tab_width: Option<usize>,
    pub(crate) ellipsis: Option<String>,
}

/// Which border edges are drawn, after defaults are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Edges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Edges {
    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

impl Style {
    /// A style with nothing set. Renders text unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is set at all.
    pub fn is_unset(&self) -> bool {
        *self == Style::default()
    }

    /// True when rendering leaves the text as is, apart from tab expansion.
    ///
    /// `tab_width` and `ellipsis` only tune how text is measured and cut, so
    /// on their own they do not shape the block.
    pub(crate) fn is_passthrough(&self) -> bool {
        self.clone().unset_tab_width().unset_ellipsis().is_unset()
    }

    // --- attributes ---

    /// Sets or clears one attribute.
    pub fn attribute(mut self, attribute: Attribute, on: bool) -> Self {
        self.attributes = self.attributes.with(attribute, on);
        self
    }

    pub fn bold(self, on: bool) -> Self {
        self.attribute(Attribute::Bold, on)
    }

    pub fn faint(self, on: bool) -> Self {
        self.attribute(Attribute::Faint, on)
    }

    pub fn italic(self, on: bool) -> Self {
        self.attribute(Attribute::Italic, on)
    }

    pub fn underline(self, on: bool) -> Self {
        self.attribute(Attribute::Underline, on)
    }

    pub fn blink(self, on: bool) -> Self {
        self.attribute(Attribute::Blink, on)
    }

    pub fn reverse(self, on: bool) -> Self {
        self.attribute(Attribute::Reverse, on)
    }

    pub fn strikethrough(self, on: bool) -> Self {
        self.attribute(Attribute::Strikethrough, on)
    }

    // --- colors ---

    /// Text color. Strings are parsed leniently: a malformed color is kept
    /// but renders as no color.
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    /// Cell color behind the text, the alignment fill, and the padding.
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    // --- dimensions ---

    /// Content width in cells. Lines are truncated or padded to it.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Minimum height of the bordered block, in lines.
    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    /// Upper bound on the content width; wider lines are truncated.
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Upper bound on the bordered block's height; extra lines are dropped.
    pub fn max_height(mut self, height: usize) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Horizontal alignment of lines narrower than the content width.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Vertical placement of the block when `height` adds blank lines.
    pub fn align_vertical(mut self, align: VerticalAlign) -> Self {
        self.align_vertical = Some(align);
        self
    }

    // --- padding ---

    /// Padding on all four sides, clockwise from the top.
    pub fn padding(mut self, top: usize, right: usize, bottom: usize, left: usize) -> Self {
        self.padding = Sides::new(top, right, bottom, left);
        self
    }

    pub fn padding_all(self, n: usize) -> Self {
        self.padding(n, n, n, n)
    }

    /// `vertical` rows above and below, `horizontal` columns left and right.
    pub fn padding_symmetric(self, vertical: usize, horizontal: usize) -> Self {
        self.padding(vertical, horizontal, vertical, horizontal)
    }

    pub fn padding_top(mut self, n: usize) -> Self {
        self.padding.top = Some(n);
        self
    }

    pub fn padding_right(mut self, n: usize) -> Self {
        self.padding.right = Some(n);
        self
    }

    pub fn padding_bottom(mut self, n: usize) -> Self {
        self.padding.bottom = Some(n);
        self
    }

    pub fn padding_left(mut self, n: usize) -> Self {
        self.padding.left = Some(n);
        self
    }

    // --- margin ---

    /// Margin on all four sides, clockwise from the top. Margins are never
    /// colored.
    pub fn margin(mut self, top: usize, right: usize, bottom: usize, left: usize) -> Self {
        self.margin = Sides::new(top, right, bottom, left);
        self
    }

    pub fn margin_all(self, n: usize) -> Self {
        self.margin(n, n, n, n)
    }

    pub fn margin_symmetric(self, vertical: usize, horizontal: usize) -> Self {
        self.margin(vertical, horizontal, vertical, horizontal)
    }

    pub fn margin_top(mut self, n: usize) -> Self {
        self.margin.top = Some(n);
        self
    }

    pub fn margin_right(mut self, n: usize) -> Self {
        self.margin.right = Some(n);
        self
    }

    pub fn margin_bottom(mut self, n: usize) -> Self {
        self.margin.bottom = Some(n);
        self
    }

    pub fn margin_left(mut self, n: usize) -> Self {
        self.margin.left = Some(n);
        self
    }

    // --- border ---

    /// Border glyphs. When no edge has been toggled, all four are drawn.
    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Toggles the four edges at once, clockwise from the top.
    ///
    /// Without a [`border`](Style::border), enabled edges use [`Border::NORMAL`].
    pub fn border_sides(mut self, top: bool, right: bool, bottom: bool, left: bool) -> Self {
        self.border_sides = Sides::new(top, right, bottom, left);
        self
    }

    pub fn border_top(mut self, on: bool) -> Self {
        self.border_sides.top = Some(on);
        self
    }

    pub fn border_right(mut self, on: bool) -> Self {
        self.border_sides.right = Some(on);
        self
    }

    pub fn border_bottom(mut self, on: bool) -> Self {
        self.border_sides.bottom = Some(on);
        self
    }

    pub fn border_left(mut self, on: bool) -> Self {
        self.border_sides.left = Some(on);
        self
    }

    /// Color of the border glyphs, independent of the content colors.
    pub fn border_foreground(mut self, color: impl Into<Color>) -> Self {
        self.border_foreground = Some(color.into());
        self
    }

    /// Cell color behind the border glyphs.
    pub fn border_background(mut self, color: impl Into<Color>) -> Self {
        self.border_background = Some(color.into());
        self
    }

    // --- text handling ---

    /// Expands tabs to `n` spaces before measuring. Tabs are left alone when unset.
    pub fn tab_width(mut self, n: usize) -> Self {
        self.tab_width = Some(n);
        self
    }

    /// Tail appended to truncated lines. Defaults to `…`.
    pub fn ellipsis(mut self, tail: impl Into<String>) -> Self {
        self.ellipsis = Some(tail.into());
        self
    }

    // --- unset ---

    pub fn unset_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes = self.attributes.without(attribute);
        self
    }

    pub fn unset_attributes(mut self) -> Self {
        self.attributes = Attributes::new();
        self
    }

    pub fn unset_foreground(mut self) -> Self {
        self.foreground = None;
        self
    }

    pub fn unset_background(mut self) -> Self {
        self.background = None;
        self
    }

    pub fn unset_width(mut self) -> Self {
        self.width = None;
        self
    }

    pub fn unset_height(mut self) -> Self {
        self.height = None;
        self
    }

    pub fn unset_max_width(mut self) -> Self {
        self.max_width = None;
        self
    }

    pub fn unset_max_height(mut self) -> Self {
        self.max_height = None;
        self
    }

    pub fn unset_align(mut self) -> Self {
        self.align = None;
        self.align_vertical = None;
        self
    }

    pub fn unset_padding(mut self) -> Self {
        self.padding = Sides::default();
        self
    }

    pub fn unset_margin(mut self) -> Self {
        self.margin = Sides::default();
        self
    }

    /// Removes the border glyphs, edge toggles, and border colors.
    pub fn unset_border(mut self) -> Self {
        self.border = None;
        self.border_sides = Sides::default();
        self.border_foreground = None;
        self.border_background = None;
        self
    }

    pub fn unset_tab_width(mut self) -> Self {
        self.tab_width = None;
        self
    }

    pub fn unset_ellipsis(mut self) -> Self {
        self.ellipsis = None;
        self
    }

    /// Copies every field that is unset here from `parent`, except padding
    /// and margin, which belong to the box they were set on.
    pub fn inherit(mut self, parent: &Style) -> Self {
        self.attributes = self.attributes.or(parent.attributes);
        self.foreground = self.foreground.or_else(|| parent.foreground.clone());
        self.background = self.background.or_else(|| parent.background.clone());
        self.width = self.width.or(parent.width);
        self.height = self.height.or(parent.height);
        self.max_width = self.max_width.or(parent.max_width);
        self.max_height = self.max_height.or(parent.max_height);
        self.align = self.align.or(parent.align);
        self.align_vertical = self.align_vertical.or(parent.align_vertical);
        self.border = self.border.or(parent.border);
        self.border_sides = self.border_sides.or(parent.border_sides);
        self.border_foreground = self
            .border_foreground
            .or_else(|| parent.border_foreground.clone());
        self.border_background = self
            .border_background
            .or_else(|| parent.border_background.clone());
        self.tab_width = self.tab_width.or(parent.tab_width);
        self.ellipsis = self.ellipsis.or_else(|| parent.ellipsis.clone());
        self
    }

    // --- getters ---

    pub fn get_attribute(&self, attribute: Attribute) -> Option<bool> {
        self.attributes.get(attribute)
    }

    pub fn get_attributes(&self) -> Attributes {
        self.attributes
    }

    pub fn get_foreground(&self) -> Option<&Color> {
        self.foreground.as_ref()
    }

    pub fn get_background(&self) -> Option<&Color> {
        self.background.as_ref()
    }

    pub fn get_width(&self) -> Option<usize> {
        self.width
    }

    pub fn get_height(&self) -> Option<usize> {
        self.height
    }

    pub fn get_max_width(&self) -> Option<usize> {
        self.max_width
    }

    pub fn get_max_height(&self) -> Option<usize> {
        self.max_height
    }

    pub fn get_align(&self) -> Option<Align> {
        self.align
    }

    pub fn get_align_vertical(&self) -> Option<VerticalAlign> {
        self.align_vertical
    }

    pub fn get_padding(&self) -> Sides<usize> {
        self.padding
    }

    pub fn get_margin(&self) -> Sides<usize> {
        self.margin
    }

    pub fn get_border(&self) -> Option<Border> {
        self.border
    }

    pub fn get_border_sides(&self) -> Sides<bool> {
        self.border_sides
    }

    pub fn get_border_foreground(&self) -> Option<&Color> {
        self.border_foreground.as_ref()
    }

    pub fn get_border_background(&self) -> Option<&Color> {
        self.border_background.as_ref()
    }

    pub fn get_tab_width(&self) -> Option<usize> {
        self.tab_width
    }

    pub fn get_ellipsis(&self) -> Option<&str> {
        self.ellipsis.as_deref()
    }

    // --- frame sizes ---

    /// Padding columns, left plus right.
    pub fn horizontal_padding(&self) -> usize {
        let (_, right, _, left) = self.padding.resolved();
        left.saturating_add(right)
    }

    /// Padding rows, top plus bottom.
    pub fn vertical_padding(&self) -> usize {
        let (top, _, bottom, _) = self.padding.resolved();
        top.saturating_add(bottom)
    }

    pub fn horizontal_margin(&self) -> usize {
        let (_, right, _, left) = self.margin.resolved();
        left.saturating_add(right)
    }

    pub fn vertical_margin(&self) -> usize {
        let (top, _, bottom, _) = self.margin.resolved();
        top.saturating_add(bottom)
    }

    /// Cells taken by the left and right border columns.
    pub fn horizontal_border_size(&self) -> usize {
        let (left, right) = self.border_columns();
        left + right
    }

    /// Border rows actually drawn (0, 1 or 2).
    pub fn vertical_border_size(&self) -> usize {
        self.edges()
            .map_or(0, |(_, e)| usize::from(e.top) + usize::from(e.bottom))
    }

    /// Cells added around the content horizontally: padding, border, margin.
    pub fn horizontal_frame_size(&self) -> usize {
        self.horizontal_padding()
            .saturating_add(self.horizontal_border_size())
            .saturating_add(self.horizontal_margin())
    }

    /// Lines added around the content vertically: padding, border, margin.
    pub fn vertical_frame_size(&self) -> usize {
        self.vertical_padding()
            .saturating_add(self.vertical_border_size())
            .saturating_add(self.vertical_margin())
    }

    /// True when rendering may depend on the terminal background.
    pub fn has_adaptive_colors(&self) -> bool {
        [
            &self.foreground,
            &self.background,
            &self.border_foreground,
            &self.border_background,
        ]
        .into_iter()
        .flatten()
        .any(Color::is_adaptive)
    }

    /// The border glyphs and edges to draw, or `None` for no border.
    ///
    /// A border set with no edge toggled draws all four edges. Edges toggled
    /// without a border set use [`Border::NORMAL`]. Untoggled edges are off
    /// once any edge has been toggled.
    pub(crate) fn edges(&self) -> Option<(Border, Edges)> {
        let sides = self.border_sides;
        let edges = if sides.is_unset() {
            if self.border.is_none() {
                return None;
            }
            Edges {
                top: true,
                right: true,
                bottom: true,
                left: true,
            }
        } else {
            Edges {
                top: sides.top.unwrap_or(false),
                right: sides.right.unwrap_or(false),
                bottom: sides.bottom.unwrap_or(false),
                left: sides.left.unwrap_or(false),
            }
        };
        if !edges.any() {
            return None;
        }
        Some((self.border.unwrap_or_default(), edges))
    }

    /// Widths of the left and right border columns.
    ///
    /// A column is as wide as the widest glyph drawn in it, corners included.
    pub(crate) fn border_columns(&self) -> (usize, usize) {
        let Some((border, edges)) = self.edges() else {
            return (0, 0);
        };
        let column = |on: bool, side: char, top: char, bottom: char| {
            if !on {
                return 0;
            }
            [
                Some(side),
                edges.top.then_some(top),
                edges.bottom.then_some(bottom),
            ]
            .into_iter()
            .flatten()
            .map(char_width)
            .max()
            .unwrap_or(0)
        };
        (
            column(edges.left, border.left, border.top_left, border.bottom_left),
            column(edges.right, border.right, border.top_right, border.bottom_right),
        )
    }
}
