//! Turning a [`Style`] and some text into a rendered block.
//!
//! Rendering runs the box model from the inside out:
//!
//! 1. tabs are expanded (only when `tab_width` is set) and the text is split
//!    into lines
//! 2. every line is truncated or padded to the content width and aligned
//! 3. each line's text is wrapped in its own open/reset pair, so styling
//!    never crosses a line break
//! 4. padding columns and rows are added, painted with the background
//! 5. the border is drawn around the padded block
//! 6. `height` adds blank rows per the vertical alignment, and `max_height`
//!    drops trailing rows
//! 7. margins are added as plain, unstyled space
//!
//! Every line of the result has the same display width. A style with nothing
//! set is the one exception: it returns the input untouched. Setting only
//! `tab_width` or `ellipsis` keeps that, except that tabs are expanded.

use std::borrow::Cow;

use tracing::trace;

use crate::context::RenderContext;
use crate::position::Align;
use crate::style::{ColorLayer, Style, RESET};
use crate::width::{char_width, display_width, spaces, truncate_line, DEFAULT_ELLIPSIS};

/// Escape sequences opening one kind of span.
struct Paint {
    open: String,
}

impl Paint {
    /// Wraps non-empty `text` in the span.
    fn apply(&self, text: &str) -> String {
        if text.is_empty() || self.open.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", self.open, text, RESET)
    }

    /// `n` painted spaces.
    fn fill(&self, n: usize) -> String {
        self.apply(&spaces(n))
    }
}

impl Style {
    /// Renders `text` with this style.
    ///
    /// Adaptive colors are resolved against the background detected from the
    /// environment; styles without adaptive colors render the same everywhere.
    /// Use [`render_with`](Style::render_with) to control the context.
    ///
    /// ```rust
    /// use standout_layout::Style;
    ///
    /// let style = Style::new().bold(true).foreground("#FF0000");
    /// assert_eq!(style.render("hi"), "\x1b[1m\x1b[38;2;255;0;0mhi\x1b[0m");
    ///
    /// assert_eq!(Style::new().render("as\tis\n"), "as\tis\n");
    /// ```
    pub fn render(&self, text: &str) -> String {
        let ctx = if self.has_adaptive_colors() {
            RenderContext::from_env()
        } else {
            RenderContext::default()
        };
        self.render_with(&ctx, text)
    }

    /// Renders `text` with an explicit [`RenderContext`].
    pub fn render_with(&self, ctx: &RenderContext, text: &str) -> String {
        let text: Cow<'_, str> = match self.tab_width {
            Some(n) if text.contains('\t') => Cow::Owned(text.replace('\t', &spaces(n))),
            _ => Cow::Borrowed(text),
        };
        if self.is_passthrough() {
            return text.into_owned();
        }
        let source: Vec<&str> = text.split('\n').collect();

        let natural = source.iter().map(|line| display_width(line)).max().unwrap_or(0);
        let mut content_width = self.width.unwrap_or(natural);
        if let Some(max) = self.max_width {
            content_width = content_width.min(max);
        }

        let text_paint = Paint {
            open: self.open_sequence(ctx),
        };
        let fill_paint = Paint {
            open: self
                .background
                .as_ref()
                .map(|bg| bg.sequence(ColorLayer::Background, ctx))
                .unwrap_or_default(),
        };

        let (pad_top, pad_right, pad_bottom, pad_left) = self.padding.resolved();
        let align = self.align.unwrap_or_default();
        let tail = self.ellipsis.as_deref().unwrap_or(DEFAULT_ELLIPSIS);

        let mut lines: Vec<String> = Vec::with_capacity(source.len());
        let padded_width = pad_left
            .saturating_add(content_width)
            .saturating_add(pad_right);
        for _ in 0..pad_top {
            lines.push(fill_paint.fill(padded_width));
        }
        for line in &source {
            let cut = truncate_line(line, content_width, tail);
            let (before, after) = align.split(content_width.saturating_sub(display_width(&cut)));
            lines.push(format!(
                "{}{}{}",
                fill_paint.fill(pad_left.saturating_add(before)),
                text_paint.apply(&cut),
                fill_paint.fill(after.saturating_add(pad_right)),
            ));
        }
        for _ in 0..pad_bottom {
            lines.push(fill_paint.fill(padded_width));
        }

        let mut block_width = padded_width;
        let frame = self.edges();
        let bordered = frame.is_some();
        if let Some((border, edges)) = frame {
            let paint = Paint {
                open: format!(
                    "{}{}",
                    self.border_foreground
                        .as_ref()
                        .map(|c| c.sequence(ColorLayer::Foreground, ctx))
                        .unwrap_or_default(),
                    self.border_background
                        .as_ref()
                        .map(|c| c.sequence(ColorLayer::Background, ctx))
                        .unwrap_or_default(),
                ),
            };
            let (left_width, right_width) = self.border_columns();
            let left_cell = |glyph: char| {
                if edges.left {
                    side_cell(glyph, left_width, Align::Left)
                } else {
                    String::new()
                }
            };
            let right_cell = |glyph: char| {
                if edges.right {
                    side_cell(glyph, right_width, Align::Right)
                } else {
                    String::new()
                }
            };
            let left = paint.apply(&left_cell(border.left));
            let right = paint.apply(&right_cell(border.right));
            let mut framed = Vec::with_capacity(lines.len() + 2);
            if edges.top {
                framed.push(edge_row(
                    &paint,
                    &left_cell(border.top_left),
                    border.top,
                    &right_cell(border.top_right),
                    padded_width,
                ));
            }
            for line in lines {
                framed.push(format!("{left}{line}{right}"));
            }
            if edges.bottom {
                framed.push(edge_row(
                    &paint,
                    &left_cell(border.bottom_left),
                    border.bottom,
                    &right_cell(border.bottom_right),
                    padded_width,
                ));
            }
            lines = framed;
            block_width = block_width
                .saturating_add(left_width)
                .saturating_add(right_width);
        }

        if let Some(height) = self.height {
            if lines.len() < height {
                let (above, below) = self
                    .align_vertical
                    .unwrap_or_default()
                    .split(height - lines.len());
                let blank = if bordered {
                    spaces(block_width)
                } else {
                    fill_paint.fill(block_width)
                };
                // Only rows that survive max_height are built.
                lines = std::iter::repeat(blank.clone())
                    .take(above)
                    .chain(lines)
                    .chain(std::iter::repeat(blank).take(below))
                    .take(self.max_height.unwrap_or(usize::MAX))
                    .collect();
            }
        }
        if let Some(max) = self.max_height {
            lines.truncate(max);
        }

        let (margin_top, margin_right, margin_bottom, margin_left) = self.margin.resolved();
        if [margin_top, margin_right, margin_bottom, margin_left]
            .iter()
            .any(|m| *m > 0)
        {
            let (left, right) = (spaces(margin_left), spaces(margin_right));
            block_width = block_width
                .saturating_add(margin_left)
                .saturating_add(margin_right);
            let blank = spaces(block_width);
            let mut outer = Vec::with_capacity(lines.len());
            outer.extend(std::iter::repeat(blank.clone()).take(margin_top));
            outer.extend(lines.into_iter().map(|line| format!("{left}{line}{right}")));
            outer.extend(std::iter::repeat(blank).take(margin_bottom));
            lines = outer;
        }

        trace!(
            content_width,
            block_width,
            lines = lines.len(),
            "rendered block"
        );
        lines.join("\n")
    }

    /// Attributes, then foreground, then background.
    fn open_sequence(&self, ctx: &RenderContext) -> String {
        let mut open = self.attributes.sequence();
        if let Some(fg) = &self.foreground {
            open.push_str(&fg.sequence(ColorLayer::Foreground, ctx));
        }
        if let Some(bg) = &self.background {
            open.push_str(&bg.sequence(ColorLayer::Background, ctx));
        }
        open
    }
}

/// A top or bottom border row: `edge` spans `width` cells between the corners.
fn edge_row(paint: &Paint, left: &str, edge: char, right: &str, width: usize) -> String {
    paint.apply(&format!("{left}{}{right}", repeat_to_width(edge, width)))
}

/// `glyph` in a border column of `width` cells, pushed to the outer edge.
fn side_cell(glyph: char, width: usize, outer: Align) -> String {
    let glyph_width = char_width(glyph);
    if glyph_width == 0 {
        return spaces(width);
    }
    let (before, after) = outer.split(width.saturating_sub(glyph_width));
    format!("{}{glyph}{}", spaces(before), spaces(after))
}

/// Repeats `glyph` to cover `width` cells, space-filling any remainder.
fn repeat_to_width(glyph: char, width: usize) -> String {
    let glyph_width = char_width(glyph);
    if glyph_width == 0 {
        return spaces(width);
    }
    let mut run: String = std::iter::repeat(glyph).take(width / glyph_width).collect();
    run.push_str(&spaces(width % glyph_width));
    run
}
