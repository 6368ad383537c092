//! Alignment and box-side types shared by the renderer and the layout helpers.

/// Horizontal placement of content inside a wider area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// All fill goes after the content.
    #[default]
    Left,
    /// Fill is split; an odd leftover cell goes on the right.
    Center,
    /// All fill goes before the content.
    Right,
}

impl Align {
    /// Splits `fill` cells into `(before, after)` for this alignment.
    ///
    /// Centering puts the odd cell after the content.
    ///
    /// ```rust
    /// use standout_layout::Align;
    ///
    /// assert_eq!(Align::Left.split(3), (0, 3));
    /// assert_eq!(Align::Center.split(3), (1, 2));
    /// assert_eq!(Align::Right.split(3), (3, 0));
    /// ```
    pub fn split(self, fill: usize) -> (usize, usize) {
        match self {
            Align::Left => (0, fill),
            Align::Center => (fill / 2, fill - fill / 2),
            Align::Right => (fill, 0),
        }
    }

    /// Looks an alignment up by name (`left`, `center`/`centre`, `right`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Align::Left),
            "center" | "centre" => Some(Align::Center),
            "right" => Some(Align::Right),
            _ => None,
        }
    }
}

/// Vertical placement of content inside a taller area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    /// Blank rows go below the content.
    #[default]
    Top,
    /// Blank rows are split; an odd leftover row goes below.
    Middle,
    /// Blank rows go above the content.
    Bottom,
}

impl VerticalAlign {
    /// Alias for [`VerticalAlign::Middle`].
    pub const CENTER: VerticalAlign = VerticalAlign::Middle;

    /// Splits `fill` rows into `(above, below)` for this alignment.
    pub fn split(self, fill: usize) -> (usize, usize) {
        match self {
            VerticalAlign::Top => (0, fill),
            VerticalAlign::Middle => (fill / 2, fill - fill / 2),
            VerticalAlign::Bottom => (fill, 0),
        }
    }

    /// Looks an alignment up by name (`top`, `middle`/`center`, `bottom`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "top" => Some(VerticalAlign::Top),
            "middle" | "center" | "centre" => Some(VerticalAlign::Middle),
            "bottom" => Some(VerticalAlign::Bottom),
            _ => None,
        }
    }
}

/// Four optional per-side values, in CSS order.
///
/// `None` means "not configured", which is distinct from an explicit zero
/// or `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sides<T> {
    pub top: Option<T>,
    pub right: Option<T>,
    pub bottom: Option<T>,
    pub left: Option<T>,
}

impl<T: Copy> Sides<T> {
    /// All four sides set to `value`.
    pub fn all(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sides set individually, clockwise from the top.
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Sides {
            top: Some(top),
            right: Some(right),
            bottom: Some(bottom),
            left: Some(left),
        }
    }

    /// True when no side is configured.
    pub fn is_unset(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// Fills sides unset here from `other`.
    pub fn or(self, other: Sides<T>) -> Self {
        Sides {
            top: self.top.or(other.top),
            right: self.right.or(other.right),
            bottom: self.bottom.or(other.bottom),
            left: self.left.or(other.left),
        }
    }
}

impl Sides<usize> {
    /// Returns `(top, right, bottom, left)` with unset sides as 0.
    pub fn resolved(&self) -> (usize, usize, usize, usize) {
        (
            self.top.unwrap_or(0),
            self.right.unwrap_or(0),
            self.bottom.unwrap_or(0),
            self.left.unwrap_or(0),
        )
    }
}
