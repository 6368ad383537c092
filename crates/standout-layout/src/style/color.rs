//! Color values and their escape sequences.
//!
//! Supported forms:
//!
//! - RGB hex: `"#ff6b35"` or `"#f63"` (3 digits expand by doubling each nibble)
//! - Named: `red`, `bright-red` (also `bright_red`), `gray`/`grey` for bright black
//! - 256-color palette: `"0"` through `"255"`
//! - Adaptive: a light and a dark variant, chosen at render time
//!
//! Parsing is available two ways. [`Color::parse`] is strict and reports what
//! was wrong. The `From<&str>` conversion used by the style builders is
//! lenient: malformed input becomes [`Color::Invalid`], which renders as no
//! color at all instead of failing the render.
//!
//! ```rust
//! use standout_layout::{AnsiColor, Color};
//!
//! assert_eq!(Color::parse("#f00").unwrap(), Color::Rgb(255, 0, 0));
//! assert_eq!(Color::parse("bright-blue").unwrap(), Color::Named(AnsiColor::BrightBlue));
//! assert_eq!(Color::parse("208").unwrap(), Color::Indexed(208));
//! assert!(Color::parse("#12345").is_err());
//!
//! let lenient: Color = "#zzz".into();
//! assert!(!lenient.is_valid());
//! ```

use tracing::debug;

use crate::context::RenderContext;
use crate::error::ColorError;
use crate::profile::{ansi256_to_ansi16, rgb_to_ansi16, rgb_to_ansi256, ColorProfile};
use crate::theme::ColorMode;

/// One of the 16 basic terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

const BASE_NAMES: [(&str, AnsiColor); 8] = [
    ("black", AnsiColor::Black),
    ("red", AnsiColor::Red),
    ("green", AnsiColor::Green),
    ("yellow", AnsiColor::Yellow),
    ("blue", AnsiColor::Blue),
    ("magenta", AnsiColor::Magenta),
    ("cyan", AnsiColor::Cyan),
    ("white", AnsiColor::White),
];

const ALL_ANSI: [AnsiColor; 16] = [
    AnsiColor::Black,
    AnsiColor::Red,
    AnsiColor::Green,
    AnsiColor::Yellow,
    AnsiColor::Blue,
    AnsiColor::Magenta,
    AnsiColor::Cyan,
    AnsiColor::White,
    AnsiColor::BrightBlack,
    AnsiColor::BrightRed,
    AnsiColor::BrightGreen,
    AnsiColor::BrightYellow,
    AnsiColor::BrightBlue,
    AnsiColor::BrightMagenta,
    AnsiColor::BrightCyan,
    AnsiColor::BrightWhite,
];

impl AnsiColor {
    /// Palette index, 0–15.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The color at palette index `index`, if it is below 16.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_ANSI.get(index as usize).copied()
    }

    /// True for the bright half of the palette (8–15).
    pub fn is_bright(self) -> bool {
        self.index() >= 8
    }

    /// Looks a color up by name, case-insensitively.
    ///
    /// Accepts the eight base names, their `bright-`/`bright_` forms, and
    /// `gray`/`grey` for bright black.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name == "gray" || name == "grey" {
            return Some(AnsiColor::BrightBlack);
        }
        let (base, bright) = match name
            .strip_prefix("bright-")
            .or_else(|| name.strip_prefix("bright_"))
        {
            Some(base) => (base, true),
            None => (name.as_str(), false),
        };
        let color = BASE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == base)
            .map(|(_, color)| *color)?;
        if bright {
            AnsiColor::from_index(color.index() + 8)
        } else {
            Some(color)
        }
    }
}

/// Whether a sequence colors the text or the cell behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorLayer {
    Foreground,
    Background,
}

impl ColorLayer {
    /// SGR code that introduces a 256-color or RGB value on this layer.
    fn extended(self) -> u8 {
        match self {
            ColorLayer::Foreground => 38,
            ColorLayer::Background => 48,
        }
    }

    /// SGR code for basic color `index` (0–15) on this layer.
    fn basic(self, index: u8) -> u8 {
        match (self, index < 8) {
            (ColorLayer::Foreground, true) => 30 + index,
            (ColorLayer::Foreground, false) => 90 + index - 8,
            (ColorLayer::Background, true) => 40 + index,
            (ColorLayer::Background, false) => 100 + index - 8,
        }
    }
}

/// A color as written in a style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// True color.
    Rgb(u8, u8, u8),
    /// One of the 16 basic colors.
    Named(AnsiColor),
    /// 256-color palette index.
    Indexed(u8),
    /// One variant per background, resolved at render time.
    Adaptive { light: Box<Color>, dark: Box<Color> },
    /// Input that could not be parsed. Renders as no color.
    Invalid(String),
}

impl Color {
    /// Parses a color string strictly.
    ///
    /// `#` introduces hex, an all-digit string is a palette index, anything
    /// else is looked up as a name.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return match s.parse::<u8>() {
                Ok(index) => Ok(Color::Indexed(index)),
                Err(_) => Err(ColorError::IndexOutOfRange(s.to_string())),
            };
        }
        if let Some(rest) = s.strip_prefix('-') {
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ColorError::IndexOutOfRange(s.to_string()));
            }
        }
        AnsiColor::from_name(s)
            .map(Color::Named)
            .ok_or_else(|| ColorError::UnknownName(s.to_string()))
    }

    /// Parses the digits of a hex color (without the `#`).
    fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            3 => Ok(Color::Rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(Color::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// An adaptive color: `light` on light backgrounds, `dark` on dark ones.
    pub fn adaptive(light: impl Into<Color>, dark: impl Into<Color>) -> Self {
        Color::Adaptive {
            light: Box::new(light.into()),
            dark: Box::new(dark.into()),
        }
    }

    /// False for [`Color::Invalid`], or an adaptive color with an invalid variant.
    pub fn is_valid(&self) -> bool {
        match self {
            Color::Invalid(_) => false,
            Color::Adaptive { light, dark } => light.is_valid() && dark.is_valid(),
            _ => true,
        }
    }

    /// True when resolution depends on the background.
    pub fn is_adaptive(&self) -> bool {
        matches!(self, Color::Adaptive { .. })
    }

    /// The concrete color for `mode`. Non-adaptive colors return themselves.
    pub fn resolve(&self, mode: ColorMode) -> &Color {
        match self {
            Color::Adaptive { light, dark } => match mode {
                ColorMode::Light => light.resolve(mode),
                ColorMode::Dark => dark.resolve(mode),
            },
            other => other,
        }
    }

    /// The SGR sequence selecting this color on `layer`.
    ///
    /// Returns an empty string when the color is invalid or the context's
    /// profile cannot show color. Richer colors are downsampled to fit the
    /// profile.
    pub fn sequence(&self, layer: ColorLayer, ctx: &RenderContext) -> String {
        let profile = ctx.profile;
        match self.resolve(ctx.color_mode) {
            Color::Invalid(raw) => {
                debug!(color = %raw, "ignoring malformed color");
                String::new()
            }
            _ if profile == ColorProfile::Ascii => {
                debug!(?profile, "color dropped by profile");
                String::new()
            }
            Color::Rgb(r, g, b) => match profile {
                ColorProfile::TrueColor => {
                    format!("\x1b[{};2;{};{};{}m", layer.extended(), r, g, b)
                }
                ColorProfile::Ansi256 => indexed(layer, rgb_to_ansi256((*r, *g, *b))),
                _ => basic(layer, rgb_to_ansi16((*r, *g, *b))),
            },
            Color::Indexed(index) => match profile {
                ColorProfile::Ansi16 => basic(layer, ansi256_to_ansi16(*index)),
                _ => indexed(layer, *index),
            },
            Color::Named(color) => basic(layer, color.index()),
            // resolve() never returns an adaptive color
            Color::Adaptive { .. } => String::new(),
        }
    }
}

fn indexed(layer: ColorLayer, index: u8) -> String {
    format!("\x1b[{};5;{}m", layer.extended(), index)
}

fn basic(layer: ColorLayer, index: u8) -> String {
    format!("\x1b[{}m", layer.basic(index))
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::parse(s).unwrap_or_else(|_| Color::Invalid(s.to_string()))
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        match Color::parse(&s) {
            Ok(color) => color,
            Err(_) => Color::Invalid(s),
        }
    }
}

impl From<&String> for Color {
    fn from(s: &String) -> Self {
        Color::from(s.as_str())
    }
}

impl From<AnsiColor> for Color {
    fn from(color: AnsiColor) -> Self {
        Color::Named(color)
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Color::Indexed(index)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}
