//! # Standout Layout - Box-Model Styling for Terminal Output
//!
//! `standout-layout` turns text into styled, rectangular blocks of ANSI
//! terminal output and composes those blocks side by side or stacked.
//!
//! ## Core Concepts
//!
//! - [`Style`]: an immutable descriptor of attributes, colors, and a box
//!   model (width, alignment, padding, border, height, margin)
//! - [`Color`]: hex, named, 256-palette, or adaptive (light/dark) colors
//! - [`Border`]: border glyph tables (`normal`, `rounded`, `double`, ...)
//! - [`RenderContext`]: the render-time signals (background, color profile)
//! - [`join_horizontal`], [`join_vertical`], [`place`]: block composition
//! - [`width`]: ANSI-aware measuring, truncation, and padding
//! - [`Stylesheet`]: named styles loaded from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_layout::{Align, Border, Style};
//!
//! let card = Style::new()
//!     .border(Border::ROUNDED)
//!     .padding_symmetric(0, 1)
//!     .width(9)
//!     .align(Align::Center);
//!
//! assert_eq!(
//!     card.render("hello"),
//!     "╭───────────╮\n│   hello   │\n╰───────────╯"
//! );
//! ```
//!
//! ## Composition
//!
//! Rendered blocks are plain strings, so they nest freely: a joined block
//! can be rendered inside another style.
//!
//! ```rust
//! use standout_layout::{join_horizontal, Border, Style, VerticalAlign};
//!
//! let left = Style::new().border(Border::ASCII).render("a\nb");
//! let right = Style::new().border(Border::ASCII).render("c");
//! let both = join_horizontal(VerticalAlign::Top, &[left.as_str(), " ", right.as_str()]);
//!
//! assert_eq!(both, "+-+ +-+\n|a| |c|\n|b| +-+\n+-+    ");
//! ```
//!
//! ## Rendering Never Fails
//!
//! Rendering always returns a string. A color that cannot be parsed, or
//! cannot be shown by the active [`ColorProfile`], is simply left out.
//! Callers who want to reject bad input up front use [`Color::parse`] or
//! load a [`Stylesheet`], both of which return errors.

pub mod context;
mod error;
pub mod layout;
pub mod position;
pub mod prelude;
pub mod profile;
mod render;
pub mod style;
pub mod stylesheet;
pub mod theme;
pub mod width;

// Error type
pub use error::ColorError;

// Style module exports
pub use style::{AnsiColor, Attribute, Attributes, Border, Color, ColorLayer, Style, RESET};

// Render context exports
pub use context::RenderContext;
pub use profile::{ansi256_to_ansi16, ansi256_to_rgb, rgb_to_ansi16, rgb_to_ansi256, ColorProfile};
pub use theme::{color_mode_from_env, detect_color_mode, ColorMode, COLOR_MODE_ENV};

// Layout exports
pub use layout::{join_horizontal, join_vertical, place, place_horizontal, place_vertical};
pub use position::{Align, Sides, VerticalAlign};

// Stylesheet exports
pub use stylesheet::{StyleDefinition, StyleValidationError, Stylesheet, StylesheetError};
