//! The style value type and the pieces it is built from.
//!
//! - [`Style`]: the box-model descriptor with its builders
//! - [`Color`] / [`AnsiColor`]: color values and their escape sequences
//! - [`Attribute`] / [`Attributes`]: tri-state text attributes
//! - [`Border`]: border glyph tables

mod attributes;
mod border;
mod color;
#[allow(clippy::module_inception)]
mod style;

pub use attributes::{Attribute, Attributes, RESET};
pub use border::Border;
pub use color::{AnsiColor, Color, ColorLayer};
pub use style::Style;
