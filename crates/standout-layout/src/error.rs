//! Error types for the fallible constructors.
//!
//! Rendering itself never fails. Errors only come from the places where a
//! caller can inspect input before building a [`Style`](crate::Style):
//! strict color parsing here, and stylesheet loading in
//! [`stylesheet`](crate::stylesheet).

use thiserror::Error;

/// Why a color string was rejected by [`Color::parse`](crate::Color::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Blank input.
    #[error("empty color value")]
    Empty,

    /// `#` followed by something other than 3 or 6 hex digits.
    #[error("invalid hex color '#{0}' (expected 3 or 6 hex digits)")]
    InvalidHex(String),

    /// A number outside the 0–255 palette.
    #[error("color palette index {0} out of range (0-255)")]
    IndexOutOfRange(String),

    /// Not a known color name.
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}
