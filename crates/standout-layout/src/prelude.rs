//! Common imports in one line.
//!
//! ```rust
//! use standout_layout::prelude::*;
//!
//! let out = join_vertical(
//!     Align::Center,
//!     &[Style::new().border(Border::ASCII).render("title"), "body".to_string()],
//! );
//! assert_eq!(out, "+-----+\n|title|\n+-----+\n body  ");
//! ```

// Styling
pub use crate::style::{Attribute, Border, Color, Style};

// Render-time signals
pub use crate::context::RenderContext;
pub use crate::profile::ColorProfile;
pub use crate::theme::ColorMode;

// Composition
pub use crate::layout::{join_horizontal, join_vertical, place};
pub use crate::position::{Align, VerticalAlign};

// Stylesheets
pub use crate::stylesheet::Stylesheet;
