//! Render-time signals injected into every render.
//!
//! A [`Style`](crate::Style) holds no render-time state. Everything that can
//! differ between terminals (the background for adaptive colors, and how many
//! colors may be emitted) travels in a [`RenderContext`] passed to
//! [`Style::render_with`](crate::Style::render_with).
//!
//! ```rust
//! use standout_layout::{Color, ColorMode, RenderContext, Style};
//!
//! let style = Style::new().foreground(Color::adaptive("#000000", "#ffffff"));
//!
//! let light = RenderContext::new().with_color_mode(ColorMode::Light);
//! let dark = RenderContext::new().with_color_mode(ColorMode::Dark);
//!
//! assert_eq!(style.render_with(&light, "x"), "\x1b[38;2;0;0;0mx\x1b[0m");
//! assert_eq!(style.render_with(&dark, "x"), "\x1b[38;2;255;255;255mx\x1b[0m");
//! ```

use crate::profile::ColorProfile;
use crate::theme::{detect_color_mode, ColorMode};

/// Information consulted while turning a style into escape sequences.
///
/// The default is a dark background with true-color output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RenderContext {
    /// Background the adaptive colors resolve against.
    pub color_mode: ColorMode,
    /// Richest color encoding allowed in the output.
    pub profile: ColorProfile,
}

impl RenderContext {
    /// Dark background, true color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Background detected from the environment, true color.
    ///
    /// This is what [`Style::render`](crate::Style::render) uses when a style
    /// has adaptive colors.
    pub fn from_env() -> Self {
        RenderContext {
            color_mode: detect_color_mode(),
            profile: ColorProfile::TrueColor,
        }
    }

    /// Background and color profile both detected from the environment.
    pub fn detect() -> Self {
        RenderContext {
            color_mode: detect_color_mode(),
            profile: ColorProfile::detect(),
        }
    }

    /// Returns a copy with an explicit background. Overrides any detection.
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Returns a copy with a different color profile.
    pub fn with_profile(mut self, profile: ColorProfile) -> Self {
        self.profile = profile;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_dark_truecolor() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.color_mode, ColorMode::Dark);
        assert_eq!(ctx.profile, ColorProfile::TrueColor);
    }

    #[test]
    fn builders_return_updated_copies() {
        let base = RenderContext::new();
        let light = base.with_color_mode(ColorMode::Light);
        let small = light.with_profile(ColorProfile::Ansi16);
        assert_eq!(base.color_mode, ColorMode::Dark);
        assert_eq!(light.color_mode, ColorMode::Light);
        assert_eq!(small.color_mode, ColorMode::Light);
        assert_eq!(small.profile, ColorProfile::Ansi16);
    }
}
