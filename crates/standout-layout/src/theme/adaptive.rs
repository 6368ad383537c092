//! Color mode detection.
//!
//! Environment signals are re-read on every call so a long-running process
//! follows changes; the OS probe is the only cached input.

use dark_light::Mode as OsThemeMode;
use once_cell::sync::Lazy;

/// Environment variable holding an explicit `light` / `dark` override.
pub const COLOR_MODE_ENV: &str = "STANDOUT_COLOR_MODE";

/// The terminal background a render targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    #[default]
    Dark,
}

impl ColorMode {
    /// Parses `light` or `dark`, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }
}

static OS_COLOR_MODE: Lazy<Option<ColorMode>> = Lazy::new(|| match dark_light::detect() {
    Ok(OsThemeMode::Light) => Some(ColorMode::Light),
    Ok(OsThemeMode::Dark) => Some(ColorMode::Dark),
    _ => None,
});

/// Detects the background of the current terminal.
///
/// Checks the explicit override variable, then `COLORFGBG`, then the OS
/// appearance setting, and falls back to [`ColorMode::Dark`].
pub fn detect_color_mode() -> ColorMode {
    color_mode_from_env(|key| std::env::var(key).ok())
        .or_else(|| *OS_COLOR_MODE)
        .unwrap_or_default()
}

/// Reads the environment signals through `lookup`.
///
/// Returns `None` when neither the override variable nor `COLORFGBG` gives
/// an answer. In `COLORFGBG` (`"fg;bg"` or `"fg;default;bg"`) the last field
/// is the background palette index: 7 and 15 are light, other numbers dark.
///
/// ```rust
/// use standout_layout::{color_mode_from_env, ColorMode};
///
/// let mode = color_mode_from_env(|key| match key {
///     "COLORFGBG" => Some("0;15".to_string()),
///     _ => None,
/// });
/// assert_eq!(mode, Some(ColorMode::Light));
/// ```
pub fn color_mode_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<ColorMode> {
    if let Some(mode) = lookup(COLOR_MODE_ENV).and_then(|v| ColorMode::from_name(&v)) {
        return Some(mode);
    }
    let colorfgbg = lookup("COLORFGBG")?;
    let background: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        7 | 15 => Some(ColorMode::Light),
        _ => Some(ColorMode::Dark),
    }
}
