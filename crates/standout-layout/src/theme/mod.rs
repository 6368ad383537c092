//! Light/dark background detection for adaptive colors.
//!
//! An [`AdaptiveColor`](crate::Color::Adaptive) carries one variant per
//! background. Which one is used is decided at render time from a
//! [`ColorMode`], which the caller either passes explicitly through a
//! [`RenderContext`](crate::RenderContext) or lets [`detect_color_mode`]
//! infer from the environment.
//!
//! ## Signal precedence
//!
//! 1. An explicit override: [`RenderContext::with_color_mode`](crate::RenderContext::with_color_mode)
//!    or the `STANDOUT_COLOR_MODE` environment variable (`light` / `dark`).
//! 2. The `COLORFGBG` environment variable set by many terminals.
//! 3. The OS appearance setting (probed once per process).
//! 4. Nothing found: dark.
//!
//! The engine never sends escape-sequence queries to the terminal.

mod adaptive;

pub use adaptive::{color_mode_from_env, detect_color_mode, ColorMode, COLOR_MODE_ENV};
