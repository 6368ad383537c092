//! Terminal color profiles and palette conversion.
//!
//! A [`ColorProfile`] says how many colors the output may use. Colors richer
//! than the profile are downsampled when their escape sequence is built:
//! RGB goes to the 256-color cube, 256-color indices go to the nearest of the
//! 16 basic colors, and [`ColorProfile::Ascii`] drops color entirely.

/// How much color the target terminal can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorProfile {
    /// No color at all. Text attributes are still emitted.
    Ascii,
    /// The 16 basic ANSI colors.
    Ansi16,
    /// The xterm 256-color palette.
    Ansi256,
    /// 24-bit RGB.
    #[default]
    TrueColor,
}

impl ColorProfile {
    /// Detects the profile of the current process's terminal.
    ///
    /// Returns [`ColorProfile::Ascii`] when `console` reports colors as
    /// disabled (not a TTY, `CLICOLOR=0`, ...), otherwise defers to
    /// [`ColorProfile::from_env`].
    pub fn detect() -> Self {
        if !console::colors_enabled() {
            return ColorProfile::Ascii;
        }
        Self::from_env(|key| std::env::var(key).ok())
    }

    /// Infers the profile from environment variables read through `lookup`.
    ///
    /// - `NO_COLOR` set to a non-empty value, or `TERM=dumb` → `Ascii`
    /// - `COLORTERM` of `truecolor` or `24bit` → `TrueColor`
    /// - `TERM` containing `256color` → `Ansi256`
    /// - anything else → `Ansi16`
    ///
    /// ```rust
    /// use standout_layout::ColorProfile;
    ///
    /// let profile = ColorProfile::from_env(|key| match key {
    ///     "TERM" => Some("xterm-256color".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(profile, ColorProfile::Ansi256);
    /// ```
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let term = lookup("TERM").unwrap_or_default();
        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());
        if no_color || term == "dumb" {
            return ColorProfile::Ascii;
        }
        if let Some(colorterm) = lookup("COLORTERM") {
            let colorterm = colorterm.to_ascii_lowercase();
            if colorterm == "truecolor" || colorterm == "24bit" {
                return ColorProfile::TrueColor;
            }
        }
        if term.contains("256color") {
            return ColorProfile::Ansi256;
        }
        ColorProfile::Ansi16
    }
}

/// RGB values of the 16 basic colors as xterm draws them.
const XTERM_16: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Channel levels of the 6x6x6 color cube (indices 16–231).
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays map onto the 24-step gray ramp, everything else onto the color cube.
///
/// ```rust
/// use standout_layout::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// RGB value xterm uses for a 256-color palette index.
pub fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => XTERM_16[index as usize],
        16..=231 => {
            let i = index - 16;
            (
                CUBE_LEVELS[(i / 36) as usize],
                CUBE_LEVELS[((i / 6) % 6) as usize],
                CUBE_LEVELS[(i % 6) as usize],
            )
        }
        _ => {
            let level = 8 + 10 * (index - 232);
            (level, level, level)
        }
    }
}

/// Nearest of the 16 basic colors (0–15) by squared RGB distance.
pub fn rgb_to_ansi16(rgb: (u8, u8, u8)) -> u8 {
    let distance = |(r, g, b): (u8, u8, u8)| {
        let dr = r as i32 - rgb.0 as i32;
        let dg = g as i32 - rgb.1 as i32;
        let db = b as i32 - rgb.2 as i32;
        dr * dr + dg * dg + db * db
    };
    XTERM_16
        .iter()
        .enumerate()
        .min_by_key(|(_, &candidate)| distance(candidate))
        .map(|(i, _)| i as u8)
        .unwrap_or(0)
}

/// Maps a 256-color index to the 16-color range. Indices below 16 are kept.
pub fn ansi256_to_ansi16(index: u8) -> u8 {
    if index < 16 {
        index
    } else {
        rgb_to_ansi16(ansi256_to_rgb(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn from_env_no_color_wins() {
        let lookup = env(&[("NO_COLOR", "1"), ("COLORTERM", "truecolor")]);
        assert_eq!(ColorProfile::from_env(lookup), ColorProfile::Ascii);
    }

    #[test]
    fn from_env_ignores_empty_no_color() {
        let lookup = env(&[("NO_COLOR", ""), ("COLORTERM", "truecolor")]);
        assert_eq!(ColorProfile::from_env(lookup), ColorProfile::TrueColor);
    }

    #[test]
    fn from_env_dumb_terminal() {
        assert_eq!(
            ColorProfile::from_env(env(&[("TERM", "dumb")])),
            ColorProfile::Ascii
        );
    }

    #[test]
    fn from_env_truecolor() {
        let lookup = env(&[("COLORTERM", "24bit"), ("TERM", "xterm")]);
        assert_eq!(ColorProfile::from_env(lookup), ColorProfile::TrueColor);
    }

    #[test]
    fn from_env_256_and_fallback() {
        assert_eq!(
            ColorProfile::from_env(env(&[("TERM", "screen-256color")])),
            ColorProfile::Ansi256
        );
        assert_eq!(ColorProfile::from_env(env(&[])), ColorProfile::Ansi16);
    }

    #[test]
    fn profiles_are_ordered_by_richness() {
        assert!(ColorProfile::Ascii < ColorProfile::Ansi16);
        assert!(ColorProfile::Ansi256 < ColorProfile::TrueColor);
        assert_eq!(ColorProfile::default(), ColorProfile::TrueColor);
    }

    #[test]
    fn rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }

    #[test]
    fn ansi256_to_rgb_regions() {
        assert_eq!(ansi256_to_rgb(1), (205, 0, 0));
        assert_eq!(ansi256_to_rgb(196), (255, 0, 0));
        assert_eq!(ansi256_to_rgb(16), (0, 0, 0));
        assert_eq!(ansi256_to_rgb(232), (8, 8, 8));
        assert_eq!(ansi256_to_rgb(255), (238, 238, 238));
    }

    #[test]
    fn nearest_basic_color() {
        assert_eq!(rgb_to_ansi16((250, 5, 5)), 9);
        assert_eq!(rgb_to_ansi16((0, 0, 0)), 0);
        assert_eq!(ansi256_to_ansi16(196), 9);
        assert_eq!(ansi256_to_ansi16(4), 4);
    }
}
