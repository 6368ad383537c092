//! Text attributes and their combined SGR sequence.
//!
//! Every attribute is tri-state: unset, explicitly on, or explicitly off.
//! Only attributes that are on produce codes. Styled spans are always closed
//! with a full [`RESET`], so no "attribute off" codes are ever needed.

/// Closes a styled span.
pub const RESET: &str = "\x1b[0m";

/// A boolean text attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    Reverse,
    Strikethrough,
}

impl Attribute {
    /// All attributes in SGR code order.
    pub const ALL: [Attribute; 7] = [
        Attribute::Bold,
        Attribute::Faint,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::Reverse,
        Attribute::Strikethrough,
    ];

    /// SGR code that switches the attribute on.
    pub fn code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Faint => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::Reverse => 7,
            Attribute::Strikethrough => 9,
        }
    }

    /// Lower-case name, as used in stylesheets.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Faint => "faint",
            Attribute::Italic => "italic",
            Attribute::Underline => "underline",
            Attribute::Blink => "blink",
            Attribute::Reverse => "reverse",
            Attribute::Strikethrough => "strikethrough",
        }
    }

    /// Looks an attribute up by name. `dim` is accepted for faint.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name == "dim" {
            return Some(Attribute::Faint);
        }
        Attribute::ALL.into_iter().find(|a| a.name() == name)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// The seven attribute flags of a style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Attributes {
    flags: [Option<bool>; 7],
}

impl Attributes {
    /// No attribute configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured value, `None` when unset.
    pub fn get(&self, attribute: Attribute) -> Option<bool> {
        self.flags[attribute.slot()]
    }

    /// True when the attribute is explicitly on.
    pub fn is_on(&self, attribute: Attribute) -> bool {
        self.get(attribute) == Some(true)
    }

    /// Returns a copy with `attribute` set to `on`.
    pub fn with(mut self, attribute: Attribute, on: bool) -> Self {
        self.flags[attribute.slot()] = Some(on);
        self
    }

    /// Returns a copy with `attribute` unset.
    pub fn without(mut self, attribute: Attribute) -> Self {
        self.flags[attribute.slot()] = None;
        self
    }

    /// True when no attribute is configured (on or off).
    pub fn is_unset(&self) -> bool {
        self.flags.iter().all(Option::is_none)
    }

    /// Fills attributes unset here from `other`.
    pub fn or(mut self, other: Attributes) -> Self {
        for (own, theirs) in self.flags.iter_mut().zip(other.flags) {
            *own = own.or(theirs);
        }
        self
    }

    /// One SGR sequence switching on every attribute that is on.
    ///
    /// Codes appear in ascending order regardless of the order the attributes
    /// were set in. Empty when nothing is on.
    ///
    /// ```rust
    /// use standout_layout::{Attribute, Attributes};
    ///
    /// let attrs = Attributes::new()
    ///     .with(Attribute::Underline, true)
    ///     .with(Attribute::Bold, true);
    /// assert_eq!(attrs.sequence(), "\x1b[1;4m");
    /// assert_eq!(Attributes::new().sequence(), "");
    /// ```
    pub fn sequence(&self) -> String {
        let codes: Vec<String> = Attribute::ALL
            .into_iter()
            .filter(|a| self.is_on(*a))
            .map(|a| a.code().to_string())
            .collect();
        if codes.is_empty() {
            String::new()
        } else {
            format!("\x1b[{}m", codes.join(";"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_attribute_codes() {
        let cases = [
            (Attribute::Bold, "\x1b[1m"),
            (Attribute::Faint, "\x1b[2m"),
            (Attribute::Italic, "\x1b[3m"),
            (Attribute::Underline, "\x1b[4m"),
            (Attribute::Blink, "\x1b[5m"),
            (Attribute::Reverse, "\x1b[7m"),
            (Attribute::Strikethrough, "\x1b[9m"),
        ];
        for (attribute, expected) in cases {
            assert_eq!(Attributes::new().with(attribute, true).sequence(), expected);
        }
    }

    #[test]
    fn order_of_application_does_not_matter() {
        let a = Attributes::new()
            .with(Attribute::Strikethrough, true)
            .with(Attribute::Bold, true)
            .with(Attribute::Italic, true);
        let b = Attributes::new()
            .with(Attribute::Italic, true)
            .with(Attribute::Bold, true)
            .with(Attribute::Strikethrough, true);
        assert_eq!(a.sequence(), "\x1b[1;3;9m");
        assert_eq!(a.sequence(), b.sequence());
    }

    #[test]
    fn explicit_false_is_set_but_silent() {
        let attrs = Attributes::new().with(Attribute::Bold, false);
        assert_eq!(attrs.get(Attribute::Bold), Some(false));
        assert!(!attrs.is_unset());
        assert_eq!(attrs.sequence(), "");
    }

    #[test]
    fn without_unsets() {
        let attrs = Attributes::new()
            .with(Attribute::Bold, true)
            .without(Attribute::Bold);
        assert!(attrs.is_unset());
    }

    #[test]
    fn or_prefers_own_values() {
        let own = Attributes::new().with(Attribute::Bold, false);
        let other = Attributes::new()
            .with(Attribute::Bold, true)
            .with(Attribute::Italic, true);
        let merged = own.or(other);
        assert_eq!(merged.get(Attribute::Bold), Some(false));
        assert_eq!(merged.get(Attribute::Italic), Some(true));
    }

    #[test]
    fn names() {
        assert_eq!(Attribute::from_name("Bold"), Some(Attribute::Bold));
        assert_eq!(Attribute::from_name("dim"), Some(Attribute::Faint));
        assert_eq!(Attribute::from_name("hidden"), None);
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::from_name(attribute.name()), Some(attribute));
        }
    }
}
