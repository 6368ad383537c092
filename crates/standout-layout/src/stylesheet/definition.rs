//! Parsing single stylesheet entries.
//!
//! An entry is one of:
//!
//! ```yaml
//! # Alias: a string naming another style
//! disabled: muted
//!
//! # Shorthand: attribute keywords and colors, "on" introduces the background
//! warning: "bold yellow on black"
//!
//! # Full definition
//! panel:
//!   fg: { light: "#000000", dark: "#ffffff" }
//!   border: rounded
//!   padding: [0, 1]
//!   width: 40
//! ```

use serde_yaml::{Mapping, Value};

use super::error::StylesheetError;
use crate::position::{Align, VerticalAlign};
use crate::style::{Attribute, Border, Color, Style};

/// One parsed entry, before references are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDefinition {
    /// Same as another style.
    Alias(String),

    /// A concrete style, optionally filling its unset fields from a parent.
    Style {
        style: Style,
        inherit: Option<String>,
    },
}

impl StyleDefinition {
    /// Parses the YAML value of the entry named `name`.
    pub fn parse(value: &Value, name: &str) -> Result<Self, StylesheetError> {
        match value {
            Value::String(s) => Self::parse_string(s, name),
            Value::Mapping(map) => Self::parse_mapping(map, name),
            other => Err(StylesheetError::InvalidDefinition {
                style: name.to_string(),
                message: format!("expected string or mapping, got {}", describe(other)),
            }),
        }
    }

    /// The style this entry refers to, if any.
    pub fn reference(&self) -> Option<&str> {
        match self {
            StyleDefinition::Alias(target) => Some(target),
            StyleDefinition::Style { inherit, .. } => inherit.as_deref(),
        }
    }

    fn parse_string(s: &str, name: &str) -> Result<Self, StylesheetError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StylesheetError::InvalidDefinition {
                style: name.to_string(),
                message: "empty style definition".to_string(),
            });
        }
        if !s.contains(char::is_whitespace) && is_likely_alias(s) {
            return Ok(StyleDefinition::Alias(s.to_string()));
        }
        Ok(StyleDefinition::Style {
            style: parse_shorthand(s, name)?,
            inherit: None,
        })
    }

    fn parse_mapping(map: &Mapping, name: &str) -> Result<Self, StylesheetError> {
        let mut style = Style::new();
        let mut inherit = None;

        for (key, value) in map {
            let key = key
                .as_str()
                .ok_or_else(|| StylesheetError::InvalidDefinition {
                    style: name.to_string(),
                    message: format!("non-string key {}", describe(key)),
                })?;
            if key == "inherit" {
                inherit = Some(string(value, key, name)?.trim().to_string());
                continue;
            }
            style = apply(style, key, value, name)?;
        }

        Ok(StyleDefinition::Style { style, inherit })
    }
}

/// Sets the property `key` of `style` from `value`.
fn apply(style: Style, key: &str, value: &Value, name: &str) -> Result<Style, StylesheetError> {
    if let Some(attribute) = Attribute::from_name(key) {
        return Ok(style.attribute(attribute, boolean(value, key, name)?));
    }

    let style = match key {
        "fg" | "foreground" => style.foreground(color(value, name)?),
        "bg" | "background" => style.background(color(value, name)?),
        "border_fg" | "border_foreground" => style.border_foreground(color(value, name)?),
        "border_bg" | "border_background" => style.border_background(color(value, name)?),

        "width" => style.width(size(value, key, name)?),
        "height" => style.height(size(value, key, name)?),
        "max_width" => style.max_width(size(value, key, name)?),
        "max_height" => style.max_height(size(value, key, name)?),

        "align" => {
            let text = string(value, key, name)?;
            let align = Align::from_name(text)
                .ok_or_else(|| invalid(key, name, format!("unknown alignment '{text}'")))?;
            style.align(align)
        }
        "valign" | "align_vertical" => {
            let text = string(value, key, name)?;
            let align = VerticalAlign::from_name(text)
                .ok_or_else(|| invalid(key, name, format!("unknown alignment '{text}'")))?;
            style.align_vertical(align)
        }

        "padding" => {
            let (top, right, bottom, left) = sides(value, key, name)?;
            style.padding(top, right, bottom, left)
        }
        "padding_top" => style.padding_top(size(value, key, name)?),
        "padding_right" => style.padding_right(size(value, key, name)?),
        "padding_bottom" => style.padding_bottom(size(value, key, name)?),
        "padding_left" => style.padding_left(size(value, key, name)?),
        "margin" => {
            let (top, right, bottom, left) = sides(value, key, name)?;
            style.margin(top, right, bottom, left)
        }
        "margin_top" => style.margin_top(size(value, key, name)?),
        "margin_right" => style.margin_right(size(value, key, name)?),
        "margin_bottom" => style.margin_bottom(size(value, key, name)?),
        "margin_left" => style.margin_left(size(value, key, name)?),

        "border" => match value {
            Value::Bool(true) => style.border(Border::NORMAL),
            Value::Bool(false) => style.border_sides(false, false, false, false),
            _ => {
                let text = string(value, key, name)?;
                let border = Border::by_name(text).ok_or_else(|| {
                    let known: Vec<&str> = Border::names().collect();
                    invalid(
                        key,
                        name,
                        format!("unknown border '{text}' (expected one of {})", known.join(", ")),
                    )
                })?;
                style.border(border)
            }
        },
        "border_top" => style.border_top(boolean(value, key, name)?),
        "border_right" => style.border_right(boolean(value, key, name)?),
        "border_bottom" => style.border_bottom(boolean(value, key, name)?),
        "border_left" => style.border_left(boolean(value, key, name)?),

        "tab_width" => style.tab_width(size(value, key, name)?),
        "ellipsis" => style.ellipsis(string(value, key, name)?),

        _ => {
            return Err(StylesheetError::UnknownAttribute {
                style: name.to_string(),
                attribute: key.to_string(),
            })
        }
    };
    Ok(style)
}

/// Parses `"bold cyan"` or `"italic #ff0000 on blue"`.
///
/// Attribute keywords switch the attribute on. The first color is the
/// foreground; a color after `on` is the background.
pub fn parse_shorthand(s: &str, name: &str) -> Result<Style, StylesheetError> {
    let error = |message: String| StylesheetError::InvalidShorthand {
        style: name.to_string(),
        value: s.to_string(),
        message,
    };

    let mut style = Style::new();
    let mut foreground = false;
    let mut background = false;
    let mut parts = s.split_whitespace();

    while let Some(part) = parts.next() {
        if let Some(attribute) = Attribute::from_name(part) {
            style = style.attribute(attribute, true);
            continue;
        }
        if part.eq_ignore_ascii_case("on") {
            let next = parts
                .next()
                .ok_or_else(|| error("'on' must be followed by a color".to_string()))?;
            if background {
                return Err(error(format!("second background color '{next}'")));
            }
            let parsed = Color::parse(next).map_err(|e| error(e.to_string()))?;
            style = style.background(parsed);
            background = true;
            continue;
        }
        if foreground {
            return Err(error(format!("second foreground color '{part}'")));
        }
        let parsed = Color::parse(part).map_err(|e| error(e.to_string()))?;
        style = style.foreground(parsed);
        foreground = true;
    }

    if style.is_unset() {
        return Err(error("no attributes or colors".to_string()));
    }
    Ok(style)
}

/// A single word that is neither an attribute keyword nor a color.
fn is_likely_alias(word: &str) -> bool {
    Attribute::from_name(word).is_none() && Color::parse(word).is_err()
}

/// A color string, palette index, or `{light, dark}` mapping.
fn color(value: &Value, name: &str) -> Result<Color, StylesheetError> {
    let invalid_color = |raw: String, source| StylesheetError::InvalidColor {
        style: name.to_string(),
        value: raw,
        source,
    };

    match value {
        Value::String(s) => Color::parse(s).map_err(|e| invalid_color(s.clone(), e)),
        Value::Number(n) => {
            let raw = n.to_string();
            Color::parse(&raw).map_err(|e| invalid_color(raw, e))
        }
        Value::Mapping(map) => {
            let variant = |mode: &str| -> Result<Color, StylesheetError> {
                let v = map.get(mode).ok_or_else(|| StylesheetError::InvalidValue {
                    style: name.to_string(),
                    key: mode.to_string(),
                    message: "adaptive colors need both 'light' and 'dark'".to_string(),
                })?;
                color(v, name)
            };
            if let Some(key) = map
                .keys()
                .find(|k| !matches!(k.as_str(), Some("light") | Some("dark")))
            {
                return Err(StylesheetError::InvalidValue {
                    style: name.to_string(),
                    key: describe(key),
                    message: "adaptive colors take only 'light' and 'dark'".to_string(),
                });
            }
            Ok(Color::adaptive(variant("light")?, variant("dark")?))
        }
        other => Err(StylesheetError::InvalidDefinition {
            style: name.to_string(),
            message: format!("expected a color, got {}", describe(other)),
        }),
    }
}

/// A cell or line count. Negative numbers clamp to 0.
fn size(value: &Value, key: &str, name: &str) -> Result<usize, StylesheetError> {
    if let Some(n) = value.as_u64() {
        return Ok(usize::try_from(n).unwrap_or(usize::MAX));
    }
    if let Some(n) = value.as_i64() {
        return Ok(if n < 0 { 0 } else { n as usize });
    }
    Err(invalid(
        key,
        name,
        format!("expected an integer, got {}", describe(value)),
    ))
}

/// An integer, or a list of 1, 2 or 4 integers in CSS order.
fn sides(value: &Value, key: &str, name: &str) -> Result<(usize, usize, usize, usize), StylesheetError> {
    let Some(list) = value.as_sequence() else {
        let n = size(value, key, name)?;
        return Ok((n, n, n, n));
    };
    let values = list
        .iter()
        .map(|v| size(v, key, name))
        .collect::<Result<Vec<_>, _>>()?;
    match *values.as_slice() {
        [all] => Ok((all, all, all, all)),
        [vertical, horizontal] => Ok((vertical, horizontal, vertical, horizontal)),
        [top, right, bottom, left] => Ok((top, right, bottom, left)),
        _ => Err(invalid(
            key,
            name,
            format!("expected 1, 2 or 4 values, got {}", values.len()),
        )),
    }
}

fn boolean(value: &Value, key: &str, name: &str) -> Result<bool, StylesheetError> {
    value.as_bool().ok_or_else(|| {
        invalid(
            key,
            name,
            format!("expected a boolean, got {}", describe(value)),
        )
    })
}

fn string<'a>(value: &'a Value, key: &str, name: &str) -> Result<&'a str, StylesheetError> {
    value.as_str().ok_or_else(|| {
        invalid(
            key,
            name,
            format!("expected a string, got {}", describe(value)),
        )
    })
}

fn invalid(key: &str, name: &str, message: String) -> StylesheetError {
    StylesheetError::InvalidValue {
        style: name.to_string(),
        key: key.to_string(),
        message,
    }
}

/// Short human description of a YAML value for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{s}'"),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;

    fn parse(yaml: &str) -> Result<StyleDefinition, StylesheetError> {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        StyleDefinition::parse(&value, "test")
    }

    fn style(yaml: &str) -> Style {
        match parse(yaml).unwrap() {
            StyleDefinition::Style { style, .. } => style,
            other => panic!("expected a style, got {other:?}"),
        }
    }

    #[test]
    fn single_word_alias() {
        assert_eq!(parse("muted").unwrap(), StyleDefinition::Alias("muted".into()));
        assert_eq!(
            parse("my-style").unwrap(),
            StyleDefinition::Alias("my-style".into())
        );
    }

    #[test]
    fn single_word_shorthand() {
        assert_eq!(style("bold"), Style::new().bold(true));
        assert_eq!(style("cyan"), Style::new().foreground("cyan"));
        assert_eq!(style("'#ff0000'"), Style::new().foreground("#ff0000"));
    }

    #[test]
    fn multi_word_shorthand() {
        assert_eq!(
            style("yellow bold italic"),
            Style::new().foreground("yellow").bold(true).italic(true)
        );
        assert_eq!(
            style("bold white on blue"),
            Style::new().bold(true).foreground("white").background("blue")
        );
    }

    #[test]
    fn shorthand_errors() {
        assert!(matches!(
            parse("red blue"),
            Err(StylesheetError::InvalidShorthand { .. })
        ));
        assert!(matches!(
            parse("bold on"),
            Err(StylesheetError::InvalidShorthand { .. })
        ));
        assert!(matches!(
            parse("bold sparkly"),
            Err(StylesheetError::InvalidShorthand { .. })
        ));
    }

    #[test]
    fn full_mapping() {
        let parsed = style(
            r##"
            fg: cyan
            bg: 236
            bold: true
            dim: false
            width: 20
            max_height: 3
            align: center
            valign: bottom
            padding: [1, 2]
            margin_left: 4
            border: rounded
            border_top: true
            border_fg: "#444"
            tab_width: 2
            ellipsis: "..."
            "##,
        );
        let expected = Style::new()
            .foreground("cyan")
            .background(236u8)
            .bold(true)
            .faint(false)
            .width(20)
            .max_height(3)
            .align(Align::Center)
            .align_vertical(VerticalAlign::Bottom)
            .padding(1, 2, 1, 2)
            .margin_left(4)
            .border(Border::ROUNDED)
            .border_top(true)
            .border_foreground("#444")
            .tab_width(2)
            .ellipsis("...");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn adaptive_color_mapping() {
        let parsed = style("fg: { light: black, dark: '#eeeeee' }");
        assert_eq!(
            parsed.get_foreground(),
            Some(&Color::adaptive("black", "#eeeeee"))
        );
        assert!(matches!(
            parse("fg: { light: black }"),
            Err(StylesheetError::InvalidValue { .. })
        ));
    }

    #[test]
    fn negative_sizes_clamp() {
        let parsed = style("{ width: -3, padding: [-1, 2, 0, -5] }");
        assert_eq!(parsed.get_width(), Some(0));
        assert_eq!(parsed.get_padding().resolved(), (0, 2, 0, 0));
    }

    #[test]
    fn inherit_is_recorded() {
        let parsed = parse("{ inherit: base, bold: true }").unwrap();
        assert_eq!(parsed.reference(), Some("base"));
    }

    #[test]
    fn bad_values() {
        assert!(matches!(
            parse("{ fg: '#12' }"),
            Err(StylesheetError::InvalidColor {
                source: ColorError::InvalidHex(_),
                ..
            })
        ));
        assert!(matches!(
            parse("{ fg: 300 }"),
            Err(StylesheetError::InvalidColor {
                source: ColorError::IndexOutOfRange(_),
                ..
            })
        ));
        assert!(matches!(
            parse("{ bold: yes please }"),
            Err(StylesheetError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse("{ padding: [1, 2, 3] }"),
            Err(StylesheetError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse("{ border: dotted }"),
            Err(StylesheetError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse("{ sparkle: true }"),
            Err(StylesheetError::UnknownAttribute { .. })
        ));
        assert!(matches!(
            parse("42"),
            Err(StylesheetError::InvalidDefinition { .. })
        ));
    }
}
