//! Named styles loaded from YAML.
//!
//! A stylesheet maps style names to definitions. Definitions can alias
//! another style, or `inherit` one and override some of its fields:
//!
//! ```rust
//! use standout_layout::{Align, Stylesheet};
//!
//! let sheet = Stylesheet::from_yaml(r##"
//! base:
//!   fg: "#c0c0c0"
//!   padding: [0, 1]
//! title:
//!   inherit: base
//!   bold: true
//!   align: center
//!   width: 20
//! heading: title
//! warning: "bold yellow on black"
//! "##).unwrap();
//!
//! let title = sheet.get("heading").unwrap();
//! assert_eq!(title.get_align(), Some(Align::Center));
//! assert!(title.get_foreground().is_some());
//! // padding and margin are not inherited
//! assert!(title.get_padding().is_unset());
//! ```
//!
//! Every reference is resolved when the stylesheet is loaded, so a loaded
//! stylesheet never fails a lookup halfway. Dangling references and cycles
//! are reported as [`StylesheetError::Alias`].

mod definition;
mod error;

pub use definition::{parse_shorthand, StyleDefinition};
pub use error::{StyleValidationError, StylesheetError};

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::style::Style;

/// A set of resolved, named styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    styles: BTreeMap<String, Style>,
}

impl Stylesheet {
    /// An empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML document. An empty document is an empty stylesheet.
    pub fn from_yaml(yaml: &str) -> Result<Self, StylesheetError> {
        let root: Value = serde_yaml::from_str(yaml).map_err(|e| StylesheetError::Parse {
            path: None,
            message: e.to_string(),
        })?;

        let map = match root {
            Value::Null => return Ok(Self::new()),
            Value::Mapping(map) => map,
            _ => {
                return Err(StylesheetError::Parse {
                    path: None,
                    message: "expected a mapping of style names to definitions".to_string(),
                })
            }
        };

        let mut definitions = HashMap::with_capacity(map.len());
        for (key, value) in &map {
            let name = key.as_str().ok_or_else(|| StylesheetError::Parse {
                path: None,
                message: format!("style names must be strings, got {key:?}"),
            })?;
            definitions.insert(name.to_string(), StyleDefinition::parse(value, name)?);
        }

        let sheet = Self::resolve(&definitions)?;
        debug!(styles = sheet.len(), "loaded stylesheet");
        Ok(sheet)
    }

    /// Reads and parses a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| StylesheetError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "reading stylesheet");
        Self::from_yaml(&yaml).map_err(|e| e.in_file(path))
    }

    /// Adds or replaces a style.
    pub fn add(mut self, name: impl Into<String>, style: Style) -> Self {
        self.styles.insert(name.into(), style);
        self
    }

    /// The style called `name`.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Resolves aliases and inheritance for every definition.
    fn resolve(definitions: &HashMap<String, StyleDefinition>) -> Result<Self, StylesheetError> {
        let mut names: Vec<&String> = definitions.keys().collect();
        names.sort();

        let mut resolved = BTreeMap::new();
        for name in names {
            let mut chain = Vec::new();
            resolve_one(name, definitions, &mut resolved, &mut chain)?;
        }
        Ok(Stylesheet { styles: resolved })
    }
}

/// Resolves `name`, caching every style resolved on the way.
///
/// `chain` holds the names currently being resolved, outermost first.
fn resolve_one(
    name: &str,
    definitions: &HashMap<String, StyleDefinition>,
    resolved: &mut BTreeMap<String, Style>,
    chain: &mut Vec<String>,
) -> Result<Style, StyleValidationError> {
    if let Some(style) = resolved.get(name) {
        return Ok(style.clone());
    }
    if chain.iter().any(|seen| seen == name) {
        let mut path = chain.clone();
        path.push(name.to_string());
        return Err(StyleValidationError::CycleDetected { path });
    }
    let Some(definition) = definitions.get(name) else {
        let from = chain.last().cloned().unwrap_or_default();
        return Err(StyleValidationError::UnresolvedAlias {
            from,
            to: name.to_string(),
        });
    };

    chain.push(name.to_string());
    let parent = match definition.reference() {
        Some(target) => Some(resolve_one(target, definitions, resolved, chain)?),
        None => None,
    };
    chain.pop();

    let style = match (definition, parent) {
        (StyleDefinition::Alias(_), Some(parent)) => parent,
        (StyleDefinition::Style { style, .. }, Some(parent)) => style.clone().inherit(&parent),
        (StyleDefinition::Style { style, .. }, None) => style.clone(),
        // Aliases always have a reference.
        (StyleDefinition::Alias(_), None) => Style::new(),
    };
    resolved.insert(name.to_string(), style.clone());
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Align;
    use crate::style::{Attribute, Border, Color};

    #[test]
    fn empty_document() {
        assert!(Stylesheet::from_yaml("").unwrap().is_empty());
        assert!(Stylesheet::from_yaml("# nothing here\n").unwrap().is_empty());
    }

    #[test]
    fn not_a_mapping() {
        assert!(matches!(
            Stylesheet::from_yaml("- a\n- b"),
            Err(StylesheetError::Parse { .. })
        ));
        assert!(matches!(
            Stylesheet::from_yaml("a: [unclosed"),
            Err(StylesheetError::Parse { .. })
        ));
    }

    #[test]
    fn alias_chain() {
        let sheet = Stylesheet::from_yaml(
            r#"
            muted: { faint: true }
            disabled: muted
            inactive: disabled
            "#,
        )
        .unwrap();
        let style = sheet.get("inactive").unwrap();
        assert_eq!(style.get_attribute(Attribute::Faint), Some(true));
        assert_eq!(sheet.len(), 3);
        assert_eq!(
            sheet.names().collect::<Vec<_>>(),
            vec!["disabled", "inactive", "muted"]
        );
    }

    #[test]
    fn inherit_overrides_and_skips_box_spacing() {
        let sheet = Stylesheet::from_yaml(
            r#"
            card:
              border: rounded
              border_fg: gray
              padding: 1
              margin: 1
              width: 30
            alert:
              inherit: card
              border_fg: red
              align: center
            "#,
        )
        .unwrap();
        let alert = sheet.get("alert").unwrap();
        assert_eq!(alert.get_border(), Some(Border::ROUNDED));
        assert_eq!(alert.get_border_foreground(), Some(&Color::from("red")));
        assert_eq!(alert.get_width(), Some(30));
        assert_eq!(alert.get_align(), Some(Align::Center));
        assert!(alert.get_padding().is_unset());
        assert!(alert.get_margin().is_unset());
    }

    #[test]
    fn dangling_alias() {
        let err = Stylesheet::from_yaml("title: missing_style").unwrap_err();
        assert_eq!(
            err,
            StylesheetError::Alias(StyleValidationError::UnresolvedAlias {
                from: "title".into(),
                to: "missing_style".into(),
            })
        );
    }

    #[test]
    fn dangling_inherit() {
        let err = Stylesheet::from_yaml("title: { inherit: nope, bold: true }").unwrap_err();
        assert!(matches!(
            err,
            StylesheetError::Alias(StyleValidationError::UnresolvedAlias { .. })
        ));
    }

    #[test]
    fn cycle() {
        let err = Stylesheet::from_yaml(
            r#"
            a: b
            b: { inherit: c }
            c: a
            "#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            StylesheetError::Alias(StyleValidationError::CycleDetected {
                path: vec!["a".into(), "b".into(), "c".into(), "a".into()],
            })
        );
    }

    #[test]
    fn add_builds_programmatically() {
        let sheet = Stylesheet::new().add("x", Style::new().bold(true));
        assert_eq!(sheet.get("x"), Some(&Style::new().bold(true)));
        assert_eq!(sheet.get("y"), None);
    }
}
