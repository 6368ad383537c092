//! Stylesheet errors.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::ColorError;

/// A reference between styles that cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleValidationError {
    /// An alias or `inherit` names a style that doesn't exist.
    #[error("style '{from}' refers to non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },

    /// Styles refer to each other in a loop.
    #[error("cycle detected in style references: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

/// Error type for stylesheet loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StylesheetError {
    /// The document is not valid YAML, or not a mapping of styles.
    #[error("failed to parse stylesheet{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// A color value was rejected.
    #[error("invalid color '{value}' for style '{style}': {source}")]
    InvalidColor {
        style: String,
        value: String,
        #[source]
        source: ColorError,
    },

    /// A key that no style property uses.
    #[error("unknown attribute '{attribute}' in style '{style}'")]
    UnknownAttribute { style: String, attribute: String },

    /// A known key with a value of the wrong shape.
    #[error("invalid value for '{key}' in style '{style}': {message}")]
    InvalidValue {
        style: String,
        key: String,
        message: String,
    },

    /// A style entry that is neither a string nor a mapping.
    #[error("invalid definition for style '{style}': {message}")]
    InvalidDefinition { style: String, message: String },

    /// A shorthand string that could not be read.
    #[error("invalid shorthand '{value}' for style '{style}': {message}")]
    InvalidShorthand {
        style: String,
        value: String,
        message: String,
    },

    /// Dangling or cyclic references between styles.
    #[error(transparent)]
    Alias(#[from] StyleValidationError),

    /// The stylesheet file could not be read.
    #[error("failed to load stylesheet {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },
}

impl StylesheetError {
    /// Attaches the source file to a parse error that has none.
    pub(crate) fn in_file(self, file: &Path) -> Self {
        match self {
            StylesheetError::Parse {
                path: None,
                message,
            } => StylesheetError::Parse {
                path: Some(file.to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}
