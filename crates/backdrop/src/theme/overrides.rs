//! Deserializable theme documents.
//!
//! A theme document mirrors the component library's theme object: a `dark`
//! flag and a `global` section. Every field is optional; documents are applied
//! on top of an existing theme with [`Theme::merge`](super::Theme::merge).
//! Keys the pipeline does not read (fonts, component sections, ...) are
//! accepted and ignored so full theme files can be loaded as-is.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ThemeError};
use crate::style::{Background, ColorValue, ItemBackground};

/// File extensions recognized by [`ThemeOverrides::from_file`].
pub const THEME_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// A partial theme, as read from YAML or JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeOverrides {
    #[serde(default)]
    pub dark: Option<bool>,
    #[serde(default)]
    pub global: GlobalOverrides,
    #[serde(default)]
    pub list: ListOverrides,
}

/// The `global` section of a theme document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalOverrides {
    #[serde(default)]
    pub colors: HashMap<String, ColorValue>,
    #[serde(default)]
    pub opacity: OpacityOverrides,
    #[serde(default)]
    pub active: StateOverrides,
    #[serde(default)]
    pub selected: StateOverrides,
    #[serde(default)]
    pub hover: StateOverrides,
    #[serde(default)]
    pub elevation: ElevationOverrides,
}

/// The `list` component section of a theme document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOverrides {
    #[serde(default)]
    pub item: ListItemOverrides,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListItemOverrides {
    #[serde(default)]
    pub background: Option<ItemBackground>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpacityOverrides {
    #[serde(default)]
    pub weak: Option<f64>,
    #[serde(default)]
    pub medium: Option<f64>,
    #[serde(default)]
    pub strong: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateOverrides {
    #[serde(default)]
    pub background: Option<Background>,
    #[serde(default)]
    pub color: Option<ColorValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElevationOverrides {
    #[serde(default)]
    pub dark: HashMap<String, String>,
    #[serde(default)]
    pub light: HashMap<String, String>,
}

impl ThemeOverrides {
    /// Parses a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ThemeError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Reads and parses a theme file, choosing the format by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .filter(|e| THEME_EXTENSIONS.contains(&e.as_str()))
            .ok_or_else(|| ThemeError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = if extension == "json" {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };

        parsed.map_err(|err| match err {
            ThemeError::Parse { message, .. } => ThemeError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }
}
