use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::adaptive::{detect_color_mode, ColorMode};
use super::overrides::ThemeOverrides;
use crate::error::{Result, ThemeError};
use crate::style::{Background, ColorValue, ItemBackground, Opacity};

/// Numeric values for the named opacity levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpacityScale {
    pub weak: f64,
    pub medium: f64,
    pub strong: f64,
}

impl OpacityScale {
    /// Resolves an [`Opacity`] to an alpha value.
    ///
    /// `Flag(true)` is the medium level, `Flag(false)` means no opacity, and
    /// explicit numbers pass through unchanged.
    ///
    /// ```rust
    /// use backdrop::{Opacity, Theme};
    ///
    /// let scale = Theme::base().global.opacity;
    /// assert_eq!(scale.resolve(Opacity::Flag(true)), Some(0.4));
    /// assert_eq!(scale.resolve(Opacity::Weak), Some(0.1));
    /// assert_eq!(scale.resolve(Opacity::Value(0.65)), Some(0.65));
    /// assert_eq!(scale.resolve(Opacity::Flag(false)), None);
    /// ```
    pub fn resolve(&self, opacity: Opacity) -> Option<f64> {
        match opacity {
            Opacity::Flag(true) | Opacity::Medium => Some(self.medium),
            Opacity::Flag(false) => None,
            Opacity::Weak => Some(self.weak),
            Opacity::Strong => Some(self.strong),
            Opacity::Value(value) => Some(value),
        }
    }
}

impl Default for OpacityScale {
    fn default() -> Self {
        Self {
            weak: 0.1,
            medium: 0.4,
            strong: 0.8,
        }
    }
}

/// Background and text color for an interaction state (active, selected, hover).
#[derive(Debug, Clone)]
pub struct StateColors {
    pub background: Option<Background>,
    pub color: Option<ColorValue>,
}

impl StateColors {
    pub fn new(background: impl Into<Background>, color: impl Into<ColorValue>) -> Self {
        Self {
            background: Some(background.into()),
            color: Some(color.into()),
        }
    }
}

/// Box-shadow tables keyed by elevation level, one per mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Elevation {
    pub dark: HashMap<String, String>,
    pub light: HashMap<String, String>,
}

impl Elevation {
    /// Looks up the shadow for `level` in the table for the given mode.
    pub fn shadow(&self, level: &str, mode: ColorMode) -> Option<&str> {
        let table = match mode {
            ColorMode::Dark => &self.dark,
            ColorMode::Light => &self.light,
        };
        table.get(level).map(String::as_str)
    }
}

/// Theme-global settings consumed by the pipeline.
#[derive(Debug, Clone)]
pub struct Global {
    /// Color tokens. Values may reference other tokens.
    pub colors: HashMap<String, ColorValue>,
    pub opacity: OpacityScale,
    pub active: StateColors,
    pub selected: StateColors,
    pub hover: StateColors,
    pub elevation: Elevation,
}

/// Component defaults for lists.
#[derive(Debug, Clone, Default)]
pub struct ListTheme {
    pub item: ListItem,
}

#[derive(Debug, Clone, Default)]
pub struct ListItem {
    /// Row background for lists that set none of their own.
    pub background: Option<ItemBackground>,
}

/// A read-only snapshot of everything the resolution pipeline reads.
///
/// Every resolver takes the theme explicitly; there is no ambient theme.
/// Themes are cheap to clone and are `Send + Sync`, so the same snapshot can be
/// shared across rendering threads.
///
/// # Example: From YAML
///
/// Documents are overlaid on [`Theme::base`], so they only need the values
/// they change:
///
/// ```rust
/// use backdrop::{resolve_color, Theme};
///
/// let theme = Theme::from_yaml(r##"
/// dark: true
/// global:
///   colors:
///     brand: "#01A982"
///     text: { dark: "#eee", light: "#111" }
///   opacity:
///     medium: 0.5
/// "##).unwrap();
///
/// assert!(theme.dark);
/// assert_eq!(resolve_color("brand", &theme, None), "#01A982");
/// assert_eq!(resolve_color("text", &theme, None), "#eee");
/// assert_eq!(theme.global.opacity.strong, 0.8);
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name (optional, typically derived from filename).
    name: Option<String>,
    /// Source file path (for refresh support).
    source_path: Option<PathBuf>,
    /// Current mode: `true` renders against dark surfaces.
    pub dark: bool,
    pub global: Global,
    pub list: ListTheme,
}

impl Theme {
    /// Creates a theme from explicit global settings, in light mode.
    pub fn new(global: Global) -> Self {
        Self {
            name: None,
            source_path: None,
            dark: false,
            global,
            list: ListTheme::default(),
        }
    }

    /// The bundled base theme in light mode.
    pub fn base() -> Self {
        Self::new(super::base::global()).with_name("base")
    }

    /// The base theme in the mode reported by [`detect_color_mode`].
    pub fn detected() -> Self {
        Self::base().with_mode(detect_color_mode())
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns a copy of this theme in the given mode.
    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.dark = mode.is_dark();
        self
    }

    pub fn mode(&self) -> ColorMode {
        ColorMode::from_dark(self.dark)
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the source file path, if this theme was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Looks up a color token.
    pub fn color(&self, token: &str) -> Option<&ColorValue> {
        self.global.colors.get(token)
    }

    /// Parses a YAML theme document and overlays it on the base theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] if the document is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(Self::base().merge(ThemeOverrides::from_yaml(yaml)?))
    }

    /// Parses a JSON theme document and overlays it on the base theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::base().merge(ThemeOverrides::from_json(json)?))
    }

    /// Loads a theme file (`.yaml`, `.yml` or `.json`) over the base theme.
    ///
    /// The theme name is derived from the file stem and the path is kept for
    /// [`refresh`](Theme::refresh).
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the file cannot be read, has an unsupported
    /// extension or fails to parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let overrides = ThemeOverrides::from_file(path)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());

        tracing::debug!(
            path = %path.display(),
            colors = overrides.global.colors.len(),
            "loaded theme file"
        );

        Ok(Self {
            name,
            source_path: Some(path.to_path_buf()),
            ..Self::base().merge(overrides)
        })
    }

    /// Reloads the theme from its source file.
    ///
    /// The file is re-applied over the base theme, so values removed from the
    /// file revert to their base defaults. The current mode is kept unless the
    /// file sets `dark`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NoSource`] if the theme was not loaded with
    /// [`from_file`](Theme::from_file), or the load error otherwise.
    pub fn refresh(&mut self) -> Result<()> {
        let path = self.source_path.clone().ok_or(ThemeError::NoSource)?;
        let overrides = ThemeOverrides::from_file(&path)?;

        let dark = overrides.dark.unwrap_or(self.dark);
        let refreshed = Self::base().merge(overrides);
        self.global = refreshed.global;
        self.list = refreshed.list;
        self.dark = dark;

        tracing::debug!(path = %path.display(), "refreshed theme");
        Ok(())
    }

    /// Applies overrides on top of this theme.
    ///
    /// Color and elevation entries are merged key by key; opacity levels,
    /// state colors and the list item background replace only the fields the
    /// overrides set.
    pub fn merge(mut self, overrides: ThemeOverrides) -> Self {
        if let Some(dark) = overrides.dark {
            self.dark = dark;
        }

        if let Some(background) = overrides.list.item.background {
            self.list.item.background = Some(background);
        }

        let global = overrides.global;
        self.global.colors.extend(global.colors);

        if let Some(weak) = global.opacity.weak {
            self.global.opacity.weak = weak;
        }
        if let Some(medium) = global.opacity.medium {
            self.global.opacity.medium = medium;
        }
        if let Some(strong) = global.opacity.strong {
            self.global.opacity.strong = strong;
        }

        for (state, patch) in [
            (&mut self.global.active, global.active),
            (&mut self.global.selected, global.selected),
            (&mut self.global.hover, global.hover),
        ] {
            if let Some(background) = patch.background {
                state.background = Some(background);
            }
            if let Some(color) = patch.color {
                state.color = Some(color);
            }
        }

        self.global.elevation.dark.extend(global.elevation.dark);
        self.global.elevation.light.extend(global.elevation.light);
        self
    }

    /// Checks that color tokens do not reference each other in a loop.
    ///
    /// Resolution of a cyclic theme still terminates; this is for reporting
    /// configuration mistakes early.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ColorCycle`] with the offending chain.
    pub fn validate(&self) -> Result<()> {
        let mut names: Vec<&String> = self.global.colors.keys().collect();
        names.sort();
        for name in names {
            let mut path = vec![name.clone()];
            self.check_color_chain(name, &mut path)?;
        }
        Ok(())
    }

    fn check_color_chain(&self, name: &str, path: &mut Vec<String>) -> Result<()> {
        let Some(value) = self.global.colors.get(name) else {
            return Ok(());
        };
        for target in value.branches() {
            // A token may name itself as a literal CSS value (`white: white`).
            if target == name || !self.global.colors.contains_key(target) {
                continue;
            }
            if path.iter().any(|seen| seen == target) {
                let mut cycle = path.clone();
                cycle.push(target.to_string());
                return Err(ThemeError::ColorCycle { path: cycle });
            }
            path.push(target.to_string());
            self.check_color_chain(target, path)?;
            path.pop();
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::base()
    }
}
