//! Background specifications and their normalization.
//!
//! Components describe backgrounds in several shapes: a bare color or
//! gradient, a `{ dark, light }` pair, a rich descriptor with opacity and an
//! image, or a value computed from the theme. [`Background`] is the tagged
//! union of those shapes and [`normalize_background`] is the single place that
//! collapses one into what the current mode should render.
//!
//! # YAML/JSON shape
//!
//! ```yaml
//! # Plain
//! background: brand
//! # Mode variant (branches may be any background)
//! background: { dark: dark-1, light: { color: light-2, opacity: strong } }
//! # Rich
//! background:
//!   color: brand
//!   dark: true          # classification override, not a color
//!   opacity: medium     # true | weak | medium | strong | number
//!   image: "url(//example.com/bg.png)"
//! ```

use serde::Deserialize;

use super::value::Themed;
use crate::theme::Theme;

/// Translucency applied to a rich background.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawOpacity")]
pub enum Opacity {
    /// `true` means the theme's medium opacity; `false` means none.
    Flag(bool),
    Weak,
    Medium,
    Strong,
    /// An explicit alpha, passed through unchanged.
    Value(f64),
}

impl Opacity {
    /// Whether the opacity counts as set (`false` and `0` do not).
    pub fn is_set(&self) -> bool {
        match self {
            Opacity::Flag(flag) => *flag,
            Opacity::Value(value) => *value != 0.0,
            _ => true,
        }
    }
}

impl From<f64> for Opacity {
    fn from(value: f64) -> Self {
        Opacity::Value(value)
    }
}

impl From<bool> for Opacity {
    fn from(value: bool) -> Self {
        Opacity::Flag(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOpacity {
    Flag(bool),
    Value(f64),
    Level(String),
}

impl TryFrom<RawOpacity> for Opacity {
    type Error = String;

    fn try_from(raw: RawOpacity) -> Result<Self, Self::Error> {
        match raw {
            RawOpacity::Flag(flag) => Ok(Opacity::Flag(flag)),
            RawOpacity::Value(value) => Ok(Opacity::Value(value)),
            RawOpacity::Level(level) => match level.as_str() {
                "weak" => Ok(Opacity::Weak),
                "medium" => Ok(Opacity::Medium),
                "strong" => Ok(Opacity::Strong),
                other => Err(format!(
                    "unknown opacity level '{}' (expected weak, medium or strong)",
                    other
                )),
            },
        }
    }
}

/// A full background descriptor.
///
/// `dark` is a classification hint: it tells the pairing resolver which text
/// branch to use without changing the rendered color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichBackground {
    pub color: Option<String>,
    pub dark: Option<bool>,
    pub opacity: Option<Opacity>,
    pub image: Option<String>,
    pub repeat: Option<String>,
    pub position: Option<String>,
    pub size: Option<String>,
}

impl RichBackground {
    /// A rich background with just a color.
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    /// A rich background with just an image.
    pub fn image(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: impl Into<Opacity>) -> Self {
        self.opacity = Some(opacity.into());
        self
    }

    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = Some(dark);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_repeat(mut self, repeat: impl Into<String>) -> Self {
        self.repeat = Some(repeat.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// A background specification as supplied by a component.
#[derive(Debug, Clone)]
pub enum Background {
    /// A token, concrete color, gradient or `url(...)`.
    Plain(String),
    /// Mode-dependent alternatives. Only selectable branches live here;
    /// boolean `dark` hints belong to [`RichBackground::dark`].
    Variant {
        dark: Option<Box<Background>>,
        light: Option<Box<Background>>,
    },
    Rich(RichBackground),
    /// Computed from the theme during normalization.
    Themed(Themed<Background>),
}

impl Background {
    /// Creates a `{ dark, light }` variant with both branches.
    pub fn variant(dark: impl Into<Background>, light: impl Into<Background>) -> Self {
        Background::Variant {
            dark: Some(Box::new(dark.into())),
            light: Some(Box::new(light.into())),
        }
    }

    /// Creates a background computed from the theme.
    pub fn themed(f: impl Fn(&Theme) -> Background + Send + Sync + 'static) -> Self {
        Background::Themed(Themed::new(f))
    }

    /// `true` for an empty plain string, which components treat as "no background".
    pub fn is_blank(&self) -> bool {
        matches!(self, Background::Plain(value) if value.is_empty())
    }
}

impl From<&str> for Background {
    fn from(value: &str) -> Self {
        Background::Plain(value.to_string())
    }
}

impl From<String> for Background {
    fn from(value: String) -> Self {
        Background::Plain(value)
    }
}

impl From<RichBackground> for Background {
    fn from(value: RichBackground) -> Self {
        Background::Rich(value)
    }
}

impl<'de> Deserialize<'de> for Background {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawBackground::deserialize(deserializer).map(Background::from)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBackground {
    Plain(String),
    Object(Box<RawObject>),
}

#[derive(Deserialize)]
struct RawObject {
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    dark: Option<RawSide>,
    #[serde(default)]
    light: Option<RawSide>,
    #[serde(default)]
    opacity: Option<Opacity>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    repeat: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    size: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSide {
    Flag(bool),
    Value(RawBackground),
}

impl RawSide {
    fn into_branch(self) -> Option<Box<Background>> {
        match self {
            RawSide::Flag(_) => None,
            RawSide::Value(raw) => Some(Box::new(Background::from(raw))),
        }
    }
}

impl From<RawBackground> for Background {
    fn from(raw: RawBackground) -> Self {
        let object = match raw {
            RawBackground::Plain(value) => return Background::Plain(value),
            RawBackground::Object(object) => *object,
        };

        let selectable = |side: &Option<RawSide>| matches!(side, Some(RawSide::Value(_)));
        if selectable(&object.dark) || selectable(&object.light) {
            return Background::Variant {
                dark: object.dark.and_then(RawSide::into_branch),
                light: object.light.and_then(RawSide::into_branch),
            };
        }

        let dark = match object.dark {
            Some(RawSide::Flag(flag)) => Some(flag),
            _ => None,
        };
        Background::Rich(RichBackground {
            color: object.color,
            dark,
            opacity: object.opacity,
            image: object.image,
            repeat: object.repeat,
            position: object.position,
            size: object.size,
        })
    }
}

/// A background collapsed for the current mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Plain(String),
    Rich(RichBackground),
}

/// Collapses a background specification for `theme`'s mode.
///
/// - `Variant` selects its `dark` branch in dark mode and `light` otherwise.
///   A missing branch yields an empty rich background, which emits nothing.
/// - `Themed` is evaluated against the theme and normalized again.
/// - `Plain` and `Rich` pass through; a rich background's boolean `dark`
///   never selects anything.
///
/// # Example
///
/// ```rust
/// use backdrop::{normalize_background, Background, ColorMode, Normalized, Theme};
///
/// let bg = Background::variant("dark-1", "light-2");
/// let light = Theme::base();
/// let dark = Theme::base().with_mode(ColorMode::Dark);
///
/// assert_eq!(normalize_background(&bg, &light), Normalized::Plain("light-2".into()));
/// assert_eq!(normalize_background(&bg, &dark), Normalized::Plain("dark-1".into()));
/// ```
pub fn normalize_background(background: &Background, theme: &Theme) -> Normalized {
    match background {
        Background::Plain(value) => Normalized::Plain(value.clone()),
        Background::Rich(rich) => Normalized::Rich(rich.clone()),
        Background::Variant { dark, light } => {
            let branch = if theme.dark { dark } else { light };
            match branch {
                Some(selected) => normalize_background(selected, theme),
                None => Normalized::Rich(RichBackground::default()),
            }
        }
        Background::Themed(themed) => {
            tracing::trace!("evaluating themed background");
            normalize_background(&themed.eval(theme), theme)
        }
    }
}
