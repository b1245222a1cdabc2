//! Color values, text-color arguments and theme-computed values.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::theme::Theme;

/// A color as it appears in a theme table or a text-color argument.
///
/// Either a single token/literal, or a pair of mode-specific alternatives.
/// The strings inside may themselves be theme tokens; they are resolved by
/// [`resolve_color`](crate::resolve_color).
///
/// # Example
///
/// ```rust
/// use backdrop::ColorValue;
///
/// let plain: ColorValue = "brand".into();
/// let text = ColorValue::variant("#f8f8f8", "#444444");
///
/// assert_eq!(plain.pick(true), Some("brand"));
/// assert_eq!(text.pick(true), Some("#f8f8f8"));
/// assert_eq!(text.pick(false), Some("#444444"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// A token or a concrete CSS color.
    Literal(String),
    /// Mode-specific alternatives.
    Variant {
        #[serde(default)]
        dark: Option<String>,
        #[serde(default)]
        light: Option<String>,
    },
}

impl ColorValue {
    /// Creates a `{ dark, light }` pair.
    pub fn variant(dark: impl Into<String>, light: impl Into<String>) -> Self {
        ColorValue::Variant {
            dark: Some(dark.into()),
            light: Some(light.into()),
        }
    }

    /// Returns the branch to use against a dark (`true`) or light surface.
    ///
    /// Literals apply to both modes. A variant missing the requested branch
    /// falls back to the other one; `None` only when both are absent.
    pub fn pick(&self, dark: bool) -> Option<&str> {
        match self {
            ColorValue::Literal(value) => Some(value),
            ColorValue::Variant { dark: d, light: l } => {
                let (primary, secondary) = if dark { (d, l) } else { (l, d) };
                primary.as_deref().or(secondary.as_deref())
            }
        }
    }

    /// All strings referenced by this value, in `dark`, `light` order.
    pub fn branches(&self) -> impl Iterator<Item = &str> {
        let (first, second) = match self {
            ColorValue::Literal(value) => (Some(value.as_str()), None),
            ColorValue::Variant { dark, light } => (dark.as_deref(), light.as_deref()),
        };
        first.into_iter().chain(second)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        ColorValue::Literal(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        ColorValue::Literal(value)
    }
}

/// The text-color argument of the pairing resolver and style emitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TextColor {
    /// No argument: contrast inference picks from `theme.global.colors.text`.
    #[default]
    Default,
    /// Never emit a text color. Used for transient states such as hover,
    /// where the element keeps whatever color it already has.
    Suppress,
    /// An explicit text color. Mode branches are still chosen by contrast.
    Color(ColorValue),
}

impl From<ColorValue> for TextColor {
    fn from(value: ColorValue) -> Self {
        TextColor::Color(value)
    }
}

impl From<Option<ColorValue>> for TextColor {
    fn from(value: Option<ColorValue>) -> Self {
        value.map_or(TextColor::Default, TextColor::Color)
    }
}

impl From<&str> for TextColor {
    fn from(value: &str) -> Self {
        TextColor::Color(value.into())
    }
}

/// A value computed from the theme at resolution time.
///
/// Wraps a closure so components can describe backgrounds such as "the
/// theme's drop background" without capturing a particular theme.
pub struct Themed<T>(Arc<dyn Fn(&Theme) -> T + Send + Sync>);

impl<T> Themed<T> {
    pub fn new(f: impl Fn(&Theme) -> T + Send + Sync + 'static) -> Self {
        Themed(Arc::new(f))
    }

    /// Evaluates the value against `theme`.
    pub fn eval(&self, theme: &Theme) -> T {
        (self.0)(theme)
    }
}

impl<T> Clone for Themed<T> {
    fn clone(&self) -> Self {
        Themed(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Themed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Themed(<fn>)")
    }
}
