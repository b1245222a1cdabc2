//! Interaction-state presets: active, selected, hover and elevation.
//!
//! These read the theme on every call, so a theme swap or mode change is
//! picked up by the next render without any invalidation.

use super::background::Background;
use super::color::resolve_color;
use super::emit::background_style;
use super::fragment::StyleFragment;
use super::value::TextColor;
use crate::theme::{StateColors, Theme};

/// Style for an element in its active (pressed) state.
pub fn active_style(theme: &Theme) -> Option<StyleFragment> {
    state_style(&theme.global.active, theme)
}

/// Style for a selected element.
///
/// ```rust
/// use backdrop::{selected_style, Theme};
///
/// let style = selected_style(&Theme::base()).unwrap();
/// assert_eq!(style.get("background-color"), Some("#7D4CDB"));
/// assert_eq!(style.get("color"), Some("#FFFFFF"));
/// ```
pub fn selected_style(theme: &Theme) -> Option<StyleFragment> {
    state_style(&theme.global.selected, theme)
}

fn state_style(state: &StateColors, theme: &Theme) -> Option<StyleFragment> {
    let background = state.background.as_ref().map(|background| match background {
        Background::Plain(token) => Background::Plain(resolve_color(token, theme, None)),
        other => other.clone(),
    });
    background_style(background.as_ref(), theme, &TextColor::from(state.color.clone()))
}

/// How an element signals hover.
#[derive(Debug, Clone, Default)]
pub enum HoverIndicator {
    /// The theme's hover background (`true` or `"background"`).
    #[default]
    Background,
    /// A specific background.
    Custom(Background),
    /// A background and/or an elevation shadow.
    Elevated {
        background: Option<Background>,
        elevation: Option<String>,
    },
    /// No hover styling (`false`).
    Disabled,
}

impl From<bool> for HoverIndicator {
    fn from(enabled: bool) -> Self {
        if enabled {
            HoverIndicator::Background
        } else {
            HoverIndicator::Disabled
        }
    }
}

impl From<&str> for HoverIndicator {
    fn from(value: &str) -> Self {
        match value {
            "background" => HoverIndicator::Background,
            other => HoverIndicator::Custom(other.into()),
        }
    }
}

impl From<Background> for HoverIndicator {
    fn from(background: Background) -> Self {
        HoverIndicator::Custom(background)
    }
}

/// Resolves a hover indicator to a style fragment.
///
/// The text color always comes from `theme.global.hover.color`. Elevation
/// levels missing from the theme's shadow table add nothing.
///
/// ```rust
/// use backdrop::{hover_indicator_style, HoverIndicator, Theme};
///
/// let theme = Theme::base();
/// let style = hover_indicator_style(
///     &HoverIndicator::Elevated { background: None, elevation: Some("small".into()) },
///     &theme,
/// );
/// assert_eq!(style.get("box-shadow"), Some("0px 2px 4px rgba(100, 100, 100, 0.50)"));
/// ```
pub fn hover_indicator_style(indicator: &HoverIndicator, theme: &Theme) -> StyleFragment {
    let hover = &theme.global.hover;
    let (background, elevation) = match indicator {
        HoverIndicator::Background => (hover.background.as_ref(), None),
        HoverIndicator::Custom(background) => (Some(background), None),
        HoverIndicator::Elevated {
            background,
            elevation,
        } => (background.as_ref(), elevation.as_deref()),
        HoverIndicator::Disabled => (None, None),
    };

    let text = TextColor::from(hover.color.clone());
    let mut fragment = background_style(background, theme, &text).unwrap_or_default();
    if let Some(shadow) = elevation.and_then(|level| elevation_style(level, theme)) {
        fragment.extend(shadow);
    }
    fragment
}

/// The `box-shadow` for an elevation level in the theme's current mode.
pub fn elevation_style(level: &str, theme: &Theme) -> Option<StyleFragment> {
    let mode = theme.mode();
    match theme.global.elevation.shadow(level, mode) {
        Some(shadow) => Some(StyleFragment::new().with("box-shadow", shadow)),
        None => {
            tracing::trace!(level, mode = mode.key(), "unknown elevation level");
            None
        }
    }
}
