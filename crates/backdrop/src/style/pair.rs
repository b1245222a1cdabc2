//! Background and text color pairing.
//!
//! Given a background and an optional text color, [`background_and_text_colors`]
//! decides which concrete background color to set and which text color
//! contrasts with it. The rules, in order:
//!
//! 1. No background: nothing is inferred, the text argument is returned as is.
//! 2. The background is normalized for the mode and the text defaults to the
//!    theme's `text` token.
//! 3. Rich backgrounds: a boolean `dark` hint picks the text branch directly.
//!    A `color` is resolved and blended with its opacity; if no text was picked
//!    yet and the background is opaque enough (no opacity, or above
//!    [`CONTRAST_OPACITY_THRESHOLD`]), the blended color's darkness picks it.
//! 4. Plain backgrounds: a classifiable color picks the text branch. Anything
//!    else (gradients, keywords) drops the background color unless it is
//!    `transparent`, and the text is used as declared.
//! 5. [`TextColor::Suppress`] clears the text color whatever happened above.

use serde::Serialize;

use super::background::{normalize_background, Background, Normalized, Opacity, RichBackground};
use super::color::{resolve_color, resolve_color_value};
use super::value::{ColorValue, TextColor};
use crate::colorspace::{blend, is_dark};
use crate::theme::Theme;

/// Opacity at or below which a background no longer drives text contrast.
pub const CONTRAST_OPACITY_THRESHOLD: f64 = 0.3;

/// Concrete background and text colors. `None` means "do not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedPair {
    pub background: Option<String>,
    pub color: Option<String>,
}

/// Computes the background color and a contrasting text color.
///
/// Never fails: unknown tokens pass through and unclassifiable colors skip
/// contrast inference.
///
/// # Example
///
/// ```rust
/// use backdrop::{background_and_text_colors, Background, TextColor, Theme};
///
/// let theme = Theme::base();
/// let pair = background_and_text_colors(
///     Some(&Background::from("brand")),
///     &TextColor::Default,
///     &theme,
/// );
/// assert_eq!(pair.background.as_deref(), Some("#7D4CDB"));
/// assert_eq!(pair.color.as_deref(), Some("#f8f8f8")); // light text on dark brand
/// ```
pub fn background_and_text_colors(
    background: Option<&Background>,
    text: &TextColor,
    theme: &Theme,
) -> ResolvedPair {
    let background = match background {
        Some(background) if !background.is_blank() => background,
        _ => {
            return ResolvedPair {
                background: None,
                color: raw_text(text, theme),
            }
        }
    };

    pair_for_normalized(&normalize_background(background, theme), text, theme)
}

/// Pairing for a background that is already normalized.
pub(crate) fn pair_for_normalized(
    background: &Normalized,
    text_arg: &TextColor,
    theme: &Theme,
) -> ResolvedPair {
    let text = match text_arg {
        TextColor::Color(value) => Some(value),
        TextColor::Default | TextColor::Suppress => theme.color("text"),
    };

    let mut pair = match background {
        Normalized::Rich(rich) => pair_rich(rich, text, theme),
        Normalized::Plain(value) => pair_plain(value, text, theme),
    };

    if *text_arg == TextColor::Suppress {
        pair.color = None;
    }
    pair
}

fn pair_rich(rich: &RichBackground, text: Option<&ColorValue>, theme: &Theme) -> ResolvedPair {
    let mut pair = ResolvedPair::default();

    if let (Some(dark), Some(text)) = (rich.dark, text) {
        pair.color = text
            .pick(dark)
            .map(|token| resolve_color(token, theme, Some(dark)));
    }

    if let Some(color) = &rich.color {
        let color = resolve_color(color, theme, rich.dark);
        let opacity = resolve_opacity(rich.opacity, theme);
        let background = blend(&color, opacity).unwrap_or(color);

        let opaque_enough = opacity.map_or(true, |o| o > CONTRAST_OPACITY_THRESHOLD);
        if pair.color.is_none() && opaque_enough {
            if let Some(text) = text {
                pair.color = match is_dark(&background) {
                    Some(shade) => text
                        .pick(shade)
                        .map(|token| resolve_color(token, theme, None)),
                    None => resolve_color_value(text, theme, None),
                };
            }
        }
        pair.background = Some(background);
    }

    pair
}

fn pair_plain(value: &str, text: Option<&ColorValue>, theme: &Theme) -> ResolvedPair {
    let background = resolve_color(value, theme, None);

    match is_dark(&background) {
        Some(shade) => ResolvedPair {
            color: text
                .and_then(|text| text.pick(shade))
                .map(|token| resolve_color(token, theme, Some(shade))),
            background: Some(background),
        },
        None => {
            tracing::trace!(background = %background, "background is not a simple color");
            ResolvedPair {
                color: text.and_then(|text| resolve_color_value(text, theme, None)),
                background: (background == "transparent").then_some(background),
            }
        }
    }
}

/// The text argument without contrast inference, for backgrounds that are absent.
fn raw_text(text: &TextColor, theme: &Theme) -> Option<String> {
    match text {
        TextColor::Color(value) => value.pick(theme.dark).map(str::to_string),
        TextColor::Default | TextColor::Suppress => None,
    }
}

fn resolve_opacity(opacity: Option<Opacity>, theme: &Theme) -> Option<f64> {
    opacity.and_then(|o| theme.global.opacity.resolve(o))
}

/// Whether a background makes its contents render in a dark context.
///
/// Containers use this to decide the mode their children inherit. A rich
/// background's boolean `dark` hint wins; otherwise the resolved color is
/// classified. A `weak` opacity keeps the surrounding context (`None`), as do
/// unclassifiable backgrounds.
///
/// ```rust
/// use backdrop::{background_is_dark, Background, Opacity, RichBackground, Theme};
///
/// let theme = Theme::base();
/// assert_eq!(background_is_dark(Some(&"brand".into()), &theme), Some(true));
/// assert_eq!(background_is_dark(Some(&"light-1".into()), &theme), Some(false));
///
/// let weak = Background::from(RichBackground::color("brand").with_opacity(Opacity::Weak));
/// assert_eq!(background_is_dark(Some(&weak), &theme), None);
/// ```
pub fn background_is_dark(background: Option<&Background>, theme: &Theme) -> Option<bool> {
    let background = background.filter(|b| !b.is_blank())?;
    match normalize_background(background, theme) {
        Normalized::Rich(rich) => {
            if rich.dark.is_some() {
                return rich.dark;
            }
            match (&rich.color, rich.opacity) {
                (Some(_), Some(Opacity::Weak)) | (None, _) => None,
                (Some(color), _) => is_dark(&resolve_color(color, theme, None)),
            }
        }
        Normalized::Plain(value) => is_dark(&resolve_color(&value, theme, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorMode;

    fn theme() -> Theme {
        Theme::from_yaml(
            r##"
global:
  colors:
    brand: "#7D4CDB"
    sand: "#FFCA58"
    text: { dark: "#eee", light: "#111" }
"##,
        )
        .unwrap()
    }

    fn pair(background: impl Into<Background>, text: &TextColor) -> ResolvedPair {
        background_and_text_colors(Some(&background.into()), text, &theme())
    }

    // =========================================================================
    // Absent backgrounds
    // =========================================================================

    #[test]
    fn test_no_background_returns_text_unchanged() {
        let pair = background_and_text_colors(None, &TextColor::from("brand"), &theme());
        assert_eq!(pair.background, None);
        assert_eq!(pair.color.as_deref(), Some("brand"));

        let pair = background_and_text_colors(None, &TextColor::Default, &theme());
        assert_eq!(pair, ResolvedPair::default());
    }

    #[test]
    fn test_blank_background_is_absent() {
        let pair = pair("", &TextColor::from("brand"));
        assert_eq!(pair.background, None);
        assert_eq!(pair.color.as_deref(), Some("brand"));
    }

    // =========================================================================
    // Plain backgrounds
    // =========================================================================

    #[test]
    fn test_dark_plain_background_picks_dark_text() {
        let pair = pair("brand", &TextColor::Default);
        assert_eq!(pair.background.as_deref(), Some("#7D4CDB"));
        assert_eq!(pair.color.as_deref(), Some("#eee"));
    }

    #[test]
    fn test_light_plain_background_picks_light_text() {
        let pair = pair("sand", &TextColor::Default);
        assert_eq!(pair.background.as_deref(), Some("#FFCA58"));
        assert_eq!(pair.color.as_deref(), Some("#111"));
    }

    #[test]
    fn test_explicit_text_resolved_with_classified_mode() {
        // text-strong is a mode pair; the dark background selects its dark branch
        let pair = background_and_text_colors(
            Some(&"brand".into()),
            &TextColor::from("text-strong"),
            &Theme::base(),
        );
        assert_eq!(pair.color.as_deref(), Some("#FFFFFF"));
    }

    #[test]
    fn test_transparent_is_kept() {
        let pair = pair("transparent", &TextColor::from("brand"));
        assert_eq!(pair.background.as_deref(), Some("transparent"));
        assert_eq!(pair.color.as_deref(), Some("#7D4CDB"));
    }

    #[test]
    fn test_gradient_drops_background_color() {
        let pair = pair("linear-gradient(#000, #fff)", &TextColor::Default);
        assert_eq!(pair.background, None);
        // default text resolved by theme mode (light)
        assert_eq!(pair.color.as_deref(), Some("#111"));
    }

    #[test]
    fn test_keyword_color_is_unclassifiable() {
        let pair = pair("crimson", &TextColor::Default);
        assert_eq!(pair.background, None);
    }

    // =========================================================================
    // Rich backgrounds
    // =========================================================================

    #[test]
    fn test_weak_opacity_suppresses_contrast() {
        let bg = RichBackground::color("brand").with_opacity(Opacity::Weak);
        let pair = pair(bg, &TextColor::Default);
        assert_eq!(pair.background.as_deref(), Some("rgba(125, 76, 219, 0.1)"));
        assert_eq!(pair.color, None);
    }

    #[test]
    fn test_strong_opacity_drives_contrast() {
        let bg = RichBackground::color("brand").with_opacity(Opacity::Strong);
        let pair = pair(bg, &TextColor::Default);
        assert_eq!(pair.background.as_deref(), Some("rgba(125, 76, 219, 0.8)"));
        assert_eq!(pair.color.as_deref(), Some("#eee"));
    }

    #[test]
    fn test_medium_opacity_is_too_translucent_to_classify() {
        // alpha 0.4 is above the contrast threshold but below the
        // classification alpha, so text falls back to the theme mode
        let bg = RichBackground::color("brand").with_opacity(Opacity::Flag(true));
        let pair = pair(bg, &TextColor::Default);
        assert_eq!(pair.background.as_deref(), Some("rgba(125, 76, 219, 0.4)"));
        assert_eq!(pair.color.as_deref(), Some("#111"));
    }

    #[test]
    fn test_opacity_at_threshold_does_not_drive_contrast() {
        let bg = RichBackground::color("brand").with_opacity(0.3);
        assert_eq!(pair(bg, &TextColor::Default).color, None);
    }

    #[test]
    fn test_rich_without_opacity_uses_opaque_color() {
        let pair = pair(RichBackground::color("brand"), &TextColor::Default);
        assert_eq!(pair.background.as_deref(), Some("#7D4CDB"));
        assert_eq!(pair.color.as_deref(), Some("#eee"));
    }

    #[test]
    fn test_dark_hint_wins_over_color_classification() {
        // sand is light, but the hint says dark
        let bg = RichBackground::color("sand").with_dark(true);
        let pair = pair(bg, &TextColor::Default);
        assert_eq!(pair.background.as_deref(), Some("#FFCA58"));
        assert_eq!(pair.color.as_deref(), Some("#eee"));
    }

    #[test]
    fn test_light_hint_without_color() {
        let bg = RichBackground::default().with_dark(false);
        let pair = pair(bg, &TextColor::Default);
        assert_eq!(pair.background, None);
        assert_eq!(pair.color.as_deref(), Some("#111"));
    }

    #[test]
    fn test_dark_hint_resolves_color_token_in_that_mode() {
        let theme = Theme::base();
        let bg = Background::from(RichBackground::color("background").with_dark(true));
        let pair = background_and_text_colors(Some(&bg), &TextColor::Default, &theme);
        assert_eq!(pair.background.as_deref(), Some("#111111"));
        assert_eq!(pair.color.as_deref(), Some("#f8f8f8"));
    }

    #[test]
    fn test_rich_unparseable_color_keeps_color() {
        let bg = RichBackground::color("crimson").with_opacity(Opacity::Strong);
        let pair = pair(bg, &TextColor::Default);
        assert_eq!(pair.background.as_deref(), Some("crimson"));
        assert_eq!(pair.color.as_deref(), Some("#111"));
    }

    // =========================================================================
    // Suppression and modes
    // =========================================================================

    #[test]
    fn test_suppress_always_clears_text() {
        for bg in [
            Background::from("brand"),
            Background::from("sand"),
            Background::from("transparent"),
            Background::from(RichBackground::color("brand").with_dark(true)),
        ] {
            let pair = background_and_text_colors(Some(&bg), &TextColor::Suppress, &theme());
            assert_eq!(pair.color, None, "background {:?}", bg);
        }
    }

    #[test]
    fn test_variant_background_follows_mode() {
        let bg = Background::variant("dark-1", "light-1");
        let light = Theme::base();
        let dark = Theme::base().with_mode(ColorMode::Dark);

        let pair = background_and_text_colors(Some(&bg), &TextColor::Default, &light);
        assert_eq!(pair.background.as_deref(), Some("#F8F8F8"));
        assert_eq!(pair.color.as_deref(), Some("#444444"));

        let pair = background_and_text_colors(Some(&bg), &TextColor::Default, &dark);
        assert_eq!(pair.background.as_deref(), Some("#333333"));
        assert_eq!(pair.color.as_deref(), Some("#f8f8f8"));
    }

    // =========================================================================
    // background_is_dark
    // =========================================================================

    #[test]
    fn test_background_is_dark() {
        let theme = theme();
        assert_eq!(background_is_dark(None, &theme), None);
        assert_eq!(background_is_dark(Some(&"brand".into()), &theme), Some(true));
        assert_eq!(background_is_dark(Some(&"sand".into()), &theme), Some(false));
        assert_eq!(
            background_is_dark(Some(&"linear-gradient(#000, #fff)".into()), &theme),
            None
        );
    }

    #[test]
    fn test_background_is_dark_rich() {
        let theme = theme();
        let hinted = Background::from(RichBackground::default().with_dark(true));
        assert_eq!(background_is_dark(Some(&hinted), &theme), Some(true));

        let strong = Background::from(RichBackground::color("brand").with_opacity(Opacity::Strong));
        assert_eq!(background_is_dark(Some(&strong), &theme), Some(true));

        let weak = Background::from(RichBackground::color("brand").with_opacity(Opacity::Weak));
        assert_eq!(background_is_dark(Some(&weak), &theme), None);

        let image = Background::from(RichBackground::image("url(bg.png)"));
        assert_eq!(background_is_dark(Some(&image), &theme), None);
    }
}
