//! The style emitter.
//!
//! [`background_style`] turns a background specification into the CSS a
//! surface needs: a flat color with contrasting text, an image layer (isolated
//! in a `&:before` overlay when translucent), or a verbatim `background`
//! shorthand for values the pipeline does not interpret, such as gradients.

use super::background::{normalize_background, Background, Normalized, Opacity, RichBackground};
use super::color::resolve_color;
use super::fragment::{Declaration, StyleFragment};
use super::pair::{pair_for_normalized, ResolvedPair};
use super::value::TextColor;
use crate::theme::Theme;

const DEFAULT_REPEAT: &str = "no-repeat";
const DEFAULT_POSITION: &str = "center center";
const DEFAULT_SIZE: &str = "cover";

/// Emits the style fragment for a background.
///
/// Returns `None` when there is no background, and when the background
/// resolves to nothing renderable.
///
/// # Example
///
/// ```rust
/// use backdrop::{background_style, Background, TextColor, Theme};
///
/// let theme = Theme::base();
///
/// let style = background_style(Some(&"light-2".into()), &theme, &TextColor::Default).unwrap();
/// assert_eq!(style.get("background-color"), Some("#F2F2F2"));
/// assert_eq!(style.get("color"), Some("#444444"));
///
/// let gradient = Background::from("linear-gradient(#000, #fff)");
/// let style = background_style(Some(&gradient), &theme, &TextColor::Default).unwrap();
/// assert_eq!(style.get("background"), Some("linear-gradient(#000, #fff)"));
///
/// assert!(background_style(None, &theme, &TextColor::Default).is_none());
/// ```
pub fn background_style(
    background: Option<&Background>,
    theme: &Theme,
    text: &TextColor,
) -> Option<StyleFragment> {
    let background = background.filter(|b| !b.is_blank())?;
    let normalized = normalize_background(background, theme);

    if let Normalized::Plain(value) = &normalized {
        if value.starts_with("url") {
            return Some(
                StyleFragment::new()
                    .with("background", format!("{} no-repeat center center", value))
                    .with("background-size", "cover"),
            );
        }
    }

    let pair = pair_for_normalized(&normalized, text, theme);

    match &normalized {
        Normalized::Rich(rich) if rich.image.is_some() => Some(image_style(rich, &pair, theme)),
        _ if pair.background.is_some() => {
            let mut fragment = StyleFragment::new();
            if let Some(background) = pair.background {
                fragment.declare("background-color", background);
            }
            if let Some(color) = pair.color {
                fragment.declare("color", color);
            }
            Some(fragment)
        }
        Normalized::Plain(value) if !value.is_empty() => Some(
            StyleFragment::new().with("background", resolve_color(value, theme, None)),
        ),
        _ => None,
    }
}

fn image_style(rich: &RichBackground, pair: &ResolvedPair, theme: &Theme) -> StyleFragment {
    let mut layer = Vec::new();
    if let Some(background) = &pair.background {
        layer.push(Declaration::new("background-color", background.as_str()));
    }
    if let Some(image) = &rich.image {
        layer.push(Declaration::new("background-image", image.as_str()));
    }
    layer.push(Declaration::new(
        "background-repeat",
        rich.repeat.as_deref().unwrap_or(DEFAULT_REPEAT),
    ));
    layer.push(Declaration::new(
        "background-position",
        rich.position.as_deref().unwrap_or(DEFAULT_POSITION),
    ));
    layer.push(Declaration::new(
        "background-size",
        rich.size.as_deref().unwrap_or(DEFAULT_SIZE),
    ));

    let mut fragment = StyleFragment::new();
    if let Some(color) = &pair.color {
        fragment.declare("color", color.as_str());
    }

    let opacity = rich
        .opacity
        .filter(Opacity::is_set)
        .and_then(|o| theme.global.opacity.resolve(o));

    match opacity {
        Some(opacity) => {
            let mut overlay = vec![
                Declaration::new("content", "''"),
                Declaration::new("position", "absolute"),
                Declaration::new("top", "0"),
                Declaration::new("right", "0"),
                Declaration::new("left", "0"),
                Declaration::new("bottom", "0"),
                Declaration::new("z-index", "-1"),
            ];
            overlay.extend(layer);
            overlay.push(Declaration::new("opacity", opacity.to_string()));

            fragment
                .with("position", "relative")
                .with("z-index", "0")
                .with_before(overlay)
        }
        None => {
            for declaration in layer {
                fragment.declare(declaration.property, declaration.value);
            }
            fragment
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::from_yaml(
            r##"
global:
  colors:
    brand: "#FFCA58"
    ink: "#1a1a1a"
"##,
        )
        .unwrap()
    }

    #[test]
    fn test_absent_and_blank_emit_nothing() {
        assert_eq!(background_style(None, &theme(), &TextColor::Default), None);
        assert_eq!(
            background_style(Some(&"".into()), &theme(), &TextColor::Default),
            None
        );
    }

    #[test]
    fn test_url_shortcut() {
        let style = background_style(
            Some(&"url(//example.com/bg.png)".into()),
            &theme(),
            &TextColor::Default,
        )
        .unwrap();
        assert_eq!(
            style.get("background"),
            Some("url(//example.com/bg.png) no-repeat center center")
        );
        assert_eq!(style.get("background-size"), Some("cover"));
        assert_eq!(style.get("color"), None);
    }

    #[test]
    fn test_flat_color_with_contrast() {
        let style = background_style(Some(&"ink".into()), &theme(), &TextColor::Default).unwrap();
        assert_eq!(style.get("background-color"), Some("#1a1a1a"));
        assert_eq!(style.get("color"), Some("#f8f8f8"));
    }

    #[test]
    fn test_flat_color_with_suppressed_text() {
        let style = background_style(Some(&"ink".into()), &theme(), &TextColor::Suppress).unwrap();
        assert_eq!(style.get("background-color"), Some("#1a1a1a"));
        assert_eq!(style.get("color"), None);
    }

    #[test]
    fn test_unparsed_keyword_emits_shorthand() {
        let style = background_style(Some(&"crimson".into()), &theme(), &TextColor::Default).unwrap();
        assert_eq!(style.get("background"), Some("crimson"));
        assert_eq!(style.get("background-color"), None);
    }

    #[test]
    fn test_image_without_opacity_is_inline() {
        let bg = Background::from(
            RichBackground::image("url(x.png)")
                .with_color("ink")
                .with_size("contain"),
        );
        let style = background_style(Some(&bg), &theme(), &TextColor::Default).unwrap();
        assert!(style.before().is_none());
        assert_eq!(style.get("background-color"), Some("#1a1a1a"));
        assert_eq!(style.get("background-image"), Some("url(x.png)"));
        assert_eq!(style.get("background-repeat"), Some("no-repeat"));
        assert_eq!(style.get("background-position"), Some("center center"));
        assert_eq!(style.get("background-size"), Some("contain"));
        assert_eq!(style.get("color"), Some("#f8f8f8"));
    }

    #[test]
    fn test_image_with_opacity_uses_overlay() {
        let bg = Background::from(RichBackground::image("url(x.png)").with_opacity(Opacity::Medium));
        let style = background_style(Some(&bg), &theme(), &TextColor::Default).unwrap();

        assert_eq!(style.get("position"), Some("relative"));
        assert_eq!(style.get("z-index"), Some("0"));
        assert_eq!(style.get("opacity"), None);
        assert_eq!(style.get("background-image"), None);

        assert_eq!(style.get_before("position"), Some("absolute"));
        assert_eq!(style.get_before("z-index"), Some("-1"));
        assert_eq!(style.get_before("background-image"), Some("url(x.png)"));
        assert_eq!(style.get_before("opacity"), Some("0.4"));
    }

    #[test]
    fn test_image_with_false_opacity_is_inline() {
        let bg = Background::from(RichBackground::image("url(x.png)").with_opacity(false));
        let style = background_style(Some(&bg), &theme(), &TextColor::Default).unwrap();
        assert!(style.before().is_none());
        assert_eq!(style.get("background-image"), Some("url(x.png)"));
    }

    #[test]
    fn test_rich_without_color_or_image_emits_nothing() {
        let bg = Background::from(RichBackground::default().with_dark(true));
        assert_eq!(background_style(Some(&bg), &theme(), &TextColor::Default), None);
    }

    #[test]
    fn test_translucent_color_without_image() {
        let bg = Background::from(RichBackground::color("ink").with_opacity(Opacity::Weak));
        let style = background_style(Some(&bg), &theme(), &TextColor::Default).unwrap();
        assert_eq!(style.get("background-color"), Some("rgba(26, 26, 26, 0.1)"));
        assert_eq!(style.get("color"), None);
    }
}
