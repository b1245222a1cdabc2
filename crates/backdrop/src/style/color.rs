//! Theme token resolution.
//!
//! A color string is either a key of `theme.global.colors` or a literal CSS
//! value. Resolution looks the key up, picks the mode branch of a
//! `{ dark, light }` entry, and follows the result if it names another token.
//! Anything that is not a key comes back unchanged: arbitrary CSS values are
//! legal backgrounds, so an unknown token is never an error.
//!
//! ```rust
//! use backdrop::{resolve_color, Theme};
//!
//! let theme = Theme::base();
//! assert_eq!(resolve_color("brand", &theme, None), "#7D4CDB");
//! assert_eq!(resolve_color("selected", &theme, None), "#7D4CDB"); // selected -> brand
//! assert_eq!(resolve_color("text", &theme, None), "#444444");
//! assert_eq!(resolve_color("text", &theme, Some(true)), "#f8f8f8");
//! assert_eq!(resolve_color("crimson", &theme, None), "crimson");
//! ```

use super::value::ColorValue;
use crate::theme::Theme;

/// Upper bound on token-to-token hops, so cyclic themes still terminate.
const MAX_INDIRECTION: usize = 16;

/// Resolves a token or literal to a concrete color string.
///
/// `prefer_dark` overrides `theme.dark` when choosing the branch of mode
/// pairs, both for `token` and for any token it leads to. The function is
/// idempotent: resolving its own output returns the output unchanged.
pub fn resolve_color(token: &str, theme: &Theme, prefer_dark: Option<bool>) -> String {
    let dark = prefer_dark.unwrap_or(theme.dark);
    let mut current = token;

    for _ in 0..MAX_INDIRECTION {
        let Some(next) = theme.color(current).and_then(|value| value.pick(dark)) else {
            return current.to_string();
        };
        if next == current || theme.color(next).is_none() {
            return next.to_string();
        }
        current = next;
    }

    tracing::trace!(token, "color indirection limit reached");
    current.to_string()
}

/// Resolves a [`ColorValue`]: picks its mode branch, then resolves the token.
///
/// Returns `None` only for a variant with neither branch set.
pub fn resolve_color_value(
    value: &ColorValue,
    theme: &Theme,
    prefer_dark: Option<bool>,
) -> Option<String> {
    let dark = prefer_dark.unwrap_or(theme.dark);
    value
        .pick(dark)
        .map(|token| resolve_color(token, theme, prefer_dark))
}
