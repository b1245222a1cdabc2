//! Row backgrounds for lists.

use serde::Deserialize;

use super::background::Background;
use crate::theme::Theme;

/// The background setting of a list: one background for every row, or a
/// sequence cycled over the rows (striping).
///
/// In theme documents a single background is written as usual and stripes
/// as a list: `background: [light-1, light-2]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemBackground {
    Single(Background),
    Stripes(Vec<Background>),
}

impl From<Background> for ItemBackground {
    fn from(background: Background) -> Self {
        ItemBackground::Single(background)
    }
}

impl From<Vec<Background>> for ItemBackground {
    fn from(stripes: Vec<Background>) -> Self {
        ItemBackground::Stripes(stripes)
    }
}

/// Picks the background for row `index`.
///
/// A list without its own background uses `theme.list.item.background`.
/// The active row (hovered or keyboard focused) takes the theme's hover
/// background regardless of striping.
///
/// ```rust
/// use backdrop::{item_background, Background, ItemBackground, Theme};
///
/// let theme = Theme::base();
/// let stripes = ItemBackground::from(vec![
///     Background::from("light-1"),
///     Background::from("light-2"),
/// ]);
///
/// let row = |index| item_background(Some(&stripes), index, None, &theme);
/// assert!(matches!(row(0), Some(Background::Plain(s)) if s == "light-1"));
/// assert!(matches!(row(3), Some(Background::Plain(s)) if s == "light-2"));
/// ```
pub fn item_background(
    background: Option<&ItemBackground>,
    index: usize,
    active: Option<usize>,
    theme: &Theme,
) -> Option<Background> {
    if active == Some(index) {
        return theme.global.hover.background.clone();
    }
    match background.or(theme.list.item.background.as_ref())? {
        ItemBackground::Single(background) => Some(background.clone()),
        ItemBackground::Stripes(stripes) if stripes.is_empty() => None,
        ItemBackground::Stripes(stripes) => Some(stripes[index % stripes.len()].clone()),
    }
}
