//! Themes: the read-only input of every resolver.
//!
//! A [`Theme`] carries the current mode (`dark`) and the `global` tables the
//! pipeline reads: color tokens, opacity levels, active/selected/hover state
//! colors and elevation shadows. Component defaults live beside `global`
//! (`list.item.background`).
//!
//! ## Color tokens
//!
//! Token values are either a single string or a `{ dark, light }` pair, and a
//! value may name another token:
//!
//! ```yaml
//! global:
//!   colors:
//!     brand: "#7D4CDB"
//!     selected: brand            # indirection
//!     text:                      # mode pair
//!       dark: "#f8f8f8"
//!       light: "#444444"
//! ```
//!
//! ## Construction
//!
//! [`Theme::base`] provides a complete default theme. Documents loaded with
//! [`Theme::from_yaml`], [`Theme::from_json`] or [`Theme::from_file`] are
//! overlaid on it, so a custom theme only lists what it changes:
//!
//! ```rust
//! use backdrop::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! global:
//!   colors:
//!     brand: "#01A982"
//! "##).unwrap();
//! assert!(theme.color("accent-1").is_some());
//! ```
//!
//! ## Mode
//!
//! `theme.dark` is an explicit input. [`Theme::detected`] sets it from the
//! OS preference via [`detect_color_mode`]; [`Theme::with_mode`] sets it
//! directly.

mod adaptive;
mod base;
mod overrides;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_theme_detector, ColorMode};
pub use overrides::{
    ElevationOverrides, GlobalOverrides, ListItemOverrides, ListOverrides, OpacityOverrides,
    StateOverrides, ThemeOverrides, THEME_EXTENSIONS,
};
pub use theme::{Elevation, Global, ListItem, ListTheme, OpacityScale, StateColors, Theme};
