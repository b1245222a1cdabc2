//! # Backdrop - Theme-Driven Background and Text Color Resolution
//!
//! `backdrop` resolves abstract background specifications against a theme into
//! concrete CSS declarations, choosing a contrasting text color automatically.
//!
//! A background can be a theme token (`"brand"`), a literal color or
//! gradient, a `{ dark, light }` pair, a rich descriptor with opacity and an
//! image, or a value computed from the theme. The pipeline collapses it for
//! the theme's mode, resolves tokens, classifies the result as dark or light,
//! and emits a [`StyleFragment`].
//!
//! ## Core Concepts
//!
//! - [`Theme`]: the read-only input of every resolver (mode plus `global` tables)
//! - [`ColorMode`]: light or dark, detectable from the OS
//! - [`Background`]: the tagged union of background shapes
//! - [`TextColor`]: default, suppressed, or explicit text color
//! - [`background_and_text_colors`]: the pairing and contrast rules
//! - [`background_style`]: emits the final [`StyleFragment`]
//!
//! ## Quick Start
//!
//! ```rust
//! use backdrop::{background_style, Background, TextColor, Theme};
//!
//! let theme = Theme::base();
//! let style = background_style(Some(&Background::from("brand")), &theme, &TextColor::Default)
//!     .unwrap();
//!
//! assert_eq!(style.to_string(), "background-color: #7D4CDB;\ncolor: #f8f8f8;\n");
//! ```
//!
//! ## Opacity and Contrast
//!
//! A translucent background lets the surface below it dominate, so contrast
//! is only inferred when the background is opaque enough:
//!
//! ```rust
//! use backdrop::{background_and_text_colors, Background, Opacity, RichBackground, TextColor, Theme};
//!
//! let theme = Theme::base();
//!
//! let weak = Background::from(RichBackground::color("brand").with_opacity(Opacity::Weak));
//! let pair = background_and_text_colors(Some(&weak), &TextColor::Default, &theme);
//! assert_eq!(pair.background.as_deref(), Some("rgba(125, 76, 219, 0.1)"));
//! assert_eq!(pair.color, None);
//!
//! let strong = Background::from(RichBackground::color("brand").with_opacity(Opacity::Strong));
//! let pair = background_and_text_colors(Some(&strong), &TextColor::Default, &theme);
//! assert_eq!(pair.color.as_deref(), Some("#f8f8f8"));
//! ```
//!
//! ## YAML-Based Themes
//!
//! Theme documents are overlaid on the base theme:
//!
//! ```rust
//! use backdrop::{background_style, TextColor, Theme};
//!
//! let theme = Theme::from_yaml(r##"
//! dark: true
//! global:
//!   colors:
//!     brand: "#FFCA58"
//!     text: { dark: "#eee", light: "#111" }
//! "##).unwrap();
//!
//! let style = background_style(Some(&"brand".into()), &theme, &TextColor::Default).unwrap();
//! assert_eq!(style.get("color"), Some("#111"));
//! ```
//!
//! ## Logging
//!
//! Theme loading logs at `debug`, fallbacks (unclassifiable backgrounds,
//! unknown elevation levels) at `trace`, through [`tracing`]. The crate never
//! installs a subscriber.

pub mod colorspace;
mod error;
pub mod prelude;
pub mod style;
pub mod theme;

// Error type
pub use error::{Result, ThemeError};

// Style pipeline exports
pub use style::{
    active_style, background_and_text_colors, background_is_dark, background_style,
    elevation_style, hover_indicator_style, item_background, normalize_background, resolve_color,
    resolve_color_value, selected_style, Background, ColorValue, Declaration, HoverIndicator,
    ItemBackground, Normalized, Opacity, ResolvedPair, RichBackground, StyleFragment, TextColor,
    Themed, CONTRAST_OPACITY_THRESHOLD,
};

// Theme module exports
pub use theme::{
    detect_color_mode, set_theme_detector, ColorMode, Elevation, Global, ListItem, ListTheme,
    OpacityScale, StateColors, Theme, ThemeOverrides,
};

// Color space exports
pub use colorspace::{is_dark, Rgba};
