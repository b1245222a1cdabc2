//! Prelude for convenient imports.
//!
//! Re-exports the types and functions most callers need:
//!
//! ```rust
//! use backdrop::prelude::*;
//!
//! let theme = Theme::base().with_mode(ColorMode::Dark);
//! let style = background_style(Some(&"background".into()), &theme, &TextColor::Default);
//! assert_eq!(style.unwrap().get("background-color"), Some("#111111"));
//! ```

// Theme and mode
pub use crate::theme::{detect_color_mode, ColorMode, Theme};

// Specifications
pub use crate::style::{Background, ColorValue, HoverIndicator, Opacity, RichBackground, TextColor};

// Resolution and emission
pub use crate::style::{
    background_and_text_colors, background_style, hover_indicator_style, resolve_color,
    StyleFragment,
};
