//! The style resolution pipeline.
//!
//! Layered bottom-up:
//!
//! - [`color`]: theme token resolution ([`resolve_color`])
//! - [`background`]: background specifications and [`normalize_background`]
//! - [`pair`]: background/text pairing with contrast inference
//!   ([`background_and_text_colors`])
//! - [`emit`]: [`StyleFragment`] emission ([`background_style`])
//! - [`states`]: active/selected/hover presets and elevation shadows
//! - [`list`]: per-row list backgrounds
//!
//! Every function here takes the theme explicitly and never fails; unknown
//! tokens and unclassifiable colors degrade to passthrough values.

pub mod background;
pub mod color;
pub mod emit;
pub mod fragment;
pub mod list;
pub mod pair;
pub mod states;
mod value;

pub use background::{normalize_background, Background, Normalized, Opacity, RichBackground};
pub use color::{resolve_color, resolve_color_value};
pub use emit::background_style;
pub use fragment::{Declaration, StyleFragment};
pub use list::{item_background, ItemBackground};
pub use pair::{
    background_and_text_colors, background_is_dark, ResolvedPair, CONTRAST_OPACITY_THRESHOLD,
};
pub use states::{
    active_style, elevation_style, hover_indicator_style, selected_style, HoverIndicator,
};
pub use value::{ColorValue, TextColor, Themed};
