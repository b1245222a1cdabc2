//! The bundled base theme.

use std::collections::HashMap;

use super::theme::{Elevation, Global, OpacityScale, StateColors};
use crate::style::ColorValue;

const COLORS: &[(&str, &str)] = &[
    ("active", "rgba(221, 221, 221, 0.5)"),
    ("active-background", "background-contrast"),
    ("active-text", "text-strong"),
    ("black", "#000000"),
    ("brand", "#7D4CDB"),
    ("focus", "accent-1"),
    ("placeholder", "#AAAAAA"),
    ("selected", "brand"),
    ("white", "#FFFFFF"),
    ("accent-1", "#6FFFB0"),
    ("accent-2", "#FD6FFF"),
    ("accent-3", "#81FCED"),
    ("accent-4", "#FFCA58"),
    ("neutral-1", "#00873D"),
    ("neutral-2", "#3D138D"),
    ("neutral-3", "#00739D"),
    ("neutral-4", "#A2423D"),
    ("status-critical", "#FF4040"),
    ("status-error", "#FF4040"),
    ("status-warning", "#FFAA15"),
    ("status-ok", "#00C781"),
    ("status-unknown", "#CCCCCC"),
    ("status-disabled", "#CCCCCC"),
    ("dark-1", "#333333"),
    ("dark-2", "#555555"),
    ("dark-3", "#777777"),
    ("dark-4", "#999999"),
    ("light-1", "#F8F8F8"),
    ("light-2", "#F2F2F2"),
    ("light-3", "#EDEDED"),
    ("light-4", "#DADADA"),
];

// (token, dark, light)
const MODE_COLORS: &[(&str, &str, &str)] = &[
    ("background", "#111111", "#FFFFFF"),
    ("background-back", "#111111", "#EEEEEE"),
    ("background-front", "#222222", "#FFFFFF"),
    ("background-contrast", "#FFFFFF11", "#11111111"),
    ("border", "rgba(255, 255, 255, 0.33)", "rgba(0, 0, 0, 0.33)"),
    ("control", "accent-1", "brand"),
    ("icon", "#f8f8f8", "#666666"),
    ("text", "#f8f8f8", "#444444"),
    ("text-strong", "#FFFFFF", "#000000"),
    ("text-weak", "#CCCCCC", "#555555"),
    ("text-xweak", "#BBBBBB", "#666666"),
];

// (level, dark, light)
const ELEVATION: &[(&str, &str, &str)] = &[
    ("none", "none", "none"),
    (
        "xsmall",
        "0px 2px 2px rgba(255, 255, 255, 0.40)",
        "0px 1px 2px rgba(100, 100, 100, 0.50)",
    ),
    (
        "small",
        "0px 4px 4px rgba(255, 255, 255, 0.40)",
        "0px 2px 4px rgba(100, 100, 100, 0.50)",
    ),
    (
        "medium",
        "0px 6px 8px rgba(255, 255, 255, 0.40)",
        "0px 3px 8px rgba(100, 100, 100, 0.50)",
    ),
    (
        "large",
        "0px 8px 16px rgba(255, 255, 255, 0.40)",
        "0px 6px 12px rgba(100, 100, 100, 0.50)",
    ),
    (
        "xlarge",
        "0px 10px 24px rgba(255, 255, 255, 0.40)",
        "0px 8px 16px rgba(100, 100, 100, 0.50)",
    ),
];

pub(super) fn global() -> Global {
    let mut colors: HashMap<String, ColorValue> = COLORS
        .iter()
        .map(|(name, value)| (name.to_string(), ColorValue::from(*value)))
        .collect();
    colors.extend(
        MODE_COLORS
            .iter()
            .map(|(name, dark, light)| (name.to_string(), ColorValue::variant(*dark, *light))),
    );

    let mut elevation = Elevation::default();
    for (level, dark, light) in ELEVATION {
        elevation.dark.insert(level.to_string(), dark.to_string());
        elevation.light.insert(level.to_string(), light.to_string());
    }

    Global {
        colors,
        opacity: OpacityScale::default(),
        active: StateColors::new("active-background", "active-text"),
        selected: StateColors::new("selected", "white"),
        hover: StateColors::new("active-background", "active-text"),
        elevation,
    }
}
