//! Color mode detection for light/dark themes.
//!
//! The pipeline itself never consults the OS: it reads `theme.dark` and nothing
//! else. Detection is only used when building a theme for the current session,
//! see [`Theme::detected`](super::Theme::detected).
//!
//! Use [`set_theme_detector`] to override detection in tests:
//!
//! ```rust
//! use backdrop::{detect_color_mode, set_theme_detector, ColorMode};
//!
//! set_theme_detector(|| ColorMode::Dark);
//! assert_eq!(detect_color_mode(), ColorMode::Dark);
//! ```

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Light or dark rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Light surfaces, dark text.
    Light,
    /// Dark surfaces, light text.
    Dark,
}

impl ColorMode {
    /// Returns the mode for a `dark` flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Returns `true` for [`ColorMode::Dark`].
    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    /// The key used for mode-keyed theme tables (`"dark"` / `"light"`).
    pub fn key(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used by [`detect_color_mode`].
///
/// Tests that call this should restore a known detector afterwards and run
/// serially, since the detector is process-global.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Detects the user's preferred color mode.
///
/// Uses the `dark-light` crate unless a detector was installed with
/// [`set_theme_detector`]. Falls back to [`ColorMode::Light`] when the OS
/// preference is unknown.
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        Ok(OsThemeMode::Dark) => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_from_dark() {
        assert_eq!(ColorMode::from_dark(true), ColorMode::Dark);
        assert_eq!(ColorMode::from_dark(false), ColorMode::Light);
        assert!(ColorMode::Dark.is_dark());
        assert!(!ColorMode::Light.is_dark());
    }

    #[test]
    fn test_mode_keys() {
        assert_eq!(ColorMode::Dark.key(), "dark");
        assert_eq!(ColorMode::Light.key(), "light");
    }

    #[test]
    #[serial]
    fn test_detect_color_mode_uses_override() {
        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
    }
}
