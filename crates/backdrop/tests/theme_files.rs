//! Theme loading from files, refresh, and mode detection.

use std::fs;

use backdrop::{
    background_style, detect_color_mode, resolve_color, set_theme_detector, ColorMode, TextColor,
    Theme, ThemeError,
};
use serial_test::serial;
use tempfile::TempDir;

fn write_theme(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_yaml_theme_file() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(
        &dir,
        "hpe.yaml",
        r##"
global:
  colors:
    brand: "#01A982"
  opacity:
    strong: 0.9
"##,
    );

    let theme = Theme::from_file(&path).unwrap();
    assert_eq!(theme.name(), Some("hpe"));
    assert_eq!(theme.source_path(), Some(path.as_path()));
    assert_eq!(resolve_color("brand", &theme, None), "#01A982");
    assert_eq!(theme.global.opacity.strong, 0.9);
    assert_eq!(theme.global.opacity.weak, 0.1);
}

#[test]
fn test_load_json_theme_file() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(
        &dir,
        "night.json",
        r##"{ "dark": true, "global": { "colors": { "brand": "#222" } } }"##,
    );

    let theme = Theme::from_file(&path).unwrap();
    assert!(theme.dark);
    let style = background_style(Some(&"background".into()), &theme, &TextColor::Default).unwrap();
    assert_eq!(style.get("background-color"), Some("#111111"));
    assert_eq!(style.get("color"), Some("#f8f8f8"));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Theme::from_file(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ThemeError::Read { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "theme.toml", "dark = true");
    let err = Theme::from_file(&path).unwrap_err();
    assert!(matches!(err, ThemeError::UnsupportedFormat { .. }));
}

#[test]
fn test_parse_error_carries_path() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "broken.yml", "global: [unclosed");
    match Theme::from_file(&path) {
        Err(ThemeError::Parse {
            path: Some(reported),
            ..
        }) => assert_eq!(reported, path),
        other => panic!("Expected parse error with path, got {:?}", other),
    }
}

#[test]
fn test_refresh_picks_up_changes() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "live.yaml", r##"global: { colors: { brand: "#111111" } }"##);

    let mut theme = Theme::from_file(&path).unwrap().with_mode(ColorMode::Dark);
    assert_eq!(resolve_color("brand", &theme, None), "#111111");

    fs::write(&path, r##"global: { colors: { accent-1: "#00FF00" } }"##).unwrap();
    theme.refresh().unwrap();

    // removed overrides revert to the base theme
    assert_eq!(resolve_color("brand", &theme, None), "#7D4CDB");
    assert_eq!(resolve_color("accent-1", &theme, None), "#00FF00");
    // mode is kept because the file does not set it
    assert!(theme.dark);
}

#[test]
fn test_refresh_applies_file_mode() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "mode.yaml", "dark: true");

    let mut theme = Theme::from_file(&path).unwrap();
    assert!(theme.dark);

    fs::write(&path, "dark: false").unwrap();
    theme.refresh().unwrap();
    assert!(!theme.dark);
}

#[test]
fn test_refresh_after_file_removed() {
    let dir = TempDir::new().unwrap();
    let path = write_theme(&dir, "gone.yaml", "{}");
    let mut theme = Theme::from_file(&path).unwrap();

    fs::remove_file(&path).unwrap();
    assert!(matches!(theme.refresh(), Err(ThemeError::Read { .. })));
}

#[test]
#[serial]
fn test_detected_theme_uses_detector() {
    set_theme_detector(|| ColorMode::Dark);
    assert_eq!(detect_color_mode(), ColorMode::Dark);
    assert!(Theme::detected().dark);

    set_theme_detector(|| ColorMode::Light);
    assert!(!Theme::detected().dark);
}

#[test]
#[serial]
fn test_detected_theme_resolves_in_detected_mode() {
    set_theme_detector(|| ColorMode::Dark);
    let theme = Theme::detected();
    assert_eq!(resolve_color("text", &theme, None), "#f8f8f8");
    set_theme_detector(|| ColorMode::Light);
}
