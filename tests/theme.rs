//! Theme loading tests

use std::fs;

use edgedock::theme::{
    load_theme_from, Color, Theme, ThemeSource, BUILTIN_THEMES, DEFAULT_DARK_YAML,
    SLATE_LIGHT_YAML,
};

const CUSTOM_THEME: &str = r##"
version: 1
name: "Custom"
ui:
  panel:
    background: "#101010"
  indicator:
    background: "#202020"
    foreground: "#F0F0F0"
    active: "#00FF00"
  dashboard:
    background: "#303030"
    title: "#FFFFFF"
"##;

#[test]
fn test_color_from_hex_6() {
    let color = Color::from_hex("#1E1E1E").unwrap();
    assert_eq!(color, Color::rgb(0x1E, 0x1E, 0x1E));
    assert_eq!(color.a, 255);
}

#[test]
fn test_color_from_hex_8() {
    let color = Color::from_hex("#1E1E1E80").unwrap();
    assert_eq!(color.a, 0x80);
    assert_eq!(color.to_argb_u32(), 0x801E1E1E);
}

#[test]
fn test_color_from_hex_rejects_garbage() {
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
    assert!(Color::from_hex("").is_err());
}

#[test]
fn test_builtin_themes_parse() {
    for builtin in BUILTIN_THEMES {
        assert!(
            Theme::from_yaml(builtin.yaml).is_ok(),
            "builtin theme {} failed to parse",
            builtin.id
        );
    }
    assert_eq!(Theme::from_yaml(DEFAULT_DARK_YAML).unwrap().name, "Default Dark");
    assert_eq!(Theme::from_yaml(SLATE_LIGHT_YAML).unwrap().name, "Slate Light");
}

#[test]
fn test_builtin_window_backgrounds_are_opaque() {
    let themes = BUILTIN_THEMES
        .iter()
        .map(|builtin| Theme::from_yaml(builtin.yaml).unwrap())
        .chain([Theme::fallback()]);
    for theme in themes {
        assert_eq!(theme.panel.background.a, 255, "{} panel", theme.name);
        assert_eq!(theme.dashboard.background.a, 255, "{} dashboard", theme.name);
    }
}

#[test]
fn test_optional_colors_fall_back() {
    let theme = Theme::from_yaml(CUSTOM_THEME).unwrap();
    assert_eq!(theme.indicator.background_hover, theme.indicator.background);
    assert_eq!(theme.indicator.notify, Theme::fallback().indicator.notify);
    assert_eq!(theme.dashboard.border, Theme::fallback().dashboard.border);
}

#[test]
fn test_user_theme_wins() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default-dark.yaml"), CUSTOM_THEME).unwrap();

    let load = load_theme_from("default-dark", Some(dir.path()));
    assert_eq!(load.source, ThemeSource::User);
    assert_eq!(load.theme.name, "Custom");
}

#[test]
fn test_corrupt_user_theme_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("slate-light.yaml"), "ui: [").unwrap();

    let load = load_theme_from("slate-light", Some(dir.path()));
    assert_eq!(load.source, ThemeSource::Builtin);
    assert_eq!(load.theme.name, "Slate Light");
}

#[test]
fn test_unknown_theme_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    let load = load_theme_from("does-not-exist", Some(dir.path()));
    assert_eq!(load.source, ThemeSource::Default);
    assert_eq!(load.theme.name, "Default Dark");
}

#[test]
fn test_no_user_dir_still_loads_builtin() {
    let load = load_theme_from("default-dark", None);
    assert_eq!(load.source, ThemeSource::Builtin);
}
