use super::*;

#[test]
fn defaults_match_window_defaults() {
    let s = Settings::default();
    assert_eq!(s.window.title, "Untitled");
    assert_eq!((s.window.width, s.window.height), (640, 480));
    assert_eq!((s.window.columns, s.window.rows), (5, 10));
    assert_eq!(s.theme.font_size, 13);
    assert_eq!(parse_color(&s.theme.background_color), Some(Color::LIGHT_GRAY));
}

#[test]
fn keys_are_camel_case() {
    let json = serde_json::to_value(Settings::default()).unwrap();
    assert!(json["window"].get("screenWidth").is_some());
    assert!(json["theme"].get("fontFamily").is_some());
    assert!(json["terminal"].get("cellHeight").is_some());
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let s: Settings = serde_json::from_str(r#"{"window":{"title":"Quiz","rows":5}}"#).unwrap();
    assert_eq!(s.window.title, "Quiz");
    assert_eq!(s.window.rows, 5);
    assert_eq!(s.window.columns, 5);
    assert_eq!(s.theme, ThemeSettings::default());

    let empty: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Settings::default());
}

#[test]
fn ensure_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_file_at(&path).unwrap();
    assert!(path.exists());
    assert_eq!(load_settings_from(&path).unwrap(), Settings::default());

    std::fs::write(&path, r##"{"theme":{"textColor":"#102030"}}"##).unwrap();
    ensure_settings_file_at(&path).unwrap();
    let s = load_settings_from(&path).unwrap();
    assert_eq!(parse_color(&s.theme.text_color), Some(Color::rgb(16, 32, 48)));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        load_settings_from(&path),
        Err(SettingsError::Parse { .. })
    ));
    assert!(matches!(
        load_settings_from(&dir.path().join("absent.json")),
        Err(SettingsError::Io { .. })
    ));
}

#[test]
fn parse_color_accepts_hex_and_names() {
    assert_eq!(parse_color("#ff0000"), Some(Color::RED));
    assert_eq!(parse_color(" Blue "), Some(Color::BLUE));
    assert_eq!(parse_color("#fff"), None);
    assert_eq!(parse_color("chartreuse"), None);
    assert_eq!(parse_color(""), None);
}
