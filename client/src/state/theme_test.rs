use super::*;

#[test]
fn default_theme_is_light() {
    assert_eq!(ThemeState::default().theme, Theme::Light);
    assert!(!ThemeState::default().is_dark());
}

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn from_stored_accepts_written_values() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(theme.as_str()), Some(theme));
    }
}

#[test]
fn from_stored_rejects_unknown_values() {
    assert_eq!(Theme::from_stored("true"), None);
    assert_eq!(Theme::from_stored(""), None);
    assert_eq!(Theme::from_stored("DARK"), None);
}
