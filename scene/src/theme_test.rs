use super::*;

#[test]
fn default_theme_is_day() {
    assert_eq!(Theme::default(), Theme::Day);
    assert!(!Theme::default().is_night());
}

#[test]
fn toggled_flips_and_twice_restores() {
    assert_eq!(Theme::Day.toggled(), Theme::Night);
    assert_eq!(Theme::Night.toggled(), Theme::Day);
    assert_eq!(Theme::Day.toggled().toggled(), Theme::Day);
}

#[test]
fn from_night_matches_is_night() {
    assert_eq!(Theme::from_night(true), Theme::Night);
    assert_eq!(Theme::from_night(false), Theme::Day);
    assert!(Theme::from_night(true).is_night());
}

#[test]
fn attribute_values() {
    assert_eq!(Theme::Day.as_str(), "day");
    assert_eq!(Theme::Night.as_str(), "night");
}

#[test]
fn night_windows_glow_without_frames() {
    assert!(ScenePalette::for_theme(Theme::Night).window_frame.is_none());
    assert!(ScenePalette::for_theme(Theme::Day).window_frame.is_some());
}

#[test]
fn palettes_differ_per_theme() {
    let day = ScenePalette::for_theme(Theme::Day);
    let night = ScenePalette::for_theme(Theme::Night);
    assert_ne!(day, night);
    assert_ne!(day.surface, night.surface);
    assert_ne!(day.counter_bg, night.counter_bg);
}
