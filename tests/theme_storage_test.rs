//! Integration tests for the persisted theme preference.

use std::fs;

use folio::storage;
use folio::ui::theme::{Palette, ThemeMode};
use tempfile::tempdir;

#[test]
fn preference_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme.json");

    storage::save_theme_to(&path, ThemeMode::Light).unwrap();
    assert_eq!(storage::load_theme_from(&path).unwrap(), ThemeMode::Light);

    storage::save_theme_to(&path, ThemeMode::Dark).unwrap();
    assert_eq!(storage::load_theme_from(&path).unwrap(), ThemeMode::Dark);
}

#[test]
fn missing_file_is_an_error_surfaced_to_the_caller() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    assert!(storage::load_theme_from(&path).is_err());
}

#[test]
fn corrupt_file_is_an_error_surfaced_to_the_caller() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme.json");
    fs::write(&path, "not json at all").unwrap();
    assert!(storage::load_theme_from(&path).is_err());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("theme.json");
    storage::save_theme_to(&path, ThemeMode::Light).unwrap();
    assert_eq!(storage::load_theme_from(&path).unwrap(), ThemeMode::Light);
}

#[test]
fn stored_form_is_plain_lowercase_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme.json");
    storage::save_theme_to(&path, ThemeMode::Light).unwrap();
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("light"), "unexpected payload: {raw}");
}

#[test]
fn toggle_is_an_involution() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_ne!(mode.toggled(), mode);
        assert_eq!(mode.toggled().toggled(), mode);
    }
}

#[test]
fn palettes_flip_consistently_with_the_mode() {
    let dark = Palette::of(ThemeMode::Dark);
    let light = Palette::of(ThemeMode::Light);
    assert_ne!(dark.bg, light.bg);
    assert_ne!(dark.text, light.text);
    // Same palette instance for the same mode every time
    assert!(std::ptr::eq(dark, Palette::of(ThemeMode::Dark)));
}
