/*!
 * Tests for the preference store and theme handling
 */

use anyhow::Result;
use docintel::preferences::{PreferenceStore, Theme};

use crate::common;

/// Test that a fresh store reports the default theme
#[test]
fn test_theme_withFreshStore_shouldReturnLight() -> Result<()> {
    let store = PreferenceStore::new_in_memory()?;
    assert_eq!(store.theme()?, Theme::Light);
    Ok(())
}

/// Test that a stored theme is read back
#[test]
fn test_set_theme_withDark_shouldPersistValue() -> Result<()> {
    let store = PreferenceStore::new_in_memory()?;

    store.set_theme(Theme::Dark)?;
    assert_eq!(store.theme()?, Theme::Dark);

    Ok(())
}

/// Test that setting a key twice keeps the latest value
#[test]
fn test_set_withExistingKey_shouldOverwriteValue() -> Result<()> {
    let store = PreferenceStore::new_in_memory()?;

    store.set("theme", "light")?;
    store.set("theme", "dark")?;

    assert_eq!(store.get("theme")?, Some("dark".to_string()));

    Ok(())
}

/// Test that unknown keys read as absent
#[test]
fn test_get_withUnknownKey_shouldReturnNone() -> Result<()> {
    let store = PreferenceStore::new_in_memory()?;
    assert_eq!(store.get("unknown")?, None);
    Ok(())
}

/// Test that a file-backed store survives reopening
#[test]
fn test_store_withReopen_shouldKeepValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let db_path = temp_dir.path().join("preferences.db");

    {
        let store = PreferenceStore::new(&db_path)?;
        store.set_theme(Theme::Dark)?;
    }

    let reopened = PreferenceStore::new(&db_path)?;
    assert_eq!(reopened.theme()?, Theme::Dark);

    Ok(())
}

/// Test theme parsing and display round-trip
#[test]
fn test_theme_withParseAndDisplay_shouldRoundTrip() -> Result<()> {
    assert_eq!("light".parse::<Theme>()?, Theme::Light);
    assert_eq!("DARK".parse::<Theme>()?, Theme::Dark);
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert!("solarized".parse::<Theme>().is_err());
    Ok(())
}

/// Test that toggling alternates between the two themes
#[test]
fn test_theme_toggled_shouldAlternate() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}
