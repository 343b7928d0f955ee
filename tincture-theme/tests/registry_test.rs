//! Tests for the theme registry contract

use std::fs;

use tincture_theme::config::ThemeConfig;
use tincture_theme::manager::ThemeManager;
use tincture_theme::source::TokenSource;
use tincture_theme::{ColorValue, Theme, ThemeError, ThemeName, ThemeRegistry, ThemeToken};

#[test]
fn test_every_theme_has_every_token() {
    let registry = ThemeRegistry::builtin();
    assert_eq!(registry.iter().count(), 10);

    for theme in registry.iter() {
        let map = theme.to_map();
        assert_eq!(map.len(), 77);
        for token in ThemeToken::ALL {
            assert!(map.contains_key(token.name()), "{} lacks {}", theme.name(), token);
        }
    }
}

#[test]
fn test_every_value_is_a_parseable_color() {
    for theme in ThemeRegistry::builtin().iter() {
        for (token, value) in theme.iter() {
            assert!(!value.as_str().is_empty(), "{}.{} is empty", theme.name(), token);
            assert!(ColorValue::parse(value.as_str()).is_ok());
        }
    }
}

#[test]
fn test_lookup_by_string() {
    let registry = ThemeRegistry::builtin();
    for name in ThemeName::ALL {
        assert_eq!(registry.lookup(name.as_str()).unwrap().name(), name);
    }
    assert!(matches!(
        registry.lookup("light_sepia"),
        Err(ThemeError::ThemeNotFound { .. })
    ));
}

#[test]
fn test_light_and_dark_differ() {
    let registry = ThemeRegistry::builtin();
    assert_ne!(
        registry.get(ThemeName::Light).get(ThemeToken::Background),
        registry.get(ThemeName::Dark).get(ThemeToken::Background)
    );
}

#[test]
fn test_theme_map_rejects_partial_input() {
    let light = ThemeRegistry::builtin().get(ThemeName::Light);
    let mut entries: Vec<(String, String)> = light
        .iter()
        .map(|(token, value)| (token.name().to_string(), value.as_str().to_string()))
        .collect();

    let complete = Theme::from_map(ThemeName::Light, entries.clone()).unwrap();
    assert_eq!(&complete, light);

    entries.retain(|(key, _)| key != "yellow7");
    match Theme::from_map(ThemeName::Light, entries.clone()) {
        Err(ThemeError::MissingTokens { tokens, .. }) => assert_eq!(tokens, vec!["yellow7"]),
        other => panic!("unexpected result: {other:?}"),
    }

    entries.push(("yellow7".to_string(), "#fff".to_string()));
    entries.push(("yellow13".to_string(), "#fff".to_string()));
    assert!(matches!(
        Theme::from_map(ThemeName::Light, entries),
        Err(ThemeError::UnknownTokens { .. })
    ));
}

#[test]
fn test_token_source_file_round_trip() {
    let registry = ThemeRegistry::builtin();
    let mut doc = String::new();
    for theme in registry.iter() {
        doc.push_str(&format!("[themes.{}]\n", theme.name()));
        for (token, value) in theme.iter() {
            doc.push_str(&format!("{} = \"{}\"\n", token, value));
        }
    }

    let path = std::env::temp_dir().join("tincture_registry_test_tokens.toml");
    fs::write(&path, doc).unwrap();
    let loaded = TokenSource::from_file(&path).unwrap().into_registry().unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(&loaded, registry);
}

#[test]
fn test_config_file_points_at_token_source() {
    let dir = std::env::temp_dir().join("tincture_config_test");
    fs::create_dir_all(&dir).unwrap();

    let mut tokens = String::new();
    for name in ThemeName::ALL {
        tokens.push_str(&format!("[themes.{name}]\nextends = \"{name}\"\n"));
        if name == ThemeName::DarkAccent {
            tokens.push_str("color = \"#123456\"\n");
        }
    }
    fs::write(dir.join("tokens.toml"), tokens).unwrap();
    fs::write(
        dir.join("theme.toml"),
        "[theme]\ndefault = \"dark_accent\"\ntokens = \"tokens.toml\"\n",
    )
    .unwrap();

    let config = ThemeConfig::from_file(dir.join("theme.toml")).unwrap();
    let manager = ThemeManager::from_config(&config).unwrap();
    assert_eq!(manager.current_name(), ThemeName::DarkAccent);
    assert_eq!(manager.token(ThemeToken::Color).as_str(), "#123456");

    fs::remove_dir_all(&dir).unwrap();
}
