// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use kontax::{AppTheme, Config, FilterName, FxName};

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.app_theme, AppTheme::System);
    assert_eq!(config.selected_filter, FilterName::A1);
    assert!(config.enabled_effects.is_empty());
    assert!(!config.save_folder_name.is_empty());
}

#[test]
fn test_theme_persists_as_integer() {
    assert_eq!(serde_json::to_string(&AppTheme::System).unwrap(), "0");
    assert_eq!(serde_json::to_string(&AppTheme::Light).unwrap(), "1");
    assert_eq!(serde_json::to_string(&AppTheme::Dark).unwrap(), "2");
}

#[test]
fn test_invalid_theme_decodes_to_system() {
    let theme: AppTheme = serde_json::from_str("9").unwrap();
    assert_eq!(theme, AppTheme::System);
    assert!(AppTheme::try_from(3).is_err());
}

#[test]
fn test_config_serde_round_trip() {
    let config = Config {
        app_theme: AppTheme::Light,
        selected_filter: FilterName::B1,
        enabled_effects: vec![FxName::LightLeaks],
        ..Config::default()
    };

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"app_theme\":1"));
    assert!(json.contains("\"selected_filter\":\"b1\""));
    assert!(json.contains("\"light-leaks\""));

    let decoded: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, config);
}

#[test]
fn test_set_effect_keeps_list_sorted_and_unique() {
    let mut config = Config::default();
    config.set_effect(FxName::Grain, true);
    config.set_effect(FxName::LightLeaks, true);
    config.set_effect(FxName::Grain, true);
    assert_eq!(config.enabled_effects, vec![FxName::LightLeaks, FxName::Grain]);

    config.set_effect(FxName::LightLeaks, false);
    assert!(!config.effect_enabled(FxName::LightLeaks));
    assert!(config.effect_enabled(FxName::Grain));
}

#[test]
fn test_export_quality_is_clamped() {
    let config = Config {
        jpeg_quality: 0,
        ..Config::default()
    };
    assert_eq!(config.export_quality(), 1);

    let config = Config {
        jpeg_quality: 250,
        ..Config::default()
    };
    assert_eq!(config.export_quality(), 100);
}
