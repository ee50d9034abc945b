// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the picker and settings presenters

use kontax::app::appearance::AppearanceList;
use kontax::app::cell::{CellPalette, FilterCellState};
use kontax::app::effects::EffectsPanel;
use kontax::app::filter_picker::FilterList;
use kontax::{AppTheme, Config, FilterName, FxName};

#[test]
fn test_tap_b1_persists_selection() {
    let mut config = Config::default();
    let mut list = FilterList::new(config.selected_filter);

    let outcome = list.select(FilterName::B1);
    config.selected_filter = outcome.filter;

    assert_eq!(config.selected_filter, FilterName::B1);
    let reopened = FilterList::new(config.selected_filter);
    assert_eq!(reopened.active(), FilterName::B1);
}

#[test]
fn test_picker_marks_persisted_filter() {
    let config = Config {
        selected_filter: FilterName::A4,
        ..Config::default()
    };
    let list = FilterList::new(config.selected_filter);
    let active: Vec<FilterName> = list
        .sections()
        .flat_map(|(_, cells)| cells)
        .filter(|(_, state)| state.is_selected())
        .map(|(name, _)| name)
        .collect();
    assert_eq!(active, vec![FilterName::A4]);
}

#[test]
fn test_persisted_appearance_one_checks_light() {
    let config: Config = serde_json::from_str(
        r#"{"app_theme":1,"selected_filter":"a1","enabled_effects":[],"jpeg_quality":92,"save_folder_name":"Kontax"}"#,
    )
    .unwrap();
    let list = AppearanceList::new(config.app_theme);
    assert!(list.is_checked(AppTheme::Light));
    assert!(!list.is_checked(AppTheme::System));
    assert!(!list.is_checked(AppTheme::Dark));
}

#[test]
fn test_appearance_selection_is_idempotent() {
    let mut list = AppearanceList::new(AppTheme::System);
    let first = list.select(AppTheme::Dark);
    let second = list.select(AppTheme::Dark);
    assert!(first.changed);
    assert!(!second.changed);
    assert_eq!(first.theme, second.theme);
}

#[test]
fn test_effect_toggle_round_trip_through_config() {
    let mut config = Config::default();
    let mut panel = EffectsPanel::new(&config.enabled_effects);

    let outcome = panel.toggle(FxName::LightLeaks);
    config.set_effect(outcome.fx, outcome.enabled);
    assert_eq!(config.enabled_effects, vec![FxName::LightLeaks]);

    let mut panel = EffectsPanel::new(&config.enabled_effects);
    for change in panel.clear() {
        config.set_effect(change.fx, change.enabled);
    }
    assert!(config.enabled_effects.is_empty());
}

#[test]
fn test_cell_toggle_twice_restores_look() {
    for palette in [CellPalette::LIGHT, CellPalette::DARK] {
        let mut state = FilterCellState::default();
        let before = (state.indicator(), state.style(&palette));
        state.toggle();
        state.toggle();
        assert_eq!((state.indicator(), state.style(&palette)), before);
    }
}
