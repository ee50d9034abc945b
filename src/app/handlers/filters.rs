// SPDX-License-Identifier: GPL-3.0-only

//! Filter and effect handlers

use crate::app::effects::{EffectToggled, EffectsPanel};
use crate::app::filter_picker::{FilterList, FilterSelected};
use crate::app::state::{AppModel, Message};
use crate::filters::{FilterName, FxName};
use cosmic::Task;
use tracing::info;

impl AppModel {
    // =========================================================================
    // Filter Handlers
    // =========================================================================

    pub(crate) fn handle_select_filter(&mut self, filter: FilterName) -> Task<cosmic::Action<Message>> {
        let mut list = FilterList::new(self.config.selected_filter);
        let FilterSelected { filter } = list.select(filter);
        info!(%filter, "Filter selected");

        self.close_context_drawer();
        if self.config.selected_filter == filter {
            return Task::none();
        }

        self.config.selected_filter = filter;
        self.save_config("selected_filter");
        self.develop_preview()
    }

    // =========================================================================
    // Effect Handlers
    // =========================================================================

    pub(crate) fn handle_toggle_effect(&mut self, fx: FxName) -> Task<cosmic::Action<Message>> {
        let mut panel = EffectsPanel::new(&self.config.enabled_effects);
        let EffectToggled { fx, enabled } = panel.toggle(fx);
        info!(%fx, enabled, "Effect toggled");

        self.config.set_effect(fx, enabled);
        self.save_config("enabled_effects");
        self.develop_preview()
    }

    pub(crate) fn handle_clear_effects(&mut self) -> Task<cosmic::Action<Message>> {
        let mut panel = EffectsPanel::new(&self.config.enabled_effects);
        let changed = panel.clear();
        if changed.is_empty() {
            return Task::none();
        }

        for EffectToggled { fx, enabled } in changed {
            self.config.set_effect(fx, enabled);
        }
        info!("All effects switched off");
        self.save_config("enabled_effects");
        self.develop_preview()
    }
}

#[cfg(test)]
mod tests {
    use crate::app::state::{AppModel, ContextPage};
    use crate::config::Config;
    use crate::filters::{FilterName, FxName};

    #[test]
    fn test_tap_b1_persists_and_dismisses() {
        let mut app = AppModel::with_drawer_open(Config::default(), ContextPage::Filters);

        let _ = app.handle_select_filter(FilterName::B1);

        assert_eq!(app.config.selected_filter, FilterName::B1);
        assert!(!app.core.window.show_context);
    }

    #[test]
    fn test_reselecting_filter_only_dismisses() {
        let config = Config {
            selected_filter: FilterName::A3,
            ..Config::default()
        };
        let mut app = AppModel::with_drawer_open(config.clone(), ContextPage::Filters);

        let _ = app.handle_select_filter(FilterName::A3);

        assert_eq!(app.config, config);
        assert!(!app.core.window.show_context);
        assert_eq!(app.preview.generation, 0);
    }

    #[test]
    fn test_toggle_effect_keeps_drawer_open() {
        let mut app = AppModel::with_drawer_open(Config::default(), ContextPage::Effects);

        let _ = app.handle_toggle_effect(FxName::Grain);
        assert_eq!(app.config.enabled_effects, vec![FxName::Grain]);
        assert!(app.core.window.show_context);

        let _ = app.handle_toggle_effect(FxName::Grain);
        assert!(app.config.enabled_effects.is_empty());
    }

    #[test]
    fn test_clear_effects_switches_everything_off() {
        let config = Config {
            enabled_effects: vec![FxName::LightLeaks, FxName::Grain],
            ..Config::default()
        };
        let mut app = AppModel::with_drawer_open(config, ContextPage::Effects);

        let _ = app.handle_clear_effects();

        assert!(app.config.enabled_effects.is_empty());
    }
}
