// SPDX-License-Identifier: GPL-3.0-only

//! Settings handlers
//!
//! Appearance selection and config persistence.

use crate::app::appearance::{AppearanceChange, AppearanceList};
use crate::app::state::{AppModel, Message};
use crate::config::{AppTheme, Config};
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{debug, error, info};

impl AppModel {
    // =========================================================================
    // Settings Handlers
    // =========================================================================

    /// Write the current config, logging instead of failing
    pub(crate) fn save_config(&self, what: &str) {
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, setting = what, "Failed to save setting");
        }
    }

    pub(crate) fn handle_update_config(&mut self, config: Config) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        let theme_changed = config.app_theme != self.config.app_theme;
        let develop_changed = config.selected_filter != self.config.selected_filter
            || config.enabled_effects != self.config.enabled_effects;
        self.config = config;

        let theme_task = if theme_changed {
            cosmic::command::set_theme(self.config.app_theme.theme())
        } else {
            Task::none()
        };
        let develop_task = if develop_changed {
            self.develop_preview()
        } else {
            Task::none()
        };
        Task::batch([theme_task, develop_task])
    }

    pub(crate) fn handle_set_app_theme(&mut self, theme: AppTheme) -> Task<cosmic::Action<Message>> {
        let mut list = AppearanceList::new(self.config.app_theme);
        let AppearanceChange { theme, changed } = list.select(theme);
        self.close_context_drawer();

        if !changed {
            debug!(?theme, "Appearance already selected");
            return Task::none();
        }

        info!(?theme, value = u8::from(theme), "Setting application theme");
        self.config.app_theme = theme;
        self.save_config("app_theme");

        cosmic::command::set_theme(theme.theme())
    }
}
