// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! This module handles all application messages by routing them to focused handler methods.
//! The main `update()` function acts as a dispatcher, while specific handlers are implemented
//! in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: context drawer pages, external links
//! - `handlers::photo`: opening, developing and exporting photos
//! - `handlers::filters`: filter selection and effect toggles
//! - `handlers::settings`: appearance and config updates

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Photo =====
            Message::OpenPhoto => self.handle_open_photo(),
            Message::PhotoLoaded(result) => self.handle_photo_loaded(result),
            Message::PreviewReady(generation, result) => {
                self.handle_preview_ready(generation, result)
            }
            Message::ThumbnailsReady(photo_id, thumbnails) => {
                self.handle_thumbnails_ready(photo_id, thumbnails)
            }
            Message::ExportPhoto => self.handle_export_photo(),
            Message::PhotoExported(result) => self.handle_photo_exported(result),
            Message::OpenExports => self.handle_open_exports(),

            // ===== Filters & Effects =====
            Message::SelectFilter(filter) => self.handle_select_filter(filter),
            Message::ToggleEffect(fx) => self.handle_toggle_effect(fx),
            Message::ClearEffects => self.handle_clear_effects(),

            // ===== Settings =====
            Message::SetAppTheme(theme) => self.handle_set_app_theme(theme),
            Message::UpdateConfig(config) => self.handle_update_config(config),
        }
    }
}
