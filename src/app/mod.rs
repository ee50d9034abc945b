// SPDX-License-Identifier: GPL-3.0-only

//! Main application module for Kontax
//!
//! This module contains the application state, message handling and UI
//! rendering of the darkroom.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, ContextPage)
//! - `cell`: Toggle cell shared by the filter picker and effects panel
//! - `filter_picker`: Filter catalog grid
//! - `effects`: Effect toggles
//! - `appearance`: System / Light / Dark selection
//! - `handlers`: Message handlers by domain
//! - `view`: Main view rendering
//! - `update`: Message dispatch

pub mod appearance;
pub mod cell;
pub mod effects;
pub mod filter_picker;
mod handlers;
mod state;
mod update;
mod view;

use crate::config::{self, Config};
use crate::fl;
use cosmic::app::context_drawer;
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppModel, ContextPage, Message, PreviewState};
use tracing::info;

/// Header button toggling a context drawer page
fn page_button(icon_name: &'static str, page: ContextPage) -> Element<'static, Message> {
    widget::button::icon(widget::icon::from_name(icon_name))
        .on_press(Message::ToggleContextPage(page))
        .into()
}

const REPOSITORY: &str = "https://github.com/kontax-cam/kontax";
const APP_ICON: &[u8] =
    include_bytes!("../../resources/icons/hicolor/scalable/apps/io.github.kontax.Kontax.svg");

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.kontax.Kontax";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        let (config_handler, config) = config::load(Self::APP_ID);
        info!(
            theme = ?config.app_theme,
            filter = %config.selected_filter,
            effects = ?config.enabled_effects,
            "Configuration loaded"
        );

        let theme_task = cosmic::command::set_theme(config.app_theme.theme());

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            photo: None,
            photo_path: None,
            preview: PreviewState::default(),
            is_exporting: false,
            last_export_path: None,
            status: None,
        };

        (app, theme_task)
    }

    /// Window title follows the loaded photo
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let title = self
            .photo_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| fl!("app-title"));
        vec![widget::text::heading(title).into()]
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            page_button("image-filter-symbolic", ContextPage::Filters),
            page_button("applications-graphics-symbolic", ContextPage::Effects),
            page_button("preferences-desktop-appearance-symbolic", ContextPage::Appearance),
            page_button("help-about-symbolic", ContextPage::About),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Filters => self.filters_view(),
            ContextPage::Effects => self.effects_view(),
            ContextPage::Appearance => self.appearance_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
