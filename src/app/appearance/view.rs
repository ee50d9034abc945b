// SPDX-License-Identifier: GPL-3.0-only

//! Appearance page view

use super::AppearanceList;
use crate::app::state::{AppModel, ContextPage, Message};
use crate::config::AppTheme;
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::{Alignment, Length};
use cosmic::widget;

fn theme_label(theme: AppTheme) -> String {
    match theme {
        AppTheme::System => fl!("appearance-system"),
        AppTheme::Light => fl!("appearance-light"),
        AppTheme::Dark => fl!("appearance-dark"),
    }
}

impl AppModel {
    /// Build the appearance page as a COSMIC context drawer
    pub fn appearance_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let list = AppearanceList::new(self.config.app_theme);

        let mut section = widget::settings::section();
        for theme in list.options() {
            let checkmark: Element<'_, Message> = if list.is_checked(theme) {
                widget::icon::from_name("object-select-symbolic")
                    .size(16)
                    .symbolic(true)
                    .into()
            } else {
                widget::Space::new(Length::Fixed(16.0), Length::Fixed(16.0)).into()
            };

            let row = widget::row()
                .push(widget::text::body(theme_label(theme)))
                .push(widget::horizontal_space())
                .push(checkmark)
                .align_y(Alignment::Center)
                .width(Length::Fill);

            section = section.add(
                widget::button::custom(row)
                    .on_press(Message::SetAppTheme(theme))
                    .padding([8, 12])
                    .width(Length::Fill)
                    .class(cosmic::theme::Button::Text),
            );
        }

        let content: Element<'_, Message> = widget::settings::view_column(vec![section.into()]).into();

        context_drawer::context_drawer(content, Message::ToggleContextPage(ContextPage::Appearance))
            .title(fl!("appearance-title"))
    }
}
