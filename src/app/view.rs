// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Developed preview on top, bottom bar with open, current filter and export.

use crate::app::state::{AppModel, ContextPage, Message};
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, ContentFit, Length};
use cosmic::widget::{self, icon};

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let preview = widget::container(self.build_preview())
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            });

        let mut content = widget::column().push(preview);

        if let Some(status) = &self.status {
            content = content.push(
                widget::container(widget::text::caption(status.as_str()))
                    .padding([4, 12])
                    .width(Length::Fill),
            );
        }

        content
            .push(self.build_bottom_bar())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn build_preview(&self) -> Element<'_, Message> {
        if let Some(handle) = &self.preview.image {
            return widget::image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
        }

        let message = if self.preview.developing {
            fl!("developing")
        } else {
            fl!("no-photo")
        };

        let mut placeholder = widget::column()
            .push(
                widget::container(widget::text::body(message)).style(|_theme| {
                    widget::container::Style {
                        text_color: Some(Color::WHITE),
                        ..Default::default()
                    }
                }),
            )
            .spacing(12)
            .align_x(Alignment::Center);

        if self.photo.is_none() {
            placeholder = placeholder
                .push(widget::button::suggested(fl!("open-photo")).on_press(Message::OpenPhoto));
        }

        placeholder.into()
    }

    fn build_bottom_bar(&self) -> Element<'_, Message> {
        let has_photo = self.photo.is_some();

        let open_button = widget::button::icon(icon::from_name("document-open-symbolic"))
            .on_press(Message::OpenPhoto)
            .class(cosmic::theme::Button::Icon);

        let filter_button = widget::button::text(self.config.selected_filter.label())
            .on_press(Message::ToggleContextPage(ContextPage::Filters))
            .class(cosmic::theme::Button::Text);

        let exports_button =
            widget::button::standard(fl!("open-exports")).on_press(Message::OpenExports);

        let export_button = widget::button::suggested(fl!("export-photo"))
            .on_press_maybe((has_photo && !self.is_exporting).then_some(Message::ExportPhoto));

        widget::row()
            .push(open_button)
            .push(widget::horizontal_space())
            .push(filter_button)
            .push(widget::horizontal_space())
            .push(exports_button)
            .push(export_button)
            .spacing(8)
            .padding([8, 12])
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .into()
    }
}
