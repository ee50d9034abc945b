// SPDX-License-Identifier: GPL-3.0-only

//! Filter picker UI view
//!
//! Grid-style filter selector using COSMIC context drawer with thumbnails of
//! the loaded photo, or colour swatches when no photo is open.

use super::FilterList;
use crate::app::cell;
use crate::app::state::{AppModel, ContextPage, Message};
use crate::constants::ui;
use crate::filters::FilterName;
use crate::filters::lut::ColorGrade;
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::{Background, Border, Color, Length};
use cosmic::widget;

/// Edge of the thumbnail or swatch inside a cell
const LEADING_SIZE: f32 = ui::CELL_SIZE * 0.42;

impl AppModel {
    /// Build the filter picker as a COSMIC context drawer
    pub fn filters_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let list = FilterList::new(self.config.selected_filter);

        let mut sections = widget::column().spacing(ui::SECTION_SPACING as u16);
        for (collection, cells) in list.sections() {
            let cells: Vec<Element<'_, Message>> = cells
                .into_iter()
                .map(|(name, state)| {
                    cell::cell_button(
                        self.filter_leading(name),
                        name.label(),
                        state,
                        Message::SelectFilter(name),
                    )
                })
                .collect();

            sections = sections.push(
                widget::column()
                    .push(widget::text(collection.title()).size(16).font(cosmic::font::bold()))
                    .push(widget::vertical_space().height(Length::Fixed(8.0)))
                    .push(cell::grid(cells)),
            );
        }

        let content: Element<'_, Message> = sections.into();

        context_drawer::context_drawer(content, Message::ToggleContextPage(ContextPage::Filters))
            .title(fl!("filters-title"))
    }

    /// Thumbnail of the photo through this filter, or a swatch of its grade
    fn filter_leading(&self, name: FilterName) -> Element<'_, Message> {
        if let Some(handle) = self.preview.thumbnails.get(&name) {
            return widget::container(
                widget::image(handle.clone()).content_fit(cosmic::iced::ContentFit::Cover),
            )
            .width(Length::Fixed(LEADING_SIZE))
            .height(Length::Fixed(LEADING_SIZE))
            .into();
        }

        let [r, g, b] = ColorGrade::for_filter(name).swatch();
        let color = Color::from_rgb(r, g, b);
        widget::container(widget::Space::new(
            Length::Fixed(LEADING_SIZE),
            Length::Fixed(LEADING_SIZE),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: [6.0; 4].into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
    }
}
