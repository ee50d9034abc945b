// SPDX-License-Identifier: GPL-3.0-only

//! Effects panel view

use super::EffectsPanel;
use crate::app::cell;
use crate::app::state::{AppModel, ContextPage, Message};
use crate::constants::ui;
use crate::filters::FxName;
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::Length;
use cosmic::widget;

/// Localized effect name
fn effect_label(fx: FxName) -> String {
    match fx {
        FxName::LightLeaks => fl!("fx-light-leaks"),
        FxName::Grain => fl!("fx-grain"),
    }
}

impl AppModel {
    /// Build the effects panel as a COSMIC context drawer
    pub fn effects_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let panel = EffectsPanel::new(&self.config.enabled_effects);

        let cells: Vec<Element<'_, Message>> = panel
            .cells()
            .iter()
            .map(|(fx, state)| {
                let icon = widget::icon::from_name(fx.icon_name())
                    .symbolic(true)
                    .size(ui::CELL_ICON_SIZE);
                cell::cell_button(
                    icon.into(),
                    effect_label(*fx),
                    *state,
                    Message::ToggleEffect(*fx),
                )
            })
            .collect();

        let clear_button = widget::button::standard(fl!("effects-clear")).on_press_maybe(
            (!panel.enabled().is_empty()).then_some(Message::ClearEffects),
        );

        let content: Element<'_, Message> = widget::column()
            .push(cell::grid(cells))
            .push(widget::vertical_space().height(Length::Fixed(ui::SECTION_SPACING)))
            .push(clear_button)
            .into();

        context_drawer::context_drawer(content, Message::ToggleContextPage(ContextPage::Effects))
            .title(fl!("effects-title"))
    }
}
