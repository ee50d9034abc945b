// SPDX-License-Identifier: GPL-3.0-only

//! Toggle cell shared by the filter picker and the effects panel
//!
//! A cell shows a leading visual (thumbnail or icon), a label and an
//! ON/OFF indicator. Its look is a pure function of the selection flag and
//! the active theme palette, evaluated on every draw so theme changes apply
//! without extra bookkeeping.

use crate::app::state::Message;
use crate::constants::ui;
use cosmic::Element;
use cosmic::iced::{Alignment, Background, Border, Color, Length};
use cosmic::widget;

/// Selection flag of one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCellState {
    is_selected: bool,
}

impl FilterCellState {
    pub fn new(is_selected: bool) -> Self {
        Self { is_selected }
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Flip the selection flag
    pub fn toggle(&mut self) {
        self.is_selected = !self.is_selected;
    }

    /// Back to OFF, as when the cell is reused for other content
    pub fn reset(&mut self) {
        self.is_selected = false;
    }

    /// "ON" or "OFF"
    pub fn indicator(&self) -> &'static str {
        indicator_text(self.is_selected)
    }

    /// Current look for this palette
    pub fn style(&self, palette: &CellPalette) -> CellStyle {
        cell_style(self.is_selected, palette)
    }
}

/// Colours a cell draws with, per theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPalette {
    /// Foreground of a selected cell
    pub primary: Color,
    /// Foreground of an unselected cell
    pub muted: Color,
    pub selected_background: Color,
    pub idle_background: Color,
}

impl CellPalette {
    pub const LIGHT: CellPalette = CellPalette {
        primary: Color::BLACK,
        muted: Color::from_rgb(0.820, 0.820, 0.839),
        selected_background: Color::from_rgb(0.898, 0.898, 0.918),
        idle_background: Color::from_rgba(0.949, 0.949, 0.969, 0.2),
    };

    pub const DARK: CellPalette = CellPalette {
        primary: Color::WHITE,
        muted: Color::from_rgb(0.227, 0.227, 0.235),
        selected_background: Color::from_rgb(0.173, 0.173, 0.180),
        idle_background: Color::from_rgba(0.110, 0.110, 0.118, 0.2),
    };

    pub fn for_dark(is_dark: bool) -> Self {
        if is_dark { Self::DARK } else { Self::LIGHT }
    }

    pub fn for_theme(theme: &cosmic::Theme) -> Self {
        Self::for_dark(theme.cosmic().is_dark)
    }
}

/// Resolved look of a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub icon_tint: Color,
    pub label_color: Color,
    pub background: Color,
    pub indicator: &'static str,
}

fn indicator_text(is_selected: bool) -> &'static str {
    if is_selected { "ON" } else { "OFF" }
}

/// Look of a cell given its selection flag
pub fn cell_style(is_selected: bool, palette: &CellPalette) -> CellStyle {
    if is_selected {
        CellStyle {
            icon_tint: palette.primary,
            label_color: palette.primary,
            background: palette.selected_background,
            indicator: indicator_text(true),
        }
    } else {
        CellStyle {
            icon_tint: palette.muted,
            label_color: palette.muted,
            background: palette.idle_background,
            indicator: indicator_text(false),
        }
    }
}

/// Build a square cell button
///
/// `leading` sits at the top left, the label and indicator at the bottom.
pub fn cell_button<'a>(
    leading: Element<'a, Message>,
    label: String,
    state: FilterCellState,
    on_press: Message,
) -> Element<'a, Message> {
    let leading = widget::container(leading).style(move |theme: &cosmic::Theme| {
        widget::container::Style {
            text_color: Some(state.style(&CellPalette::for_theme(theme)).icon_tint),
            ..Default::default()
        }
    });

    let indicator = widget::text(state.indicator())
        .size(ui::INDICATOR_TEXT_SIZE)
        .font(cosmic::font::bold());

    let body = widget::column()
        .push(leading)
        .push(widget::vertical_space())
        .push(widget::text(label).size(13))
        .push(widget::vertical_space().height(Length::Fixed(4.0)))
        .push(indicator)
        .align_x(Alignment::Start)
        .padding(10)
        .width(Length::Fill)
        .height(Length::Fill);

    let framed = widget::container(body)
        .width(Length::Fixed(ui::CELL_SIZE))
        .height(Length::Fixed(ui::CELL_SIZE))
        .style(move |theme: &cosmic::Theme| {
            let style = state.style(&CellPalette::for_theme(theme));
            widget::container::Style {
                background: Some(Background::Color(style.background)),
                text_color: Some(style.label_color),
                border: Border {
                    radius: [ui::CELL_RADIUS; 4].into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

    widget::button::custom(framed)
        .on_press(on_press)
        .padding(0)
        .class(cosmic::theme::Button::Image)
        .into()
}

/// Lay cells out in rows of `ui::GRID_COLUMNS`
pub fn grid<'a>(cells: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let spacing = ui::GRID_SPACING as u16;
    let mut rows = widget::column().spacing(spacing);
    let mut cells = cells.into_iter().peekable();

    while cells.peek().is_some() {
        let mut row = widget::row().spacing(spacing);
        for cell in cells.by_ref().take(ui::GRID_COLUMNS) {
            row = row.push(cell);
        }
        rows = rows.push(row);
    }

    rows.into()
}
