// SPDX-License-Identifier: MPL-2.0
//! Numeric range controls mirroring the divider positions.
//!
//! One labeled control per divider; both the controls and the pointer drag
//! feed the same constraint solver, so the two stay in sync.

use super::super::{ControlMessage, Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{container, slider, Column, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(state: &'a State, labels: &[String], i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("controls-title")).size(typography::TITLE_SM));

    for (index, &position) in state.positions().iter().enumerate() {
        let left = labels.get(index).cloned().unwrap_or_default();
        let right = labels.get(index + 1).cloned().unwrap_or_default();

        let label = Text::new(format!("{left} \u{2194} {right}"))
            .size(typography::BODY)
            .color(theme::muted_text_color());

        let control = slider(0.0..=100.0, position, move |value| {
            Message::Control(ControlMessage::DividerInput { index, value })
        })
        .step(0.1)
        .style(styles::slider::divider());

        column = column.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(label)
                .push(control),
        );
    }

    container(column.width(Length::Fixed(sizing::CONTROL_COLUMN_WIDTH)))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}
