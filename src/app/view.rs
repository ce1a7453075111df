// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the screen matching the current application state: the empty
//! state, a loading notice, the comparator, or the configuration-error card.

use super::{App, Message, Screen};
use crate::ui::comparator;
use crate::ui::components::{empty_state, error_display};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    match &app.screen {
        Screen::Empty => empty_state::view(&app.i18n, Message::OpenFileDialog),
        Screen::Loading => loading(app),
        Screen::Failed(error) => error_display::view(&app.i18n, error, Message::OpenFileDialog),
        Screen::Compare(state) => compare(app, state),
    }
}

fn loading(app: &App) -> Element<'_, Message> {
    let notice = Text::new(app.i18n.tr("loading-layers"))
        .size(typography::TITLE_SM)
        .color(theme::muted_text_color());

    Container::new(notice)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn compare<'a>(app: &'a App, state: &'a comparator::State) -> Element<'a, Message> {
    let content = state
        .view(comparator::ViewContext {
            i18n: &app.i18n,
            height: app.config.compare_height().value(),
            viewport_height: app.window_height,
        })
        .map(Message::Comparator);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}
