// SPDX-License-Identifier: MPL-2.0
//! Configuration-error view.
//!
//! Shown instead of the comparator when the layer stack cannot be built
//! (fewer than two layers, unreadable image). The raw developer-facing
//! diagnostic is displayed under the localized summary; there is no retry
//! loop beyond opening a different set of images.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, container, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Localized summary key for an error.
fn summary_key(error: &Error) -> &'static str {
    match error {
        Error::Io(_) => "error-io",
        Error::Image(_) => "error-image",
        Error::Config(_) => "error-config",
        Error::Stack(stack) => stack.i18n_key(),
    }
}

/// Renders the error card; `on_open` is emitted by the try-again button.
pub fn view<'a, Message: Clone + 'a>(
    i18n: &I18n,
    error: &Error,
    on_open: Message,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("error-title"))
        .size(typography::TITLE_LG)
        .color(theme::error_text_color());

    let summary = Text::new(i18n.tr(summary_key(error))).size(typography::BODY);

    // Developer-facing diagnostic, untranslated on purpose.
    let detail = Text::new(error.to_string())
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    let open_button = button(Text::new(i18n.tr("error-try-again")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(on_open);

    let card = container(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(summary)
            .push(detail)
            .push(open_button),
    )
    .padding(spacing::XL)
    .style(styles::container::panel);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
