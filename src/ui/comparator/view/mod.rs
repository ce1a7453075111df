// SPDX-License-Identifier: MPL-2.0
//! Comparator view composition.

mod controls;

use super::overlay::InteractionOverlay;
use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::theme;
use iced::widget::{container, image, Canvas, Column, Stack};
use iced::{ContentFit, Element, Length};

/// Context required to render the comparator.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Height of the comparison surface in logical pixels.
    pub height: f32,
    /// Window height, forwarded to the overlay's visibility probe.
    pub viewport_height: f32,
}

/// Renders the composite, the interaction overlay, and the range controls.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let labels: Vec<String> = (0..state.stack().len())
        .map(|index| state.stack().label_or(index, &ctx.i18n.tr("layer-fallback")))
        .collect();

    let composite = image(state.composite().handle.clone())
        .content_fit(ContentFit::Fill)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.height));

    let overlay = Canvas::new(InteractionOverlay {
        positions: state.positions().to_vec(),
        labels: labels.clone(),
        dragging: state.active_divider(),
        animating: state.animating_divider(),
        viewport_height: ctx.viewport_height,
    })
    .width(Length::Fill)
    .height(Length::Fixed(ctx.height));

    let compare_surface = container(Stack::new().push(composite).push(overlay))
        .style(theme::compare_surface_style(theme::compare_surface_color()));

    Column::new()
        .spacing(spacing::MD)
        .push(compare_surface)
        .push(controls::view(state, &labels, ctx.i18n))
        .into()
}
