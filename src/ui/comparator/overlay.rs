// SPDX-License-Identifier: MPL-2.0
//! Interaction overlay for the comparator.
//!
//! A canvas program stacked above the composite image. It draws divider
//! lines, handles, and layer label chips, translates pointer events into
//! comparator messages, and reports the widget's visible fraction so the
//! entrance demonstration can trigger on first visibility.

use crate::domain::slider::visible_spans;
use crate::ui::comparator::state::visible_fraction;
use crate::ui::comparator::{Message, OverlayMessage};
use crate::ui::design_tokens::{border, sizing, typography};
use crate::ui::theme;

use iced::widget::canvas::{Frame, Path, Stroke, Text};
use iced::{mouse, touch, Point, Rectangle, Size};

/// Minimum fraction change worth republishing.
const PROBE_EPSILON: f32 = 0.01;

/// Canvas program used to draw and interact with the divider overlay.
pub struct InteractionOverlay {
    pub positions: Vec<f32>,
    pub labels: Vec<String>,
    pub dragging: Option<usize>,
    pub animating: Option<usize>,
    /// Window height, used to derive the widget's visible fraction.
    pub viewport_height: f32,
}

/// Per-widget memory for the visibility probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeMemory {
    last_fraction: Option<f32>,
}

impl InteractionOverlay {
    /// X coordinate of divider `index` within `bounds`.
    fn divider_x(&self, index: usize, bounds: Rectangle) -> f32 {
        self.positions[index] / 100.0 * bounds.width
    }

    /// Divider handle under `position` (relative to the widget), if any.
    fn hit_handle(&self, position: Point, bounds: Rectangle) -> Option<usize> {
        let center_y = bounds.height / 2.0;
        let hit_radius_sq =
            sizing::DIVIDER_HANDLE_HIT_RADIUS * sizing::DIVIDER_HANDLE_HIT_RADIUS;

        let mut best: Option<(usize, f32)> = None;
        for index in 0..self.positions.len() {
            let dx = position.x - self.divider_x(index, bounds);
            let dy = position.y - center_y;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq <= hit_radius_sq && best.is_none_or(|(_, d)| dist_sq < d) {
                best = Some((index, dist_sq));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Horizontal position of a global point, as a clamped percentage.
    fn percent_at(&self, global: Point, bounds: Rectangle) -> f32 {
        ((global.x - bounds.x) / bounds.width * 100.0).clamp(0.0, 100.0)
    }

    /// Publishes the visible fraction when it materially changed.
    fn probe(
        &self,
        state: &mut ProbeMemory,
        bounds: Rectangle,
    ) -> Option<iced::widget::Action<Message>> {
        let fraction = visible_fraction(bounds, self.viewport_height);
        let changed = state
            .last_fraction
            .is_none_or(|last| (last - fraction).abs() > PROBE_EPSILON);
        if !changed {
            return None;
        }
        state.last_fraction = Some(fraction);
        Some(iced::widget::Action::publish(Message::Overlay(
            OverlayMessage::VisibilityChanged { fraction },
        )))
    }
}

impl iced::widget::canvas::Program<Message> for InteractionOverlay {
    type State = ProbeMemory;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    if let Some(index) = self.hit_handle(position, bounds) {
                        return Some(
                            Action::publish(Message::Overlay(OverlayMessage::HandleGrabbed {
                                index,
                            }))
                            .and_capture(),
                        );
                    }
                }
                None
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(*position) {
                    let relative = Point::new(position.x - bounds.x, position.y - bounds.y);
                    if let Some(index) = self.hit_handle(relative, bounds) {
                        return Some(
                            Action::publish(Message::Overlay(OverlayMessage::HandleGrabbed {
                                index,
                            }))
                            .and_capture(),
                        );
                    }
                }
                None
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // Keep following the pointer outside the widget while a drag
                // is active; the position is clamped to the axis.
                if self.dragging.is_some() {
                    if let Some(global) = cursor.position() {
                        return Some(
                            Action::publish(Message::Overlay(OverlayMessage::PointerMoved {
                                percent: self.percent_at(global, bounds),
                            }))
                            .and_capture(),
                        );
                    }
                }
                self.probe(state, bounds)
            }
            iced::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if self.dragging.is_some() {
                    return Some(
                        Action::publish(Message::Overlay(OverlayMessage::PointerMoved {
                            percent: self.percent_at(*position, bounds),
                        }))
                        .and_capture(),
                    );
                }
                None
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Mouse(mouse::Event::CursorLeft)
            | iced::Event::Touch(touch::Event::FingerLifted { .. })
            | iced::Event::Touch(touch::Event::FingerLost { .. }) => {
                if self.dragging.is_some() {
                    return Some(
                        Action::publish(Message::Overlay(OverlayMessage::PointerReleased))
                            .and_capture(),
                    );
                }
                None
            }
            iced::Event::Window(iced::window::Event::RedrawRequested(_))
            | iced::Event::Window(iced::window::Event::Resized(_))
            | iced::Event::Mouse(mouse::Event::WheelScrolled { .. }) => {
                self.probe(state, bounds)
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<iced::widget::canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center_y = bounds.height / 2.0;

        // Label chips, one per layer, centered over the span the layer owns.
        for (index, span) in visible_spans(&self.positions).iter().enumerate() {
            let Some(label) = self.labels.get(index) else {
                continue;
            };
            if span.width() <= 0.0 {
                continue;
            }

            let chip_width = label.len() as f32 * typography::CAPTION * 0.62
                + sizing::LABEL_CHIP_PADDING * 2.0;
            let center_x = span.center() / 100.0 * bounds.width;
            let chip_x = (center_x - chip_width / 2.0)
                .clamp(0.0, (bounds.width - chip_width).max(0.0));

            let chip = Path::rectangle(
                Point::new(chip_x, sizing::LABEL_CHIP_PADDING),
                Size::new(chip_width, sizing::LABEL_CHIP_HEIGHT),
            );
            frame.fill(&chip, theme::label_chip_background());

            frame.fill_text(Text {
                content: label.clone(),
                position: Point::new(
                    chip_x + sizing::LABEL_CHIP_PADDING,
                    sizing::LABEL_CHIP_PADDING + (sizing::LABEL_CHIP_HEIGHT - typography::CAPTION) / 2.0,
                ),
                color: theme::label_chip_text_color(),
                size: typography::CAPTION.into(),
                ..Text::default()
            });
        }

        // Divider lines and handles.
        for index in 0..self.positions.len() {
            let x = self.divider_x(index, bounds);
            let active = self.dragging == Some(index) || self.animating == Some(index);

            let line = Path::line(Point::new(x, 0.0), Point::new(x, bounds.height));
            frame.stroke(
                &line,
                Stroke::default()
                    .with_width(sizing::DIVIDER_LINE_WIDTH)
                    .with_color(theme::divider_line_color()),
            );

            let radius = sizing::DIVIDER_HANDLE_DIAMETER / 2.0;
            let center = Point::new(x, center_y);
            let handle = Path::circle(center, radius);
            let fill = if active {
                theme::divider_handle_active_color()
            } else {
                theme::divider_handle_color()
            };
            frame.fill(&handle, fill);
            frame.stroke(
                &handle,
                Stroke::default()
                    .with_width(border::WIDTH_SM)
                    .with_color(theme::divider_handle_border_color()),
            );

            // Grip mark hinting at the drag axis.
            let grip = Path::line(
                Point::new(x - radius * 0.45, center_y),
                Point::new(x + radius * 0.45, center_y),
            );
            frame.stroke(
                &grip,
                Stroke::default()
                    .with_width(border::WIDTH_MD)
                    .with_color(theme::divider_handle_border_color()),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging.is_some() {
            return mouse::Interaction::Grabbing;
        }
        if let Some(position) = cursor.position_in(bounds) {
            if self.hit_handle(position, bounds).is_some() {
                return mouse::Interaction::Grab;
            }
        }
        mouse::Interaction::default()
    }
}
