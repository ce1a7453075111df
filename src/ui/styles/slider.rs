// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.
//!
//! Styles the numeric range controls that mirror the divider positions.

use crate::ui::design_tokens::palette;
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Style for a divider range control.
///
/// Brand-colored rail with a round handle, matching the handles drawn on
/// the comparator surface. Adapts to Light/Dark theme.
pub fn divider() -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |theme: &Theme, status: slider::Status| {
        let is_light = matches!(theme, Theme::Light);

        let rail_bg = if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        };

        let handle_bg = match status {
            slider::Status::Dragged => palette::PRIMARY_600,
            slider::Status::Hovered => palette::PRIMARY_400,
            _ => palette::PRIMARY_500,
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (
                    Background::Color(palette::PRIMARY_500),
                    Background::Color(rail_bg),
                ),
                width: 4.0,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 2.0.into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius: 8.0 },
                background: Background::Color(handle_bg),
                border_width: 1.0,
                border_color: palette::PRIMARY_700,
            },
        }
    }
}
