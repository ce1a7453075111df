// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the comparator overlay and screens.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, GRAY_900, WHITE},
};
use iced::widget::container;
use iced::{Color, Theme};

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

// ============================================================================
// Comparator Overlay Styles
// ============================================================================
// Shared colors for the divider lines, handles, and label chips drawn over
// the composite image, consistent across light and dark surfaces.

/// Color of a divider line over the composite.
pub fn divider_line_color() -> Color {
    WHITE
}

/// Fill color for divider handles.
pub fn divider_handle_color() -> Color {
    WHITE
}

/// Fill color for the handle currently being dragged or demonstrated.
pub fn divider_handle_active_color() -> Color {
    palette::PRIMARY_400
}

/// Border color for divider handles.
pub fn divider_handle_border_color() -> Color {
    BLACK
}

/// Background of the label chips along the top edge.
pub fn label_chip_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Text color inside label chips.
pub fn label_chip_text_color() -> Color {
    WHITE
}

/// Background behind the composite while layers decode.
pub fn compare_surface_color() -> Color {
    GRAY_900
}

/// Style for the surface hosting the comparator.
pub fn compare_surface_style(background_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(background_color)),
        ..Default::default()
    }
}
