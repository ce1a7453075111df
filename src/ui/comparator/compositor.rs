// SPDX-License-Identifier: MPL-2.0
//! CPU wipe compositor.
//!
//! Assembles the frame shown by the comparator: every layer paints its clip
//! span over the layers below it, so column ownership follows the divider
//! positions. The output is rebuilt whenever a divider moves.

use crate::domain::slider::{clip_spans, LayerStack};
use crate::media::ImageData;

const BYTES_PER_PIXEL: usize = 4;

/// Converts a percentage into a column index within `width`.
fn column(percent: f32, width: u32) -> usize {
    let col = (percent / 100.0 * width as f32).round();
    (col.max(0.0) as usize).min(width as usize)
}

/// Composites the stack at the given divider positions into a new frame.
///
/// # Panics
///
/// Panics if `positions.len() + 1` does not match the stack's layer count;
/// the comparator state guarantees this pairing.
#[must_use]
pub fn composite(stack: &LayerStack, positions: &[f32]) -> ImageData {
    assert_eq!(
        positions.len() + 1,
        stack.len(),
        "divider count must match layer count"
    );

    let width = stack.width();
    let height = stack.height();
    let row_bytes = width as usize * BYTES_PER_PIXEL;

    // Layer 0 paints the full axis; later layers overpaint their spans.
    let mut pixels = stack.get(0).expect("validated stack").image().rgba_bytes().to_vec();

    for (index, span) in clip_spans(positions).iter().enumerate().skip(1) {
        let start = column(span.start, width) * BYTES_PER_PIXEL;
        let end = column(span.end, width) * BYTES_PER_PIXEL;
        if start >= end {
            continue;
        }

        let source = stack.get(index).expect("validated stack").image().rgba_bytes();
        for row in 0..height as usize {
            let offset = row * row_bytes;
            pixels[offset + start..offset + end]
                .copy_from_slice(&source[offset + start..offset + end]);
        }
    }

    ImageData::from_rgba(width, height, pixels)
}
