// SPDX-License-Identifier: MPL-2.0
//! Clip-span computation.
//!
//! Each layer's visible region is a horizontal span derived from the divider
//! positions: the first layer paints the full axis, every interior layer
//! paints between its two adjacent dividers, and the last layer paints from
//! its left divider to the right edge. Spans are recomputed whenever any
//! divider moves; later layers paint over earlier ones.

/// Horizontal span of a layer, in percent of the comparator width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipSpan {
    pub start: f32,
    pub end: f32,
}

impl ClipSpan {
    /// Span width in percent.
    #[must_use]
    pub fn width(self) -> f32 {
        (self.end - self.start).max(0.0)
    }

    /// Midpoint of the span, in percent.
    #[must_use]
    pub fn center(self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

/// Paint spans for a stack with `positions.len() + 1` layers.
#[must_use]
pub fn clip_spans(positions: &[f32]) -> Vec<ClipSpan> {
    let layer_count = positions.len() + 1;

    (0..layer_count)
        .map(|index| {
            if index == 0 {
                ClipSpan {
                    start: 0.0,
                    end: 100.0,
                }
            } else if index == layer_count - 1 {
                ClipSpan {
                    start: positions[index - 1],
                    end: 100.0,
                }
            } else {
                ClipSpan {
                    start: positions[index - 1],
                    end: positions[index],
                }
            }
        })
        .collect()
}

/// Spans that each layer ultimately owns on screen, i.e. with the overpaint
/// of later layers removed. Useful for hit-testing labels.
#[must_use]
pub fn visible_spans(positions: &[f32]) -> Vec<ClipSpan> {
    let layer_count = positions.len() + 1;

    (0..layer_count)
        .map(|index| {
            let start = if index == 0 { 0.0 } else { positions[index - 1] };
            let end = if index == layer_count - 1 {
                100.0
            } else {
                positions[index]
            };
            ClipSpan { start, end }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_layer_spans() {
        let spans = clip_spans(&[50.0]);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], ClipSpan { start: 0.0, end: 100.0 });
        assert_eq!(spans[1], ClipSpan { start: 50.0, end: 100.0 });
    }

    #[test]
    fn interior_layers_clip_between_adjacent_dividers() {
        let spans = clip_spans(&[25.0, 75.0]);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0], ClipSpan { start: 0.0, end: 100.0 });
        assert_eq!(spans[1], ClipSpan { start: 25.0, end: 75.0 });
        assert_eq!(spans[2], ClipSpan { start: 75.0, end: 100.0 });
    }

    #[test]
    fn visible_spans_partition_the_axis() {
        let spans = visible_spans(&[25.0, 75.0]);
        assert_eq!(spans[0], ClipSpan { start: 0.0, end: 25.0 });
        assert_eq!(spans[1], ClipSpan { start: 25.0, end: 75.0 });
        assert_eq!(spans[2], ClipSpan { start: 75.0, end: 100.0 });

        let total: f32 = spans.iter().map(|s| s.width()).sum();
        assert!((total - 100.0).abs() < 0.001);
    }

    #[test]
    fn span_center_and_width() {
        let span = ClipSpan { start: 20.0, end: 60.0 };
        assert!((span.width() - 40.0).abs() < f32::EPSILON);
        assert!((span.center() - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    fn collapsed_span_has_zero_width() {
        let span = ClipSpan { start: 60.0, end: 60.0 };
        assert!(span.width().abs() < f32::EPSILON);
    }
}
