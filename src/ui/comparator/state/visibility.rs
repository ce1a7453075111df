// SPDX-License-Identifier: MPL-2.0
//! One-shot viewport visibility observer.
//!
//! Subscribes to "visible fraction crossed a threshold" and unsubscribes
//! after the first delivery, so viewport-triggered effects cannot replay.

use iced::Rectangle;

/// Fraction of the widget that must be visible before the observer fires.
pub const DEFAULT_THRESHOLD: f32 = 0.3;

/// Delivers at most one threshold crossing, then stays disconnected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityObserver {
    threshold: f32,
    delivered: bool,
}

impl VisibilityObserver {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            delivered: false,
        }
    }

    /// Feeds a visibility fraction in [0, 1]. Returns `true` exactly once,
    /// the first time the fraction reaches the threshold.
    pub fn observe(&mut self, fraction: f32) -> bool {
        if self.delivered || fraction < self.threshold {
            return false;
        }
        self.delivered = true;
        true
    }

    /// Whether the single delivery already happened.
    #[must_use]
    pub fn is_disconnected(&self) -> bool {
        self.delivered
    }

    /// Marks the observer as already delivered without firing it.
    pub fn disconnect(&mut self) {
        self.delivered = true;
    }
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Fraction of `bounds` that lies inside a viewport spanning
/// `[0, viewport_height]` vertically.
///
/// The comparator fills the window horizontally, so only vertical overlap
/// matters.
#[must_use]
pub fn visible_fraction(bounds: Rectangle, viewport_height: f32) -> f32 {
    if bounds.height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }

    let top = bounds.y.max(0.0);
    let bottom = (bounds.y + bounds.height).min(viewport_height);
    ((bottom - top).max(0.0) / bounds.height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(y: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 800.0,
            height,
        }
    }

    #[test]
    fn fires_once_at_threshold() {
        let mut observer = VisibilityObserver::new(0.3);
        assert!(!observer.observe(0.1));
        assert!(observer.observe(0.3));
        assert!(observer.is_disconnected());
    }

    #[test]
    fn never_fires_twice() {
        let mut observer = VisibilityObserver::default();
        assert!(observer.observe(1.0));
        assert!(!observer.observe(1.0));
        assert!(!observer.observe(0.0));
        assert!(!observer.observe(1.0));
    }

    #[test]
    fn disconnect_suppresses_delivery() {
        let mut observer = VisibilityObserver::default();
        observer.disconnect();
        assert!(!observer.observe(1.0));
    }

    #[test]
    fn threshold_is_clamped_to_unit_range() {
        let mut observer = VisibilityObserver::new(7.0);
        assert!(observer.observe(1.0));
    }

    #[test]
    fn fully_on_screen_widget_is_fully_visible() {
        let fraction = visible_fraction(bounds(100.0, 400.0), 700.0);
        assert!((fraction - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn widget_below_the_fold_is_invisible() {
        let fraction = visible_fraction(bounds(900.0, 400.0), 700.0);
        assert!(fraction.abs() < f32::EPSILON);
    }

    #[test]
    fn partially_scrolled_widget_reports_its_overlap() {
        // Widget spans 600..1000 in a 700px viewport: 100 of 400 visible.
        let fraction = visible_fraction(bounds(600.0, 400.0), 700.0);
        assert!((fraction - 0.25).abs() < 0.001);
    }

    #[test]
    fn widget_scrolled_past_the_top_counts_the_remainder() {
        // Widget spans -300..100: 100 of 400 visible.
        let fraction = visible_fraction(bounds(-300.0, 400.0), 700.0);
        assert!((fraction - 0.25).abs() < 0.001);
    }

    #[test]
    fn degenerate_sizes_yield_zero() {
        assert_eq!(visible_fraction(bounds(0.0, 0.0), 700.0), 0.0);
        assert_eq!(visible_fraction(bounds(0.0, 400.0), 0.0), 0.0);
    }
}
