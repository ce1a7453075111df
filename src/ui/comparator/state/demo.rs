// SPDX-License-Identifier: MPL-2.0
//! Entrance demonstration state machine.
//!
//! When the comparator first becomes visible, each divider in order swings
//! right, swings left, then returns to its pre-animation position. Legs are
//! applied by direct assignment rather than through the constraint solver,
//! and the sequence runs to completion once started. The `Played` state is
//! terminal: the demonstration never replays for the lifetime of the widget.

use std::time::Duration;

/// Duration of one animation leg.
pub const LEG_DURATION: Duration = Duration::from_millis(400);

/// How far a divider swings from its origin, in percent.
pub const SWING_PERCENT: f32 = 15.0;

/// Ceiling for the outward swing.
pub const SWING_CAP: f32 = 90.0;

/// Floor for the inward swing.
pub const SWING_FLOOR: f32 = 10.0;

/// One leg of a divider's swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    Out,
    Back,
    Return,
}

/// Lifecycle of the demonstration: pending → playing → played, one-way.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Pending,
    Playing {
        divider: usize,
        leg: Leg,
        origin: f32,
    },
    Played,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSequence {
    phase: Phase,
}

impl DemoSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Pending,
        }
    }

    /// Begins the demonstration, applying the first leg to divider 0.
    ///
    /// Returns `false` when the sequence already played (or is playing) or
    /// there is nothing to animate.
    pub fn start(&mut self, positions: &mut [f32]) -> bool {
        if !matches!(self.phase, Phase::Pending) || positions.is_empty() {
            return false;
        }

        let origin = positions[0];
        positions[0] = swing_out(origin);
        self.phase = Phase::Playing {
            divider: 0,
            leg: Leg::Out,
            origin,
        };
        true
    }

    /// Applies the next leg on a timer tick.
    ///
    /// Returns `true` when the whole sequence just finished; the state is
    /// then `Played` and further ticks are ignored.
    pub fn advance(&mut self, positions: &mut [f32]) -> bool {
        let Phase::Playing {
            divider,
            leg,
            origin,
        } = self.phase
        else {
            return false;
        };

        match leg {
            Leg::Out => {
                positions[divider] = swing_back(origin);
                self.phase = Phase::Playing {
                    divider,
                    leg: Leg::Back,
                    origin,
                };
            }
            Leg::Back => {
                positions[divider] = origin;
                self.phase = Phase::Playing {
                    divider,
                    leg: Leg::Return,
                    origin,
                };
            }
            Leg::Return => {
                let next = divider + 1;
                if next >= positions.len() {
                    self.phase = Phase::Played;
                    return true;
                }
                let origin = positions[next];
                positions[next] = swing_out(origin);
                self.phase = Phase::Playing {
                    divider: next,
                    leg: Leg::Out,
                    origin,
                };
            }
        }

        false
    }

    /// Whether ticks are currently driving the sequence.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing { .. })
    }

    /// Whether the one-shot sequence already ran.
    #[must_use]
    pub fn has_played(&self) -> bool {
        matches!(self.phase, Phase::Played)
    }

    /// Divider currently mid-animation, for highlight rendering.
    #[must_use]
    pub fn animating_divider(&self) -> Option<usize> {
        match self.phase {
            Phase::Playing { divider, .. } => Some(divider),
            _ => None,
        }
    }
}

impl Default for DemoSequence {
    fn default() -> Self {
        Self::new()
    }
}

fn swing_out(origin: f32) -> f32 {
    (origin + SWING_PERCENT).min(SWING_CAP)
}

fn swing_back(origin: f32) -> f32 {
    (origin - SWING_PERCENT).max(SWING_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(demo: &mut DemoSequence, positions: &mut [f32]) -> usize {
        let mut ticks = 0;
        while demo.is_playing() {
            ticks += 1;
            assert!(ticks < 100, "sequence did not terminate");
            if demo.advance(positions) {
                break;
            }
        }
        ticks
    }

    #[test]
    fn new_sequence_is_pending() {
        let demo = DemoSequence::new();
        assert!(!demo.is_playing());
        assert!(!demo.has_played());
    }

    #[test]
    fn start_applies_first_outward_swing() {
        let mut demo = DemoSequence::new();
        let mut positions = vec![50.0];
        assert!(demo.start(&mut positions));
        assert!((positions[0] - 65.0).abs() < 0.001);
        assert_eq!(demo.animating_divider(), Some(0));
    }

    #[test]
    fn one_divider_runs_three_legs_and_restores_origin() {
        let mut demo = DemoSequence::new();
        let mut positions = vec![50.0];
        demo.start(&mut positions);

        assert!(!demo.advance(&mut positions)); // back
        assert!((positions[0] - 35.0).abs() < 0.001);

        assert!(!demo.advance(&mut positions)); // return
        assert!((positions[0] - 50.0).abs() < 0.001);

        assert!(demo.advance(&mut positions)); // sequence complete
        assert!(demo.has_played());
    }

    #[test]
    fn dividers_animate_sequentially_not_concurrently() {
        let mut demo = DemoSequence::new();
        let mut positions = vec![33.33, 66.67];
        demo.start(&mut positions);

        // While divider 0 swings, divider 1 is untouched.
        assert!((positions[1] - 66.67).abs() < 0.001);
        demo.advance(&mut positions);
        assert!((positions[1] - 66.67).abs() < 0.001);

        // Third advance moves on to divider 1's outward swing.
        demo.advance(&mut positions);
        assert!((positions[0] - 33.33).abs() < 0.001);
        demo.advance(&mut positions);
        assert_eq!(demo.animating_divider(), Some(1));
        assert!((positions[1] - 81.67).abs() < 0.001);
    }

    #[test]
    fn every_divider_is_restored_after_its_own_sequence() {
        let mut demo = DemoSequence::new();
        let original = vec![20.0, 40.0, 60.0, 80.0];
        let mut positions = original.clone();
        demo.start(&mut positions);
        run_to_completion(&mut demo, &mut positions);

        assert!(demo.has_played());
        for (restored, original) in positions.iter().zip(&original) {
            assert!((restored - original).abs() < 0.001);
        }
    }

    #[test]
    fn swings_are_capped_near_the_edges() {
        let mut demo = DemoSequence::new();
        let mut positions = vec![85.0];
        demo.start(&mut positions);
        assert!((positions[0] - SWING_CAP).abs() < 0.001);

        let mut demo = DemoSequence::new();
        let mut positions = vec![15.0];
        demo.start(&mut positions);
        demo.advance(&mut positions);
        assert!((positions[0] - SWING_FLOOR).abs() < 0.001);
    }

    #[test]
    fn played_state_is_terminal() {
        let mut demo = DemoSequence::new();
        let mut positions = vec![50.0];
        demo.start(&mut positions);
        run_to_completion(&mut demo, &mut positions);

        assert!(!demo.start(&mut positions));
        assert!(!demo.advance(&mut positions));
        assert!(demo.has_played());
    }

    #[test]
    fn empty_position_array_never_starts() {
        let mut demo = DemoSequence::new();
        let mut positions: Vec<f32> = Vec::new();
        assert!(!demo.start(&mut positions));
        assert!(!demo.has_played());
    }
}
