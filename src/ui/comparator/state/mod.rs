// SPDX-License-Identifier: MPL-2.0
//! Instance-scoped state machines for the comparator.

mod demo;
mod drag;
mod visibility;

pub use demo::{DemoSequence, LEG_DURATION, SWING_CAP, SWING_FLOOR, SWING_PERCENT};
pub use drag::DragSession;
pub use visibility::{visible_fraction, VisibilityObserver, DEFAULT_THRESHOLD};
