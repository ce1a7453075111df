// SPDX-License-Identifier: MPL-2.0
//! Multi-layer comparison component.
//!
//! This module follows a "state down, messages up" pattern: the component
//! owns the divider positions, drag session, and entrance-demonstration
//! state, and emits an [`Event`] when the parent should perform a side
//! effect (diagnostics recording). Rendering stacks a CPU-composited frame
//! with a canvas interaction overlay.

pub mod compositor;
mod messages;
mod overlay;
pub mod state;
mod view;

pub use messages::{ControlMessage, Event, Message, OverlayMessage};
pub use view::ViewContext;

use crate::diagnostics::UserAction;
use crate::domain::slider::{apply_move, initial_positions, Constraints, LayerStack};
use crate::media::ImageData;
use state::{DemoSequence, DragSession, VisibilityObserver, LEG_DURATION};

/// Local state for one comparator instance.
///
/// All mutable interaction state (drag session, demonstration progress,
/// visibility observer) is scoped to the instance; nothing is shared across
/// comparators.
#[derive(Debug, Clone)]
pub struct State {
    stack: LayerStack,
    positions: Vec<f32>,
    constraints: Constraints,
    drag: DragSession,
    demo: DemoSequence,
    visibility: VisibilityObserver,
    composite: ImageData,
}

impl State {
    /// Builds the component around an already-validated stack.
    #[must_use]
    pub fn new(stack: LayerStack, constraints: Constraints, demo_enabled: bool) -> Self {
        let positions = initial_positions(stack.len());
        let composite = compositor::composite(&stack, &positions);

        let mut visibility = VisibilityObserver::default();
        if !demo_enabled {
            visibility.disconnect();
        }

        Self {
            stack,
            positions,
            constraints,
            drag: DragSession::default(),
            demo: DemoSequence::new(),
            visibility,
            composite,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Overlay(msg) => self.handle_overlay_message(msg),
            Message::Control(ControlMessage::DividerInput { index, value }) => {
                self.move_divider(index, value);
                Event::Record(UserAction::SetDividerFromControl { index, value })
            }
            Message::DemoTick => self.handle_demo_tick(),
            Message::RawEvent { event } => self.handle_raw_event(&event),
        }
    }

    /// Renders the component.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> iced::Element<'a, Message> {
        view::view(self, ctx)
    }

    /// Returns the subscription needed by the component (timer legs while
    /// the entrance demonstration plays).
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.demo.is_playing() {
            iced::time::every(LEG_DURATION).map(|_| Message::DemoTick)
        } else {
            iced::Subscription::none()
        }
    }

    fn handle_overlay_message(&mut self, message: OverlayMessage) -> Event {
        match message {
            OverlayMessage::HandleGrabbed { index } => {
                if index < self.positions.len() {
                    self.drag.start(index);
                    return Event::Record(UserAction::GrabDivider { index });
                }
                Event::None
            }
            OverlayMessage::PointerMoved { percent } => {
                if let Some(index) = self.drag.active() {
                    self.move_divider(index, percent);
                }
                Event::None
            }
            OverlayMessage::PointerReleased => self.finish_drag(),
            OverlayMessage::VisibilityChanged { fraction } => {
                if self.visibility.observe(fraction) && self.demo.start(&mut self.positions) {
                    self.rebuild_composite();
                    return Event::Record(UserAction::DemoStarted);
                }
                Event::None
            }
        }
    }

    fn handle_demo_tick(&mut self) -> Event {
        if !self.demo.is_playing() {
            return Event::None;
        }
        let finished = self.demo.advance(&mut self.positions);
        self.rebuild_composite();
        if finished {
            Event::Record(UserAction::DemoCompleted)
        } else {
            Event::None
        }
    }

    fn handle_raw_event(&mut self, event: &iced::Event) -> Event {
        if let iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) = event {
            if matches!(
                key,
                iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape)
            ) {
                return self.finish_drag();
            }
        }
        Event::None
    }

    /// Ends any active drag, reverting the drag-time side effects.
    fn finish_drag(&mut self) -> Event {
        match self.drag.finish() {
            Some(index) => Event::Record(UserAction::ReleaseDivider { index }),
            None => Event::None,
        }
    }

    /// Moves a divider through the constraint solver and refreshes the
    /// composite when anything changed.
    fn move_divider(&mut self, index: usize, requested: f32) {
        let next = apply_move(&self.positions, index, requested, self.constraints);
        if next != self.positions {
            self.positions = next;
            self.rebuild_composite();
        }
    }

    fn rebuild_composite(&mut self) {
        self.composite = compositor::composite(&self.stack, &self.positions);
    }

    // Accessors used by the view layer and tests.

    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn composite(&self) -> &ImageData {
        &self.composite
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    #[must_use]
    pub fn active_divider(&self) -> Option<usize> {
        self.drag.active()
    }

    #[must_use]
    pub fn demo_has_played(&self) -> bool {
        self.demo.has_played()
    }

    #[must_use]
    pub fn demo_is_playing(&self) -> bool {
        self.demo.is_playing()
    }

    fn animating_divider(&self) -> Option<usize> {
        self.demo.animating_divider()
    }
}
