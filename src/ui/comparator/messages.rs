// SPDX-License-Identifier: MPL-2.0
//! Comparator message/event types re-exported by the facade.

use crate::diagnostics::UserAction;

/// Interaction messages published by the canvas overlay.
#[derive(Debug, Clone)]
pub enum OverlayMessage {
    /// A divider handle was grabbed.
    HandleGrabbed { index: usize },
    /// The pointer moved while a drag may be active; `percent` is the
    /// horizontal position within the comparator, already clamped to [0, 100].
    PointerMoved { percent: f32 },
    /// The pointer was released or left the window.
    PointerReleased,
    /// The widget's visible fraction within the viewport changed.
    VisibilityChanged { fraction: f32 },
}

/// Messages from the numeric range controls.
#[derive(Debug, Clone)]
pub enum ControlMessage {
    /// A range control mirrors divider `index` and requested `value`.
    DividerInput { index: usize, value: f32 },
}

/// Messages consumed by the comparator state.
#[derive(Debug, Clone)]
pub enum Message {
    Overlay(OverlayMessage),
    Control(ControlMessage),
    /// Timer tick driving the entrance demonstration legs.
    DemoTick,
    /// Raw event routed by the application (keyboard shortcuts).
    RawEvent { event: iced::Event },
}

impl From<OverlayMessage> for Message {
    fn from(message: OverlayMessage) -> Self {
        Message::Overlay(message)
    }
}

impl From<ControlMessage> for Message {
    fn from(message: ControlMessage) -> Self {
        Message::Control(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Record an action in the diagnostics log.
    Record(UserAction),
}
