// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::fmt;

/// User-initiated actions that can be captured for diagnostics.
///
/// These actions represent meaningful interactions that help understand
/// what the user was doing when issues occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// A set of images was opened (CLI or file dialog).
    OpenImages {
        /// Number of paths supplied.
        count: usize,
    },

    /// A divider handle was grabbed for dragging.
    GrabDivider { index: usize },

    /// The active divider drag ended.
    ReleaseDivider { index: usize },

    /// A divider was moved through its numeric range control.
    SetDividerFromControl { index: usize, value: f32 },

    /// The entrance demonstration started playing.
    DemoStarted,

    /// The entrance demonstration ran to completion.
    DemoCompleted,

    /// A diagnostics report was exported.
    ExportReport,
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::OpenImages { count } => write!(f, "open_images count={}", count),
            UserAction::GrabDivider { index } => write!(f, "grab_divider index={}", index),
            UserAction::ReleaseDivider { index } => write!(f, "release_divider index={}", index),
            UserAction::SetDividerFromControl { index, value } => {
                write!(f, "set_divider_from_control index={} value={:.2}", index, value)
            }
            UserAction::DemoStarted => write!(f, "demo_started"),
            UserAction::DemoCompleted => write!(f, "demo_completed"),
            UserAction::ExportReport => write!(f, "export_report"),
        }
    }
}

/// One captured entry: what happened and when, relative to collector start.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    pub elapsed_ms: u64,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Action(UserAction),
    Error { message: String },
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EventKind::Action(action) => write!(f, "+{}ms {}", self.elapsed_ms, action),
            EventKind::Error { message } => {
                write!(f, "+{}ms error: {}", self.elapsed_ms, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_render_snake_case_names() {
        assert_eq!(
            UserAction::GrabDivider { index: 2 }.to_string(),
            "grab_divider index=2"
        );
        assert_eq!(UserAction::DemoCompleted.to_string(), "demo_completed");
    }

    #[test]
    fn control_action_includes_value() {
        let action = UserAction::SetDividerFromControl {
            index: 0,
            value: 42.5,
        };
        assert_eq!(action.to_string(), "set_divider_from_control index=0 value=42.50");
    }

    #[test]
    fn events_render_relative_timestamps() {
        let event = DiagnosticEvent {
            elapsed_ms: 1200,
            kind: EventKind::Error {
                message: "boom".into(),
            },
        };
        assert_eq!(event.to_string(), "+1200ms error: boom");
    }
}
