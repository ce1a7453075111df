// SPDX-License-Identifier: MPL-2.0
//! In-memory activity diagnostics.
//!
//! A bounded log of user actions and errors, owned by the application and
//! exportable as a plain-text report for bug reports. Nothing is written to
//! disk unless the user explicitly exports.

mod events;
mod export;
mod log;

pub use events::{DiagnosticEvent, EventKind, UserAction};
pub use export::export_report;
pub use log::{EventLog, DEFAULT_CAPACITY};

use std::time::Instant;

/// Collects diagnostic events with timestamps relative to app start.
#[derive(Debug, Clone)]
pub struct Collector {
    started: Instant,
    log: EventLog,
}

impl Collector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            log: EventLog::default(),
        }
    }

    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Records a user action.
    pub fn record(&mut self, action: UserAction) {
        let event = DiagnosticEvent {
            elapsed_ms: self.elapsed_ms(),
            kind: EventKind::Action(action),
        };
        self.log.push(event);
    }

    /// Records an error message.
    pub fn record_error(&mut self, message: impl Into<String>) {
        let event = DiagnosticEvent {
            elapsed_ms: self.elapsed_ms(),
            kind: EventKind::Error {
                message: message.into(),
            },
        };
        self.log.push(event);
    }

    /// Iterates captured events oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.log.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Renders the captured activity as a plain-text report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "wipedeck {} diagnostics\ngenerated: {}\nevents: {}\n\n",
            env!("CARGO_PKG_VERSION"),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.log.len(),
        ));
        for event in self.log.iter() {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_starts_empty() {
        let collector = Collector::new();
        assert!(collector.is_empty());
    }

    #[test]
    fn record_appends_action_events() {
        let mut collector = Collector::new();
        collector.record(UserAction::DemoStarted);
        collector.record(UserAction::DemoCompleted);

        assert_eq!(collector.len(), 2);
        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(kinds[0], EventKind::Action(UserAction::DemoStarted));
        assert_eq!(kinds[1], EventKind::Action(UserAction::DemoCompleted));
    }

    #[test]
    fn record_error_captures_message() {
        let mut collector = Collector::new();
        collector.record_error("decode failed");

        let event = collector.events().next().expect("one event");
        assert_eq!(
            event.kind,
            EventKind::Error {
                message: "decode failed".into()
            }
        );
    }

    #[test]
    fn report_lists_every_event() {
        let mut collector = Collector::new();
        collector.record(UserAction::OpenImages { count: 3 });
        collector.record_error("boom");

        let report = collector.report();
        assert!(report.contains("open_images count=3"));
        assert!(report.contains("error: boom"));
        assert!(report.contains("events: 2"));
    }
}
