// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::slider::LayerStack;
use crate::error::Error;
use crate::ui::comparator;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Comparator(comparator::Message),
    /// Result of decoding the requested layer images.
    LayersLoaded(Result<LayerStack, Error>),
    /// Trigger the multi-file open dialog.
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<Vec<PathBuf>>),
    /// Raw runtime event (window resize, keyboard shortcuts).
    RawEvent {
        window: window::Id,
        event: iced::Event,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Layer image paths to load on startup, in stacking order.
    pub paths: Vec<String>,
}
