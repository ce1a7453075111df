// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message, Screen};
use crate::diagnostics::{export_report, UserAction};
use crate::media;
use crate::ui::comparator;
use iced::keyboard;
use iced::Task;
use std::path::PathBuf;

/// File extensions offered by the open dialog.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "tif", "tiff", "bmp", "gif"];

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Comparator(msg) => {
                if let Screen::Compare(state) = &mut self.screen {
                    match state.update(msg) {
                        comparator::Event::Record(action) => self.diagnostics.record(action),
                        comparator::Event::None => {}
                    }
                }
                Task::none()
            }
            Message::LayersLoaded(Ok(stack)) => {
                self.screen = Screen::Compare(comparator::State::new(
                    stack,
                    self.config.constraints(),
                    self.config.entrance_demo_enabled(),
                ));
                Task::none()
            }
            Message::LayersLoaded(Err(error)) => {
                self.diagnostics.record_error(error.to_string());
                self.screen = Screen::Failed(error);
                Task::none()
            }
            Message::OpenFileDialog => {
                Task::perform(pick_images(), Message::OpenFileDialogResult)
            }
            Message::OpenFileDialogResult(Some(paths)) if !paths.is_empty() => {
                self.diagnostics
                    .record(UserAction::OpenImages { count: paths.len() });
                self.screen = Screen::Loading;
                Task::perform(media::load_stack(paths), Message::LayersLoaded)
            }
            Message::OpenFileDialogResult(_) => Task::none(),
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
        }
    }

    fn handle_raw_event(&mut self, event: iced::Event) -> Task<Message> {
        match &event {
            iced::Event::Window(iced::window::Event::Resized(size)) => {
                self.window_height = size.height;
                Task::none()
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
                if modifiers.command() && is_character(key, "d") =>
            {
                self.export_diagnostics();
                Task::none()
            }
            iced::Event::Keyboard(_) => {
                // Keyboard shortcuts the comparator owns (Escape cancels a
                // drag) are forwarded as raw events.
                if let Screen::Compare(state) = &mut self.screen {
                    match state.update(comparator::Message::RawEvent {
                        event: event.clone(),
                    }) {
                        comparator::Event::Record(action) => self.diagnostics.record(action),
                        comparator::Event::None => {}
                    }
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.record(UserAction::ExportReport);
        if let Err(error) = export_report(&self.diagnostics) {
            self.diagnostics.record_error(error.to_string());
        }
    }
}

fn is_character(key: &keyboard::Key, wanted: &str) -> bool {
    matches!(key, keyboard::Key::Character(c) if c.as_str() == wanted)
}

/// Opens the system multi-file picker for layer images.
async fn pick_images() -> Option<Vec<PathBuf>> {
    rfd::AsyncFileDialog::new()
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_files()
        .await
        .map(|files| {
            files
                .into_iter()
                .map(|file| file.path().to_path_buf())
                .collect()
        })
}
