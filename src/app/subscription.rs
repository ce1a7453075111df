// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (window resize, keyboard) into the update loop and
//! batches in the comparator's demonstration timer while it plays.

use super::{App, Message, Screen};
use iced::{event, Subscription};

/// Creates the application's combined subscription.
pub fn create(app: &App) -> Subscription<Message> {
    let events = event::listen_with(|event, _status, window| match &event {
        iced::Event::Window(iced::window::Event::Resized(_)) | iced::Event::Keyboard(_) => {
            Some(Message::RawEvent {
                window,
                event: event.clone(),
            })
        }
        _ => None,
    });

    let demo = match &app.screen {
        Screen::Compare(state) => state.subscription().map(Message::Comparator),
        _ => Subscription::none(),
    };

    Subscription::batch([events, demo])
}
