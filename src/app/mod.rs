// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the comparator component, localization,
//! configuration, and diagnostics, and translates messages into side effects
//! like layer loading or report export. Policy decisions (window sizing,
//! which screen is shown when) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::{Collector, UserAction};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::comparator;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Which screen the application currently shows.
pub enum Screen {
    /// No layers requested yet.
    Empty,
    /// Layer images are decoding.
    Loading,
    /// The comparator is live.
    Compare(comparator::State),
    /// The layer stack could not be built; the comparator refuses to render.
    Failed(Error),
}

/// Root Iced application state bridging the comparator, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    theme_mode: ThemeMode,
    /// Tracked window height, feeding the comparator's visibility probe.
    window_height: f32,
    /// Bounded activity log for bug reports.
    diagnostics: Collector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let screen = match &self.screen {
            Screen::Empty => "empty",
            Screen::Loading => "loading",
            Screen::Compare(_) => "compare",
            Screen::Failed(_) => "failed",
        };
        f.debug_struct("App").field("screen", &screen).finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Empty,
            config: Config::default(),
            theme_mode: ThemeMode::System,
            window_height: WINDOW_DEFAULT_HEIGHT as f32,
            diagnostics: Collector::new(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// layer loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config =
            config::load_with_dir(flags.config_dir.as_deref().map(Path::new)).unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.theme_mode,
            config,
            ..Self::default()
        };

        if flags.paths.is_empty() {
            return (app, Task::none());
        }

        let paths: Vec<PathBuf> = flags.paths.iter().map(PathBuf::from).collect();
        app.diagnostics
            .record(UserAction::OpenImages { count: paths.len() });
        app.screen = Screen::Loading;

        let task = Task::perform(media::load_stack(paths), Message::LayersLoaded);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
