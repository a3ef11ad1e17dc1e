// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the video controls over a simulated player.
//!
//! The `App` struct plays the host role: it feeds pointer input and playback
//! status into [`VideoControls`] and applies the effects it emits through
//! the default [`HostPolicy`].

mod message;
pub mod player;
mod subscription;
mod view;
pub mod window;

pub use message::{Flags, Message};

use crate::application::host::{HostOutcome, HostPolicy};
use crate::application::port::PlaybackEngine;
use crate::config;
use crate::diagnostics::{DiagnosticsCollector, EventCapacity};
use crate::domain::controls::{ControlOptions, SkipPolicy};
use crate::i18n::I18n;
use crate::ui::controls::button_group::Button;
use crate::ui::controls::{self, slider, Effect, VideoControls};
use crate::ui::gestures::{PointerEvent, MOUSE_FINGER};
use iced::keyboard::{self, key::Named, Key};
use iced::{mouse, window as iced_window, Element, Point, Subscription, Task, Theme};
use player::SimulatedPlayer;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;
use window::WindowMode;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;

/// Zoom factor applied per pinch.
const ZOOM_STEP: f32 = 1.25;
const MIN_ZOOM: f32 = 0.25;
const MAX_ZOOM: f32 = 4.0;

/// Root demo state.
pub struct App {
    i18n: I18n,
    controls: VideoControls,
    player: SimulatedPlayer,
    window: WindowMode,
    policy: HostPolicy,
    diagnostics: DiagnosticsCollector,
    diagnostics_out: Option<PathBuf>,
    cursor: Point,
    mouse_down: bool,
    zoom: f32,
    last_tick: Option<Instant>,
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("player", &self.player)
            .field("controls_visible", &self.controls.is_visible())
            .field("zoom", &self.zoom)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced_window::Settings {
    iced_window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..iced_window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure; flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        config::paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let diagnostics =
            DiagnosticsCollector::new(EventCapacity::from(config.diagnostics.buffer_capacity));
        let controls = VideoControls::new(ControlOptions::from(&config.controls))
            .with_diagnostics(diagnostics.handle());
        let player = SimulatedPlayer::new(
            flags
                .duration_secs
                .unwrap_or(player::DEFAULT_DURATION_SECS),
        );

        let notice = config_warning.map(|reason| {
            log::warn!("{reason}");
            i18n.tr_with_args(
                "notification-config-load-error",
                &[("reason", reason.as_str())],
            )
        });

        let mut app = Self {
            i18n,
            controls,
            player,
            window: WindowMode::default(),
            policy: HostPolicy::new(SkipPolicy::from(&config.playback)),
            diagnostics,
            diagnostics_out: flags.diagnostics_out,
            cursor: Point::ORIGIN,
            mouse_down: false,
            zoom: 1.0,
            last_tick: None,
            notice,
        };
        app.sync_controls(Instant::now());
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(msg) => {
                let now = Instant::now();
                let effects = self.controls.handle(msg, now);
                self.apply_effects(effects, now)
            }
            Message::Tick(now) => {
                if let Some(last) = self.last_tick {
                    self.player.advance(now.saturating_duration_since(last));
                }
                self.last_tick = Some(now);
                self.sync_controls(now);
                let effects = self.controls.handle(controls::Message::Tick(now), now);
                let task = self.apply_effects(effects, now);
                self.diagnostics.process_pending();
                task
            }
            Message::RawEvent { window, event } => {
                self.window.set_id(window);
                self.handle_raw_event(event)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controls: &self.controls,
            zoom: self.zoom,
            notice: self.notice.as_deref(),
            now: Instant::now(),
        })
    }

    /// Pushes the player status into the controls.
    fn sync_controls(&mut self, now: Instant) {
        self.controls.set_duration(self.player.duration());
        self.controls.set_current_time(self.player.position());
        self.controls.set_playable_time(self.player.playable_position());
        self.controls.set_playing(self.player.is_playing(), now);
    }

    fn handle_raw_event(&mut self, event: iced::Event) -> Task<Message> {
        let now = Instant::now();
        let message = match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = position;
                self.mouse_down
                    .then(|| PointerEvent::moved(MOUSE_FINGER, position, now))
                    .map(controls::Message::Pointer)
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                self.mouse_down = true;
                Some(controls::Message::Pointer(PointerEvent::down(
                    MOUSE_FINGER,
                    self.cursor,
                    now,
                )))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                std::mem::take(&mut self.mouse_down).then(|| {
                    controls::Message::Pointer(PointerEvent::up(MOUSE_FINGER, self.cursor, now))
                })
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                std::mem::take(&mut self.mouse_down).then(|| {
                    controls::Message::Pointer(PointerEvent::cancel(
                        MOUSE_FINGER,
                        self.cursor,
                        now,
                    ))
                })
            }
            // Finger ids are offset so they never collide with the mouse.
            iced::Event::Touch(touch) => {
                let mut pointer = PointerEvent::from_touch(touch, now);
                pointer.finger = pointer.finger.wrapping_add(1);
                Some(controls::Message::Pointer(pointer))
            }
            iced::Event::Window(iced_window::Event::Opened { size, .. })
            | iced::Event::Window(iced_window::Event::Resized(size)) => {
                Some(controls::Message::Resized(size))
            }
            iced::Event::Window(iced_window::Event::Unfocused) => {
                self.mouse_down = false;
                Some(controls::Message::PointerLost)
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                return self.handle_key(key.as_ref(), modifiers, now);
            }
            _ => None,
        };

        match message {
            Some(msg) => {
                let effects = self.controls.handle(msg, now);
                self.apply_effects(effects, now)
            }
            None => Task::none(),
        }
    }

    fn handle_key(
        &mut self,
        key: Key<&str>,
        modifiers: keyboard::Modifiers,
        now: Instant,
    ) -> Task<Message> {
        let effects = match key {
            Key::Named(Named::Space) => self.controls.activate_button(Button::PlayPause, now),
            Key::Named(Named::ArrowLeft) => self
                .controls
                .handle(controls::Message::Slider(slider::Message::Decrement), now),
            Key::Named(Named::ArrowRight) => self
                .controls
                .handle(controls::Message::Slider(slider::Message::Increment), now),
            Key::Named(Named::Escape) if self.controls.fullscreen().is_fullscreen() => {
                vec![Effect::ToggleFullscreen]
            }
            Key::Character("h") => self.controls.toggle_visible(now),
            Key::Character("a") => {
                let enabled = !self.controls.options().auto_dismiss;
                self.controls.set_auto_dismiss(enabled, now);
                log::info!("auto-hide {}", if enabled { "enabled" } else { "disabled" });
                Vec::new()
            }
            Key::Character("d") if modifiers.command() => {
                self.export_diagnostics();
                Vec::new()
            }
            _ => Vec::new(),
        };
        self.apply_effects(effects, now)
    }

    /// Applies control effects to the player and the window.
    fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) -> Task<Message> {
        for effect in effects {
            match self.policy.apply(effect, &mut self.player, &mut self.window) {
                Ok(HostOutcome::FullscreenChanged(fullscreen)) => {
                    self.controls.set_fullscreen(fullscreen);
                }
                Ok(HostOutcome::PlayingChanged(playing)) => {
                    self.controls.set_playing(playing, now);
                }
                Ok(HostOutcome::ZoomIn) => {
                    self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
                }
                Ok(HostOutcome::ZoomOut) => {
                    self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
                }
                Ok(HostOutcome::VisibilityChanged(visible)) => {
                    log::debug!("overlay visibility changed to {visible}");
                }
                Ok(HostOutcome::Handled) => {}
                Err(err) => {
                    log::warn!("{err}");
                    self.notice = Some(self.i18n.tr(err.i18n_key()));
                }
            }
        }
        self.window.take_task()
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let path = self.diagnostics_out.clone().or_else(|| {
            config::paths::get_app_config_dir().map(|dir| dir.join("diagnostics.json"))
        });
        let Some(path) = path else {
            log::warn!("no location available for the diagnostics report");
            return;
        };
        match self.diagnostics.export_to_file(&path) {
            Ok(()) => {
                let shown = path.display().to_string();
                self.notice = Some(self.i18n.tr_with_args(
                    "notification-diagnostics-exported",
                    &[("path", shown.as_str())],
                ));
            }
            Err(err) => log::warn!("{err}"),
        }
    }
}
