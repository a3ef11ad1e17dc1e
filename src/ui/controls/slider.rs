// SPDX-License-Identifier: MPL-2.0
//! Seek slider sub-component.
//!
//! Owns the track layout and the thumb reconciler, and wires drag phases to
//! the visibility controller: a drag holds the overlay open from `Began` to
//! `Ended`/`Finalized`, and every move resets the auto-hide timer.

use crate::config::ACCESSIBILITY_ADJUST_SECS;
use crate::ui::gestures::{PanPhase, ThumbObserver, ThumbPressScale};
use crate::ui::state::{LayoutTracker, ThumbReconciler, VisibilityController};
use iced::{Rectangle, Size};
use std::time::Instant;

/// Where and how to draw the thumb, relative to the track origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    pub translate_x: f32,
    pub translate_y: f32,
    pub size: Size,
    /// 0 until the track has been measured.
    pub opacity: f32,
    pub scale: f32,
}

/// Seek slider state.
#[derive(Debug)]
pub struct State {
    layout: LayoutTracker,
    thumb: ThumbReconciler,
    observers: Vec<Box<dyn ThumbObserver>>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            layout: LayoutTracker::default(),
            thumb: ThumbReconciler::new(),
            observers: vec![Box::new(ThumbPressScale::default())],
        }
    }
}

/// Messages for the seek slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Track bounds reported by layout.
    TrackMeasured(Rectangle),
    /// Thumb size reported by layout.
    ThumbMeasured(Size),
    /// Thumb pan phase from the gesture router.
    Pan(PanPhase),
    /// Accessibility action: seek 5 s ahead.
    Increment,
    /// Accessibility action: seek 5 s back.
    Decrement,
}

/// Effects produced by the seek slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    Seek(f64),
    /// A drag ended without completing.
    DragCancelled,
}

impl State {
    /// Handle a slider message.
    pub fn handle(
        &mut self,
        msg: Message,
        visibility: &mut VisibilityController,
        now: Instant,
    ) -> Effect {
        match msg {
            Message::TrackMeasured(bounds) => {
                if self.layout.measure_track(bounds) {
                    log::debug!("seek track width now {}", self.layout.track_width());
                    self.thumb.set_track_width(self.layout.track_width());
                }
                Effect::None
            }
            Message::ThumbMeasured(size) => {
                self.layout.measure_thumb(size);
                Effect::None
            }
            Message::Pan(phase) => {
                for observer in &mut self.observers {
                    observer.on_pan(phase);
                }
                self.handle_pan(phase, visibility, now)
            }
            Message::Increment => {
                visibility.reset_timer(now);
                Effect::Seek(self.thumb.adjust_target(ACCESSIBILITY_ADJUST_SECS))
            }
            Message::Decrement => {
                visibility.reset_timer(now);
                Effect::Seek(self.thumb.adjust_target(-ACCESSIBILITY_ADJUST_SECS))
            }
        }
    }

    fn handle_pan(
        &mut self,
        phase: PanPhase,
        visibility: &mut VisibilityController,
        now: Instant,
    ) -> Effect {
        match phase {
            PanPhase::Began => {
                if self.thumb.begin_drag() {
                    visibility.hold_began();
                }
                Effect::None
            }
            PanPhase::Changed { translation_x } => {
                if self.thumb.update_drag(translation_x).is_some() {
                    visibility.reset_timer(now);
                }
                Effect::None
            }
            PanPhase::Ended => match self.thumb.end_drag() {
                Some(time) => {
                    visibility.hold_ended(now);
                    Effect::Seek(time)
                }
                None => Effect::None,
            },
            PanPhase::Finalized => {
                if self.thumb.finalize() {
                    visibility.hold_ended(now);
                    Effect::DragCancelled
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Attaches an observer that runs alongside the thumb pan.
    pub fn add_observer(&mut self, observer: Box<dyn ThumbObserver>) {
        self.observers.push(observer);
    }

    pub fn set_current_time(&mut self, secs: f64) {
        self.thumb.set_current_time(secs);
    }

    pub fn set_playable_time(&mut self, secs: f64) {
        self.thumb.set_playable_time(secs);
    }

    pub fn set_duration(&mut self, secs: f64) {
        self.thumb.set_duration(secs);
    }

    #[must_use]
    pub fn reconciler(&self) -> &ThumbReconciler {
        &self.thumb
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutTracker {
        &self.layout
    }

    #[must_use]
    pub fn time_under_thumb(&self) -> f64 {
        self.thumb.time_under_thumb()
    }

    /// Thumb render geometry relative to the track origin.
    #[must_use]
    pub fn thumb_geometry(&self) -> ThumbGeometry {
        let size = self.layout.thumb_size();
        ThumbGeometry {
            translate_x: self.thumb.offset() - size.width / 2.0,
            translate_y: -size.height / 2.0 + self.layout.track_height() / 2.0,
            size,
            opacity: if self.layout.is_measured() { 1.0 } else { 0.0 },
            scale: self
                .observers
                .iter()
                .map(|observer| observer.thumb_scale())
                .fold(1.0, f32::max),
        }
    }

    /// Thumb bounds in window coordinates, once the track is measured.
    #[must_use]
    pub fn thumb_bounds(&self) -> Option<Rectangle> {
        let track = self.layout.track()?;
        let geometry = self.thumb_geometry();
        Some(Rectangle::new(
            iced::Point::new(
                track.x + geometry.translate_x,
                track.y + geometry.translate_y,
            ),
            geometry.size,
        ))
    }
}
