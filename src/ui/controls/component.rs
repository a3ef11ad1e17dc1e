// SPDX-License-Identifier: MPL-2.0
//! Composition shell for the video controls overlay.
//!
//! Owns the visibility controller and lends it to each sub-component while it
//! handles a message. Raw pointer input is split here: contacts that start on
//! a visible button go to that button, everything else goes to the gesture
//! router. The resulting intents are turned into host-visible [`Effect`]s.

use super::button_group::{self, Button};
use super::fullscreen;
use super::layout::OverlayLayout;
use super::slider;
use crate::diagnostics::{ControlButton, ControlEventKind, DiagnosticsHandle};
use crate::domain::controls::ControlOptions;
use crate::ui::gestures::{
    FingerId, GestureIntent, GestureRouter, PointerEvent, PointerPhase, RouterContext,
};
use crate::ui::state::{OverlayFade, VisibilityController};
use iced::{Point, Rectangle, Size};
use std::time::Instant;

/// Messages accepted by the controls overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Raw pointer input over the video surface.
    Pointer(PointerEvent),
    /// Periodic tick driving the auto-hide timer and the deferred single tap.
    Tick(Instant),
    /// The overlay area changed size.
    Resized(Size),
    /// All contacts were lost, e.g. the window lost focus.
    PointerLost,
    Slider(slider::Message),
    Buttons(button_group::Message),
    Fullscreen(fullscreen::Message),
}

/// Requests and notifications for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Seek the player to this time in seconds.
    Seek(f64),
    /// Double tap on the right half.
    FastForward,
    /// Double tap on the left half.
    FastRewind,
    ZoomIn,
    ZoomOut,
    Play,
    Pause,
    /// Forward button.
    Forward,
    /// Rewind button.
    Rewind,
    ToggleFullscreen,
    VisibilityChanged(bool),
}

/// What a pointer contact that started on a control is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Button(Button),
    Fullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TargetContact {
    finger: FingerId,
    target: Target,
}

/// The video controls overlay.
#[derive(Debug)]
pub struct VideoControls {
    options: ControlOptions,
    visibility: VisibilityController,
    router: GestureRouter,
    slider: slider::State,
    buttons: button_group::State,
    fullscreen: fullscreen::State,
    layout: OverlayLayout,
    fade: OverlayFade,
    contact: Option<TargetContact>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl VideoControls {
    #[must_use]
    pub fn new(options: ControlOptions) -> Self {
        Self::with_button_spacing(options, button_group::Spacing::default())
    }

    #[must_use]
    pub fn with_button_spacing(options: ControlOptions, spacing: button_group::Spacing) -> Self {
        Self {
            visibility: VisibilityController::from_options(&options),
            router: GestureRouter::new(options.timing, options.hit_slop),
            slider: slider::State::default(),
            buttons: button_group::State::new(spacing),
            fullscreen: fullscreen::State::default(),
            layout: OverlayLayout::default(),
            fade: OverlayFade::settled(options.initial_visible),
            contact: None,
            diagnostics: None,
            options,
        }
    }

    /// Records every emitted effect to a diagnostics collector.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Handles a message. One input may produce several effects.
    pub fn handle(&mut self, msg: Message, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Message::Pointer(event) => self.handle_pointer(event, &mut effects),
            Message::Tick(at) => {
                let intents = self.router.tick(at);
                self.apply_intents(intents, at, &mut effects);
                if self.visibility.poll(at) {
                    self.visibility_changed(false, at, &mut effects);
                }
            }
            Message::Resized(size) => {
                self.layout = OverlayLayout::compute(size, self.buttons.spacing());
                self.slider.handle(
                    slider::Message::TrackMeasured(self.layout.track),
                    &mut self.visibility,
                    now,
                );
                self.slider.handle(
                    slider::Message::ThumbMeasured(self.layout.thumb),
                    &mut self.visibility,
                    now,
                );
            }
            Message::PointerLost => {
                if let Some(contact) = self.contact.take() {
                    self.dispatch_target(contact.target, Press::Cancelled, now, &mut effects);
                }
                let intents = self.router.cancel_all();
                self.apply_intents(intents, now, &mut effects);
            }
            Message::Slider(msg) => {
                let effect = self.slider.handle(msg, &mut self.visibility, now);
                self.push_slider_effect(effect, now, &mut effects);
            }
            Message::Buttons(msg) => {
                let (button, press) = match msg {
                    button_group::Message::Pressed(button) => (button, Press::Pressed),
                    button_group::Message::Released(button) => (button, Press::Released),
                    button_group::Message::Cancelled(button) => (button, Press::Cancelled),
                    button_group::Message::Activated(button) => {
                        return self.activate_button(button, now);
                    }
                };
                self.dispatch_target(Target::Button(button), press, now, &mut effects);
            }
            Message::Fullscreen(msg) => {
                let press = match msg {
                    fullscreen::Message::Pressed => Press::Pressed,
                    fullscreen::Message::Released => Press::Released,
                    fullscreen::Message::Cancelled => Press::Cancelled,
                };
                self.dispatch_target(Target::Fullscreen, press, now, &mut effects);
            }
        }
        effects
    }

    // -------------------------------------------------------------------------
    // Pointer routing
    // -------------------------------------------------------------------------

    fn handle_pointer(&mut self, event: PointerEvent, effects: &mut Vec<Effect>) {
        if self.route_to_target(&event, effects) {
            return;
        }
        let ctx = RouterContext {
            container: self.layout.container,
            thumb_bounds: self.slider.thumb_bounds(),
            controls_visible: self.visibility.is_visible(),
        };
        let intents = self.router.handle(event, &ctx);
        self.apply_intents(intents, event.at, effects);
    }

    /// Feeds contacts that belong to a button. Returns true if consumed.
    fn route_to_target(&mut self, event: &PointerEvent, effects: &mut Vec<Effect>) -> bool {
        match (event.phase, self.contact) {
            (PointerPhase::Down, None) => {
                let Some(target) = self.target_at(event.position) else {
                    return false;
                };
                self.contact = Some(TargetContact {
                    finger: event.finger,
                    target,
                });
                self.dispatch_target(target, Press::Pressed, event.at, effects);
                true
            }
            (phase, Some(contact)) if contact.finger == event.finger => {
                let inside = self.target_bounds(contact.target).contains(event.position);
                let press = match phase {
                    PointerPhase::Move if inside => return true,
                    PointerPhase::Up if inside => Press::Released,
                    _ => Press::Cancelled,
                };
                self.contact = None;
                self.dispatch_target(contact.target, press, event.at, effects);
                true
            }
            _ => false,
        }
    }

    fn target_at(&self, position: Point) -> Option<Target> {
        if !self.visibility.is_visible() {
            return None;
        }
        if self.layout.fullscreen.contains(position) {
            return Some(Target::Fullscreen);
        }
        self.layout.button_at(position).map(Target::Button)
    }

    fn target_bounds(&self, target: Target) -> Rectangle {
        match target {
            Target::Button(button) => self.layout.button(button),
            Target::Fullscreen => self.layout.fullscreen,
        }
    }

    fn dispatch_target(
        &mut self,
        target: Target,
        press: Press,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        // Hidden controls take no new presses; releases still balance holds.
        if press == Press::Pressed && !self.visibility.is_visible() {
            return;
        }
        match target {
            Target::Button(button) => {
                let msg = match press {
                    Press::Pressed => button_group::Message::Pressed(button),
                    Press::Released => button_group::Message::Released(button),
                    Press::Cancelled => button_group::Message::Cancelled(button),
                };
                let effect = self.buttons.handle(
                    msg,
                    self.visibility.is_playing(),
                    &mut self.visibility,
                    &self.options.timing,
                    now,
                );
                self.push_button_effect(effect, now, effects);
            }
            Target::Fullscreen => {
                let msg = match press {
                    Press::Pressed => fullscreen::Message::Pressed,
                    Press::Released => fullscreen::Message::Released,
                    Press::Cancelled => fullscreen::Message::Cancelled,
                };
                let effect =
                    self.fullscreen
                        .handle(msg, &mut self.visibility, &self.options.timing, now);
                if effect == fullscreen::Effect::ToggleFullscreen {
                    self.record(
                        ControlEventKind::ButtonActivated {
                            button: ControlButton::Fullscreen,
                        },
                        now,
                    );
                    effects.push(Effect::ToggleFullscreen);
                }
            }
        }
    }

    fn push_button_effect(
        &mut self,
        effect: button_group::Effect,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        let (effect, button) = match effect {
            button_group::Effect::None => return,
            button_group::Effect::Play => (Effect::Play, ControlButton::Play),
            button_group::Effect::Pause => (Effect::Pause, ControlButton::Pause),
            button_group::Effect::Forward => (Effect::Forward, ControlButton::Forward),
            button_group::Effect::Rewind => (Effect::Rewind, ControlButton::Rewind),
        };
        self.record(ControlEventKind::ButtonActivated { button }, now);
        effects.push(effect);
    }

    fn apply_intents(
        &mut self,
        intents: Vec<GestureIntent>,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        for intent in intents {
            match intent {
                GestureIntent::ToggleVisibility => {
                    let visible = self.visibility.toggle(now);
                    self.visibility_changed(visible, now, effects);
                }
                GestureIntent::SkipBackward => {
                    self.visibility.reset_timer(now);
                    self.record(ControlEventKind::SkipRequested { forward: false }, now);
                    effects.push(Effect::FastRewind);
                }
                GestureIntent::SkipForward => {
                    self.visibility.reset_timer(now);
                    self.record(ControlEventKind::SkipRequested { forward: true }, now);
                    effects.push(Effect::FastForward);
                }
                GestureIntent::ZoomIn => {
                    self.visibility.reset_timer(now);
                    self.record(ControlEventKind::ZoomRequested { zoom_in: true }, now);
                    effects.push(Effect::ZoomIn);
                }
                GestureIntent::ZoomOut => {
                    self.visibility.reset_timer(now);
                    self.record(ControlEventKind::ZoomRequested { zoom_in: false }, now);
                    effects.push(Effect::ZoomOut);
                }
                GestureIntent::ThumbPan(phase) => {
                    let effect =
                        self.slider
                            .handle(slider::Message::Pan(phase), &mut self.visibility, now);
                    self.push_slider_effect(effect, now, effects);
                }
            }
        }
    }

    fn push_slider_effect(
        &mut self,
        effect: slider::Effect,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        match effect {
            slider::Effect::None => {}
            slider::Effect::Seek(time) => {
                self.record(ControlEventKind::SeekEmitted { position_secs: time }, now);
                effects.push(Effect::Seek(time));
            }
            slider::Effect::DragCancelled => self.record(ControlEventKind::DragCancelled, now),
        }
    }

    fn visibility_changed(&mut self, visible: bool, now: Instant, effects: &mut Vec<Effect>) {
        log::debug!("controls {}", if visible { "shown" } else { "hidden" });
        self.fade.fade_to(visible, now);
        self.record(ControlEventKind::VisibilityChanged { visible }, now);
        effects.push(Effect::VisibilityChanged(visible));
    }

    fn record(&self, kind: ControlEventKind, now: Instant) {
        if let Some(handle) = &self.diagnostics {
            handle.log_at(kind, now);
        }
    }

    // -------------------------------------------------------------------------
    // Imperative surface
    // -------------------------------------------------------------------------

    /// Flips visibility as if the user tapped the video.
    pub fn toggle_visible(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        let visible = self.visibility.toggle(now);
        self.visibility_changed(visible, now, &mut effects);
        effects
    }

    /// Activates a playback button without a pointer, as a keyboard shortcut.
    ///
    /// Works while the overlay is hidden and resets the auto-hide timer.
    pub fn activate_button(&mut self, button: Button, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        let effect = self.buttons.handle(
            button_group::Message::Activated(button),
            self.visibility.is_playing(),
            &mut self.visibility,
            &self.options.timing,
            now,
        );
        self.push_button_effect(effect, now, &mut effects);
        effects
    }

    /// Shows or hides the overlay. Emits an effect only on change.
    pub fn set_visible(&mut self, visible: bool, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.visibility.set_visible(visible, now) {
            self.visibility_changed(visible, now, &mut effects);
        }
        effects
    }

    /// Pushes the playback position. Ignored by the thumb while dragging.
    pub fn set_current_time(&mut self, secs: f64) {
        self.slider.set_current_time(secs);
    }

    /// Pushes the buffered position.
    pub fn set_playable_time(&mut self, secs: f64) {
        self.slider.set_playable_time(secs);
    }

    pub fn set_duration(&mut self, secs: f64) {
        self.slider.set_duration(secs);
    }

    pub fn set_playing(&mut self, playing: bool, now: Instant) {
        self.visibility.set_playing(playing, now);
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen.set_fullscreen(fullscreen);
    }

    pub fn set_auto_dismiss(&mut self, enabled: bool, now: Instant) {
        self.options.auto_dismiss = enabled;
        self.visibility.set_auto_dismiss(enabled, now);
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.visibility.is_playing()
    }

    #[must_use]
    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    #[must_use]
    pub fn slider(&self) -> &slider::State {
        &self.slider
    }

    #[must_use]
    pub fn buttons(&self) -> &button_group::State {
        &self.buttons
    }

    #[must_use]
    pub fn fullscreen(&self) -> &fullscreen::State {
        &self.fullscreen
    }

    #[must_use]
    pub fn layout(&self) -> &OverlayLayout {
        &self.layout
    }

    #[must_use]
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// Overlay opacity at `now`, following the fade animation.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.fade.opacity(now)
    }

    /// Whether the host should keep redrawing for the fade.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.fade.is_animating(now)
    }

    /// Earliest instant at which a [`Message::Tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.visibility.deadline(), self.router.pending_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl Default for VideoControls {
    fn default() -> Self {
        Self::new(ControlOptions::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Press {
    Pressed,
    Released,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::test_utils::assert_relative_eq;
    use crate::ui::gestures::MOUSE_FINGER;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn controls(now: Instant) -> VideoControls {
        let mut controls = VideoControls::default();
        controls.handle(Message::Resized(Size::new(800.0, 600.0)), now);
        controls.set_duration(100.0);
        controls
    }

    fn tap(controls: &mut VideoControls, at: Instant, position: Point) -> Vec<Effect> {
        let mut effects = controls.handle(
            Message::Pointer(PointerEvent::down(MOUSE_FINGER, position, at)),
            at,
        );
        effects.extend(controls.handle(
            Message::Pointer(PointerEvent::up(MOUSE_FINGER, position, at + ms(50))),
            at + ms(50),
        ));
        effects
    }

    #[test]
    fn single_tap_toggles_after_double_tap_window() {
        let start = Instant::now();
        let mut controls = controls(start);
        let effects = tap(&mut controls, start, Point::new(100.0, 100.0));
        assert!(effects.is_empty());
        assert!(controls.handle(Message::Tick(start + ms(300)), start + ms(300)).is_empty());

        let effects = controls.handle(Message::Tick(start + ms(600)), start + ms(600));
        assert_eq!(effects, vec![Effect::VisibilityChanged(false)]);
        assert!(!controls.is_visible());
    }

    #[test]
    fn double_tap_sides_map_to_skips() {
        let start = Instant::now();
        let mut controls = controls(start);
        tap(&mut controls, start, Point::new(80.0, 100.0));
        let effects = tap(&mut controls, start + ms(200), Point::new(80.0, 100.0));
        assert_eq!(effects, vec![Effect::FastRewind]);

        let later = start + ms(2000);
        tap(&mut controls, later, Point::new(720.0, 100.0));
        let effects = tap(&mut controls, later + ms(200), Point::new(720.0, 100.0));
        assert_eq!(effects, vec![Effect::FastForward]);
        assert!(controls.is_visible());
    }

    #[test]
    fn button_contact_bypasses_router() {
        let start = Instant::now();
        let mut controls = controls(start);
        let center = controls.layout().button(Button::PlayPause).center();
        let effects = tap(&mut controls, start, center);
        assert_eq!(effects, vec![Effect::Play]);
        assert!(controls.handle(Message::Tick(start + ms(1000)), start + ms(1000)).is_empty());
    }

    #[test]
    fn dragging_off_a_button_cancels_it() {
        let start = Instant::now();
        let mut controls = controls(start);
        let center = controls.layout().button(Button::Forward).center();
        controls.handle(
            Message::Pointer(PointerEvent::down(MOUSE_FINGER, center, start)),
            start,
        );
        assert!(controls.buttons().is_pressed(Button::Forward));
        controls.handle(
            Message::Pointer(PointerEvent::moved(
                MOUSE_FINGER,
                Point::new(center.x + 200.0, center.y),
                start + ms(20),
            )),
            start + ms(20),
        );
        assert!(!controls.buttons().is_pressed(Button::Forward));
        assert!(!controls.visibility().is_held());
    }

    #[test]
    fn fullscreen_button_requests_toggle() {
        let start = Instant::now();
        let mut controls = controls(start);
        let center = controls.layout().fullscreen.center();
        assert_eq!(tap(&mut controls, start, center), vec![Effect::ToggleFullscreen]);
    }

    #[test]
    fn hidden_controls_ignore_buttons() {
        let start = Instant::now();
        let mut controls = controls(start);
        controls.set_visible(false, start);
        let center = controls.layout().button(Button::PlayPause).center();
        let effects = tap(&mut controls, start, center);
        assert!(effects.is_empty());
        let effects = controls.handle(
            Message::Buttons(button_group::Message::Pressed(Button::PlayPause)),
            start + ms(100),
        );
        assert!(effects.is_empty());
        assert!(!controls.buttons().is_pressed(Button::PlayPause));
    }

    #[test]
    fn thumb_drag_seeks_once_and_holds_visibility() {
        let start = Instant::now();
        let mut controls = controls(start);
        controls.set_playing(true, start);
        let thumb = controls.slider().thumb_bounds().expect("measured");
        let origin = thumb.center();
        let track_width = controls.layout().track.width;

        let mut effects = controls.handle(
            Message::Pointer(PointerEvent::down(MOUSE_FINGER, origin, start)),
            start,
        );
        for step in 1..=4u64 {
            let at = start + ms(step * 100);
            let position = Point::new(origin.x + track_width / 8.0 * step as f32, origin.y);
            effects.extend(controls.handle(
                Message::Pointer(PointerEvent::moved(MOUSE_FINGER, position, at)),
                at,
            ));
        }
        effects.extend(controls.handle(Message::Tick(start + ms(10_000)), start + ms(10_000)));
        assert!(controls.is_visible());

        let end = Point::new(origin.x + track_width / 2.0, origin.y);
        effects.extend(controls.handle(
            Message::Pointer(PointerEvent::up(MOUSE_FINGER, end, start + ms(10_000))),
            start + ms(10_000),
        ));
        assert_eq!(effects.len(), 1);
        let Effect::Seek(time) = effects[0] else {
            panic!("expected a seek, got {effects:?}");
        };
        assert_relative_eq!(time, 50.0, epsilon = 1e-3);
        assert!(controls.visibility().is_timer_armed());
    }

    #[test]
    fn thumb_drag_shortly_after_tap_still_seeks() {
        let start = Instant::now();
        let mut controls = controls(start);
        assert!(tap(&mut controls, start, Point::new(100.0, 100.0)).is_empty());

        let origin = controls.slider().thumb_bounds().expect("measured").center();
        let track_width = controls.layout().track.width;
        let down = start + ms(350);
        let end = Point::new(origin.x + 200.0, origin.y);
        let mut effects = controls.handle(
            Message::Pointer(PointerEvent::down(MOUSE_FINGER, origin, down)),
            down,
        );
        effects.extend(controls.handle(
            Message::Pointer(PointerEvent::moved(MOUSE_FINGER, end, down + ms(50))),
            down + ms(50),
        ));
        effects.extend(controls.handle(
            Message::Pointer(PointerEvent::up(MOUSE_FINGER, end, down + ms(100))),
            down + ms(100),
        ));

        assert_eq!(effects.len(), 1, "got {effects:?}");
        let Effect::Seek(time) = effects[0] else {
            panic!("expected a seek, got {effects:?}");
        };
        assert_relative_eq!(time, 200.0 / f64::from(track_width) * 100.0, epsilon = 1e-3);
        assert!(controls.is_visible());
        assert!(!controls.slider().reconciler().is_dragging());
    }

    #[test]
    fn lost_pointer_cancels_drag_without_seek() {
        let start = Instant::now();
        let mut controls = controls(start);
        let origin = controls.slider().thumb_bounds().expect("measured").center();
        controls.handle(
            Message::Pointer(PointerEvent::down(MOUSE_FINGER, origin, start)),
            start,
        );
        controls.handle(
            Message::Pointer(PointerEvent::moved(
                MOUSE_FINGER,
                Point::new(origin.x + 40.0, origin.y),
                start + ms(50),
            )),
            start + ms(50),
        );
        let effects = controls.handle(Message::PointerLost, start + ms(60));
        assert!(effects.is_empty());
        assert!(!controls.slider().reconciler().is_dragging());
        assert!(!controls.visibility().is_held());
    }

    #[test]
    fn auto_hide_fades_out_while_playing() {
        let start = Instant::now();
        let mut controls = controls(start);
        controls.set_playing(true, start);
        let effects = controls.handle(Message::Tick(start + ms(3000)), start + ms(3000));
        assert_eq!(effects, vec![Effect::VisibilityChanged(false)]);
        assert!(controls.is_animating(start + ms(3300)));
        assert_relative_eq!(controls.opacity(start + ms(3600)), 0.0);
    }

    #[test]
    fn set_visible_reports_only_changes() {
        let start = Instant::now();
        let mut controls = controls(start);
        assert!(controls.set_visible(true, start).is_empty());
        assert_eq!(
            controls.set_visible(false, start),
            vec![Effect::VisibilityChanged(false)]
        );
        assert_eq!(
            controls.toggle_visible(start),
            vec![Effect::VisibilityChanged(true)]
        );
    }

    #[test]
    fn next_deadline_tracks_timer_and_pending_tap() {
        let start = Instant::now();
        let mut controls = controls(start);
        assert_eq!(controls.next_deadline(), None);
        controls.set_playing(true, start);
        assert_eq!(controls.next_deadline(), Some(start + ms(3000)));
        tap(&mut controls, start + ms(100), Point::new(100.0, 100.0));
        assert_eq!(controls.next_deadline(), Some(start + ms(650)));
    }

    #[test]
    fn resize_reports_thumb_size_to_slider() {
        let controls = controls(Instant::now());
        let thumb = controls.slider().thumb_bounds().expect("measured");
        assert_eq!(thumb.size(), controls.layout().thumb);
    }

    #[test]
    fn disabling_auto_dismiss_keeps_controls_up() {
        let start = Instant::now();
        let mut controls = controls(start);
        controls.set_playing(true, start);
        controls.set_auto_dismiss(false, start + ms(1000));
        assert!(!controls.options().auto_dismiss);
        assert!(controls.handle(Message::Tick(start + ms(10_000)), start + ms(10_000)).is_empty());
        assert!(controls.is_visible());

        controls.set_auto_dismiss(true, start + ms(10_000));
        let effects = controls.handle(Message::Tick(start + ms(13_000)), start + ms(13_000));
        assert_eq!(effects, vec![Effect::VisibilityChanged(false)]);
    }

    #[test]
    fn keyboard_activation_resets_timer_and_is_recorded() {
        let start = Instant::now();
        let mut collector = DiagnosticsCollector::default();
        let mut controls = controls(start).with_diagnostics(collector.handle());
        assert_eq!(
            controls.handle(
                Message::Buttons(button_group::Message::Activated(Button::PlayPause)),
                start,
            ),
            vec![Effect::Play]
        );

        controls.set_playing(true, start);
        let effects = controls.activate_button(Button::Forward, start + ms(2000));
        assert_eq!(effects, vec![Effect::Forward]);
        assert_eq!(controls.visibility().deadline(), Some(start + ms(5000)));
        assert!(!controls.buttons().is_pressed(Button::Forward));

        collector.process_pending();
        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ControlEventKind::ButtonActivated {
                    button: ControlButton::Play
                },
                ControlEventKind::ButtonActivated {
                    button: ControlButton::Forward
                },
            ]
        );
    }

    #[test]
    fn keyboard_activation_works_while_hidden() {
        let start = Instant::now();
        let mut controls = controls(start);
        controls.set_visible(false, start);
        assert_eq!(controls.activate_button(Button::PlayPause, start), vec![Effect::Play]);
        assert!(!controls.is_visible());
    }

    #[test]
    fn effects_are_recorded_to_diagnostics() {
        let start = Instant::now();
        let mut collector = DiagnosticsCollector::default();
        let mut controls = controls(start).with_diagnostics(collector.handle());
        controls.set_visible(false, start);
        controls.handle(Message::Slider(slider::Message::Increment), start);
        collector.process_pending();
        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ControlEventKind::VisibilityChanged { visible: false },
                ControlEventKind::SeekEmitted { position_secs: 5.0 },
            ]
        );
    }
}
