// SPDX-License-Identifier: MPL-2.0
//! Gesture router: turns one pointer stream into control intents.
//!
//! Pinch, double tap and single tap form an exclusive group. The first to be
//! recognized wins and the others fail. A single tap is only reported once the
//! double-tap window has closed, so [`GestureRouter::tick`] must be called
//! periodically to flush it.
//!
//! A press inside the thumb hit region (expanded by the hit slop) starts a pan
//! instead. The pan lives in its own slot: it reports its own lifecycle, never
//! competes with the group, and fingers elsewhere keep feeding the group while
//! it runs. It is only reachable while the controls are visible.

use super::pointer::{FingerId, PointerEvent, PointerPhase};
use crate::config::{PINCH_ACTIVATION_DELTA, TAP_MAX_DISTANCE};
use crate::domain::controls::{GestureTiming, HitSlop};
use iced::{Point, Rectangle};
use std::time::Instant;

/// Lifecycle of a thumb pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanPhase {
    /// A finger went down on the thumb.
    Began,
    /// The finger moved. `translation_x` is cumulative since `Began`.
    Changed { translation_x: f32 },
    /// The finger lifted after moving. Always followed by `Finalized`.
    Ended,
    /// The pan is over, whether it completed or not.
    Finalized,
}

/// What a recognized gesture asks the controls to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureIntent {
    ToggleVisibility,
    SkipBackward,
    SkipForward,
    ZoomIn,
    ZoomOut,
    ThumbPan(PanPhase),
}

/// Geometry and state the router needs to classify an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouterContext {
    /// Bounds of the area the double tap is split across.
    pub container: Rectangle,
    /// Unexpanded thumb bounds, once laid out.
    pub thumb_bounds: Option<Rectangle>,
    pub controls_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Contact {
    finger: FingerId,
    origin: Point,
    position: Point,
    pressed_at: Instant,
}

impl Contact {
    fn new(event: &PointerEvent) -> Self {
        Self {
            finger: event.finger,
            origin: event.position,
            position: event.position,
            pressed_at: event.at,
        }
    }
}

/// A completed first tap waiting for a possible second one.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingTap {
    released_at: Instant,
    /// Whether the tap was short enough to count as a single tap.
    single: bool,
}

/// The finger driving the thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ThumbPan {
    finger: FingerId,
    start_x: f32,
    activated: bool,
}

/// State of the exclusive pinch / double tap / single tap group.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Recognition {
    Idle,
    Tap {
        contact: Contact,
        second: bool,
    },
    Pinch {
        first: Contact,
        second: Contact,
        initial_distance: f32,
        recognized: bool,
    },
    /// Recognition failed; ignore input until every finger is up.
    Draining,
}

impl Recognition {
    fn pinch_scale(first: &Contact, second: &Contact, initial_distance: f32) -> f32 {
        if initial_distance <= f32::EPSILON {
            return 1.0;
        }
        first.position.distance(second.position) / initial_distance
    }
}

/// Classifies raw pointer events into [`GestureIntent`]s.
#[derive(Debug, Clone)]
pub struct GestureRouter {
    timing: GestureTiming,
    hit_slop: HitSlop,
    recognition: Recognition,
    pan: Option<ThumbPan>,
    pending: Option<PendingTap>,
    /// Fingers down that belong to the exclusive group.
    active: Vec<FingerId>,
}

impl GestureRouter {
    #[must_use]
    pub fn new(timing: GestureTiming, hit_slop: HitSlop) -> Self {
        Self {
            timing,
            hit_slop,
            recognition: Recognition::Idle,
            pan: None,
            pending: None,
            active: Vec::new(),
        }
    }

    /// Routes one pointer event.
    pub fn handle(&mut self, event: PointerEvent, ctx: &RouterContext) -> Vec<GestureIntent> {
        let mut intents = Vec::new();
        match event.phase {
            PointerPhase::Down => self.on_down(&event, ctx, &mut intents),
            PointerPhase::Move => self.on_move(&event, &mut intents),
            PointerPhase::Up => self.on_up(&event, ctx, &mut intents),
            PointerPhase::Cancel => self.on_cancel(&event, &mut intents),
        }
        intents
    }

    /// Reports a deferred single tap once the double-tap window has closed.
    pub fn tick(&mut self, now: Instant) -> Vec<GestureIntent> {
        let mut intents = Vec::new();
        let awaiting_second = matches!(self.recognition, Recognition::Tap { second: true, .. });
        if !awaiting_second {
            self.expire_pending(now, &mut intents);
        }
        intents
    }

    /// Drops all contacts, e.g. when the window loses focus.
    ///
    /// An active pan is finalized without completing.
    pub fn cancel_all(&mut self) -> Vec<GestureIntent> {
        let mut intents = Vec::new();
        if self.pan.take().is_some() {
            intents.push(GestureIntent::ThumbPan(PanPhase::Finalized));
        }
        self.recognition = Recognition::Idle;
        self.pending = None;
        self.active.clear();
        intents
    }

    /// When the pending single tap will be flushed, if one is waiting.
    #[must_use]
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending
            .map(|tap| tap.released_at + self.timing.double_tap_max_delay())
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Thumb bounds grown by the hit slop.
    #[must_use]
    pub fn thumb_hit_region(&self, thumb: Rectangle) -> Rectangle {
        Rectangle {
            x: thumb.x - self.hit_slop.left,
            y: thumb.y - self.hit_slop.top,
            width: thumb.width + self.hit_slop.left + self.hit_slop.right,
            height: thumb.height + self.hit_slop.top + self.hit_slop.bottom,
        }
    }

    fn hits_thumb(&self, ctx: &RouterContext, position: Point) -> bool {
        ctx.thumb_bounds
            .is_some_and(|thumb| self.thumb_hit_region(thumb).contains(position))
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    fn on_down(&mut self, event: &PointerEvent, ctx: &RouterContext, out: &mut Vec<GestureIntent>) {
        let flushed = self.expire_pending(event.at, out);
        let visible = ctx.controls_visible != flushed;

        if self.pan.is_none() && visible && self.hits_thumb(ctx, event.position) {
            self.pan = Some(ThumbPan {
                finger: event.finger,
                start_x: event.position.x,
                activated: false,
            });
            out.push(GestureIntent::ThumbPan(PanPhase::Began));
            return;
        }

        if !self.active.contains(&event.finger) {
            self.active.push(event.finger);
        }
        match self.recognition {
            Recognition::Idle => {
                self.recognition = Recognition::Tap {
                    contact: Contact::new(event),
                    second: self.pending.is_some(),
                };
            }
            Recognition::Tap { contact, .. } if contact.finger != event.finger => {
                // A second finger turns the tap into a pinch candidate.
                self.flush_pending(out);
                let second = Contact::new(event);
                self.recognition = Recognition::Pinch {
                    first: contact,
                    second,
                    initial_distance: contact.position.distance(second.position),
                    recognized: false,
                };
            }
            _ => {}
        }
    }

    fn on_move(&mut self, event: &PointerEvent, out: &mut Vec<GestureIntent>) {
        if let Some(pan) = self.pan.as_mut().filter(|pan| pan.finger == event.finger) {
            let translation_x = event.position.x - pan.start_x;
            if pan.activated || translation_x.abs() > f32::EPSILON {
                pan.activated = true;
                out.push(GestureIntent::ThumbPan(PanPhase::Changed { translation_x }));
            }
            return;
        }

        let mut tap_failed = false;
        match &mut self.recognition {
            Recognition::Tap { contact, .. } if contact.finger == event.finger => {
                contact.position = event.position;
                tap_failed = contact.origin.distance(event.position) > TAP_MAX_DISTANCE;
            }
            Recognition::Pinch {
                first,
                second,
                initial_distance,
                recognized,
            } => {
                if first.finger == event.finger {
                    first.position = event.position;
                } else if second.finger == event.finger {
                    second.position = event.position;
                }
                let scale = Recognition::pinch_scale(first, second, *initial_distance);
                if (scale - 1.0).abs() >= PINCH_ACTIVATION_DELTA {
                    *recognized = true;
                }
            }
            _ => {}
        }
        if tap_failed {
            self.flush_pending(out);
            self.recognition = Recognition::Draining;
        }
    }

    fn on_up(&mut self, event: &PointerEvent, ctx: &RouterContext, out: &mut Vec<GestureIntent>) {
        if let Some(pan) = self.take_pan(event.finger) {
            if pan.activated {
                out.push(GestureIntent::ThumbPan(PanPhase::Ended));
            }
            out.push(GestureIntent::ThumbPan(PanPhase::Finalized));
            return;
        }

        self.active.retain(|finger| *finger != event.finger);
        match self.recognition {
            Recognition::Tap { contact, second } if contact.finger == event.finger => {
                let held = event.at.saturating_duration_since(contact.pressed_at);
                if second {
                    if held <= self.timing.double_tap_max() {
                        self.pending = None;
                        let local_x = event.position.x - ctx.container.x;
                        out.push(if local_x < ctx.container.width / 2.0 {
                            GestureIntent::SkipBackward
                        } else {
                            GestureIntent::SkipForward
                        });
                    } else {
                        self.flush_pending(out);
                    }
                } else if held <= self.timing.double_tap_max() {
                    self.pending = Some(PendingTap {
                        released_at: event.at,
                        single: held <= self.timing.single_tap_max(),
                    });
                }
                self.recognition = Recognition::Draining;
            }
            Recognition::Pinch {
                first,
                second,
                initial_distance,
                recognized,
            } if first.finger == event.finger || second.finger == event.finger => {
                if recognized {
                    let scale = Recognition::pinch_scale(&first, &second, initial_distance);
                    out.push(if scale > 1.0 {
                        GestureIntent::ZoomOut
                    } else {
                        GestureIntent::ZoomIn
                    });
                }
                self.recognition = Recognition::Draining;
            }
            _ => {}
        }
        self.settle();
    }

    fn on_cancel(&mut self, event: &PointerEvent, out: &mut Vec<GestureIntent>) {
        if self.take_pan(event.finger).is_some() {
            out.push(GestureIntent::ThumbPan(PanPhase::Finalized));
            return;
        }

        self.active.retain(|finger| *finger != event.finger);
        match self.recognition {
            Recognition::Tap { contact, .. } if contact.finger == event.finger => {
                self.recognition = Recognition::Draining;
            }
            Recognition::Pinch { first, second, .. }
                if first.finger == event.finger || second.finger == event.finger =>
            {
                self.recognition = Recognition::Draining;
            }
            _ => {}
        }
        self.settle();
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn take_pan(&mut self, finger: FingerId) -> Option<ThumbPan> {
        self.pan.take_if(|pan| pan.finger == finger)
    }

    fn settle(&mut self) {
        if self.recognition == Recognition::Draining && self.active.is_empty() {
            self.recognition = Recognition::Idle;
        }
    }

    /// Reports the pending tap as a single tap. Returns true if it toggled.
    fn flush_pending(&mut self, out: &mut Vec<GestureIntent>) -> bool {
        match self.pending.take() {
            Some(tap) if tap.single => {
                out.push(GestureIntent::ToggleVisibility);
                true
            }
            _ => false,
        }
    }

    fn expire_pending(&mut self, now: Instant, out: &mut Vec<GestureIntent>) -> bool {
        let expired = self.pending.is_some_and(|tap| {
            now.saturating_duration_since(tap.released_at) > self.timing.double_tap_max_delay()
        });
        expired && self.flush_pending(out)
    }
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self::new(GestureTiming::default(), HitSlop::default())
    }
}
