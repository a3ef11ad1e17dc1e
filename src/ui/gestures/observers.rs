// SPDX-License-Identifier: MPL-2.0
//! Auxiliary recognizers that run alongside the thumb pan.
//!
//! Observers see every pan phase but cannot influence the seek. They exist
//! for visual effects such as enlarging the thumb while it is held.

use super::router::PanPhase;
use crate::config::THUMB_PRESSED_SCALE;
use std::fmt::Debug;

/// Receives thumb pan phases simultaneously with the seek reconciler.
pub trait ThumbObserver: Debug {
    fn on_pan(&mut self, phase: PanPhase);

    /// Scale the observer wants applied to the thumb. 1.0 means none.
    fn thumb_scale(&self) -> f32 {
        1.0
    }
}

/// Enlarges the thumb while a pan is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbPressScale {
    pressed: bool,
}

impl ThumbObserver for ThumbPressScale {
    fn on_pan(&mut self, phase: PanPhase) {
        match phase {
            PanPhase::Began | PanPhase::Changed { .. } => self.pressed = true,
            PanPhase::Ended | PanPhase::Finalized => self.pressed = false,
        }
    }

    fn thumb_scale(&self) -> f32 {
        if self.pressed {
            THUMB_PRESSED_SCALE
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn press_scale_follows_pan() {
        let mut observer = ThumbPressScale::default();
        assert_abs_diff_eq!(observer.thumb_scale(), 1.0);
        observer.on_pan(PanPhase::Began);
        assert_abs_diff_eq!(observer.thumb_scale(), THUMB_PRESSED_SCALE);
        observer.on_pan(PanPhase::Finalized);
        assert_abs_diff_eq!(observer.thumb_scale(), 1.0);
    }
}
