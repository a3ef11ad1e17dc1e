// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability port.

use crate::error::PlatformError;

/// Switches the host window in and out of fullscreen.
pub trait FullscreenCapability {
    fn is_fullscreen(&self) -> bool;

    /// # Errors
    ///
    /// Returns [`PlatformError::Fullscreen`] if the window mode cannot change.
    fn set_fullscreen(&mut self, fullscreen: bool) -> Result<(), PlatformError>;
}
