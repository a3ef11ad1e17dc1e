// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

use crate::config::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

/// Number of control events the diagnostics ring buffer retains.
///
/// Always within 10–10000 events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCapacity(usize);

impl EventCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for EventCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

impl From<Option<usize>> for EventCapacity {
    fn from(value: Option<usize>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_capacity_clamps_to_bounds() {
        assert_eq!(EventCapacity::new(0).value(), MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(
            EventCapacity::new(1_000_000).value(),
            MAX_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(EventCapacity::new(250).value(), 250);
    }

    #[test]
    fn missing_config_value_uses_default() {
        assert_eq!(
            EventCapacity::from(None).value(),
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(EventCapacity::from(Some(42)).value(), 42);
    }
}
