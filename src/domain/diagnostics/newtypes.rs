// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

/// Event buffer capacity bounds (64 to 8192 events).
pub mod buffer_capacity_bounds {
    /// Smallest event buffer.
    pub const MIN: usize = 64;
    /// Largest event buffer.
    pub const MAX: usize = 8192;
    /// Buffer size used when nothing is configured.
    pub const DEFAULT: usize = 1000;
}

/// Number of diagnostic events kept in memory before the oldest is evicted.
///
/// A kiosk runs unattended for days, so the buffer must stay bounded no
/// matter what the configuration file says.
///
/// ```
/// use halfloop::domain::diagnostics::BufferCapacity;
///
/// let capacity = BufferCapacity::new(20_000);
/// assert_eq!(capacity.value(), 8192);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping into the allowed range.
    #[must_use]
    pub fn new(events: usize) -> Self {
        Self(events.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}
