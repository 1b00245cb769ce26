use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Scroll offset of a viewport, in device pixels.
///
/// Offsets are always non-negative; [`ScrollOffset::new`] clamps negative
/// inputs to zero so callers can pass raw viewport readings directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: i64,
    pub y: i64,
}

impl ScrollOffset {
    /// Creates an offset, clamping negative components to zero.
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            x: x.max(0),
            y: y.max(0),
        }
    }

    /// Clamps this offset into `[0, max]` on both axes.
    ///
    /// Used when restoring onto content that has shrunk since the offset
    /// was captured: the result is the nearest valid position, never an error.
    pub fn clamp_to(self, max: ScrollOffset) -> ScrollOffset {
        ScrollOffset {
            x: self.x.clamp(0, max.x.max(0)),
            y: self.y.clamp(0, max.y.max(0)),
        }
    }
}

/// A saved scroll position for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollEntry {
    pub x: i64,
    pub y: i64,
    /// Capture time in wall-clock milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl ScrollEntry {
    /// The stored position as a [`ScrollOffset`].
    pub fn offset(&self) -> ScrollOffset {
        ScrollOffset {
            x: self.x,
            y: self.y,
        }
    }

    /// Age of this entry relative to `now_ms`.
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.timestamp
    }
}

/// Route key → saved position. At most one live entry per route key.
pub type PositionMap = HashMap<String, ScrollEntry>;
