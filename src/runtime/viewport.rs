//! Viewport capability.
//!
//! The engine does not own rendering or layout. It reads the current scroll
//! offset, asks for the maximum scrollable offset (for clamping), and sets an
//! offset when restoring. UI layers implement this trait at the edge;
//! [`FakeViewport`] serves tests and the demo binary.

use crate::types::ScrollOffset;

/// A scrollable container seen from the persistence engine's side.
pub trait Viewport {
    /// Current scroll offset.
    fn offset(&self) -> ScrollOffset;

    /// Maximum valid scroll offset given the current content extents.
    fn max_offset(&self) -> ScrollOffset;

    /// Applies a scroll offset. Implementations may clamp to their own extents.
    fn set_offset(&mut self, offset: ScrollOffset);
}

/// In-memory viewport with settable content extents.
///
/// Behaves like a real scroll container: offsets are clamped into the valid
/// range, and shrinking the content re-clamps the current position.
#[derive(Debug, Clone)]
pub struct FakeViewport {
    offset: ScrollOffset,
    max: ScrollOffset,
}

impl FakeViewport {
    /// Creates a viewport whose content allows scrolling up to `(max_x, max_y)`.
    pub fn new(max_x: i64, max_y: i64) -> Self {
        Self {
            offset: ScrollOffset::default(),
            max: ScrollOffset::new(max_x, max_y),
        }
    }

    /// Simulates a user scroll to the given position (clamped).
    pub fn scroll_to(&mut self, x: i64, y: i64) {
        self.offset = ScrollOffset::new(x, y).clamp_to(self.max);
    }

    /// Changes the content extents, re-clamping the current offset.
    pub fn resize_content(&mut self, max_x: i64, max_y: i64) {
        self.max = ScrollOffset::new(max_x, max_y);
        self.offset = self.offset.clamp_to(self.max);
    }
}

impl Viewport for FakeViewport {
    fn offset(&self) -> ScrollOffset {
        self.offset
    }

    fn max_offset(&self) -> ScrollOffset {
        self.max
    }

    fn set_offset(&mut self, offset: ScrollOffset) {
        self.offset = offset.clamp_to(self.max);
    }
}
