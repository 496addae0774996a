//! Deferring work to the next rendering opportunity
//!
//! Pointer moves can arrive many times per frame. The controller keeps only the
//! latest pointer position in a [`FrameSlot`] and asks the host for a frame;
//! when the host runs the frame it calls [`KnobArea::on_frame`] and the slot is
//! drained once.
//!
//! [`KnobArea::on_frame`]: super::area::KnobArea::on_frame

use std::cell::Cell;

use super::events::KnobId;

/// Host hook that arranges for a frame to run soon
///
/// A browser host maps this to `requestAnimationFrame`, a windowed host to a
/// redraw request. Repeated requests before the frame runs may be merged.
pub trait FrameScheduler {
    fn request_frame(&self, owner: KnobId);
}

/// Frame scheduler that only counts requests, for hosts that tick explicitly
#[derive(Debug, Default)]
pub struct ManualFrames {
    requested: Cell<u64>,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of frame requests received
    pub fn requested(&self) -> u64 {
        self.requested.get()
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self, _owner: KnobId) {
        self.requested.set(self.requested.get() + 1);
    }
}

/// Holds the most recently scheduled work item until the next frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSlot<T> {
    pending: Option<T>,
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedules `item`, discarding anything scheduled earlier
    pub fn schedule(&mut self, item: T) {
        self.pending = Some(item);
    }

    /// Removes the scheduled item, if any
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
