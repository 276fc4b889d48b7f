//! Coalescing of high-frequency updates onto paint boundaries.
//!
//! Pointer and touch moves can arrive many times per rendered frame. Only the
//! latest position before a paint matters, so moves are parked in a single
//! pending slot and one frame callback is scheduled per burst. The slot knows
//! nothing about how the callback is scheduled; the host uses
//! `requestAnimationFrame`, tests just call [`FrameSlot::take`].

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// One pending value plus a flag recording whether a frame callback is
/// already outstanding.
#[derive(Debug, Clone)]
pub struct FrameSlot<T> {
    pending: Option<T>,
    scheduled: bool,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { pending: None, scheduled: false }
    }
}

impl<T> FrameSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Park `value`, replacing anything already pending.
    ///
    /// Returns `true` when the caller must schedule a frame callback, i.e.
    /// when none is outstanding yet.
    pub fn offer(&mut self, value: T) -> bool {
        self.pending = Some(value);
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    /// Called from the frame callback: hand out the latest value and allow
    /// the next offer to schedule again.
    pub fn take(&mut self) -> Option<T> {
        self.scheduled = false;
        self.pending.take()
    }

    /// Take the pending value immediately, without waiting for the frame.
    ///
    /// The outstanding callback, if any, still fires and finds the slot empty.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop any pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
