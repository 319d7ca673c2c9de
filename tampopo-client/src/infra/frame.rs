//! Frame callback scheduling.
//!
//! Components never run their own timers. They ask a [`FrameScheduler`] for
//! the next display frame and get back a [`FrameHandle`]; when the host
//! delivers that frame it routes the handle back to whoever requested it.
//! A component only acts on the handle it currently holds, so a cancelled or
//! superseded request that still gets delivered is ignored.

use std::fmt;

/// Identifies one pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// Host hook for "run me on the next display frame".
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancelling an unknown or already delivered handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}

/// Scheduler driven by the caller: requests queue up until the caller takes
/// them with [`ManualFrameScheduler::take_due`] and dispatches them.
///
/// Used by the demo binary and by tests to step frames deterministically.
#[derive(Debug, Default, Clone)]
pub struct ManualFrameScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
    requested_total: u64,
    cancelled_total: u64,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }

    /// Drains the requests made so far, oldest first. Requests made while
    /// dispatching these land in the next batch.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }

    pub fn requested_total(&self) -> u64 {
        self.requested_total
    }

    pub fn cancelled_total(&self) -> u64 {
        self.cancelled_total
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested_total += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != handle);
        if self.pending.len() != before {
            self.cancelled_total += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_ordered() {
        let mut scheduler = ManualFrameScheduler::new();
        let a = scheduler.request_frame();
        let b = scheduler.request_frame();
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(scheduler.pending(), &[a, b]);
    }

    #[test]
    fn cancel_removes_only_that_request() {
        let mut scheduler = ManualFrameScheduler::new();
        let a = scheduler.request_frame();
        let b = scheduler.request_frame();
        scheduler.cancel_frame(a);
        scheduler.cancel_frame(a);

        assert_eq!(scheduler.pending(), &[b]);
        assert_eq!(scheduler.cancelled_total(), 1);
    }

    #[test]
    fn take_due_drains_the_batch() {
        let mut scheduler = ManualFrameScheduler::new();
        let a = scheduler.request_frame();
        assert_eq!(scheduler.take_due(), vec![a]);
        assert!(!scheduler.has_pending());

        let b = scheduler.request_frame();
        assert!(scheduler.is_pending(b));
        assert_eq!(scheduler.requested_total(), 2);
    }
}
