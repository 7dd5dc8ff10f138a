//! "Next frame" abstraction
//!
//! The backdrop never loops on its own: after each frame it asks a scheduler
//! for another one. In the browser that is `requestAnimationFrame`; in tests
//! `ManualScheduler` lets the caller fire frames one at a time.

pub trait FrameScheduler {
    /// Ask for one more frame callback (no-op if one is already pending)
    fn request_frame(&mut self);
    /// Drop the pending callback, if any
    fn cancel(&mut self);
    fn is_pending(&self) -> bool;
}

#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    pending: bool,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request; returns false if nothing was scheduled
    pub fn fire(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    /// Total accepted requests
    pub fn requested(&self) -> u64 { self.requested }

    pub fn cancelled(&self) -> u64 { self.cancelled }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        if !self.pending {
            self.pending = true;
            self.requested += 1;
        }
    }

    fn cancel(&mut self) {
        if self.pending {
            self.pending = false;
            self.cancelled += 1;
        }
    }

    fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_coalesce_until_fired() {
        let mut s = ManualScheduler::new();
        s.request_frame();
        s.request_frame();
        assert_eq!(s.requested(), 1);
        assert!(s.fire());
        assert!(!s.fire());
        s.request_frame();
        s.cancel();
        assert!(!s.is_pending());
        assert_eq!(s.cancelled(), 1);
    }
}
