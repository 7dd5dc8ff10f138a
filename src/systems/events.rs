//! Host events consumed by the backdrop

use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// Full viewport size, navbar included
    Resize { width: f32, height: f32 },
    PointerMove { x: f32, y: f32 },
    PointerLeave,
    AnimationFrame,
    Teardown,
}

/// Anything that can hand out host events one at a time
pub trait EventSource {
    fn next_event(&mut self) -> Option<HostEvent>;
}

impl EventSource for VecDeque<HostEvent> {
    fn next_event(&mut self) -> Option<HostEvent> {
        self.pop_front()
    }
}
