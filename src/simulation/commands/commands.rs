use crate::systems::events::{EventSource, HostEvent};
use crate::systems::hit_test::hit_test;
use crate::systems::scheduler::FrameScheduler;

use super::BackdropCore;

pub(super) fn resize(core: &mut BackdropCore, width: f32, height: f32) {
    if !core.mounted {
        return;
    }
    let changed = core.grid.resize(width, height);
    core.stats.resizes = core.stats.resizes.saturating_add(1);
    // The hovered cell belongs to the old geometry
    refresh_hover(core);
    if changed {
        let dims = core.grid.dimensions();
        console_log!(
            "backdrop grid {}x{} for viewport {}x{}",
            dims.columns,
            dims.rows,
            width,
            height
        );
    }
}

pub(super) fn pointer_move(core: &mut BackdropCore, x: f32, y: f32) {
    if !core.mounted {
        return;
    }
    core.pointer = Some((x, y));
    refresh_hover(core);
}

pub(super) fn pointer_leave(core: &mut BackdropCore) {
    core.pointer = None;
    core.hovered = None;
}

fn refresh_hover(core: &mut BackdropCore) {
    core.hovered = match core.pointer {
        Some((x, y)) => {
            let hit = hit_test(&core.grid, x, y);
            core.stats.hit_test_scans = hit.scanned;
            hit.cell
        }
        None => None,
    };
}

pub(super) fn handle_event<S: FrameScheduler + ?Sized>(
    core: &mut BackdropCore,
    event: HostEvent,
    scheduler: &mut S,
) -> bool {
    if !core.mounted {
        return false;
    }
    match event {
        HostEvent::Resize { width, height } => resize(core, width, height),
        HostEvent::PointerMove { x, y } => pointer_move(core, x, y),
        HostEvent::PointerLeave => pointer_leave(core),
        HostEvent::AnimationFrame => {
            core.run_frame(scheduler);
        }
        HostEvent::Teardown => core.teardown_with(scheduler),
    }
    true
}

pub(super) fn pump<E, S>(core: &mut BackdropCore, source: &mut E, scheduler: &mut S) -> usize
where
    E: EventSource + ?Sized,
    S: FrameScheduler + ?Sized,
{
    let mut applied = 0;
    while let Some(event) = source.next_event() {
        if handle_event(core, event, scheduler) {
            applied += 1;
        }
    }
    applied
}
