use crate::systems::scheduler::FrameScheduler;

use super::BackdropCore;

pub(super) fn tick(core: &mut BackdropCore) -> bool {
    if !core.mounted {
        return false;
    }
    core.wave.advance()
}

pub(super) fn start<S: FrameScheduler + ?Sized>(core: &mut BackdropCore, scheduler: &mut S) -> bool {
    run_frame(core, scheduler)
}

pub(super) fn run_frame<S: FrameScheduler + ?Sized>(core: &mut BackdropCore, scheduler: &mut S) -> bool {
    if !core.mounted {
        return false;
    }
    tick(core);
    scheduler.request_frame();
    true
}

pub(super) fn teardown(core: &mut BackdropCore) {
    if !core.mounted {
        return;
    }
    core.mounted = false;
    core.pointer = None;
    core.hovered = None;
    core.draws.clear();
    core.draw_buffer.clear();
    console_log!("backdrop torn down after {} frames", core.wave.frame());
}

pub(super) fn teardown_with<S: FrameScheduler + ?Sized>(core: &mut BackdropCore, scheduler: &mut S) {
    teardown(core);
    scheduler.cancel();
}
