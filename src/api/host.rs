//! Browser adapters: the only place that touches `window`.
//!
//! Each mount owns its closures so `unmount` can deregister exactly what it
//! registered. Shared state lives in `Rc<RefCell<_>>`; every borrow is
//! released before calling back into JS, so a render callback may unmount.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Date, Float32Array, Function, Math};
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Storage, Window};

use super::wasm::TaglineRotator;
use crate::core::random::seed_from_unit;
use crate::domain::settings::GridSettings;
use crate::simulation::BackdropCore;
use crate::systems::scheduler::FrameScheduler;
use crate::systems::tagline::{CalendarDate, Clock, KeyValueStore, TaglineService};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn viewport_size(window: &Window) -> Result<(f32, f32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as f32, height as f32))
}

/// Fresh PRNG seed from `Math.random()`
pub fn random_seed() -> u32 {
    seed_from_unit(Math::random())
}

// === STORAGE / CLOCK ===

/// `window.localStorage`
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    pub fn open() -> Result<Self, JsValue> {
        let storage = window()?
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            console_warn!("localStorage write of {} failed: {:?}", key, err);
        }
    }
}

/// Local time via `Date`
pub struct JsClock;

impl Clock for JsClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::new(String::from(Date::new_0().to_date_string()))
    }

    fn hour(&self) -> u32 {
        Date::new_0().get_hours()
    }
}

// === ANIMATION FRAMES ===

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` behind the scheduler seam
pub struct RafScheduler {
    window: Window,
    slot: FrameSlot,
    handle: Option<i32>,
}

impl RafScheduler {
    fn new(window: Window, slot: FrameSlot) -> Self {
        Self { window, slot, handle: None }
    }

    /// The pending frame has been delivered
    fn frame_fired(&mut self) {
        self.handle = None;
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let slot = self.slot.borrow();
        if let Some(callback) = slot.as_ref() {
            match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(handle) => self.handle = Some(handle),
                Err(err) => console_warn!("requestAnimationFrame failed: {:?}", err),
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                console_warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
    }

    fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

// === BACKDROP MOUNT ===

struct BackdropShared {
    core: BackdropCore,
    scheduler: RafScheduler,
}

type Shared<T> = Rc<RefCell<T>>;

/// Live backdrop wired to the window; drop or `unmount` to detach
#[wasm_bindgen]
pub struct BackdropMount {
    window: Window,
    shared: Shared<BackdropShared>,
    frame_slot: FrameSlot,
    on_resize: Option<Closure<dyn FnMut(Event)>>,
    on_move: Option<Closure<dyn FnMut(MouseEvent)>>,
    on_out: Option<Closure<dyn FnMut(MouseEvent)>>,
}

/// Mount the backdrop on the window.
///
/// `render` is called with a `Float32Array` of packed draws (see
/// `draw_stride`) after every frame. `settings_json` is an optional partial
/// `GridSettings` override.
#[wasm_bindgen]
pub fn mount_backdrop(render: Function, settings_json: Option<String>) -> Result<BackdropMount, JsValue> {
    let window = window()?;
    let settings = match settings_json {
        Some(json) => GridSettings::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
        None => GridSettings::default(),
    };
    let (width, height) = viewport_size(&window)?;
    let core = BackdropCore::with_settings(settings, width, height).map_err(|e| JsValue::from_str(&e))?;

    let frame_slot: FrameSlot = Rc::new(RefCell::new(None));
    let shared = Rc::new(RefCell::new(BackdropShared {
        core,
        scheduler: RafScheduler::new(window.clone(), frame_slot.clone()),
    }));

    // Frame loop
    {
        let shared = shared.clone();
        let callback = Closure::wrap(Box::new(move |_timestamp: f64| {
            let packed = {
                let mut guard = shared.borrow_mut();
                let BackdropShared { core, scheduler } = &mut *guard;
                scheduler.frame_fired();
                if !core.run_frame(scheduler) {
                    return;
                }
                core.collect_draws();
                Float32Array::from(core.draw_buffer())
            };
            if let Err(err) = render.call1(&JsValue::NULL, &packed) {
                console_warn!("backdrop render callback threw: {:?}", err);
            }
        }) as Box<dyn FnMut(f64)>);
        *frame_slot.borrow_mut() = Some(callback);
    }

    // Viewport listeners
    let on_resize = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |_event: Event| {
            let size = web_sys::window().map(|w| viewport_size(&w));
            match size {
                Some(Ok((width, height))) => shared.borrow_mut().core.resize(width, height),
                Some(Err(err)) => console_warn!("viewport size unavailable: {:?}", err),
                None => {}
            }
        }) as Box<dyn FnMut(Event)>)
    };
    let on_move = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            shared
                .borrow_mut()
                .core
                .pointer_move(event.client_x() as f32, event.client_y() as f32);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let on_out = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            // relatedTarget is null only when the pointer left the document
            if event.related_target().is_none() {
                shared.borrow_mut().core.pointer_leave();
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("mouseout", on_out.as_ref().unchecked_ref())?;

    {
        let mut guard = shared.borrow_mut();
        let BackdropShared { core, scheduler } = &mut *guard;
        core.start(scheduler);
    }
    console_log!("backdrop mounted at {}x{}", width, height);

    Ok(BackdropMount {
        window,
        shared,
        frame_slot,
        on_resize: Some(on_resize),
        on_move: Some(on_move),
        on_out: Some(on_out),
    })
}

#[wasm_bindgen]
impl BackdropMount {
    pub fn is_mounted(&self) -> bool {
        self.shared.borrow().core.is_mounted()
    }

    pub fn hovered_row(&self) -> Option<u32> {
        self.shared.borrow().core.hovered().map(|c| c.row)
    }

    pub fn hovered_column(&self) -> Option<u32> {
        self.shared.borrow().core.hovered().map(|c| c.column)
    }

    /// Stop the frame loop and remove every listener. Idempotent.
    pub fn unmount(&mut self) {
        if let Ok(mut guard) = self.shared.try_borrow_mut() {
            let BackdropShared { core, scheduler } = &mut *guard;
            core.teardown_with(scheduler);
        }
        detach(&self.window, "resize", self.on_resize.take());
        detach(&self.window, "mousemove", self.on_move.take());
        detach(&self.window, "mouseout", self.on_out.take());
        // Breaks the slot -> closure -> shared -> scheduler -> slot cycle
        self.frame_slot.borrow_mut().take();
    }
}

fn detach<T: WasmClosure + ?Sized>(window: &Window, kind: &str, callback: Option<Closure<T>>) {
    let Some(callback) = callback else { return };
    let function: &Function = callback.as_ref().unchecked_ref();
    if let Err(err) = window.remove_event_listener_with_callback(kind, function) {
        console_warn!("removing {} listener failed: {:?}", kind, err);
    }
}

impl Drop for BackdropMount {
    fn drop(&mut self) {
        self.unmount();
    }
}

// === TAGLINE MOUNT ===

struct TaglineShared {
    service: TaglineService,
    store: BrowserStore,
}

/// Live tagline rotation against `localStorage` and the local clock
#[wasm_bindgen]
pub struct TaglineMount {
    window: Window,
    shared: Shared<TaglineShared>,
    interval: Option<i32>,
    on_poll: Option<Closure<dyn FnMut()>>,
}

/// Restore or roll today's tagline, call `render(text)`, then re-check hourly.
/// `taglines_json` optionally replaces the default set (`{"taglines": [...]}`).
#[wasm_bindgen]
pub fn mount_tagline(render: Function, taglines_json: Option<String>) -> Result<TaglineMount, JsValue> {
    let window = window()?;
    let mut rotator = match taglines_json {
        Some(json) => TaglineRotator::with_taglines_json(json, None, random_seed())?,
        None => TaglineRotator::new(random_seed()),
    };
    let mut store = BrowserStore::open()?;
    rotator.service.start(&mut store, &JsClock);
    let interval_ms = rotator.service.settings().poll_interval_ms as i32;

    let emit = move |text: Option<&str>| {
        if let Some(text) = text {
            if let Err(err) = render.call1(&JsValue::NULL, &JsValue::from_str(text)) {
                console_warn!("tagline render callback threw: {:?}", err);
            }
        }
    };
    emit(rotator.service.current());

    let shared = Rc::new(RefCell::new(TaglineShared { service: rotator.service, store }));
    let on_poll = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move || {
            let text = {
                let mut guard = shared.borrow_mut();
                let TaglineShared { service, store } = &mut *guard;
                if !service.poll(store, &JsClock) {
                    return;
                }
                service.current().map(str::to_string)
            };
            emit(text.as_deref());
        }) as Box<dyn FnMut()>)
    };
    let interval = window.set_interval_with_callback_and_timeout_and_arguments_0(
        on_poll.as_ref().unchecked_ref(),
        interval_ms,
    )?;

    Ok(TaglineMount {
        window,
        shared,
        interval: Some(interval),
        on_poll: Some(on_poll),
    })
}

#[wasm_bindgen]
impl TaglineMount {
    pub fn current(&self) -> Option<String> {
        self.shared.borrow().service.current().map(str::to_string)
    }

    pub fn current_index(&self) -> Option<u32> {
        self.shared.borrow().service.current_index().map(|i| i as u32)
    }

    /// Clear the hourly interval. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.interval.take() {
            self.window.clear_interval_with_handle(handle);
        }
        self.on_poll.take();
    }
}

impl Drop for TaglineMount {
    fn drop(&mut self) {
        self.unmount();
    }
}

// Browser-backed start/poll for the standalone rotator
#[wasm_bindgen]
impl TaglineRotator {
    /// Initialize from `localStorage` + immediate poll; returns the index
    pub fn start(&mut self) -> Result<u32, JsValue> {
        let mut store = BrowserStore::open()?;
        Ok(self.service.start(&mut store, &JsClock) as u32)
    }

    /// Hourly check against the local clock; true when the tagline changed
    pub fn poll(&mut self) -> Result<bool, JsValue> {
        let mut store = BrowserStore::open()?;
        Ok(self.service.poll(&mut store, &JsClock))
    }
}
