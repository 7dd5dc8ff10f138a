use wasm_bindgen::prelude::*;

pub use crate::simulation::HexBackdrop;

use crate::domain::settings::{HourGuard, RotationSettings};
use crate::domain::taglines::TaglineSet;
use crate::systems::tagline::{FixedClock, MemoryStore, TaglineService};

/// JS handle for the tagline rotation service.
///
/// `start`/`poll` against the real browser clock and `localStorage` are
/// provided by the host adapter on wasm32; the `*_at` variants take an
/// explicit date and hour and use an in-memory store, which is what the
/// page's preview/testing tools use.
#[wasm_bindgen]
pub struct TaglineRotator {
    pub(crate) service: TaglineService,
    pub(crate) scratch: MemoryStore,
}

#[wasm_bindgen]
impl TaglineRotator {
    /// Default taglines and settings; `seed` feeds the re-roll PRNG
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            service: TaglineService::with_seed(seed),
            scratch: MemoryStore::new(),
        }
    }

    /// Custom tagline set (`{"taglines": [...]}`) and optional `RotationSettings` JSON
    #[wasm_bindgen(js_name = withTaglinesJson)]
    pub fn with_taglines_json(
        taglines_json: String,
        settings_json: Option<String>,
        seed: u32,
    ) -> Result<TaglineRotator, JsValue> {
        let taglines = TaglineSet::from_json(&taglines_json).map_err(|e| JsValue::from_str(&e))?;
        let settings = match settings_json {
            Some(json) => RotationSettings::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
            None => RotationSettings::default(),
        };
        Ok(Self {
            service: TaglineService::new(taglines, settings, seed),
            scratch: MemoryStore::new(),
        })
    }

    /// Opt into the once-per-day guard for the target-hour re-roll
    pub fn set_guard_once_per_day(&mut self, enabled: bool) {
        let guard = if enabled { HourGuard::OncePerDay } else { HourGuard::Unguarded };
        self.service.set_hour_guard(guard);
    }

    pub fn current(&self) -> Option<String> {
        self.service.current().map(str::to_string)
    }

    pub fn current_index(&self) -> Option<u32> {
        self.service.current_index().map(|i| i as u32)
    }

    pub fn tagline_count(&self) -> u32 {
        self.service.taglines().len() as u32
    }

    pub fn poll_interval_ms(&self) -> u32 {
        self.service.settings().poll_interval_ms
    }

    /// Initialize + immediate poll against an explicit date/hour
    pub fn start_at(&mut self, date: String, hour: u32) -> u32 {
        let clock = FixedClock::new(date, hour);
        self.service.start(&mut self.scratch, &clock) as u32
    }

    /// Hourly poll against an explicit date/hour
    pub fn poll_at(&mut self, date: String, hour: u32) -> bool {
        let clock = FixedClock::new(date, hour);
        self.service.poll(&mut self.scratch, &clock)
    }
}
