//! Daily tagline rotation
//!
//! State machine:
//! - `Uninitialized → Initialized(i)` on startup. A stored change date other
//!   than today re-rolls and persists `(i, today)`; otherwise the stored index
//!   is restored and nothing is written.
//! - `Initialized(i) → Initialized(j)` from the hourly poll when the local
//!   hour equals the target hour. With `HourGuard::Unguarded` every such poll
//!   re-rolls, so repeated polls inside the target hour re-roll repeatedly;
//!   `HourGuard::OncePerDay` skips the poll when today's change is already
//!   recorded.
//!
//! Missing or malformed stored values count as absent: an unreadable date
//! forces a re-roll, an unreadable or out-of-range index restores 0.

mod clock;
mod storage;

pub use clock::{CalendarDate, Clock, FixedClock};
pub use storage::{KeyValueStore, MemoryStore};

use crate::core::random::{normalize_seed, pick_index};
use crate::domain::settings::{HourGuard, RotationSettings};
use crate::domain::taglines::TaglineSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaglineState {
    Uninitialized,
    Initialized(usize),
}

#[derive(Clone, Debug)]
pub struct TaglineService {
    taglines: TaglineSet,
    settings: RotationSettings,
    state: TaglineState,
    rng_state: u32,
    rerolls: u32,
}

impl TaglineService {
    pub fn new(taglines: TaglineSet, settings: RotationSettings, seed: u32) -> Self {
        Self {
            taglines,
            settings,
            state: TaglineState::Uninitialized,
            rng_state: normalize_seed(seed),
            rerolls: 0,
        }
    }

    /// Default taglines and settings
    pub fn with_seed(seed: u32) -> Self {
        Self::new(TaglineSet::default(), RotationSettings::default(), seed)
    }

    pub fn state(&self) -> TaglineState { self.state }

    pub fn settings(&self) -> &RotationSettings { &self.settings }

    pub fn taglines(&self) -> &TaglineSet { &self.taglines }

    pub fn set_hour_guard(&mut self, guard: HourGuard) {
        self.settings.hour_guard = guard;
    }

    /// Re-rolls performed since construction
    pub fn rerolls(&self) -> u32 { self.rerolls }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            TaglineState::Initialized(i) => Some(i),
            TaglineState::Uninitialized => None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current_index().and_then(|i| self.taglines.get(i))
    }

    /// Restore today's tagline or roll a new one for a new day
    pub fn initialize<S, C>(&mut self, store: &mut S, clock: &C) -> usize
    where
        S: KeyValueStore + ?Sized,
        C: Clock + ?Sized,
    {
        let today = clock.today();
        let last_change = store.get(&self.settings.date_key);

        let index = if last_change.as_deref() != Some(today.as_str()) {
            self.reroll(store, &today)
        } else {
            let restored = self.stored_index(store).unwrap_or(0);
            self.state = TaglineState::Initialized(restored);
            restored
        };
        console_log!("tagline initialized: index {} for {}", index, today);
        index
    }

    /// Startup sequence of the page: initialize, then one immediate poll
    pub fn start<S, C>(&mut self, store: &mut S, clock: &C) -> usize
    where
        S: KeyValueStore + ?Sized,
        C: Clock + ?Sized,
    {
        let index = self.initialize(store, clock);
        if self.poll(store, clock) {
            return self.current_index().unwrap_or(index);
        }
        index
    }

    /// Hourly check; returns true when the tagline changed
    pub fn poll<S, C>(&mut self, store: &mut S, clock: &C) -> bool
    where
        S: KeyValueStore + ?Sized,
        C: Clock + ?Sized,
    {
        if self.state == TaglineState::Uninitialized {
            self.initialize(store, clock);
        }
        if clock.hour() != self.settings.target_hour {
            return false;
        }

        let today = clock.today();
        if self.settings.hour_guard == HourGuard::OncePerDay
            && store.get(&self.settings.date_key).as_deref() == Some(today.as_str())
        {
            return false;
        }

        let index = self.reroll(store, &today);
        console_log!("tagline re-rolled at hour {}: index {}", self.settings.target_hour, index);
        true
    }

    fn reroll<S>(&mut self, store: &mut S, today: &CalendarDate) -> usize
    where
        S: KeyValueStore + ?Sized,
    {
        let index = pick_index(&mut self.rng_state, self.taglines.len());
        self.state = TaglineState::Initialized(index);
        self.rerolls = self.rerolls.saturating_add(1);
        store.set(&self.settings.index_key, &index.to_string());
        store.set(&self.settings.date_key, today.as_str());
        index
    }

    fn stored_index<S>(&self, store: &S) -> Option<usize>
    where
        S: KeyValueStore + ?Sized,
    {
        store
            .get(&self.settings.index_key)?
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|i| *i < self.taglines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{DATE_KEY, INDEX_KEY};

    const TODAY: &str = "Sat Oct 17 2026";
    const YESTERDAY: &str = "Fri Oct 16 2026";

    fn store(date: &str, index: &str) -> MemoryStore {
        MemoryStore::with_entries([(DATE_KEY, date), (INDEX_KEY, index)])
    }

    #[test]
    fn same_day_restores_stored_index_without_writing() {
        let mut s = store(TODAY, "3");
        let mut svc = TaglineService::with_seed(42);
        assert_eq!(svc.initialize(&mut s, &FixedClock::new(TODAY, 10)), 3);
        assert_eq!(svc.state(), TaglineState::Initialized(3));
        assert_eq!(svc.current(), Some("Code is my arc reactor."));
        assert_eq!(s.writes(), 0);
    }

    #[test]
    fn new_day_rerolls_and_persists_today() {
        let mut s = store(YESTERDAY, "1");
        let mut svc = TaglineService::with_seed(42);
        let idx = svc.initialize(&mut s, &FixedClock::new(TODAY, 10));
        assert!(idx < 5);
        assert_eq!(s.get(DATE_KEY).as_deref(), Some(TODAY));
        assert_eq!(s.get(INDEX_KEY), Some(idx.to_string()));
        assert_eq!(svc.rerolls(), 1);
    }

    #[test]
    fn empty_store_forces_reroll() {
        let mut s = MemoryStore::new();
        let mut svc = TaglineService::with_seed(7);
        svc.initialize(&mut s, &FixedClock::new(TODAY, 0));
        assert_eq!(s.get(DATE_KEY).as_deref(), Some(TODAY));
        assert!(s.get(INDEX_KEY).is_some());
    }

    #[test]
    fn malformed_or_out_of_range_index_restores_zero() {
        for bad in ["abc", "9", "-1", ""] {
            let mut s = store(TODAY, bad);
            let mut svc = TaglineService::with_seed(1);
            assert_eq!(svc.initialize(&mut s, &FixedClock::new(TODAY, 12)), 0, "{:?}", bad);
            assert_eq!(s.writes(), 0);
        }
        let mut s = MemoryStore::with_entries([(DATE_KEY, TODAY)]);
        let mut svc = TaglineService::with_seed(1);
        assert_eq!(svc.initialize(&mut s, &FixedClock::new(TODAY, 12)), 0);
    }

    #[test]
    fn poll_outside_target_hour_is_a_no_op() {
        let mut s = store(TODAY, "2");
        let mut svc = TaglineService::with_seed(3);
        let clock = FixedClock::new(TODAY, 4);
        svc.initialize(&mut s, &clock);
        assert!(!svc.poll(&mut s, &clock));
        assert_eq!(svc.current_index(), Some(2));
        assert_eq!(s.writes(), 0);
    }

    #[test]
    fn unguarded_poll_rerolls_every_time_in_target_hour() {
        let mut s = store(TODAY, "2");
        let mut svc = TaglineService::with_seed(3);
        let clock = FixedClock::new(TODAY, 3);
        svc.initialize(&mut s, &clock);
        assert!(svc.poll(&mut s, &clock));
        assert!(svc.poll(&mut s, &clock));
        assert_eq!(svc.rerolls(), 2);
        assert_eq!(s.get(INDEX_KEY), svc.current_index().map(|i| i.to_string()));
    }

    #[test]
    fn once_per_day_guard_allows_one_reroll_per_date() {
        let mut s = MemoryStore::new();
        let mut svc = TaglineService::with_seed(3);
        svc.set_hour_guard(HourGuard::OncePerDay);

        // page opened late evening, left open past midnight
        let mut clock = FixedClock::new(YESTERDAY, 22);
        svc.initialize(&mut s, &clock);
        assert_eq!(svc.rerolls(), 1);

        clock.set(TODAY, 3);
        assert!(svc.poll(&mut s, &clock));
        assert_eq!(s.get(DATE_KEY).as_deref(), Some(TODAY));
        assert!(!svc.poll(&mut s, &clock));
        assert_eq!(svc.rerolls(), 2);
    }

    #[test]
    fn start_polls_immediately_after_initialize() {
        let mut s = store(TODAY, "4");
        let mut svc = TaglineService::with_seed(11);
        svc.start(&mut s, &FixedClock::new(TODAY, 9));
        assert_eq!(svc.current_index(), Some(4));
        assert_eq!(svc.rerolls(), 0);

        let mut s = store(TODAY, "4");
        let mut svc = TaglineService::with_seed(11);
        svc.start(&mut s, &FixedClock::new(TODAY, 3));
        assert_eq!(svc.rerolls(), 1);
        assert_eq!(s.get(INDEX_KEY), svc.current_index().map(|i| i.to_string()));
    }

    #[test]
    fn poll_before_initialize_initializes_first() {
        let mut s = store(TODAY, "1");
        let mut svc = TaglineService::with_seed(5);
        assert!(!svc.poll(&mut s, &FixedClock::new(TODAY, 8)));
        assert_eq!(svc.current_index(), Some(1));
    }

    #[test]
    fn same_seed_picks_same_tagline() {
        let clock = FixedClock::new(TODAY, 1);
        let mut a = TaglineService::with_seed(99);
        let mut b = TaglineService::with_seed(99);
        assert_eq!(
            a.initialize(&mut MemoryStore::new(), &clock),
            b.initialize(&mut MemoryStore::new(), &clock)
        );
    }
}
