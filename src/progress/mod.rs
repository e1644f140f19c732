use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    allocator::{
        Clock,
        DATE_KEY_FORMAT,
    },
    core::GundelikError,
    persistence::{
        self,
        KeyValueStore,
    },
};

pub const USER_PROGRESS_KEY: &str = "user_progress";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressData {
    pub streak: u32,
    pub last_study_date: Option<String>,
}

/// Consecutive-day study streak. A session on the day after the last one
/// extends the streak; any gap restarts it at 1; a second session on the
/// same day changes nothing.
pub struct ProgressTracker {
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    data: ProgressData,
}

impl ProgressTracker {
    pub fn load(store: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> Result<Self, GundelikError> {
        let data = persistence::load_or_default(store.as_ref(), USER_PROGRESS_KEY)?;
        Ok(Self { store, clock, data })
    }

    pub fn record_study_session(&mut self) -> Result<u32, GundelikError> {
        let today = self.clock.date_key();
        if self.data.last_study_date.as_deref() == Some(today.as_str()) {
            return Ok(self.data.streak);
        }

        let continues = self
            .data
            .last_study_date
            .as_deref()
            .and_then(|last| days_between(last, &today))
            .map(|gap| gap == 1)
            .unwrap_or(false);

        self.data.streak = if continues { self.data.streak + 1 } else { 1 };
        self.data.last_study_date = Some(today);
        persistence::store(self.store.as_mut(), USER_PROGRESS_KEY, &self.data)?;
        Ok(self.data.streak)
    }

    pub fn streak(&self) -> u32 {
        self.data.streak
    }

    pub fn last_study_date(&self) -> Option<&str> {
        self.data.last_study_date.as_deref()
    }
}

fn days_between(from: &str, to: &str) -> Option<i64> {
    let from = NaiveDate::parse_from_str(from, DATE_KEY_FORMAT).ok()?;
    let to = NaiveDate::parse_from_str(to, DATE_KEY_FORMAT).ok()?;
    Some((to - from).num_days())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        allocator::FixedClock,
        persistence::MemoryStore,
    };

    fn tracker_at(clock: &FixedClock) -> ProgressTracker {
        ProgressTracker::load(Box::new(MemoryStore::new()), Box::new(clock.clone())).unwrap()
    }

    #[test]
    fn consecutive_days_extend_the_streak() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
        let mut tracker = tracker_at(&clock);

        assert_eq!(tracker.record_study_session().unwrap(), 1);
        clock.advance_days(1);
        assert_eq!(tracker.record_study_session().unwrap(), 2);
        clock.advance_days(1);
        assert_eq!(tracker.record_study_session().unwrap(), 3);
    }

    #[test]
    fn same_day_session_does_not_double_count() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
        let mut tracker = tracker_at(&clock);

        assert_eq!(tracker.record_study_session().unwrap(), 1);
        assert_eq!(tracker.record_study_session().unwrap(), 1);
    }

    #[test]
    fn missed_day_restarts_the_streak() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());
        let mut tracker = tracker_at(&clock);

        tracker.record_study_session().unwrap();
        clock.advance_days(1);
        tracker.record_study_session().unwrap();
        clock.advance_days(3);
        assert_eq!(tracker.record_study_session().unwrap(), 1);
    }

    #[test]
    fn streak_survives_reload() {
        let store = MemoryStore::new();
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());

        let mut tracker =
            ProgressTracker::load(Box::new(store.clone()), Box::new(clock.clone())).unwrap();
        tracker.record_study_session().unwrap();
        clock.advance_days(1);
        tracker.record_study_session().unwrap();

        let reloaded = ProgressTracker::load(Box::new(store), Box::new(clock.clone())).unwrap();
        assert_eq!(reloaded.streak(), 2);
        assert_eq!(reloaded.last_study_date(), Some("2026-08-25"));
    }
}
