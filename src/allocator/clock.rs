use std::sync::{
    Arc,
    Mutex,
};

use chrono::{
    Duration,
    NaiveDate,
    Utc,
};

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Source of the allocator's calendar day. Injected so tests (and hosts that
/// want a different day boundary) can control what "today" means.
pub trait Clock {
    fn date_key(&self) -> String;
}

/// UTC calendar date, matching the stored `YYYY-MM-DD` keys regardless of
/// where the user happens to be.
pub struct SystemClock;

impl Clock for SystemClock {
    fn date_key(&self) -> String {
        Utc::now().format(DATE_KEY_FORMAT).to_string()
    }
}

/// Manually advanced clock. Clones share the same date, so a test can keep a
/// handle while the allocator owns its own copy.
#[derive(Clone)]
pub struct FixedClock {
    current: Arc<Mutex<NaiveDate>>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { current: Arc::new(Mutex::new(date)) }
    }

    pub fn advance_days(&self, days: i64) {
        let mut current = self.current.lock().unwrap();
        *current += Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn date_key(&self) -> String {
        let current = self.current.lock().unwrap();
        current.format(DATE_KEY_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_shares_date_across_clones() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 8, 26).unwrap());
        let handle = clock.clone();

        assert_eq!(clock.date_key(), "2026-08-26");
        handle.advance_days(6);
        assert_eq!(clock.date_key(), "2026-09-01");
    }
}
