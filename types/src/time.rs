//! Timestamps and the clock abstraction.
//!
//! Timestamps are Unix epoch seconds (UTC). Records only ever carry the
//! rendered form (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    ///
    /// A clock set before the epoch reads as the epoch.
    pub fn now() -> Self {
        Self(u64::try_from(Utc::now().timestamp()).unwrap_or(0))
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// The timestamp as a UTC date-time. Seconds beyond chrono's range
    /// clamp to its latest representable instant.
    fn to_utc(self) -> DateTime<Utc> {
        i64::try_from(self.0)
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Calendar date as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.to_utc().format("%Y-%m-%d").to_string()
    }

    /// Calendar date and time of day as `YYYY-MM-DD HH:MM`.
    pub fn datetime_string(&self) -> String {
        self.to_utc().format("%Y-%m-%d %H:%M").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_first_of_january_1970() {
        assert_eq!(Timestamp::EPOCH.date_string(), "1970-01-01");
        assert_eq!(Timestamp::EPOCH.datetime_string(), "1970-01-01 00:00");
    }

    #[test]
    fn formats_known_dates() {
        assert_eq!(Timestamp::new(1_710_460_800).date_string(), "2024-03-15");
        assert_eq!(
            Timestamp::new(1_710_513_000).datetime_string(),
            "2024-03-15 14:30"
        );
    }

    #[test]
    fn handles_leap_days() {
        // 2024-02-29 00:00:00 UTC
        assert_eq!(Timestamp::new(1_709_164_800).date_string(), "2024-02-29");
        // 2000-03-01 00:00:00 UTC
        assert_eq!(Timestamp::new(951_868_800).date_string(), "2000-03-01");
    }

    #[test]
    fn out_of_range_seconds_render_without_panicking() {
        let far = Timestamp::new(u64::MAX);
        assert_eq!(far.date_string().len(), far.datetime_string().len() - 6);
        assert_eq!(
            Timestamp::new(253_402_300_799).datetime_string(),
            "9999-12-31 23:59"
        );
    }
}
