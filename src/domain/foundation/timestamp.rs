//! Timestamp value object for session activity tracking.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    ///
    /// Saturates at the latest representable instant.
    pub fn plus_secs(&self, secs: u64) -> Self {
        seconds(secs)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map_or(Self(DateTime::<Utc>::MAX_UTC), Self)
    }

    /// True when more than `secs` seconds separate this timestamp from `now`.
    ///
    /// A span too large to represent is never exceeded.
    pub fn is_idle_longer_than(&self, secs: u64, now: &Timestamp) -> bool {
        match seconds(secs) {
            Some(limit) => now.duration_since(self) > limit,
            None => false,
        }
    }
}

fn seconds(secs: u64) -> Option<Duration> {
    i64::try_from(secs).ok().and_then(Duration::try_seconds)
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn plus_secs_adds_correctly() {
        let ts = at("2024-01-15T10:30:00Z");
        assert_eq!(ts.plus_secs(90), at("2024-01-15T10:31:30Z"));
    }

    #[test]
    fn idle_check_is_strictly_greater_than() {
        let last_seen = at("2024-01-15T10:00:00Z");

        assert!(!last_seen.is_idle_longer_than(60, &at("2024-01-15T10:01:00Z")));
        assert!(last_seen.is_idle_longer_than(60, &at("2024-01-15T10:01:01Z")));
    }

    #[test]
    fn idle_check_ignores_clock_running_backwards() {
        let last_seen = at("2024-01-15T10:00:00Z");
        assert!(!last_seen.is_idle_longer_than(60, &at("2024-01-15T09:00:00Z")));
    }

    #[test]
    fn plus_secs_saturates_instead_of_overflowing() {
        let ts = at("2024-01-15T10:30:00Z");
        assert_eq!(ts.plus_secs(u64::MAX).as_datetime(), &DateTime::<Utc>::MAX_UTC);
        assert_eq!(
            ts.plus_secs(10_000_000_000_000_000).as_datetime(),
            &DateTime::<Utc>::MAX_UTC
        );
    }

    #[test]
    fn unrepresentable_idle_limit_is_never_exceeded() {
        let last_seen = at("2024-01-15T10:00:00Z");
        let much_later = at("2124-01-15T10:00:00Z");

        assert!(!last_seen.is_idle_longer_than(u64::MAX, &much_later));
        assert!(!last_seen.is_idle_longer_than(10_000_000_000_000_000, &much_later));
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let json = serde_json::to_string(&at("2024-01-15T10:30:00Z")).unwrap();
        assert!(json.contains("2024-01-15"));
    }
}
