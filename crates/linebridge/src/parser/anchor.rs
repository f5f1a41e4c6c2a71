//! Anchor — attach a calendar date to a bare time of day.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// How far ahead of "now" a stamp may land before it is read as yesterday's.
const MAX_FUTURE_SKEW_HOURS: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateAnchor {
    /// Current UTC date, rolled back a day for stamps written just before
    /// midnight and read just after it.
    #[default]
    Today,
    /// A fixed calendar date.
    Fixed(NaiveDate),
}

impl DateAnchor {
    pub fn resolve(&self, time: NaiveTime) -> DateTime<Utc> {
        self.resolve_at(time, Utc::now())
    }

    pub fn resolve_at(&self, time: NaiveTime, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            DateAnchor::Today => {
                let candidate = now.date_naive().and_time(time).and_utc();
                if candidate - now > TimeDelta::hours(MAX_FUTURE_SKEW_HOURS) {
                    candidate - TimeDelta::days(1)
                } else {
                    candidate
                }
            }
            DateAnchor::Fixed(date) => date.and_time(time).and_utc(),
        }
    }
}
