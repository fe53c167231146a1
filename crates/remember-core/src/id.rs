//! Id and timestamp generation for new notes and todos.
//!
//! Ids are creation times in milliseconds since the Unix epoch, rendered as
//! decimal strings. A [`Stamper`] never hands out the same id twice: when two
//! stamps are taken within one millisecond the second id is bumped by one.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, Utc};

/// The id and `date` assigned to a freshly created entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    /// Millisecond timestamp id, e.g. `"1714564800000"`.
    pub id: String,
    /// ISO-8601 UTC timestamp with millisecond precision,
    /// e.g. `"2024-05-01T12:00:00.000Z"`.
    pub date: String,
}

impl Stamp {
    /// Builds a stamp from an explicit id and instant.
    pub fn new(id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Stamp {
            id: id.into(),
            date: format_date(at),
        }
    }
}

/// Renders an instant the way documents store `date` fields.
pub fn format_date(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a stored `date` field. Returns `None` for anything that is not
/// RFC 3339.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Monotonic source of [`Stamp`]s.
#[derive(Debug, Default)]
pub struct Stamper {
    last_millis: AtomicI64,
}

impl Stamper {
    pub fn new() -> Self {
        Stamper::default()
    }

    /// Stamps the current wall-clock time.
    pub fn stamp(&self) -> Stamp {
        self.stamp_at(Utc::now())
    }

    /// Stamps `now`, bumping the id past the previous one if the clock has
    /// not advanced.
    pub fn stamp_at(&self, now: DateTime<Utc>) -> Stamp {
        let millis = now.timestamp_millis();
        let next = |last: i64| if millis > last { millis } else { last + 1 };
        let previous = match self
            .last_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(next(last)))
        {
            Ok(prev) | Err(prev) => prev,
        };
        Stamp::new(next(previous).to_string(), now)
    }
}
