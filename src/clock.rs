//! Injected time source.
//!
//! Timestamp-dependent logic (savedAt defaults, undo deadlines, export file
//! names) goes through the [`Clock`] trait so tests can pin time instead of
//! reading the wall clock inline.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Trait defining the time source used by timestamp-dependent components.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Renders a timestamp as RFC 3339, the `savedAt` wire format.
pub fn iso_timestamp(t: OffsetDateTime) -> String {
    // Rfc3339 formatting of a UTC datetime cannot fail in practice.
    t.format(&Rfc3339).unwrap_or_default()
}
