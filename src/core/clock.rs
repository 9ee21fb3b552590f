//! # Clock
//!
//! Source of the creation/edit timestamps stored on every contact.
//! Injected into the navigator so tests can supply deterministic time.

use chrono::Utc;

/// Fixed-width, locale-independent format. Lexicographic order is
/// chronological order, which the `timeEdited >= timeCreated` check relies on.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

pub trait Clock {
    fn now(&self) -> String;
}

/// Wall clock in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }
}
