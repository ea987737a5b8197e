//! Hours and minutes arithmetic for logged service time.
//!
//! Every logged record carries its time as a separate `(hours, minutes)` pair,
//! and minutes are not bounded on input: a record of `1h 90m` is legal. This
//! module converts such pairs into normalized totals and renders them for
//! reports and tables.
//!
//! ## Format
//!
//! - Whole hours render as `"{h}h"`, e.g. `"4h"`
//! - Anything else renders as `"{h}h {m}m"`, e.g. `"4h 15m"`
//!
//! ## Examples
//!
//! ```rust
//! use fieldlog::libs::time::{format, normalize, sum, TimeTotal};
//!
//! assert_eq!(normalize(1, 90), TimeTotal { hours: 2, minutes: 30 });
//! assert_eq!(format(3, 0), "3h");
//! assert_eq!(sum([(2, 30), (1, 45)]).to_string(), "4h 15m");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MINUTES_PER_HOUR: i64 = 60;

/// Largest amount a single record may log: every hour of a 31-day month.
pub const MAX_RECORD_HOURS: i64 = 24 * 31;
pub const MAX_RECORD_MINUTES: i64 = MAX_RECORD_HOURS * MINUTES_PER_HOUR;

/// A normalized amount of time with `0 <= minutes < 60`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTotal {
    pub hours: i64,
    pub minutes: i64,
}

impl TimeTotal {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn total_minutes(&self) -> i64 {
        to_minutes(self.hours, self.minutes)
    }

    /// Fractional hours, used for proportional scaling (`2h 30m` → `2.5`).
    pub fn as_hours_f64(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / MINUTES_PER_HOUR as f64
    }

    fn from_minutes(total: i64) -> Self {
        // Euclidean split keeps minutes in 0..60 for negative totals too.
        Self {
            hours: total.div_euclid(MINUTES_PER_HOUR),
            minutes: total.rem_euclid(MINUTES_PER_HOUR),
        }
    }
}

impl fmt::Display for TimeTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            write!(f, "{}h", self.hours)
        } else {
            write!(f, "{}h {}m", self.hours, self.minutes)
        }
    }
}

/// Anything that carries an `(hours, minutes)` pair.
pub trait Timed {
    fn hours(&self) -> i64;
    fn minutes(&self) -> i64;
}

impl Timed for (i64, i64) {
    fn hours(&self) -> i64 {
        self.0
    }

    fn minutes(&self) -> i64 {
        self.1
    }
}

impl<T: Timed + ?Sized> Timed for &T {
    fn hours(&self) -> i64 {
        (**self).hours()
    }

    fn minutes(&self) -> i64 {
        (**self).minutes()
    }
}

/// `hours * 60 + minutes`, saturating at the `i64` bounds so stored records
/// with absurd values cannot abort an aggregation.
fn to_minutes(hours: i64, minutes: i64) -> i64 {
    hours.saturating_mul(MINUTES_PER_HOUR).saturating_add(minutes)
}

/// Re-splits `hours * 60 + minutes` into hours and remainder minutes.
///
/// No bounds checking is done: negative inputs give a negative total.
pub fn normalize(hours: i64, minutes: i64) -> TimeTotal {
    TimeTotal::from_minutes(to_minutes(hours, minutes))
}

/// Renders a pair as `"{h}h"` or `"{h}h {m}m"` after normalization.
pub fn format(hours: i64, minutes: i64) -> String {
    normalize(hours, minutes).to_string()
}

/// Sums records by accumulating raw minutes, then normalizes once.
pub fn sum<I>(records: I) -> TimeTotal
where
    I: IntoIterator,
    I::Item: Timed,
{
    let total = records
        .into_iter()
        .fold(0i64, |acc, record| acc.saturating_add(to_minutes(record.hours(), record.minutes())));
    TimeTotal::from_minutes(total)
}
