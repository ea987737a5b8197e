//! Calendar-month selection over dated records.
//!
//! A record belongs to a month when its calendar date has the same month and
//! year, so the last day of one month and the first day of the next always
//! land in different months regardless of how many days lie between them.

use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Records with a stored date string.
pub trait Dated {
    fn date_str(&self) -> &str;
}

/// A calendar month. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Shifts by `delta` months, rolling over year boundaries.
    pub fn offset(self, delta: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + delta;
        Self::new(index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parses `YYYY-MM`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (year, month) = raw.trim().split_once('-')?;
        let month: u32 = month.parse().ok()?;
        (1..=12).contains(&month).then_some(Self::new(year.parse().ok()?, month))
    }

    /// The day a view of this month is computed for: `today` in the current
    /// month, the first of the month otherwise.
    pub fn reference_day(self, today: NaiveDate) -> Option<NaiveDate> {
        if self.contains(today) {
            return Some(today);
        }
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

/// Parses a stored record date into a calendar day.
///
/// Plain `YYYY-MM-DD` values are taken as-is. Full timestamps are converted to
/// the local calendar date. Anything else yields `None`.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.with_timezone(&Local).date_naive())
}

/// Records dated within `month`, in their original relative order.
pub fn select_month<T: Dated>(records: &[T], month: YearMonth) -> Vec<&T> {
    records
        .iter()
        .filter(|record| parse_record_date(record.date_str()).is_some_and(|date| month.contains(date)))
        .collect()
}

/// The `count` months ending with the month of `today`, oldest first.
pub fn trailing_months(today: NaiveDate, count: u32) -> Vec<YearMonth> {
    let current = YearMonth::of(today);
    (0..count as i32).rev().map(|back| current.offset(-back)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rolls_over_years() {
        assert_eq!(YearMonth::new(2025, 1).offset(-2), YearMonth::new(2024, 11));
        assert_eq!(YearMonth::new(2025, 12).offset(1), YearMonth::new(2026, 1));
        assert_eq!(YearMonth::new(2025, 3).offset(0), YearMonth::new(2025, 3));
        assert_eq!(YearMonth::new(2025, 2).offset(-14), YearMonth::new(2023, 12));
    }

    #[test]
    fn parse_accepts_plain_dates_and_rejects_garbage() {
        assert_eq!(parse_record_date("2025-01-31"), NaiveDate::from_ymd_opt(2025, 1, 31));
        assert_eq!(parse_record_date("not a date"), None);
        assert_eq!(parse_record_date(""), None);
        assert!(parse_record_date("2025-01-15T12:00:00.000Z").is_some());
    }

    #[test]
    fn parse_month_argument() {
        assert_eq!(YearMonth::parse("2024-12"), Some(YearMonth::new(2024, 12)));
        assert_eq!(YearMonth::parse("2024-13"), None);
        assert_eq!(YearMonth::parse("dezembro"), None);
    }

    #[test]
    fn reference_day_of_past_month_is_its_first() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 27).unwrap();
        assert_eq!(YearMonth::new(2025, 3).reference_day(today), Some(today));
        assert_eq!(YearMonth::new(2025, 1).reference_day(today), NaiveDate::from_ymd_opt(2025, 1, 1));
    }

    #[test]
    fn trailing_months_are_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(
            trailing_months(today, 3),
            vec![YearMonth::new(2024, 11), YearMonth::new(2024, 12), YearMonth::new(2025, 1)]
        );
    }
}
