//! Logged records: daily field service entries and extra activities.
//!
//! Both record kinds keep their date as the string they were created with,
//! either a plain `YYYY-MM-DD` calendar date or an RFC 3339 timestamp. The date
//! is only interpreted when filtering by month, where an unreadable value
//! simply matches no month.

use super::period::{parse_record_date, Dated};
use super::time::Timed;
use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use uuid::Uuid;

/// Upper bound accepted for the study count of a single day.
pub const MAX_STUDIES_PER_DAY: i64 = 1000;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Date string for a record created "now".
pub fn now_stamp() -> String {
    Local::now().to_rfc3339()
}

/// Date string for a record created for a chosen calendar day.
pub fn day_stamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One logged day of field service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub id: String,
    pub date: String,
    pub hours: i64,
    pub minutes: i64,
    pub bible_studies: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyEntry {
    pub fn new(date: String, hours: i64, minutes: i64, bible_studies: i64, notes: Option<String>) -> Self {
        Self {
            id: new_id(),
            date,
            hours,
            minutes,
            bible_studies,
            notes: notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Secondary activity categories that earn credit hours.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    /// Local design/construction work
    #[serde(rename = "LDC")]
    #[value(name = "ldc")]
    Ldc,
    /// Assembly hall maintenance
    #[serde(rename = "AssemblyHall")]
    #[value(name = "assembly-hall")]
    AssemblyHall,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ActivityKind::Ldc => write!(f, "LDC"),
            ActivityKind::AssemblyHall => write!(f, "Assembly Hall"),
        }
    }
}

/// Time credited for a secondary activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub hours: i64,
    pub minutes: i64,
    pub date: String,
}

impl ExtraActivity {
    pub fn new(kind: ActivityKind, date: String, hours: i64, minutes: i64) -> Self {
        Self {
            id: new_id(),
            kind,
            hours,
            minutes,
            date,
        }
    }
}

impl Timed for DailyEntry {
    fn hours(&self) -> i64 {
        self.hours
    }

    fn minutes(&self) -> i64 {
        self.minutes
    }
}

impl Timed for ExtraActivity {
    fn hours(&self) -> i64 {
        self.hours
    }

    fn minutes(&self) -> i64 {
        self.minutes
    }
}

impl Dated for DailyEntry {
    fn date_str(&self) -> &str {
        &self.date
    }
}

impl Dated for ExtraActivity {
    fn date_str(&self) -> &str {
        &self.date
    }
}

/// Display order: newest first, unreadable dates last.
pub fn sort_newest_first<T: Dated>(records: &mut [&T]) {
    records.sort_by_key(|r| Reverse(parse_record_date(r.date_str())));
}
