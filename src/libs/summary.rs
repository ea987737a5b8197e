//! Monthly aggregation: totals, goal progress, the three-month trend and the
//! end-of-month reminder.

use super::entry::{DailyEntry, ExtraActivity};
use super::period::{select_month, trailing_months, YearMonth};
use super::time::{sum, TimeTotal};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Smallest bar fraction drawn for a month, so empty months stay visible.
pub const BAR_FLOOR: f64 = 0.12;

/// Months shown in the trend, current month included.
pub const TREND_MONTHS: u32 = 3;

/// Day of month from which the closing reminder is shown.
pub const DEFAULT_REMINDER_DAY: u32 = 25;

const SHORT_MONTHS: [&str; 12] = ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez"];

pub fn total_field(entries: &[DailyEntry], today: NaiveDate) -> TimeTotal {
    sum(select_month(entries, YearMonth::of(today)))
}

pub fn total_studies(entries: &[DailyEntry], today: NaiveDate) -> i64 {
    select_month(entries, YearMonth::of(today)).iter().fold(0i64, |acc, e| acc.saturating_add(e.bible_studies))
}

pub fn total_credits(extras: &[ExtraActivity], today: NaiveDate) -> TimeTotal {
    sum(select_month(extras, YearMonth::of(today)))
}

/// Totals for the month containing `today`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub field: TimeTotal,
    pub studies: i64,
    pub credits: TimeTotal,
    pub notes: Vec<String>,
}

impl MonthlySummary {
    pub fn compute(entries: &[DailyEntry], extras: &[ExtraActivity], today: NaiveDate) -> Self {
        let month = YearMonth::of(today);
        let notes = select_month(entries, month)
            .into_iter()
            .filter_map(|e| e.notes.clone())
            .filter(|n| !n.trim().is_empty())
            .collect();

        Self {
            month,
            field: total_field(entries, today),
            studies: total_studies(entries, today),
            credits: total_credits(extras, today),
            notes,
        }
    }

    /// Payload handed to the insight generator.
    pub fn insight_payload(&self) -> InsightPayload<'_> {
        InsightPayload {
            field_hours: self.field.hours,
            studies: self.studies,
            notes: &self.notes,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightPayload<'a> {
    pub field_hours: i64,
    pub studies: i64,
    pub notes: &'a [String],
}

/// One month of the trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub month: YearMonth,
    pub label: String,
    /// Fractional hours, used for scaling.
    pub hours: f64,
    /// Whole hours, used for display.
    pub display_hours: i64,
    /// Bar height as a fraction of the tallest possible bar.
    pub bar: f64,
}

/// Field time for the trailing three months, oldest first, scaled against
/// the larger of the busiest month and the goal.
pub fn trend(entries: &[DailyEntry], goal: f64, today: NaiveDate) -> Vec<TrendPoint> {
    let totals: Vec<(YearMonth, TimeTotal)> = trailing_months(today, TREND_MONTHS)
        .into_iter()
        .map(|month| (month, sum(select_month(entries, month))))
        .collect();

    let peak = totals.iter().map(|(_, total)| total.as_hours_f64()).fold(goal, f64::max);
    let denominator = if peak > 0.0 { peak } else { 1.0 };

    totals
        .into_iter()
        .map(|(month, total)| {
            let hours = total.as_hours_f64();
            TrendPoint {
                month,
                label: SHORT_MONTHS[(month.month - 1) as usize].to_string(),
                hours,
                display_hours: total.hours,
                bar: (hours / denominator).max(BAR_FLOOR),
            }
        })
        .collect()
}

/// Fraction of the monthly goal reached, capped at 1.
pub fn progress(current_hours: i64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return if current_hours > 0 { 1.0 } else { 0.0 };
    }
    (current_hours as f64 / goal).clamp(0.0, 1.0)
}

pub fn nearing_deadline(today: NaiveDate, reminder_day: u32) -> bool {
    today.day() >= reminder_day
}

/// Everything a monthly view needs, computed once when the view is built.
///
/// The reminder flag is fixed at construction and is not re-evaluated later.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub summary: MonthlySummary,
    pub goal: f64,
    pub progress: f64,
    pub trend: Vec<TrendPoint>,
    pub nearing_deadline: bool,
}

impl Dashboard {
    pub fn build(entries: &[DailyEntry], extras: &[ExtraActivity], goal: f64, today: NaiveDate, reminder_day: u32) -> Self {
        let summary = MonthlySummary::compute(entries, extras, today);
        Self {
            today,
            progress: progress(summary.field.hours, goal),
            trend: trend(entries, goal, today),
            nearing_deadline: nearing_deadline(today, reminder_day),
            goal,
            summary,
        }
    }
}
