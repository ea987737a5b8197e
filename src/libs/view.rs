use super::entry::{DailyEntry, ExtraActivity};
use super::messages::Message;
use super::period::parse_record_date;
use super::profile::UserProfile;
use super::summary::Dashboard;
use super::time;
use anyhow::Result;
use prettytable::{row, Table};

const PROGRESS_WIDTH: usize = 30;
const TREND_WIDTH: usize = 20;
const NOTE_PREVIEW: usize = 48;

/// A horizontal bar `width` cells wide, `fraction` of it filled.
pub fn bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `dd/mm/yyyy` when the stored date is readable, the raw value otherwise.
fn display_date(raw: &str) -> String {
    parse_record_date(raw).map_or_else(|| raw.to_string(), |date| date.format("%d/%m/%Y").to_string())
}

fn preview(note: &str) -> String {
    let mut chars = note.chars();
    let head: String = chars.by_ref().take(NOTE_PREVIEW).collect();
    if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}

pub struct View {}

impl View {
    pub fn entries(entries: &[&DailyEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TIME", "STUDIES", "NOTES"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                display_date(&entry.date),
                time::format(entry.hours, entry.minutes),
                entry.bible_studies,
                entry.notes.as_deref().map(preview).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn extras(extras: &[&ExtraActivity]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TYPE", "TIME"]);
        for extra in extras {
            table.add_row(row![
                extra.id,
                display_date(&extra.date),
                extra.kind,
                time::format(extra.hours, extra.minutes)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn dashboard(dashboard: &Dashboard) -> Result<()> {
        let summary = &dashboard.summary;
        let mut table = Table::new();

        table.add_row(row!["FIELD", "STUDIES", "CREDITS"]);
        table.add_row(row![summary.field, summary.studies, summary.credits]);
        table.printstd();

        let progress = Message::GoalProgress {
            hours: summary.field.hours,
            goal: dashboard.goal,
            percent: dashboard.progress * 100.0,
        };
        println!("\n{} {}", bar(dashboard.progress, PROGRESS_WIDTH), progress);

        Ok(())
    }

    pub fn trend(dashboard: &Dashboard) -> Result<()> {
        let mut table = Table::new();

        for point in &dashboard.trend {
            table.add_row(row![point.label, bar(point.bar, TREND_WIDTH), format!("{}h", point.display_hours)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn profile(profile: &UserProfile) -> Result<()> {
        let image = |value: &Option<String>| match value {
            Some(v) if v.starts_with("data:") => format!("uploaded ({} bytes)", v.len()),
            Some(v) => v.clone(),
            None => "-".to_string(),
        };

        let contact = if profile.whatsapp_number.is_empty() { "-" } else { profile.whatsapp_number.as_str() };

        let mut table = Table::new();
        table.add_row(row!["Name", profile.display_name()]);
        table.add_row(row!["Service", profile.service_type]);
        table.add_row(row!["Goal", format!("{}h", profile.monthly_goal)]);
        table.add_row(row!["WhatsApp", contact]);
        table.add_row(row!["Cover", image(&profile.cover_photo)]);
        table.add_row(row!["Picture", image(&profile.profile_picture)]);
        table.printstd();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0.5, 4), "██░░");
        assert_eq!(bar(0.0, 3), "░░░");
        assert_eq!(bar(1.7, 3), "███");
    }

    #[test]
    fn long_notes_are_truncated() {
        let note = "a".repeat(NOTE_PREVIEW + 5);
        assert_eq!(preview(&note).chars().count(), NOTE_PREVIEW + 1);
        assert_eq!(preview("curta"), "curta");
    }

    #[test]
    fn unreadable_dates_are_shown_raw() {
        assert_eq!(display_date("2025-01-31"), "31/01/2025");
        assert_eq!(display_date("ontem"), "ontem");
    }
}
