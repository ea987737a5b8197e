//! Display implementation for fieldlog application messages.
//!
//! All user-facing text lives here, in one `match`, so that wording stays
//! consistent across commands. The shareable report itself is not a message:
//! it is rendered by `libs::report` in its fixed locale.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntryAdded(time) => format!("Logged {} of field service", time),
            Message::EntryDeleted => "Entry deleted".to_string(),
            Message::EntryNotFound(id) => format!("No entry with ID {}", id),
            Message::ConfirmDeleteEntry(summary) => format!("Delete this entry ({})?", summary),
            Message::NoEntriesForMonth(month) => format!("No entries for {}", month),
            Message::NoEntries => "No entries yet".to_string(),
            Message::HistoryHeader(month) => format!("History for {}", month),
            Message::HistoryAllHeader => "Full history".to_string(),
            Message::InvalidDate(raw) => format!("'{}' is not a date, expected YYYY-MM-DD or 'today'", raw),
            Message::InvalidMonth(raw) => format!("'{}' is not a month, expected YYYY-MM", raw),
            Message::NoteRefined => "Refined note:".to_string(),
            Message::UseRefinedNote => "Use the refined note?".to_string(),

            // === EXTRA ACTIVITY MESSAGES ===
            Message::ExtraAdded(kind, time) => format!("Credited {} of {}", time, kind),
            Message::ExtraDeleted => "Extra activity deleted".to_string(),
            Message::ExtraNotFound(id) => format!("No extra activity with ID {}", id),
            Message::ConfirmDeleteExtra(summary) => format!("Delete this extra activity ({})?", summary),
            Message::NoExtras => "No extra activities recorded".to_string(),
            Message::ExtrasHeader => "Extra activities (credits count toward the monthly total)".to_string(),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(month) => format!("Summary for {}", month),
            Message::GoalProgress { hours, goal, percent } => format!("Goal: {} / {}h ({:.0}%)", hours, goal, percent),
            Message::TrendHeader => "Last three months".to_string(),
            Message::ReminderNudge => "Almost there! Time to wrap up this month's report ✨".to_string(),

            // === PROFILE MESSAGES ===
            Message::ProfileSaved => "Profile saved".to_string(),
            Message::ProfileHeader => "Profile".to_string(),
            Message::ImageSaved(slot) => format!("{} image updated", slot),
            Message::ImageCleared(slot) => format!("{} image removed", slot),
            Message::ImageTooLarge => "The image is too large. Choose one of up to 2MB.".to_string(),
            Message::ImageRejected(reason) => format!("Image rejected: {}", reason),

            // === SHARE MESSAGES ===
            Message::ContactMissing => "Please set a WhatsApp number first: fieldlog profile --contact <number>".to_string(),
            Message::ShareLinkReady(url) => format!("Share link: {}", url),
            Message::ShareOpened => "Report handed off to WhatsApp".to_string(),
            Message::ShareOpenFailed(error) => format!("Could not open the share link: {}", error),

            // === TEXT GENERATION MESSAGES ===
            Message::GeneratorNoResult => "No text was produced, see the log for details".to_string(),
            Message::GeneratorNotConfigured => "Text generation is not configured, using defaults".to_string(),
            Message::InsightsHeader => "Monthly insight".to_string(),
            Message::NothingToRefine => "The note is empty, nothing to refine".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleGenerator => "Text generation".to_string(),
            Message::ConfigModuleReminder => "Reminder".to_string(),

            // === DATA MESSAGES ===
            Message::ConfirmReset => "Delete ALL records and the profile permanently?".to_string(),
            Message::DataReset => "All data erased".to_string(),
            Message::StorageCorrupt(error) => format!("Stored data could not be read ({}). Run 'fieldlog reset' to start over", error),

            // === PROMPTS ===
            Message::PromptName => "Your name".to_string(),
            Message::PromptServiceType => "Service category".to_string(),
            Message::PromptGoal => "Monthly goal (hours)".to_string(),
            Message::PromptContact => "WhatsApp number".to_string(),
            Message::PromptApiKey => "Enter your Gemini API key".to_string(),
            Message::PromptApiUrl => "Generative Language API URL".to_string(),
            Message::PromptRefineModel => "Model for note refinement".to_string(),
            Message::PromptInsightsModel => "Model for monthly insights".to_string(),
            Message::PromptTimeout => "Request timeout (seconds)".to_string(),
            Message::PromptReminderDay => "Day of month to start the closing reminder".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_progress_rounds_percent() {
        let text = Message::GoalProgress { hours: 15, goal: 30.0, percent: 49.6 }.to_string();
        assert_eq!(text, "Goal: 15 / 30h (50%)");
    }

    #[test]
    fn corrupt_storage_points_to_reset() {
        let text = Message::StorageCorrupt("slot 'user_profile' holds malformed data".to_string()).to_string();
        assert!(text.contains("user_profile"));
        assert!(text.contains("fieldlog reset"));
    }
}
