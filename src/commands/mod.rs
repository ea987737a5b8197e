pub mod add;
pub mod delete;
pub mod extra;
pub mod history;
pub mod init;
pub mod insights;
pub mod profile;
pub mod reset;
pub mod share;
pub mod sum;

use crate::libs::entry::{day_stamp, now_stamp};
use crate::libs::messages::Message;
use crate::libs::period::YearMonth;
use crate::libs::storage::{FileStore, Journal, StorageError};
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log a day of field service")]
    Add(add::AddArgs),
    #[command(about = "List logged days")]
    History(history::HistoryArgs),
    #[command(about = "Delete a logged day")]
    Delete(delete::DeleteArgs),
    #[command(about = "Manage extra activities (credits)")]
    Extra(extra::ExtraArgs),
    #[command(about = "Monthly summary, goal progress and trend")]
    Sum(sum::SumArgs),
    #[command(about = "Send the monthly report over WhatsApp")]
    Share(share::ShareArgs),
    #[command(about = "Generate a motivational summary of the month")]
    Insights(insights::InsightsArgs),
    #[command(about = "Show or edit the profile")]
    Profile(profile::ProfileArgs),
    #[command(about = "Erase all records and the profile")]
    Reset(reset::ResetArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::History(args) => history::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Extra(args) => extra::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Share(args) => share::cmd(args),
            Commands::Insights(args) => insights::cmd(args).await,
            Commands::Profile(args) => profile::cmd(args),
            Commands::Reset(args) => reset::cmd(args),
        }
    }
}

/// Opens the journal in the default data directory.
pub(crate) fn journal() -> Result<Journal<FileStore>> {
    let store = FileStore::new();
    msg_debug!(format!("Opening journal in {}", store.base_path().display()));
    Journal::open(store).map_err(|e| match e {
        StorageError::Corrupt { .. } => msg_error_anyhow!(Message::StorageCorrupt(e.to_string())),
        e => e.into(),
    })
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Stored date for a new record: a timestamp for "now", a plain calendar date
/// when one is given.
pub(crate) fn record_date(raw: Option<&str>) -> Result<String> {
    match raw {
        None => Ok(now_stamp()),
        Some(raw) if raw.eq_ignore_ascii_case("today") => Ok(now_stamp()),
        Some(raw) => match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => Ok(day_stamp(date)),
            Err(_) => msg_bail_anyhow!(Message::InvalidDate(raw.to_string())),
        },
    }
}

/// The day a monthly view is computed for, from an optional `YYYY-MM` argument.
pub(crate) fn reference_day(month: Option<&str>) -> Result<NaiveDate> {
    let today = today();
    let Some(raw) = month else {
        return Ok(today);
    };
    match YearMonth::parse(raw).and_then(|month| month.reference_day(today)) {
        Some(day) => Ok(day),
        None => msg_bail_anyhow!(Message::InvalidMonth(raw.to_string())),
    }
}

/// Asks before a destructive action. `assume_yes` skips the prompt.
pub(crate) fn confirm(message: Message, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .default(false)
        .interact()?)
}
