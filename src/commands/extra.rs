use super::{confirm, journal, record_date, reference_day};
use crate::{
    libs::{
        entry::{sort_newest_first, ActivityKind, ExtraActivity},
        messages::Message,
        period::{select_month, YearMonth},
        time,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ExtraArgs {
    #[command(subcommand)]
    command: ExtraCommand,
}

#[derive(Debug, Subcommand)]
enum ExtraCommand {
    /// Credit time for a secondary activity
    Add {
        #[arg(value_enum)]
        kind: ActivityKind,
        #[arg(short = 'H', long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=time::MAX_RECORD_HOURS))]
        hours: i64,
        #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=time::MAX_RECORD_MINUTES))]
        minutes: i64,
        /// Day of the activity (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List extra activities
    List {
        /// Month to list (YYYY-MM), defaults to every month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete an extra activity by ID
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: ExtraArgs) -> Result<()> {
    match args.command {
        ExtraCommand::Add { kind, hours, minutes, date } => handle_add(kind, hours, minutes, date),
        ExtraCommand::List { month } => handle_list(month),
        ExtraCommand::Delete { id, yes } => handle_delete(id, yes),
    }
}

fn handle_add(kind: ActivityKind, hours: i64, minutes: i64, date: Option<String>) -> Result<()> {
    let date = record_date(date.as_deref())?;
    let mut journal = journal()?;

    journal.add_extra(ExtraActivity::new(kind, date, hours, minutes))?;

    msg_success!(Message::ExtraAdded(kind.to_string(), time::format(hours, minutes)));
    Ok(())
}

fn handle_list(month: Option<String>) -> Result<()> {
    let journal = journal()?;

    let mut extras: Vec<&ExtraActivity> = match month {
        Some(month) => select_month(journal.extras(), YearMonth::of(reference_day(Some(month.as_str()))?)),
        None => journal.extras().iter().collect(),
    };

    if extras.is_empty() {
        msg_info!(Message::NoExtras);
        return Ok(());
    }

    sort_newest_first(&mut extras);
    msg_print!(Message::ExtrasHeader, true);
    View::extras(&extras)?;

    Ok(())
}

fn handle_delete(id: String, yes: bool) -> Result<()> {
    let mut journal = journal()?;

    let Some(extra) = journal.extras().iter().find(|e| e.id == id) else {
        msg_error!(Message::ExtraNotFound(id));
        return Ok(());
    };
    let summary = format!("{}, {}, {}", extra.kind, extra.date, time::format(extra.hours, extra.minutes));

    if !confirm(Message::ConfirmDeleteExtra(summary), yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    journal.delete_extra(&id)?;
    msg_success!(Message::ExtraDeleted);
    Ok(())
}
