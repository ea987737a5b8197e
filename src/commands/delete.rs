use super::{confirm, journal};
use crate::{
    libs::{messages::Message, time},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the entry, as shown by `history`
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut journal = journal()?;

    let Some(entry) = journal.entries().iter().find(|e| e.id == args.id) else {
        msg_error!(Message::EntryNotFound(args.id));
        return Ok(());
    };
    let summary = format!("{}, {}", entry.date, time::format(entry.hours, entry.minutes));

    if !confirm(Message::ConfirmDeleteEntry(summary), args.yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    journal.delete_entry(&args.id)?;
    msg_success!(Message::EntryDeleted);
    Ok(())
}
