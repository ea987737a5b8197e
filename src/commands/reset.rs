use super::confirm;
use crate::{
    libs::{messages::Message, storage::{self, FileStore}},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ResetArgs) -> Result<()> {
    if !confirm(Message::ConfirmReset, args.yes)? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    // Goes straight to the store so that unreadable slots can be erased too.
    storage::reset(&FileStore::new())?;
    msg_success!(Message::DataReset);
    Ok(())
}
