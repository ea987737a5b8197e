use super::{journal, reference_day};
use crate::{
    libs::{
        messages::Message,
        report::{build_message, destination, share_link},
        summary::MonthlySummary,
    },
    msg_debug, msg_error, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::process::{Command, Stdio};

#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Month to report (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    month: Option<String>,
    /// Print the message and link without opening them
    #[arg(short, long)]
    print: bool,
}

pub fn cmd(args: ShareArgs) -> Result<()> {
    let day = reference_day(args.month.as_deref())?;
    let journal = journal()?;
    let profile = journal.profile();

    let Some(number) = destination(&profile.whatsapp_number) else {
        msg_error!(Message::ContactMissing);
        return Ok(());
    };

    let summary = MonthlySummary::compute(journal.entries(), journal.extras(), day);
    let message = build_message(profile, &summary);
    let link = share_link(&number, &message);

    msg_print!(message, true);
    msg_print!(Message::ShareLinkReady(link.clone()));

    if args.print {
        return Ok(());
    }

    match open(&link) {
        Ok(()) => msg_success!(Message::ShareOpened),
        Err(e) => msg_error!(Message::ShareOpenFailed(e.to_string())),
    }
    Ok(())
}

/// Hands `url` to the platform opener. Success means the opener was spawned.
fn open(url: &str) -> std::io::Result<()> {
    let mut command = if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    };

    msg_debug!(format!("Opening {}", url));
    command.stdout(Stdio::null()).stderr(Stdio::null()).spawn()?;
    Ok(())
}
