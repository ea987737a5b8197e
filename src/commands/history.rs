use super::{journal, reference_day};
use crate::{
    libs::{
        entry::{sort_newest_first, DailyEntry},
        messages::Message,
        period::{select_month, YearMonth},
        report::month_year_label,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Month to list (YYYY-MM), defaults to the current month
    #[arg(short, long, conflicts_with = "all")]
    month: Option<String>,
    /// List every logged day
    #[arg(short, long)]
    all: bool,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let journal = journal()?;

    let (header, mut entries): (Message, Vec<&DailyEntry>) = if args.all {
        (Message::HistoryAllHeader, journal.entries().iter().collect())
    } else {
        let month = YearMonth::of(reference_day(args.month.as_deref())?);
        (Message::HistoryHeader(month_year_label(month)), select_month(journal.entries(), month))
    };

    if entries.is_empty() {
        match header {
            Message::HistoryHeader(label) => msg_info!(Message::NoEntriesForMonth(label)),
            _ => msg_info!(Message::NoEntries),
        }
        return Ok(());
    }

    sort_newest_first(&mut entries);
    msg_print!(header, true);
    View::entries(&entries)?;

    Ok(())
}
