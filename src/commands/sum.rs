use super::{journal, reference_day};
use crate::{
    libs::{config::Config, messages::Message, report::month_year_label, summary::Dashboard, view::View},
    msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Month to summarize (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    month: Option<String>,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let day = reference_day(args.month.as_deref())?;
    let config = Config::read()?;
    let journal = journal()?;

    let dashboard = Dashboard::build(
        journal.entries(),
        journal.extras(),
        journal.profile().monthly_goal,
        day,
        config.reminder_day(),
    );

    msg_print!(Message::SummaryHeader(month_year_label(dashboard.summary.month)), true);
    View::dashboard(&dashboard)?;

    msg_print!(Message::TrendHeader, true);
    View::trend(&dashboard)?;

    if dashboard.nearing_deadline {
        msg_warning!(Message::ReminderNudge, true);
    }

    Ok(())
}
