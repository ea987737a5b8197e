use super::{journal, reference_day};
use crate::{
    api::{Assistant, Gemini},
    libs::{config::Config, messages::Message, summary::MonthlySummary},
    msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InsightsArgs {
    /// Month to analyze (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    month: Option<String>,
}

pub async fn cmd(args: InsightsArgs) -> Result<()> {
    let day = reference_day(args.month.as_deref())?;
    let journal = journal()?;
    let summary = MonthlySummary::compute(journal.entries(), journal.extras(), day);

    let config = Config::read()?.generator();
    let assistant = Assistant::new(Gemini::from_config(&config)?, &config);

    match assistant.insights(&summary).await {
        Some(text) => {
            msg_print!(Message::InsightsHeader, true);
            msg_print!(text);
        }
        None => msg_warning!(Message::GeneratorNoResult),
    }

    Ok(())
}
