use super::{journal, record_date};
use crate::{
    api::{Assistant, Gemini},
    libs::{
        config::Config,
        entry::{DailyEntry, MAX_STUDIES_PER_DAY},
        messages::Message,
        time,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Hours spent in field service
    #[arg(short = 'H', long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=time::MAX_RECORD_HOURS))]
    hours: i64,
    /// Minutes spent in field service
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=time::MAX_RECORD_MINUTES))]
    minutes: i64,
    /// Bible studies conducted
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=MAX_STUDIES_PER_DAY))]
    studies: i64,
    /// Day of service (YYYY-MM-DD), defaults to now
    #[arg(short, long)]
    date: Option<String>,
    /// Free-text note about the day
    #[arg(short, long)]
    note: Option<String>,
    /// Polish the note with the text generator before saving
    #[arg(short, long)]
    refine: bool,
    /// Keep the refined note without asking
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let date = record_date(args.date.as_deref())?;
    let mut journal = journal()?;

    let mut note = args.note;
    if args.refine {
        note = refine(note, args.yes).await?;
    }

    journal.add_entry(DailyEntry::new(date, args.hours, args.minutes, args.studies, note))?;

    msg_success!(Message::EntryAdded(time::format(args.hours, args.minutes)));
    Ok(())
}

/// Offers a refined version of `note`, falling back to the original on refusal or failure.
async fn refine(note: Option<String>, assume_yes: bool) -> Result<Option<String>> {
    let Some(original) = note.filter(|n| !n.trim().is_empty()) else {
        msg_info!(Message::NothingToRefine);
        return Ok(None);
    };

    let config = Config::read()?.generator();
    let assistant = Assistant::new(Gemini::from_config(&config)?, &config);

    let Some(refined) = assistant.refine_note(&original).await else {
        msg_warning!(Message::GeneratorNoResult);
        return Ok(Some(original));
    };

    msg_print!(Message::NoteRefined, true);
    msg_print!(refined);

    let accept = assume_yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::UseRefinedNote.to_string())
            .default(true)
            .interact()?;

    Ok(Some(if accept { refined } else { original }))
}
