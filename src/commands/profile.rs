use super::journal;
use crate::{
    libs::{
        image::{read_data_url, ImageError},
        messages::Message,
        profile::{check_goal, parse_goal, ImageSlot, ServiceType, UserProfile},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Display name used in the report
    #[arg(long)]
    name: Option<String>,
    /// Service category; also resets the goal to the category default
    #[arg(long, value_enum)]
    service: Option<ServiceType>,
    /// Monthly goal in hours
    #[arg(long, value_parser = parse_goal)]
    goal: Option<f64>,
    /// WhatsApp number that receives the report
    #[arg(long)]
    contact: Option<String>,
    /// Image file for the cover (up to 2MB)
    #[arg(long)]
    cover: Option<PathBuf>,
    /// Image file for the profile picture (up to 2MB)
    #[arg(long)]
    picture: Option<PathBuf>,
    /// Remove an image
    #[arg(long, value_enum)]
    clear: Option<ImageSlot>,
    /// Edit name, category, goal and contact interactively
    #[arg(short, long)]
    edit: bool,
}

impl ProfileArgs {
    fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.service.is_some()
            || self.goal.is_some()
            || self.contact.is_some()
            || self.cover.is_some()
            || self.picture.is_some()
            || self.clear.is_some()
    }
}

pub fn cmd(args: ProfileArgs) -> Result<()> {
    let mut journal = journal()?;

    if !args.edit && !args.has_changes() {
        msg_print!(Message::ProfileHeader, true);
        View::profile(journal.profile())?;
        return Ok(());
    }

    // Images are read up front so a rejected file leaves the profile untouched.
    let mut images = Vec::new();
    for (slot, path) in [(ImageSlot::Cover, &args.cover), (ImageSlot::Picture, &args.picture)] {
        let Some(path) = path else { continue };
        match read_data_url(path) {
            Ok(data_url) => images.push((slot, data_url)),
            Err(ImageError::TooLarge { .. }) => {
                msg_error!(Message::ImageTooLarge);
                return Ok(());
            }
            Err(e) => {
                msg_error!(Message::ImageRejected(e.to_string()));
                return Ok(());
            }
        }
    }

    let cleared = args.clear;
    let saved: Vec<ImageSlot> = images.iter().map(|(slot, _)| *slot).collect();

    let edited = if args.edit { Some(prompt(journal.profile())?) } else { None };

    journal.update_profile(|profile| -> Result<()> {
        if let Some(edited) = edited {
            *profile = edited;
        }
        if let Some(name) = args.name {
            profile.name = name;
        }
        if let Some(service) = args.service {
            profile.set_service_type(service);
        }
        if let Some(goal) = args.goal {
            profile.monthly_goal = goal;
        }
        if let Some(contact) = args.contact {
            profile.whatsapp_number = contact;
        }
        if let Some(slot) = args.clear {
            *profile.image_mut(slot) = None;
        }
        for (slot, data_url) in images {
            *profile.image_mut(slot) = Some(data_url);
        }
        Ok(())
    })?;

    if let Some(slot) = cleared {
        msg_info!(Message::ImageCleared(slot.to_string()));
    }
    for slot in saved {
        msg_info!(Message::ImageSaved(slot.to_string()));
    }
    msg_success!(Message::ProfileSaved);
    Ok(())
}

fn prompt(current: &UserProfile) -> Result<UserProfile> {
    let mut profile = current.clone();

    profile.name = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptName.to_string())
        .default(current.name.clone())
        .allow_empty(true)
        .interact_text()?;

    let types = [ServiceType::Auxiliary, ServiceType::Regular];
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptServiceType.to_string())
        .items(&types.iter().map(ToString::to_string).collect::<Vec<_>>())
        .default(types.iter().position(|t| *t == current.service_type).unwrap_or(0))
        .interact()?;
    if types[selected] != current.service_type {
        profile.set_service_type(types[selected]);
    }

    profile.monthly_goal = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptGoal.to_string())
        .default(profile.monthly_goal)
        .validate_with(|goal: &f64| check_goal(*goal).map(|_| ()))
        .interact_text()?;

    profile.whatsapp_number = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptContact.to_string())
        .default(current.whatsapp_number.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(profile)
}
