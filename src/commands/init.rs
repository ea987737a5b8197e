use crate::{
    api::Gemini,
    libs::{config::Config, data_storage::DataStorage, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the configuration file and the stored API key
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete_in(&DataStorage::new())?;
        Gemini::secret()?.delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;

    if config.generator.is_some() && !Gemini::key_from_env() {
        Gemini::secret()?.prompt()?;
    } else if config.generator.is_none() {
        msg_info!(Message::GeneratorNotConfigured);
    }

    msg_success!(Message::ConfigSaved);
    Ok(())
}
