//! Encrypted storage for a single secret value, such as the text-generation
//! API key.
//!
//! The value is encrypted with AES-256-CBC (PKCS7 padding) and written
//! base64-encoded to a file in the data directory. Key and IV are embedded at
//! build time by `build.rs` (`FIELDLOG_SECRET_KEY` / `FIELDLOG_SECRET_IV`).

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs;
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Result<Self> {
        Self::with_storage(&DataStorage::new(), secret_name, prompt)
    }

    pub fn with_storage(storage: &DataStorage, secret_name: &str, prompt: &str) -> Result<Self> {
        Ok(Self {
            prompt: prompt.to_owned(),
            secret_file_path: storage.get_path(secret_name)?,
            key: APP_METADATA_SECRET_KEY.to_vec(),
            iv: APP_METADATA_SECRET_IV.to_vec(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.secret_file_path
    }

    /// Returns the stored value, prompting for it when the file is missing or
    /// cannot be decrypted.
    pub fn get_or_prompt(&self) -> Result<String> {
        if self.secret_file_path.exists() {
            if let Ok(value) = self.read() {
                return Ok(value);
            }
        }
        self.prompt()
    }

    pub fn prompt(&self) -> Result<String> {
        let value = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.store(&value)?;
        Ok(value)
    }

    pub fn store(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(value.as_bytes());
        fs::write(&self.secret_file_path, BASE64_STANDARD.encode(ciphertext))?;
        Ok(())
    }

    pub fn read(&self) -> Result<String> {
        let encoded = fs::read_to_string(&self.secret_file_path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        Ok(String::from_utf8(cipher.decrypt_vec(&ciphertext)?)?)
    }

    /// Removes the stored value, if any.
    pub fn delete(&self) -> Result<()> {
        if self.secret_file_path.exists() {
            fs::remove_file(&self.secret_file_path)?;
        }
        Ok(())
    }
}
