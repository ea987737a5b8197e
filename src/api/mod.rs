//! External text generation.
//!
//! Two features call out to a generative model: polishing a day's note and
//! summarizing the month. Both go through the [`TextGenerator`] capability so
//! the HTTP client can be swapped for a fake in tests.
//!
//! ```rust,no_run
//! use fieldlog::api::{Assistant, Gemini};
//! use fieldlog::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?.generator();
//! let assistant = Assistant::new(Gemini::from_config(&config)?, &config);
//! if let Some(note) = assistant.refine_note("visitei a vizinha").await {
//!     println!("{}", note);
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod assistant;
pub mod gemini;

pub use assistant::Assistant;
pub use gemini::Gemini;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("service returned no text")]
    Empty,

    #[error("failed to encode the prompt payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// A model that turns a prompt into text.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    /// Runs `prompt` against `model` and returns the generated text, trimmed.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GeneratorError>;
}

impl<G: TextGenerator + ?Sized> TextGenerator for &G {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GeneratorError> {
        (**self).generate(model, prompt).await
    }
}
