//! Note refinement and monthly insights on top of a [`TextGenerator`].
//!
//! Only one generation runs at a time. A request made while another is in
//! flight is refused rather than queued, and every failure is logged and
//! reported to the caller as "no result".

use super::{GeneratorError, TextGenerator};
use crate::libs::config::GeneratorConfig;
use crate::libs::summary::MonthlySummary;
use tokio::sync::Mutex;
use tracing::{error, warn};

pub fn refine_prompt(note: &str) -> String {
    format!(
        "Refine esta nota de relatório de pregação para que fique mais profissional e encorajadora em português, sem perder os detalhes principais: \"{}\"",
        note
    )
}

pub fn insights_prompt(summary: &MonthlySummary) -> Result<String, GeneratorError> {
    let data = serde_json::to_string(&summary.insight_payload())?;
    Ok(format!(
        "Com base nos dados deste mês de um pioneiro, gere um resumo motivacional curto (máximo 4 frases) em português. Analise o esforço e dê uma sugestão espiritual baseada nas notas: {}",
        data
    ))
}

pub struct Assistant<G> {
    generator: G,
    refine_model: String,
    insights_model: String,
    busy: Mutex<()>,
}

impl<G: TextGenerator> Assistant<G> {
    pub fn new(generator: G, config: &GeneratorConfig) -> Self {
        Self {
            generator,
            refine_model: config.refine_model.clone(),
            insights_model: config.insights_model.clone(),
            busy: Mutex::new(()),
        }
    }

    /// Whether a generation is currently running.
    pub fn is_busy(&self) -> bool {
        self.busy.try_lock().is_err()
    }

    /// Rewrites `note` in a more polished tone. Empty notes are never sent.
    pub async fn refine_note(&self, note: &str) -> Option<String> {
        if note.trim().is_empty() {
            return None;
        }
        let prompt = refine_prompt(note);
        self.run(&self.refine_model, &prompt, "refine").await
    }

    /// A short motivational summary of the month.
    pub async fn insights(&self, summary: &MonthlySummary) -> Option<String> {
        let prompt = match insights_prompt(summary) {
            Ok(prompt) => prompt,
            Err(e) => {
                error!(error = %e, "failed to build insights prompt");
                return None;
            }
        };
        self.run(&self.insights_model, &prompt, "insights").await
    }

    async fn run(&self, model: &str, prompt: &str, operation: &str) -> Option<String> {
        let Ok(_guard) = self.busy.try_lock() else {
            warn!(operation, "generation already in progress");
            return None;
        };

        match self.generator.generate(model, prompt).await {
            Ok(text) => Some(text),
            Err(e) => {
                error!(operation, model, error = %e, "text generation failed");
                None
            }
        }
    }
}
