#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fieldlog::api::assistant::{insights_prompt, refine_prompt};
    use fieldlog::api::{Assistant, GeneratorError, TextGenerator};
    use fieldlog::libs::config::GeneratorConfig;
    use fieldlog::libs::entry::DailyEntry;
    use fieldlog::libs::summary::MonthlySummary;
    use parking_lot::Mutex;
    use tokio::sync::Notify;

    /// Records every call and answers with a canned reply.
    #[derive(Default)]
    struct FakeGenerator {
        calls: Mutex<Vec<(String, String)>>,
        fail: bool,
        gate: Option<Notify>,
    }

    impl FakeGenerator {
        fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        fn gated() -> Self {
            Self {
                gate: Some(Notify::new()),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().clone()
        }
    }

    impl TextGenerator for FakeGenerator {
        async fn generate(&self, model: &str, prompt: &str) -> Result<String, GeneratorError> {
            self.calls.lock().push((model.to_string(), prompt.to_string()));
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail {
                return Err(GeneratorError::Empty);
            }
            Ok("texto gerado".to_string())
        }
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            refine_model: "refine-model".to_string(),
            insights_model: "insights-model".to_string(),
            ..GeneratorConfig::default()
        }
    }

    fn summary() -> MonthlySummary {
        let entries = vec![DailyEntry::new("2025-01-10".to_string(), 4, 15, 3, Some("revisitas".to_string()))];
        MonthlySummary::compute(&entries, &[], NaiveDate::from_ymd_opt(2025, 1, 20).unwrap())
    }

    #[tokio::test]
    async fn test_refine_uses_refine_model() {
        let generator = FakeGenerator::default();
        let assistant = Assistant::new(&generator, &config());

        assert_eq!(assistant.refine_note("visitei a vizinha").await.as_deref(), Some("texto gerado"));
        assert_eq!(generator.calls(), vec![("refine-model".to_string(), refine_prompt("visitei a vizinha"))]);
        assert!(!assistant.is_busy());
    }

    #[tokio::test]
    async fn test_empty_note_is_never_sent() {
        let generator = FakeGenerator::default();
        let assistant = Assistant::new(&generator, &config());

        assert_eq!(assistant.refine_note("   ").await, None);
        assert_eq!(assistant.refine_note("").await, None);
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_insights_sends_month_payload() {
        let generator = FakeGenerator::default();
        let assistant = Assistant::new(&generator, &config());

        assert!(assistant.insights(&summary()).await.is_some());

        let calls = generator.calls();
        assert_eq!(calls[0].0, "insights-model");
        assert_eq!(calls[0].1, insights_prompt(&summary()).unwrap());
        assert!(calls[0].1.ends_with(r#"{"fieldHours":4,"studies":3,"notes":["revisitas"]}"#));
    }

    #[tokio::test]
    async fn test_failure_yields_no_result() {
        let generator = FakeGenerator::failing();
        let assistant = Assistant::new(&generator, &config());

        assert_eq!(assistant.refine_note("nota").await, None);
        assert_eq!(assistant.insights(&summary()).await, None);
        assert!(!assistant.is_busy());
    }

    #[tokio::test]
    async fn test_concurrent_request_is_refused() {
        let generator = FakeGenerator::gated();
        let assistant = Assistant::new(&generator, &config());

        let first = assistant.refine_note("primeira");
        let second = async {
            assert!(assistant.is_busy());
            let refused = assistant.insights(&summary()).await;
            if let Some(gate) = &generator.gate {
                gate.notify_one();
            }
            refused
        };

        let (first, second) = tokio::join!(first, second);

        assert_eq!(first.as_deref(), Some("texto gerado"));
        assert_eq!(second, None);
        assert_eq!(generator.calls().len(), 1);
        assert!(!assistant.is_busy());
    }
}
