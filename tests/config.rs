#[cfg(test)]
mod tests {
    use fieldlog::libs::config::{Config, GeneratorConfig, ReminderConfig, CONFIG_FILE_NAME, DEFAULT_INSIGHTS_MODEL, DEFAULT_REFINE_MODEL, DEFAULT_TIMEOUT_SECS};
    use fieldlog::libs::data_storage::DataStorage;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("fieldlog"));
            ConfigTestContext { _temp_dir: temp_dir, storage }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.generator.is_none());
        assert!(config.reminder.is_none());
        assert_eq!(config.reminder_day(), 25);

        let generator = config.generator();
        assert_eq!(generator.refine_model, DEFAULT_REFINE_MODEL);
        assert_eq!(generator.insights_model, DEFAULT_INSIGHTS_MODEL);
        assert_eq!(generator.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_in(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            generator: Some(GeneratorConfig {
                api_url: "https://example.test/v1beta".to_string(),
                refine_model: "model-a".to_string(),
                insights_model: "model-b".to_string(),
                timeout_secs: 5,
            }),
            reminder: Some(ReminderConfig { day: 20 }),
        };
        config.save_in(&ctx.storage).unwrap();

        let read_config = Config::read_in(&ctx.storage).unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.reminder_day(), 20);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_absent_sections_are_not_written(ctx: &mut ConfigTestContext) {
        Config {
            reminder: Some(ReminderConfig::default()),
            ..Config::default()
        }
        .save_in(&ctx.storage)
        .unwrap();

        let raw = fs::read_to_string(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap()).unwrap();
        assert!(!raw.contains("generator"));
        assert!(raw.contains("\"day\": 25"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap(), "not json").unwrap();
        assert!(Config::read_in(&ctx.storage).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        assert!(!Config::delete_in(&ctx.storage).unwrap());

        Config::default().save_in(&ctx.storage).unwrap();
        assert!(Config::delete_in(&ctx.storage).unwrap());
        assert!(!ctx.storage.get_path(CONFIG_FILE_NAME).unwrap().exists());
    }
}
