use std::env;
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod config_tests {
    use super::*;
    use fair_billing::config::{Config, SortKey};

    #[test]
    fn test_default_config_values() {
        let config = Config::default();

        // Logging defaults
        assert_eq!(config.logging.level, "WARN");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.logging.output, "console");

        // Output defaults
        assert!(!config.output.json);
        assert!(config.output.json_pretty);
        assert_eq!(config.output.sort_by, SortKey::Name);
        assert_eq!(config.output.seconds_precision, 0);

        // Path defaults
        assert_eq!(config.paths.log_directory, std::path::PathBuf::from("logs"));
        assert!(config.source.is_none());
    }

    #[test]
    fn test_env_variable_override() {
        env::set_var("FAIR_BILLING_SORT_BY", "seconds");
        env::set_var("FAIR_BILLING_PRECISION", "2");
        env::set_var("FAIR_BILLING_JSON", "true");

        let mut config = Config::default();
        config
            .apply_env_overrides()
            .expect("Failed to apply env overrides");

        assert_eq!(config.output.sort_by, SortKey::Seconds);
        assert_eq!(config.output.seconds_precision, 2);
        assert!(config.output.json);

        env::set_var("FAIR_BILLING_PRECISION", "lots");
        assert!(Config::default().apply_env_overrides().is_err());

        // Cleanup
        env::remove_var("FAIR_BILLING_SORT_BY");
        env::remove_var("FAIR_BILLING_PRECISION");
        env::remove_var("FAIR_BILLING_JSON");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.output.seconds_precision = 7;
        assert!(config.validate().is_err());

        config = Config::default();
        config.logging.format = "yaml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_creates_log_directory_for_file_output() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let log_dir = temp_dir.path().join("nested").join("logs");

        let mut config = Config::default();
        config.logging.output = "file".to_string();
        config.paths.log_directory = log_dir.clone();

        config.validate().expect("Validation should succeed");
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_config_file_loading() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("fair-billing.toml");

        let test_config = r#"
[logging]
level = "DEBUG"
format = "json"

[output]
json = true
sort_by = "sessions"
seconds_precision = 3
"#;

        fs::write(&config_path, test_config).expect("Failed to write test config");

        let config = Config::load_from_file(&config_path).expect("Failed to load config");

        assert_eq!(config.logging.level, "DEBUG");
        assert_eq!(config.logging.format, "json");
        // Missing keys fall back to defaults
        assert_eq!(config.logging.output, "console");
        assert!(config.output.json);
        assert!(config.output.json_pretty);
        assert_eq!(config.output.sort_by, SortKey::Sessions);
        assert_eq!(config.output.seconds_precision, 3);
        assert_eq!(config.source.as_deref(), Some(config_path.as_path()));
    }

    #[test]
    fn test_config_file_parse_error() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "[output\nsort_by = 1").expect("Failed to write test config");

        let err = Config::load_from_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_save_and_reload() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("saved.toml");

        let mut config = Config::default();
        config.output.sort_by = SortKey::Seconds;
        config.save_to_file(&config_path).expect("Failed to save config");

        let saved = fs::read_to_string(&config_path).expect("Failed to read saved config");
        assert!(saved.contains("[logging]"));
        assert!(saved.contains("[output]"));
        assert!(saved.contains("[paths]"));
        assert!(!saved.contains("source"));

        let reloaded = Config::load_from_file(&config_path).expect("Failed to reload config");
        assert_eq!(reloaded.output.sort_by, SortKey::Seconds);
        assert_eq!(reloaded.logging.level, config.logging.level);
    }
}
