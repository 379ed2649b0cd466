//! Configuration Loader Tests

use figment::Jail;
use sioc_domain::Error;
use sioc_infrastructure::config::{ConfigBuilder, ConfigLoader, ContainerConfig, LoggingConfig};
use sioc_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

#[test]
fn test_config_loader_default() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().unwrap();

        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(!config.logging.json_format);
        assert!(!config.container.preinstantiate);
        Ok(())
    });
}

#[test]
fn test_config_loader_discovers_file_in_current_dir() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "sioc.toml",
            r#"
                [logging]
                level = "debug"
                json_format = true

                [container]
                preinstantiate = true
            "#,
        )?;

        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        assert!(config.container.preinstantiate);
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[logging]\nlevel = \"debug\"\n")?;
        jail.set_env("SIOC_LOGGING__LEVEL", "warn");
        jail.set_env("SIOC_CONTAINER__PREINSTANTIATE", "true");

        let config = ConfigLoader::new()
            .with_config_path("custom.toml")
            .load()
            .unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.container.preinstantiate);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("MYAPP_LOGGING__LEVEL", "trace");

        let config = ConfigLoader::new().with_env_prefix("MYAPP").load().unwrap();
        assert_eq!(config.logging.level, "trace");
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path("nowhere.toml");
        let config = loader.load().unwrap();

        assert_eq!(config, ContainerConfig::default());
        assert_eq!(
            loader.config_path().map(|p| p.to_string_lossy().into_owned()),
            Some("nowhere.toml".to_string())
        );
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("SIOC_LOGGING__LEVEL", "chatty");

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn test_config_save_load() {
    // Jail serializes environment access with the other loader tests.
    Jail::expect_with(|_jail| {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let original = ConfigBuilder::new()
            .with_logging(LoggingConfig {
                level: "error".to_string(),
                json_format: true,
                file_output: None,
            })
            .preinstantiate(true)
            .build();

        let loader = ConfigLoader::new().with_config_path(&config_path);
        loader.save_to_file(&original, &config_path).unwrap();
        let loaded = loader.load().unwrap();

        assert_eq!(loaded, original);
        Ok(())
    });
}
