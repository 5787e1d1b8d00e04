//! Configuration loader tests
//!
//! Each test runs inside a figment `Jail`, which serializes access to the
//! process environment and working directory.

use bazaar_domain::constants::{AUTH_COOKIE_NAME, SESSION_CACHE_TTL_SECS};
use bazaar_infrastructure::config::{ConfigBuilder, ConfigLoader, EmailProvider, Environment};
use bazaar_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_SERVER_PORT, DEV_FALLBACK_JWT_SECRET};
use figment::Jail;

const STRONG_SECRET: &str = "0123456789abcdef0123456789abcdef-strong";

#[test]
fn test_defaults_use_development_fallback_secret() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let config = ConfigLoader::new().load().expect("load defaults");

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.auth.session_cache_ttl_secs, SESSION_CACHE_TTL_SECS);
        assert_eq!(config.auth.cookie.name, AUTH_COOKIE_NAME);
        assert_eq!(config.auth.jwt.secret, DEV_FALLBACK_JWT_SECRET);
        assert!(!config.cookie_secure());
        Ok(())
    });
}

#[test]
fn test_production_without_secret_fails_closed() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("APP_ENV", "production");

        let err = ConfigLoader::new().load().expect_err("must refuse to start");
        assert!(err.to_string().contains("JWT secret"));
        Ok(())
    });
}

#[test]
fn test_production_rejects_short_secret() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("APP_ENV", "production");
        jail.set_env("JWT_SECRET", "too-short");

        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_production_with_secret_marks_cookie_secure() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("APP_ENV", "production");
        jail.set_env("JWT_SECRET", STRONG_SECRET);

        let config = ConfigLoader::new().load().expect("load");
        assert_eq!(config.auth.jwt.secret, STRONG_SECRET);
        assert!(config.cookie_secure());
        Ok(())
    });
}

#[test]
fn test_toml_file_then_prefixed_env_override() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "bazaar.toml",
            r#"
            [server]
            port = 8081
            public_url = "https://bazaar.example"

            [auth]
            bcrypt_cost = 10

            [logging]
            level = "debug"
            "#,
        )?;
        jail.set_env("BAZAAR__SERVER__PORT", "9090");
        jail.set_env("BAZAAR__AUTH__JWT__SECRET", STRONG_SECRET);

        let config = ConfigLoader::new().load().expect("load");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.public_url, "https://bazaar.example");
        assert_eq!(config.auth.bcrypt_cost, 10);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.auth.jwt.secret, STRONG_SECRET);
        Ok(())
    });
}

#[test]
fn test_explicit_path_missing_falls_back_to_defaults() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let config = ConfigLoader::new()
            .with_config_path("does-not-exist.toml")
            .load()
            .expect("load");
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("BAZAAR__SERVER__PORT", "0");
        assert!(ConfigLoader::new().load().is_err());

        jail.set_env("BAZAAR__SERVER__PORT", "3000");
        jail.set_env("BAZAAR__AUTH__BCRYPT_COST", "2");
        assert!(ConfigLoader::new().load().is_err());

        jail.set_env("BAZAAR__AUTH__BCRYPT_COST", "12");
        jail.set_env("BAZAAR__EMAIL__PROVIDER", "http");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_builder_validates_like_loader() {
    let config = ConfigBuilder::new()
        .with_jwt_secret(STRONG_SECRET)
        .with_bcrypt_cost(4)
        .build()
        .expect("valid");
    assert_eq!(config.auth.bcrypt_cost, 4);
    assert_eq!(config.email.provider, EmailProvider::Log);

    let err = ConfigBuilder::new()
        .with_environment(Environment::Production)
        .build();
    assert!(err.is_err());
}

#[test]
fn test_saved_config_loads_back() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let mut config = ConfigBuilder::new()
            .with_jwt_secret("saved-secret-saved-secret-saved!!")
            .build()
            .expect("config");
        config.server.port = 4100;
        config.email.provider = EmailProvider::Http;
        config.email.endpoint = Some("https://mail.example.com/send".to_string());

        let path = jail.directory().join("saved.toml");
        let loader = ConfigLoader::new().with_config_path(&path);
        loader.save_to_file(&config, &path).expect("save");

        let loaded = loader.load().expect("load");
        assert_eq!(loaded.server.port, 4100);
        assert_eq!(loaded.email.provider, EmailProvider::Http);
        assert_eq!(loaded.auth.jwt.secret, "saved-secret-saved-secret-saved!!");
        Ok(())
    });
}
