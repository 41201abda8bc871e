//! Configuration integration tests

#[cfg(test)]
mod tests {
    use crate::common::TEST_SECRET;
    use crate::{assert_err, assert_ok};
    use courseware_rs::Config;
    use courseware_rs::config::AppConfig;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_yaml_file() {
        let mut file = assert_ok!(NamedTempFile::new());
        let yaml = format!(
            "server:\n  port: 9100\nauth:\n  jwt_secret: \"{}\"\n  claims_cache_ttl: 60\nseed:\n  seed_on_start: true\n",
            TEST_SECRET
        );
        assert_ok!(file.write_all(yaml.as_bytes()));

        let config = assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(config.server().port, 9100);
        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.auth().claims_cache_ttl, 60);
        assert_eq!(config.auth().issuer, "courseware");
        assert!(config.seed().seed_on_start);
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let err = assert_err!(Config::from_file("/nonexistent/courseware.yaml").await);
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_weak_secret_rejected() {
        let err = assert_err!(Config::from_yaml("auth:\n  jwt_secret: short\n"));
        assert!(err.to_string().contains("Auth config error"));
    }

    #[test]
    fn test_environment_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("COURSEWARE_PORT", "8181"),
            ("COURSEWARE_JWT_SECRET", TEST_SECRET),
            ("COURSEWARE_SEED_ON_START", "true"),
        ]);

        let app = assert_ok!(AppConfig::from_lookup(|key| vars
            .get(key)
            .map(|v| v.to_string())));
        assert_eq!(app.server.port, 8181);
        assert_eq!(app.auth.jwt_secret, TEST_SECRET);
        assert!(app.seed.seed_on_start);

        let config = Config { app };
        assert_ok!(config.validate());
    }

    #[test]
    fn test_environment_lookup_rejects_bad_numbers() {
        let err = assert_err!(AppConfig::from_lookup(|key| {
            (key == "COURSEWARE_PORT").then(|| "eighty".to_string())
        }));
        assert!(err.to_string().contains("COURSEWARE_PORT"));
    }

    #[test]
    fn test_yaml_round_trip_keeps_settings() {
        let config = assert_ok!(Config::from_yaml(&format!(
            "auth:\n  jwt_secret: \"{}\"\n  token_ttl: 7200\n",
            TEST_SECRET
        )));
        let yaml = assert_ok!(config.to_yaml());
        let reloaded = assert_ok!(Config::from_yaml(&yaml));
        assert_eq!(reloaded.auth().token_ttl, 7200);
    }
}
