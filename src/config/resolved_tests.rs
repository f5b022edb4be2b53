//! Tests for settings/environment precedence and resolution.

use std::collections::HashMap;
use std::fs;

use tempfile::tempdir;

use super::resolved::{ConfigResolver, EffectiveConfig};
use super::settings::SettingsFile;

/// Helper to build an environment from key/value pairs
fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

mod precedence {
    use super::*;

    const FIELDS: [(&str, &str); 3] = [
        ("accessKey", "ACCESS_KEY"),
        ("secretKey", "SECRET_KEY"),
        ("serialNumber", "SERIAL_NUMBER"),
    ];

    fn field_of<'a>(config: &'a EffectiveConfig, json_key: &str) -> &'a str {
        match json_key {
            "accessKey" => config.access_key(),
            "secretKey" => config.secret_key(),
            "serialNumber" => config.serial_number(),
            other => panic!("unknown field {other}"),
        }
    }

    /// Every field, for every combination of file/env presence.
    #[test]
    fn env_over_file_over_empty_for_all_presence_combinations() {
        for (json_key, env_key) in FIELDS {
            for in_file in [false, true] {
                for in_env in [false, true] {
                    let settings = if in_file {
                        SettingsFile::parse(&format!(r#"{{"{json_key}": "from-file"}}"#)).unwrap()
                    } else {
                        SettingsFile::default()
                    };
                    let vars = if in_env {
                        env(&[(env_key, "from-env")])
                    } else {
                        env(&[])
                    };

                    let config = EffectiveConfig::merge(&settings, &vars);

                    let expected = match (in_file, in_env) {
                        (_, true) => "from-env",
                        (true, false) => "from-file",
                        (false, false) => "",
                    };
                    assert_eq!(
                        field_of(&config, json_key),
                        expected,
                        "{json_key}: file={in_file} env={in_env}"
                    );
                }
            }
        }
    }

    /// All 2x2x2 combinations across the three fields at once.
    #[test]
    fn fields_resolve_independently() {
        for mask in 0u8..8 {
            let from_env: Vec<bool> = (0..3).map(|i| mask & (1 << i) != 0).collect();

            let settings = SettingsFile::parse(
                r#"{"accessKey": "file-ak", "secretKey": "file-sk", "serialNumber": "file-sn"}"#,
            )
            .unwrap();
            let vars: HashMap<String, String> = FIELDS
                .iter()
                .zip(&from_env)
                .filter(|(_, on)| **on)
                .map(|((_, env_key), _)| ((*env_key).to_string(), format!("env-{env_key}")))
                .collect();

            let config = EffectiveConfig::merge(&settings, &vars);

            let expect = |i: usize, file_value: &str| {
                if from_env[i] {
                    format!("env-{}", FIELDS[i].1)
                } else {
                    file_value.to_string()
                }
            };
            assert_eq!(config.access_key(), expect(0, "file-ak"), "mask={mask}");
            assert_eq!(config.secret_key(), expect(1, "file-sk"), "mask={mask}");
            assert_eq!(config.serial_number(), expect(2, "file-sn"), "mask={mask}");
        }
    }

    #[test]
    fn empty_env_value_does_not_override_file() {
        let settings = SettingsFile::parse(r#"{"accessKey": "file-ak"}"#).unwrap();
        let vars = env(&[("ACCESS_KEY", "")]);

        let config = EffectiveConfig::merge(&settings, &vars);

        assert_eq!(config.access_key(), "file-ak");
    }

    #[test]
    fn env_value_replaces_file_value_entirely() {
        let settings = SettingsFile::parse(r#"{"serialNumber": "R351ZAB5PGAW0001"}"#).unwrap();
        let vars = env(&[("SERIAL_NUMBER", "HW51")]);

        let config = EffectiveConfig::merge(&settings, &vars);

        assert_eq!(config.serial_number(), "HW51");
    }

    #[test]
    fn unrelated_env_vars_are_ignored() {
        let vars = env(&[("ECOFLOW_ACCESS_KEY", "nope"), ("SN", "nope")]);
        let config = EffectiveConfig::merge(&SettingsFile::default(), &vars);
        assert_eq!(config, EffectiveConfig::default());
    }
}

mod resolver {
    use super::*;

    #[test]
    fn reads_settings_file_and_env() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".ecoflow");
        fs::write(
            &path,
            r#"{"accessKey": "file-ak", "secretKey": "file-sk", "serialNumber": "file-sn"}"#,
        )
        .unwrap();

        let resolver = ConfigResolver::new(Some(path), env(&[("SECRET_KEY", "env-sk")]));
        let config = resolver.resolve();

        assert_eq!(config, EffectiveConfig::new("file-ak", "env-sk", "file-sn"));
    }

    #[test]
    fn malformed_settings_file_does_not_abort() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".ecoflow");
        fs::write(&path, r#"{"accessKey": "file-ak", "#).unwrap();

        let resolver = ConfigResolver::new(Some(path), env(&[("ACCESS_KEY", "env-ak")]));
        let config = resolver.resolve();

        assert_eq!(config, EffectiveConfig::new("env-ak", "", ""));
    }

    #[test]
    fn partially_valid_file_contributes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".ecoflow");
        fs::write(&path, r#"{"accessKey": "file-ak", "serialNumber": 42}"#).unwrap();

        let config = ConfigResolver::new(Some(path), env(&[])).resolve();

        assert_eq!(config, EffectiveConfig::default());
    }

    #[test]
    fn missing_settings_file_uses_env_only() {
        let dir = tempdir().unwrap();
        let resolver = ConfigResolver::new(
            Some(dir.path().join(".ecoflow")),
            env(&[("ACCESS_KEY", "ak"), ("SECRET_KEY", "sk")]),
        );

        let config = resolver.resolve();

        assert_eq!(config, EffectiveConfig::new("ak", "sk", ""));
    }

    #[test]
    fn no_settings_path_uses_env_only() {
        let resolver = ConfigResolver::new(None, env(&[("SERIAL_NUMBER", "sn")]));
        assert_eq!(resolver.resolve(), EffectiveConfig::new("", "", "sn"));
    }
}

mod effective_config {
    use super::*;

    #[test]
    fn display_masks_credentials() {
        let config = EffectiveConfig::new("AKEY123456", "topsecret", "R351");
        let display = config.to_string();

        assert!(display.contains("AKEY***"));
        assert!(!display.contains("AKEY123456"));
        assert!(!display.contains("topsecret"));
        assert!(display.contains("R351"));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let config = EffectiveConfig::new("ak", "topsecret", "");
        assert!(!format!("{config:?}").contains("topsecret"));
    }

    #[test]
    fn display_marks_unset_fields() {
        let display = EffectiveConfig::default().to_string();
        assert_eq!(
            display,
            "Config { access_key: <unset>, secret_key: <unset>, serial_number: <unset> }"
        );
    }
}
