// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later tiers win:
//! 1. TOML file (base values)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{CognonConfig, ConfigError, ConfigResult, CONFIG_FILE_NAME};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Find the Cognon configuration file
///
/// Search order:
/// 1. `COGNON_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("COGNON_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by COGNON_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd.as_path();
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent;
                }
                None => break,
            }
        }
    }

    if let Some(path) = search_paths.iter().find(|p| p.exists()) {
        return Ok(path.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Cognon configuration file '{}' not found in any of these locations:\n{}\n\nSet COGNON_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if the config file is not found or contains invalid TOML.
/// Validation is a separate step, see [`validate_config`](crate::validate_config).
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<CognonConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: CognonConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Keys understood by both override tiers. The environment variable is the
/// key upper-cased with a `COGNON_` prefix.
const OVERRIDE_KEYS: &[&str] = &[
    "h",
    "g",
    "c",
    "d1",
    "d2",
    "q",
    "w",
    "num_active",
    "r",
    "num_test_words",
    "repetitions",
    "workers",
    "seed",
    "min_learn_words",
    "min_test_words",
    "log_level",
];

/// Apply environment variable overrides to configuration
///
/// Supported environment variables: `COGNON_H`, `COGNON_G`, `COGNON_C`,
/// `COGNON_D1`, `COGNON_D2`, `COGNON_Q`, `COGNON_W`, `COGNON_NUM_ACTIVE`,
/// `COGNON_R`, `COGNON_NUM_TEST_WORDS`, `COGNON_REPETITIONS`,
/// `COGNON_WORKERS`, `COGNON_SEED`, `COGNON_MIN_LEARN_WORDS`,
/// `COGNON_MIN_TEST_WORDS`, `COGNON_LOG_LEVEL`.
///
/// Values that fail to parse are ignored.
pub fn apply_environment_overrides(config: &mut CognonConfig) {
    for key in OVERRIDE_KEYS {
        let var = format!("COGNON_{}", key.to_uppercase());
        if let Ok(value) = env::var(&var) {
            apply_override(config, key, &value);
        }
    }
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - HashMap of CLI arguments (e.g., `{"w": "60", "repetitions": "50"}`)
pub fn apply_cli_overrides(config: &mut CognonConfig, cli_args: &HashMap<String, String>) {
    for key in OVERRIDE_KEYS {
        if let Some(value) = cli_args.get(*key) {
            apply_override(config, key, value);
        }
    }
}

fn apply_override(config: &mut CognonConfig, key: &str, value: &str) {
    match key {
        "h" => set_parsed(&mut config.neuron.h, value),
        "g" => set_parsed(&mut config.neuron.g, value),
        "c" => set_parsed(&mut config.neuron.c, value),
        "d1" => set_parsed(&mut config.neuron.d1, value),
        "d2" => set_parsed(&mut config.neuron.d2, value),
        "q" => set_parsed(&mut config.neuron.q, value),
        "w" => set_parsed(&mut config.words.w, value),
        "num_active" => set_optional(&mut config.words.num_active, value),
        "r" => set_optional(&mut config.words.r, value),
        "num_test_words" => set_parsed(&mut config.words.num_test_words, value),
        "repetitions" => set_parsed(&mut config.run.repetitions, value),
        "workers" => set_parsed(&mut config.run.workers, value),
        "seed" => set_optional(&mut config.run.seed, value),
        "min_learn_words" => set_parsed(&mut config.run.min_learn_words, value),
        "min_test_words" => set_parsed(&mut config.run.min_test_words, value),
        "log_level" => config.logging.level = value.to_string(),
        _ => {}
    }
}

fn set_parsed<T: FromStr>(target: &mut T, value: &str) {
    if let Ok(parsed) = value.trim().parse::<T>() {
        *target = parsed;
    }
}

/// `none` (or an empty value) clears an optional setting
fn set_optional<T: FromStr>(target: &mut Option<T>, value: &str) {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        *target = None;
    } else if let Ok(parsed) = value.parse::<T>() {
        *target = Some(parsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_find_config_file_env_var() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom_config.toml");
        File::create(&config_path).unwrap();

        env::set_var("COGNON_CONFIG_PATH", config_path.to_str().unwrap());
        let result = find_config_file();
        env::remove_var("COGNON_CONFIG_PATH");

        assert_eq!(result.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_file_env_var_missing() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("absent.toml");

        env::set_var("COGNON_CONFIG_PATH", config_path.to_str().unwrap());
        let result = find_config_file();
        env::remove_var("COGNON_CONFIG_PATH");

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_minimal_config() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let saved_w = env::var("COGNON_W").ok();
        env::remove_var("COGNON_W");
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[neuron]").unwrap();
        writeln!(file, "h = 10.0").unwrap();
        writeln!(file, "[words]").unwrap();
        writeln!(file, "w = 60").unwrap();
        writeln!(file, "r = 111.0").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();

        assert_eq!(config.neuron.h, 10.0);
        assert_eq!(config.neuron.g, 2.0);
        assert_eq!(config.words.w, 60);
        assert_eq!(config.words.r, Some(111.0));
        assert_eq!(config.run.repetitions, 20);

        if let Some(value) = saved_w {
            env::set_var("COGNON_W", value);
        }
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[neuron\nh = ").unwrap();

        let result = load_config(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let mut config = CognonConfig::default();

        env::set_var("COGNON_H", "30");
        env::set_var("COGNON_NUM_ACTIVE", "none");
        env::set_var("COGNON_SEED", "1234");
        env::set_var("COGNON_WORKERS", "not-a-number");

        apply_environment_overrides(&mut config);

        env::remove_var("COGNON_H");
        env::remove_var("COGNON_NUM_ACTIVE");
        env::remove_var("COGNON_SEED");
        env::remove_var("COGNON_WORKERS");

        assert_eq!(config.neuron.h, 30.0);
        assert_eq!(config.words.num_active, None);
        assert_eq!(config.run.seed, Some(1234));
        assert_eq!(config.run.workers, 0);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = CognonConfig::default();
        let mut cli_args = HashMap::new();
        cli_args.insert("w".to_string(), "300".to_string());
        cli_args.insert("r".to_string(), "333".to_string());
        cli_args.insert("log_level".to_string(), "debug".to_string());

        apply_cli_overrides(&mut config, &cli_args);

        assert_eq!(config.words.w, 300);
        assert_eq!(config.words.r, Some(333.0));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_override_precedence() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[run]").unwrap();
        writeln!(file, "repetitions = 5").unwrap();
        writeln!(file, "workers = 2").unwrap();

        env::set_var("COGNON_REPETITIONS", "7");
        env::set_var("COGNON_WORKERS", "3");

        let mut cli_args = HashMap::new();
        cli_args.insert("repetitions".to_string(), "9".to_string());

        let config = load_config(Some(&config_path), Some(&cli_args)).unwrap();

        env::remove_var("COGNON_REPETITIONS");
        env::remove_var("COGNON_WORKERS");

        // CLI wins for repetitions, env wins for workers (no CLI override)
        assert_eq!(config.run.repetitions, 9);
        assert_eq!(config.run.workers, 3);
    }
}
