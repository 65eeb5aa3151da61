// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! CLI argument parsing for per-crate debug flags
//!
//! Supports flags like `--debug-cognon-neural`, `--debug-cognon-experiment`, etc.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Crates with debug logging switched on
///
/// # Example
/// ```rust
/// use cognon_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_args(vec!["--debug-cognon-neural".to_string()]);
/// assert!(flags.is_enabled("cognon-neural"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Parse debug flags from command-line arguments
    ///
    /// Looks for arguments matching `--debug-{crate-name}`.
    /// `--debug-all` enables every crate in [`KNOWN_CRATES`].
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CrateDebugFlags::default();

        for arg in args {
            if arg == "--debug-all" {
                flags.enable_all();
            } else if let Some(crate_name) = arg.strip_prefix("--debug-") {
                flags.enable(crate_name);
            }
        }

        flags
    }

    pub fn enable(&mut self, crate_name: &str) {
        let crate_name = crate_name.trim();
        if !crate_name.is_empty() {
            self.enabled_crates.insert(crate_name.to_string());
        }
    }

    pub fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enable(crate_name);
        }
    }

    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    pub fn enabled_crates(&self) -> Vec<&String> {
        self.enabled_crates.iter().collect()
    }

    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// `DEBUG` for enabled crates, `INFO` otherwise
    pub fn log_level(&self, crate_name: &str) -> tracing::Level {
        if self.is_enabled(crate_name) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// `EnvFilter` directive with `info` as the default level
    pub fn to_filter_string(&self) -> String {
        self.to_filter_string_with_base("info")
    }

    /// `EnvFilter` directive for the enabled crates on top of `base`
    ///
    /// Each crate appears twice: once under its log target
    /// (`cognon-neural`) and once under its module path (`cognon_neural`),
    /// so events without an explicit target are covered too.
    pub fn to_filter_string_with_base(&self, base: &str) -> String {
        let mut filters = Vec::with_capacity(self.enabled_crates.len() * 2 + 1);
        for crate_name in &self.enabled_crates {
            filters.push(format!("{}=debug", crate_name));
            let module_path = crate_name.replace('-', "_");
            if module_path != *crate_name {
                filters.push(format!("{}=debug", module_path));
            }
        }
        filters.push(base.to_string());
        filters.join(",")
    }
}

/// Parse debug flags from the process arguments and `COGNON_DEBUG`
///
/// `COGNON_DEBUG` is either `all` or comma-separated crate names,
/// e.g. `cognon-neural,cognon-experiment`.
pub fn parse_debug_flags() -> CrateDebugFlags {
    let mut flags = CrateDebugFlags::from_args(env::args());
    if let Ok(value) = env::var("COGNON_DEBUG") {
        apply_debug_env(&mut flags, &value);
    }
    flags
}

fn apply_debug_env(flags: &mut CrateDebugFlags, value: &str) {
    if value.trim() == "all" {
        flags.enable_all();
    } else {
        for crate_name in value.split(',') {
            flags.enable(crate_name);
        }
    }
}

/// Generate help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug-all                    Enable debug logging for all crates
  --debug-{{crate-name}}          Enable debug logging for specific crate

Available crates:
  {}

Environment Variable:
  COGNON_DEBUG={{crate-name}}[,{{crate-name}}]  Enable debug for crates (comma-separated)
  COGNON_DEBUG=all                               Enable debug for all crates

Examples:
  --debug-cognon-neural
  --debug-cognon-neural --debug-cognon-experiment
  COGNON_DEBUG=cognon-experiment
"#,
        KNOWN_CRATES.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crate_flag() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-cognon-neural".to_string()]);
        assert!(flags.is_enabled("cognon-neural"));
        assert!(!flags.is_enabled("cognon-experiment"));
        assert!(flags.any_enabled());
    }

    #[test]
    fn test_unrelated_args_ignored() {
        let flags = CrateDebugFlags::from_args(vec![
            "cognon-tables".to_string(),
            "table21".to_string(),
            "--repetitions".to_string(),
            "5".to_string(),
        ]);
        assert!(!flags.any_enabled());
        assert_eq!(flags.to_filter_string(), "info");
    }

    #[test]
    fn test_debug_all() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-all".to_string()]);
        for crate_name in KNOWN_CRATES {
            assert!(flags.is_enabled(crate_name), "{} should be enabled", crate_name);
        }
    }

    #[test]
    fn test_filter_string() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-cognon-experiment".to_string()]);
        assert_eq!(
            flags.to_filter_string(),
            "cognon-experiment=debug,cognon_experiment=debug,info"
        );
        assert_eq!(
            flags.to_filter_string_with_base("warn"),
            "cognon-experiment=debug,cognon_experiment=debug,warn"
        );
    }

    #[test]
    fn test_log_level() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-cognon-neural".to_string()]);
        assert_eq!(flags.log_level("cognon-neural"), tracing::Level::DEBUG);
        assert_eq!(flags.log_level("cognon-config"), tracing::Level::INFO);
    }

    #[test]
    fn test_debug_env_value() {
        let mut flags = CrateDebugFlags::default();
        apply_debug_env(&mut flags, "cognon-neural, cognon-config,");
        assert_eq!(flags.enabled_crates().len(), 2);
        assert!(flags.is_enabled("cognon-config"));

        let mut flags = CrateDebugFlags::default();
        apply_debug_env(&mut flags, "all");
        assert_eq!(flags.enabled_crates().len(), KNOWN_CRATES.len());
    }

    #[test]
    fn test_help_lists_crates() {
        let help = debug_flags_help();
        for crate_name in KNOWN_CRATES {
            assert!(help.contains(crate_name));
        }
    }
}
