//! # Settings
//!
//! Layered, lowest precedence first:
//! 1. **Defaults**: preset `tmw`, output `histos_control.yml`, log level `info`.
//! 2. **Settings File**: `--settings <file>` (required to exist) or an optional
//!    `histoconf.toml` in the working directory.
//! 3. **Environment**: variables prefixed `HISTOCONF__`, nested with `__`
//!    (e.g. `HISTOCONF__LOG__LEVEL` maps to `log.level`).
//!
//! Command-line flags are applied on top by the handlers.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_SETTINGS_FILE: &str = "histoconf";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub preset: String,
    /// When set, takes precedence over `preset`.
    pub config: Option<PathBuf>,
    pub output: PathBuf,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    /// Forces ANSI colors; unset means colored only when stderr is a terminal.
    pub ansi: Option<bool>,
    /// Extra `tracing` directives, e.g. `histoconf_generator=debug`.
    pub filter: Option<String>,
}

impl Settings {
    /// Loads all layers.
    ///
    /// # Errors
    /// Returns an error if an explicit settings file is missing, a layer is
    /// malformed, or the merged values do not fit [`Settings`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.map_or_else(
            || File::with_name(DEFAULT_SETTINGS_FILE).required(false),
            |p| File::from(p).required(true),
        );

        Config::builder()
            .set_default("preset", histoconf_generator::presets::DEFAULT_PRESET)?
            .set_default("output", "histos_control.yml")?
            .set_default("log.level", "info")?
            .set_default("log.json", false)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("HISTOCONF")
                    .separator("__")
                    .convert_case(config::Case::Snake),
            )
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Failed to deserialize settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "preset = \"tmw-channels\"\n[log]\njson = true\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.preset, "tmw-channels");
        assert_eq!(settings.output, PathBuf::from("histos_control.yml"));
        assert_eq!(settings.log.level, "info");
        assert!(settings.log.json);
        assert!(settings.config.is_none());
        assert!(settings.log.ansi.is_none());
    }

    #[test]
    fn test_log_colors_can_be_forced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.toml");
        std::fs::write(&path, "[log]\nansi = false\nfilter = \"histoconf_generator=debug\"\n")
            .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.log.ansi, Some(false));
        assert_eq!(settings.log.filter.as_deref(), Some("histoconf_generator=debug"));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
