//! Built-in configurations, compiled into the binary.
//!
//! A preset is an ordinary configuration document; user files go through the
//! same [`parse`] path.

use crate::error::{GeneratorError, GeneratorErrorExt, Result};
use histoconf_domain::GeneratorConfig;
use std::path::Path;

/// Preset registry: name and TOML source, in listing order.
pub const PRESETS: &[(&str, &str)] = &[
    ("tmw", include_str!("../presets/tmw.toml")),
    ("tmw-channels", include_str!("../presets/tmw-channels.toml")),
];

/// Name of the preset used when nothing else is requested.
pub const DEFAULT_PRESET: &str = "tmw";

pub fn names() -> impl ExactSizeIterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

/// Raw TOML source of the preset `name`.
pub fn source(name: &str) -> Option<&'static str> {
    PRESETS.iter().find(|(n, _)| *n == name).map(|(_, doc)| *doc)
}

/// Parses the preset `name`.
///
/// # Errors
/// [`GeneratorError::UnknownPreset`] for an unregistered name, or
/// [`GeneratorError::Toml`] if the embedded document is malformed.
pub fn load(name: &str) -> Result<GeneratorConfig> {
    let document = source(name).ok_or_else(|| GeneratorError::UnknownPreset {
        message: format!("'{name}' (available: {})", names().collect::<Vec<_>>().join(", ")).into(),
        context: None,
    })?;
    parse(document).context(format!("preset '{name}'"))
}

/// Parses a configuration document.
///
/// # Errors
/// Returns [`GeneratorError::Toml`] for syntax errors, unknown fields or
/// duplicated axis keys.
pub fn parse(document: &str) -> Result<GeneratorConfig> {
    Ok(toml::from_str(document)?)
}

/// Reads and parses the configuration file at `path`.
///
/// # Errors
/// [`GeneratorError::Io`] when the file cannot be read, otherwise as [`parse`].
pub fn load_file(path: &Path) -> Result<GeneratorConfig> {
    let document = std::fs::read_to_string(path)
        .context(format!("Failed to read configuration: {}", path.display()))?;
    parse(&document).context(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_parses() {
        for name in names() {
            let config = load(name).unwrap();
            assert_eq!(config.name, name);
        }
    }

    #[test]
    fn test_default_preset_is_registered() {
        assert!(source(DEFAULT_PRESET).is_some());
    }

    #[test]
    fn test_unknown_preset_lists_alternatives() {
        let err = load("ttbar").unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownPreset { .. }));
        assert!(err.to_string().contains("available: tmw, tmw-channels"));
    }

    #[test]
    fn test_parse_error_names_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = \"x\"\nhistograms = 3\n").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, GeneratorError::Toml { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, GeneratorError::Io { .. }));
    }
}
