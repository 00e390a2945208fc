//! Consistency checks over the literal tables, run before every generation.
//!
//! Hard errors name the first offending item. Oddities that still produce a
//! well-formed file are only logged.

use crate::enumerate::Combinations;
use crate::error::{GeneratorError, Result};
use histoconf_domain::{Axis, GeneratorConfig, LabelStyle};
use std::collections::HashSet;
use tracing::warn;

/// Fails fast on the first inconsistency in `config`.
///
/// # Errors
/// Returns [`GeneratorError::InvalidConfiguration`] describing the problem, or
/// [`GeneratorError::DuplicateKey`] when category keys containing the delimiter
/// make two combinations share a composite key.
pub fn validate(config: &GeneratorConfig) -> Result<()> {
    if config.delimiter.is_empty() {
        return Err(GeneratorError::invalid("delimiter cannot be empty"));
    }

    let mut declared = HashSet::with_capacity(config.histograms.len());
    for histogram in &config.histograms {
        if histogram.name.is_empty() {
            return Err(GeneratorError::invalid("histogram name cannot be empty"));
        }
        if !declared.insert(histogram.name.as_str()) {
            return Err(GeneratorError::invalid(format!(
                "histogram '{}' is declared twice",
                histogram.name
            )));
        }
    }

    for (name, rule) in config.allow.iter() {
        if !declared.contains(name.as_str()) {
            return Err(GeneratorError::invalid(format!(
                "allow rule refers to undeclared histogram '{name}'"
            )));
        }
        check_keys(&rule.channels, &config.channels, "channel", name)?;
        check_keys(&rule.btags, &config.btags, "b-tag category", name)?;
        check_keys(&rule.njets, &config.njets, "jet category", name)?;
    }

    for (_, key, names) in config.flags.sets() {
        if let Some(unknown) = names.iter().find(|n| !declared.contains(n.as_str())) {
            return Err(GeneratorError::invalid(format!(
                "flag set '{key}' refers to undeclared histogram '{unknown}'"
            )));
        }
    }

    if config.loop_order.as_permutation().is_none() {
        let order: Vec<&str> = config.loop_order.0.iter().map(|a| a.as_str()).collect();
        return Err(GeneratorError::invalid(format!(
            "loop order [{}] must name histogram, njet, btag and channel exactly once",
            order.join(", ")
        )));
    }

    let mut keys = HashSet::new();
    for combination in Combinations::new(config) {
        let key = combination.key(&config.delimiter);
        if keys.contains(&key) {
            return Err(GeneratorError::DuplicateKey { message: key.into(), context: None });
        }
        keys.insert(key);
    }

    check_label(&config.label, "label")?;
    if let Some(style) = &config.channel_label {
        check_label(style, "channel label")?;
    }

    if config.save_extensions.iter().any(String::is_empty) {
        return Err(GeneratorError::invalid("save extensions cannot contain an empty format"));
    }

    warn_oddities(config);
    Ok(())
}

fn check_keys(keys: &[String], axis: &Axis, what: &str, histogram: &str) -> Result<()> {
    match keys.iter().find(|k| !axis.contains_key(k.as_str())) {
        Some(unknown) => Err(GeneratorError::invalid(format!(
            "allow rule for '{histogram}' refers to unknown {what} '{unknown}'"
        ))),
        None => Ok(()),
    }
}

/// TLatex needs balanced groups; a stray brace usually means a mistyped placeholder.
fn check_label(style: &LabelStyle, what: &str) -> Result<()> {
    let mut depth = 0usize;
    for c in style.text.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    GeneratorError::invalid(format!(
                        "{what} '{}' closes an unopened brace",
                        style.text
                    ))
                })?;
            },
            _ => {},
        }
    }
    if depth != 0 {
        return Err(GeneratorError::invalid(format!(
            "{what} '{}' leaves {depth} brace(s) open",
            style.text
        )));
    }
    Ok(())
}

fn warn_oddities(config: &GeneratorConfig) {
    let axes = [("channel", &config.channels), ("b-tag", &config.btags), ("jet", &config.njets)];
    for (axis, table) in axes {
        if table.is_empty() {
            warn!(config = %config.name, axis, "Axis is empty; nothing will be generated");
        }
    }
    if config.enabled_histograms().next().is_none() {
        warn!(config = %config.name, "No enabled histograms; nothing will be generated");
    }

    if let Some(rule) = &config.combined {
        if !config.channels.contains_key(rule.channel.as_str()) {
            warn!(
                channel = %rule.channel,
                "Rename channel is not declared; no rename will be emitted"
            );
        }
    }

    for name in config.allow.keys() {
        let enabled = config.histograms.iter().any(|h| h.enabled && h.name == *name);
        if !enabled {
            warn!(histogram = %name, "Allow rule targets a disabled histogram");
        }
    }
}
