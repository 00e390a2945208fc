use crate::handlers::load_generator;
use crate::models::args::SourceArgs;
use crate::models::settings::Settings;
use anyhow::Result;
use histoconf_generator::{Generator, presets};

/// Validates the configuration and reports how many entries it yields.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or is invalid.
pub fn check(source: &SourceArgs, settings: &Settings) -> Result<()> {
    let generator = load_generator(source, settings)?;
    let mut combinations = generator.combinations();
    let entries = combinations.by_ref().count();

    println!(
        "✅ Config '{}' is valid: {entries} entries, {} combinations rejected",
        generator.config().name,
        combinations.rejected()
    );
    Ok(())
}

/// Prints the composite keys, one per line.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or is invalid.
pub fn keys(source: &SourceArgs, settings: &Settings) -> Result<()> {
    let generator = load_generator(source, settings)?;
    for key in generator.keys() {
        println!("{key}");
    }
    Ok(())
}

/// Lists the built-in presets with their entry counts.
///
/// # Errors
/// Returns an error if an embedded preset fails to load.
pub fn list_presets() -> Result<()> {
    println!("\nPresets:\n");
    println!("{:<15} {:<8} {:<10}", "Name", "Entries", "Histograms");
    println!("{:-<35}", "");

    for name in presets::names() {
        let generator = Generator::from_preset(name)?;
        let histograms = generator.config().enabled_histograms().count();
        println!("{:<15} {:<8} {:<10}", name, generator.combinations().count(), histograms);
    }
    println!();
    Ok(())
}
