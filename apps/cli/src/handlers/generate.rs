use crate::handlers::load_generator;
use crate::models::args::SourceArgs;
use crate::models::settings::Settings;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

/// Generates the control file and writes it to disk or stdout.
///
/// # Errors
/// Returns an error if the configuration is invalid or the output cannot be written.
pub fn generate(
    source: &SourceArgs,
    output: Option<PathBuf>,
    to_stdout: bool,
    settings: &Settings,
) -> Result<()> {
    let generator = load_generator(source, settings)?;
    let plan = generator.plan()?;

    if to_stdout {
        let mut stdout = std::io::stdout().lock();
        plan.write_to(&mut stdout).context("Failed to write to stdout")?;
        return stdout.flush().context("Failed to flush stdout");
    }

    let path = output.unwrap_or_else(|| settings.output.clone());
    plan.write_file(&path)?;
    println!("✅ Wrote {} entries to {}", plan.len(), path.display());
    Ok(())
}
