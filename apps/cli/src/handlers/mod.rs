pub mod generate;
pub mod inspect;

use crate::models::args::SourceArgs;
use crate::models::settings::Settings;
use anyhow::Result;
use histoconf_generator::Generator;
use tracing::debug;

/// Loads the generator from the command line source, falling back to settings.
///
/// A `--config` or `--preset` flag wins over both settings keys; among the
/// settings, `config` wins over `preset`.
pub fn load_generator(source: &SourceArgs, settings: &Settings) -> Result<Generator> {
    let generator = match (&source.config, &source.preset, &settings.config) {
        (Some(path), _, _) | (None, None, Some(path)) => {
            debug!(path = %path.display(), "Loading configuration file");
            Generator::from_file(path)?
        },
        (None, Some(name), _) => Generator::from_preset(name)?,
        (None, None, None) => Generator::from_preset(&settings.preset)?,
    };
    Ok(generator)
}
