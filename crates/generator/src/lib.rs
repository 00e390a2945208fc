//! Generates plotIt histogram control files from categorical axes.
//!
//! Every enabled histogram is crossed with every jet-multiplicity, b-tag and
//! channel category. Combinations turned down by the allow rules are skipped;
//! each remaining one becomes an entry keyed `channel_btag_njet_histogram`
//! carrying its drawing directives.
//!
//! # Core Features
//!
//! - **Deterministic Output**: Entries follow the configured loop nesting and the
//!   declared order of every axis, so repeated runs are byte-identical.
//! - **Data-Driven Use Cases**: Category sets, rules and labels live in
//!   [`GeneratorConfig`]; built-in presets and user TOML files share one format.
//! - **Atomic Writes**: [`HistogramPlan::write_file`] never leaves a truncated file.
//!
//! # Examples
//!
//! ```rust
//! use histoconf_generator::{Generator, GeneratorError};
//!
//! fn main() -> Result<(), GeneratorError> {
//!     let generator = Generator::from_preset("tmw")?;
//!     let plan = generator.plan()?;
//!     assert_eq!(plan.len(), 170);
//!
//!     let text = plan.render();
//!     assert!(text.starts_with("'ee_ZeroBTag_TwoJet_nJets':\n"));
//!     Ok(())
//! }
//! ```

pub mod directives;
pub mod enumerate;
mod error;
pub mod filter;
pub mod presets;
pub mod serializer;
pub mod validate;

pub use directives::{Directive, Label, build_directives};
pub use enumerate::{Category, Combination, Combinations};
pub use error::{GeneratorError, GeneratorErrorExt, Result};
pub use histoconf_domain as domain;
pub use histoconf_domain::GeneratorConfig;
pub use serializer::HistogramPlan;

use std::path::Path;
use tracing::{debug, info};

/// A validated configuration, ready to produce plans.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Validates `config` and wraps it.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidConfiguration`] when the tables are inconsistent
    /// and [`GeneratorError::DuplicateKey`] when two combinations share a key.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        validate::validate(&config).context(format!("config '{}'", config.name))?;
        Ok(Self { config })
    }

    /// Loads and validates a built-in preset.
    pub fn from_preset(name: &str) -> Result<Self> {
        Self::new(presets::load(name)?)
    }

    /// Loads and validates a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::new(presets::load_file(path)?)
    }

    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// A fresh enumeration over the admitted combinations.
    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(&self.config)
    }

    /// Composite keys of all entries, in output order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.combinations().map(|c| c.key(&self.config.delimiter))
    }

    /// Builds the complete ordered plan.
    ///
    /// # Errors
    /// Returns [`GeneratorError::DuplicateKey`] when two combinations collapse
    /// onto one key, which happens when category keys contain the delimiter.
    #[tracing::instrument(skip(self), fields(config = %self.config.name))]
    pub fn plan(&self) -> Result<HistogramPlan> {
        let config = &self.config;
        let mut combinations = self.combinations();
        let mut plan = HistogramPlan::default();

        for combination in combinations.by_ref() {
            let key = combination.key(&config.delimiter);
            let directives = build_directives(config, &combination, &key);
            plan.push(key, directives).context(format!("config '{}'", config.name))?;
        }

        debug!(rejected = combinations.rejected(), "Allow rules applied");
        info!(entries = plan.len(), "Histogram plan built");
        Ok(plan)
    }
}
