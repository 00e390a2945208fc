//! # Logger
//!
//! Diagnostic logging for the histoconf tools.
//! Everything is written to stderr so that generated output printed on stdout
//! stays clean and can be piped.
//!
//! * Human-readable compact lines by default, JSON lines with
//!   [`LoggerBuilder::json`].
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"histoconf_generator=debug"`), in addition to `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use histoconf_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("histoconf")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::io::IsTerminal;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
pub struct LoggerConfig {
    level: LevelFilter,
    json: bool,
    ansi: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            json: false,
            ansi: std::io::stderr().is_terminal(),
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `histoconf_generator=debug`).
    ///
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Switches to one JSON object per event.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    /// Forces ANSI colors on or off. Defaults to on when stderr is a terminal.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        if name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }

        let env_filter = build_env_filter(&self.config)?;

        let stderr = layer().with_writer(std::io::stderr);
        let console = if self.config.json {
            stderr.json().boxed()
        } else {
            stderr.compact().with_ansi(self.config.ansi).boxed()
        };

        tracing_subscriber::registry().with(env_filter).with(console).try_init()?;
        tracing::debug!(logger = %name, json = self.config.json, "Logging initialized");

        Ok(Logger { name })
    }
}

/// A handle to the initialized logging system.
#[must_use = "The handle identifies the installed subscriber; keep it for the program's lifetime."]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// # Example
    ///
    /// ```rust
    /// use histoconf_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("histoconf")
    ///     .level(LevelFilter::WARN)
    ///     .json(true)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Parses a level name such as `info` or `WARN`.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level
        .parse()
        .map_err(|_| LoggerError::invalid(format!("Unknown log level '{level}'")))
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder
                .parse(filter)
                .map_err(|e| LoggerError::invalid(format!("Invalid env filter '{filter}': {e}")))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_logger_builder_initial_state() {
        let builder = Logger::builder().name("histoconf").env_filter("histoconf=debug");
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert!(!builder.config.json);
        assert_eq!(builder.config.env_filter.as_deref(), Some("histoconf=debug"));
    }

    #[test]
    #[serial]
    fn test_logger_builder_configuration() {
        let builder =
            Logger::builder().name("histoconf").json(true).ansi(false).level(LevelFilter::DEBUG);
        assert!(builder.config.json);
        assert!(!builder.config.ansi);
        assert_eq!(builder.config.level, LevelFilter::DEBUG);
    }

    #[test]
    #[serial]
    fn test_empty_name_is_rejected() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_invalid_env_filter_is_rejected() {
        let err =
            Logger::builder().name("histoconf").env_filter("histoconf=loud").init().unwrap_err();
        assert!(err.to_string().starts_with("Invalid logger configuration"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("warn").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level("TRACE").unwrap(), LevelFilter::TRACE);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_context_is_rendered() {
        let err: Result<(), LoggerError> = Err(LoggerError::invalid("bad level"));
        let err = err.context("settings").unwrap_err();
        assert_eq!(err.to_string(), "Invalid logger configuration (settings): bad level");
    }
}
