use std::borrow::Cow;

/// Errors raised while loading, validating or writing a histogram plan.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Opening, writing or renaming the output file failed.
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// A configuration document could not be parsed.
    #[error("Malformed configuration document{}: {source}", format_context(.context))]
    Toml { source: toml::de::Error, context: Option<Cow<'static, str>> },

    /// The literal tables are inconsistent with each other.
    #[error("Invalid generator configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown preset{}: {message}", format_context(.context))]
    UnknownPreset { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two combinations produced the same composite key.
    #[error("Duplicate composite key{}: {message}", format_context(.context))]
    DuplicateKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;

/// Adds `.context(...)` to results that convert into [`GeneratorError`].
pub trait GeneratorErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> GeneratorErrorExt<T> for Result<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                GeneratorError::Io { context: c, .. }
                | GeneratorError::Toml { context: c, .. }
                | GeneratorError::InvalidConfiguration { context: c, .. }
                | GeneratorError::UnknownPreset { context: c, .. }
                | GeneratorError::DuplicateKey { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> GeneratorErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| GeneratorError::Io { source, context: Some(context.into()) })
    }
}

impl<T> GeneratorErrorExt<T> for std::result::Result<T, toml::de::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| GeneratorError::Toml { source, context: Some(context.into()) })
    }
}

impl From<std::io::Error> for GeneratorError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

impl From<toml::de::Error> for GeneratorError {
    fn from(source: toml::de::Error) -> Self {
        Self::Toml { source, context: None }
    }
}

impl GeneratorError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConfiguration { message: message.into(), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_rendered() {
        let err: Result<()> = Err(GeneratorError::invalid("empty delimiter"));
        let err = err.context("preset 'tmw'").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid generator configuration (preset 'tmw'): empty delimiter"
        );
    }

    #[test]
    fn test_io_context_wraps_source() {
        let io: std::result::Result<(), _> =
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        let err = io.context("Failed to open output").unwrap_err();
        assert!(matches!(err, GeneratorError::Io { context: Some(_), .. }));
        assert!(err.to_string().starts_with("I/O failure (Failed to open output)"));
    }
}
