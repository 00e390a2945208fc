//! # Directive Builder
//!
//! Turns an admitted combination into the option lines of its control-file entry.
//! Emission order is fixed: behavior flags (`log-y`, `sort-by-yields`,
//! `y-axis-format`), the rename for the combined channel, labels, save
//! extensions and finally a blank separator.

use crate::enumerate::Combination;
use histoconf_domain::{GeneratorConfig, LabelStyle, RenderFlags};
use std::fmt::{self, Write as _};

/// One option block of an entry, rendered with a two-space indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    LogY,
    SortByYields,
    YAxisFormat(String),
    Rename { from: String, to: String },
    Labels(Vec<Label>),
    SaveExtensions(Vec<String>),
    Separator,
}

/// A label with its template already interpolated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub position: [String; 2],
    pub font: u16,
}

impl Label {
    fn from_style(style: &LabelStyle, combination: &Combination<'_>) -> Self {
        Self {
            text: interpolate(&style.text, combination),
            position: style.position.clone(),
            font: style.font,
        }
    }
}

impl Directive {
    /// Writes the directive lines, each terminated by `\n`.
    pub fn render(&self, out: &mut impl fmt::Write) -> fmt::Result {
        match self {
            Self::LogY => out.write_str("  log-y: true\n"),
            Self::SortByYields => out.write_str("  sort-by-yields: true\n"),
            Self::YAxisFormat(format) => writeln!(out, "  y-axis-format: {}", quoted(format)),
            Self::Rename { from, to } => {
                out.write_str("  rename:\n")?;
                writeln!(out, "    - {{from: {}, to: {}}}", quoted(from), quoted(to))
            },
            Self::Labels(labels) => {
                out.write_str("  labels:\n")?;
                for Label { text, position: [x, y], font } in labels {
                    writeln!(
                        out,
                        "    - {{text: {}, position: [{x}, {y}], font: {font}}}",
                        quoted(text)
                    )?;
                }
                Ok(())
            },
            Self::SaveExtensions(extensions) => {
                out.write_str("  save-extensions: [")?;
                for (i, ext) in extensions.iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    out.write_str(&quoted(ext))?;
                }
                out.write_str("]\n")
            },
            Self::Separator => out.write_char('\n'),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

/// Builds the ordered directive list for one entry keyed by `key`.
pub fn build_directives(
    config: &GeneratorConfig,
    combination: &Combination<'_>,
    key: &str,
) -> Vec<Directive> {
    let flags = config.flags.flags_for(combination.histogram);
    let mut directives = Vec::with_capacity(7);

    if flags.contains(RenderFlags::LOG_Y) {
        directives.push(Directive::LogY);
    }
    if flags.contains(RenderFlags::SORT_BY_YIELDS) {
        directives.push(Directive::SortByYields);
    }
    if flags.contains(RenderFlags::NON_UNIFORM_BINNING) {
        directives.push(Directive::YAxisFormat(config.non_uniform_format.clone()));
    }

    if let Some(rule) = config.combined.as_ref().filter(|r| r.channel == combination.channel.key)
    {
        directives.push(Directive::Rename {
            from: key.to_owned(),
            to: combination.key_with_channel(&rule.alias, &config.delimiter),
        });
    }

    let mut labels = Vec::with_capacity(2);
    if let Some(style) = &config.channel_label {
        labels.push(Label::from_style(style, combination));
    }
    labels.push(Label::from_style(&config.label, combination));
    directives.push(Directive::Labels(labels));

    directives.push(Directive::SaveExtensions(config.save_extensions.clone()));
    directives.push(Directive::Separator);
    directives
}

/// Replaces `{channel}`, `{btag}` and `{njet}` with display labels.
///
/// Any other brace is literal text (TLatex groups such as `N_{jet}`).
pub fn interpolate(template: &str, combination: &Combination<'_>) -> String {
    let placeholders = [
        ("{channel}", combination.channel.label),
        ("{btag}", combination.btag.label),
        ("{njet}", combination.njet.label),
    ];

    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match placeholders.iter().find(|(token, _)| tail.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &tail[token.len()..];
            },
            None => {
                out.push('{');
                rest = &tail[1..];
            },
        }
    }
    out.push_str(rest);
    out
}

/// Single-quoted YAML scalar; an embedded quote is doubled.
fn quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
