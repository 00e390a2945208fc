//! # Serializer
//!
//! Renders a [`HistogramPlan`] in the control-file format read by the plotting
//! tool: a single-quoted key line per entry followed by its directive lines, in
//! insertion order.

use crate::directives::Directive;
use crate::error::{GeneratorError, GeneratorErrorExt, Result};
use histoconf_domain::OrderedMap;
use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ordered mapping from composite key to the directives of that entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistogramPlan {
    entries: OrderedMap<String, Vec<Directive>>,
}

impl HistogramPlan {
    /// Appends an entry. Keys must be unique within a plan.
    ///
    /// # Errors
    /// Returns [`GeneratorError::DuplicateKey`] when `key` was already added.
    pub fn push(&mut self, key: String, directives: Vec<Directive>) -> Result<()> {
        if self.entries.contains_key(&key) {
            return Err(GeneratorError::DuplicateKey { message: key.into(), context: None });
        }
        self.entries.insert(key, directives);
        Ok(())
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[Directive]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[Directive])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Streams the control file into `writer`, one entry at a time.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut buf = String::with_capacity(512);
        for (key, directives) in self.iter() {
            buf.clear();
            render_entry(&mut buf, key, directives).map_err(io::Error::other)?;
            writer.write_all(buf.as_bytes())?;
        }
        writer.flush()
    }

    /// The whole control file as a string.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.len() * 256);
        for (key, directives) in self.iter() {
            // Writing into a String cannot fail.
            let _ = render_entry(&mut out, key, directives);
        }
        out
    }

    /// Writes the control file to `path`, replacing it atomically.
    ///
    /// The content goes to a temporary sibling first, is synced to disk and then
    /// renamed over `path`, so an interrupted run never leaves a truncated file.
    /// The temporary file is removed again if any step fails.
    ///
    /// # Errors
    /// Returns [`GeneratorError::Io`] when the directory cannot be created or the
    /// file cannot be written, synced or renamed.
    #[tracing::instrument(skip(self), fields(entries = self.len()))]
    pub fn write_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Failed to create output directory: {}", parent.display()))?;
        }

        let temp = temp_path(path);
        let result = self.write_temp(&temp).and_then(|()| replace(&temp, path));
        if result.is_err() && temp.exists() {
            debug!(temp = %temp.display(), "Removing temporary output after failure");
            let _ = fs::remove_file(&temp);
        }
        result?;

        info!(path = %path.display(), entries = self.len(), "Wrote histogram control file");
        Ok(())
    }

    fn write_temp(&self, temp: &Path) -> Result<()> {
        let file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(temp)
            .context(format!("Temp creation failed: {}", temp.display()))?;

        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer).context("Write failed")?;
        let file =
            writer.into_inner().map_err(io::IntoInnerError::into_error).context("Flush failed")?;
        file.sync_all().context("Hardware sync failed")?;
        Ok(())
    }
}

fn render_entry(out: &mut String, key: &str, directives: &[Directive]) -> std::fmt::Result {
    writeln!(out, "'{}':", key.replace('\'', "''"))?;
    for directive in directives {
        directive.render(out)?;
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map_or_else(|| "histos_control".into(), ToOwned::to_owned);
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

fn replace(temp: &Path, path: &Path) -> Result<()> {
    match fs::rename(temp, path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            fs::remove_file(path)
                .context(format!("Failed to replace existing file: {}", path.display()))?;
            fs::rename(temp, path).context(format!(
                "Atomic swap failed: {} -> {}",
                temp.display(),
                path.display()
            ))
        },
        Err(source) => Err(GeneratorError::Io {
            source,
            context: Some(
                format!("Atomic swap failed: {} -> {}", temp.display(), path.display()).into(),
            ),
        }),
    }
}
