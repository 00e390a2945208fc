//! # Combination Enumerator
//!
//! Walks the four axes as an odometer in the configured loop order, outermost
//! axis first, and yields every tuple admitted by the allow rules. Each axis is
//! visited in declared order; the histogram axis only visits enabled entries.

use crate::filter;
use histoconf_domain::{AxisKind, GeneratorConfig};
use std::iter::FusedIterator;

/// A category value paired with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category<'a> {
    pub key: &'a str,
    pub label: &'a str,
}

/// One admitted `(histogram, njet, btag, channel)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination<'a> {
    pub histogram: &'a str,
    pub njet: Category<'a>,
    pub btag: Category<'a>,
    pub channel: Category<'a>,
}

impl Combination<'_> {
    /// Composite key: channel, b-tag, jet and histogram joined by `delimiter`.
    pub fn key(&self, delimiter: &str) -> String {
        self.key_with_channel(self.channel.key, delimiter)
    }

    /// The composite key with the channel segment replaced by `channel`.
    pub fn key_with_channel(&self, channel: &str, delimiter: &str) -> String {
        [channel, self.btag.key, self.njet.key, self.histogram].join(delimiter)
    }
}

/// Lazy, finite iterator over admitted combinations.
///
/// Restarting means calling [`Combinations::new`] again; the sequence depends only
/// on the configuration.
#[derive(Debug)]
pub struct Combinations<'a> {
    config: &'a GeneratorConfig,
    histograms: Vec<&'a str>,
    order: [AxisKind; 4],
    lens: [usize; 4],
    cursor: Option<[usize; 4]>,
    rejected: usize,
}

impl<'a> Combinations<'a> {
    /// Starts a new enumeration.
    ///
    /// An invalid loop order falls back to the default nesting; validation
    /// rejects such configurations before generation.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        let histograms: Vec<&str> = config.enabled_histograms().collect();
        let order = config.loop_order.as_permutation().unwrap_or(AxisKind::ALL);
        let lens = order.map(|axis| match axis {
            AxisKind::Histogram => histograms.len(),
            AxisKind::Njet => config.njets.len(),
            AxisKind::Btag => config.btags.len(),
            AxisKind::Channel => config.channels.len(),
        });
        let cursor = lens.iter().all(|&len| len > 0).then_some([0; 4]);

        Self { config, histograms, order, lens, cursor, rejected: 0 }
    }

    /// Number of tuples the allow rules have turned down so far.
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    fn combination_at(&self, cursor: [usize; 4]) -> Option<Combination<'a>> {
        let config = self.config;
        let mut histogram = None;
        let mut njet = None;
        let mut btag = None;
        let mut channel = None;

        for (axis, index) in self.order.into_iter().zip(cursor) {
            match axis {
                AxisKind::Histogram => histogram = self.histograms.get(index).copied(),
                AxisKind::Njet => njet = category(config.njets.get_index(index)),
                AxisKind::Btag => btag = category(config.btags.get_index(index)),
                AxisKind::Channel => channel = category(config.channels.get_index(index)),
            }
        }

        Some(Combination { histogram: histogram?, njet: njet?, btag: btag?, channel: channel? })
    }

    /// Moves the odometer one step, innermost axis fastest.
    fn advance(&mut self) {
        let Some(mut cursor) = self.cursor else { return };
        for level in (0..4).rev() {
            cursor[level] += 1;
            if cursor[level] < self.lens[level] {
                self.cursor = Some(cursor);
                return;
            }
            cursor[level] = 0;
        }
        self.cursor = None;
    }
}

fn category<'a>(entry: Option<(&'a String, &'a String)>) -> Option<Category<'a>> {
    entry.map(|(key, label)| Category { key, label })
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cursor = self.cursor?;
            self.advance();

            let combination = self.combination_at(cursor)?;
            if filter::admits(&self.config.allow, &combination) {
                return Some(combination);
            }
            self.rejected += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(cursor) = self.cursor else { return (0, Some(0)) };

        // Tuples left, counting the current cursor position.
        let mut remaining = 0usize;
        for (&len, &position) in self.lens.iter().zip(&cursor) {
            remaining = remaining * len + (len - position - 1);
        }
        (0, Some(remaining + 1))
    }
}

impl FusedIterator for Combinations<'_> {}
