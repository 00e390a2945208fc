use crate::ordered::OrderedMap;
use serde::Deserialize;

/// A categorical axis: category key to display label, in declared order.
pub type Axis = OrderedMap<String, String>;

/// Builds an [`Axis`] from `(key, label)` pairs.
pub fn axis<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Axis {
    entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect()
}

/// One declared histogram. Disabled histograms stay in the table but are never enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "HistogramRepr")]
pub struct HistogramDecl {
    pub name: String,
    pub enabled: bool,
}

impl HistogramDecl {
    pub fn enabled(name: impl Into<String>) -> Self {
        Self { name: name.into(), enabled: true }
    }

    pub fn disabled(name: impl Into<String>) -> Self {
        Self { name: name.into(), enabled: false }
    }
}

impl From<&str> for HistogramDecl {
    fn from(name: &str) -> Self {
        Self::enabled(name)
    }
}

/// Either a bare name or `{ name = "...", enabled = false }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum HistogramRepr {
    Name(String),
    Full {
        name: String,
        #[serde(default = "enabled_by_default")]
        enabled: bool,
    },
}

const fn enabled_by_default() -> bool {
    true
}

impl From<HistogramRepr> for HistogramDecl {
    fn from(repr: HistogramRepr) -> Self {
        match repr {
            HistogramRepr::Name(name) => Self::enabled(name),
            HistogramRepr::Full { name, enabled } => Self { name, enabled },
        }
    }
}

/// The four enumerable axes, used to declare the loop nesting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Histogram,
    Njet,
    Btag,
    Channel,
}

impl AxisKind {
    pub const ALL: [Self; 4] = [Self::Histogram, Self::Njet, Self::Btag, Self::Channel];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Histogram => "histogram",
            Self::Njet => "njet",
            Self::Btag => "btag",
            Self::Channel => "channel",
        }
    }
}

/// Nesting order of the enumeration loops, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LoopOrder(pub Vec<AxisKind>);

impl Default for LoopOrder {
    fn default() -> Self {
        Self(AxisKind::ALL.to_vec())
    }
}

impl LoopOrder {
    /// Returns the order as a fixed array when it names each axis exactly once.
    pub fn as_permutation(&self) -> Option<[AxisKind; 4]> {
        let order: [AxisKind; 4] = self.0.as_slice().try_into().ok()?;
        AxisKind::ALL.iter().all(|axis| order.contains(axis)).then_some(order)
    }
}

/// Serde helper reading an [`Axis`] from an array of `{ key, label }` tables.
///
/// Arrays keep their order in every format; plain TOML tables do not. A missing
/// `label` falls back to the key.
pub mod entries {
    use super::Axis;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Entry {
        key: String,
        label: Option<String>,
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Axis, D::Error> {
        let raw = Vec::<Entry>::deserialize(d)?;
        let mut axis = Axis::with_capacity(raw.len());
        for Entry { key, label } in raw {
            let label = label.unwrap_or_else(|| key.clone());
            if axis.contains_key(&key) {
                return Err(serde::de::Error::custom(format!("duplicate axis key '{key}'")));
            }
            axis.insert(key, label);
        }
        Ok(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_order_permutation() {
        assert!(LoopOrder::default().as_permutation().is_some());

        let repeated = LoopOrder(vec![
            AxisKind::Histogram,
            AxisKind::Histogram,
            AxisKind::Btag,
            AxisKind::Channel,
        ]);
        assert!(repeated.as_permutation().is_none());

        let short = LoopOrder(vec![AxisKind::Channel]);
        assert!(short.as_permutation().is_none());
    }

    #[test]
    fn test_axis_helper_keeps_order() {
        let table = axis([("TwoJet", "= 2"), ("InclusiveNJet", "#geq 0")]);
        assert_eq!(table.get_index(0), Some((&"TwoJet".to_owned(), &"= 2".to_owned())));
        assert_eq!(table.get("InclusiveNJet").map(String::as_str), Some("#geq 0"));
    }
}
