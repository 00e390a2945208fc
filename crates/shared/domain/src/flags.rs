use bitflags::bitflags;
use serde::Deserialize;

bitflags! {
    /// Rendering behaviors toggled per histogram.
    ///
    /// Declaration order is the order the matching directives are emitted in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u8 {
        const LOG_Y = 1 << 0;
        const SORT_BY_YIELDS = 1 << 1;
        const NON_UNIFORM_BINNING = 1 << 2;
    }
}

/// Named histogram subsets, one per [`RenderFlags`] bit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlagSets {
    pub log_y: Vec<String>,
    pub sort_by_yields: Vec<String>,
    pub non_uniform_binning: Vec<String>,
}

impl FlagSets {
    /// Union of the flags whose set contains `histogram`.
    pub fn flags_for(&self, histogram: &str) -> RenderFlags {
        self.sets()
            .into_iter()
            .filter(|(_, _, names)| names.iter().any(|n| n == histogram))
            .fold(RenderFlags::empty(), |acc, (flag, _, _)| acc | flag)
    }

    /// Each flag with its settings key and histogram set, in emission order.
    pub fn sets(&self) -> [(RenderFlags, &'static str, &[String]); 3] {
        [
            (RenderFlags::LOG_Y, "log_y", self.log_y.as_slice()),
            (RenderFlags::SORT_BY_YIELDS, "sort_by_yields", self.sort_by_yields.as_slice()),
            (
                RenderFlags::NON_UNIFORM_BINNING,
                "non_uniform_binning",
                self.non_uniform_binning.as_slice(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_additive() {
        let sets = FlagSets {
            log_y: vec!["mlb".to_owned()],
            sort_by_yields: vec!["mlb".to_owned(), "ht".to_owned()],
            non_uniform_binning: vec![],
        };

        assert_eq!(sets.flags_for("mlb"), RenderFlags::LOG_Y | RenderFlags::SORT_BY_YIELDS);
        assert_eq!(sets.flags_for("ht"), RenderFlags::SORT_BY_YIELDS);
        assert!(sets.flags_for("nJets").is_empty());
    }

    #[test]
    fn test_sets_are_named_after_their_keys() {
        let keys: Vec<&str> = FlagSets::default().sets().iter().map(|(_, key, _)| *key).collect();
        assert_eq!(keys, ["log_y", "sort_by_yields", "non_uniform_binning"]);
    }
}
