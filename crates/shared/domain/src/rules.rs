use serde::Deserialize;

/// Per-histogram restriction on the three category axes.
///
/// An empty list leaves that axis unrestricted. The two-axis form of the rule
/// (b-tag and jet only) is this struct with `channels` left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AllowRule {
    pub channels: Vec<String>,
    pub btags: Vec<String>,
    pub njets: Vec<String>,
}

impl AllowRule {
    /// A rule restricting b-tag and jet categories only.
    pub fn two_axis<'a>(
        btags: impl IntoIterator<Item = &'a str>,
        njets: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self { channels: Vec::new(), btags: owned(btags), njets: owned(njets) }
    }

    /// A rule restricting all three category axes.
    pub fn three_axis<'a>(
        channels: impl IntoIterator<Item = &'a str>,
        btags: impl IntoIterator<Item = &'a str>,
        njets: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self { channels: owned(channels), btags: owned(btags), njets: owned(njets) }
    }
}

fn owned<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    keys.into_iter().map(str::to_owned).collect()
}
