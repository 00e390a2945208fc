use crate::axis::{Axis, HistogramDecl, LoopOrder};
use crate::flags::FlagSets;
use crate::ordered::OrderedMap;
use crate::rules::AllowRule;
use serde::Deserialize;
use typed_builder::TypedBuilder;

/// Everything one generator run is parameterized by.
///
/// Each use case (category sets, label formatting, rule table) is one value of
/// this type; the generation logic itself never changes between use cases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, TypedBuilder)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Human-readable name, used in logs only.
    #[builder(setter(into))]
    pub name: String,

    /// Joins channel, b-tag, jet and histogram into the composite key.
    #[serde(default = "default_delimiter")]
    #[builder(default = default_delimiter(), setter(into))]
    pub delimiter: String,

    pub histograms: Vec<HistogramDecl>,

    #[serde(deserialize_with = "crate::axis::entries::deserialize")]
    pub channels: Axis,

    #[serde(deserialize_with = "crate::axis::entries::deserialize")]
    pub btags: Axis,

    #[serde(deserialize_with = "crate::axis::entries::deserialize")]
    pub njets: Axis,

    /// Histogram name to allow rule. Histograms without a rule are unrestricted.
    #[serde(default)]
    #[builder(default)]
    pub allow: OrderedMap<String, AllowRule>,

    #[serde(default)]
    #[builder(default)]
    pub flags: FlagSets,

    #[serde(default)]
    #[builder(default)]
    pub loop_order: LoopOrder,

    /// Channel whose keys get an extra rename directive.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    pub combined: Option<RenameRule>,

    /// Category label, always emitted.
    #[serde(default)]
    #[builder(default)]
    pub label: LabelStyle,

    /// Channel label, emitted before the category label when present.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    pub channel_label: Option<LabelStyle>,

    #[serde(default = "default_save_extensions")]
    #[builder(default = default_save_extensions())]
    pub save_extensions: Vec<String>,

    /// `y-axis-format` used for histograms with non-uniform binning.
    #[serde(default = "default_non_uniform_format")]
    #[builder(default = default_non_uniform_format(), setter(into))]
    pub non_uniform_format: String,
}

impl GeneratorConfig {
    /// Enabled histogram names in declared order.
    pub fn enabled_histograms(&self) -> impl Iterator<Item = &str> {
        self.histograms.iter().filter(|h| h.enabled).map(|h| h.name.as_str())
    }
}

/// Replaces the channel segment of a key for one designated channel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenameRule {
    pub channel: String,
    pub alias: String,
}

impl Default for RenameRule {
    fn default() -> Self {
        Self { channel: "combined".to_owned(), alias: "ll".to_owned() }
    }
}

/// A text label placed on the canvas.
///
/// `text` may reference `{channel}`, `{btag}` and `{njet}`, which are replaced by
/// the display labels of the entry. Position components are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelStyle {
    pub text: String,
    pub position: [String; 2],
    pub font: u16,
}

impl LabelStyle {
    pub fn new(text: impl Into<String>, position: [&str; 2], font: u16) -> Self {
        Self { text: text.into(), position: position.map(str::to_owned), font }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::new("#splitline{N_{b jet} {btag}}{N_{jet} {njet}}", ["0.77", ".65"], 44)
    }
}

fn default_delimiter() -> String {
    "_".to_owned()
}

fn default_save_extensions() -> Vec<String> {
    vec!["pdf".to_owned(), "png".to_owned()]
}

fn default_non_uniform_format() -> String {
    "%1% / bin".to_owned()
}
