use histoconf_domain::{AxisKind, GeneratorConfig, HistogramDecl, RenderFlags};

const DOCUMENT: &str = r##"
name = "sample"
histograms = ["nJets", { name = "NEvents", enabled = false }, "mlb_minimax"]
loop_order = ["histogram", "channel", "btag", "njet"]

[[channels]]
key = "mumu"

[[channels]]
key = "ee"
label = "e e"

[[btags]]
key = "TwoBTag"
label = "= 2"

[[njets]]
key = "TwoJet"
label = "= 2"

[allow.mlb_minimax]
btags = ["TwoBTag"]
njets = ["TwoJet"]

[flags]
log_y = ["mlb_minimax"]

[combined]
channel = "ee"
alias = "same"
"##;

#[test]
fn config_deserializes_in_declared_order() {
    let cfg: GeneratorConfig = toml::from_str(DOCUMENT).expect("config deserialize");

    assert_eq!(cfg.name, "sample");
    assert_eq!(cfg.delimiter, "_");
    assert_eq!(cfg.histograms[1], HistogramDecl::disabled("NEvents"));
    assert_eq!(cfg.enabled_histograms().collect::<Vec<_>>(), vec!["nJets", "mlb_minimax"]);

    let channels: Vec<_> = cfg.channels.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(channels, vec![("mumu", "mumu"), ("ee", "e e")]);

    let rule = cfg.allow.get("mlb_minimax").expect("rule present");
    assert!(rule.channels.is_empty());
    assert_eq!(rule.btags, vec!["TwoBTag".to_owned()]);

    assert_eq!(cfg.flags.flags_for("mlb_minimax"), RenderFlags::LOG_Y);
    assert_eq!(cfg.loop_order.as_permutation().map(|o| o[1]), Some(AxisKind::Channel));
    assert_eq!(cfg.combined.as_ref().map(|r| r.alias.as_str()), Some("same"));
    assert_eq!(cfg.save_extensions, vec!["pdf".to_owned(), "png".to_owned()]);
    assert_eq!(cfg.label.position, ["0.77".to_owned(), ".65".to_owned()]);
}

#[test]
fn duplicate_axis_key_is_rejected() {
    let doc = r#"
name = "dup"
histograms = ["h"]

[[channels]]
key = "ee"

[[channels]]
key = "ee"

[[btags]]
key = "b"

[[njets]]
key = "n"
"#;

    let err = toml::from_str::<GeneratorConfig>(doc).expect_err("duplicate key must fail");
    assert!(err.to_string().contains("duplicate axis key 'ee'"));
}

#[test]
fn unknown_fields_are_rejected() {
    let doc = r#"
name = "typo"
histograms = ["h"]
channels = []
btags = []
njets = []
save_extension = ["pdf"]
"#;

    assert!(toml::from_str::<GeneratorConfig>(doc).is_err());
}
