use histoconf_generator::{Directive, Generator};

const TMW_CONTROL: &str = include_str!("fixtures/tmw_histos_control.yml");

#[test]
fn test_tmw_matches_historical_output() {
    let plan = Generator::from_preset("tmw").unwrap().plan().unwrap();
    assert_eq!(plan.len(), 170);
    assert_eq!(plan.render(), TMW_CONTROL);
}

#[test]
fn test_tmw_restricts_mlb_minimax() {
    let generator = Generator::from_preset("tmw").unwrap();
    let keys: Vec<String> = generator.keys().filter(|k| k.ends_with("_mlb_minimax")).collect();

    assert_eq!(keys.len(), 5 * 2 * 2);
    assert_eq!(keys.first().map(String::as_str), Some("ee_GreaterOneBTag_TwoJet_mlb_minimax"));
    assert!(keys.iter().all(|k| !k.contains("ZeroBTag") && !k.contains("InclusiveNJet")));
}

#[test]
fn test_tmw_channels_exercises_every_directive() {
    let plan = Generator::from_preset("tmw-channels").unwrap().plan().unwrap();
    assert_eq!(plan.len(), 46);

    // Channel-first nesting.
    let first: Vec<&str> = plan.keys().take(3).collect();
    assert_eq!(
        first,
        [
            "ee_OneBTag_TwoJet_dileptonMass",
            "ee_TwoBTag_TwoJet_dileptonMass",
            "ee_TwoBTag_TwoJet_mlb_minimax",
        ]
    );
    assert!(plan.keys().all(|k| !k.starts_with("emu_") || !k.ends_with("_dileptonMass")));

    let ht = plan.get("combined_OneBTag_GreaterOneJet_ht").unwrap();
    assert_eq!(ht[0], Directive::YAxisFormat("%1% / bin".to_owned()));
    assert!(matches!(ht[1], Directive::Rename { .. }));

    let Directive::Labels(labels) = &ht[2] else { panic!("expected labels, got {:?}", ht[2]) };
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].text, "ll channel");
    assert_eq!(labels[1].text, "#splitline{N_{b jet} = 1}{N_{jet} #geq 2}");
}
