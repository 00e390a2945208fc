//! # Allow-Rule Filter
//!
//! A histogram without a rule is admitted on every axis. With a rule, each
//! non-empty axis list must contain the tuple's value for that axis.

use crate::enumerate::Combination;
use histoconf_domain::{AllowRule, OrderedMap};

/// Decides whether `combination` is admitted by the rule table.
pub fn admits(rules: &OrderedMap<String, AllowRule>, combination: &Combination<'_>) -> bool {
    rules.get(combination.histogram).is_none_or(|rule| {
        rule_admits(rule, combination.channel.key, combination.btag.key, combination.njet.key)
    })
}

/// Checks one rule against raw axis keys.
pub fn rule_admits(rule: &AllowRule, channel: &str, btag: &str, njet: &str) -> bool {
    axis_admits(&rule.channels, channel)
        && axis_admits(&rule.btags, btag)
        && axis_admits(&rule.njets, njet)
}

fn axis_admits(allowed: &[String], value: &str) -> bool {
    allowed.is_empty() || allowed.iter().any(|key| key == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::Category;

    fn combination<'a>(
        histogram: &'a str,
        channel: &'a str,
        btag: &'a str,
        njet: &'a str,
    ) -> Combination<'a> {
        Combination {
            histogram,
            njet: Category { key: njet, label: njet },
            btag: Category { key: btag, label: btag },
            channel: Category { key: channel, label: channel },
        }
    }

    fn rules() -> OrderedMap<String, AllowRule> {
        let mut rules = OrderedMap::new();
        rules.insert(
            "mlb_minimax".to_owned(),
            AllowRule::two_axis(["GreaterOneBTag", "TwoBTag"], ["TwoJet", "GreaterOneJet"]),
        );
        rules.insert("ht".to_owned(), AllowRule::three_axis(["ee"], [], ["TwoJet"]));
        rules
    }

    #[test]
    fn test_unlisted_histogram_is_unrestricted() {
        assert!(admits(&rules(), &combination("nJets", "emu", "ZeroBTag", "InclusiveNJet")));
    }

    #[test]
    fn test_two_axis_rule_ignores_channel() {
        let rules = rules();
        assert!(admits(&rules, &combination("mlb_minimax", "combined", "TwoBTag", "TwoJet")));
        assert!(!admits(&rules, &combination("mlb_minimax", "ee", "OneBTag", "TwoJet")));
        assert!(!admits(&rules, &combination("mlb_minimax", "ee", "TwoBTag", "InclusiveNJet")));
    }

    #[test]
    fn test_three_axis_rule_checks_every_axis() {
        let rules = rules();
        assert!(admits(&rules, &combination("ht", "ee", "AnyBTag", "TwoJet")));
        assert!(!admits(&rules, &combination("ht", "mumu", "AnyBTag", "TwoJet")));
        assert!(!admits(&rules, &combination("ht", "ee", "AnyBTag", "GreaterOneJet")));
    }

    #[test]
    fn test_empty_rule_admits_everything() {
        assert!(rule_admits(&AllowRule::default(), "x", "y", "z"));
    }
}
