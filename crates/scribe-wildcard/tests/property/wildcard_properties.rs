use proptest::prelude::*;
use scribe_core::config::PatternMode;
use scribe_core::models::{UsedSet, WildcardSet};
use scribe_wildcard::WildcardExpander;
use test_fixtures::InMemoryDictionary;

fn dictionary() -> InMemoryDictionary {
    InMemoryDictionary::new()
        .with_entry("alpha", &["first"])
        .with_entry("beta", &["second", "Other"])
        .with_entry("gamma", &["third"])
}

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("alpha".to_string()),
        Just("beta".to_string()),
        Just("gamma".to_string()),
        "[a-z]{1,6}",
    ]
}

proptest! {
    #[test]
    fn output_covers_input_keys(
        words in prop::collection::vec(word(), 0..8),
        known in prop::collection::vec(word(), 0..3),
    ) {
        let dict = dictionary();
        let expander = WildcardExpander::new(&dict, PatternMode::Collapsed);
        let mut incoming = WildcardSet::new();
        for k in &known {
            incoming.extend_token(k, vec![format!("% {k} %")]);
        }

        let out = expander.expand(&words.join(" "), &incoming, &UsedSet::new()).unwrap();

        prop_assert!(out.covers_tokens_of(&incoming));
        for (token, patterns) in &incoming {
            prop_assert_eq!(out.patterns(token).unwrap(), patterns.as_slice());
        }
    }

    #[test]
    fn ineligible_tokens_are_never_looked_up(
        words in prop::collection::vec(word(), 0..8),
        used_words in prop::collection::vec(word(), 0..3),
    ) {
        let dict = dictionary();
        let expander = WildcardExpander::new(&dict, PatternMode::Collapsed);
        let used: UsedSet = used_words.iter().cloned().collect();

        expander.expand(&words.join(", "), &WildcardSet::new(), &used).unwrap();

        let calls = dict.calls();
        for call in &calls {
            prop_assert!(call.len() > 2);
            prop_assert!(!used.contains(call));
        }
        // Once a dictionary token is matched it is a key and is not asked again.
        for known in ["alpha", "beta", "gamma"] {
            prop_assert!(calls.iter().filter(|c| c.as_str() == known).count() <= 1);
        }
    }

    #[test]
    fn every_pattern_is_wrapped(words in prop::collection::vec(word(), 0..8)) {
        let dict = dictionary();
        let expander = WildcardExpander::new(&dict, PatternMode::Collapsed);
        let out = expander.expand(&words.join(" "), &WildcardSet::new(), &UsedSet::new()).unwrap();
        for (_, patterns) in &out {
            prop_assert_eq!(patterns.len() % 5, 0);
            for p in patterns {
                prop_assert!(p.starts_with("% ") && p.ends_with(" %"));
            }
        }
    }
}
