use proptest::prelude::*;
use scribe_core::config::ScribeConfig;
use scribe_core::models::{OptionCatalogue, UsedSet, WildcardSet};
use scribe_selection::SelectionEngine;
use test_fixtures::{FakeCorpus, InMemoryDictionary};

const WORDS: &[&str] = &["plan", "fix", "break", "ahead", "term", "go", "quick"];

fn dictionary() -> InMemoryDictionary {
    InMemoryDictionary::new()
        .with_entry("plan", &["roadmap"])
        .with_entry("break", &["pause"])
        .with_entry("term", &["period"])
}

fn corpus() -> FakeCorpus {
    FakeCorpus::new(["a roadmap", "a pause for the period", "quick"])
}

fn label() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..4).prop_map(|w| w.join(" "))
}

fn catalogue() -> impl Strategy<Value = OptionCatalogue> {
    prop::collection::vec(label(), 1..5).prop_map(|labels| {
        OptionCatalogue::from_pairs(
            labels
                .into_iter()
                .enumerate()
                .map(|(i, l)| (i.to_string(), l)),
        )
        .unwrap()
    })
}

proptest! {
    #[test]
    fn selection_is_total_over_valid_input(
        keywords in "[a-z ,.]{0,40}",
        options in catalogue(),
        used_labels in prop::collection::vec(label(), 0..3),
    ) {
        let dict = dictionary();
        let corpus = corpus();
        let config = ScribeConfig::default();
        let engine = SelectionEngine::new(&dict, &corpus, &config);
        let used: UsedSet = used_labels.iter().cloned().collect();

        let decision = engine.select(&keywords, &options, &WildcardSet::new(), &used).unwrap();

        prop_assert!(options.contains_id(&decision.option));
        let label = decision.selected_label().unwrap().to_string();
        let mut expected_used = used.clone();
        expected_used.insert(label);
        prop_assert_eq!(&decision.used, &expected_used);
        prop_assert_eq!(&decision.options, &options);
    }

    #[test]
    fn outgoing_wildcards_cover_incoming(
        keywords in "[a-z ]{0,20}",
        options in catalogue(),
        known in prop::collection::vec(prop::sample::select(WORDS), 0..3),
    ) {
        let dict = dictionary();
        let corpus = corpus();
        let config = ScribeConfig::default();
        let engine = SelectionEngine::new(&dict, &corpus, &config);
        let mut wildcards = WildcardSet::new();
        for token in &known {
            wildcards.extend_token(token, vec![format!("% {token} %")]);
        }

        let decision = engine.select(&keywords, &options, &wildcards, &UsedSet::new()).unwrap();
        prop_assert!(decision.wildcards.covers_tokens_of(&wildcards));
    }
}
