use scribe_core::config::{PatternMode, WildcardConfig};
use scribe_core::models::{UsedSet, WildcardSet};
use scribe_core::ScribeError;
use scribe_wildcard::WildcardExpander;
use test_fixtures::{FailingLookup, InMemoryDictionary};

fn dictionary() -> InMemoryDictionary {
    InMemoryDictionary::new()
        .with_entry("long", &["lasting", "Extended"])
        .with_entry("term", &["period"])
        .with_entry("plan", &["roadmap"])
}

#[test]
fn expands_each_matched_token_under_its_own_key() {
    let dict = dictionary();
    let expander = WildcardExpander::new(&dict, PatternMode::Collapsed);

    let out = expander
        .expand("long term plan", &WildcardSet::new(), &UsedSet::new())
        .unwrap();

    assert_eq!(out.token_count(), 3);
    assert_eq!(
        out.patterns("long").unwrap(),
        [
            "% lasting %",
            "% lasting. %",
            "% lasting, %",
            "% lasting %",
            "% Lasting %",
            "% Extended %",
            "% Extended. %",
            "% Extended, %",
            "% extended %",
            "% Extended %",
        ]
    );
    assert_eq!(out.patterns("plan").unwrap()[0], "% roadmap %");
}

#[test]
fn short_tokens_never_reach_the_dictionary() {
    let dict = dictionary();
    let expander = WildcardExpander::new(&dict, PatternMode::Collapsed);

    expander
        .expand("a to do plan", &WildcardSet::new(), &UsedSet::new())
        .unwrap();

    assert_eq!(dict.calls(), vec!["plan".to_string()]);
}

#[test]
fn two_letter_accented_tokens_are_looked_up() {
    let dict = InMemoryDictionary::new()
        .with_entry("éé", &["x"])
        .with_entry("ži", &["live"]);
    let expander = WildcardExpander::new(&dict, PatternMode::Collapsed);

    let out = expander
        .expand("éé ži é", &WildcardSet::new(), &UsedSet::new())
        .unwrap();

    assert_eq!(dict.calls(), vec!["éé".to_string(), "ži".to_string()]);
    assert_eq!(out.token_count(), 2);
    assert_eq!(out.patterns("éé").unwrap()[0], "% x %");
}

#[test]
fn used_tokens_never_reach_the_dictionary() {
    let dict = dictionary();
    let expander = WildcardExpander::new(&dict, PatternMode::Collapsed);
    let used: UsedSet = ["term"].into_iter().collect();

    let out = expander
        .expand("long term plan", &WildcardSet::new(), &used)
        .unwrap();

    assert_eq!(dict.calls(), vec!["long".to_string(), "plan".to_string()]);
    assert!(!out.contains_token("term"));
}

#[test]
fn known_tokens_are_not_looked_up_again() {
    let dict = dictionary();
    let expander = WildcardExpander::new(&dict, PatternMode::Collapsed);
    let mut incoming = WildcardSet::new();
    incoming.extend_token("long", vec!["% kept %".to_string()]);

    let out = expander
        .expand("long long-term, plan. plan", &incoming, &UsedSet::new())
        .unwrap();

    // "long" is known; the repeated "plan" is known after its first lookup.
    assert_eq!(
        dict.calls(),
        vec!["long-term".to_string(), "plan".to_string()]
    );
    assert_eq!(out.patterns("long").unwrap(), ["% kept %"]);
    assert!(out.covers_tokens_of(&incoming));
}

#[test]
fn unknown_tokens_leave_the_set_unchanged() {
    let dict = dictionary();
    let expander = WildcardExpander::new(&dict, PatternMode::Collapsed);
    let mut incoming = WildcardSet::new();
    incoming.extend_token("plan", vec!["% roadmap %".to_string()]);

    let out = expander
        .expand("alpha beta", &incoming, &UsedSet::new())
        .unwrap();

    assert_eq!(out, incoming);
    assert_eq!(dict.call_count(), 2);
}

#[test]
fn excluded_synonyms_are_filtered_by_the_dictionary() {
    let dict = InMemoryDictionary::new().with_entry("fix", &["quick fix"]);
    let expander = WildcardExpander::new(&dict, PatternMode::Collapsed);
    let used: UsedSet = ["quick fix"].into_iter().collect();

    let out = expander.expand("fix", &WildcardSet::new(), &used).unwrap();

    assert!(out.is_empty());
    assert_eq!(dict.call_count(), 1);
}

#[test]
fn legacy_mode_emits_twenty_patterns_per_synonym() {
    let dict = dictionary();
    let config = WildcardConfig {
        pattern_mode: PatternMode::Legacy,
    };
    let expander = WildcardExpander::from_config(&dict, &config);
    assert_eq!(expander.mode(), PatternMode::Legacy);

    let out = expander
        .expand("term", &WildcardSet::new(), &UsedSet::new())
        .unwrap();

    let patterns = out.patterns("term").unwrap();
    assert_eq!(patterns.len(), 20);
    assert_eq!(patterns[17], "% period, ");
}

#[test]
fn lookup_failure_is_a_dependency_failure() {
    let expander = WildcardExpander::new(&FailingLookup, PatternMode::Collapsed);

    let err = expander
        .expand("plan", &WildcardSet::new(), &UsedSet::new())
        .unwrap_err();

    assert!(matches!(err, ScribeError::DependencyFailure { .. }));
}

#[test]
fn short_only_label_needs_no_dictionary() {
    let expander = WildcardExpander::new(&FailingLookup, PatternMode::Collapsed);

    let out = expander
        .expand("to be, or", &WildcardSet::new(), &UsedSet::new())
        .unwrap();

    assert!(out.is_empty());
}
