use scribe_core::models::*;
use scribe_core::ScribeError;

// --- OptionCatalogue ---

#[test]
fn catalogue_keeps_insertion_order() {
    let catalogue =
        OptionCatalogue::from_pairs([("9", "zeta"), ("1", "alpha"), ("5", "mu")]).unwrap();
    let ids: Vec<&str> = catalogue.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["9", "1", "5"]);
    assert_eq!(catalogue.get(1).unwrap().label, "alpha");
}

#[test]
fn catalogue_rejects_duplicate_ids() {
    let err = OptionCatalogue::from_pairs([("1", "alpha"), ("1", "beta")]).unwrap_err();
    assert!(matches!(err, ScribeError::InvalidInput { .. }));

    let err = OptionCatalogue::from_options(vec![
        WritingOption::new("a", "one"),
        WritingOption::new("a", "two"),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate option id"));
}

#[test]
fn catalogue_deserializes_in_document_order() {
    let json = r#"{"30": "third", "10": "first", "20": "second"}"#;
    let catalogue: OptionCatalogue = serde_json::from_str(json).unwrap();
    let ids: Vec<&str> = catalogue.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["30", "10", "20"]);

    let back = serde_json::to_string(&catalogue).unwrap();
    assert_eq!(back, r#"{"30":"third","10":"first","20":"second"}"#);
}

#[test]
fn catalogue_deserialization_rejects_duplicate_keys() {
    let json = r#"{"1": "alpha", "1": "beta"}"#;
    let result: Result<OptionCatalogue, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn catalogue_lookup_by_id() {
    let catalogue = OptionCatalogue::from_pairs([("a", "quick fix")]).unwrap();
    assert!(catalogue.contains_id("a"));
    assert!(!catalogue.contains_id("b"));
    assert_eq!(catalogue.get_by_id("a").unwrap().label, "quick fix");
}

// --- WildcardSet ---

#[test]
fn wildcard_set_extends_and_counts() {
    let mut set = WildcardSet::new();
    assert!(set.is_empty());
    set.extend_token("plan", vec!["% plan %".to_string()]);
    set.extend_token("plan", vec!["% Plan %".to_string()]);
    set.extend_token("term", vec!["% term %".to_string()]);

    assert_eq!(set.token_count(), 2);
    assert_eq!(set.pattern_count(), 3);
    assert_eq!(set.patterns("plan").unwrap(), ["% plan %", "% Plan %"]);
    assert!(set.contains_token("term"));
    assert!(!set.contains_token("long"));
}

#[test]
fn wildcard_set_serializes_as_plain_object() {
    let mut set = WildcardSet::new();
    set.extend_token("fix", vec!["% repair %".to_string()]);
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json, serde_json::json!({"fix": ["% repair %"]}));

    let back: WildcardSet = serde_json::from_value(json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn wildcard_set_reads_empty_array_as_empty_set() {
    let set: WildcardSet = serde_json::from_str("[]").unwrap();
    assert!(set.is_empty());

    assert!(serde_json::from_str::<WildcardSet>(r#"["% fix %"]"#).is_err());
    assert!(serde_json::from_str::<WildcardSet>(r#"{"fix": "% fix %"}"#).is_err());
}

#[test]
fn wildcard_set_covers_tokens_of_subset() {
    let small: WildcardSet = [("a".to_string(), vec![])].into_iter().collect();
    let large: WildcardSet = [("a".to_string(), vec![]), ("b".to_string(), vec![])]
        .into_iter()
        .collect();
    assert!(large.covers_tokens_of(&small));
    assert!(!small.covers_tokens_of(&large));
}

// --- UsedSet ---

#[test]
fn used_set_insert_is_idempotent() {
    let mut used = UsedSet::new();
    assert!(used.insert("quick fix"));
    assert!(!used.insert("quick fix"));
    assert_eq!(used.len(), 1);
    assert!(used.contains("quick fix"));
}

#[test]
fn used_set_accepts_array_and_object_shapes() {
    let from_list: UsedSet = serde_json::from_str(r#"["a", "b"]"#).unwrap();
    let from_map: UsedSet = serde_json::from_str(r#"{"a": "a", "b": "b"}"#).unwrap();
    assert_eq!(from_list, from_map);
    assert_eq!(serde_json::to_string(&from_list).unwrap(), r#"["a","b"]"#);
}

// --- Decision ---

#[test]
fn decision_serializes_boundary_fields() {
    let options = OptionCatalogue::from_pairs([("1", "quick fix")]).unwrap();
    let decision = Decision {
        keywords: "quick fix".into(),
        option: "1".into(),
        options,
        max: 1,
        summary: Default::default(),
        wildcards: WildcardSet::new(),
        used: ["quick fix"].into_iter().collect(),
        resolved_by: Resolution::Name,
    };
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["option"], "1");
    assert_eq!(json["options"]["1"], "quick fix");
    assert_eq!(json["max"], 1);
    assert_eq!(json["summary"], serde_json::json!({}));
    assert_eq!(json["used"], serde_json::json!(["quick fix"]));
    assert_eq!(json["resolved_by"], "name");
    assert_eq!(decision.selected_label(), Some("quick fix"));
}
