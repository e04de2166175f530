//! Property-based tests for formguard.

use formguard::prelude::*;
use proptest::prelude::*;
use serde_json::json;

fn run(rule: &Rule, input: &Params) -> Report {
    Validator::default().validate(input, rule).unwrap()
}

// ============================================================================
// DETERMINISM: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validate_is_deterministic(email in ".{0,30}", tags in prop::collection::vec("[a-z ]{0,6}", 0..5)) {
        let rule = Rule::builder()
            .filters(["strip"])
            .field("email", json!({"present": true, "uri": ["http", "https"]})).unwrap()
            .checkbox("tags", json!({"count": [1, 3], "alpha": true})).unwrap()
            .build();
        let input = params([("email", ParamValue::from(email)), ("tags", ParamValue::from(tags))]);
        prop_assert_eq!(run(&rule, &input), run(&rule, &input));
    }
}

// ============================================================================
// FILTERS: strip leaves exactly the trimmed value
// ============================================================================

proptest! {
    #[test]
    fn strip_yields_trimmed_value(raw in "[ \t]{0,3}[a-z]{1,10}[ \t]{0,3}") {
        let rule = Rule::builder()
            .field("v", json!({"filters": "strip"})).unwrap()
            .build();
        let report = run(&rule, &params([("v", raw.as_str())]));
        prop_assert_eq!(&report["v"], &ParamValue::from(raw.trim()));
    }
}

// ============================================================================
// DEFAULTS: a default is trusted regardless of constraints
// ============================================================================

proptest! {
    #[test]
    fn default_never_fails(default in "[a-z0-9 ]{1,20}") {
        let rule = Rule::builder()
            .field("v", json!({"default": default.clone(), "uint": true, "length": 50})).unwrap()
            .build();
        let report = run(&rule, &Params::new());
        prop_assert!(!report.failed());
        prop_assert_eq!(&report["v"], &ParamValue::from(default));
    }
}

// ============================================================================
// LENGTH: exact counts always match the measured length
// ============================================================================

proptest! {
    #[test]
    fn exact_counts_match(value in "[^\\s]{1,20}") {
        let chars = i64::try_from(value.chars().count()).unwrap();
        let bytes = i64::try_from(value.len()).unwrap();
        let rule = Rule::builder()
            .field("c", json!({"characters": chars, "length": [bytes, bytes]})).unwrap()
            .build();
        prop_assert!(!run(&rule, &params([("c", value.as_str())])).failed());
    }
}

// ============================================================================
// SAME: reflexive for every value
// ============================================================================

proptest! {
    #[test]
    fn same_is_reflexive(value in ".{0,20}") {
        let rule = Rule::builder()
            .combine(CombinationKind::Same, "pair", ["a", "b"], json!(null)).unwrap()
            .build();
        let input = params([("a", value.as_str()), ("b", value.as_str())]);
        prop_assert!(!run(&rule, &input).failed());
    }
}
