// Validation throughput benchmarks.
//
// Measures a full validate call over a small signup form, and the cost of
// resolving a rule that references many kinds.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use formguard::prelude::*;
use serde_json::json;

fn signup_rule() -> Rule {
    Rule::from_value(&json!({
        "filters": ["strip"],
        "fields": {
            "name": {"present": true, "alpha_space": true, "characters": [1, 64]},
            "email": {"present": true, "uri": ["mailto"]},
            "age": {"uint": true, "length": [1, 3], "default": "18"},
            "website": {"uri": ["http", "https"]},
            "handle": {"regexp": "^[a-z][a-z0-9_]{2,15}$"},
        },
        "checkboxes": {
            "topics": {"count": [1, 3], "alpha": true, "filters": ["downcase"]},
        },
        "combinations": {
            "password_check": {"fields": ["password", "confirm"], "same": true},
            "birthday": {"fields": ["year", "month", "day"], "date": {"from": "1900-01-01"}},
        },
    }))
    .expect("benchmark rule is well formed")
}

fn signup_input() -> Params {
    params([
        ("name", ParamValue::from("  Ann Example ")),
        ("email", ParamValue::from("mailto:ann@example.com")),
        ("website", ParamValue::from("https://example.com")),
        ("handle", ParamValue::from("ann_example")),
        ("topics", ParamValue::from(["Rust", "Forms"])),
        ("password", ParamValue::from("hunter2")),
        ("confirm", ParamValue::from("hunter2")),
        ("year", ParamValue::from("1990")),
        ("month", ParamValue::from("7")),
        ("day", ParamValue::from("14")),
    ])
}

fn bench_validate(c: &mut Criterion) {
    let validator = Validator::default();
    let rule = signup_rule();
    let input = signup_input();

    c.bench_function("validate_signup_passing", |b| {
        b.iter(|| validator.validate(black_box(&input), black_box(&rule)))
    });

    let empty = Params::new();
    c.bench_function("validate_signup_empty", |b| {
        b.iter(|| validator.validate(black_box(&empty), black_box(&rule)))
    });
}

fn bench_rule_loading(c: &mut Criterion) {
    c.bench_function("rule_from_value", |b| b.iter(|| black_box(signup_rule())));
}

criterion_group!(benches, bench_validate, bench_rule_loading);
criterion_main!(benches);
