//! Validates a signup form and prints the outcome.
//!
//! ```sh
//! RUST_LOG=formguard=trace cargo run -p formguard --example signup_form
//! ```

use formguard::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let registry = Registry::builder()
        .register_filter("squish", |v: &str| {
            v.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .build();

    let rule = Rule::builder()
        .filters(["strip"])
        .field("name", json!({"filters": "squish", "present": true, "alpha_space": true}))?
        .field("email", json!({"present": true, "uri": ["mailto"]}))?
        .field("age", json!({"uint": true, "default": "18"}))?
        .checkbox("topics", json!({"count": [1, 3], "filters": "downcase", "alpha": true}))?
        .combine(CombinationKind::Same, "password_check", ["password", "confirm"], json!(null))?
        .build();

    let catalog = MessageCatalog::from_value(json!({
        "signup": {
            "email": {"present": "Please enter your email.", "DEFAULT": "That email does not look right."},
            "topics": {"count": "Pick between one and three topics."},
            "password_check": {"password_check": "Passwords do not match."},
        },
    }))?;

    let validator = Validator::new(registry).with_catalog(catalog);

    let input = params([
        ("name", ParamValue::from("  Ann    Example ")),
        ("email", ParamValue::from("ann@example.com")),
        ("topics", ParamValue::from(["Rust", "Forms", "Web", "Async"])),
        ("password", ParamValue::from("hunter2")),
        ("confirm", ParamValue::from("hunter3")),
    ]);

    let report = validator.validate(&input, &rule)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    for (name, messages) in validator.messages(&report, "signup") {
        for message in messages {
            println!("{name}: {message}");
        }
    }
    Ok(())
}
