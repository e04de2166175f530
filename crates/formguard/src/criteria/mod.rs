//! Typed criteria
//!
//! A criteria map is the loosely shaped declaration an author writes for one
//! entry:
//!
//! ```json
//! { "present": true, "filters": ["strip"], "length": [3, 20], "alnum": true }
//! ```
//!
//! Reserved keys (`default`, `filters`, `present`, `count`, `fields`) are
//! extracted by the entry's parser; every remaining key names a constraint
//! and its value is that constraint's argument. Parsing never mutates the
//! caller's map and either yields an immutable typed criteria or a
//! [`RuleError`].

use indexmap::IndexMap;
use regex::Regex;

use crate::error::{RuleError, RuleResult};
use crate::value::Argument;

pub mod checkbox;
pub mod combination;
pub mod field;

pub use checkbox::CheckboxCriteria;
pub use combination::CombinationCriteria;
pub use field::FieldCriteria;

/// Constraint kind → argument, in declaration order.
pub type ConstraintMap = IndexMap<String, Argument>;

// ============================================================================
// SHARED PARSING HELPERS
// ============================================================================

/// Borrows the entries of a criteria map. `null` is an empty map.
pub(crate) fn entries<'a>(
    name: &str,
    criteria: &'a Argument,
) -> RuleResult<Option<&'a IndexMap<String, Argument>>> {
    match criteria {
        Argument::Null => Ok(None),
        Argument::Map(entries) => Ok(Some(entries)),
        other => Err(RuleError::invalid_criteria(
            name,
            format!("expected a mapping, got {other}"),
        )),
    }
}

static NULL: Argument = Argument::Null;

/// Looks up a reserved key. Missing keys read as `null`.
pub(crate) fn lookup<'a>(
    entries: Option<&'a IndexMap<String, Argument>>,
    key: &str,
) -> &'a Argument {
    entries.and_then(|entries| entries.get(key)).unwrap_or(&NULL)
}

/// Reads a list of kind names: a single name or a list of names.
pub(crate) fn names(key: &str, arg: &Argument) -> RuleResult<Vec<String>> {
    if arg.is_null() {
        return Ok(Vec::new());
    }
    arg.as_strings().ok_or_else(|| {
        RuleError::invalid_argument(key, "a name or a list of names", arg.to_string())
    })
}

/// Reads a scalar as a string. Numbers and booleans are rendered.
pub(crate) fn scalar(key: &str, arg: &Argument) -> RuleResult<Option<String>> {
    match arg {
        Argument::Null => Ok(None),
        Argument::Text(text) => Ok(Some(text.clone())),
        Argument::Int(_) | Argument::Float(_) | Argument::Bool(_) => Ok(Some(arg.to_string())),
        other => Err(RuleError::invalid_argument(key, "a string", other.to_string())),
    }
}

/// Collects the non-reserved keys as constraints.
///
/// `regexp` arguments given as pattern source are compiled here, so a bad
/// pattern surfaces while the rule is built.
pub(crate) fn constraints(
    entries: Option<&IndexMap<String, Argument>>,
    reserved: &[&str],
) -> RuleResult<ConstraintMap> {
    let mut constraints = ConstraintMap::new();
    for (kind, arg) in entries.into_iter().flatten() {
        if reserved.contains(&kind.as_str()) {
            continue;
        }
        let arg = match (kind.as_str(), arg) {
            ("regexp", Argument::Text(source)) => Argument::Pattern(Regex::new(source)?),
            _ => arg.clone(),
        };
        constraints.insert(kind.clone(), arg);
    }
    Ok(constraints)
}
