//! Multi-value checkbox group criteria

use std::ops::RangeInclusive;

use crate::criteria::{ConstraintMap, constraints, entries, lookup, names};
use crate::error::{RuleError, RuleResult};
use crate::value::Argument;

const RESERVED: &[&str] = &["default", "filters", "count"];

/// Criteria for a multi-valued input such as a checkbox group.
///
/// Reserved keys:
///
/// - `default`: list used when nothing survives filtering (a single string is
///   a one-element list).
/// - `filters`: filter kinds applied to every value.
/// - `count`: inclusive range for the number of non-empty values; a bare
///   integer `n` means exactly `n`.
///
/// Every other key is a constraint each value must satisfy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckboxCriteria {
    default: Vec<String>,
    filters: Vec<String>,
    count: Option<RangeInclusive<i64>>,
    constraints: ConstraintMap,
}

impl CheckboxCriteria {
    /// Parses a criteria map for the checkbox group `name`.
    pub fn parse(name: &str, criteria: &Argument) -> RuleResult<Self> {
        let entries = entries(name, criteria)?;
        let get = |key: &str| lookup(entries, key);

        let default = match get("default") {
            Argument::Null => Vec::new(),
            arg => arg.as_strings().ok_or_else(|| {
                RuleError::invalid_argument("default", "a list of strings", arg.to_string())
            })?,
        };

        let count = match get("count") {
            Argument::Null => None,
            arg => Some(arg.as_range().ok_or_else(|| {
                RuleError::invalid_argument(
                    "count",
                    "an integer or an inclusive range",
                    arg.to_string(),
                )
            })?),
        };

        Ok(Self {
            default,
            filters: names("filters", get("filters"))?,
            count,
            constraints: constraints(entries, RESERVED)?,
        })
    }

    /// Values substituted when the group is missing.
    pub fn default_values(&self) -> &[String] {
        &self.default
    }

    /// Entry-specific filter kinds.
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    /// Accepted number of values, if constrained.
    pub fn count(&self) -> Option<&RangeInclusive<i64>> {
        self.count.as_ref()
    }

    /// Constraint kinds and their arguments.
    pub fn constraints(&self) -> &ConstraintMap {
        &self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(criteria: serde_json::Value) -> RuleResult<CheckboxCriteria> {
        CheckboxCriteria::parse("group", &Argument::from(criteria))
    }

    #[test]
    fn test_count_shapes() {
        assert_eq!(parse(json!({"count": 2})).unwrap().count(), Some(&(2..=2)));
        assert_eq!(
            parse(json!({"count": [1, 3]})).unwrap().count(),
            Some(&(1..=3))
        );
        assert_eq!(parse(json!({})).unwrap().count(), None);
    }

    #[test]
    fn test_bad_count_is_error() {
        assert!(matches!(
            parse(json!({"count": "two"})),
            Err(RuleError::InvalidArgument { constraint, .. }) if constraint == "count"
        ));
    }

    #[test]
    fn test_default_list() {
        let criteria = parse(json!({"default": ["a", "b"], "alpha": true})).unwrap();
        assert_eq!(criteria.default_values(), ["a", "b"]);
        assert!(criteria.constraints().contains_key("alpha"));
        assert!(!criteria.constraints().contains_key("default"));

        let criteria = parse(json!({"default": "a"})).unwrap();
        assert_eq!(criteria.default_values(), ["a"]);

        assert!(parse(json!({"default": [1, 2]})).is_err());
    }
}
