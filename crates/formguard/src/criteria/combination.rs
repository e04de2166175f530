//! Cross-field combination criteria

use crate::combinations::CombinationKind;
use crate::criteria::{entries, lookup, names};
use crate::error::{RuleError, RuleResult};
use crate::value::Argument;

const RESERVED: &[&str] = &["fields", "filters"];

/// Criteria judging several inputs together.
///
/// Reserved keys:
///
/// - `fields`: the input names, at least two, in the order the combination
///   constraint receives them. They refer to the raw input map, not to other
///   entries of the rule.
/// - `filters`: filter kinds applied to each value independently.
///
/// Exactly one other key must be present: the combination constraint kind,
/// with its argument.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationCriteria {
    fields: Vec<String>,
    filters: Vec<String>,
    kind: CombinationKind,
    arg: Argument,
}

impl CombinationCriteria {
    /// Builds criteria from already separated parts.
    pub fn new(
        name: &str,
        kind: CombinationKind,
        fields: Vec<String>,
        filters: Vec<String>,
        arg: Argument,
    ) -> RuleResult<Self> {
        if fields.len() < 2 {
            return Err(RuleError::TooFewFields {
                name: name.into(),
                count: fields.len(),
            });
        }
        Ok(Self {
            fields,
            filters,
            kind,
            arg,
        })
    }

    /// Parses a criteria map for the combination `name`.
    pub fn parse(name: &str, criteria: &Argument) -> RuleResult<Self> {
        let entries = entries(name, criteria)?;
        let get = |key: &str| lookup(entries, key);

        let fields = match get("fields") {
            Argument::Null => Vec::new(),
            arg => arg.as_strings().ok_or_else(|| {
                RuleError::invalid_argument("fields", "a list of input names", arg.to_string())
            })?,
        };

        let mut declared = entries
            .into_iter()
            .flatten()
            .filter(|(key, _)| !RESERVED.contains(&key.as_str()));

        let (kind, arg) = match (declared.next(), declared.next()) {
            (Some((kind, arg)), None) => (CombinationKind::from_name(kind), arg.clone()),
            (None, _) => {
                return Err(RuleError::MissingCombinationConstraint { name: name.into() });
            }
            (Some(first), Some(second)) => {
                let kinds = [first, second]
                    .into_iter()
                    .chain(declared)
                    .map(|(kind, _)| kind.clone())
                    .collect();
                return Err(RuleError::MultipleCombinationConstraints {
                    name: name.into(),
                    kinds,
                });
            }
        };

        Self::new(name, kind, fields, names("filters", get("filters"))?, arg)
    }

    /// Input names, in constraint order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Entry-specific filter kinds.
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    /// The combination constraint kind.
    pub fn kind(&self) -> &CombinationKind {
        &self.kind
    }

    /// The combination constraint argument.
    pub fn arg(&self) -> &Argument {
        &self.arg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(criteria: serde_json::Value) -> RuleResult<CombinationCriteria> {
        CombinationCriteria::parse("combo", &Argument::from(criteria))
    }

    #[test]
    fn test_parse_same() {
        let criteria = parse(json!({
            "fields": ["password", "confirm"],
            "filters": "strip",
            "same": true,
        }))
        .unwrap();
        assert_eq!(criteria.fields(), ["password", "confirm"]);
        assert_eq!(criteria.filters(), ["strip"]);
        assert_eq!(criteria.kind(), &CombinationKind::Same);
        assert_eq!(criteria.arg(), &Argument::Bool(true));
    }

    #[test]
    fn test_custom_kind() {
        let criteria = parse(json!({"fields": ["a", "b"], "distinct": null})).unwrap();
        assert_eq!(criteria.kind(), &CombinationKind::Custom("distinct".into()));
    }

    #[test]
    fn test_too_few_fields() {
        assert!(matches!(
            parse(json!({"fields": ["password"], "same": true})),
            Err(RuleError::TooFewFields { count: 1, .. })
        ));
        assert!(matches!(
            parse(json!({"same": true})),
            Err(RuleError::TooFewFields { count: 0, .. })
        ));
    }

    #[test]
    fn test_exactly_one_constraint() {
        assert!(matches!(
            parse(json!({"fields": ["a", "b"]})),
            Err(RuleError::MissingCombinationConstraint { .. })
        ));
        match parse(json!({"fields": ["a", "b", "c"], "date": true, "any": true, "same": true})) {
            Err(RuleError::MultipleCombinationConstraints { kinds, .. }) => {
                assert_eq!(kinds, ["date", "any", "same"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
