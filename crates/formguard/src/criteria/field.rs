//! Single-value field criteria

use crate::criteria::{ConstraintMap, constraints, entries, lookup, names, scalar};
use crate::error::{RuleError, RuleResult};
use crate::value::Argument;

const RESERVED: &[&str] = &["default", "present", "filters"];

/// Criteria for a single-valued input.
///
/// Reserved keys:
///
/// - `default`: value used when the input is missing or filters to empty.
///   Defaults are trusted and never run through the constraints. An empty
///   string means "no default".
/// - `present`: when `true`, a missing input fails with reason `present`.
///   Mutually exclusive with `default`.
/// - `filters`: filter kinds applied before the rule-wide filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCriteria {
    default: Option<String>,
    require_presence: bool,
    filters: Vec<String>,
    constraints: ConstraintMap,
}

impl FieldCriteria {
    /// Parses a criteria map for the field `name`.
    pub fn parse(name: &str, criteria: &Argument) -> RuleResult<Self> {
        let entries = entries(name, criteria)?;
        let get = |key: &str| lookup(entries, key);

        let default = scalar("default", get("default"))?.filter(|value| !value.is_empty());

        let require_presence = match get("present") {
            Argument::Null => false,
            Argument::Bool(flag) => *flag,
            other => {
                return Err(RuleError::invalid_argument(
                    "present",
                    "a boolean",
                    other.to_string(),
                ));
            }
        };

        if default.is_some() && require_presence {
            return Err(RuleError::DefaultWithPresence { name: name.into() });
        }

        Ok(Self {
            default,
            require_presence,
            filters: names("filters", get("filters"))?,
            constraints: constraints(entries, RESERVED)?,
        })
    }

    /// The trusted fallback value.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Whether a missing input is a failure.
    pub fn require_presence(&self) -> bool {
        self.require_presence
    }

    /// Entry-specific filter kinds.
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    /// Constraint kinds and their arguments.
    pub fn constraints(&self) -> &ConstraintMap {
        &self.constraints
    }
}
