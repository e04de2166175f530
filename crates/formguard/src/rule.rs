//! Rule authoring
//!
//! A [`Rule`] is the full declaration for one form: rule-wide default
//! filters plus named field, checkbox and combination criteria. Rules are
//! built once, through [`RuleBuilder`] or [`Rule::from_value`], and are
//! immutable afterwards.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//! use serde_json::json;
//!
//! let rule = Rule::builder()
//!     .filters(["strip"])
//!     .field("email", json!({"present": true, "uri": ["http", "https"]}))?
//!     .checkbox("topics", json!({"count": [1, 3], "alpha": true}))?
//!     .combine(CombinationKind::Same, "password_confirmation", ["password", "confirm"], json!(null))?
//!     .build();
//! ```

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::combinations::CombinationKind;
use crate::criteria::{CheckboxCriteria, CombinationCriteria, FieldCriteria, names};
use crate::error::{RuleError, RuleResult};
use crate::value::Argument;

// ============================================================================
// RULE
// ============================================================================

/// A complete, immutable validation rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rule {
    default_filters: Vec<String>,
    fields: IndexMap<String, FieldCriteria>,
    checkboxes: IndexMap<String, CheckboxCriteria>,
    combinations: IndexMap<String, CombinationCriteria>,
}

impl Rule {
    /// Starts an empty rule.
    #[must_use]
    pub fn builder() -> RuleBuilder {
        RuleBuilder::default()
    }

    /// Builds a rule from a nested configuration structure:
    ///
    /// ```json
    /// {
    ///   "filters": ["strip"],
    ///   "fields": { "email": { "present": true, "uri": ["http", "https"] } },
    ///   "checkboxes": { "topics": { "count": [1, 3] } },
    ///   "combinations": { "pw": { "fields": ["password", "confirm"], "same": true } }
    /// }
    /// ```
    ///
    /// Every section is optional. Declaration order is preserved.
    pub fn from_value(value: &serde_json::Value) -> RuleResult<Self> {
        let config = Argument::from(value);
        let sections = config
            .as_map()
            .ok_or_else(|| RuleError::invalid_config("a rule must be a mapping"))?;

        let mut builder = Self::builder();
        for (section, body) in sections {
            if section == "filters" {
                builder = builder.filters(names("filters", body)?);
                continue;
            }

            let entries = match body {
                Argument::Null => continue,
                Argument::Map(entries) => entries,
                other => {
                    return Err(RuleError::invalid_config(format!(
                        "section `{section}` must be a mapping, got {other}"
                    )));
                }
            };

            for (name, criteria) in entries {
                builder = match section.as_str() {
                    "fields" => builder.field(name.as_str(), criteria.clone())?,
                    "checkboxes" => builder.checkbox(name.as_str(), criteria.clone())?,
                    "combinations" => builder.combination(name.as_str(), criteria.clone())?,
                    unknown => {
                        return Err(RuleError::invalid_config(format!(
                            "unknown section `{unknown}`"
                        )));
                    }
                };
            }
        }

        let rule = builder.build();
        tracing::debug!(
            fields = rule.fields.len(),
            checkboxes = rule.checkboxes.len(),
            combinations = rule.combinations.len(),
            "rule loaded from configuration"
        );
        Ok(rule)
    }

    /// Rule-wide filters, applied after each entry's own filters.
    pub fn default_filters(&self) -> &[String] {
        &self.default_filters
    }

    /// Field criteria, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, FieldCriteria> {
        &self.fields
    }

    /// Checkbox group criteria, in declaration order.
    pub fn checkboxes(&self) -> &IndexMap<String, CheckboxCriteria> {
        &self.checkboxes
    }

    /// Combination criteria, in declaration order.
    pub fn combinations(&self) -> &IndexMap<String, CombinationCriteria> {
        &self.combinations
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent rule construction.
///
/// Each declaration parses its criteria map immediately, so malformed
/// criteria fail at the call that introduced them. Kind names are checked
/// against a registry when the rule is first validated.
#[derive(Debug, Default)]
pub struct RuleBuilder {
    rule: Rule,
}

impl RuleBuilder {
    /// Sets the rule-wide default filters.
    #[must_use = "builder methods must be chained or built"]
    pub fn filters<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rule.default_filters = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Declares a single-valued field.
    pub fn field(mut self, name: impl Into<String>, criteria: impl Into<Argument>) -> RuleResult<Self> {
        let name = name.into();
        let criteria = FieldCriteria::parse(&name, &criteria.into())?;
        insert_unique(&mut self.rule.fields, name, criteria)?;
        Ok(self)
    }

    /// Declares a multi-valued checkbox group.
    pub fn checkbox(
        mut self,
        name: impl Into<String>,
        criteria: impl Into<Argument>,
    ) -> RuleResult<Self> {
        let name = name.into();
        let criteria = CheckboxCriteria::parse(&name, &criteria.into())?;
        insert_unique(&mut self.rule.checkboxes, name, criteria)?;
        Ok(self)
    }

    /// Declares a combination from a full criteria map (`fields`, optional
    /// `filters`, and exactly one combination constraint key).
    pub fn combination(
        mut self,
        name: impl Into<String>,
        criteria: impl Into<Argument>,
    ) -> RuleResult<Self> {
        let name = name.into();
        let criteria = CombinationCriteria::parse(&name, &criteria.into())?;
        insert_unique(&mut self.rule.combinations, name, criteria)?;
        Ok(self)
    }

    /// Declares a combination with the kind given explicitly.
    ///
    /// `options` may carry `filters`; its remaining keys form the constraint
    /// argument (for example `{"from": "2000-01-01"}` for `date`). With no
    /// remaining keys the argument is `true`.
    pub fn combine<I, S>(
        mut self,
        kind: impl Into<CombinationKind>,
        name: impl Into<String>,
        fields: I,
        options: impl Into<Argument>,
    ) -> RuleResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let options = options.into();
        let (filters, arg) = match &options {
            Argument::Null => (Vec::new(), Argument::Bool(true)),
            Argument::Map(entries) => {
                let filters = match entries.get("filters") {
                    Some(kinds) => names("filters", kinds)?,
                    None => Vec::new(),
                };
                let rest: IndexMap<String, Argument> = entries
                    .iter()
                    .filter(|(key, _)| key.as_str() != "filters")
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                let arg = if rest.is_empty() {
                    Argument::Bool(true)
                } else {
                    Argument::Map(rest)
                };
                (filters, arg)
            }
            other => {
                return Err(RuleError::invalid_criteria(
                    &name,
                    format!("options must be a mapping, got {other}"),
                ));
            }
        };

        let criteria = CombinationCriteria::new(
            &name,
            kind.into(),
            fields.into_iter().map(Into::into).collect(),
            filters,
            arg,
        )?;
        insert_unique(&mut self.rule.combinations, name, criteria)?;
        Ok(self)
    }

    /// Finishes the rule.
    #[must_use]
    pub fn build(self) -> Rule {
        self.rule
    }
}

fn insert_unique<C>(map: &mut IndexMap<String, C>, name: String, criteria: C) -> RuleResult<()> {
    match map.entry(name) {
        Entry::Occupied(entry) => Err(RuleError::invalid_criteria(
            entry.key().as_str(),
            "declared twice",
        )),
        Entry::Vacant(entry) => {
            entry.insert(criteria);
            Ok(())
        }
    }
}
