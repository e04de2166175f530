//! Rule evaluation
//!
//! [`Validator::validate`] runs one [`Rule`] against one [`Params`] map and
//! produces a [`Report`]. Evaluation happens in two passes:
//!
//! 1. every filter, constraint and combination kind the rule names is
//!    resolved against the registry and every constraint argument is
//!    shape-checked, so an unknown kind or a malformed argument is reported
//!    before any entry is evaluated;
//! 2. fields, then checkbox groups, then combinations are evaluated in
//!    declaration order.
//!
//! Filters run in the entry's own order followed by the rule-wide defaults.
//! Every constraint of an entry is evaluated; a failure does not stop the
//! remaining ones.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::combinations::CombinationConstraint;
use crate::constraints::Constraint;
use crate::criteria::{CheckboxCriteria, CombinationCriteria, ConstraintMap, FieldCriteria};
use crate::error::RuleResult;
use crate::filters::{Filter, apply_chain};
use crate::message::MessageCatalog;
use crate::registry::Registry;
use crate::report::{REASON_COUNT, REASON_PRESENT, Record, Report};
use crate::rule::Rule;
use crate::value::{Argument, Params};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Evaluates rules against submitted parameters.
///
/// A validator holds no per-call state. It can be cloned cheaply and shared
/// between threads; every call owns its own [`Report`].
#[derive(Debug, Clone, Default)]
pub struct Validator {
    registry: Arc<Registry>,
    catalog: Option<Arc<MessageCatalog>>,
}

impl Validator {
    /// Creates a validator over `registry`.
    pub fn new(registry: impl Into<Arc<Registry>>) -> Self {
        Self {
            registry: registry.into(),
            catalog: None,
        }
    }

    /// Attaches a message catalog used by [`Validator::messages`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with_catalog(mut self, catalog: impl Into<Arc<MessageCatalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// The registry kinds are resolved against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The attached message catalog, if any.
    pub fn catalog(&self) -> Option<&MessageCatalog> {
        self.catalog.as_deref()
    }

    /// Validates `input` against `rule`.
    ///
    /// Returns an error only for configuration problems (an unknown kind, an
    /// argument of the wrong shape). Validation failures are reported in the
    /// returned [`Report`].
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            field_count = rule.fields().len(),
            checkbox_count = rule.checkboxes().len(),
            combination_count = rule.combinations().len(),
        )
    )]
    pub fn validate(&self, input: &Params, rule: &Rule) -> RuleResult<Report> {
        let plan = Plan::resolve(&self.registry, rule)?;
        tracing::debug!(inputs = input.len(), "validating");

        let mut report = Report::new();
        for step in &plan.fields {
            let record = step.evaluate(input)?;
            tracing::trace!(field = step.name, failed = ?record.failed_constraints(), "field evaluated");
            fold(&mut report, record);
        }
        for step in &plan.checkboxes {
            let record = step.evaluate(input)?;
            tracing::trace!(checkbox = step.name, failed = ?record.failed_constraints(), "checkbox evaluated");
            fold(&mut report, record);
        }
        for step in &plan.combinations {
            let record = step.evaluate(input)?;
            tracing::trace!(combination = step.name, failed = record.is_failed(), "combination evaluated");
            if record.is_failed() {
                report.push(record);
            }
        }

        tracing::debug!(
            failed = report.failed_records().len(),
            valid = report.valid_params().len(),
            "validation finished"
        );
        Ok(report)
    }

    /// Resolves the failure messages of `report` for `action` through the
    /// attached catalog. Without a catalog every message is the built-in
    /// text.
    pub fn messages(&self, report: &Report, action: &str) -> IndexMap<String, Vec<String>> {
        match &self.catalog {
            Some(catalog) => report.messages(catalog, action),
            None => report.messages(&MessageCatalog::new(), action),
        }
    }
}

fn fold(report: &mut Report, record: Record) {
    if record.is_failed() {
        report.push(record);
        return;
    }
    let name = record.name().to_owned();
    if let Some(value) = record.into_value() {
        report.insert(name, value);
    }
}

// ============================================================================
// RESOLVED PLAN
// ============================================================================

/// A rule with every kind name replaced by its implementation.
struct Plan<'a> {
    fields: Vec<Step<'a, FieldCriteria>>,
    checkboxes: Vec<Step<'a, CheckboxCriteria>>,
    combinations: Vec<CombinationStep<'a>>,
}

struct Step<'a, C> {
    name: &'a str,
    criteria: &'a C,
    filters: Vec<Arc<dyn Filter>>,
    checks: Vec<Check<'a>>,
}

struct Check<'a> {
    kind: &'a str,
    arg: &'a Argument,
    constraint: &'a dyn Constraint,
}

struct CombinationStep<'a> {
    name: &'a str,
    criteria: &'a CombinationCriteria,
    filters: Vec<Arc<dyn Filter>>,
    constraint: &'a dyn CombinationConstraint,
}

impl<'a> Plan<'a> {
    fn resolve(registry: &'a Registry, rule: &'a Rule) -> RuleResult<Self> {
        let defaults = rule.default_filters();
        let chain = |own: &'a [String]| -> RuleResult<Vec<Arc<dyn Filter>>> {
            own.iter()
                .chain(defaults)
                .map(|kind| registry.filter(kind).cloned())
                .collect()
        };
        let checks = |constraints: &'a ConstraintMap| -> RuleResult<Vec<Check<'a>>> {
            constraints
                .iter()
                .map(|(kind, arg)| {
                    let constraint = &**registry.constraint(kind)?;
                    constraint.check_argument(arg)?;
                    Ok(Check {
                        kind: kind.as_str(),
                        arg,
                        constraint,
                    })
                })
                .collect()
        };

        let fields = rule
            .fields()
            .iter()
            .map(|(name, criteria)| {
                Ok(Step {
                    name: name.as_str(),
                    criteria,
                    filters: chain(criteria.filters())?,
                    checks: checks(criteria.constraints())?,
                })
            })
            .collect::<RuleResult<_>>()?;

        let checkboxes = rule
            .checkboxes()
            .iter()
            .map(|(name, criteria)| {
                Ok(Step {
                    name: name.as_str(),
                    criteria,
                    filters: chain(criteria.filters())?,
                    checks: checks(criteria.constraints())?,
                })
            })
            .collect::<RuleResult<_>>()?;

        let combinations = rule
            .combinations()
            .iter()
            .map(|(name, criteria)| {
                Ok(CombinationStep {
                    name: name.as_str(),
                    criteria,
                    filters: chain(criteria.filters())?,
                    constraint: &**registry.combination(criteria.kind())?,
                })
            })
            .collect::<RuleResult<_>>()?;

        Ok(Self {
            fields,
            checkboxes,
            combinations,
        })
    }
}

impl Check<'_> {
    fn passes(&self, value: &str) -> RuleResult<bool> {
        self.constraint.validate(value, self.arg)
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

impl Step<'_, FieldCriteria> {
    fn evaluate(&self, input: &Params) -> RuleResult<Record> {
        let mut record = Record::new(self.name);

        // A multi-valued submission for a single-valued field reads as absent.
        let value = input
            .get(self.name)
            .and_then(|raw| raw.as_single())
            .map(|raw| apply_chain(&self.filters, raw))
            .filter(|value| !value.is_empty());

        match value {
            Some(value) => {
                for check in &self.checks {
                    if !check.passes(&value)? {
                        record.fail(check.kind);
                    }
                }
                record.set_value(value);
            }
            None => match self.criteria.default_value() {
                Some(default) => record.set_value(default),
                None if self.criteria.require_presence() => record.fail(REASON_PRESENT),
                None => {}
            },
        }
        Ok(record)
    }
}

impl Step<'_, CheckboxCriteria> {
    fn evaluate(&self, input: &Params) -> RuleResult<Record> {
        let mut record = Record::new(self.name);

        // A single-valued submission for a checkbox group reads as absent.
        let values: Vec<String> = input
            .get(self.name)
            .and_then(|raw| raw.as_multi())
            .unwrap_or_default()
            .iter()
            .map(|raw| apply_chain(&self.filters, raw))
            .filter(|value| !value.is_empty())
            .collect();

        let size = i64::try_from(values.len()).unwrap_or(i64::MAX);
        let in_range = self.criteria.count().is_none_or(|count| count.contains(&size));

        if in_range && (!values.is_empty() || self.criteria.count().is_some()) {
            for value in &values {
                for check in &self.checks {
                    if !check.passes(value)? && !record.failed_on(check.kind) {
                        record.fail(check.kind);
                    }
                }
            }
            record.set_value(values);
        } else if values.is_empty() {
            let default = self.criteria.default_values();
            if !default.is_empty() {
                record.set_value(default.to_vec());
            } else if self.criteria.count().is_some() {
                record.fail(REASON_COUNT);
            }
        } else {
            record.fail(REASON_COUNT);
        }
        Ok(record)
    }
}

impl CombinationStep<'_> {
    fn evaluate(&self, input: &Params) -> RuleResult<Record> {
        let mut record = Record::new(self.name);

        let values: Vec<Option<String>> = self
            .criteria
            .fields()
            .iter()
            .map(|field| {
                input
                    .get(field)
                    .and_then(|raw| raw.as_single())
                    .map(|raw| apply_chain(&self.filters, raw))
            })
            .collect();

        if !self.constraint.validate(&values, self.criteria.arg())? {
            record.fail(self.name);
        }
        Ok(record)
    }
}
