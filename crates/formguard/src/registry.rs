//! Kind registry
//!
//! Maps symbolic kind names to filter, constraint and combination-constraint
//! implementations. A [`Registry`] is assembled once through
//! [`RegistryBuilder`] and is read-only afterwards, so a single instance can
//! be shared (behind an `Arc`) by every validation running in parallel.
//!
//! # Examples
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//!
//! let registry = Registry::builder()
//!     .register_filter("squish", |v: &str| v.split_whitespace().collect::<Vec<_>>().join(" "))
//!     .register_constraint("even", |v: &str, _: &Argument| Ok(v.len() % 2 == 0))
//!     .build();
//!
//! let validator = Validator::new(registry);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::combinations::{self, CombinationConstraint, CombinationKind};
use crate::constraints::{self, Constraint};
use crate::error::{RuleError, RuleResult};
use crate::filters::{self, Filter};

// ============================================================================
// REGISTRY
// ============================================================================

/// Immutable lookup tables for every kind a rule may reference.
pub struct Registry {
    filters: HashMap<String, Arc<dyn Filter>>,
    constraints: HashMap<String, Arc<dyn Constraint>>,
    combinations: HashMap<CombinationKind, Arc<dyn CombinationConstraint>>,
}

impl Registry {
    /// A registry holding only the built-in kinds.
    #[must_use]
    pub fn builtin() -> Self {
        RegistryBuilder::new().build()
    }

    /// A builder pre-populated with the built-in kinds.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Looks up a filter.
    pub fn filter(&self, kind: &str) -> RuleResult<&Arc<dyn Filter>> {
        self.filters
            .get(kind)
            .ok_or_else(|| RuleError::UnknownFilter { kind: kind.into() })
    }

    /// Looks up a constraint.
    pub fn constraint(&self, kind: &str) -> RuleResult<&Arc<dyn Constraint>> {
        self.constraints
            .get(kind)
            .ok_or_else(|| RuleError::UnknownConstraint { kind: kind.into() })
    }

    /// Looks up a combination constraint.
    pub fn combination(&self, kind: &CombinationKind) -> RuleResult<&Arc<dyn CombinationConstraint>> {
        self.combinations
            .get(kind)
            .ok_or_else(|| RuleError::UnknownCombination {
                kind: kind.to_string(),
            })
    }

    /// Returns true if a combination constraint is registered under `name`.
    #[must_use]
    pub fn has_combination(&self, name: &str) -> bool {
        self.combinations
            .contains_key(&CombinationKind::from_name(name))
    }

    /// Registered filter names, sorted.
    #[must_use]
    pub fn filter_kinds(&self) -> Vec<&str> {
        sorted(self.filters.keys().map(String::as_str))
    }

    /// Registered constraint names, sorted.
    #[must_use]
    pub fn constraint_kinds(&self) -> Vec<&str> {
        sorted(self.constraints.keys().map(String::as_str))
    }

    /// Registered combination constraint names, sorted.
    #[must_use]
    pub fn combination_kinds(&self) -> Vec<&str> {
        sorted(self.combinations.keys().map(CombinationKind::as_str))
    }
}

fn sorted<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut names: Vec<_> = names.collect();
    names.sort_unstable();
    names
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("filters", &self.filter_kinds())
            .field("constraints", &self.constraint_kinds())
            .field("combinations", &self.combination_kinds())
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Assembles a [`Registry`]. Registering an existing name replaces it.
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Starts from the built-in kinds.
    #[must_use]
    pub fn new() -> Self {
        let mut builder = Self::empty();
        for (name, filter) in filters::builtin() {
            builder.registry.filters.insert(name.to_owned(), filter);
        }
        for (name, constraint) in constraints::builtin() {
            builder.registry.constraints.insert(name.to_owned(), constraint);
        }
        for (kind, constraint) in combinations::builtin() {
            builder.registry.combinations.insert(kind, constraint);
        }
        builder
    }

    /// Starts from nothing, not even the built-in kinds.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            registry: Registry {
                filters: HashMap::new(),
                constraints: HashMap::new(),
                combinations: HashMap::new(),
            },
        }
    }

    /// Registers a filter kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn register_filter(mut self, name: impl Into<String>, filter: impl Filter + 'static) -> Self {
        let name = name.into();
        tracing::debug!(kind = %name, "registering filter");
        self.registry.filters.insert(name, Arc::new(filter));
        self
    }

    /// Registers a constraint kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn register_constraint(
        mut self,
        name: impl Into<String>,
        constraint: impl Constraint + 'static,
    ) -> Self {
        let name = name.into();
        tracing::debug!(kind = %name, "registering constraint");
        self.registry.constraints.insert(name, Arc::new(constraint));
        self
    }

    /// Registers a combination constraint kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn register_combination(
        mut self,
        kind: impl Into<CombinationKind>,
        constraint: impl CombinationConstraint + 'static,
    ) -> Self {
        let kind = kind.into();
        tracing::debug!(kind = %kind, "registering combination constraint");
        self.registry.combinations.insert(kind, Arc::new(constraint));
        self
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> Registry {
        self.registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Argument;

    #[test]
    fn test_builtin_kinds() {
        let registry = Registry::builtin();
        assert_eq!(registry.filter_kinds(), ["downcase", "strip", "upcase"]);
        assert_eq!(
            registry.constraint_kinds(),
            [
                "alnum",
                "alnum_space",
                "alpha",
                "alpha_space",
                "ascii",
                "characters",
                "int",
                "length",
                "regexp",
                "uint",
                "uri"
            ]
        );
        assert_eq!(
            registry.combination_kinds(),
            ["any", "date", "datetime", "same", "time"]
        );
    }

    #[test]
    fn test_unknown_kinds() {
        let registry = Registry::builtin();
        assert!(matches!(
            registry.filter("titlecase"),
            Err(RuleError::UnknownFilter { kind }) if kind == "titlecase"
        ));
        assert!(matches!(
            registry.constraint("zipcode"),
            Err(RuleError::UnknownConstraint { .. })
        ));
        assert!(matches!(
            registry.combination(&CombinationKind::Custom("between".into())),
            Err(RuleError::UnknownCombination { .. })
        ));
    }

    #[test]
    fn test_register_custom_kinds() {
        let registry = Registry::builder()
            .register_filter("reverse", |v: &str| v.chars().rev().collect::<String>())
            .register_constraint("even", |v: &str, _: &Argument| {
                Ok::<_, RuleError>(v.len() % 2 == 0)
            })
            .register_combination(
                "distinct",
                |values: &[Option<String>], _: &Argument| {
                    Ok::<_, RuleError>(values.first() != values.get(1))
                },
            )
            .build();

        assert_eq!(registry.filter("reverse").unwrap().process("abc"), "cba");
        assert!(
            registry
                .constraint("even")
                .unwrap()
                .validate("ab", &Argument::Null)
                .unwrap()
        );
        assert!(registry.has_combination("distinct"));
        assert!(registry.filter("strip").is_ok());
    }

    #[test]
    fn test_override_builtin() {
        let registry = Registry::builder()
            .register_filter("strip", |v: &str| v.trim_start().to_owned())
            .build();
        assert_eq!(registry.filter("strip").unwrap().process(" a "), "a ");
    }

    #[test]
    fn test_empty_builder() {
        let registry = RegistryBuilder::empty().build();
        assert!(registry.filter_kinds().is_empty());
        assert!(registry.filter("strip").is_err());
    }
}
