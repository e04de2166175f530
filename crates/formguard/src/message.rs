//! Message catalog
//!
//! Resolves a failed `(action, field, constraint)` triple to a human-readable
//! template. The catalog is a nested mapping:
//!
//! ```json
//! {
//!   "signup": {
//!     "email": { "present": "Please enter your email.", "DEFAULT": "Email looks wrong." }
//!   },
//!   "DEFAULT": {
//!     "email": { "uri": "Not a web address." }
//!   }
//! }
//! ```
//!
//! Lookup falls back level by level:
//!
//! 1. the action by name, else the `DEFAULT` action, else the built-in text
//! 2. within the action, the field by name, else the built-in text
//! 3. within the field, the constraint by name, else its `DEFAULT` key, else
//!    the built-in text
//!
//! The built-in text is `"<field> is invalid."`. Templates are returned as
//! written; no placeholder expansion happens.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{RuleError, RuleResult};
use crate::report::Record;

/// Wildcard key at the action and constraint levels.
pub const DEFAULT_KEY: &str = "DEFAULT";

type FieldMessages = IndexMap<String, String>;
type ActionMessages = IndexMap<String, FieldMessages>;

/// Layered lookup table of failure messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    actions: IndexMap<String, ActionMessages>,
}

impl MessageCatalog {
    /// Creates an empty catalog. Every lookup yields the built-in text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a catalog from an in-memory nested structure.
    pub fn from_value(value: serde_json::Value) -> RuleResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| RuleError::invalid_config(format!("message catalog: {e}")))
    }

    /// Adds (or replaces) one template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(
        mut self,
        action: impl Into<String>,
        field: impl Into<String>,
        constraint: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.actions
            .entry(action.into())
            .or_default()
            .entry(field.into())
            .or_default()
            .insert(constraint.into(), template.into());
        self
    }

    /// Resolves the message for a failed constraint.
    pub fn get<'a>(&'a self, action: &str, field: &str, constraint: &str) -> Cow<'a, str> {
        let found = self
            .actions
            .get(action)
            .or_else(|| self.actions.get(DEFAULT_KEY))
            .and_then(|fields| fields.get(field))
            .and_then(|constraints| {
                constraints
                    .get(constraint)
                    .or_else(|| constraints.get(DEFAULT_KEY))
            });

        match found {
            Some(template) => Cow::Borrowed(template),
            None => Cow::Owned(format!("{field} is invalid.")),
        }
    }

    /// Resolves one message per failure reason of `record`.
    pub fn messages_for(&self, action: &str, record: &Record) -> Vec<String> {
        record
            .failed_constraints()
            .iter()
            .map(|constraint| self.get(action, record.name(), constraint).into_owned())
            .collect()
    }
}
