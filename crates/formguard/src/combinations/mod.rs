//! Combination constraints
//!
//! A combination constraint judges several inputs together: two password
//! boxes that must agree, three selects that must form a calendar date.
//! It receives the filtered values in the order the combination declared its
//! fields. An input that was not submitted (or was submitted as a list) is
//! `None`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::RuleResult;
use crate::value::Argument;

pub mod equality;
pub mod temporal;

pub use equality::{Any, Same};
pub use temporal::{Date, DateTime, Time};

// ============================================================================
// COMBINATION CONSTRAINT TRAIT
// ============================================================================

/// A stateless predicate over several named inputs.
///
/// Closures of the shape `Fn(&[Option<String>], &Argument) -> RuleResult<bool>`
/// are combination constraints too.
pub trait CombinationConstraint: Send + Sync {
    /// Checks the ordered `values` against the configured `arg`.
    fn validate(&self, values: &[Option<String>], arg: &Argument) -> RuleResult<bool>;
}

impl<F> CombinationConstraint for F
where
    F: Fn(&[Option<String>], &Argument) -> RuleResult<bool> + Send + Sync,
{
    fn validate(&self, values: &[Option<String>], arg: &Argument) -> RuleResult<bool> {
        self(values, arg)
    }
}

// ============================================================================
// COMBINATION KIND
// ============================================================================

/// Names a combination constraint.
///
/// The built-in kinds are explicit variants; anything else registered by an
/// application is [`CombinationKind::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CombinationKind {
    /// Exactly two values, equal.
    Same,
    /// At least one value present and non-empty.
    Any,
    /// Year, month, day forming a calendar date.
    Date,
    /// Hour, minute, second forming a time of day.
    Time,
    /// Year, month, day, hour, minute, second.
    DateTime,
    /// An application-registered kind.
    Custom(String),
}

impl CombinationKind {
    /// Every built-in kind.
    pub const BUILTIN: [CombinationKind; 5] = [
        CombinationKind::Same,
        CombinationKind::Any,
        CombinationKind::Date,
        CombinationKind::Time,
        CombinationKind::DateTime,
    ];

    /// Returns the symbolic name the kind is registered under.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Same => "same",
            Self::Any => "any",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Custom(name) => name,
        }
    }

    /// Maps a symbolic name to its kind. Unknown names become
    /// [`CombinationKind::Custom`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "same" => Self::Same,
            "any" => Self::Any,
            "date" => Self::Date,
            "time" => Self::Time,
            "datetime" => Self::DateTime,
            other => Self::Custom(other.to_owned()),
        }
    }
}

impl fmt::Display for CombinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CombinationKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<&str> for CombinationKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for CombinationKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<CombinationKind> for String {
    fn from(kind: CombinationKind) -> Self {
        kind.as_str().to_owned()
    }
}

/// The built-in combination kinds with their implementations.
pub(crate) fn builtin() -> Vec<(CombinationKind, Arc<dyn CombinationConstraint>)> {
    vec![
        (CombinationKind::Same, Arc::new(Same)),
        (CombinationKind::Any, Arc::new(Any)),
        (CombinationKind::Date, Arc::new(Date)),
        (CombinationKind::Time, Arc::new(Time)),
        (CombinationKind::DateTime, Arc::new(DateTime)),
    ]
}
