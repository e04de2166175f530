//! Configuration error type
//!
//! A [`RuleError`] means the rule itself is malformed: an unknown filter or
//! constraint kind, an argument of the wrong shape, or a criteria map that
//! breaks one of its invariants. These are authoring mistakes and abort the
//! whole validate call.
//!
//! A value that merely fails a constraint is *not* an error. Those outcomes
//! are recorded on a [`Record`](crate::report::Record) instead.

use thiserror::Error;

/// Configuration error raised while building a rule or running a validation.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuleError {
    /// A filter kind that is not registered.
    #[error("unknown filter `{kind}`")]
    UnknownFilter {
        /// The symbolic kind name
        kind: String,
    },

    /// A constraint kind that is not registered.
    #[error("unknown constraint `{kind}`")]
    UnknownConstraint {
        /// The symbolic kind name
        kind: String,
    },

    /// A combination constraint kind that is not registered.
    #[error("unknown combination constraint `{kind}`")]
    UnknownCombination {
        /// The symbolic kind name
        kind: String,
    },

    /// A constraint received an argument it cannot interpret.
    #[error("constraint `{constraint}` expects {expected}, got {found}")]
    InvalidArgument {
        /// Constraint (or reserved criteria key) the argument belongs to
        constraint: String,
        /// Description of the accepted shapes
        expected: &'static str,
        /// Short description of the received argument
        found: String,
    },

    /// A criteria map that is structurally wrong.
    #[error("invalid criteria for `{name}`: {message}")]
    InvalidCriteria {
        /// Entry name
        name: String,
        /// What is wrong with it
        message: String,
    },

    /// A field declared both a default and `present: true`.
    #[error("field `{name}` cannot have both a default and `present: true`")]
    DefaultWithPresence {
        /// Field name
        name: String,
    },

    /// A combination declared fewer than two fields.
    #[error("combination `{name}` needs at least two fields, got {count}")]
    TooFewFields {
        /// Combination name
        name: String,
        /// Number of declared fields
        count: usize,
    },

    /// A combination without a combination constraint.
    #[error("combination `{name}` declares no combination constraint")]
    MissingCombinationConstraint {
        /// Combination name
        name: String,
    },

    /// A combination with more than one combination constraint.
    #[error("combination `{name}` declares several combination constraints: {kinds:?}")]
    MultipleCombinationConstraints {
        /// Combination name
        name: String,
        /// The conflicting kinds
        kinds: Vec<String>,
    },

    /// A `regexp` pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The nested rule or catalog configuration has the wrong structure.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with it
        message: String,
    },
}

impl RuleError {
    /// Creates an [`RuleError::InvalidArgument`].
    pub fn invalid_argument(
        constraint: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            constraint: constraint.into(),
            expected,
            found: found.into(),
        }
    }

    /// Creates an [`RuleError::InvalidCriteria`].
    pub fn invalid_criteria(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidCriteria {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an [`RuleError::InvalidConfig`].
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type RuleResult<T> = Result<T, RuleError>;
