//! Single-value constraints
//!
//! A constraint is a predicate over one filtered value plus a configuration
//! argument. A `false` result is an ordinary validation failure; an `Err` is
//! reserved for arguments the constraint cannot interpret.
//!
//! # Built-in kinds
//!
//! - **Character classes** (boolean argument, `false` inverts):
//!   `ascii`, `int`, `uint`, `alpha`, `alpha_space`, `alnum`, `alnum_space`
//! - **Pattern**: `regexp` (pattern source or precompiled regex)
//! - **Format**: `uri` (accepted scheme or list of schemes)
//! - **Length**: `length` (bytes), `characters` (Unicode scalar values);
//!   exact integer or inclusive range

use std::sync::Arc;

use crate::error::{RuleError, RuleResult};
use crate::value::Argument;

pub mod length;
pub mod pattern;
pub mod uri;

pub use length::{Characters, Length};
pub use pattern::{Alnum, AlnumSpace, Alpha, AlphaSpace, Ascii, Int, Regexp, Uint};
pub use uri::Uri;

// ============================================================================
// CONSTRAINT TRAIT
// ============================================================================

/// A stateless single-value predicate.
///
/// Closures of the shape `Fn(&str, &Argument) -> RuleResult<bool>` are
/// constraints too.
pub trait Constraint: Send + Sync {
    /// Checks `value` against the configured `arg`.
    ///
    /// Returns `Ok(false)` when the value fails and `Err` only when `arg` is
    /// malformed.
    fn validate(&self, value: &str, arg: &Argument) -> RuleResult<bool>;

    /// Checks the shape of `arg` without a value.
    ///
    /// Runs once per rule entry before anything is evaluated, so a malformed
    /// argument is reported even when the entry is missing from the input.
    fn check_argument(&self, _arg: &Argument) -> RuleResult<()> {
        Ok(())
    }
}

impl<F> Constraint for F
where
    F: Fn(&str, &Argument) -> RuleResult<bool> + Send + Sync,
{
    fn validate(&self, value: &str, arg: &Argument) -> RuleResult<bool> {
        self(value, arg)
    }
}

// ============================================================================
// ARGUMENT HELPERS
// ============================================================================

/// Reads the boolean "expect a match" flag of a character-class constraint.
pub fn flag_argument(kind: &str, arg: &Argument) -> RuleResult<bool> {
    arg.as_bool()
        .ok_or_else(|| RuleError::invalid_argument(kind, "a boolean", arg.to_string()))
}

/// Reads an exact-length or inclusive-range argument.
pub fn range_argument(kind: &str, arg: &Argument) -> RuleResult<std::ops::RangeInclusive<i64>> {
    arg.as_range().ok_or_else(|| {
        RuleError::invalid_argument(kind, "an integer or an inclusive range", arg.to_string())
    })
}

/// The built-in constraint kinds, keyed by their symbolic names.
pub(crate) fn builtin() -> Vec<(&'static str, Arc<dyn Constraint>)> {
    vec![
        (Ascii::KIND, Arc::new(Ascii)),
        (Int::KIND, Arc::new(Int)),
        (Uint::KIND, Arc::new(Uint)),
        (Alpha::KIND, Arc::new(Alpha)),
        (AlphaSpace::KIND, Arc::new(AlphaSpace)),
        (Alnum::KIND, Arc::new(Alnum)),
        (AlnumSpace::KIND, Arc::new(AlnumSpace)),
        ("regexp", Arc::new(Regexp)),
        ("uri", Arc::new(Uri)),
        ("length", Arc::new(Length)),
        ("characters", Arc::new(Characters)),
    ]
}
