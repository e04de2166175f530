//! Pattern constraints
//!
//! Fixed character classes matched against the whole value, and the
//! configurable `regexp` constraint.

use regex::Regex;

use crate::constraints::Constraint;
use crate::error::{RuleError, RuleResult};
use crate::macros::pattern_constraint;
use crate::value::Argument;

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

pattern_constraint! {
    /// Printable, non-space ASCII (`0x21..=0x7e`), at least one character.
    pub Ascii => "ascii", r"^[\x21-\x7e]+$";

    /// Optionally signed decimal integer.
    pub Int => "int", r"^[+-]?[0-9]+$";

    /// Unsigned decimal integer.
    pub Uint => "uint", r"^[0-9]+$";

    /// ASCII letters.
    pub Alpha => "alpha", r"^[a-zA-Z]+$";

    /// ASCII letters and spaces.
    pub AlphaSpace => "alpha_space", r"^[a-zA-Z ]+$";

    /// ASCII letters and digits.
    pub Alnum => "alnum", r"^[a-zA-Z0-9]+$";

    /// ASCII letters, digits and spaces.
    pub AlnumSpace => "alnum_space", r"^[a-zA-Z0-9 ]+$";
}

// ============================================================================
// REGEXP
// ============================================================================

/// Passes when the value contains a match of the configured pattern.
///
/// The argument is either a precompiled [`Regex`] or its source text. Source
/// text is compiled on use; the rule parser precompiles `regexp` arguments so
/// this only happens for hand-built criteria. Anchor the pattern with `^...$`
/// to require a whole-value match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Regexp;

impl Constraint for Regexp {
    fn validate(&self, value: &str, arg: &Argument) -> RuleResult<bool> {
        match arg {
            Argument::Pattern(pattern) => Ok(pattern.is_match(value)),
            Argument::Text(source) => Ok(Regex::new(source)?.is_match(value)),
            other => Err(RuleError::invalid_argument(
                "regexp",
                "a pattern",
                other.to_string(),
            )),
        }
    }

    fn check_argument(&self, arg: &Argument) -> RuleResult<()> {
        match arg {
            Argument::Pattern(_) => Ok(()),
            Argument::Text(source) => Regex::new(source).map(drop).map_err(RuleError::from),
            other => Err(RuleError::invalid_argument(
                "regexp",
                "a pattern",
                other.to_string(),
            )),
        }
    }
}
