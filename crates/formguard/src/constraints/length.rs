//! Length constraints
//!
//! Both constraints take either an exact length (integer) or an inclusive
//! range. They differ only in how a value is measured:
//!
//! - `length` counts raw UTF-8 bytes
//! - `characters` counts Unicode scalar values

use crate::constraints::{Constraint, range_argument};
use crate::error::RuleResult;
use crate::value::Argument;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to measure a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum LengthMode {
    Bytes,
    Chars,
}

impl LengthMode {
    #[inline]
    fn measure(self, input: &str) -> i64 {
        let len = match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        };
        i64::try_from(len).unwrap_or(i64::MAX)
    }
}

fn check(mode: LengthMode, kind: &str, value: &str, arg: &Argument) -> RuleResult<bool> {
    let range = range_argument(kind, arg)?;
    Ok(range.contains(&mode.measure(value)))
}

// ============================================================================
// CONSTRAINTS
// ============================================================================

/// Byte length of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Length;

impl Constraint for Length {
    fn validate(&self, value: &str, arg: &Argument) -> RuleResult<bool> {
        check(LengthMode::Bytes, "length", value, arg)
    }

    fn check_argument(&self, arg: &Argument) -> RuleResult<()> {
        range_argument("length", arg).map(drop)
    }
}

/// Character (Unicode scalar value) count of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Characters;

impl Constraint for Characters {
    fn validate(&self, value: &str, arg: &Argument) -> RuleResult<bool> {
        check(LengthMode::Chars, "characters", value, arg)
    }

    fn check_argument(&self, arg: &Argument) -> RuleResult<()> {
        range_argument("characters", arg).map(drop)
    }
}
