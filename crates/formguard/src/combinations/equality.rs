//! `same` and `any` combination constraints

use crate::combinations::CombinationConstraint;
use crate::error::RuleResult;
use crate::value::Argument;

/// Passes when exactly two values were given and they are equal.
///
/// Two absent values are equal; an absent and an empty value are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Same;

impl CombinationConstraint for Same {
    fn validate(&self, values: &[Option<String>], _arg: &Argument) -> RuleResult<bool> {
        Ok(match values {
            [first, second] => first == second,
            _ => false,
        })
    }
}

/// Passes when at least one value is present and non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Any;

impl CombinationConstraint for Any {
    fn validate(&self, values: &[Option<String>], _arg: &Argument) -> RuleResult<bool> {
        Ok(values
            .iter()
            .any(|value| value.as_deref().is_some_and(|v| !v.is_empty())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some((*v).to_owned())).collect()
    }

    #[test]
    fn test_same() {
        let arg = Argument::Bool(true);
        assert!(Same.validate(&some(&["x", "x"]), &arg).unwrap());
        assert!(!Same.validate(&some(&["x", "y"]), &arg).unwrap());
        assert!(!Same.validate(&some(&["x", "X"]), &arg).unwrap());
    }

    #[test]
    fn test_same_requires_two_values() {
        let arg = Argument::Bool(true);
        assert!(!Same.validate(&some(&["x"]), &arg).unwrap());
        assert!(!Same.validate(&some(&["x", "x", "x"]), &arg).unwrap());
        assert!(!Same.validate(&[], &arg).unwrap());
    }

    #[test]
    fn test_same_absent_values() {
        let arg = Argument::Null;
        assert!(Same.validate(&[None, None], &arg).unwrap());
        assert!(!Same.validate(&[Some("x".into()), None], &arg).unwrap());
        assert!(!Same.validate(&[Some(String::new()), None], &arg).unwrap());
    }

    #[test]
    fn test_any() {
        let arg = Argument::Bool(true);
        assert!(Any.validate(&[None, Some("x".into())], &arg).unwrap());
        assert!(!Any.validate(&[None, Some(String::new())], &arg).unwrap());
        assert!(!Any.validate(&[None, None, None], &arg).unwrap());
        assert!(!Any.validate(&[], &arg).unwrap());
    }
}
