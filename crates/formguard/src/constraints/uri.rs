//! URI constraint

use url::Url;

use crate::constraints::Constraint;
use crate::error::{RuleError, RuleResult};
use crate::value::Argument;

/// Passes when the value parses as an absolute URI whose scheme is one of the
/// accepted schemes.
///
/// The argument is a single scheme (`"https"`) or a list of schemes
/// (`["http", "https"]`). Schemes compare as written; the parser lowercases
/// the value's scheme, so accepted schemes should be given in lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uri;

impl Constraint for Uri {
    fn validate(&self, value: &str, arg: &Argument) -> RuleResult<bool> {
        let schemes = schemes(arg)?;

        let Ok(parsed) = Url::parse(value) else {
            return Ok(false);
        };

        Ok(schemes.iter().any(|scheme| scheme == parsed.scheme()))
    }

    fn check_argument(&self, arg: &Argument) -> RuleResult<()> {
        schemes(arg).map(drop)
    }
}

fn schemes(arg: &Argument) -> RuleResult<Vec<String>> {
    arg.as_strings().ok_or_else(|| {
        RuleError::invalid_argument("uri", "a scheme or a list of schemes", arg.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn web() -> Argument {
        Argument::from(json!(["http", "https"]))
    }

    #[test]
    fn test_accepted_schemes() {
        assert!(Uri.validate("http://example.com", &web()).unwrap());
        assert!(Uri.validate("https://example.com/a?b=c", &web()).unwrap());
        assert!(!Uri.validate("ftp://example.com", &web()).unwrap());
    }

    #[test]
    fn test_single_scheme() {
        let mailto = Argument::from("mailto");
        assert!(Uri.validate("mailto:someone@example.com", &mailto).unwrap());
        assert!(!Uri.validate("http://example.com", &mailto).unwrap());
    }

    #[test]
    fn test_unparsable() {
        assert!(!Uri.validate("not a uri", &web()).unwrap());
        assert!(!Uri.validate("/relative/path", &web()).unwrap());
        assert!(!Uri.validate("http://", &web()).unwrap());
    }

    #[test]
    fn test_scheme_case() {
        // The parsed scheme is always lower case.
        assert!(Uri.validate("HTTP://example.com", &web()).unwrap());
        assert!(!Uri.validate("https://a.b", &Argument::from("HTTPS")).unwrap());
    }

    #[test]
    fn test_bad_argument() {
        assert!(matches!(
            Uri.validate("http://example.com", &Argument::Bool(true)),
            Err(RuleError::InvalidArgument { .. })
        ));
        assert!(Uri.check_argument(&Argument::Int(1)).is_err());
        assert!(Uri.check_argument(&web()).is_ok());
    }
}
