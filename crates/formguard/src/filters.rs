//! Value filters
//!
//! A filter is a total `&str -> String` transformation applied before any
//! constraint runs. Filters never fail.
//!
//! Built-in kinds:
//!
//! | kind       | effect                                   |
//! |------------|------------------------------------------|
//! | `strip`    | trims leading and trailing whitespace    |
//! | `upcase`   | converts to upper case                   |
//! | `downcase` | converts to lower case                   |

use std::sync::Arc;

// ============================================================================
// FILTER TRAIT
// ============================================================================

/// A stateless single-value transformer.
///
/// Any `Fn(&str) -> String` closure that is `Send + Sync` is a filter, so
/// custom kinds can be registered without declaring a type:
///
/// ```rust,ignore
/// let registry = Registry::builder()
///     .register_filter("squish", |v: &str| v.split_whitespace().collect::<Vec<_>>().join(" "))
///     .build();
/// ```
pub trait Filter: Send + Sync {
    /// Transforms a value.
    fn process(&self, value: &str) -> String;
}

impl<F> Filter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn process(&self, value: &str) -> String {
        self(value)
    }
}

/// Runs `value` through `chain`, left to right.
pub fn apply_chain(chain: &[Arc<dyn Filter>], value: &str) -> String {
    let mut current = value.to_owned();
    for filter in chain {
        current = filter.process(&current);
    }
    current
}

// ============================================================================
// BUILT-IN FILTERS
// ============================================================================

/// Trims leading and trailing whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Strip;

impl Filter for Strip {
    fn process(&self, value: &str) -> String {
        value.trim().to_owned()
    }
}

/// Converts to upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Upcase;

impl Filter for Upcase {
    fn process(&self, value: &str) -> String {
        value.to_uppercase()
    }
}

/// Converts to lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Downcase;

impl Filter for Downcase {
    fn process(&self, value: &str) -> String {
        value.to_lowercase()
    }
}

/// The built-in filter kinds, keyed by their symbolic names.
pub(crate) fn builtin() -> Vec<(&'static str, Arc<dyn Filter>)> {
    vec![
        ("strip", Arc::new(Strip)),
        ("upcase", Arc::new(Upcase)),
        ("downcase", Arc::new(Downcase)),
    ]
}
