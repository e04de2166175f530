//! Input values and configuration arguments
//!
//! - [`ParamValue`] is one submitted parameter: a single string or an ordered
//!   list of strings (checkbox groups, multi-selects).
//! - [`Params`] is the flat name → value map a request parser hands in.
//! - [`Argument`] is the loosely shaped configuration value a criteria map is
//!   made of. It converts from `serde_json::Value` so rules can be written as
//!   JSON literals or loaded from a configuration file.

use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

// ============================================================================
// PARAM VALUE
// ============================================================================

/// A submitted (or cleaned) parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A single-valued input such as a text field.
    Single(String),
    /// A multi-valued input such as a checkbox group.
    Multi(Vec<String>),
}

impl ParamValue {
    /// Returns the string if this is a single value.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multi(_) => None,
        }
    }

    /// Returns the list if this is a multi value.
    #[must_use]
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Multi(values) => Some(values),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multi(values.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(values: [&str; N]) -> Self {
        Self::Multi(values.into_iter().map(str::to_owned).collect())
    }
}

impl PartialEq<&str> for ParamValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_single() == Some(*other)
    }
}

/// The flat input map: parameter name → submitted value.
pub type Params = HashMap<String, ParamValue>;

/// Builds a [`Params`] map from name/value pairs.
///
/// ```rust,ignore
/// let input = params([("email", " a@b.c ".into()), ("tags", ["x", "y"].into())]);
/// ```
pub fn params<K, V, I>(pairs: I) -> Params
where
    K: Into<String>,
    V: Into<ParamValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

// ============================================================================
// ARGUMENT
// ============================================================================

/// A configuration argument: the right-hand side of a criteria map entry.
///
/// Arguments are intentionally loose. Each constraint interprets the shape it
/// needs through the accessor methods and reports a
/// [`RuleError::InvalidArgument`](crate::RuleError::InvalidArgument) for
/// anything else.
#[derive(Debug, Clone, Default)]
pub enum Argument {
    /// No value.
    #[default]
    Null,
    /// A boolean flag.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A non-integral number.
    Float(f64),
    /// A string.
    Text(String),
    /// An ordered list.
    List(Vec<Argument>),
    /// An ordered mapping. Criteria maps are arguments of this shape.
    Map(IndexMap<String, Argument>),
    /// An inclusive integer range.
    Range(RangeInclusive<i64>),
    /// A precompiled regular expression.
    Pattern(Regex),
}

impl Argument {
    /// Builds a map argument from key/value pairs, keeping their order.
    pub fn map<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Argument>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a list argument.
    pub fn list<V, I>(items: I) -> Self
    where
        V: Into<Argument>,
        I: IntoIterator<Item = V>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns true for [`Argument::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the flag of a boolean argument.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the value of an integer argument.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string of a text argument.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the items of a list argument.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Argument]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries of a map argument.
    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, Argument>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a key in a map argument.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Argument> {
        self.as_map().and_then(|entries| entries.get(key))
    }

    /// Interprets the argument as an inclusive integer range.
    ///
    /// Accepted shapes: a bare integer `n` (the point range `n..=n`), a
    /// [`Argument::Range`], a two-integer list `[min, max]`, or a map
    /// `{ "min": a, "max": b }`.
    #[must_use]
    pub fn as_range(&self) -> Option<RangeInclusive<i64>> {
        match self {
            Self::Int(n) => Some(*n..=*n),
            Self::Range(range) => Some(range.clone()),
            Self::List(items) => match items.as_slice() {
                [min, max] => Some(min.as_int()?..=max.as_int()?),
                _ => None,
            },
            Self::Map(entries) if entries.len() == 2 => {
                let min = entries.get("min")?.as_int()?;
                let max = entries.get("max")?.as_int()?;
                Some(min..=max)
            }
            _ => None,
        }
    }

    /// Interprets the argument as a list of strings.
    ///
    /// A single string is a one-element list.
    #[must_use]
    pub fn as_strings(&self) -> Option<Vec<String>> {
        match self {
            Self::Text(value) => Some(vec![value.clone()]),
            Self::List(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect(),
            _ => None,
        }
    }
}

impl PartialEq for Argument {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Range(a), Self::Range(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Self::Range(range) => write!(f, "{}..={}", range.start(), range.end()),
            Self::Pattern(pattern) => write!(f, "/{}/", pattern.as_str()),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Argument {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<RangeInclusive<i64>> for Argument {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::Range(range)
    }
}

impl From<Regex> for Argument {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

impl<T: Into<Argument>> From<Vec<T>> for Argument {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Argument {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => match number.as_i64() {
                Some(n) => Self::Int(n),
                None => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Argument {
    fn from(value: &serde_json::Value) -> Self {
        Self::from(value.clone())
    }
}
