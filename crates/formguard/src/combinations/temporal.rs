//! Calendar combination constraints: `date`, `time`, `datetime`
//!
//! Each component arrives as its own input (separate selects for year,
//! month and day, for instance). Components must be plain decimal integers;
//! anything else fails the combination.
//!
//! The argument may carry inclusive `from` / `to` bounds:
//!
//! | kind       | bound format           |
//! |------------|------------------------|
//! | `date`     | `YYYY-MM-DD`           |
//! | `time`     | `HH:MM:SS`             |
//! | `datetime` | `YYYY-MM-DDTHH:MM:SS`  |
//!
//! Any other argument (`true`, `null`, a map without those keys) means
//! "no bounds".

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::combinations::CombinationConstraint;
use crate::error::{RuleError, RuleResult};
use crate::value::Argument;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ============================================================================
// COMPONENT PARSING
// ============================================================================

fn component<T: FromStr>(value: Option<&String>) -> Option<T> {
    let value = value?;
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn date_of(values: &[Option<String>]) -> Option<NaiveDate> {
    let year = component::<i32>(values.first()?.as_ref())?;
    let month = component::<u32>(values.get(1)?.as_ref())?;
    let day = component::<u32>(values.get(2)?.as_ref())?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Hour in `0..=23`, minute and second each in `0..=59`.
fn time_of(values: &[Option<String>]) -> Option<NaiveTime> {
    let hour = component::<u32>(values.first()?.as_ref())?;
    let minute = component::<u32>(values.get(1)?.as_ref())?;
    let second = component::<u32>(values.get(2)?.as_ref())?;
    NaiveTime::from_hms_opt(hour, minute, second)
}

// ============================================================================
// BOUNDS
// ============================================================================

struct Bounds<T> {
    from: Option<T>,
    to: Option<T>,
}

impl<T: PartialOrd> Bounds<T> {
    fn parse(
        kind: &'static str,
        arg: &Argument,
        expected: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> RuleResult<Self> {
        let read = |key: &str| -> RuleResult<Option<T>> {
            match arg.get(key) {
                None | Some(Argument::Null) => Ok(None),
                Some(Argument::Text(text)) => parse(text.as_str())
                    .map(Some)
                    .ok_or_else(|| RuleError::invalid_argument(kind, expected, text.clone())),
                Some(other) => Err(RuleError::invalid_argument(kind, expected, other.to_string())),
            }
        };
        Ok(Self {
            from: read("from")?,
            to: read("to")?,
        })
    }

    fn contains(&self, value: &T) -> bool {
        self.from.as_ref().is_none_or(|from| value >= from)
            && self.to.as_ref().is_none_or(|to| value <= to)
    }
}

// ============================================================================
// CONSTRAINTS
// ============================================================================

/// Year, month, day forming a valid calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Date;

impl CombinationConstraint for Date {
    fn validate(&self, values: &[Option<String>], arg: &Argument) -> RuleResult<bool> {
        let bounds = Bounds::parse("date", arg, "`from`/`to` dates as YYYY-MM-DD", |s| {
            NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
        })?;
        if values.len() != 3 {
            return Ok(false);
        }
        Ok(date_of(values).is_some_and(|date| bounds.contains(&date)))
    }
}

/// Hour, minute, second forming a valid time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Time;

impl CombinationConstraint for Time {
    fn validate(&self, values: &[Option<String>], arg: &Argument) -> RuleResult<bool> {
        let bounds = Bounds::parse("time", arg, "`from`/`to` times as HH:MM:SS", |s| {
            NaiveTime::parse_from_str(s, TIME_FORMAT).ok()
        })?;
        if values.len() != 3 {
            return Ok(false);
        }
        Ok(time_of(values).is_some_and(|time| bounds.contains(&time)))
    }
}

/// Year, month, day, hour, minute, second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateTime;

impl CombinationConstraint for DateTime {
    fn validate(&self, values: &[Option<String>], arg: &Argument) -> RuleResult<bool> {
        let bounds = Bounds::parse(
            "datetime",
            arg,
            "`from`/`to` timestamps as YYYY-MM-DDTHH:MM:SS",
            |s| NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok(),
        )?;
        if values.len() != 6 {
            return Ok(false);
        }
        let (Some(date), Some(time)) = (date_of(&values[..3]), time_of(&values[3..])) else {
            return Ok(false);
        };
        Ok(bounds.contains(&date.and_time(time)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parts(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some((*v).to_owned())).collect()
    }

    #[test]
    fn test_date() {
        let arg = Argument::Bool(true);
        assert!(Date.validate(&parts(&["2024", "2", "29"]), &arg).unwrap());
        assert!(Date.validate(&parts(&["2023", "12", "31"]), &arg).unwrap());
        assert!(!Date.validate(&parts(&["2023", "2", "29"]), &arg).unwrap());
        assert!(!Date.validate(&parts(&["2023", "13", "1"]), &arg).unwrap());
        assert!(!Date.validate(&parts(&["2023", "4", "31"]), &arg).unwrap());
    }

    #[test]
    fn test_date_rejects_bad_components() {
        let arg = Argument::Null;
        assert!(!Date.validate(&parts(&["2023", "x", "1"]), &arg).unwrap());
        assert!(!Date.validate(&parts(&["2023", "-1", "1"]), &arg).unwrap());
        assert!(!Date.validate(&parts(&["2023", "", "1"]), &arg).unwrap());
        assert!(!Date.validate(&[Some("2023".into()), None, Some("1".into())], &arg).unwrap());
        assert!(!Date.validate(&parts(&["2023", "1"]), &arg).unwrap());
    }

    #[test]
    fn test_time() {
        let arg = Argument::Bool(true);
        assert!(Time.validate(&parts(&["0", "0", "0"]), &arg).unwrap());
        assert!(Time.validate(&parts(&["23", "59", "59"]), &arg).unwrap());
        assert!(!Time.validate(&parts(&["24", "0", "0"]), &arg).unwrap());
        assert!(!Time.validate(&parts(&["12", "60", "0"]), &arg).unwrap());
        assert!(!Time.validate(&parts(&["12", "0", "60"]), &arg).unwrap());
    }

    #[test]
    fn test_time_checks_minute_and_second_independently() {
        let arg = Argument::Null;
        assert!(!Time.validate(&parts(&["12", "30", "75"]), &arg).unwrap());
        assert!(!Time.validate(&parts(&["12", "75", "30"]), &arg).unwrap());
    }

    #[test]
    fn test_datetime() {
        let arg = Argument::Bool(true);
        assert!(
            DateTime
                .validate(&parts(&["2024", "2", "29", "23", "59", "59"]), &arg)
                .unwrap()
        );
        assert!(
            !DateTime
                .validate(&parts(&["2023", "2", "29", "12", "0", "0"]), &arg)
                .unwrap()
        );
        assert!(
            !DateTime
                .validate(&parts(&["2024", "2", "29", "12", "0", "60"]), &arg)
                .unwrap()
        );
        assert!(
            !DateTime
                .validate(&parts(&["2024", "2", "29"]), &arg)
                .unwrap()
        );
    }

    #[test]
    fn test_date_bounds() {
        let arg = Argument::from(json!({"from": "2020-01-01", "to": "2020-12-31"}));
        assert!(Date.validate(&parts(&["2020", "1", "1"]), &arg).unwrap());
        assert!(Date.validate(&parts(&["2020", "12", "31"]), &arg).unwrap());
        assert!(!Date.validate(&parts(&["2019", "12", "31"]), &arg).unwrap());
        assert!(!Date.validate(&parts(&["2021", "1", "1"]), &arg).unwrap());
    }

    #[test]
    fn test_open_ended_bounds() {
        let arg = Argument::from(json!({"from": "09:00:00"}));
        assert!(Time.validate(&parts(&["9", "0", "0"]), &arg).unwrap());
        assert!(!Time.validate(&parts(&["8", "59", "59"]), &arg).unwrap());
        assert!(Time.validate(&parts(&["23", "0", "0"]), &arg).unwrap());

        let arg = Argument::from(json!({"to": "2000-01-01T00:00:00"}));
        assert!(
            DateTime
                .validate(&parts(&["1999", "12", "31", "23", "59", "59"]), &arg)
                .unwrap()
        );
        assert!(
            !DateTime
                .validate(&parts(&["2000", "1", "1", "0", "0", "1"]), &arg)
                .unwrap()
        );
    }

    #[test]
    fn test_malformed_bound_is_error() {
        let arg = Argument::from(json!({"from": "01/02/2020"}));
        assert!(matches!(
            Date.validate(&parts(&["2020", "1", "1"]), &arg),
            Err(RuleError::InvalidArgument { .. })
        ));
        let arg = Argument::from(json!({"to": 5}));
        assert!(matches!(
            Time.validate(&parts(&["1", "1", "1"]), &arg),
            Err(RuleError::InvalidArgument { .. })
        ));
    }
}
