//! Validation outcome types
//!
//! - [`Record`]: the outcome for one field, checkbox group or combination
//! - [`Report`]: the outcome of one validate call, holding failed records and
//!   the cleaned values of every entry that passed

use std::ops::Index;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

use crate::message::MessageCatalog;
use crate::value::ParamValue;

/// Failure reason for a required field that is missing.
pub const REASON_PRESENT: &str = "present";

/// Failure reason for a checkbox group with the wrong number of values.
pub const REASON_COUNT: &str = "count";

// ============================================================================
// RECORD
// ============================================================================

/// Outcome for one rule entry.
///
/// `value` holds the cleaned value (or the substituted default) and is only
/// meaningful when the record did not fail. Every failing constraint is kept,
/// in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    value: Option<ParamValue>,
    failed: Vec<String>,
}

impl Record {
    /// Creates an empty, passing record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            failed: Vec::new(),
        }
    }

    /// Entry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cleaned value, if any.
    pub fn value(&self) -> Option<&ParamValue> {
        self.value.as_ref()
    }

    /// Sets the cleaned value.
    pub fn set_value(&mut self, value: impl Into<ParamValue>) {
        self.value = Some(value.into());
    }

    /// Records a failure reason.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.failed.push(reason.into());
    }

    /// Failure reasons, in evaluation order.
    pub fn failed_constraints(&self) -> &[String] {
        &self.failed
    }

    /// Returns true if at least one reason was recorded.
    pub fn is_failed(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Returns true if `reason` was recorded.
    pub fn failed_on(&self, reason: &str) -> bool {
        self.failed.iter().any(|failed| failed == reason)
    }

    pub(crate) fn into_value(self) -> Option<ParamValue> {
        self.value
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Aggregate outcome of one validate call.
///
/// Combinations that pass leave no entry in [`Report::valid_params`]; only
/// fields and checkbox groups contribute cleaned values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    failed: IndexMap<String, Record>,
    valid: IndexMap<String, ParamValue>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a failed record.
    ///
    /// Fields, checkbox groups and combinations have separate namespaces, so
    /// two failed records may share a name. The later record's reasons are
    /// appended to the earlier one, which keeps its value.
    pub fn push(&mut self, record: Record) {
        match self.failed.entry(record.name.clone()) {
            Entry::Occupied(mut existing) => existing.get_mut().failed.extend(record.failed),
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
    }

    /// Returns true if any entry failed.
    pub fn failed(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Returns true if the entry `name` failed.
    pub fn failed_on(&self, name: &str) -> bool {
        self.failed.contains_key(name)
    }

    /// The failed record for `name`.
    pub fn record(&self, name: &str) -> Option<&Record> {
        self.failed.get(name)
    }

    /// Every failed record, in rule order.
    pub fn failed_records(&self) -> &IndexMap<String, Record> {
        &self.failed
    }

    /// Cleaned values of every entry that passed, in rule order.
    pub fn valid_params(&self) -> &IndexMap<String, ParamValue> {
        &self.valid
    }

    /// The cleaned value for `name`.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.valid.get(name)
    }

    /// Stores a cleaned value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.valid.insert(name.into(), value.into());
    }

    /// Resolves every failure reason to a message through `catalog`.
    pub fn messages(&self, catalog: &MessageCatalog, action: &str) -> IndexMap<String, Vec<String>> {
        self.failed
            .iter()
            .map(|(name, record)| (name.clone(), catalog.messages_for(action, record)))
            .collect()
    }
}

impl Index<&str> for Report {
    type Output = ParamValue;

    /// Returns the cleaned value for `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` failed or has no cleaned value. Use [`Report::get`]
    /// for a non-panicking lookup.
    fn index(&self, name: &str) -> &ParamValue {
        &self.valid[name]
    }
}
