//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//! ```

// ============================================================================
// CORE: rules, evaluation and outcomes
// ============================================================================

pub use crate::error::{RuleError, RuleResult};
pub use crate::message::MessageCatalog;
pub use crate::registry::{Registry, RegistryBuilder};
pub use crate::report::{Record, Report};
pub use crate::rule::{Rule, RuleBuilder};
pub use crate::validator::Validator;
pub use crate::value::{Argument, ParamValue, Params, params};

// ============================================================================
// EXTENSION POINTS
// ============================================================================

pub use crate::combinations::{CombinationConstraint, CombinationKind};
pub use crate::constraints::Constraint;
pub use crate::filters::Filter;

// ============================================================================
// CRITERIA
// ============================================================================

pub use crate::criteria::{CheckboxCriteria, CombinationCriteria, FieldCriteria};
