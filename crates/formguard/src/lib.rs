//! # formguard
//!
//! Declarative validation for submitted form parameters.
//!
//! A [`Rule`] declares, per input name, how a raw value is cleaned (filters),
//! what it must satisfy (constraints) and what happens when it is missing
//! (defaults, presence, counts). A [`Validator`] evaluates a rule against a
//! flat [`Params`] map and returns a [`Report`] holding every failure and
//! the cleaned values of everything that passed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formguard::prelude::*;
//! use serde_json::json;
//!
//! let rule = Rule::builder()
//!     .filters(["strip"])
//!     .field("email", json!({"present": true, "uri": ["mailto"]}))?
//!     .combine(CombinationKind::Same, "password_check", ["password", "confirm"], json!(null))?
//!     .build();
//!
//! let input = params([("email", "  mailto:ann@example.com "), ("password", "s3cret"), ("confirm", "s3cret")]);
//! let report = Validator::default().validate(&input, &rule)?;
//! assert!(!report.failed());
//! assert_eq!(report["email"], "mailto:ann@example.com");
//! ```
//!
//! ## Extending
//!
//! Filters, constraints and combination constraints are looked up by name in
//! a [`Registry`]. Start from the built-ins with [`Registry::builder`] and
//! register closures or types implementing [`Filter`](filters::Filter),
//! [`Constraint`](constraints::Constraint) or
//! [`CombinationConstraint`](combinations::CombinationConstraint).
//!
//! ## Built-in Kinds
//!
//! - **Filters**: `strip`, `upcase`, `downcase`
//! - **Constraints**: `ascii`, `int`, `uint`, `alpha`, `alpha_space`, `alnum`,
//!   `alnum_space`, `regexp`, `uri`, `length`, `characters`
//! - **Combinations**: `same`, `any`, `date`, `time`, `datetime`

mod macros;

pub mod combinations;
pub mod constraints;
pub mod criteria;
pub mod error;
pub mod filters;
pub mod message;
pub mod prelude;
pub mod registry;
pub mod report;
pub mod rule;
pub mod validator;
pub mod value;

pub use error::{RuleError, RuleResult};
pub use message::MessageCatalog;
pub use registry::{Registry, RegistryBuilder};
pub use report::{Record, Report};
pub use rule::{Rule, RuleBuilder};
pub use validator::Validator;
pub use value::{Argument, ParamValue, Params, params};
