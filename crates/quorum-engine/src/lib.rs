//! Filter construction and evaluation for approver selection.
//!
//! The engine turns a [`quorum_core::Roster`] into browsable option
//! catalogs, maintains an ordered [`FilterSet`] of typed predicates through
//! the checkbox-toggle mutation protocol, and evaluates persons against the
//! set. Pure and synchronous; no HTTP, storage, or UI dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use quorum_core::{AttributeKey, Roster};
//! use quorum_engine::{
//!   CombineMode, Evaluator, FilterSet, OptionCatalogs, ToggleTarget,
//! };
//!
//! let roster = Roster::from_json("…").unwrap();
//! let catalogs = OptionCatalogs::generate(&roster);
//!
//! let filters = FilterSet::new()
//!   .toggle(
//!     &catalogs,
//!     ToggleTarget::attribute(AttributeKey::Workplace, "Berlin"),
//!     true,
//!   )
//!   .toggle(&catalogs, ToggleTarget::Group("grp-oncall".into()), true);
//!
//! let eval = Evaluator::new(&roster);
//! let approvers = eval.eligible(&roster.people, &filters, CombineMode::All);
//! ```

pub mod eval;
pub mod filter;
pub mod format;
pub mod operators;
pub mod options;

#[cfg(test)]
pub(crate) mod testutil;

pub use eval::{CombineMode, Evaluator};
pub use filter::{
  FilterCategory, FilterItem, FilterSet, FilterSubject, FilterValue,
  ToggleTarget,
};
pub use format::{format_count, format_scalar};
pub use operators::{
  IDENTITY_OPERATORS, MULTI_VALUE_OPERATORS, Operator, operators_for,
};
pub use options::{
  AttributeOption, GroupOption, OptionCatalogs, PersonOption,
  RelationshipKind, RelationshipOption, attribute_values,
};
