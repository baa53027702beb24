//! Core roster types for the Quorum approver-filter engine.
//!
//! This crate is the data model only: people, organisational units, groups,
//! and the attribute catalog that describes which person fields can be
//! filtered on. It carries no filter logic; that lives in `quorum-engine`.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod attribute;
pub mod error;
pub mod org;
pub mod person;
pub mod roster;

pub use attribute::{AttributeKey, DataType, Scalar};
pub use error::{Error, Result};
pub use org::{Department, Group, GroupCategory, Team};
pub use person::{EmploymentStatus, EmploymentType, Gender, Person};
pub use roster::Roster;
