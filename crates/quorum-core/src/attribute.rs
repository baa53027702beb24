//! The attribute catalog: which person fields can be filtered on, and the
//! typed scalar values they produce.
//!
//! The catalog is fixed configuration, not derived from the schema. Candidate
//! *values* for non-enum attributes are derived from the live person set at
//! query time (see `quorum-engine`).

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─── Data types ──────────────────────────────────────────────────────────────

/// The comparison domain of an attribute. Drives which operators are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
  Text,
  Number,
  Date,
  /// A closed set of legal values; listed in [`AttributeKey::enum_values`].
  Enum,
}

// ─── Attribute keys ──────────────────────────────────────────────────────────

/// One filterable [`Person`](crate::person::Person) field.
///
/// The string form (serde and `FromStr`/`Display`) is the camel-case key used
/// in roster snapshots and serialized filter sets.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKey {
  #[strum(serialize = "gender")]
  Gender,
  #[strum(serialize = "employmentType")]
  EmploymentType,
  #[strum(serialize = "employmentStatus")]
  EmploymentStatus,
  #[strum(serialize = "position")]
  Position,
  #[strum(serialize = "weeklyHours")]
  WeeklyHours,
  #[strum(serialize = "workplace")]
  Workplace,
  #[strum(serialize = "legalEntity")]
  LegalEntity,
  #[strum(serialize = "probationLength")]
  ProbationLength,
  #[strum(serialize = "costCenter")]
  CostCenter,
  #[strum(serialize = "hireDate")]
  HireDate,
  #[strum(serialize = "contractEndDate")]
  ContractEndDate,
}

impl AttributeKey {
  /// Human display label, as shown on filter chips.
  pub fn label(self) -> &'static str {
    match self {
      Self::Gender => "Gender",
      Self::EmploymentType => "Employment Type",
      Self::EmploymentStatus => "Employment Status",
      Self::Position => "Position",
      Self::WeeklyHours => "Weekly Hours",
      Self::Workplace => "Workplace",
      Self::LegalEntity => "Legal Entity",
      Self::ProbationLength => "Probation Length",
      Self::CostCenter => "Cost Center",
      Self::HireDate => "Hire Date",
      Self::ContractEndDate => "Contract End Date",
    }
  }

  pub fn data_type(self) -> DataType {
    match self {
      Self::Gender | Self::EmploymentType | Self::EmploymentStatus => {
        DataType::Enum
      }
      Self::Position
      | Self::Workplace
      | Self::LegalEntity
      | Self::CostCenter => DataType::Text,
      Self::WeeklyHours | Self::ProbationLength => DataType::Number,
      Self::HireDate | Self::ContractEndDate => DataType::Date,
    }
  }

  /// UI hint describing what the attribute filters by.
  pub fn description(self) -> &'static str {
    match self {
      Self::Gender => "Filter by gender identity",
      Self::EmploymentType => "Filter by employment relationship",
      Self::EmploymentStatus => "Filter by work schedule",
      Self::Position => "Filter by job title",
      Self::WeeklyHours => "Filter by weekly work hours",
      Self::Workplace => "Filter by office location",
      Self::LegalEntity => "Filter by company legal structure",
      Self::ProbationLength => "Filter by probation period in months",
      Self::CostCenter => "Filter by financial cost center",
      Self::HireDate => "Filter by employment start date",
      Self::ContractEndDate => "Filter by contract end date",
    }
  }

  /// The closed legal-value list for enum-typed keys; empty otherwise.
  pub fn enum_values(self) -> &'static [&'static str] {
    match self {
      Self::Gender => &["Diverse", "Female", "Male", "Undefined"],
      Self::EmploymentType => &["internal", "external"],
      Self::EmploymentStatus => {
        &["Full time", "Part time", "Working student"]
      }
      _ => &[],
    }
  }

  /// Parse a camel-case key string, mapping failure to a crate error.
  pub fn parse(s: &str) -> crate::Result<Self> {
    Self::from_str(s).map_err(|_| Error::UnknownAttributeKey(s.to_owned()))
  }
}

// ─── Scalar values ───────────────────────────────────────────────────────────

/// A single typed attribute value, as read from a person or held by a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Scalar {
  Text(String),
  Number(f64),
  Date(NaiveDate),
}

impl Scalar {
  /// Numeric view; text that parses as a number coerces.
  pub fn as_number(&self) -> Option<f64> {
    match self {
      Self::Number(n) => Some(*n),
      Self::Text(s) => s.trim().parse().ok(),
      Self::Date(_) => None,
    }
  }

  /// Date view; text in ISO `YYYY-MM-DD` form coerces.
  pub fn as_date(&self) -> Option<NaiveDate> {
    match self {
      Self::Date(d) => Some(*d),
      Self::Text(s) => NaiveDate::from_str(s.trim()).ok(),
      Self::Number(_) => None,
    }
  }
}

impl std::fmt::Display for Scalar {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Text(s) => f.write_str(s),
      // Integral numbers render without a trailing `.0`.
      Self::Number(n) if n.fract() == 0.0 && n.is_finite() => {
        write!(f, "{}", *n as i64)
      }
      Self::Number(n) => write!(f, "{n}"),
      Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
    }
  }
}

impl From<&str> for Scalar {
  fn from(s: &str) -> Self { Self::Text(s.to_owned()) }
}

impl From<f64> for Scalar {
  fn from(n: f64) -> Self { Self::Number(n) }
}

impl From<NaiveDate> for Scalar {
  fn from(d: NaiveDate) -> Self { Self::Date(d) }
}
