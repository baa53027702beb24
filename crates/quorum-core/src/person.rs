//! Person records and their classification enums.
//!
//! A person is a flat record as supplied by the roster snapshot; the core
//! never mutates one. Serde names follow the snapshot wire format
//! (camel-case keys, classification values spelled exactly as the source
//! system spells them).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeKey, Scalar};

// ─── Classification enums ────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
pub enum Gender {
  Diverse,
  Female,
  Male,
  Undefined,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
  #[strum(serialize = "internal")]
  Internal,
  #[strum(serialize = "external")]
  External,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
pub enum EmploymentStatus {
  #[serde(rename = "Full time")]
  #[strum(serialize = "Full time")]
  FullTime,
  #[serde(rename = "Part time")]
  #[strum(serialize = "Part time")]
  PartTime,
  #[serde(rename = "Working student")]
  #[strum(serialize = "Working student")]
  WorkingStudent,
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// One roster member. `id` is globally unique; `groups` holds group ids
/// (dangling ids degrade to "not a member" at evaluation time).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  pub id:                   String,
  pub first_name:           String,
  pub last_name:            String,
  pub email:                String,
  pub gender:               Gender,
  pub employment_type:      EmploymentType,
  pub employment_status:    EmploymentStatus,
  pub position:             String,
  pub team:                 String,
  pub department:           String,
  pub weekly_hours:         f64,
  pub workplace:            String,
  /// Full name of the direct supervisor.
  pub supervisor:           String,
  #[serde(default)]
  pub secondary_supervisor: Option<String>,
  pub legal_entity:         String,
  pub hire_date:            NaiveDate,
  /// Probation period in months.
  pub probation_length:     u32,
  #[serde(default)]
  pub contract_end_date:    Option<NaiveDate>,
  pub cost_center:          String,
  /// Ids of the groups this person belongs to.
  #[serde(default)]
  pub groups:               Vec<String>,
}

impl Person {
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }

  /// Read one filterable field as a typed scalar.
  ///
  /// `None` only for an unset contract end date; every other key always
  /// has a value.
  pub fn attribute(&self, key: AttributeKey) -> Option<Scalar> {
    Some(match key {
      AttributeKey::Gender => Scalar::Text(self.gender.to_string()),
      AttributeKey::EmploymentType => {
        Scalar::Text(self.employment_type.to_string())
      }
      AttributeKey::EmploymentStatus => {
        Scalar::Text(self.employment_status.to_string())
      }
      AttributeKey::Position => Scalar::Text(self.position.clone()),
      AttributeKey::WeeklyHours => Scalar::Number(self.weekly_hours),
      AttributeKey::Workplace => Scalar::Text(self.workplace.clone()),
      AttributeKey::LegalEntity => Scalar::Text(self.legal_entity.clone()),
      AttributeKey::ProbationLength => {
        Scalar::Number(f64::from(self.probation_length))
      }
      AttributeKey::CostCenter => Scalar::Text(self.cost_center.clone()),
      AttributeKey::HireDate => Scalar::Date(self.hire_date),
      AttributeKey::ContractEndDate => {
        return self.contract_end_date.map(Scalar::Date);
      }
    })
  }
}
