//! Organisational units: departments, teams, and explicit groups.
//!
//! Static reference data, read-only at filter-evaluation time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named department with a lead, referenced from persons by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
  pub id:          String,
  pub name:        String,
  /// Full name of the department lead.
  pub lead:        String,
  pub description: String,
}

/// A team inside a department, referenced from persons by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
  pub id:          String,
  pub name:        String,
  /// Full name of the team lead.
  pub lead:        String,
  /// Name of the parent department.
  pub department:  String,
  pub description: String,
}

/// The fixed taxonomy of explicit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupCategory {
  Functional,
  Geographic,
  Leadership,
  Project,
  #[serde(rename = "Special Interest")]
  SpecialInterest,
}

/// An explicit named collection of persons, distinct from departments and
/// teams. Member ids should reference existing persons, but dangling ids are
/// tolerated; they degrade to "member not found".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
  pub id:           String,
  pub name:         String,
  pub description:  String,
  pub category:     GroupCategory,
  /// Person ids.
  pub members:      Vec<String>,
  pub created_date: NaiveDate,
  pub is_active:    bool,
}
