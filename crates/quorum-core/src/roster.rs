//! The roster container: one immutable snapshot of people and org data.
//!
//! Supplied wholesale by a data-loading collaborator and treated as
//! read-only for the lifetime of a filter session. Lookup accessors that can
//! miss return `Option`; the `require_*` variants map a miss to a crate
//! error for host-level use.

use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  org::{Department, Group, Team},
  person::Person,
};

/// A complete roster snapshot. Serde round-trips as the snapshot wire
/// format consumed by hosts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
  pub people:      Vec<Person>,
  pub departments: Vec<Department>,
  pub teams:       Vec<Team>,
  pub groups:      Vec<Group>,
}

impl Roster {
  /// Parse a roster snapshot from JSON.
  pub fn from_json(input: &str) -> Result<Self> {
    Ok(serde_json::from_str(input)?)
  }

  // ── People ────────────────────────────────────────────────────────────

  pub fn person(&self, id: &str) -> Option<&Person> {
    self.people.iter().find(|p| p.id == id)
  }

  pub fn require_person(&self, id: &str) -> Result<&Person> {
    self.person(id).ok_or_else(|| Error::PersonNotFound(id.to_owned()))
  }

  /// Look up a person by their full name, as used in `supervisor` and lead
  /// fields.
  pub fn person_by_name(&self, full_name: &str) -> Option<&Person> {
    self.people.iter().find(|p| p.full_name() == full_name)
  }

  // ── Org units ─────────────────────────────────────────────────────────

  pub fn team_named(&self, name: &str) -> Option<&Team> {
    self.teams.iter().find(|t| t.name == name)
  }

  pub fn department_named(&self, name: &str) -> Option<&Department> {
    self.departments.iter().find(|d| d.name == name)
  }

  // ── Groups ────────────────────────────────────────────────────────────

  pub fn group(&self, id: &str) -> Option<&Group> {
    self.groups.iter().find(|g| g.id == id)
  }

  pub fn require_group(&self, id: &str) -> Result<&Group> {
    self.group(id).ok_or_else(|| Error::GroupNotFound(id.to_owned()))
  }

  /// Resolve a group's member list to person records, skipping dangling ids.
  pub fn members_of(&self, group_id: &str) -> Vec<&Person> {
    let Some(group) = self.group(group_id) else {
      return Vec::new();
    };
    group
      .members
      .iter()
      .filter_map(|id| self.person(id))
      .collect()
  }
}
