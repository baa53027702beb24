//! Option generation: the four browsable catalogs derived from a roster.
//!
//! Relationship and attribute catalogs are fixed configuration; group and
//! person catalogs are one entry per roster entity. Generation is a pure,
//! total function: an empty roster yields empty group/person catalogs and
//! the fixed catalogs unchanged.

use std::cmp::Ordering;

use quorum_core::{
  AttributeKey, DataType, GroupCategory, Roster, Scalar,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

// ─── Relationship options ────────────────────────────────────────────────────

/// The fixed set of approver relationships, resolved relative to the
/// requester whose approval chain is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
  Supervisor,
  SecondarySupervisor,
  /// The supervisor's supervisor.
  SkipLevel,
  TeamLead,
  DepartmentLead,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipOption {
  pub id:          String,
  pub kind:        RelationshipKind,
  pub label:       String,
  /// Describes the target role, for UI hinting.
  pub description: String,
}

fn relationship_catalog() -> Vec<RelationshipOption> {
  let entry = |id: &str, kind, label: &str, description: &str| {
    RelationshipOption {
      id: id.to_owned(),
      kind,
      label: label.to_owned(),
      description: description.to_owned(),
    }
  };
  vec![
    entry(
      "rel-supervisor",
      RelationshipKind::Supervisor,
      "Supervisor",
      "The requester's direct supervisor",
    ),
    entry(
      "rel-secondary-supervisor",
      RelationshipKind::SecondarySupervisor,
      "Secondary supervisor",
      "The requester's secondary supervisor, if assigned",
    ),
    entry(
      "rel-skip-level",
      RelationshipKind::SkipLevel,
      "Supervisor's supervisor",
      "One level above the direct supervisor",
    ),
    entry(
      "rel-team-lead",
      RelationshipKind::TeamLead,
      "Team lead",
      "The lead of the requester's team",
    ),
    entry(
      "rel-department-lead",
      RelationshipKind::DepartmentLead,
      "Department lead",
      "The lead of the requester's department",
    ),
  ]
}

// ─── Group options ───────────────────────────────────────────────────────────

/// One selectable explicit group. Departments and teams are deliberately not
/// part of this catalog; they are reachable through attribute filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupOption {
  pub id:           String,
  pub group_id:     String,
  pub label:        String,
  pub member_count: usize,
  pub category:     GroupCategory,
  pub description:  String,
}

// ─── Attribute options ───────────────────────────────────────────────────────

/// One filterable person attribute, from the fixed configuration catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeOption {
  pub id:              String,
  pub key:             AttributeKey,
  pub label:           String,
  pub data_type:       DataType,
  /// Closed legal-value list; empty unless `data_type` is `Enum`.
  pub possible_values: Vec<String>,
  pub description:     String,
}

impl AttributeOption {
  pub fn for_key(key: AttributeKey) -> Self {
    Self {
      id:              format!("attr-{key}"),
      key,
      label:           key.label().to_owned(),
      data_type:       key.data_type(),
      possible_values: key
        .enum_values()
        .iter()
        .map(|v| (*v).to_owned())
        .collect(),
      description:     key.description().to_owned(),
    }
  }
}

// ─── Person options ──────────────────────────────────────────────────────────

/// One directly selectable person. Carries position/department/team/email
/// for search matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonOption {
  pub id:         String,
  pub person_id:  String,
  pub label:      String,
  pub name:       String,
  pub position:   String,
  pub department: String,
  pub team:       String,
  pub email:      String,
}

// ─── Catalogs ────────────────────────────────────────────────────────────────

/// The four browsable option families presented by the filter UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionCatalogs {
  pub relationships: Vec<RelationshipOption>,
  pub groups:        Vec<GroupOption>,
  pub attributes:    Vec<AttributeOption>,
  pub people:        Vec<PersonOption>,
}

impl OptionCatalogs {
  /// Derive the catalogs from a roster snapshot.
  pub fn generate(roster: &Roster) -> Self {
    let groups = roster
      .groups
      .iter()
      .map(|g| GroupOption {
        id:           format!("group-{}", g.id),
        group_id:     g.id.clone(),
        label:        g.name.clone(),
        member_count: g.members.len(),
        category:     g.category,
        description:  g.description.clone(),
      })
      .collect();

    let attributes =
      AttributeKey::iter().map(AttributeOption::for_key).collect();

    let people = roster
      .people
      .iter()
      .map(|p| PersonOption {
        id:         format!("person-{}", p.id),
        person_id:  p.id.clone(),
        label:      format!("{} ({})", p.full_name(), p.position),
        name:       p.full_name(),
        position:   p.position.clone(),
        department: p.department.clone(),
        team:       p.team.clone(),
        email:      p.email.clone(),
      })
      .collect();

    Self {
      relationships: relationship_catalog(),
      groups,
      attributes,
      people,
    }
  }

  // ── Lookups used by the mutation protocol ─────────────────────────────

  pub fn relationship(&self, id: &str) -> Option<&RelationshipOption> {
    self.relationships.iter().find(|r| r.id == id)
  }

  pub fn group(&self, group_id: &str) -> Option<&GroupOption> {
    self.groups.iter().find(|g| g.group_id == group_id)
  }

  pub fn attribute(&self, key: AttributeKey) -> Option<&AttributeOption> {
    self.attributes.iter().find(|a| a.key == key)
  }

  pub fn person(&self, person_id: &str) -> Option<&PersonOption> {
    self.people.iter().find(|p| p.person_id == person_id)
  }

  // ── Search ────────────────────────────────────────────────────────────

  /// Narrow every catalog to options matching `query` (case-insensitive
  /// substring over labels and search fields). Affects only what is shown;
  /// never filter semantics. An empty query returns everything.
  pub fn search(&self, query: &str) -> Self {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
      return self.clone();
    }
    let hit = |s: &str| s.to_lowercase().contains(&q);

    Self {
      relationships: self
        .relationships
        .iter()
        .filter(|r| hit(&r.label) || hit(&r.description))
        .cloned()
        .collect(),
      groups:        self
        .groups
        .iter()
        .filter(|g| hit(&g.label) || hit(&g.description))
        .cloned()
        .collect(),
      attributes:    self
        .attributes
        .iter()
        .filter(|a| hit(&a.label) || hit(&a.description))
        .cloned()
        .collect(),
      people:        self
        .people
        .iter()
        .filter(|p| {
          hit(&p.name)
            || hit(&p.email)
            || hit(&p.position)
            || hit(&p.team)
            || hit(&p.department)
        })
        .cloned()
        .collect(),
    }
  }
}

// ─── Candidate values ────────────────────────────────────────────────────────

/// Candidate values for one attribute's pick-list.
///
/// Enum keys return their closed legal list; other keys the distinct values
/// present in the live person set, sorted.
pub fn attribute_values(roster: &Roster, key: AttributeKey) -> Vec<Scalar> {
  if key.data_type() == DataType::Enum {
    return key
      .enum_values()
      .iter()
      .map(|v| Scalar::Text((*v).to_owned()))
      .collect();
  }

  let mut values: Vec<Scalar> = Vec::new();
  for person in &roster.people {
    if let Some(value) = person.attribute(key)
      && !values.contains(&value)
    {
      values.push(value);
    }
  }
  values.sort_by(scalar_order);
  values
}

/// Total order over candidate scalars: numbers and dates by magnitude, text
/// lexically; mixed kinds fall back to their rendered form.
fn scalar_order(a: &Scalar, b: &Scalar) -> Ordering {
  match (a, b) {
    (Scalar::Number(x), Scalar::Number(y)) => {
      x.partial_cmp(y).unwrap_or(Ordering::Equal)
    }
    (Scalar::Date(x), Scalar::Date(y)) => x.cmp(y),
    (Scalar::Text(x), Scalar::Text(y)) => x.cmp(y),
    _ => a.to_string().cmp(&b.to_string()),
  }
}
