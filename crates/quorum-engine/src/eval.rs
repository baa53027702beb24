//! The predicate evaluator decides whether a person satisfies a filter,
//! and whether they satisfy a whole step's filter set.
//!
//! Relationship filters are resolved relative to a requester anchor (the
//! employee whose approval chain is being built); without one they fail
//! closed. Unsupported operator/shape combinations also fail closed; the
//! engine never crashes on a malformed predicate, it just refuses to match.

use quorum_core::{Person, Roster, Scalar};
use serde::{Deserialize, Serialize};

use crate::{
  filter::{FilterItem, FilterSet, FilterSubject, FilterValue},
  operators::Operator,
  options::{AttributeOption, RelationshipKind},
};

// ─── Combination mode ────────────────────────────────────────────────────────

/// How a step combines its filters: every filter must match, or any one.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
pub enum CombineMode {
  /// Logical AND. Vacuously true for an empty filter set.
  #[strum(serialize = "all")]
  All,
  /// Logical OR. False for an empty filter set.
  #[strum(serialize = "any")]
  Any,
}

// ─── Evaluator ───────────────────────────────────────────────────────────────

/// Evaluates filters against persons from one roster snapshot.
///
/// The roster is needed beyond the single person under test: skip-level,
/// team-lead and department-lead relationships require walking supervisor
/// chains and org-unit records.
pub struct Evaluator<'a> {
  roster:    &'a Roster,
  requester: Option<&'a Person>,
}

impl<'a> Evaluator<'a> {
  pub fn new(roster: &'a Roster) -> Self {
    Self { roster, requester: None }
  }

  /// Anchor relationship filters at the given requester.
  pub fn with_requester(mut self, requester: &'a Person) -> Self {
    self.requester = Some(requester);
    self
  }

  /// Whether `person` satisfies every (`All`) or any (`Any`) filter.
  pub fn evaluate(
    &self,
    person: &Person,
    filters: &FilterSet,
    mode: CombineMode,
  ) -> bool {
    match mode {
      CombineMode::All => {
        filters.iter().all(|f| self.filter_matches(person, f))
      }
      CombineMode::Any => {
        filters.iter().any(|f| self.filter_matches(person, f))
      }
    }
  }

  /// Collect the people that satisfy the filter set.
  pub fn eligible<'p>(
    &self,
    people: impl IntoIterator<Item = &'p Person>,
    filters: &FilterSet,
    mode: CombineMode,
  ) -> Vec<&'p Person> {
    people
      .into_iter()
      .filter(|p| self.evaluate(p, filters, mode))
      .collect()
  }

  /// Whether `person` satisfies one filter.
  pub fn filter_matches(&self, person: &Person, filter: &FilterItem) -> bool {
    match &filter.subject {
      FilterSubject::Attribute(option) => {
        self.attribute_matches(person, option, filter.operator, &filter.value)
      }
      FilterSubject::Group(option) => identity(
        filter.operator,
        person.groups.contains(&option.group_id),
      ),
      FilterSubject::Person(option) => {
        identity(filter.operator, person.id == option.person_id)
      }
      FilterSubject::Relationship(option) => identity(
        filter.operator,
        self.relationship_matches(person, option.kind),
      ),
    }
  }

  // ── Attribute dispatch ────────────────────────────────────────────────

  fn attribute_matches(
    &self,
    person: &Person,
    option: &AttributeOption,
    operator: Operator,
    value: &FilterValue,
  ) -> bool {
    // A missing value (unset contract end date) fails closed.
    let Some(actual) = person.attribute(option.key) else {
      return false;
    };

    match (operator, value) {
      (Operator::Is, FilterValue::One(expected)) => {
        scalar_eq(&actual, expected)
      }
      (Operator::IsNot, FilterValue::One(expected)) => {
        !scalar_eq(&actual, expected)
      }
      (Operator::Contains, FilterValue::One(expected)) => {
        contains_ci(&actual, expected)
      }
      (Operator::DoesNotContain, FilterValue::One(expected)) => {
        !contains_ci(&actual, expected)
      }
      (Operator::GreaterThan, FilterValue::One(expected)) => {
        numeric(&actual, expected).is_some_and(|(a, b)| a > b)
      }
      (Operator::LessThan, FilterValue::One(expected)) => {
        numeric(&actual, expected).is_some_and(|(a, b)| a < b)
      }
      (Operator::Before, FilterValue::One(expected)) => {
        dates(&actual, expected).is_some_and(|(a, b)| a < b)
      }
      (Operator::After, FilterValue::One(expected)) => {
        dates(&actual, expected).is_some_and(|(a, b)| a > b)
      }
      (Operator::IsOneOf, FilterValue::Many(values)) => {
        values.iter().any(|v| scalar_eq(&actual, v))
      }
      // `is not` over a list means "none of".
      (Operator::IsNot, FilterValue::Many(values)) => {
        !values.iter().any(|v| scalar_eq(&actual, v))
      }
      // `is all of` only has meaning for set-valued attributes; no scalar
      // person attribute can equal several values at once.
      (Operator::IsAllOf, _) => false,
      (operator, _) => {
        tracing::warn!(
          attribute = %option.key,
          %operator,
          "unsupported operator/shape combination, failing closed"
        );
        false
      }
    }
  }

  // ── Relationship resolution ───────────────────────────────────────────

  /// Whether `person` stands in the given relationship to the requester.
  ///
  /// Supervisor links are full-name references; a missing anchor, a broken
  /// supervisor chain, or an unknown org unit all resolve to no match.
  fn relationship_matches(
    &self,
    person: &Person,
    kind: RelationshipKind,
  ) -> bool {
    let Some(requester) = self.requester else {
      return false;
    };
    let name = person.full_name();

    match kind {
      RelationshipKind::Supervisor => name == requester.supervisor,
      RelationshipKind::SecondarySupervisor => {
        requester.secondary_supervisor.as_deref() == Some(name.as_str())
      }
      // One more hop up the supervisor name chain.
      RelationshipKind::SkipLevel => self
        .roster
        .person_by_name(&requester.supervisor)
        .is_some_and(|supervisor| name == supervisor.supervisor),
      RelationshipKind::TeamLead => self
        .roster
        .team_named(&requester.team)
        .is_some_and(|team| name == team.lead),
      RelationshipKind::DepartmentLead => self
        .roster
        .department_named(&requester.department)
        .is_some_and(|department| name == department.lead),
    }
  }
}

// ─── Scalar comparison helpers ───────────────────────────────────────────────

/// Equality with cross-kind coercion: text that parses as the other side's
/// number or date compares by value.
fn scalar_eq(a: &Scalar, b: &Scalar) -> bool {
  if a == b {
    return true;
  }
  if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
    return x == y;
  }
  matches!((a.as_date(), b.as_date()), (Some(x), Some(y)) if x == y)
}

fn contains_ci(haystack: &Scalar, needle: &Scalar) -> bool {
  haystack
    .to_string()
    .to_lowercase()
    .contains(&needle.to_string().to_lowercase())
}

fn numeric(a: &Scalar, b: &Scalar) -> Option<(f64, f64)> {
  Some((a.as_number()?, b.as_number()?))
}

fn dates(
  a: &Scalar,
  b: &Scalar,
) -> Option<(chrono::NaiveDate, chrono::NaiveDate)> {
  Some((a.as_date()?, b.as_date()?))
}

/// The fixed `is` / `is not` pair used by relationship, group, and person
/// filters. Any other operator on these categories fails closed.
fn identity(operator: Operator, hit: bool) -> bool {
  match operator {
    Operator::Is => hit,
    Operator::IsNot => !hit,
    operator => {
      tracing::warn!(%operator, "identity filter with non-identity operator");
      false
    }
  }
}

#[cfg(test)]
mod tests {
  use quorum_core::AttributeKey;
  use uuid::Uuid;

  use super::*;
  use crate::{
    filter::ToggleTarget, options::OptionCatalogs, testutil::sample_roster,
  };

  fn fixture() -> (Roster, OptionCatalogs) {
    let roster = sample_roster();
    let catalogs = OptionCatalogs::generate(&roster);
    (roster, catalogs)
  }

  fn single(set: &FilterSet) -> &FilterItem {
    assert_eq!(set.len(), 1);
    set.iter().next().unwrap()
  }

  #[test]
  fn attribute_number_comparison() {
    let (roster, catalogs) = fixture();
    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::attribute(AttributeKey::WeeklyHours, 35.0),
      true,
    );
    let id = single(&set).id;
    let set = set.change_operator(id, Operator::GreaterThan);

    let eval = Evaluator::new(&roster);
    let lena = roster.person("emp-001").unwrap(); // 40 hours
    let ana = roster.person("emp-005").unwrap(); // 20 hours
    assert!(eval.filter_matches(lena, single(&set)));
    assert!(!eval.filter_matches(ana, single(&set)));
  }

  #[test]
  fn attribute_is_one_of_excludes_other_values() {
    let (roster, catalogs) = fixture();
    let set = FilterSet::new()
      .toggle(
        &catalogs,
        ToggleTarget::attribute(AttributeKey::EmploymentStatus, "Full time"),
        true,
      )
      .toggle(
        &catalogs,
        ToggleTarget::attribute(AttributeKey::EmploymentStatus, "Part time"),
        true,
      );

    let eval = Evaluator::new(&roster);
    let lena = roster.person("emp-001").unwrap(); // Full time
    let ana = roster.person("emp-005").unwrap(); // Working student
    assert!(eval.filter_matches(lena, single(&set)));
    assert!(!eval.filter_matches(ana, single(&set)));
  }

  #[test]
  fn attribute_is_not_over_a_list_means_none_of() {
    let (roster, catalogs) = fixture();
    let set = FilterSet::new()
      .toggle(
        &catalogs,
        ToggleTarget::attribute(AttributeKey::EmploymentStatus, "Full time"),
        true,
      )
      .toggle(
        &catalogs,
        ToggleTarget::attribute(AttributeKey::EmploymentStatus, "Part time"),
        true,
      );
    let id = single(&set).id;
    let set = set.change_operator(id, Operator::IsNot);

    let eval = Evaluator::new(&roster);
    let lena = roster.person("emp-001").unwrap(); // Full time
    let ana = roster.person("emp-005").unwrap(); // Working student
    assert!(!eval.filter_matches(lena, single(&set)));
    assert!(eval.filter_matches(ana, single(&set)));
  }

  #[test]
  fn attribute_contains_is_case_insensitive() {
    let (roster, catalogs) = fixture();
    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::attribute(AttributeKey::Position, "engineer"),
      true,
    );
    let id = single(&set).id;
    let set = set.change_operator(id, Operator::Contains);

    let eval = Evaluator::new(&roster);
    let lena = roster.person("emp-001").unwrap(); // Backend Engineer
    let ana = roster.person("emp-005").unwrap(); // Account Executive
    assert!(eval.filter_matches(lena, single(&set)));
    assert!(!eval.filter_matches(ana, single(&set)));

    let set = set.change_operator(id, Operator::DoesNotContain);
    assert!(!eval.filter_matches(lena, single(&set)));
    assert!(eval.filter_matches(ana, single(&set)));
  }

  #[test]
  fn attribute_date_before_and_after() {
    let (roster, catalogs) = fixture();
    let cutoff = chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::attribute(AttributeKey::HireDate, cutoff),
      true,
    );
    let id = single(&set).id;
    let set = set.change_operator(id, Operator::Before);

    let eval = Evaluator::new(&roster);
    let lena = roster.person("emp-001").unwrap(); // hired 2022
    let ana = roster.person("emp-005").unwrap(); // hired 2024
    assert!(eval.filter_matches(lena, single(&set)));
    assert!(!eval.filter_matches(ana, single(&set)));

    let set = set.change_operator(id, Operator::After);
    assert!(!eval.filter_matches(lena, single(&set)));
    assert!(eval.filter_matches(ana, single(&set)));
  }

  #[test]
  fn missing_attribute_value_fails_closed() {
    let (roster, catalogs) = fixture();
    let end = chrono::NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::attribute(AttributeKey::ContractEndDate, end),
      true,
    );

    let eval = Evaluator::new(&roster);
    // Lena has no contract end date: neither `is` nor `is not` matches.
    let lena = roster.person("emp-001").unwrap();
    assert!(!eval.filter_matches(lena, single(&set)));
    let id = single(&set).id;
    let set = set.change_operator(id, Operator::IsNot);
    assert!(!eval.filter_matches(lena, single(&set)));
  }

  #[test]
  fn group_membership_with_dangling_ids() {
    let (roster, catalogs) = fixture();
    let eval = Evaluator::new(&roster);
    let jonas = roster.person("emp-002").unwrap();
    let lena = roster.person("emp-001").unwrap();

    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::Group("grp-works-council".into()),
      true,
    );
    assert!(eval.filter_matches(jonas, single(&set)));
    assert!(!eval.filter_matches(lena, single(&set)));
  }

  #[test]
  fn person_filter_is_and_is_not() {
    let (roster, catalogs) = fixture();
    let eval = Evaluator::new(&roster);
    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::Person("emp-001".into()),
      true,
    );

    let lena = roster.person("emp-001").unwrap();
    let jonas = roster.person("emp-002").unwrap();
    assert!(eval.filter_matches(lena, single(&set)));
    assert!(!eval.filter_matches(jonas, single(&set)));

    let id = single(&set).id;
    let set = set.change_operator(id, Operator::IsNot);
    assert!(!eval.filter_matches(lena, single(&set)));
    assert!(eval.filter_matches(jonas, single(&set)));
  }

  #[test]
  fn relationship_filters_need_an_anchor() {
    let (roster, catalogs) = fixture();
    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::Relationship("rel-supervisor".into()),
      true,
    );

    let sarah = roster.person("emp-003").unwrap();
    // Without a requester anchor: fail closed.
    assert!(!Evaluator::new(&roster).filter_matches(sarah, single(&set)));

    let lena = roster.person("emp-001").unwrap();
    let eval = Evaluator::new(&roster).with_requester(lena);
    assert!(eval.filter_matches(sarah, single(&set)));
    let jonas = roster.person("emp-002").unwrap();
    assert!(!eval.filter_matches(jonas, single(&set)));
  }

  #[test]
  fn skip_level_walks_one_more_hop() {
    let (roster, catalogs) = fixture();
    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::Relationship("rel-skip-level".into()),
      true,
    );

    let lena = roster.person("emp-001").unwrap();
    let eval = Evaluator::new(&roster).with_requester(lena);
    // Lena → Sarah Müller → Klaus Brandt.
    let klaus = roster.person("emp-004").unwrap();
    let sarah = roster.person("emp-003").unwrap();
    assert!(eval.filter_matches(klaus, single(&set)));
    assert!(!eval.filter_matches(sarah, single(&set)));

    // Klaus reports to a name not in the roster: chain breaks, no match.
    let eval = Evaluator::new(&roster).with_requester(sarah);
    assert!(!eval.filter_matches(klaus, single(&set)));
  }

  #[test]
  fn secondary_supervisor_resolution() {
    let (roster, catalogs) = fixture();
    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::Relationship("rel-secondary-supervisor".into()),
      true,
    );

    // Lena names Klaus as secondary supervisor.
    let lena = roster.person("emp-001").unwrap();
    let klaus = roster.person("emp-004").unwrap();
    let sarah = roster.person("emp-003").unwrap();
    let eval = Evaluator::new(&roster).with_requester(lena);
    assert!(eval.filter_matches(klaus, single(&set)));
    assert!(!eval.filter_matches(sarah, single(&set)));

    // Jonas has none assigned: nobody matches.
    let jonas = roster.person("emp-002").unwrap();
    let eval = Evaluator::new(&roster).with_requester(jonas);
    assert!(!eval.filter_matches(klaus, single(&set)));
  }

  #[test]
  fn team_and_department_lead_resolution() {
    let (roster, catalogs) = fixture();
    let lena = roster.person("emp-001").unwrap();
    let eval = Evaluator::new(&roster).with_requester(lena);

    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::Relationship("rel-team-lead".into()),
      true,
    );
    let sarah = roster.person("emp-003").unwrap();
    assert!(eval.filter_matches(sarah, single(&set)));

    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::Relationship("rel-department-lead".into()),
      true,
    );
    let klaus = roster.person("emp-004").unwrap();
    assert!(eval.filter_matches(klaus, single(&set)));
    assert!(!eval.filter_matches(sarah, single(&set)));
  }

  #[test]
  fn all_and_any_combination_modes() {
    let (roster, catalogs) = fixture();
    let set = FilterSet::new()
      .toggle(
        &catalogs,
        ToggleTarget::attribute(AttributeKey::Workplace, "Berlin"),
        true,
      )
      .toggle(
        &catalogs,
        ToggleTarget::attribute(AttributeKey::WeeklyHours, 35.0),
        true,
      );
    // The workplace filter stays `is`; make hours `greater than`.
    let hours_id = set
      .iter()
      .find(|f| f.subject.label() == "Weekly Hours")
      .unwrap()
      .id;
    let set = set.change_operator(hours_id, Operator::GreaterThan);

    let eval = Evaluator::new(&roster);
    let lena = roster.person("emp-001").unwrap(); // Berlin, 40h
    let jonas = roster.person("emp-002").unwrap(); // Berlin, 32h
    assert!(eval.evaluate(lena, &set, CombineMode::All));
    assert!(!eval.evaluate(jonas, &set, CombineMode::All));
    assert!(eval.evaluate(jonas, &set, CombineMode::Any));
  }

  #[test]
  fn empty_set_is_vacuously_true_for_all_and_false_for_any() {
    let (roster, _) = fixture();
    let eval = Evaluator::new(&roster);
    let lena = roster.person("emp-001").unwrap();
    assert!(eval.evaluate(lena, &FilterSet::new(), CombineMode::All));
    assert!(!eval.evaluate(lena, &FilterSet::new(), CombineMode::Any));
  }

  #[test]
  fn eligible_collects_matching_people() {
    let (roster, catalogs) = fixture();
    let set = FilterSet::new().toggle(
      &catalogs,
      ToggleTarget::Group("grp-oncall".into()),
      true,
    );
    let eval = Evaluator::new(&roster);
    let eligible = eval.eligible(&roster.people, &set, CombineMode::All);
    let ids: Vec<&str> = eligible.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["emp-001", "emp-002"]);
  }

  #[test]
  fn is_all_of_on_a_scalar_attribute_fails_closed() {
    let (roster, catalogs) = fixture();
    let set = FilterSet::new()
      .toggle(
        &catalogs,
        ToggleTarget::attribute(AttributeKey::Workplace, "Berlin"),
        true,
      )
      .toggle(
        &catalogs,
        ToggleTarget::attribute(AttributeKey::Workplace, "Madrid"),
        true,
      );
    let id = set.iter().next().unwrap().id;
    let set = set.change_operator(id, Operator::IsAllOf);

    let eval = Evaluator::new(&roster);
    for person in &roster.people {
      assert!(!eval.filter_matches(person, set.get(id).unwrap()));
    }
  }

  #[test]
  fn unknown_filter_id_lookup() {
    let set = FilterSet::new();
    assert!(set.get(Uuid::new_v4()).is_none());
  }
}
