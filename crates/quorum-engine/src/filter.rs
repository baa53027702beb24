//! The filter model and its mutation protocol.
//!
//! A [`FilterSet`] is the single piece of engine state: an ordered list of
//! [`FilterItem`]s, one per selected predicate. Every mutation is a pure
//! transformation: the set is taken by value and the new set returned, so
//! the host owns persistence across calls.
//!
//! The intricate part is the attribute toggle: one filter per attribute key
//! at any time, promoted from scalar to list shape when a second value is
//! selected and demoted back when the list drops to one entry. Operator and
//! display value are re-derived on every shape change.

use quorum_core::{AttributeKey, Scalar};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  format::{format_count, format_scalar},
  operators::{
    IDENTITY_OPERATORS, MULTI_VALUE_OPERATORS, Operator, operators_for,
  },
  options::{
    AttributeOption, GroupOption, OptionCatalogs, PersonOption,
    RelationshipOption,
  },
};

// ─── Value shape ─────────────────────────────────────────────────────────────

/// A filter's current value. Shape is tied to cardinality: exactly one value
/// is `One`, two or more is `Many`. A filter never holds zero values; it is
/// deleted instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
  One(Scalar),
  Many(Vec<Scalar>),
}

impl FilterValue {
  pub fn cardinality(&self) -> usize {
    match self {
      Self::One(_) => 1,
      Self::Many(values) => values.len(),
    }
  }

  pub fn contains(&self, scalar: &Scalar) -> bool {
    match self {
      Self::One(value) => value == scalar,
      Self::Many(values) => values.contains(scalar),
    }
  }

  pub fn scalars(&self) -> &[Scalar] {
    match self {
      Self::One(value) => std::slice::from_ref(value),
      Self::Many(values) => values,
    }
  }
}

// ─── Subject ─────────────────────────────────────────────────────────────────

/// The four filter categories.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
  #[strum(serialize = "relationship")]
  Relationship,
  #[strum(serialize = "group")]
  Group,
  #[strum(serialize = "attribute")]
  Attribute,
  #[strum(serialize = "person")]
  Person,
}

/// What a filter is about, carrying the originating catalog entry. Fixed at
/// creation; the evaluator pattern-matches this exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "option", rename_all = "snake_case")]
pub enum FilterSubject {
  Relationship(RelationshipOption),
  Group(GroupOption),
  Attribute(AttributeOption),
  Person(PersonOption),
}

impl FilterSubject {
  pub fn category(&self) -> FilterCategory {
    match self {
      Self::Relationship(_) => FilterCategory::Relationship,
      Self::Group(_) => FilterCategory::Group,
      Self::Attribute(_) => FilterCategory::Attribute,
      Self::Person(_) => FilterCategory::Person,
    }
  }

  /// Human label of what is being filtered.
  pub fn label(&self) -> &str {
    match self {
      Self::Relationship(r) => &r.label,
      Self::Group(g) => &g.label,
      Self::Attribute(a) => &a.label,
      Self::Person(p) => &p.label,
    }
  }
}

// ─── Filter item ─────────────────────────────────────────────────────────────

/// One typed predicate clause. Invariants maintained by every mutation:
/// `operator` is a member of `available_operators`, and `display_value` is
/// the current rendering of `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterItem {
  pub id:                  Uuid,
  pub subject:             FilterSubject,
  pub operator:            Operator,
  pub value:               FilterValue,
  pub display_value:       String,
  pub available_operators: Vec<Operator>,
}

impl FilterItem {
  fn for_relationship(option: RelationshipOption) -> Self {
    Self {
      id:                  Uuid::new_v4(),
      operator:            Operator::Is,
      value:               FilterValue::One(Scalar::Text(option.id.clone())),
      display_value:       option.label.clone(),
      available_operators: IDENTITY_OPERATORS.to_vec(),
      subject:             FilterSubject::Relationship(option),
    }
  }

  fn for_group(option: GroupOption) -> Self {
    Self {
      id:                  Uuid::new_v4(),
      operator:            Operator::Is,
      value:               FilterValue::One(Scalar::Text(
        option.group_id.clone(),
      )),
      display_value:       option.label.clone(),
      available_operators: IDENTITY_OPERATORS.to_vec(),
      subject:             FilterSubject::Group(option),
    }
  }

  fn for_person(option: PersonOption) -> Self {
    Self {
      id:                  Uuid::new_v4(),
      operator:            Operator::Is,
      value:               FilterValue::One(Scalar::Text(
        option.person_id.clone(),
      )),
      display_value:       option.label.clone(),
      available_operators: IDENTITY_OPERATORS.to_vec(),
      subject:             FilterSubject::Person(option),
    }
  }

  fn for_attribute(option: AttributeOption, value: Scalar) -> Self {
    let key = option.key;
    Self {
      id:                  Uuid::new_v4(),
      operator:            Operator::Is,
      display_value:       format_scalar(key, &value),
      available_operators: operators_for(option.data_type, 1),
      value:               FilterValue::One(value),
      subject:             FilterSubject::Attribute(option),
    }
  }

  fn attribute_key(&self) -> Option<AttributeKey> {
    match &self.subject {
      FilterSubject::Attribute(a) => Some(a.key),
      _ => None,
    }
  }
}

// ─── Toggle events ───────────────────────────────────────────────────────────

/// One checkbox toggle from the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleTarget {
  /// A relationship option id, e.g. `rel-supervisor`.
  Relationship(String),
  /// A group id.
  Group(String),
  /// A person id.
  Person(String),
  /// One candidate value of one attribute.
  AttributeValue { key: AttributeKey, value: Scalar },
}

impl ToggleTarget {
  pub fn attribute(key: AttributeKey, value: impl Into<Scalar>) -> Self {
    Self::AttributeValue { key, value: value.into() }
  }
}

// ─── Filter set ──────────────────────────────────────────────────────────────

/// The ordered collection of active filters for one approval step.
/// Insertion order is display order only; it carries no evaluation weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(Vec<FilterItem>);

impl FilterSet {
  pub fn new() -> Self { Self::default() }

  pub fn iter(&self) -> impl Iterator<Item = &FilterItem> { self.0.iter() }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn get(&self, id: Uuid) -> Option<&FilterItem> {
    self.0.iter().find(|f| f.id == id)
  }

  /// Whether the given toggle target is currently selected. Drives the
  /// checkbox state in the presentation layer.
  pub fn is_selected(&self, target: &ToggleTarget) -> bool {
    match target {
      ToggleTarget::Relationship(id) => self.0.iter().any(|f| {
        matches!(&f.subject, FilterSubject::Relationship(r) if r.id == *id)
      }),
      ToggleTarget::Group(group_id) => self.0.iter().any(|f| {
        matches!(&f.subject, FilterSubject::Group(g) if g.group_id == *group_id)
      }),
      ToggleTarget::Person(person_id) => self.0.iter().any(|f| {
        matches!(
          &f.subject,
          FilterSubject::Person(p) if p.person_id == *person_id
        )
      }),
      ToggleTarget::AttributeValue { key, value } => self.0.iter().any(|f| {
        f.attribute_key() == Some(*key) && f.value.contains(value)
      }),
    }
  }

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Apply one checkbox toggle. Unknown targets and redundant toggles are
  /// no-ops; the catalogs are consulted to resolve the target's descriptor.
  pub fn toggle(
    mut self,
    catalogs: &OptionCatalogs,
    target: ToggleTarget,
    checked: bool,
  ) -> Self {
    match (target, checked) {
      (ToggleTarget::Relationship(id), true) => {
        if !self.is_selected(&ToggleTarget::Relationship(id.clone()))
          && let Some(option) = catalogs.relationship(&id)
        {
          self.0.push(FilterItem::for_relationship(option.clone()));
        }
        self
      }
      (ToggleTarget::Relationship(id), false) => {
        self.0.retain(|f| {
          !matches!(&f.subject, FilterSubject::Relationship(r) if r.id == id)
        });
        self
      }
      (ToggleTarget::Group(group_id), true) => {
        if !self.is_selected(&ToggleTarget::Group(group_id.clone()))
          && let Some(option) = catalogs.group(&group_id)
        {
          self.0.push(FilterItem::for_group(option.clone()));
        }
        self
      }
      (ToggleTarget::Group(group_id), false) => {
        self.0.retain(|f| {
          !matches!(
            &f.subject,
            FilterSubject::Group(g) if g.group_id == group_id
          )
        });
        self
      }
      (ToggleTarget::Person(person_id), true) => {
        if !self.is_selected(&ToggleTarget::Person(person_id.clone()))
          && let Some(option) = catalogs.person(&person_id)
        {
          self.0.push(FilterItem::for_person(option.clone()));
        }
        self
      }
      (ToggleTarget::Person(person_id), false) => {
        self.0.retain(|f| {
          !matches!(
            &f.subject,
            FilterSubject::Person(p) if p.person_id == person_id
          )
        });
        self
      }
      (ToggleTarget::AttributeValue { key, value }, true) => {
        self.attribute_on(catalogs, key, value)
      }
      (ToggleTarget::AttributeValue { key, value }, false) => {
        self.attribute_off(key, &value)
      }
    }
  }

  /// Add one attribute value. At most one filter per attribute key exists
  /// at any time; a second value promotes it to list shape.
  fn attribute_on(
    mut self,
    catalogs: &OptionCatalogs,
    key: AttributeKey,
    value: Scalar,
  ) -> Self {
    let Some(option) = catalogs.attribute(key) else {
      return self;
    };

    let Some(pos) =
      self.0.iter().position(|f| f.attribute_key() == Some(key))
    else {
      self.0.push(FilterItem::for_attribute(option.clone(), value));
      return self;
    };
    let item = &mut self.0[pos];

    let mut promoted: Option<Vec<Scalar>> = None;
    match &mut item.value {
      FilterValue::One(current) => {
        if *current != value {
          promoted = Some(vec![current.clone(), value]);
        }
      }
      FilterValue::Many(values) => {
        // Set semantics: a duplicate toggle-on is a no-op.
        if !values.contains(&value) {
          values.push(value);
          item.display_value = format_count(values.len(), key.label());
        }
      }
    }
    if let Some(values) = promoted {
      item.operator = Operator::IsOneOf;
      item.available_operators = MULTI_VALUE_OPERATORS.to_vec();
      item.display_value = format_count(values.len(), key.label());
      item.value = FilterValue::Many(values);
    }
    self
  }

  /// Remove one attribute value. Dropping to a single value demotes the
  /// filter back to scalar shape with operator `is`; dropping to zero
  /// deletes it.
  fn attribute_off(mut self, key: AttributeKey, value: &Scalar) -> Self {
    let Some(pos) =
      self.0.iter().position(|f| f.attribute_key() == Some(key))
    else {
      return self;
    };

    let item = &mut self.0[pos];
    let mut delete = false;
    let mut demoted: Option<Scalar> = None;
    match &mut item.value {
      FilterValue::One(current) => delete = *current == *value,
      FilterValue::Many(values) => {
        values.retain(|v| v != value);
        match values.len() {
          0 => delete = true,
          1 => demoted = Some(values[0].clone()),
          n => item.display_value = format_count(n, key.label()),
        }
      }
    }

    if let Some(only) = demoted {
      // A multi-style operator has no meaning for a single value; it
      // silently reverts to `is` even if the user had chosen `is all of`.
      item.operator = Operator::Is;
      item.available_operators = operators_for(key.data_type(), 1);
      item.display_value = format_scalar(key, &only);
      item.value = FilterValue::One(only);
    }
    if delete {
      self.0.remove(pos);
    }
    self
  }

  /// Change a filter's operator. Operators outside the filter's available
  /// set are ignored; the engine does not trust the UI to offer only
  /// legal ones.
  pub fn change_operator(mut self, id: Uuid, operator: Operator) -> Self {
    if let Some(item) = self.0.iter_mut().find(|f| f.id == id) {
      if item.available_operators.contains(&operator) {
        item.operator = operator;
      } else {
        tracing::debug!(
          filter = %id,
          %operator,
          "ignoring operator outside the available set"
        );
      }
    }
    self
  }

  /// Delete a filter by id, regardless of category or shape.
  pub fn remove(mut self, id: Uuid) -> Self {
    self.0.retain(|f| f.id != id);
    self
  }

  /// Drop every filter.
  pub fn clear(self) -> Self { Self::new() }
}

impl<'a> IntoIterator for &'a FilterSet {
  type IntoIter = std::slice::Iter<'a, FilterItem>;
  type Item = &'a FilterItem;

  fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}
