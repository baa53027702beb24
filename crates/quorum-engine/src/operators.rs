//! The operator vocabulary and its per-type, per-cardinality catalog.

use quorum_core::DataType;
use serde::{Deserialize, Serialize};

/// A comparison operator. The `Display` form is the label shown in operator
/// dropdowns and chips.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
  #[strum(serialize = "is")]
  Is,
  #[strum(serialize = "is not")]
  IsNot,
  #[strum(serialize = "contains")]
  Contains,
  #[strum(serialize = "does not contain")]
  DoesNotContain,
  #[strum(serialize = "greater than")]
  GreaterThan,
  #[strum(serialize = "less than")]
  LessThan,
  #[strum(serialize = "before")]
  Before,
  #[strum(serialize = "after")]
  After,
  #[strum(serialize = "is one of")]
  IsOneOf,
  #[strum(serialize = "is all of")]
  IsAllOf,
}

/// The fixed pair for relationship, group, and person filters, which never
/// become multi-valued.
pub const IDENTITY_OPERATORS: [Operator; 2] = [Operator::Is, Operator::IsNot];

/// The override set for any attribute filter holding two or more values.
pub const MULTI_VALUE_OPERATORS: [Operator; 3] =
  [Operator::IsOneOf, Operator::IsAllOf, Operator::IsNot];

/// Legal operators for an attribute filter of the given data type and value
/// cardinality. Cardinality ≥ 2 overrides the base set regardless of type;
/// dropping back to one value restores it.
pub fn operators_for(data_type: DataType, cardinality: usize) -> Vec<Operator> {
  use Operator::*;

  if cardinality >= 2 {
    return MULTI_VALUE_OPERATORS.to_vec();
  }
  match data_type {
    DataType::Text => vec![Is, IsNot, Contains, DoesNotContain],
    DataType::Number => vec![Is, IsNot, GreaterThan, LessThan],
    DataType::Date => vec![Is, IsNot, Before, After],
    DataType::Enum => vec![Is, IsNot],
  }
}
