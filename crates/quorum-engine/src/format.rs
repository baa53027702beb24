//! Display formatting for filter values.
//!
//! Pure functions, re-applied by every mutation so a filter's
//! `display_value` never goes stale.

use quorum_core::{AttributeKey, Scalar};

/// Render one scalar for display on a chip.
///
/// Probation lengths and weekly hours get their unit suffix; dates render as
/// `DD Mon YYYY`; everything else is the scalar's plain string form.
pub fn format_scalar(key: AttributeKey, value: &Scalar) -> String {
  match (key, value) {
    (AttributeKey::ProbationLength, v) => format!("{v} months"),
    (AttributeKey::WeeklyHours, v) => format!("{v} hours"),
    (_, Scalar::Date(d)) => d.format("%d %b %Y").to_string(),
    (_, v) => v.to_string(),
  }
}

/// Count summary for a multi-valued filter, e.g. `"3 workplaces"`.
///
/// The label is lowercased and pluralised by appending `s` unless it already
/// ends in one.
pub fn format_count(count: usize, label: &str) -> String {
  let label = label.to_lowercase();
  if label.ends_with('s') {
    format!("{count} {label}")
  } else {
    format!("{count} {label}s")
  }
}
