//! Shared roster fixture for the engine's unit tests.

use chrono::NaiveDate;
use quorum_core::{
  Department, EmploymentStatus, EmploymentType, Gender, Group, GroupCategory,
  Person, Roster, Team,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct PersonSpec {
  id:         &'static str,
  first:      &'static str,
  last:       &'static str,
  position:   &'static str,
  team:       &'static str,
  department: &'static str,
  hours:      f64,
  workplace:  &'static str,
  supervisor: &'static str,
  status:     EmploymentStatus,
  hired:      NaiveDate,
  groups:     &'static [&'static str],
}

fn person(spec: PersonSpec) -> Person {
  Person {
    id:                   spec.id.into(),
    first_name:           spec.first.into(),
    last_name:            spec.last.into(),
    email:                format!(
      "{}.{}@example.com",
      spec.first.to_lowercase(),
      spec.last.to_lowercase()
    ),
    gender:               Gender::Undefined,
    employment_type:      EmploymentType::Internal,
    employment_status:    spec.status,
    position:             spec.position.into(),
    team:                 spec.team.into(),
    department:           spec.department.into(),
    weekly_hours:         spec.hours,
    workplace:            spec.workplace.into(),
    supervisor:           spec.supervisor.into(),
    secondary_supervisor: None,
    legal_entity:         "Acme GmbH".into(),
    hire_date:            spec.hired,
    probation_length:     6,
    contract_end_date:    None,
    cost_center:          "CC-100".into(),
    groups:               spec.groups.iter().map(|g| (*g).into()).collect(),
  }
}

/// A small but complete roster: a supervisor chain (Lena → Sarah → Klaus),
/// two org units with leads, and groups with one dangling member id.
pub fn sample_roster() -> Roster {
  let mut lena = person(PersonSpec {
    id:         "emp-001",
    first:      "Lena",
    last:       "Fischer",
    position:   "Backend Engineer",
    team:       "Platform",
    department: "Engineering",
    hours:      40.0,
    workplace:  "Berlin",
    supervisor: "Sarah Müller",
    status:     EmploymentStatus::FullTime,
    hired:      date(2022, 3, 15),
    groups:     &["grp-oncall"],
  });
  lena.secondary_supervisor = Some("Klaus Brandt".into());

  let jonas = person(PersonSpec {
    id:         "emp-002",
    first:      "Jonas",
    last:       "Weber",
    position:   "Frontend Engineer",
    team:       "Platform",
    department: "Engineering",
    hours:      32.0,
    workplace:  "Berlin",
    supervisor: "Sarah Müller",
    status:     EmploymentStatus::PartTime,
    hired:      date(2023, 9, 1),
    groups:     &["grp-oncall", "grp-works-council"],
  });

  let sarah = person(PersonSpec {
    id:         "emp-003",
    first:      "Sarah",
    last:       "Müller",
    position:   "VP Engineering",
    team:       "Platform",
    department: "Engineering",
    hours:      40.0,
    workplace:  "Berlin",
    supervisor: "Klaus Brandt",
    status:     EmploymentStatus::FullTime,
    hired:      date(2019, 5, 2),
    groups:     &[],
  });

  let klaus = person(PersonSpec {
    id:         "emp-004",
    first:      "Klaus",
    last:       "Brandt",
    position:   "CTO",
    team:       "Leadership",
    department: "Engineering",
    hours:      40.0,
    workplace:  "Berlin",
    supervisor: "CEO", // not a roster member
    status:     EmploymentStatus::FullTime,
    hired:      date(2017, 1, 9),
    groups:     &[],
  });

  let ana = person(PersonSpec {
    id:         "emp-005",
    first:      "Ana",
    last:       "Silva",
    position:   "Account Executive",
    team:       "Accounts",
    department: "Sales",
    hours:      20.0,
    workplace:  "Madrid",
    supervisor: "Klaus Brandt",
    status:     EmploymentStatus::WorkingStudent,
    hired:      date(2024, 2, 19),
    groups:     &[],
  });

  Roster {
    people:      vec![lena, jonas, sarah, klaus, ana],
    departments: vec![
      Department {
        id:          "ENG".into(),
        name:        "Engineering".into(),
        lead:        "Klaus Brandt".into(),
        description: "Software development and operations".into(),
      },
      Department {
        id:          "SALES".into(),
        name:        "Sales".into(),
        lead:        "Ana Silva".into(),
        description: "Sales operations and partnerships".into(),
      },
    ],
    teams:       vec![
      Team {
        id:          "team-platform".into(),
        name:        "Platform".into(),
        lead:        "Sarah Müller".into(),
        department:  "Engineering".into(),
        description: "Core platform and infrastructure".into(),
      },
      Team {
        id:          "team-accounts".into(),
        name:        "Accounts".into(),
        lead:        "Ana Silva".into(),
        department:  "Sales".into(),
        description: "Key account management".into(),
      },
    ],
    groups:      vec![
      Group {
        id:           "grp-oncall".into(),
        name:         "On-call Rotation".into(),
        description:  "Production on-call duty".into(),
        category:     GroupCategory::Functional,
        members:      vec!["emp-001".into(), "emp-002".into()],
        created_date: date(2023, 6, 1),
        is_active:    true,
      },
      Group {
        id:           "grp-works-council".into(),
        name:         "Works Council".into(),
        description:  "Employee representation body".into(),
        category:     GroupCategory::SpecialInterest,
        members:      vec!["emp-002".into(), "emp-ghost".into()],
        created_date: date(2021, 11, 12),
        is_active:    true,
      },
    ],
  }
}
