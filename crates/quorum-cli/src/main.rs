//! `quorum`, the command-line host for the approver-filter engine.
//!
//! Loads a roster snapshot from a JSON file and exposes the engine's
//! read-side surface: browse the option catalogs, list candidate values for
//! an attribute, list group members, and evaluate a stored filter set.
//!
//! # Usage
//!
//! ```
//! quorum options roster.json --query lead
//! quorum values roster.json weeklyHours
//! quorum members roster.json grp-oncall
//! quorum eval roster.json --filters step.json --mode all --requester emp-001
//! ```

use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quorum_core::{AttributeKey, Roster};
use quorum_engine::{
  CombineMode, Evaluator, FilterSet, OptionCatalogs, attribute_values,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
  name = "quorum",
  about = "Approver-filter engine over a personnel roster"
)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Print the four option catalogs derived from the roster.
  Options {
    /// Path to the roster snapshot (JSON).
    roster: PathBuf,

    /// Narrow every catalog to options matching this text.
    #[arg(short, long)]
    query: Option<String>,
  },

  /// Print candidate values for one attribute, e.g. `weeklyHours`.
  Values {
    roster: PathBuf,

    /// Camel-case attribute key.
    attribute: String,
  },

  /// Print the members of a group, skipping dangling member ids.
  Members {
    roster: PathBuf,

    /// Group id, e.g. `grp-oncall`.
    group: String,
  },

  /// Evaluate a stored filter set against every person in the roster.
  Eval {
    roster: PathBuf,

    /// Path to a serialized filter set (JSON).
    #[arg(short, long)]
    filters: PathBuf,

    /// Combination mode: `all` or `any`.
    #[arg(short, long, default_value = "all")]
    mode: String,

    /// Person id to anchor relationship filters at.
    #[arg(short, long)]
    requester: Option<String>,
  },
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  match cli.command {
    Command::Options { roster, query } => {
      let roster = load_roster(&roster)?;
      let catalogs = OptionCatalogs::generate(&roster);
      let catalogs = match query {
        Some(q) => catalogs.search(&q),
        None => catalogs,
      };
      print_catalogs(&catalogs);
    }
    Command::Values { roster, attribute } => {
      let roster = load_roster(&roster)?;
      let key = AttributeKey::parse(&attribute)?;
      for value in attribute_values(&roster, key) {
        println!("{}", quorum_engine::format_scalar(key, &value));
      }
    }
    Command::Members { roster, group } => {
      let roster = load_roster(&roster)?;
      let group = roster.require_group(&group)?;
      println!("{} ({})", group.name, group.description);
      for person in roster.members_of(&group.id) {
        println!(
          "  {}  {} ({})",
          person.id,
          person.full_name(),
          person.position
        );
      }
    }
    Command::Eval { roster, filters, mode, requester } => {
      let roster = load_roster(&roster)?;
      let filters = load_filters(&filters)?;
      let mode = CombineMode::from_str(&mode)
        .map_err(|_| {
          anyhow::anyhow!("mode must be `all` or `any`, got {mode:?}")
        })?;

      let mut eval = Evaluator::new(&roster);
      if let Some(id) = &requester {
        eval = eval.with_requester(roster.require_person(id)?);
      }

      for item in &filters {
        tracing::debug!(
          category = %item.subject.category(),
          subject = item.subject.label(),
          operator = %item.operator,
          values = item.value.scalars().len(),
          "loaded filter"
        );
      }

      let eligible = eval.eligible(&roster.people, &filters, mode);
      for person in &eligible {
        println!("{}  {} ({})", person.id, person.full_name(), person.position);
      }
      eprintln!("{} of {} people match", eligible.len(), roster.people.len());
    }
  }
  Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn load_roster(path: &PathBuf) -> Result<Roster> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading roster snapshot {}", path.display()))?;
  Roster::from_json(&raw)
    .with_context(|| format!("parsing roster snapshot {}", path.display()))
}

fn load_filters(path: &PathBuf) -> Result<FilterSet> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading filter set {}", path.display()))?;
  serde_json::from_str(&raw)
    .with_context(|| format!("parsing filter set {}", path.display()))
}

fn print_catalogs(catalogs: &OptionCatalogs) {
  println!("Relationships:");
  for rel in &catalogs.relationships {
    println!("  {}  {} - {}", rel.id, rel.label, rel.description);
  }
  println!("Groups:");
  for group in &catalogs.groups {
    println!(
      "  {}  {} ({} members, {:?})",
      group.group_id, group.label, group.member_count, group.category
    );
  }
  println!("Attributes:");
  for attr in &catalogs.attributes {
    println!("  {}  {} - {}", attr.key, attr.label, attr.description);
  }
  println!("People:");
  for person in &catalogs.people {
    println!("  {}  {}", person.person_id, person.label);
  }
}
