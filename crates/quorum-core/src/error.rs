//! Error types for `quorum-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("person not found: {0}")]
  PersonNotFound(String),

  #[error("group not found: {0}")]
  GroupNotFound(String),

  #[error("unknown attribute key: {0:?}")]
  UnknownAttributeKey(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
