use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::IssueError;
use crate::key::{self, IdSource, RandomIdSource};

/// How urgently an issue needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

/// Area an issue's root cause falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Hardware,
    Software,
    Unknown,
}

/// A reported problem. Built once through a validating constructor and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    key: String,
    description: String,
    created_at: DateTime<Utc>,
    priority: Priority,
    category: Category,
}

impl Issue {
    /// Build an issue, stamping it with the current time when `created_at`
    /// is `None`.
    pub fn new(
        description: &str,
        priority: Priority,
        category: Category,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self, IssueError> {
        Self::from_optional(Some(description), priority, category, created_at)
    }

    /// Like [`Issue::new`], but a missing description is accepted as input and
    /// rejected the same way a blank one is.
    pub fn from_optional(
        description: Option<&str>,
        priority: Priority,
        category: Category,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self, IssueError> {
        Self::with_id_source(description, priority, category, created_at, &RandomIdSource)
    }

    /// Full constructor; the key token is drawn from `ids`.
    pub fn with_id_source(
        description: Option<&str>,
        priority: Priority,
        category: Category,
        created_at: Option<DateTime<Utc>>,
        ids: &dyn IdSource,
    ) -> Result<Self, IssueError> {
        let description = validate_description(description)?;
        let created_at = created_at.unwrap_or_else(Utc::now);
        let key = key::generate_key(category, priority, created_at.year(), ids);

        tracing::debug!(%key, ?priority, ?category, "created issue");

        Ok(Issue {
            key,
            description: description.to_string(),
            created_at,
            priority,
            category,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.key, self.description)
    }
}

fn validate_description(description: Option<&str>) -> Result<&str, IssueError> {
    match description {
        Some(d) if !d.trim().is_empty() => Ok(d),
        _ => Err(IssueError::InvalidDescription),
    }
}
