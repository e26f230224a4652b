//! In-memory issue model with derived, human-readable issue keys.

pub mod commands;
pub mod error;
pub mod key;
pub mod models;

pub use error::IssueError;
pub use key::{IdSource, RandomIdSource};
pub use models::{Category, Issue, Priority};
