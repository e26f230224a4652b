use thiserror::Error;

/// Errors raised while building an [`Issue`](crate::models::Issue).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IssueError {
    /// The description was missing, empty, or only whitespace.
    #[error("issue description cannot be null or whitespace")]
    InvalidDescription,
}
