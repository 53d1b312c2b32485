//! View-model failures
//!
//! Every operation reports which step failed plus the underlying remote
//! error, so callers can branch on the kind while the published state keeps
//! the "last error wins" message.

use thiserror::Error;

use crate::domain::FormErrors;
use crate::remote::ApiError;

/// View-model operations that talk to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    LoadAll,
    LoadIdeas,
    CreateIdea,
    UpdateIdea,
    DeleteIdea,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::LoadAll => "load_all",
            Operation::LoadIdeas => "load_ideas",
            Operation::CreateIdea => "create_idea",
            Operation::UpdateIdea => "update_idea",
            Operation::DeleteIdea => "delete_idea",
        }
    }

    /// User-facing prefix for a failure of this operation
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::LoadAll => "Failed to load data",
            Operation::LoadIdeas => "Failed to load ideas",
            Operation::CreateIdea => "Failed to create idea",
            Operation::UpdateIdea => "Failed to update idea",
            Operation::DeleteIdea => "Failed to delete idea",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {}", .operation.failure_message(), .source)]
pub struct SyncError {
    pub operation: Operation,
    #[source]
    pub source: ApiError,
}

impl SyncError {
    pub fn new(operation: Operation, source: ApiError) -> Self {
        Self { operation, source }
    }
}

/// Outcome of submitting a form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// Nothing was sent
    #[error("invalid form: {0}")]
    Invalid(FormErrors),

    #[error(transparent)]
    Sync(#[from] SyncError),
}
