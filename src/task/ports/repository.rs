//! Repository port for task persistence and lookup.

use crate::task::domain::{
    CategoryId, CustomerId, NewTask, Task, TaskId, TaskListing, TaskRevision,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every operation maps to exactly one statement against the store.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task with status `open` and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::UnknownCategory`] or
    /// [`TaskRepositoryError::UnknownCustomer`] when a reference does not
    /// resolve, or [`TaskRepositoryError::Persistence`] on store failure.
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId>;

    /// Finds a task by identifier, joined with its customer's name.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task with its category name, newest first.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<TaskListing>>;

    /// Overwrites the title, description, location, and category of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::UnknownCategory`] when the new
    /// category does not resolve.
    async fn update(&self, revision: &TaskRevision) -> TaskRepositoryResult<WriteOutcome>;

    /// Removes a task.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<WriteOutcome>;
}

/// Outcome of a single-row write addressed by task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum WriteOutcome {
    /// The addressed row existed and was written.
    Applied,
    /// No row matched the identifier; nothing changed.
    NotFound,
}

impl WriteOutcome {
    /// Classifies a driver-reported affected-row count.
    pub const fn from_affected_rows(rows: usize) -> Self {
        if rows == 0 {
            Self::NotFound
        } else {
            Self::Applied
        }
    }

    /// Returns the affected-row count this outcome stands for.
    #[must_use]
    pub const fn affected_rows(self) -> usize {
        match self {
            Self::Applied => 1,
            Self::NotFound => 0,
        }
    }

    /// Returns `true` when the addressed row was written.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The referenced category does not exist.
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),

    /// The referenced customer does not exist.
    #[error("unknown customer: {0}")]
    UnknownCustomer(CustomerId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
