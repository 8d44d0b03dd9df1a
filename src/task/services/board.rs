//! Service layer for posting, reading, revising, and withdrawing tasks.

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskListing, TaskRevision},
    ports::{TaskRepository, TaskRepositoryError, WriteOutcome},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// No task exists with the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
///
/// Turns the repository's [`WriteOutcome::NotFound`] into
/// [`TaskBoardError::NotFound`] so callers handle absence as an error.
#[derive(Clone)]
pub struct TaskBoardService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskBoardService<R>
where
    R: TaskRepository,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Posts a new task and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence fails or a
    /// reference does not resolve.
    pub async fn post(&self, task: NewTask) -> TaskBoardResult<TaskId> {
        let id = self.repository.create(&task).await?;
        tracing::info!(task_id = %id, title = task.title(), "task posted");
        Ok(id)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the lookup fails.
    pub async fn task(&self, id: TaskId) -> TaskBoardResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Lists every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the lookup fails.
    pub async fn listings(&self) -> TaskBoardResult<Vec<TaskListing>> {
        Ok(self.repository.find_all().await?)
    }

    /// Applies a revision to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotFound`] when no task matches the
    /// revision's identifier.
    pub async fn revise(&self, revision: TaskRevision) -> TaskBoardResult<()> {
        let outcome = self.repository.update(&revision).await?;
        require_applied(outcome, revision.id)?;
        tracing::info!(task_id = %revision.id, "task revised");
        Ok(())
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::NotFound`] when the task does not exist.
    pub async fn withdraw(&self, id: TaskId) -> TaskBoardResult<()> {
        let outcome = self.repository.delete(id).await?;
        require_applied(outcome, id)?;
        tracing::info!(task_id = %id, "task withdrawn");
        Ok(())
    }
}

const fn require_applied(outcome: WriteOutcome, id: TaskId) -> TaskBoardResult<()> {
    match outcome {
        WriteOutcome::Applied => Ok(()),
        WriteOutcome::NotFound => Err(TaskBoardError::NotFound(id)),
    }
}
