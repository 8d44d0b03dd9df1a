//! In-memory task repository.
//!
//! Mirrors the relational adapter: customers and categories must be
//! registered before tasks can reference them, reads only return tasks whose
//! references resolve, and identifiers are assigned from an increasing
//! counter.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{
        CategoryId, CustomerId, CustomerSummary, NewTask, OfferId, PersistedTaskData, Task,
        TaskId, TaskListing, TaskRevision, TaskStatus, UserName,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult, WriteOutcome},
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, StoredTask>,
    customers: HashMap<CustomerId, UserName>,
    categories: HashMap<CategoryId, String>,
    last_id: i32,
}

#[derive(Debug, Clone)]
struct StoredTask {
    title: String,
    description: String,
    location: String,
    image: Option<String>,
    status: TaskStatus,
    selected_offer: Option<OfferId>,
    customer_id: CustomerId,
    category_id: CategoryId,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer so tasks may reference it.
    ///
    /// Re-registering an identifier replaces the stored name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the state lock is
    /// poisoned.
    pub fn register_customer(&self, id: CustomerId, user: UserName) -> TaskRepositoryResult<()> {
        self.write_state()?.customers.insert(id, user);
        Ok(())
    }

    /// Registers a category so tasks may reference it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the state lock is
    /// poisoned.
    pub fn register_category(
        &self,
        id: CategoryId,
        name: impl Into<String>,
    ) -> TaskRepositoryResult<()> {
        self.write_state()?.categories.insert(id, name.into());
        Ok(())
    }

    fn read_state(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl InMemoryTaskState {
    fn next_id(&mut self) -> TaskRepositoryResult<TaskId> {
        let next = self.last_id.checked_add(1).ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other(
                "task identifier space exhausted",
            ))
        })?;
        self.last_id = next;
        Ok(TaskId::new(next))
    }

    /// Joins a stored task with its customer; `None` when the customer is
    /// missing, as an inner join would.
    fn join_customer(&self, id: TaskId, stored: &StoredTask) -> Option<Task> {
        let user = self.customers.get(&stored.customer_id)?.clone();
        Some(Task::from_persisted(PersistedTaskData {
            id,
            title: stored.title.clone(),
            description: stored.description.clone(),
            location: stored.location.clone(),
            image: stored.image.clone(),
            status: stored.status,
            selected_offer: stored.selected_offer,
            category_id: stored.category_id,
            customer: CustomerSummary {
                id: stored.customer_id,
                user,
            },
        }))
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<TaskId> {
        let mut state = self.write_state()?;
        if !state.categories.contains_key(&task.category_id()) {
            return Err(TaskRepositoryError::UnknownCategory(task.category_id()));
        }
        if !state.customers.contains_key(&task.customer_id()) {
            return Err(TaskRepositoryError::UnknownCustomer(task.customer_id()));
        }

        let id = state.next_id()?;
        state.tasks.insert(
            id,
            StoredTask {
                title: task.title().to_owned(),
                description: task.description().to_owned(),
                location: task.location().to_owned(),
                image: task.image().map(str::to_owned),
                status: NewTask::INITIAL_STATUS,
                selected_offer: None,
                customer_id: task.customer_id(),
                category_id: task.category_id(),
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .get(&id)
            .and_then(|stored| state.join_customer(id, stored)))
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<TaskListing>> {
        let state = self.read_state()?;
        let listings = state
            .tasks
            .iter()
            .rev()
            .filter_map(|(id, stored)| {
                let category_name = state.categories.get(&stored.category_id)?;
                let task = state.join_customer(*id, stored)?;
                Some(TaskListing::new(task, category_name.clone()))
            })
            .collect();
        Ok(listings)
    }

    async fn update(&self, revision: &TaskRevision) -> TaskRepositoryResult<WriteOutcome> {
        let mut state = self.write_state()?;
        let known_category = state.categories.contains_key(&revision.category_id);
        // No matching row means no constraint check, as in SQL.
        let Some(stored) = state.tasks.get_mut(&revision.id) else {
            return Ok(WriteOutcome::NotFound);
        };
        if !known_category {
            return Err(TaskRepositoryError::UnknownCategory(revision.category_id));
        }

        revision.title.clone_into(&mut stored.title);
        revision.description.clone_into(&mut stored.description);
        revision.location.clone_into(&mut stored.location);
        stored.category_id = revision.category_id;
        Ok(WriteOutcome::Applied)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<WriteOutcome> {
        let mut state = self.write_state()?;
        let removed = state.tasks.remove(&id);
        Ok(WriteOutcome::from_affected_rows(usize::from(removed.is_some())))
    }
}
