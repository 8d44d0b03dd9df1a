//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRevisionRow, TaskRow, UserNameRow},
    schema::{category, customer, task, users},
};
use crate::task::{
    domain::{
        CategoryId, CustomerId, CustomerSummary, NewTask, OfferId, PersistedTaskData, Task,
        TaskId, TaskListing, TaskRevision, TaskStatus, UserName,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult, WriteOutcome},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Constraint guarding `task.category_id`.
const CATEGORY_FOREIGN_KEY: &str = "fk_task_category";

/// Constraint guarding `task.customer_id`.
const CUSTOMER_FOREIGN_KEY: &str = "fk_task_customer";

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, new_task: &NewTask) -> TaskRepositoryResult<TaskId> {
        let category_id = new_task.category_id();
        let customer_id = new_task.customer_id();
        let new_row = to_new_row(new_task);

        let inserted = self
            .run_blocking(move |connection| {
                diesel::insert_into(task::table)
                    .values(&new_row)
                    .returning(task::id)
                    .get_result::<i32>(connection)
                    .map_err(|err| {
                        if is_foreign_key_violation(&err, CATEGORY_FOREIGN_KEY) {
                            TaskRepositoryError::UnknownCategory(category_id)
                        } else if is_foreign_key_violation(&err, CUSTOMER_FOREIGN_KEY) {
                            TaskRepositoryError::UnknownCustomer(customer_id)
                        } else {
                            statement_failed(err)
                        }
                    })
            })
            .await?;

        let id = TaskId::new(inserted);
        tracing::debug!(task_id = %id, %customer_id, %category_id, "task created");
        Ok(id)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = task::table
                .inner_join(customer::table.inner_join(users::table))
                .filter(task::id.eq(id.value()))
                .select((TaskRow::as_select(), UserNameRow::as_select()))
                .first::<(TaskRow, UserNameRow)>(connection)
                .optional()
                .map_err(statement_failed)?;
            row.map(|(task_row, user_row)| row_to_task(task_row, user_row))
                .transpose()
        })
        .await
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<TaskListing>> {
        let listings = self
            .run_blocking(|connection| {
                let rows = task::table
                    .inner_join(customer::table.inner_join(users::table))
                    .inner_join(category::table)
                    .order(task::id.desc())
                    .select((
                        TaskRow::as_select(),
                        UserNameRow::as_select(),
                        category::name,
                    ))
                    .load::<(TaskRow, UserNameRow, String)>(connection)
                    .map_err(statement_failed)?;
                rows.into_iter()
                    .map(|(task_row, user_row, category_name)| {
                        Ok(TaskListing::new(
                            row_to_task(task_row, user_row)?,
                            category_name,
                        ))
                    })
                    .collect::<TaskRepositoryResult<Vec<_>>>()
            })
            .await?;

        tracing::debug!(count = listings.len(), "tasks listed");
        Ok(listings)
    }

    async fn update(&self, revision: &TaskRevision) -> TaskRepositoryResult<WriteOutcome> {
        let id = revision.id;
        let category_id = revision.category_id;
        let changes = TaskRevisionRow {
            title: revision.title.clone(),
            description: revision.description.clone(),
            location: revision.location.clone(),
            category_id: category_id.value(),
        };

        let affected = self
            .run_blocking(move |connection| {
                diesel::update(task::table.find(id.value()))
                    .set(&changes)
                    .execute(connection)
                    .map_err(|err| {
                        if is_foreign_key_violation(&err, CATEGORY_FOREIGN_KEY) {
                            TaskRepositoryError::UnknownCategory(category_id)
                        } else {
                            statement_failed(err)
                        }
                    })
            })
            .await?;

        let outcome = WriteOutcome::from_affected_rows(affected);
        tracing::debug!(task_id = %id, ?outcome, "task update executed");
        Ok(outcome)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<WriteOutcome> {
        let affected = self
            .run_blocking(move |connection| {
                diesel::delete(task::table.find(id.value()))
                    .execute(connection)
                    .map_err(statement_failed)
            })
            .await?;

        let outcome = WriteOutcome::from_affected_rows(affected);
        tracing::debug!(task_id = %id, ?outcome, "task delete executed");
        Ok(outcome)
    }
}

fn to_new_row(new_task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        title: new_task.title().to_owned(),
        description: new_task.description().to_owned(),
        location: new_task.location().to_owned(),
        image: new_task.image().map(str::to_owned),
        status: NewTask::INITIAL_STATUS.as_str().to_owned(),
        customer_id: new_task.customer_id().value(),
        category_id: new_task.category_id().value(),
    }
}

fn row_to_task(row: TaskRow, user: UserNameRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        location,
        image,
        status: persisted_status,
        selected_offer,
        customer_id,
        category_id,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        location,
        image,
        status,
        selected_offer: selected_offer.map(OfferId::new),
        category_id: CategoryId::new(category_id),
        customer: CustomerSummary {
            id: CustomerId::new(customer_id),
            user: UserName::new(user.firstname, user.lastname),
        },
    }))
}

fn is_foreign_key_violation(err: &DieselError, constraint: &str) -> bool {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            info.constraint_name() == Some(constraint)
        }
        _ => false,
    }
}

fn statement_failed(err: DieselError) -> TaskRepositoryError {
    tracing::warn!(error = %err, "task statement failed");
    TaskRepositoryError::persistence(err)
}
