//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::BoxError;
use super::cluster::{TemporaryDatabase, shared_cluster};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use rstest::fixture;
use taskboard::config::DatabaseConfig;
use taskboard::task::{adapters::postgres::PostgresTaskRepository, domain::TaskId};
use uuid::Uuid;

/// SQL to create the task schema.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_task_tables/up.sql");

/// Seed rows: one user behind customer 1 and three categories (ids 1 to 3).
pub const SEED_SQL: &str = concat!(
    "INSERT INTO \"user\" (firstname, lastname, email) ",
    "VALUES ('Ada', 'Lovelace', 'ada@example.com'); ",
    "INSERT INTO customer (user_id) VALUES (1); ",
    "INSERT INTO category (name) VALUES ('Moving'), ('Gardening'), ('Cleaning');",
);

/// Template database holding the migrated, seeded schema.
pub const TEMPLATE_DB: &str = "taskboard_test_template";

/// Repository bound to a temporary database.
///
/// Field order matters: the pool closes before the database is dropped.
pub struct PgTaskContext {
    pub repository: PostgresTaskRepository,
    pub database: TemporaryDatabase,
}

fn migrate_and_seed(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_SCHEMA_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(SEED_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

fn prepare_context() -> Result<PgTaskContext, BoxError> {
    let cluster = shared_cluster();
    cluster.ensure_template_exists(TEMPLATE_DB, migrate_and_seed)?;
    let database = cluster
        .temporary_database_from_template(&format!("task_{}", Uuid::new_v4()), TEMPLATE_DB)?;
    let pool = DatabaseConfig::new(database.url())
        .with_max_pool_size(2)
        .build_pool()?;
    Ok(PgTaskContext {
        repository: PostgresTaskRepository::new(pool),
        database,
    })
}

/// Builds a repository over a fresh copy of the seeded template.
///
/// Cluster start-up blocks, so it runs on the blocking pool. A cluster that
/// fails to start re-raises its `SKIP-TEST-CLUSTER` panic in the test.
///
/// # Errors
///
/// Returns an error if template, database, or pool construction fails.
pub async fn provision_context() -> Result<PgTaskContext, BoxError> {
    match tokio::task::spawn_blocking(prepare_context).await {
        Ok(context) => context,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(err) => Err(Box::new(err) as BoxError),
    }
}

/// Provides a repository over its own temporary database.
///
/// # Errors
///
/// Returns an error if provisioning fails.
#[fixture]
pub async fn pg_context() -> Result<PgTaskContext, BoxError> {
    provision_context().await
}

/// Counts rows in `table` of the context's database.
///
/// # Errors
///
/// Returns an error if the connection or query fails.
pub async fn count_rows(
    database: &TemporaryDatabase,
    table: &'static str,
) -> Result<i64, BoxError> {
    #[derive(diesel::QueryableByName)]
    struct CountRow {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        count: i64,
    }

    let url = database.url().to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url).map_err(|e| Box::new(e) as BoxError)?;
        let row = diesel::sql_query(format!("SELECT COUNT(*) AS count FROM {table}"))
            .get_result::<CountRow>(&mut conn)
            .map_err(|e| Box::new(e) as BoxError)?;
        Ok(row.count)
    })
    .await
    .map_err(|e| Box::new(e) as BoxError)?
}

/// Sets status and selected offer directly, bypassing the repository.
///
/// # Errors
///
/// Returns an error if the connection or update fails.
pub async fn assign_task(
    database: &TemporaryDatabase,
    id: TaskId,
    offer: i32,
) -> Result<(), BoxError> {
    let url = database.url().to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url).map_err(|e| Box::new(e) as BoxError)?;
        diesel::sql_query("UPDATE task SET status = 'assigned', selected_offer = $1 WHERE id = $2")
            .bind::<diesel::sql_types::Integer, _>(offer)
            .bind::<diesel::sql_types::Integer, _>(id.value())
            .execute(&mut conn)
            .map_err(|e| Box::new(e) as BoxError)?;
        Ok(())
    })
    .await
    .map_err(|e| Box::new(e) as BoxError)?
}
