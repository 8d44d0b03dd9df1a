//! Persistence adapters for the task module.
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage that
//!   mirrors the relational joins, for tests and embedding
//! - [`postgres::PostgresTaskRepository`]: `PostgreSQL` persistence using
//!   Diesel
//!
//! Both implement [`TaskRepository`].
//!
//! [`TaskRepository`]: crate::task::ports::TaskRepository

pub mod memory;
pub mod postgres;
