//! Diesel row models for task persistence.

use super::schema::{task, users};
use diesel::prelude::*;

/// Query result row for the `task` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Task location.
    pub location: String,
    /// Optional image reference.
    pub image: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Optional selected offer.
    pub selected_offer: Option<i32>,
    /// Owning customer.
    pub customer_id: i32,
    /// Task category.
    pub category_id: i32,
}

/// Name columns projected from the `user` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserNameRow {
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Task location.
    pub location: String,
    /// Optional image reference.
    pub image: Option<String>,
    /// Initial status.
    pub status: String,
    /// Owning customer.
    pub customer_id: i32,
    /// Task category.
    pub category_id: i32,
}

/// Changeset for the editable task columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = task)]
pub struct TaskRevisionRow {
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    pub description: String,
    /// Replacement location.
    pub location: String,
    /// Replacement category.
    pub category_id: i32,
}
