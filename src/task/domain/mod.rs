//! Domain model for marketplace tasks.
//!
//! Tasks are read together with a projection of the customer who posted
//! them; list reads also carry the category name. Infrastructure concerns
//! stay outside this boundary.

mod customer;
mod drafts;
mod error;
mod ids;
mod task;

pub use customer::{CustomerSummary, UserName};
pub use drafts::{NewTask, TaskRevision};
pub use error::ParseTaskStatusError;
pub use ids::{CategoryId, CustomerId, OfferId, TaskId};
pub use task::{PersistedTaskData, Task, TaskListing, TaskStatus};
