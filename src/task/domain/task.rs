//! Task record and its read projections.

use super::{CategoryId, CustomerSummary, OfferId, ParseTaskStatusError, TaskId};
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is published and accepting offers.
    Open,
    /// An offer has been selected and a tasker is assigned.
    Assigned,
    /// The assigned tasker finished the work.
    Completed,
    /// The customer withdrew the task.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Assigned => "assigned",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "assigned" => Ok(Self::Assigned),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// A task posted by a customer, joined with the customer's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    location: String,
    image: Option<String>,
    status: TaskStatus,
    selected_offer: Option<OfferId>,
    category_id: CategoryId,
    customer: CustomerSummary,
}

/// Parameter object for reconstructing a task from a stored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored task identifier.
    pub id: TaskId,
    /// Stored title.
    pub title: String,
    /// Stored description.
    pub description: String,
    /// Stored location.
    pub location: String,
    /// Stored image reference, if any.
    pub image: Option<String>,
    /// Stored status.
    pub status: TaskStatus,
    /// Stored selected offer reference, if any.
    pub selected_offer: Option<OfferId>,
    /// Stored category reference.
    pub category_id: CategoryId,
    /// Joined customer projection.
    pub customer: CustomerSummary,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            location: data.location,
            image: data.image,
            status: data.status,
            selected_offer: data.selected_offer,
            category_id: data.category_id,
            customer: data.customer,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns where the task takes place.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the image reference, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the selected offer reference, if any.
    #[must_use]
    pub const fn selected_offer(&self) -> Option<OfferId> {
        self.selected_offer
    }

    /// Returns the category reference.
    #[must_use]
    pub const fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Returns the customer who posted the task.
    #[must_use]
    pub const fn customer(&self) -> &CustomerSummary {
        &self.customer
    }
}

/// List view of a task, carrying the category's display name.
///
/// Serialises flat: every task field plus `category_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListing {
    #[serde(flatten)]
    task: Task,
    category_name: String,
}

impl TaskListing {
    /// Pairs a task with its category name.
    #[must_use]
    pub fn new(task: Task, category_name: impl Into<String>) -> Self {
        Self {
            task,
            category_name: category_name.into(),
        }
    }

    /// Returns the listed task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the category display name.
    #[must_use]
    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    /// Consumes the listing, returning the task.
    #[must_use]
    pub fn into_task(self) -> Task {
        self.task
    }
}
