//! Write-side inputs: new task submissions and revisions of existing tasks.

use super::{CategoryId, CustomerId, TaskId, TaskStatus};

/// Fields supplied when posting a new task.
///
/// Content is stored as given; empty strings are accepted. New tasks always
/// start [`TaskStatus::Open`] with no selected offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    location: String,
    image: Option<String>,
    category_id: CategoryId,
    customer_id: CustomerId,
}

impl NewTask {
    /// Status every new task is stored with.
    pub const INITIAL_STATUS: TaskStatus = TaskStatus::Open;

    /// Creates a submission owned by [`CustomerId::PLACEHOLDER`].
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        category_id: CategoryId,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            location: location.into(),
            image: None,
            category_id,
            customer_id: CustomerId::PLACEHOLDER,
        }
    }

    /// Attaches an image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Records the task against a specific customer.
    #[must_use]
    pub const fn for_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = customer_id;
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the image reference, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the category reference.
    #[must_use]
    pub const fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Returns the owning customer.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }
}

/// Replacement values for the editable columns of an existing task.
///
/// Status, owner, image, and selected offer are not editable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRevision {
    /// Task to revise.
    pub id: TaskId,
    /// New title.
    pub title: String,
    /// New description.
    pub description: String,
    /// New location.
    pub location: String,
    /// New category reference.
    pub category_id: CategoryId,
}
