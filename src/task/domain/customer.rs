//! Read-only customer projection joined onto task records.

use super::CustomerId;
use serde::{Deserialize, Serialize};

/// Display name of the user behind a customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    /// Given name.
    pub firstname: String,
    /// Family name.
    pub lastname: String,
}

impl UserName {
    /// Creates a user name from its two parts.
    #[must_use]
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

/// Customer who posted a task, with the owning user's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    /// Customer identifier.
    pub id: CustomerId,
    /// Name of the user behind the customer account.
    pub user: UserName,
}
