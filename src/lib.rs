//! Taskboard: task persistence for a customer/tasker marketplace.
//!
//! This crate stores the tasks customers post, reads them back joined with
//! the posting customer's name and the task category, and applies revisions
//! and removals.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Plain records and identifiers with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, memory)
//!
//! # Modules
//!
//! - [`config`]: Database settings and connection pool construction
//! - [`task`]: Task records, repository port, adapters, and services

pub mod config;
pub mod task;
