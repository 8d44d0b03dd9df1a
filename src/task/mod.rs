//! Task persistence for the marketplace.
//!
//! Customers post tasks; taskers fulfil them. This module stores and reads
//! task records, joining in the posting customer's name and, for list reads,
//! the category name. Each repository operation issues exactly one statement.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
