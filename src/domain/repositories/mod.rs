//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations live
//! in `crate::infrastructure::persistence`. Callers depend only on the
//! abstraction, never on a specific backend.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
