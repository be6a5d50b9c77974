//! Business logic and service orchestration.

pub mod short_link_service;

pub use short_link_service::{DEFAULT_MAX_CREATE_ATTEMPTS, ServiceConfig, ShortLinkService};
