//! Application layer: service orchestration over the domain abstractions.

pub mod services;
