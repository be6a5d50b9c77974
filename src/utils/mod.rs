//! Identifier generation utilities.
//!
//! - [`id_generator`] - Random identifier generation
//! - [`denylist`] - Substring filtering for generated identifiers

pub mod denylist;
pub mod id_generator;
