//! Core business data structures.

pub mod short_link;

pub use short_link::{CreateLinkInput, ShortLink};
