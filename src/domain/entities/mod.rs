//! Core domain entities.
//!
//! - [`ShortLink`] - A persisted slug → long URL mapping

pub mod short_link;

pub use short_link::ShortLink;
