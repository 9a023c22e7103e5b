//! Utility functions used across the application.
//!
//! - [`slug_generator`] - Random slug generation

pub mod slug_generator;
