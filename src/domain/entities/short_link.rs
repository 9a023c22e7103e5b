//! ShortLink entity representing a slug → long URL mapping.

/// A shortened URL mapping.
///
/// Created once through [`crate::application::services::LinkService::create_short_link`]
/// and never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub slug: String,
    pub long_url: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(slug: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            long_url: long_url.into(),
        }
    }
}
