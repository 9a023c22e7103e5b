//! DTOs for the link creation endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request to shorten a URL.
///
/// A missing or `null` `url` deserializes to an empty string and is rejected
/// by validation, the same way as an explicit `""`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The created mapping.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateLinkResponse {
    pub url: String,
    pub slug: String,
}

impl From<ShortLink> for CreateLinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            url: link.long_url,
            slug: link.slug,
        }
    }
}
