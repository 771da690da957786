//! Newest-image selection
//!
//! EC2 reports image creation dates as RFC 3339 strings. Records whose date
//! does not parse are dropped rather than sorted as "oldest", so a malformed
//! entry can never win.

use chrono::{DateTime, Utc};

/// An image id with its creation timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl ImageRecord {
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
        }
    }

    /// Build a record from the raw id and creation-date strings EC2 returns
    pub fn parse(id: &str, creation_date: &str) -> Option<Self> {
        let created_at = DateTime::parse_from_rfc3339(creation_date)
            .ok()?
            .with_timezone(&Utc);
        Some(Self::new(id, created_at))
    }
}

/// Id of the image with the most recent creation timestamp.
///
/// Ties are broken arbitrarily; returns `None` for an empty slice.
pub fn newest_image_id(images: &[ImageRecord]) -> Option<&str> {
    images
        .iter()
        .max_by_key(|img| img.created_at)
        .map(|img| img.id.as_str())
}
