use chrono::{DateTime, NaiveDate, Utc};

use super::category::Category;

pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub color: Option<String>,
    pub image: Option<ItemImage>,
    pub added_date: DateTime<Utc>,
}

/// Item picture: either an inline data URL or a link to an external image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemImage {
    Embedded(String),
    Url(String),
}

impl ItemImage {
    /// Classify an image source; blank sources mean "no image"
    pub fn from_source(source: &str) -> Option<Self> {
        let source = source.trim();
        if source.is_empty() {
            None
        } else if source.starts_with("data:") {
            Some(ItemImage::Embedded(source.to_string()))
        } else {
            Some(ItemImage::Url(source.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemImage::Embedded(data) => data,
            ItemImage::Url(url) => url,
        }
    }
}

/// Normalize an optional free-text field: trimmed, blank becomes None
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an item timestamp: RFC 3339, or a plain YYYY-MM-DD date at midnight UTC
pub fn parse_added_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
