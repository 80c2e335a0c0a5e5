//! Clothing categories and their display lookup table.
//!
//! Every part of the closet (repository validation, recommendations, views)
//! resolves categories through this one table.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Tops,
    Bottoms,
    Outerwear,
    Shoes,
    Accessory,
    /// A key outside the known set, kept as stored
    Other(String),
}

/// Display data for a known category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub style: &'static str,
}

pub static CATEGORY_TABLE: [CategoryInfo; 5] = [
    CategoryInfo { key: "tops", label: "トップス", style: "category-tops" },
    CategoryInfo { key: "bottoms", label: "ボトムス", style: "category-bottoms" },
    CategoryInfo { key: "outerwear", label: "アウター", style: "category-outerwear" },
    CategoryInfo { key: "shoes", label: "シューズ", style: "category-shoes" },
    CategoryInfo { key: "accessory", label: "アクセサリー", style: "category-accessory" },
];

const FALLBACK_STYLE: &str = "category-tag";

impl Category {
    /// Parse a stored or submitted category key. Never fails: unknown keys become `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tops" => Category::Tops,
            "bottoms" => Category::Bottoms,
            "outerwear" => Category::Outerwear,
            "shoes" => Category::Shoes,
            // the home screen of the browser version wrote the plural form
            "accessory" | "accessories" => Category::Accessory,
            _ => Category::Other(value.trim().to_string()),
        }
    }

    /// Parse a category for a new or edited item, where only known keys are accepted
    pub fn parse_known(value: &str) -> Option<Self> {
        match Self::parse(value) {
            Category::Other(_) => None,
            category => Some(category),
        }
    }

    pub fn key(&self) -> &str {
        match (self, self.info()) {
            (Category::Other(key), _) => key,
            (_, Some(info)) => info.key,
            (_, None) => "",
        }
    }

    pub fn info(&self) -> Option<&'static CategoryInfo> {
        let index = match self {
            Category::Tops => 0,
            Category::Bottoms => 1,
            Category::Outerwear => 2,
            Category::Shoes => 3,
            Category::Accessory => 4,
            Category::Other(_) => return None,
        };
        Some(&CATEGORY_TABLE[index])
    }

    /// Display label; unknown categories show their raw key
    pub fn label(&self) -> &str {
        match self.info() {
            Some(info) => info.label,
            None => self.key(),
        }
    }

    pub fn style(&self) -> &'static str {
        self.info().map(|info| info.style).unwrap_or(FALLBACK_STYLE)
    }

    pub fn is_known(&self) -> bool {
        self.info().is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
