//! Display categories assigned to exchanges

use crate::error::LensError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification label for an exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Still waiting on a response
    Incomplete,
    /// POST, PATCH, PUT or DELETE without a more specific content type
    Mutative,
    Image,
    Js,
    Css,
    Html,
    Font,
    /// Structured payloads such as JSON, XML or form data
    Data,
    Unknown,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 9] = [
        Category::Incomplete,
        Category::Mutative,
        Category::Image,
        Category::Js,
        Category::Css,
        Category::Html,
        Category::Font,
        Category::Data,
        Category::Unknown,
    ];

    /// Lowercase label used for display and serialization
    pub fn label(self) -> &'static str {
        match self {
            Category::Incomplete => "incomplete",
            Category::Mutative => "mutative",
            Category::Image => "image",
            Category::Js => "js",
            Category::Css => "css",
            Category::Html => "html",
            Category::Font => "font",
            Category::Data => "data",
            Category::Unknown => "unknown",
        }
    }

    /// Summary color for this category
    pub fn color(self) -> &'static str {
        crate::colors::category_color(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| LensError::parse_category(s))
    }
}

/// Anything that carries an already-assigned category
pub trait Categorized {
    fn category(&self) -> Category;
}

impl Categorized for Category {
    fn category(&self) -> Category {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
            assert_eq!(category.to_string(), category.label());
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("JS".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_parse_error_lists_expected_labels() {
        let error = "video".parse::<Category>().unwrap_err();
        let message = error.to_string();

        assert!(message.contains("'video'"));
        assert!(message.contains("incomplete, mutative, image"));
    }

    #[test]
    fn test_serde_uses_lowercase_labels() {
        let json = serde_json::to_string(&Category::Js).unwrap();
        assert_eq!(json, "\"js\"");

        let parsed: Category = serde_json::from_str("\"mutative\"").unwrap();
        assert_eq!(parsed, Category::Mutative);
    }
}
