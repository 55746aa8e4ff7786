//! Display colors for categories and status codes
//!
//! Colors are CSS hex strings, either short (`#888`) or long (`#ce3939`).

use crate::category::{Categorized, Category};
use serde::{Deserialize, Serialize};

/// Color for an exchange that is missing, or has an invalid, status
pub const NO_STATUS_COLOR: &str = "#000";

/// Summary color for a category
pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Incomplete => "#000", // black
        Category::Mutative => "#ce3939", // red
        Category::Image => "#4caf7d", // green
        Category::Js => "#ff8c38", // orange
        Category::Css => "#e9f05b", // yellow
        Category::Html => "#2fb4e0", // light blue
        Category::Font => "#6e40aa", // dark blue
        Category::Data => "#6e40aa", // purple
        Category::Unknown => "#888", // grey
    }
}

/// Summary color for anything with an assigned category
pub fn summary_color<C: Categorized + ?Sized>(item: &C) -> &'static str {
    category_color(item.category())
}

/// Ranges of HTTP status codes, as used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    /// Absent, below 100 or 600 and above
    Invalid,
    Informational,
    Success,
    Redirect,
    ClientError,
    ServerError,
}

impl StatusClass {
    pub fn from_status(status: Option<u16>) -> Self {
        match status {
            None => StatusClass::Invalid,
            Some(code) if !(100..600).contains(&code) => StatusClass::Invalid,
            Some(code) if code >= 500 => StatusClass::ServerError,
            Some(code) if code >= 400 => StatusClass::ClientError,
            Some(code) if code >= 300 => StatusClass::Redirect,
            Some(code) if code >= 200 => StatusClass::Success,
            Some(_) => StatusClass::Informational,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StatusClass::Invalid => NO_STATUS_COLOR,
            StatusClass::ServerError => "#ce3939",
            StatusClass::ClientError => "#f1971f",
            StatusClass::Redirect => "#5a80cc",
            StatusClass::Success => "#4caf7d",
            StatusClass::Informational => "#888",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusClass::Invalid => "invalid",
            StatusClass::Informational => "informational",
            StatusClass::Success => "success",
            StatusClass::Redirect => "redirect",
            StatusClass::ClientError => "client error",
            StatusClass::ServerError => "server error",
        }
    }
}

/// Color for an HTTP status code
pub fn status_color(status: Option<u16>) -> &'static str {
    StatusClass::from_status(status).color()
}

/// Expand a `#rgb` or `#rrggbb` color into its components
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();

    match hex.len() {
        3 => {
            let mut doubled = hex.chars().map(|c| channel(&format!("{c}{c}")));
            Some((doubled.next()??, doubled.next()??, doubled.next()??))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}
