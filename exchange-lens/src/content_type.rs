//! Content-type normalization and the mime groups used for categorization

use crate::types::Headers;

pub const JS_TYPES: &[&str] = &[
    "text/javascript",
    "application/javascript",
    "application/x-javascript",
    "application/ecmascript",
];

// Shares three entries with JS_TYPES. The JS check always runs first, so in
// practice only `text/css` lands in this group.
pub const CSS_TYPES: &[&str] = &[
    "text/css",
    "application/javascript",
    "application/x-javascript",
    "application/ecmascript",
];

pub const FONT_TYPES: &[&str] = &[
    "application/font-woff",
    "application/x-font-woff",
    "application/font-otf",
    "application/font",
    "application/vnd.ms-fontobject",
    "application/x-font-ttf",
    "application/x-font-typetype",
    "application/x-font-opentype",
];

pub const DATA_TYPES: &[&str] = &[
    "application/json",
    "application/xml",
    "multipart/form-data",
    "application/x-www-form-urlencoded",
    "application/x-protobuf",
];

/// Simplify the `content-type` header as far as possible without failing.
///
/// Parameters after `;` and structured-syntax suffixes after `+` are dropped.
/// A missing header yields an empty string. Case is left as sent.
pub fn base_content_type(headers: &Headers) -> &str {
    let raw = headers.get("content-type").map(String::as_str).unwrap_or("");
    strip_content_type(raw)
}

/// Strip parameters and suffix from a raw content-type value
pub fn strip_content_type(raw: &str) -> &str {
    let without_params = raw.split(';').next().unwrap_or("");
    without_params.split('+').next().unwrap_or("")
}
