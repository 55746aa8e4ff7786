//! Exchange Lens - content-type categories and display colors for captured HTTP traffic
//!
//! This crate sorts captured request/response pairs into a small, closed set of
//! categories (images, scripts, stylesheets, data payloads, ...) and maps those
//! categories and HTTP status codes to the colors a traffic viewer shows them in.
//! Everything here is pure: no I/O, no shared state, nothing that can fail
//! during classification.

// Core modules
pub mod category;
pub mod error;
pub mod types;

// Classification and presentation helpers
pub mod classifier;
pub mod colors;
pub mod content_type;
pub mod summary;

// Re-export main types for convenience
pub use category::{Categorized, Category};
pub use classifier::{classify, classify_all, is_mutative_method};
pub use colors::{category_color, parse_hex_color, status_color, summary_color, StatusClass};
pub use content_type::base_content_type;
pub use error::LensError;
pub use summary::{CategoryBreakdown, CategoryCount};
pub use types::{Exchange, ExchangeRecord, Headers, HttpExchange, HttpRequest, HttpResponse};
