//! Category classification for captured exchanges
//!
//! Pure functions only: the same exchange always yields the same category,
//! and nothing here fails. Missing or odd headers fall through to a later
//! branch of the priority chain.

use crate::category::Category;
use crate::content_type::{base_content_type, CSS_TYPES, DATA_TYPES, FONT_TYPES, JS_TYPES};
use crate::types::{Exchange, HttpExchange, HttpRequest};

/// Methods conventionally understood to modify server state
pub const MUTATIVE_METHODS: &[&str] = &["POST", "PATCH", "PUT", "DELETE"];

/// Case-sensitive check against [`MUTATIVE_METHODS`]
pub fn is_mutative_method(method: &str) -> bool {
    MUTATIVE_METHODS.contains(&method)
}

fn is_mutative(request: &HttpRequest) -> bool {
    is_mutative_method(&request.method)
}

/// Categorize a completed response by its base content type
fn content_category(content_type: &str) -> Option<Category> {
    if content_type.starts_with("image/") {
        Some(Category::Image)
    } else if JS_TYPES.contains(&content_type) {
        Some(Category::Js)
    } else if CSS_TYPES.contains(&content_type) {
        Some(Category::Css)
    } else if content_type == "text/html" {
        Some(Category::Html)
    } else if content_type.starts_with("font/") || FONT_TYPES.contains(&content_type) {
        Some(Category::Font)
    } else if DATA_TYPES.contains(&content_type) {
        Some(Category::Data)
    } else {
        None
    }
}

/// Classify an exchange into its display category
pub fn classify(exchange: &Exchange) -> Category {
    let category = match exchange {
        Exchange::Pending { request } => {
            if is_mutative(request) {
                Category::Mutative
            } else {
                Category::Incomplete
            }
        }
        Exchange::Completed { request, response } => {
            match content_category(base_content_type(&response.headers)) {
                Some(category) => category,
                None if is_mutative(request) => Category::Mutative,
                None => Category::Unknown,
            }
        }
    };

    tracing::trace!(
        method = %exchange.request().method,
        completed = exchange.is_completed(),
        %category,
        "classified exchange"
    );

    category
}

/// Classify every exchange, preserving order
pub fn classify_all<I>(exchanges: I) -> Vec<HttpExchange>
where
    I: IntoIterator<Item = Exchange>,
{
    exchanges.into_iter().map(HttpExchange::categorize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HttpResponse;

    fn completed(method: &str, content_type: Option<&str>) -> Exchange {
        let mut response = HttpResponse::new().with_status(200);
        if let Some(content_type) = content_type {
            response = response.with_header("content-type", content_type);
        }
        Exchange::completed(HttpRequest::new(method), response)
    }

    #[test]
    fn test_pending_exchanges() {
        for method in ["POST", "PATCH", "PUT", "DELETE"] {
            let exchange = Exchange::pending(HttpRequest::new(method));
            assert_eq!(classify(&exchange), Category::Mutative, "method {method}");
        }

        for method in ["GET", "HEAD", "OPTIONS", "post", "Delete"] {
            let exchange = Exchange::pending(HttpRequest::new(method));
            assert_eq!(classify(&exchange), Category::Incomplete, "method {method}");
        }
    }

    #[test]
    fn test_pending_ignores_request_content_type() {
        let request = HttpRequest::new("GET").with_header("content-type", "image/png");
        assert_eq!(classify(&Exchange::pending(request)), Category::Incomplete);
    }

    #[test]
    fn test_content_categories() {
        let cases = [
            ("image/png", Category::Image),
            ("image/svg+xml", Category::Image),
            ("text/javascript", Category::Js),
            ("application/javascript", Category::Js),
            ("application/x-javascript", Category::Js),
            ("application/ecmascript", Category::Js),
            ("text/css", Category::Css),
            ("text/css; charset=utf-8", Category::Css),
            ("text/html;charset=utf-8", Category::Html),
            ("font/woff2", Category::Font),
            ("application/vnd.ms-fontobject", Category::Font),
            ("application/x-font-typetype", Category::Font),
            ("application/json", Category::Data),
            ("application/xml", Category::Data),
            ("multipart/form-data; boundary=abc", Category::Data),
            ("application/x-www-form-urlencoded", Category::Data),
            ("application/x-protobuf", Category::Data),
        ];

        for (content_type, expected) in cases {
            assert_eq!(
                classify(&completed("GET", Some(content_type))),
                expected,
                "content type {content_type}"
            );
        }
    }

    #[test]
    fn test_content_type_wins_over_mutative_method() {
        assert_eq!(classify(&completed("POST", Some("application/json"))), Category::Data);
        assert_eq!(classify(&completed("DELETE", Some("text/html"))), Category::Html);
    }

    #[test]
    fn test_unmatched_content_type_falls_back_to_method() {
        assert_eq!(classify(&completed("GET", None)), Category::Unknown);
        assert_eq!(classify(&completed("DELETE", None)), Category::Mutative);
        assert_eq!(classify(&completed("GET", Some("text/plain"))), Category::Unknown);
        assert_eq!(classify(&completed("PUT", Some("text/plain"))), Category::Mutative);
    }

    #[test]
    fn test_no_case_normalization() {
        assert_eq!(classify(&completed("GET", Some("Text/HTML"))), Category::Unknown);
        assert_eq!(classify(&completed("GET", Some("IMAGE/PNG"))), Category::Unknown);
    }

    #[test]
    fn test_suffixed_json_is_not_data() {
        assert_eq!(
            classify(&completed("GET", Some("application/vnd.api+json"))),
            Category::Unknown
        );
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let categorized = classify_all(vec![
            completed("GET", Some("text/css")),
            Exchange::pending(HttpRequest::new("GET")),
            completed("GET", Some("font/otf")),
        ]);

        let categories: Vec<Category> = categorized.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![Category::Css, Category::Incomplete, Category::Font]
        );
    }
}
