//! Shared factories for exchange-lens integration tests

#![allow(dead_code)]

use exchange_lens::{Exchange, HttpRequest, HttpResponse};

/// Exchange that never received a response
pub fn pending(method: &str) -> Exchange {
    Exchange::pending(HttpRequest::new(method).with_url("https://example.com/"))
}

/// Completed exchange with an optional response content type
pub fn completed(method: &str, status: u16, content_type: Option<&str>) -> Exchange {
    let mut response = HttpResponse::new().with_status(status);
    if let Some(content_type) = content_type {
        response = response.with_header("content-type", content_type);
    }
    Exchange::completed(
        HttpRequest::new(method).with_url("https://example.com/"),
        response,
    )
}

/// Completed GET with a 200 response of the given content type
pub fn ok_get(content_type: &str) -> Exchange {
    completed("GET", 200, Some(content_type))
}
