use crate::category::{Categorized, Category};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Header map keyed by lowercase header name
pub type Headers = HashMap<String, String>;

/// Store a header under its lowercase name.
///
/// A name already spelled in lowercase always takes the slot; any other
/// spelling only fills it while it is empty.
fn insert_header(headers: &mut Headers, name: String, value: String) {
    let lower = name.to_ascii_lowercase();
    if lower == name {
        headers.insert(lower, value);
    } else {
        headers.entry(lower).or_insert(value);
    }
}

/// Lowercase every header name, keeping values untouched.
///
/// Map iteration order is unspecified, so names colliding after lowercasing
/// are resolved by spelling: the lowercase one wins, otherwise the
/// lexicographically smallest original name.
fn lowercase_names(headers: Headers) -> Headers {
    let (exact, mut mixed): (Vec<_>, Vec<_>) = headers
        .into_iter()
        .partition(|(name, _)| !name.bytes().any(|b| b.is_ascii_uppercase()));
    mixed.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut normalized = Headers::with_capacity(exact.len() + mixed.len());
    for (name, value) in exact.into_iter().chain(mixed) {
        insert_header(&mut normalized, name, value);
    }
    normalized
}

fn deserialize_headers<'de, D>(deserializer: D) -> std::result::Result<Headers, D::Error>
where
    D: Deserializer<'de>,
{
    Headers::deserialize(deserializer).map(lowercase_names)
}

/// Request half of a captured exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_headers")]
    pub headers: Headers,
}

impl HttpRequest {
    /// Create a request with no URL and no headers
    pub fn new<S: Into<String>>(method: S) -> Self {
        Self {
            method: method.into(),
            url: None,
            headers: Headers::new(),
        }
    }

    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add a header, lowercasing its name
    pub fn with_header<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        insert_header(&mut self.headers, name.into(), value.into());
        self
    }
}

/// Response half of a captured exchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, deserialize_with = "deserialize_headers")]
    pub headers: Headers,
}

impl HttpResponse {
    /// Create a response with no status and no headers
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Add a header, lowercasing its name
    pub fn with_header<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        insert_header(&mut self.headers, name.into(), value.into());
        self
    }
}

/// Wire shape of an exchange: completeness is the presence of `response`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub request: HttpRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<HttpResponse>,
}

/// One captured HTTP transaction.
///
/// An exchange is either still waiting on its response or completed; the
/// capture layer decides which variant to build, so the classifier never has
/// to re-check completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ExchangeRecord", into = "ExchangeRecord")]
pub enum Exchange {
    Pending {
        request: HttpRequest,
    },
    Completed {
        request: HttpRequest,
        response: HttpResponse,
    },
}

impl From<ExchangeRecord> for Exchange {
    fn from(record: ExchangeRecord) -> Self {
        Exchange::new(record.request, record.response)
    }
}

impl From<Exchange> for ExchangeRecord {
    fn from(exchange: Exchange) -> Self {
        match exchange {
            Exchange::Pending { request } => ExchangeRecord {
                request,
                response: None,
            },
            Exchange::Completed { request, response } => ExchangeRecord {
                request,
                response: Some(response),
            },
        }
    }
}

impl Exchange {
    /// Build the variant matching whether a response is present
    pub fn new(request: HttpRequest, response: Option<HttpResponse>) -> Self {
        match response {
            Some(response) => Exchange::Completed { request, response },
            None => Exchange::Pending { request },
        }
    }

    pub fn pending(request: HttpRequest) -> Self {
        Exchange::Pending { request }
    }

    pub fn completed(request: HttpRequest, response: HttpResponse) -> Self {
        Exchange::Completed { request, response }
    }

    pub fn request(&self) -> &HttpRequest {
        match self {
            Exchange::Pending { request } | Exchange::Completed { request, .. } => request,
        }
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            Exchange::Pending { .. } => None,
            Exchange::Completed { response, .. } => Some(response),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Exchange::Completed { .. })
    }

    /// Response status, if the exchange completed with one
    pub fn status(&self) -> Option<u16> {
        self.response().and_then(|response| response.status)
    }
}

/// An exchange together with the category assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpExchange {
    #[serde(flatten)]
    pub exchange: Exchange,
    pub category: Category,
}

impl HttpExchange {
    /// Classify an exchange and keep the result alongside it
    pub fn categorize(exchange: Exchange) -> Self {
        let category = crate::classifier::classify(&exchange);
        Self { exchange, category }
    }

    pub fn request(&self) -> &HttpRequest {
        self.exchange.request()
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        self.exchange.response()
    }

    pub fn status(&self) -> Option<u16> {
        self.exchange.status()
    }
}

impl Categorized for HttpExchange {
    fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_response_deserializes_as_pending() {
        let exchange: Exchange =
            serde_json::from_str(r#"{"request": {"method": "GET"}}"#).unwrap();

        assert!(!exchange.is_completed());
        assert_eq!(exchange.request().method, "GET");
        assert!(exchange.request().headers.is_empty());
        assert_eq!(exchange.status(), None);
    }

    #[test]
    fn test_response_deserializes_as_completed() {
        let exchange: Exchange = serde_json::from_str(
            r#"{
                "request": {"method": "GET", "url": "https://example.com/"},
                "response": {"status": 200, "headers": {"Content-Type": "Text/HTML"}}
            }"#,
        )
        .unwrap();

        assert!(exchange.is_completed());
        assert_eq!(exchange.status(), Some(200));
        assert_eq!(exchange.request().url.as_deref(), Some("https://example.com/"));

        // Names are lowercased, values are not
        let headers = &exchange.response().unwrap().headers;
        assert_eq!(headers.get("content-type").map(String::as_str), Some("Text/HTML"));
        assert!(!headers.contains_key("Content-Type"));
    }

    #[test]
    fn test_serialize_omits_absent_response() {
        let exchange = Exchange::pending(HttpRequest::new("POST"));
        let value = serde_json::to_value(&exchange).unwrap();

        assert_eq!(value["request"]["method"], "POST");
        assert!(value.get("response").is_none());
    }

    #[test]
    fn test_with_header_lowercases_name() {
        let request = HttpRequest::new("PUT").with_header("X-Trace", "abc");

        assert_eq!(request.headers.get("x-trace").map(String::as_str), Some("abc"));
        assert!(!request.headers.contains_key("X-Trace"));
    }

    #[test]
    fn test_lowercase_header_name_wins_collision() {
        let json = r#"{
            "request": {"method": "GET"},
            "response": {"headers": {"Content-Type": "text/html", "content-type": "image/png"}}
        }"#;

        // HashMap iteration order varies between instances
        for _ in 0..200 {
            let exchange: Exchange = serde_json::from_str(json).unwrap();
            let headers = &exchange.response().unwrap().headers;

            assert_eq!(headers.len(), 1);
            assert_eq!(headers.get("content-type").map(String::as_str), Some("image/png"));
            assert_eq!(crate::classifier::classify(&exchange), Category::Image);
        }
    }

    #[test]
    fn test_mixed_case_collision_picks_smallest_spelling() {
        let json = r#"{"method": "GET", "headers": {"X-TRACE": "upper", "X-Trace": "title"}}"#;

        for _ in 0..50 {
            let request: HttpRequest = serde_json::from_str(json).unwrap();
            assert_eq!(request.headers.get("x-trace").map(String::as_str), Some("upper"));
        }
    }

    #[test]
    fn test_with_header_agrees_with_deserialization() {
        let lower_last = HttpResponse::new()
            .with_header("Content-Type", "text/html")
            .with_header("content-type", "image/png");
        let lower_first = HttpResponse::new()
            .with_header("content-type", "image/png")
            .with_header("Content-Type", "text/html");

        assert_eq!(lower_last.headers.get("content-type").map(String::as_str), Some("image/png"));
        assert_eq!(lower_first.headers, lower_last.headers);
    }

    #[test]
    fn test_new_picks_variant_from_response() {
        let request = HttpRequest::new("GET");

        assert!(matches!(Exchange::new(request.clone(), None), Exchange::Pending { .. }));
        assert!(matches!(
            Exchange::new(request, Some(HttpResponse::new())),
            Exchange::Completed { .. }
        ));
    }

    #[test]
    fn test_categorized_exchange_serializes_flat() {
        let exchange = HttpExchange::categorize(Exchange::completed(
            HttpRequest::new("GET"),
            HttpResponse::new().with_header("content-type", "image/png"),
        ));
        let value = serde_json::to_value(&exchange).unwrap();

        assert_eq!(value["category"], "image");
        assert_eq!(value["request"]["method"], "GET");
        assert_eq!(value["response"]["headers"]["content-type"], "image/png");
    }
}
