//! Fixtures shared by the workspace integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// A capture covering every category at least once
pub const FULL_CAPTURE: &str = r#"[
  {"request": {"method": "GET", "url": "https://shop.example/"},
   "response": {"status": 200, "headers": {"Content-Type": "text/html; charset=utf-8"}}},
  {"request": {"method": "GET", "url": "https://shop.example/app.js"},
   "response": {"status": 200, "headers": {"content-type": "application/javascript"}}},
  {"request": {"method": "GET", "url": "https://shop.example/site.css"},
   "response": {"status": 304, "headers": {"content-type": "text/css"}}},
  {"request": {"method": "GET", "url": "https://shop.example/logo.svg"},
   "response": {"status": 200, "headers": {"content-type": "image/svg+xml"}}},
  {"request": {"method": "GET", "url": "https://shop.example/inter.woff2"},
   "response": {"status": 200, "headers": {"content-type": "font/woff2"}}},
  {"request": {"method": "GET", "url": "https://shop.example/api/cart"},
   "response": {"status": 200, "headers": {"content-type": "application/json"}}},
  {"request": {"method": "POST", "url": "https://shop.example/api/cart"},
   "response": {"status": 201, "headers": {}}},
  {"request": {"method": "GET", "url": "https://shop.example/robots.txt"},
   "response": {"status": 404, "headers": {"content-type": "text/plain"}}},
  {"request": {"method": "GET", "url": "https://shop.example/slow"}}
]"#;

/// Write a capture file into `dir` and return its path
pub fn write_capture(dir: &Path, name: &str, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exchange_lens::Exchange;

    #[test]
    fn test_full_capture_parses() {
        let exchanges: Vec<Exchange> = serde_json::from_str(FULL_CAPTURE).unwrap();
        assert_eq!(exchanges.len(), 9);
    }
}
