use thiserror::Error;

/// Errors raised at the edges of the library.
///
/// Classification and color lookups are total and never produce these;
/// only conversions from untrusted text do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LensError {
    #[error("Unknown exchange category '{label}'. Expected one of: {expected}")]
    ParseCategory { label: String, expected: String },
}

impl LensError {
    /// Create a new category parse error listing the accepted labels
    pub fn parse_category<S: Into<String>>(label: S) -> Self {
        let expected = crate::category::Category::ALL
            .iter()
            .map(|category| category.label())
            .collect::<Vec<_>>()
            .join(", ");

        Self::ParseCategory {
            label: label.into(),
            expected,
        }
    }
}
