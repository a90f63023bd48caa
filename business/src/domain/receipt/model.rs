use serde::{Deserialize, Serialize};

use super::errors::ReceiptError;

/// Non-empty, ordered list of receipt image URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls(Vec<String>);

impl ImageUrls {
    /// Normalizes the two optional request fields into a single list.
    ///
    /// A non-empty `image_urls` wins; otherwise `image_url` becomes a
    /// one-element list. Entries are trimmed and blank ones discarded.
    pub fn from_request(
        image_url: Option<String>,
        image_urls: Option<Vec<String>>,
    ) -> Result<Self, ReceiptError> {
        let many: Vec<String> = image_urls
            .unwrap_or_default()
            .into_iter()
            .filter_map(non_blank)
            .collect();

        let urls = if many.is_empty() {
            image_url.and_then(non_blank).into_iter().collect()
        } else {
            many
        };

        Self::new(urls)
    }

    pub fn new(urls: Vec<String>) -> Result<Self, ReceiptError> {
        if urls.is_empty() {
            return Err(ReceiptError::NoImageUrls);
        }
        Ok(Self(urls))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // Always false for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn mode(&self) -> ExtractionMode {
        if self.0.len() > 1 {
            ExtractionMode::Multi
        } else {
            ExtractionMode::Single
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

fn non_blank(url: String) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Whether the images show one receipt or segments of one long receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    Single,
    Multi,
}

impl std::fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionMode::Single => write!(f, "single"),
            ExtractionMode::Multi => write!(f, "multi"),
        }
    }
}

/// Structured receipt data as returned by the model.
///
/// The expected shape (merchant, transaction, items, totals, payment_method)
/// is an instruction to the model only; the value is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedReceipt(serde_json::Value);

impl ExtractedReceipt {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Number of line items, when the model returned an `items` array.
    pub fn item_count(&self) -> Option<usize> {
        self.0.get("items").and_then(|i| i.as_array()).map(Vec::len)
    }
}
