use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::receipt::model::ExtractedReceipt;
use business::domain::receipt::use_cases::process::ProcessReceiptParams;

/// Request to extract data from one receipt.
///
/// Send `image_urls` for a long receipt photographed in several segments
/// (top to bottom), or `image_url` for a single photo. When both are present
/// a non-empty `image_urls` wins.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProcessReceiptRequest {
    /// Publicly reachable URL of a single receipt image
    pub image_url: Option<String>,
    /// Ordered URLs of receipt segments
    pub image_urls: Option<Vec<String>>,
}

impl From<ProcessReceiptRequest> for ProcessReceiptParams {
    fn from(request: ProcessReceiptRequest) -> Self {
        Self {
            image_url: request.image_url,
            image_urls: request.image_urls,
        }
    }
}

/// Successful extraction.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProcessReceiptResponse {
    /// Always "success"
    pub status: String,
    /// Receipt data as returned by the model: merchant, transaction, items,
    /// totals and payment_method. Missing values are null.
    pub payload: serde_json::Value,
}

impl From<ExtractedReceipt> for ProcessReceiptResponse {
    fn from(receipt: ExtractedReceipt) -> Self {
        Self {
            status: "success".to_string(),
            payload: receipt.into_value(),
        }
    }
}
