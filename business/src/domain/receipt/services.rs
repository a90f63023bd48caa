use async_trait::async_trait;

use super::errors::ExtractionError;
use super::model::{ExtractedReceipt, ImageUrls};

/// Service port for turning receipt images into structured data.
///
/// Implementations make a single attempt and report every failure as an
/// [`ExtractionError`]; they never retry.
#[async_trait]
pub trait ReceiptExtractorService: Send + Sync {
    async fn extract(&self, image_urls: &ImageUrls) -> Result<ExtractedReceipt, ExtractionError>;
}
