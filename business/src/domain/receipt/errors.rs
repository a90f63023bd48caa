/// Failures reported by a receipt extractor.
///
/// Kept apart from [`ReceiptError`] so callers can tell a transport/API problem
/// (worth retrying) from a response the model got wrong.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    #[error("extraction.upstream: {0}")]
    Upstream(String),
    #[error("extraction.malformed_response: {0}")]
    MalformedResponse(String),
    #[error("extraction.empty_response")]
    EmptyResponse,
}

impl ExtractionError {
    pub fn upstream(detail: impl Into<String>) -> Self {
        ExtractionError::Upstream(detail.into())
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        ExtractionError::MalformedResponse(detail.into())
    }

    /// Whether repeating the same call could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ExtractionError::Upstream(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt.no_image_urls")]
    NoImageUrls,
    #[error("receipt.extraction_failed")]
    ExtractionFailed(#[from] ExtractionError),
}
