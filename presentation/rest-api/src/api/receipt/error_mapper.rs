use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::receipt::errors::ReceiptError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, detail) = match &self {
            ReceiptError::NoImageUrls => (StatusCode::BAD_REQUEST, "No image URLs provided"),
            ReceiptError::ExtractionFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to extract receipt data",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                detail: detail.to_string(),
            }),
        )
    }
}
