use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::receipt::use_cases::process::ProcessReceiptUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::receipt::dto::{ProcessReceiptRequest, ProcessReceiptResponse};
use crate::api::tags::ApiTags;

pub struct ReceiptApi {
    process_use_case: Arc<dyn ProcessReceiptUseCase>,
}

impl ReceiptApi {
    pub fn new(process_use_case: Arc<dyn ProcessReceiptUseCase>) -> Self {
        Self { process_use_case }
    }
}

/// Receipt API
///
/// Endpoints for extracting structured data from receipt photos.
#[OpenApi]
impl ReceiptApi {
    /// Extract receipt data
    ///
    /// Sends the receipt image(s) to the vision model and returns merchant,
    /// transaction, line items and totals as JSON. Several URLs are treated
    /// as consecutive segments of one long receipt.
    #[oai(
        path = "/api/v1/process-receipt",
        method = "post",
        tag = "ApiTags::Receipts"
    )]
    async fn process_receipt(&self, body: Json<ProcessReceiptRequest>) -> ProcessReceiptApiResponse {
        match self.process_use_case.execute(body.0.into()).await {
            Ok(receipt) => ProcessReceiptApiResponse::Ok(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ProcessReceiptApiResponse::BadRequest(json),
                    _ => ProcessReceiptApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProcessReceiptApiResponse {
    #[oai(status = 200)]
    Ok(Json<ProcessReceiptResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
