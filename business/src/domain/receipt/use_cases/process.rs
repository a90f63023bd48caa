use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ExtractedReceipt;

pub struct ProcessReceiptParams {
    pub image_url: Option<String>,
    pub image_urls: Option<Vec<String>>,
}

#[async_trait]
pub trait ProcessReceiptUseCase: Send + Sync {
    async fn execute(&self, params: ProcessReceiptParams)
    -> Result<ExtractedReceipt, ReceiptError>;
}
