use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::{ExtractedReceipt, ImageUrls};
use crate::domain::receipt::services::ReceiptExtractorService;
use crate::domain::receipt::use_cases::process::{ProcessReceiptParams, ProcessReceiptUseCase};

pub struct ProcessReceiptUseCaseImpl {
    pub extractor: Arc<dyn ReceiptExtractorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProcessReceiptUseCase for ProcessReceiptUseCaseImpl {
    async fn execute(
        &self,
        params: ProcessReceiptParams,
    ) -> Result<ExtractedReceipt, ReceiptError> {
        let image_urls = match ImageUrls::from_request(params.image_url, params.image_urls) {
            Ok(urls) => urls,
            Err(err) => {
                self.logger.warn("Rejected receipt request: no image URLs");
                return Err(err);
            }
        };

        self.logger.info(&format!(
            "Processing receipt: {} image(s), {} mode",
            image_urls.len(),
            image_urls.mode()
        ));

        let receipt = self.extractor.extract(&image_urls).await.map_err(|err| {
            self.logger.error(&format!(
                "Extraction Error: {} (retryable: {})",
                err,
                err.is_retryable()
            ));
            ReceiptError::from(err)
        })?;

        match receipt.item_count() {
            Some(count) => self
                .logger
                .info(&format!("Receipt extracted: {} items found", count)),
            None => self.logger.info("Receipt extracted"),
        }

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::receipt::errors::ExtractionError;
    use mockall::mock;
    use serde_json::json;

    mock! {
        pub ReceiptExtractor {}

        #[async_trait]
        impl ReceiptExtractorService for ReceiptExtractor {
            async fn extract(&self, image_urls: &ImageUrls) -> Result<ExtractedReceipt, ExtractionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_receipt() -> ExtractedReceipt {
        ExtractedReceipt::new(json!({
            "merchant": {"name": "Shop", "address": null, "phone": null},
            "items": [
                {"name": "Milk", "quantity": 1, "price_per_unit": 0.89, "total_price": 0.89}
            ],
            "totals": {"subtotal": 0.89, "tax": null, "total": 0.89, "currency": "EUR"}
        }))
    }

    #[tokio::test]
    async fn should_return_receipt_when_single_url_extracted() {
        let mut mock_extractor = MockReceiptExtractor::new();
        mock_extractor
            .expect_extract()
            .withf(|urls| urls.as_slice() == ["a.jpg".to_string()])
            .times(1)
            .returning(|_| Ok(sample_receipt()));

        let use_case = ProcessReceiptUseCaseImpl {
            extractor: Arc::new(mock_extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ProcessReceiptParams {
                image_url: Some("a.jpg".to_string()),
                image_urls: None,
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), sample_receipt());
    }

    #[tokio::test]
    async fn should_pass_all_urls_in_order_with_multi_mode() {
        let mut mock_extractor = MockReceiptExtractor::new();
        mock_extractor
            .expect_extract()
            .withf(|urls| {
                urls.as_slice() == ["a.jpg".to_string(), "b.jpg".to_string()]
                    && urls.mode() == crate::domain::receipt::model::ExtractionMode::Multi
            })
            .times(1)
            .returning(|_| Ok(sample_receipt()));

        let use_case = ProcessReceiptUseCaseImpl {
            extractor: Arc::new(mock_extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ProcessReceiptParams {
                image_url: None,
                image_urls: Some(vec!["a.jpg".to_string(), "b.jpg".to_string()]),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_request_without_calling_extractor() {
        let mut mock_extractor = MockReceiptExtractor::new();
        mock_extractor.expect_extract().never();

        let use_case = ProcessReceiptUseCaseImpl {
            extractor: Arc::new(mock_extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ProcessReceiptParams {
                image_url: Some(String::new()),
                image_urls: Some(vec![]),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReceiptError::NoImageUrls));
    }

    #[tokio::test]
    async fn should_return_extraction_failed_when_upstream_errors() {
        let mut mock_extractor = MockReceiptExtractor::new();
        mock_extractor
            .expect_extract()
            .returning(|_| Err(ExtractionError::upstream("status 401")));

        let use_case = ProcessReceiptUseCaseImpl {
            extractor: Arc::new(mock_extractor),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ProcessReceiptParams {
                image_url: Some("a.jpg".to_string()),
                image_urls: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ReceiptError::ExtractionFailed(ExtractionError::Upstream(_))
        ));
    }

    #[tokio::test]
    async fn should_log_error_when_response_is_malformed() {
        let mut mock_extractor = MockReceiptExtractor::new();
        mock_extractor
            .expect_extract()
            .returning(|_| Err(ExtractionError::malformed("expected value at line 1")));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("extraction.malformed_response"))
            .times(1)
            .returning(|_| ());

        let use_case = ProcessReceiptUseCaseImpl {
            extractor: Arc::new(mock_extractor),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(ProcessReceiptParams {
                image_url: Some("a.jpg".to_string()),
                image_urls: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ReceiptError::ExtractionFailed(ExtractionError::MalformedResponse(_))
        ));
    }
}
