use std::sync::Arc;

use logger::TracingLogger;

use openai::client::ModelClient;
use openai::receipt_extractor::ReceiptExtractorOpenAI;

use business::application::receipt::process::ProcessReceiptUseCaseImpl;

use crate::config::model_config::ModelConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
}

impl DependencyContainer {
    pub fn new(model_config: &ModelConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let model_client = ModelClient::new(model_config.api_key.clone())
            .with_base_url(model_config.base_url.as_str())
            .with_model(model_config.model.as_str());
        let receipt_extractor = Arc::new(ReceiptExtractorOpenAI::new(model_client));

        // Receipt use cases
        let process_use_case = Arc::new(ProcessReceiptUseCaseImpl {
            extractor: receipt_extractor,
            logger,
        });

        let receipt_api = crate::api::receipt::routes::ReceiptApi::new(process_use_case);

        Self {
            health_api,
            receipt_api,
        }
    }
}
