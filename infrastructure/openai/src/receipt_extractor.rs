use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::receipt::errors::ExtractionError;
use business::domain::receipt::model::{ExtractedReceipt, ImageUrls};
use business::domain::receipt::services::ReceiptExtractorService;

use crate::client::ModelClient;
use crate::prompts::{system_prompt, user_prompt};

pub struct ReceiptExtractorOpenAI {
    client: ModelClient,
}

impl ReceiptExtractorOpenAI {
    pub fn new(client: ModelClient) -> Self {
        Self { client }
    }

    fn build_request(model: &str, image_urls: &ImageUrls) -> Value {
        let mode = image_urls.mode();

        let mut content = vec![json!({"type": "text", "text": user_prompt(mode)})];
        content.extend(
            image_urls
                .iter()
                .map(|url| json!({"type": "image_url", "image_url": {"url": url}})),
        );

        json!({
            "model": model,
            "messages": [
                {"role": "system", "content": system_prompt(mode)},
                {"role": "user", "content": content},
            ],
            "response_format": {"type": "json_object"},
        })
    }

    fn completion_text(data: &Value) -> Result<&str, ExtractionError> {
        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| ExtractionError::malformed("completion has no message content"))
    }

    fn parse_response(content: &str) -> Result<ExtractedReceipt, ExtractionError> {
        let parsed: Value = serde_json::from_str(content.trim())
            .map_err(|e| ExtractionError::malformed(e.to_string()))?;

        match parsed.as_object() {
            Some(object) if object.is_empty() => Err(ExtractionError::EmptyResponse),
            Some(_) => Ok(ExtractedReceipt::new(parsed)),
            None => Err(ExtractionError::malformed("response is not a JSON object")),
        }
    }
}

#[async_trait]
impl ReceiptExtractorService for ReceiptExtractorOpenAI {
    async fn extract(&self, image_urls: &ImageUrls) -> Result<ExtractedReceipt, ExtractionError> {
        let body = Self::build_request(&self.client.model, image_urls);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| ExtractionError::upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::upstream(format!(
                "model API responded with status {}",
                status
            )));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| ExtractionError::malformed(e.to_string()))?;

        Self::parse_response(Self::completion_text(&data)?)
    }
}
