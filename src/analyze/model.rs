use crate::analyze::data_url::EmbeddedImage;
use crate::analyze::AnalyzeError;
use serde_json::{json, Value};
use std::time::Duration;

const OPENAI_RESPONSES_URL: &str = "https://api.openai.com/v1/responses";
const UPSTREAM_TIMEOUT_SECS: u64 = 120;

/// The seam between the analyze pipeline and the hosted model. Tests
/// substitute a deterministic stub here.
pub trait VisionModel {
    /// One generation call: the fixed instruction plus one inlined image.
    /// Returns the provider's response JSON without interpreting it;
    /// shape-tolerant text extraction happens downstream.
    fn generate(&self, instruction: &str, image: &EmbeddedImage) -> Result<Value, AnalyzeError>;
}

/// Production backend: the OpenAI Responses API with a vision-capable
/// model.
pub struct OpenAiVision {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl OpenAiVision {
    pub fn new(api_key: String, model: String) -> Result<Self, AnalyzeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .build()
            .map_err(|e| AnalyzeError::Upstream(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }
}

impl VisionModel for OpenAiVision {
    fn generate(&self, instruction: &str, image: &EmbeddedImage) -> Result<Value, AnalyzeError> {
        let body = json!({
            "model": self.model,
            "input": [
                {
                    "role": "user",
                    "content": [
                        { "type": "input_text", "text": instruction },
                        { "type": "input_image", "image_url": image.to_data_url() },
                    ],
                }
            ],
        });

        let resp = self
            .client
            .post(OPENAI_RESPONSES_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| AnalyzeError::Upstream(format!("model request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| AnalyzeError::Upstream(format!("model response read failed: {e}")))?;

        if !status.is_success() {
            return Err(AnalyzeError::Upstream(format!(
                "model API error: {status} - {text}"
            )));
        }

        serde_json::from_str(&text)
            .map_err(|e| AnalyzeError::Upstream(format!("model response was not JSON: {e}")))
    }
}
