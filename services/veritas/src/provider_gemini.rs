use async_trait::async_trait;
use serde_json::Value;
use verdict::{AnalysisError, LLMProvider, ProviderInfo};

/// Google Generative Language API (`models/{model}:generateContent`).
pub struct GeminiProvider {
    base_url: String,
    model: String,
    api_key: String,
    system_prompt: Option<String>,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        model: String,
        api_key: String,
        system_prompt: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            system_prompt,
            client,
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/v1beta/models/{}{}", self.base_url, self.model, action)
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn chat(&self, prompt: &str) -> verdict::Result<String> {
        let text = match &self.system_prompt {
            Some(sys) => format!("{sys}\n\n{prompt}"),
            None => prompt.to_string(),
        };

        let body = serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": text}]}],
            "generationConfig": {"temperature": 0.2}
        });

        let resp = self
            .client
            .post(self.endpoint(":generateContent"))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AnalysisError::ModelUnavailable(format!("Gemini API error: {}", e.without_url())))?;

        let json: Value = resp
            .json()
            .await
            .map_err(|e| AnalysisError::ModelUnavailable(format!("Gemini API error: {e}")))?;

        candidate_text(&json)
            .ok_or_else(|| AnalysisError::ModelUnavailable("Empty response from Gemini".to_string()))
    }

    async fn ping(&self) -> verdict::Result<()> {
        self.client
            .get(self.endpoint(""))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AnalysisError::ModelUnavailable(e.without_url().to_string()))?;
        Ok(())
    }

    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "gemini".to_string(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
        }
    }
}

/// Concatenated text parts of the first candidate; `None` when blank.
fn candidate_text(json: &Value) -> Option<String> {
    let parts = json["candidates"][0]["content"]["parts"].as_array()?;
    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
