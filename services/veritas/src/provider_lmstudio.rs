use async_trait::async_trait;
use verdict::{AnalysisError, LLMProvider, ProviderInfo};

/// OpenAI-compatible chat endpoint, as served by LM Studio.
pub struct LmStudioProvider {
    base_url: String,
    model: String,
    system_prompt: Option<String>,
    client: reqwest::Client,
}

impl LmStudioProvider {
    pub fn new(client: reqwest::Client, base_url: String, system_prompt: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            // LM Studio answers with whatever model is loaded
            model: "default".to_string(),
            system_prompt,
            client,
        }
    }
}

#[async_trait]
impl LLMProvider for LmStudioProvider {
    async fn chat(&self, prompt: &str) -> verdict::Result<String> {
        let mut messages = Vec::new();
        if let Some(sys) = &self.system_prompt {
            messages.push(serde_json::json!({"role": "system", "content": sys}));
        }
        messages.push(serde_json::json!({"role": "user", "content": prompt}));

        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0.2
        });

        let url = format!("{}/v1/chat/completions", self.base_url);
        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AnalysisError::ModelUnavailable(e.to_string()))?;
        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| AnalysisError::ModelUnavailable(e.to_string()))?;

        match json["choices"][0]["message"]["content"].as_str() {
            Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
            _ => Err(AnalysisError::ModelUnavailable("Empty response from LM Studio".to_string())),
        }
    }

    async fn ping(&self) -> verdict::Result<()> {
        let url = format!("{}/v1/models", self.base_url);
        self.client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AnalysisError::ModelUnavailable(e.to_string()))?;
        Ok(())
    }

    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "lmstudio".to_string(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
        }
    }
}
