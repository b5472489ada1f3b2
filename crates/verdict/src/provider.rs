use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{AnalysisError, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub base_url: String,
    pub model: String,
}

/// Capability every model backend offers to the analyzer.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Free-text completion.
    async fn chat(&self, prompt: &str) -> Result<String>;

    /// Asks for a reply shaped like `schema` and parses it into a JSON object.
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<Map<String, Value>> {
        let text = self.chat(&structured_prompt(prompt, schema)).await?;
        debug!(raw = %text, "structured reply");
        parse_structured_reply(&text)
    }

    async fn ping(&self) -> Result<()>;

    fn info(&self) -> ProviderInfo;
}

pub fn structured_prompt(prompt: &str, schema: &Value) -> String {
    let shape = serde_json::to_string_pretty(schema).unwrap_or_else(|_| schema.to_string());
    format!(
        "{prompt}\n\n\
You MUST respond with ONLY valid JSON in this exact format:\n\
{shape}\n\n\
IMPORTANT:\n\
- Do not include any other text, explanations, or markdown formatting\n\
- Do not use code blocks or backticks\n\
- Return pure JSON only\n\n\
Your response:\n"
    )
}

/// Strips Markdown code fences and parses the remaining text as a JSON object.
pub fn parse_structured_reply(text: &str) -> Result<Map<String, Value>> {
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix("```json") {
        s = rest;
    } else if let Some(rest) = s.strip_prefix("```") {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }
    let s = s.trim();

    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AnalysisError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(AnalysisError::MalformedResponse(format!("invalid JSON: {e}"))),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let m = parse_structured_reply(r#" {"verdict": "supported", "confidence": 90} "#).unwrap();
        assert_eq!(m["verdict"], "supported");
    }

    #[test]
    fn strips_code_fences() {
        let fenced = "```json\n{\"verdict\": \"disputed\"}\n```";
        assert_eq!(parse_structured_reply(fenced).unwrap()["verdict"], "disputed");

        let bare = "```\n{\"verdict\": \"unclear\"}\n```";
        assert_eq!(parse_structured_reply(bare).unwrap()["verdict"], "unclear");
    }

    #[test]
    fn rejects_prose_and_non_objects() {
        assert!(matches!(
            parse_structured_reply("I think the claim is supported."),
            Err(AnalysisError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_structured_reply("[1, 2, 3]"),
            Err(AnalysisError::MalformedResponse(_))
        ));
    }

    #[test]
    fn structured_prompt_embeds_schema() {
        let schema = serde_json::json!({"verdict": "supported|disputed|unclear"});
        let p = structured_prompt("CLAIM", &schema);
        assert!(p.starts_with("CLAIM"));
        assert!(p.contains("\"verdict\": \"supported|disputed|unclear\""));
        assert!(p.contains("Return pure JSON only"));
    }
}
