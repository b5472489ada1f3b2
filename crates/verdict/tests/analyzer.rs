use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use claims::{EvidenceSource, SharedEvidence, Verdict};
use verdict::{AnalysisError, Analyzer, LLMProvider, ProviderInfo};

/// Replies with a fixed text (or error) and records every prompt it sees.
struct ScriptedProvider {
    reply: std::result::Result<String, String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self { reply: Ok(text.to_string()), calls: AtomicUsize::new(0), prompts: Mutex::new(vec![]) })
    }

    fn failing(msg: &str) -> Arc<Self> {
        Arc::new(Self { reply: Err(msg.to_string()), calls: AtomicUsize::new(0), prompts: Mutex::new(vec![]) })
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    async fn chat(&self, prompt: &str) -> verdict::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(AnalysisError::ModelUnavailable)
    }

    async fn ping(&self) -> verdict::Result<()> {
        Ok(())
    }

    fn info(&self) -> ProviderInfo {
        ProviderInfo { name: "scripted".into(), base_url: "memory://".into(), model: "test".into() }
    }
}

fn evidence() -> Vec<SharedEvidence> {
    vec![
        EvidenceSource::new("Mock Source 1", None, "Evidence supporting or refuting: x", Some(0.8)).shared(),
        EvidenceSource::new("Mock Source 2", None, "Additional context", Some(0.7)).shared(),
    ]
}

#[tokio::test]
async fn model_reply_becomes_decision() {
    let provider = ScriptedProvider::ok(
        r#"```json
{"verdict": " Supported ", "confidence": 91, "rationale": "Both agree.", "relevant_source_indices": [1]}
```"#,
    );
    let analyzer = Analyzer::new(Some(provider.clone() as Arc<dyn LLMProvider>));
    let ev = evidence();

    let d = analyzer.analyze("The earth is round", &ev).await;

    assert_eq!(d.verdict, Verdict::Supported);
    assert_eq!(d.confidence, 91.0);
    assert_eq!(d.rationale, "Both agree.");
    assert_eq!(d.sources.len(), 1);
    assert!(Arc::ptr_eq(&d.sources[0], &ev[1]));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn prompt_is_closed_world_and_schema_shaped() {
    let provider = ScriptedProvider::ok(
        r#"{"verdict": "unclear", "confidence": 50, "rationale": "r", "relevant_source_indices": []}"#,
    );
    let analyzer = Analyzer::new(Some(provider.clone() as Arc<dyn LLMProvider>));
    analyzer.analyze("Bananas are blue", &evidence()).await;

    let prompts = provider.prompts.lock().unwrap();
    let p = &prompts[0];
    assert!(p.contains("CLAIM TO ANALYZE: \"Bananas are blue\""));
    assert!(p.contains("[Source 2: Mock Source 2]"));
    assert!(p.contains("Do not use external knowledge."));
    assert!(p.contains("\"relevant_source_indices\""));
}

#[tokio::test]
async fn missing_field_falls_back() {
    let provider = ScriptedProvider::ok(r#"{"verdict": "supported", "confidence": 99}"#);
    let analyzer = Analyzer::new(Some(provider as Arc<dyn LLMProvider>));

    let d = analyzer.analyze("A miracle cure for everything", &evidence()).await;

    assert_eq!(d.verdict, Verdict::Disputed);
    assert_eq!(d.confidence, 60.0);
    assert_eq!(d.sources.len(), 2);
}

#[tokio::test]
async fn prose_reply_falls_back() {
    let provider = ScriptedProvider::ok("I believe this is supported by the evidence.");
    let analyzer = Analyzer::new(Some(provider as Arc<dyn LLMProvider>));

    let d = analyzer.analyze("Water is wet", &evidence()).await;

    assert_eq!(d.verdict, Verdict::Unclear);
    assert_eq!(d.confidence, 40.0);
}

#[tokio::test]
async fn provider_error_falls_back() {
    let provider = ScriptedProvider::failing("connection refused");
    let analyzer = Analyzer::new(Some(provider.clone() as Arc<dyn LLMProvider>));

    let d = analyzer.analyze("The sky appears blue due to Rayleigh scattering", &evidence()).await;

    assert_eq!(d.verdict, Verdict::Unclear);
    assert_eq!(d.confidence, 40.0);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn no_provider_uses_fallback() {
    let analyzer = Analyzer::offline();
    assert!(analyzer.provider_info().is_none());

    let d = analyzer.analyze("This miracle cure is hidden from you", &[]).await;

    assert_eq!(d.verdict, Verdict::Disputed);
    assert_eq!(d.confidence, 60.0);
    assert_eq!(d.sources[0].credibility_score, Some(0.3));
}

#[tokio::test]
async fn empty_evidence_skips_the_model() {
    let provider = ScriptedProvider::ok(
        r#"{"verdict": "supported", "confidence": 99, "rationale": "r", "relevant_source_indices": [0]}"#,
    );
    let analyzer = Analyzer::new(Some(provider.clone() as Arc<dyn LLMProvider>));

    let d = analyzer.analyze("Anything at all", &[]).await;

    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    assert!(!d.sources.is_empty());
}
