use std::sync::Arc;

use claims::{ClaimAnalysis, SharedEvidence};
use tracing::{info, warn};

use crate::{fallback, normalize, prompt, LLMProvider, ProviderInfo, Result};

/// Per-claim orchestrator: prompt, model call, normalization, fallback.
pub struct Analyzer {
    provider: Option<Arc<dyn LLMProvider>>,
}

impl Analyzer {
    pub fn new(provider: Option<Arc<dyn LLMProvider>>) -> Self {
        Self { provider }
    }

    pub fn offline() -> Self {
        Self { provider: None }
    }

    pub fn provider(&self) -> Option<&Arc<dyn LLMProvider>> {
        self.provider.as_ref()
    }

    pub fn provider_info(&self) -> Option<ProviderInfo> {
        self.provider.as_ref().map(|p| p.info())
    }

    /// Always yields a decision; model failures are downgraded to the fallback.
    pub async fn analyze(&self, claim: &str, evidence: &[SharedEvidence]) -> ClaimAnalysis {
        let Some(provider) = self.provider.as_ref() else {
            info!("using fallback analysis (no provider)");
            return fallback(claim, evidence);
        };

        // nothing for the model to cite
        if evidence.is_empty() {
            info!("using fallback analysis (no evidence)");
            return fallback(claim, evidence);
        }

        match self.model_decision(&**provider, claim, evidence).await {
            Ok(decision) => {
                info!(
                    verdict = %decision.verdict,
                    confidence = decision.confidence,
                    "analysis complete"
                );
                decision
            }
            Err(e) => {
                warn!(error = %e, "model analysis failed, falling back to basic analysis");
                fallback(claim, evidence)
            }
        }
    }

    async fn model_decision(
        &self,
        provider: &dyn LLMProvider,
        claim: &str,
        evidence: &[SharedEvidence],
    ) -> Result<ClaimAnalysis> {
        let prompt = prompt::build_analysis_prompt(claim, evidence);
        let reply = provider
            .generate_structured(&prompt, &prompt::response_schema())
            .await?;
        normalize(claim, &reply, evidence)
    }
}
