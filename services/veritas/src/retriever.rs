use async_trait::async_trait;
use claims::{EvidenceSource, SharedEvidence};

#[async_trait]
pub trait EvidenceRetriever: Send + Sync {
    async fn retrieve(&self, claim: &str) -> anyhow::Result<Vec<SharedEvidence>>;
}

/// Stand-in until a real search backend exists: two fixed snippets per claim.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderRetriever;

#[async_trait]
impl EvidenceRetriever for PlaceholderRetriever {
    async fn retrieve(&self, claim: &str) -> anyhow::Result<Vec<SharedEvidence>> {
        Ok(vec![
            EvidenceSource::new(
                "Mock Source 1",
                None,
                format!("Evidence supporting or refuting: {claim}"),
                Some(0.8),
            )
            .shared(),
            EvidenceSource::new(
                "Mock Source 2",
                None,
                "Additional context and information about the claim",
                Some(0.7),
            )
            .shared(),
        ])
    }
}
