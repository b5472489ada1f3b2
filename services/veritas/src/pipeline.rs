use claims::{AnalysisResult, ContentType};
use serde::Deserialize;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::cache::AnalysisCache;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Clone, Debug, Deserialize)]
pub struct AnalysisRequest {
    pub content: String,
    #[serde(default)]
    pub content_type: ContentType,
    pub max_claims: Option<usize>,
}

/// cache -> extract -> (retrieve, analyze) per claim -> cache
pub async fn run_analysis(state: &AppState, req: AnalysisRequest) -> Result<AnalysisResult, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("analyze", %request_id, content_type = %req.content_type);
    analyze_content(state, req).instrument(span).await
}

async fn analyze_content(state: &AppState, req: AnalysisRequest) -> Result<AnalysisResult, ApiError> {
    let key = AnalysisCache::fingerprint(req.content_type, &req.content);
    if let Some(hit) = state.cache.get(&key).await {
        info!("returning cached analysis");
        return Ok(hit);
    }

    let max_claims = req.max_claims.unwrap_or(state.cfg.max_claims_per_request);
    let claims = state.extractor.extract(&req.content, max_claims);
    if claims.is_empty() {
        return Err(ApiError::NoClaimsExtracted);
    }
    info!(claims = claims.len(), "claims extracted");

    let mut decisions = Vec::with_capacity(claims.len());
    for claim in &claims {
        let evidence = state.retriever.retrieve(&claim.text).await?;
        decisions.push(state.analyzer.analyze(&claim.text, &evidence).await);
    }

    let result = AnalysisResult::new(decisions, req.content_type);
    state.cache.set(key, result.clone()).await;
    Ok(result)
}
