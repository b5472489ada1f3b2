use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Evidence is owned by the retrieval step; decisions hold references to it.
pub type SharedEvidence = Arc<EvidenceSource>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub text: String,
    // byte offsets into the submitted content, end exclusive
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSource {
    pub name: String,
    pub url: Option<String>,
    pub excerpt: String,
    pub credibility_score: Option<f64>, // 0.0..1.0
}

impl EvidenceSource {
    pub fn new(
        name: impl Into<String>,
        url: Option<String>,
        excerpt: impl Into<String>,
        credibility_score: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            url,
            excerpt: excerpt.into(),
            credibility_score,
        }
    }

    pub fn shared(self) -> SharedEvidence {
        Arc::new(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Supported,
    Disputed,
    Unclear,
}

impl Verdict {
    /// Lenient parse: trimmed, case-insensitive. Anything unknown is `Unclear`.
    pub fn coerce(raw: &str) -> Self {
        Self::parse_exact(raw).unwrap_or(Verdict::Unclear)
    }

    /// Strict variant of [`Verdict::coerce`], `None` when the label is unknown.
    pub fn parse_exact(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "supported" => Some(Verdict::Supported),
            "disputed" => Some(Verdict::Disputed),
            "unclear" => Some(Verdict::Unclear),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Supported => "supported",
            Verdict::Disputed => "disputed",
            Verdict::Unclear => "unclear",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decision record for a single claim.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClaimAnalysis {
    pub claim_text: String,
    pub verdict: Verdict,
    pub confidence: f64, // 0..100
    pub rationale: String,
    pub sources: Vec<SharedEvidence>,
    pub analysis_timestamp: DateTime<Utc>,
}

impl ClaimAnalysis {
    /// Builds a decision, clamping `confidence` into `[0, 100]`.
    ///
    /// Callers are responsible for `sources` being non-empty.
    pub fn new(
        claim_text: impl Into<String>,
        verdict: Verdict,
        confidence: f64,
        rationale: impl Into<String>,
        sources: Vec<SharedEvidence>,
    ) -> Self {
        Self {
            claim_text: claim_text.into(),
            verdict,
            confidence: clamp_confidence(confidence),
            rationale: rationale.into(),
            sources,
            analysis_timestamp: Utc::now(),
        }
    }
}

pub fn clamp_confidence(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Url,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Url => "url",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub claims: Vec<ClaimAnalysis>,
    pub analyzed_at: DateTime<Utc>,
    pub source_type: ContentType,
    pub total_claims_analyzed: usize,
}

impl AnalysisResult {
    pub fn new(claims: Vec<ClaimAnalysis>, source_type: ContentType) -> Self {
        let total_claims_analyzed = claims.len();
        Self {
            claims,
            analyzed_at: Utc::now(),
            source_type,
            total_claims_analyzed,
        }
    }
}
