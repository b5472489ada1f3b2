use claims::{ClaimAnalysis, EvidenceSource, SharedEvidence, Verdict};

pub const MISINFORMATION_MARKERS: [&str; 5] = [
    "cure",
    "miracle",
    "conspiracy",
    "hidden truth",
    "they do not want you to know",
];

pub const DISPUTED_CONFIDENCE: f64 = 60.0;
pub const UNCLEAR_CONFIDENCE: f64 = 40.0;

const DISPUTED_RATIONALE: &str = "Claim contains language patterns associated with misinformation.";
const UNCLEAR_RATIONALE: &str = "Insufficient evidence available for proper analysis.";

/// Offline keyword heuristic used whenever the model cannot produce a decision.
pub fn fallback(claim: &str, evidence: &[SharedEvidence]) -> ClaimAnalysis {
    let sources = if evidence.is_empty() {
        vec![placeholder_source()]
    } else {
        evidence.to_vec()
    };

    let lower = claim.to_lowercase();
    let (verdict, confidence, rationale) = if MISINFORMATION_MARKERS.iter().any(|m| lower.contains(m)) {
        (Verdict::Disputed, DISPUTED_CONFIDENCE, DISPUTED_RATIONALE)
    } else {
        (Verdict::Unclear, UNCLEAR_CONFIDENCE, UNCLEAR_RATIONALE)
    };

    ClaimAnalysis::new(claim, verdict, confidence, rationale, sources)
}

fn placeholder_source() -> SharedEvidence {
    EvidenceSource::new("Fallback Source", None, "Evidence retrieval unavailable.", Some(0.3)).shared()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misinformation_language_is_disputed() {
        let d = fallback("This miracle cure is hidden from you", &[]);
        assert_eq!(d.verdict, Verdict::Disputed);
        assert_eq!(d.confidence, 60.0);
        assert_eq!(d.sources.len(), 1);
        assert_eq!(d.sources[0].name, "Fallback Source");
        assert_eq!(d.sources[0].credibility_score, Some(0.3));
        assert!(d.sources[0].url.is_none());
    }

    #[test]
    fn neutral_claim_is_unclear() {
        let d = fallback("The sky appears blue due to Rayleigh scattering", &[]);
        assert_eq!(d.verdict, Verdict::Unclear);
        assert_eq!(d.confidence, 40.0);
        assert_eq!(d.rationale, UNCLEAR_RATIONALE);
        assert_eq!(d.sources.len(), 1);
    }

    #[test]
    fn markers_match_case_insensitively() {
        let d = fallback("What THEY DO NOT WANT YOU TO KNOW about water", &[]);
        assert_eq!(d.verdict, Verdict::Disputed);
        let d = fallback("The Hidden Truth of the pyramids", &[]);
        assert_eq!(d.verdict, Verdict::Disputed);
    }

    #[test]
    fn keeps_supplied_evidence() {
        let ev = vec![
            EvidenceSource::new("Mock Source 1", None, "x", Some(0.8)).shared(),
            EvidenceSource::new("Mock Source 2", None, "y", Some(0.7)).shared(),
        ];
        let d = fallback("Water boils at 100C at sea level", &ev);
        assert_eq!(d.sources, ev);
    }
}
