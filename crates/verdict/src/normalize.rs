use claims::{ClaimAnalysis, SharedEvidence, Verdict};
use serde_json::{Map, Value};
use tracing::warn;

use crate::{AnalysisError, Result};

pub const REQUIRED_KEYS: [&str; 4] = ["verdict", "confidence", "rationale", "relevant_source_indices"];

/// Validates a parsed model reply and coerces it into a decision.
///
/// Only a missing key or an unusable `confidence`/`rationale`/index list is an
/// error. Unknown verdicts degrade to `unclear`, out-of-range confidence is
/// clamped, and out-of-range source indices are dropped. When no index
/// survives, every piece of evidence is cited.
pub fn normalize(
    claim: &str,
    reply: &Map<String, Value>,
    evidence: &[SharedEvidence],
) -> Result<ClaimAnalysis> {
    if evidence.is_empty() {
        return Err(AnalysisError::MalformedResponse("no evidence to cite".into()));
    }

    if let Some(missing) = REQUIRED_KEYS.iter().find(|k| !reply.contains_key(**k)) {
        return Err(AnalysisError::MalformedResponse(format!(
            "missing required field: {missing}"
        )));
    }

    let verdict = coerce_verdict(&reply["verdict"]);
    let confidence = coerce_confidence(&reply["confidence"])?;

    let rationale = reply["rationale"]
        .as_str()
        .ok_or_else(|| AnalysisError::MalformedResponse("rationale must be a string".into()))?
        .to_string();

    let sources = select_sources(&reply["relevant_source_indices"], evidence)?;

    Ok(ClaimAnalysis::new(claim, verdict, confidence, rationale, sources))
}

fn coerce_verdict(v: &Value) -> Verdict {
    let raw = v.as_str().unwrap_or_default();
    if Verdict::parse_exact(raw).is_none() {
        warn!(verdict = %v, "invalid verdict, defaulting to unclear");
    }
    Verdict::coerce(raw)
}

fn coerce_confidence(v: &Value) -> Result<f64> {
    let raw = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let c = raw
        .filter(|c| c.is_finite())
        .ok_or_else(|| AnalysisError::MalformedResponse(format!("confidence is not numeric: {v}")))?;

    if !(0.0..=100.0).contains(&c) {
        warn!(confidence = c, "confidence out of range, clamping to 0-100");
    }
    Ok(claims::clamp_confidence(c))
}

fn select_sources(v: &Value, evidence: &[SharedEvidence]) -> Result<Vec<SharedEvidence>> {
    let indices = v.as_array().ok_or_else(|| {
        AnalysisError::MalformedResponse("relevant_source_indices must be an array".into())
    })?;

    let picked: Vec<SharedEvidence> = indices
        .iter()
        .filter_map(Value::as_u64)
        .filter_map(|i| usize::try_from(i).ok())
        .filter_map(|i| evidence.get(i).cloned())
        .collect();

    if picked.is_empty() {
        Ok(evidence.to_vec())
    } else {
        Ok(picked)
    }
}
