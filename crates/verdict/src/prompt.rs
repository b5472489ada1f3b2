use claims::SharedEvidence;
use serde_json::{json, Value};

/// System instructions sent ahead of every analysis prompt.
pub const FACT_CHECK_SYSTEM_PROMPT: &str = "\
You are Veritas, an expert fact-checking assistant. Your role is to analyze claims against provided evidence.

GUIDELINES:
- Be objective, evidence-based, and impartial
- Only use the provided evidence sources, do not use external knowledge
- If evidence is insufficient or conflicting, return \"unclear\"
- Provide clear, concise rationales explaining your reasoning
- Use confidence scores from 0-100 based on evidence strength and source credibility
- Never hallucinate or invent facts not present in the evidence
- Focus on factual accuracy, not opinions or beliefs

Always respond with valid JSON in the exact format specified.";

pub fn build_analysis_prompt(claim: &str, evidence: &[SharedEvidence]) -> String {
    let evidence_text = evidence
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let cred = src
                .credibility_score
                .map(|c| c.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            format!("[Source {}: {}]\n{}\nCredibility: {}\n", i + 1, src.name, src.excerpt, cred)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "CLAIM TO ANALYZE: \"{claim}\"

AVAILABLE EVIDENCE:
{evidence_text}

INSTRUCTIONS:
1. Determine if the evidence SUPPORTS, DISPUTES, or if it's UNCLEAR regarding the claim
2. Consider source credibility, evidence consistency, and factual accuracy
3. If evidence is conflicting or insufficient, return \"unclear\"
4. Provide a confidence score from 0-100 based on evidence strength
5. Write a clear rationale explaining your reasoning
6. Identify which evidence sources are most relevant (by index)

CRITERIA:
- SUPPORTED: Multiple credible sources confirm the claim
- DISPUTED: Credible evidence directly contradicts the claim
- UNCLEAR: Insufficient, conflicting, or low-quality evidence

Focus only on the provided evidence. Do not use external knowledge.
"
    )
}

/// Example reply handed to the model as the target shape.
pub fn response_schema() -> Value {
    json!({
        "verdict": "supported|disputed|unclear",
        "confidence": 85.0,
        "rationale": "Brief explanation based on the evidence...",
        "relevant_source_indices": [0, 1]
    })
}
