use crate::Claim;

pub trait ClaimExtractor: Send + Sync {
    fn extract(&self, text: &str, max_claims: usize) -> Vec<Claim>;
}

/// Placeholder extractor: every non-empty period-delimited fragment is a claim.
#[derive(Clone, Copy, Debug, Default)]
pub struct SentenceExtractor;

impl ClaimExtractor for SentenceExtractor {
    fn extract(&self, text: &str, max_claims: usize) -> Vec<Claim> {
        let mut out = Vec::new();
        let mut offset = 0usize;

        for fragment in text.split('.') {
            let start = offset;
            offset += fragment.len() + 1;

            let trimmed = fragment.trim();
            if trimmed.is_empty() {
                continue;
            }
            if out.len() >= max_claims {
                break;
            }

            let lead = fragment.len() - fragment.trim_start().len();
            let begin = start + lead;
            out.push(Claim {
                text: trimmed.to_string(),
                start_index: Some(begin),
                end_index: Some(begin + trimmed.len()),
            });
        }

        out
    }
}
