use std::collections::HashMap;

use claims::{AnalysisResult, ContentType};
use tokio::sync::RwLock;

/// Process-lifetime memo of finished analyses.
///
/// No eviction and no expiry. A get followed by a set is not atomic, so two
/// concurrent misses on one key both compute and the later write wins.
#[derive(Default)]
pub struct AnalysisCache {
    entries: RwLock<HashMap<String, AnalysisResult>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<content_type>:<blake3 hex of the raw content>`
    pub fn fingerprint(content_type: ContentType, content: &str) -> String {
        let digest = blake3::hash(content.as_bytes());
        format!("{}:{}", content_type, hex::encode(digest.as_bytes()))
    }

    pub async fn get(&self, key: &str) -> Option<AnalysisResult> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn set(&self, key: String, value: AnalysisResult) {
        self.entries.write().await.insert(key, value);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
