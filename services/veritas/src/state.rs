use std::sync::Arc;

use claims::{ClaimExtractor, SentenceExtractor};
use verdict::Analyzer;

use crate::cache::AnalysisCache;
use crate::config::AppConfig;
use crate::retriever::{EvidenceRetriever, PlaceholderRetriever};

pub type SharedState = Arc<AppState>;

/// Everything a request handler needs, built once at startup and injected.
#[derive(Clone)]
pub struct AppState {
    pub cfg: AppConfig,
    pub extractor: Arc<dyn ClaimExtractor>,
    pub retriever: Arc<dyn EvidenceRetriever>,
    pub analyzer: Arc<Analyzer>,
    pub cache: Arc<AnalysisCache>,
}

impl AppState {
    pub fn new(cfg: AppConfig, analyzer: Analyzer) -> Self {
        Self {
            cfg,
            extractor: Arc::new(SentenceExtractor),
            retriever: Arc::new(PlaceholderRetriever),
            analyzer: Arc::new(analyzer),
            cache: Arc::new(AnalysisCache::new()),
        }
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn ClaimExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_retriever(mut self, retriever: Arc<dyn EvidenceRetriever>) -> Self {
        self.retriever = retriever;
        self
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
