//! Verdict engine: turns a claim plus its evidence into a `ClaimAnalysis`.
//!
//! The model is consulted through [`LLMProvider`]; whatever it replies is
//! normalized into a decision, and any failure along the way lands on the
//! keyword fallback so every claim always gets a verdict.

mod error;
pub mod provider;
pub mod prompt;
pub mod normalize;
pub mod fallback;
pub mod analyzer;

pub use error::{AnalysisError, Result};
pub use provider::{LLMProvider, ProviderInfo};
pub use normalize::normalize;
pub use fallback::fallback;
pub use analyzer::Analyzer;
