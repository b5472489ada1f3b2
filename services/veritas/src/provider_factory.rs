use std::sync::Arc;

use tracing::{error, info};
use verdict::{prompt::FACT_CHECK_SYSTEM_PROMPT, LLMProvider};

use crate::config::{AppConfig, ProviderKind};
use crate::provider_gemini::GeminiProvider;
use crate::provider_lmstudio::LmStudioProvider;

/// Picks the model backend named by the config. `None` means fallback-only.
pub fn build_provider(cfg: &AppConfig) -> Option<Arc<dyn LLMProvider>> {
    let client = match http_client(cfg) {
        Ok(c) => c,
        Err(e) => {
            error!("failed to build http client: {e}");
            return None;
        }
    };
    let system_prompt = Some(FACT_CHECK_SYSTEM_PROMPT.to_string());

    let provider: Arc<dyn LLMProvider> = match cfg.provider {
        ProviderKind::None => {
            info!("model provider disabled by config");
            return None;
        }
        ProviderKind::Gemini => {
            let Some(key) = cfg.gemini_api_key.clone() else {
                error!("Gemini API key not found in environment variables");
                return None;
            };
            Arc::new(GeminiProvider::new(
                client,
                cfg.gemini_base_url.clone(),
                cfg.gemini_model.clone(),
                key,
                system_prompt,
            ))
        }
        ProviderKind::LmStudio => Arc::new(LmStudioProvider::new(client, cfg.lmstudio_url.clone(), system_prompt)),
    };

    let pi = provider.info();
    info!(provider = %pi.name, model = %pi.model, "model client created");
    Some(provider)
}

fn http_client(cfg: &AppConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(t) = cfg.llm_timeout {
        builder = builder.timeout(t);
    }
    builder.build()
}
