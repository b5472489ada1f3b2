use std::time::Duration;

use anyhow::{bail, Context, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    LmStudio,
    None,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub app_name: String,
    pub debug: bool,
    pub bind_addr: String,

    pub provider: ProviderKind,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub lmstudio_url: String,
    pub llm_timeout: Option<Duration>,

    pub max_claims_per_request: usize,
    // declared only; nothing throttles or expires on these yet
    pub requests_per_minute: u32,
    pub cache_ttl_seconds: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let app_name = var("APP_NAME").unwrap_or_else(|| "Veritas Backend".to_string());
        let debug = var("DEBUG").map(|v| truthy(&v)).unwrap_or(false);
        let bind_addr = var("VERITAS_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8000".to_string());

        let provider = match var("LLM_PROVIDER").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("gemini") => ProviderKind::Gemini,
            Some("lmstudio") => ProviderKind::LmStudio,
            Some("none") => ProviderKind::None,
            Some(other) => bail!("LLM_PROVIDER must be one of gemini, lmstudio, none (got {other})"),
        };

        let gemini_api_key = var("GEMINI_API_KEY");
        let gemini_model = var("GEMINI_MODEL").unwrap_or_else(|| "gemini-1.5-flash".to_string());
        let gemini_base_url = var("GEMINI_BASE_URL")
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string());
        let lmstudio_url = var("LMSTUDIO_URL").unwrap_or_else(|| "http://127.0.0.1:1234".to_string());

        let llm_timeout = parse_opt::<u64>(&var, "LLM_TIMEOUT_SECS")?.map(Duration::from_secs);
        let max_claims_per_request = parse_opt(&var, "MAX_CLAIMS_PER_REQUEST")?.unwrap_or(5);
        let requests_per_minute = parse_opt(&var, "REQUESTS_PER_MINUTE")?.unwrap_or(10);
        let cache_ttl_seconds = parse_opt(&var, "CACHE_TTL_SECONDS")?.unwrap_or(3600);

        // Tiny sanity checks (fail fast, fail loud)
        if !is_http(&gemini_base_url) {
            bail!("GEMINI_BASE_URL must start with http:// or https://");
        }
        if !is_http(&lmstudio_url) {
            bail!("LMSTUDIO_URL must start with http:// or https://");
        }

        Ok(Self {
            app_name,
            debug,
            bind_addr,
            provider,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            lmstudio_url,
            llm_timeout,
            max_claims_per_request,
            requests_per_minute,
            cache_ttl_seconds,
        })
    }

    /// Default `tracing` directive when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn parse_opt<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    var(key)
        .map(|v| v.parse::<T>().with_context(|| format!("Invalid value for env var {key}: {v}")))
        .transpose()
}

fn truthy(v: &str) -> bool {
    matches!(v, "1" | "true" | "TRUE" | "True" | "yes" | "YES")
}

fn is_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cfg(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let c = cfg(&[]).unwrap();
        assert_eq!(c.app_name, "Veritas Backend");
        assert!(!c.debug);
        assert_eq!(c.provider, ProviderKind::Gemini);
        assert!(c.gemini_api_key.is_none());
        assert_eq!(c.gemini_model, "gemini-1.5-flash");
        assert_eq!(c.max_claims_per_request, 5);
        assert_eq!(c.requests_per_minute, 10);
        assert_eq!(c.cache_ttl_seconds, 3600);
        assert!(c.llm_timeout.is_none());
        assert_eq!(c.log_level(), "info");
    }

    #[test]
    fn overrides() {
        let c = cfg(&[
            ("GEMINI_API_KEY", "k-123"),
            ("DEBUG", "yes"),
            ("LLM_PROVIDER", "LMStudio"),
            ("MAX_CLAIMS_PER_REQUEST", "8"),
            ("LLM_TIMEOUT_SECS", "30"),
        ])
        .unwrap();
        assert_eq!(c.gemini_api_key.as_deref(), Some("k-123"));
        assert!(c.debug);
        assert_eq!(c.log_level(), "debug");
        assert_eq!(c.provider, ProviderKind::LmStudio);
        assert_eq!(c.max_claims_per_request, 8);
        assert_eq!(c.llm_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let c = cfg(&[("GEMINI_API_KEY", "   ")]).unwrap();
        assert!(c.gemini_api_key.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        let err = cfg(&[("CACHE_TTL_SECONDS", "an hour")]).unwrap_err();
        assert!(err.to_string().contains("CACHE_TTL_SECONDS"));
        assert!(cfg(&[("LMSTUDIO_URL", "localhost:1234")]).is_err());
        assert!(cfg(&[("LLM_PROVIDER", "openai")]).is_err());
    }
}
