//! Model-backend configuration resolution
//!
//! The chat endpoint and model name are resolved once per process and
//! memoized; later environment changes do not take effect. Precedence for
//! the endpoint: explicit startup override, full-URL environment variable,
//! host-only environment variable (normalized with a scheme and the default
//! backend port), hardcoded loopback default. Resolution never fails.

use std::sync::OnceLock;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:11434";
pub const DEFAULT_MODEL: &str = "llama3";
const DEFAULT_BACKEND_PORT: u16 = 11434;

/// Full backend URL, e.g. `http://gpu-box:11434`
pub const ENDPOINT_URL_VAR: &str = "OLLAMA_URL";
/// Host-only form, e.g. `gpu-box` or `gpu-box:11434`
pub const ENDPOINT_HOST_VAR: &str = "OLLAMA_HOST";
/// Model name, e.g. `llama3`
pub const MODEL_VAR: &str = "OLLAMA_MODEL";

static GLOBAL: OnceLock<BackendConfig> = OnceLock::new();

/// Resolved model-backend configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub endpoint: String,
    pub model: String,
}

impl BackendConfig {
    /// Resolve from startup overrides and the process environment
    pub fn resolve(endpoint_override: Option<&str>, model_override: Option<&str>) -> Self {
        let endpoint = resolve_endpoint(
            endpoint_override,
            env_value(ENDPOINT_URL_VAR).as_deref(),
            env_value(ENDPOINT_HOST_VAR).as_deref(),
        );
        let model = resolve_model(model_override, env_value(MODEL_VAR).as_deref());
        Self { endpoint, model }
    }

    /// Process-wide memoized configuration
    ///
    /// The first call resolves and caches; subsequent calls return the cached
    /// value regardless of arguments or environment.
    pub fn global(endpoint_override: Option<&str>, model_override: Option<&str>) -> &'static Self {
        GLOBAL.get_or_init(|| Self::resolve(endpoint_override, model_override))
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Endpoint precedence: override, full-URL env, host-only env, loopback default
pub fn resolve_endpoint(override_url: Option<&str>, env_url: Option<&str>, env_host: Option<&str>) -> String {
    if let Some(url) = override_url {
        return url.trim().trim_end_matches('/').to_string();
    }
    if let Some(url) = env_url {
        return url.trim().trim_end_matches('/').to_string();
    }
    if let Some(host) = env_host {
        return normalize_host(host);
    }
    DEFAULT_ENDPOINT.to_string()
}

/// Host-only values get a scheme prefix and the default backend port
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    let with_scheme = if host.contains("://") {
        host.to_string()
    } else {
        format!("http://{host}")
    };
    let has_port = with_scheme
        .split_once("://")
        .map(|(_, authority)| authority.contains(':'))
        .unwrap_or(false);
    if has_port {
        with_scheme
    } else {
        format!("{with_scheme}:{DEFAULT_BACKEND_PORT}")
    }
}

/// Model precedence: override, env, hardcoded default
pub fn resolve_model(override_model: Option<&str>, env_model: Option<&str>) -> String {
    override_model
        .or(env_model)
        .map(|m| m.trim().to_string())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}
