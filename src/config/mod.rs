use std::env;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub suggestion_min_chars: usize,
    pub suggestion_debounce_ms: u64,
    pub suggestion_hide_delay_ms: u64,
    pub default_radius_m: u32,
    pub nearby_cache_ttl_secs: u64,
    pub session_cache_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            api_base_url: env::var("API_BASE_URL")?,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 10),
            suggestion_min_chars: env_or("SUGGESTION_MIN_CHARS", 2),
            suggestion_debounce_ms: env_or("SUGGESTION_DEBOUNCE_MS", 300),
            suggestion_hide_delay_ms: env_or("SUGGESTION_HIDE_DELAY_MS", 200),
            default_radius_m: env_or("DEFAULT_RADIUS_M", 1500),
            nearby_cache_ttl_secs: env_or("NEARBY_CACHE_TTL_SECS", 300),
            session_cache_ttl_secs: env_or("SESSION_CACHE_TTL_SECS", 300),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.suggestion_debounce_ms)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_hide_delay_ms)
    }

    pub fn nearby_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.nearby_cache_ttl_secs)
    }

    pub fn session_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.session_cache_ttl_secs)
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
