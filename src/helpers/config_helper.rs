use crate::config::constants::{
    DEFAULT_COST_PER_TOKEN, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SERVER_PORT,
    DEFAULT_SESSION_TTL_MINUTES, DEFAULT_TEMPERATURE, OPENAI_API_KEY_ENV, OPENAI_BASE_URL,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_base_url() -> String {
        OPENAI_BASE_URL.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_temperature() -> f32 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_cost_per_token() -> f64 {
        DEFAULT_COST_PER_TOKEN
    }

    pub fn default_provider() -> String {
        "openai".to_string()
    }

    pub fn default_api_key_env() -> String {
        OPENAI_API_KEY_ENV.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_open_browser() -> bool {
        false
    }

    pub fn default_session_ttl_minutes() -> u64 {
        DEFAULT_SESSION_TTL_MINUTES
    }
}
