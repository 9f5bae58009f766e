use std::time::Duration;

pub const DEFAULT_SERVER_PORT: u16 = 8501;
pub const DEFAULT_SESSION_TTL_MINUTES: u64 = 60;
pub const MAX_SESSION_ID_LENGTH: usize = 64;
pub const MAX_SOURCE_BYTES: u64 = 1024 * 1024;
pub const SESSION_SWEEP_INTERVAL_SECS: u64 = 300;

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_MAX_TOKENS: u32 = 1500;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// GPT-4 list price per token, fixed at build time.
pub const DEFAULT_COST_PER_TOKEN: f64 = 0.00003;

pub const CONFIG_DIR_NAME: &str = "strategy-explainer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const NOT_FOUND_SENTINEL: &str = "Not found";
pub const EMPTY_INPUT_WARNING: &str = "Please paste a strategy first!";
pub const ANALYSIS_IN_PROGRESS_ERROR: &str = "An analysis is already in progress";

pub fn sleep_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
