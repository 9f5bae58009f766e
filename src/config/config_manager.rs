use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ExplainerError, ExplainerResult};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config from an explicit path, falling back to the home directory
    /// location and finally to built-in defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> ExplainerResult<Config> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ExplainerError::config_file_error(
                    &path.display().to_string(),
                    "file does not exist",
                ));
            }
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(default_path) if default_path.exists() => Self::load_from(&default_path),
            _ => {
                log::info!("📋 No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn load_from(path: &Path) -> ExplainerResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| ExplainerError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Reads the completion service credential once, from the environment
    /// variable named in the AI config.
    pub fn resolve_api_key(ai: &AiConfig) -> ExplainerResult<String> {
        Self::resolve_api_key_with(ai, |name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with<F>(ai: &AiConfig, lookup: F) -> ExplainerResult<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(&ai.api_key_env) {
            Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(ExplainerError::missing_credential(&ai.api_key_env)),
        }
    }

    pub fn validate_config(config: &Config) -> ExplainerResult<()> {
        let mut errors = Vec::new();
        let ai = &config.ai;

        if ai.provider != "openai" {
            errors.push(ExplainerError::validation_error(
                "ai.provider",
                &ai.provider,
                "only \"openai\" is supported",
                Some("Set provider = \"openai\" and point base_url at any OpenAI-compatible endpoint"),
            ));
        }

        if ai.model.trim().is_empty() {
            errors.push(ExplainerError::validation_error("ai.model", &ai.model, "must not be empty", None));
        }

        if !(ai.base_url.starts_with("http://") || ai.base_url.starts_with("https://")) {
            errors.push(ExplainerError::validation_error(
                "ai.base_url",
                &ai.base_url,
                "must start with http:// or https://",
                None,
            ));
        }

        if ai.max_tokens == 0 {
            errors.push(ExplainerError::validation_error("ai.max_tokens", "0", "must be greater than 0", None));
        }

        if !(0.0..=2.0).contains(&ai.temperature) {
            errors.push(ExplainerError::validation_error(
                "ai.temperature",
                &ai.temperature.to_string(),
                "must be between 0.0 and 2.0",
                None,
            ));
        }

        if ai.cost_per_token < 0.0 || !ai.cost_per_token.is_finite() {
            errors.push(ExplainerError::validation_error(
                "ai.cost_per_token",
                &ai.cost_per_token.to_string(),
                "must be a finite value >= 0",
                None,
            ));
        }

        if config.server.port == 0 {
            errors.push(ExplainerError::validation_error("server.port", "0", "must be a fixed port", None));
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ExplainerError::MultipleErrors {
                errors,
                context: "config validation".to_string(),
            }),
        }
    }
}
