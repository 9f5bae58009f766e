use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ExplainerError, ExplainerResult};
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::strategy_explainer::StrategyExplainer;
use crate::structs::config::config::Config;
use crate::ui::web_server::ExplainerServer;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ExplainerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { port, open, config } => self.serve_command(port, open, config).await,
            Commands::Validate { config } => self.validate_command(config),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(config_path: Option<PathBuf>) -> ExplainerResult<Config> {
        let config = ConfigManager::load(config_path.as_deref())?;
        ConfigManager::validate_config(&config)?;
        Ok(config)
    }

    async fn serve_command(&self, port: Option<u16>, open: bool, config_path: Option<PathBuf>) -> ExplainerResult<()> {
        let mut config = Self::load_config(config_path)?;
        if let Some(port) = port {
            config.server.port = port;
        }
        config.server.open_browser |= open;

        let api_key = ConfigManager::resolve_api_key(&config.ai)?;
        let provider = OpenAIProvider::new(api_key, config.ai.base_url.clone());
        let explainer = StrategyExplainer::new(Arc::new(provider), config.ai.clone());

        log::info!("🤖 Using model {} (max_tokens={}, temperature={})", config.ai.model, config.ai.max_tokens, config.ai.temperature);

        let mut server = ExplainerServer::new(explainer, config.server.clone());
        let addr = server.start().await?;

        if config.server.open_browser {
            let url = format!("http://{}", addr);
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }

        log::info!("👉 Press Ctrl+C to stop");
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| ExplainerError::system_error("wait for shutdown signal", &e.to_string()))?;

        server.shutdown().await
    }

    fn validate_command(&self, config_path: Option<PathBuf>) -> ExplainerResult<()> {
        log::info!("🔍 Validating configuration...");

        let config = Self::load_config(config_path)?;
        ConfigManager::resolve_api_key(&config.ai)?;

        log::info!("✅ Configuration is valid (model {}, port {})", config.ai.model, config.server.port);
        Ok(())
    }
}
