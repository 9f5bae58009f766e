use async_trait::async_trait;
use mockall::mock;
use strategy_explainer::enums::ai_provider_error::AiProviderError;
use strategy_explainer::structs::ai::chat_completion::ChatCompletion;
use strategy_explainer::structs::ai::chat_completion_request::ChatCompletionRequest;
use strategy_explainer::traits::ai_provider::AiProvider;

mock! {
    pub Provider {}

    #[async_trait]
    impl AiProvider for Provider {
        async fn chat(&self, request: ChatCompletionRequest) -> Result<ChatCompletion, AiProviderError>;
    }
}

pub const STRATEGY_SOURCE: &str = r#"
public class BreakoutStrategy : Strategy
{
    public int FastMA { get; set; }
    public int StopLoss { get; set; }
    public double RiskPercent { get; set; }

    protected override void OnStateChange()
    {
        if (State == State.SetDefaults)
        {
            FastMA = 10;
            RiskPercent = 0.5 * 2;
        }
    }
}
"#;
