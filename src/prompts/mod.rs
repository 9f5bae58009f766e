pub mod strategy_analysis_prompt;
pub mod sample_strategy;
