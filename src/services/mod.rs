pub mod ai_providers;
pub mod auto_property_pattern;
pub mod markdown_renderer;
pub mod parameter_extractor;
pub mod strategy_explainer;
