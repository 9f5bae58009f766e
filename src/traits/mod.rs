pub mod ai_provider;
pub mod declaration_pattern;
