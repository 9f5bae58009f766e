pub mod ai_provider_error;
pub mod analysis_result;
pub mod commands;
pub mod session_status;
