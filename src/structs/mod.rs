pub mod ai;
pub mod analysis_request;
pub mod analysis_view;
pub mod cli;
pub mod config;
pub mod explainer_session;
pub mod extracted_parameter;
