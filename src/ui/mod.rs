pub mod session_manager;
pub mod web_server;
