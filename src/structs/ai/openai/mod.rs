pub mod openai_message;
pub mod openai_request;
pub mod openai_response;
pub mod openai_choice;
pub mod openai_usage;
pub mod openai_error_body;
