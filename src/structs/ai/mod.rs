pub mod chat_message;
pub mod chat_completion_request;
pub mod chat_completion;
pub mod openai;
