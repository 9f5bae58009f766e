mod common;
mod extractor_properties;
mod openai_provider;
