pub mod client;
pub mod prompts;
pub mod receipt_extractor;
