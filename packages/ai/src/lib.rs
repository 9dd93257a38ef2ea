// ABOUTME: Summarization gateway integration
// ABOUTME: OpenAI chat-completions client used by the summarize endpoint

pub mod service;

pub use service::{Summarizer, SummarizerError, SummarizerResult};
