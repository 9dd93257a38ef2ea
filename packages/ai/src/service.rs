// ABOUTME: Summarizer client for the OpenAI chat completions API
// ABOUTME: One request per summary, fixed prompt template, flat error taxonomy

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Invalid response format")]
    InvalidResponse,
}

pub type SummarizerResult<T> = Result<T, SummarizerError>;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the hosted completion model behind the summarize endpoint.
pub struct Summarizer {
    client: Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl Summarizer {
    /// Create HTTP client with timeout configuration
    fn create_client() -> Client {
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client")
    }

    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        if model != DEFAULT_MODEL {
            info!("Using custom completion model: {}", model);
        }

        Self {
            client: Self::create_client(),
            api_key,
            model,
            api_url: OPENAI_API_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint, e.g. a mock server in tests.
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    /// Get the model being used by this client
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the completion model for a short summary of one task description.
    /// The prompt template and decoding parameters are fixed; the returned
    /// text is trimmed of surrounding whitespace. An empty description still
    /// issues the downstream call.
    pub async fn summarize_task(&self, task_description: &str) -> SummarizerResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: format!("Summarize this task: {}", task_description),
            }],
        };

        info!("Requesting summary: model={}", request.model);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Completion API error: {} - {}", status, error_text);
            return Err(SummarizerError::ApiError(format!(
                "API returned {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::ParseError(e.to_string()))?;

        let content = chat_response
            .choices
            .first()
            .ok_or(SummarizerError::InvalidResponse)?
            .message
            .content
            .trim()
            .to_string();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn summarizer_for(server: &MockServer) -> Summarizer {
        Summarizer::new("test-key".to_string())
            .with_api_url(format!("{}/v1/chat/completions", server.uri()))
    }

    #[tokio::test]
    async fn summarize_sends_prompt_template_and_trims_reply() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "messages": [{
                    "role": "user",
                    "content": "Summarize this task: Write the Q3 report"
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "message": { "role": "assistant", "content": "  Q3 report.  " }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = summarizer_for(&server)
            .summarize_task("Write the Q3 report")
            .await
            .unwrap();

        assert_eq!(summary, "Q3 report.");
    }

    #[tokio::test]
    async fn empty_description_still_calls_the_api() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "messages": [{ "role": "user", "content": "Summarize this task: " }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "message": { "role": "assistant", "content": "Nothing to do." }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = summarizer_for(&server).summarize_task("").await.unwrap();
        assert_eq!(summary, "Nothing to do.");
    }

    #[tokio::test]
    async fn api_failure_collapses_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = summarizer_for(&server)
            .summarize_task("anything")
            .await
            .unwrap_err();

        assert!(matches!(err, SummarizerError::ApiError(_)));
    }

    #[tokio::test]
    async fn missing_choices_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = summarizer_for(&server)
            .summarize_task("anything")
            .await
            .unwrap_err();

        assert!(matches!(err, SummarizerError::InvalidResponse));
    }

    #[tokio::test]
    async fn custom_model_is_sent_in_the_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "model": "gpt-4o-mini" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "ok" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summarizer = Summarizer::with_model("test-key".to_string(), "gpt-4o-mini".to_string())
            .with_api_url(format!("{}/v1/chat/completions", server.uri()));

        assert_eq!(summarizer.model(), "gpt-4o-mini");
        summarizer.summarize_task("anything").await.unwrap();
    }
}
