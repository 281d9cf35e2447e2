use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::ResponderError;

/// Default target: the hosted Maritaca API.
pub const DEFAULT_BASE_URL: &str = "https://chat.maritaca.ai/api";
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const DEFAULT_MODEL: &str = "sabia-3";
const MAX_TOKENS: u32 = 1000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// HTTP client for the Maritaca chat-completions API (OpenAI-compatible
/// "messages in, choices-with-message-content out" shape).
///
/// Implements [`ChatClient`] so higher-level components (e.g.
/// [`crate::application::AnswerQuestionUseCase`]) stay decoupled from
/// transport and serialization details.
///
/// Every request carries a single user-role message, a 30-second timeout,
/// and no retries; any transport or parse failure maps to
/// [`ResponderError::Generation`].
pub struct MaritacaClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH).
    url: String,
}

impl MaritacaClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{CHAT_COMPLETIONS_PATH}", base.trim_end_matches('/'));
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable            | Default                        | Purpose              |
    /// |---------------------|--------------------------------|----------------------|
    /// | `MARITACA_API_KEY`  | — (required)                   | Bearer credential    |
    /// | `MARITACA_BASE_URL` | `https://chat.maritaca.ai/api` | Compatible endpoint  |
    /// | `MARITACA_MODEL`    | `sabia-3`                      | Model identifier     |
    ///
    /// Returns `None` when the API key is unset or empty.  The caller should
    /// then wire [`crate::application::AnswerQuestionUseCase::unavailable`]
    /// rather than fall back to an embedded credential; construction is not
    /// retried for the process lifetime.
    pub fn from_env() -> Option<Self> {
        let key = std::env::var("MARITACA_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())?;
        let base =
            std::env::var("MARITACA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("MARITACA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self::new(key, model, base))
    }
}

#[async_trait]
impl ChatClient for MaritacaClient {
    async fn complete(&self, prompt: &str) -> Result<String, ResponderError> {
        let request = ApiRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("MaritacaClient: request failed: {e}");
                ResponderError::generation(format!("request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("MaritacaClient: API returned {status}: {body}");
            return Err(ResponderError::generation(format!("API returned {status}")));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            warn!("MaritacaClient: failed to parse response: {e}");
            ResponderError::generation(format!("failed to parse response: {e}"))
        })?;

        let answer = api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                warn!("MaritacaClient: response contained no choices");
                ResponderError::generation("response contained no choices")
            })?;

        debug!(
            answer_chars = answer.chars().count(),
            "MaritacaClient: received completion"
        );
        Ok(answer)
    }
}
