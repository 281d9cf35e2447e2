use async_trait::async_trait;

use crate::domain::ResponderError;

/// An interface for sending a composed prompt to a chat-completion endpoint
/// and receiving the assistant's text response.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details.  Consumers (e.g. [`crate::application::AnswerQuestionUseCase`])
/// remain decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as a single user-role message and return the
    /// assistant's response text verbatim.
    async fn complete(&self, prompt: &str) -> Result<String, ResponderError>;
}
