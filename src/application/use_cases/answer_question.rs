use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::ChatClient;
use crate::domain::{ConversationHistory, ResponderError};

/// Maximum number of document characters included in the prompt.
/// Truncation is silent and counts Unicode scalars, not bytes or tokens.
const DOCUMENT_CHAR_LIMIT: usize = 8_000;

/// Answers a user question about a document by composing a context-augmented
/// prompt and sending it through a [`ChatClient`].
///
/// The client handle is fixed at construction. [`AnswerQuestionUseCase::unavailable`]
/// models a client that could not be built (e.g. missing credential): every
/// call then returns [`ResponderError::ClientUnavailable`] without touching
/// the network, and the client is never reconstructed.
///
/// Each call is otherwise stateless.  The conversation history is read-only
/// input owned by the calling session, so a host may share one instance
/// across concurrent requests.
pub struct AnswerQuestionUseCase {
    chat_client: Option<Arc<dyn ChatClient>>,
}

impl AnswerQuestionUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client: Some(chat_client),
        }
    }

    /// A responder whose chat client could not be constructed.
    pub fn unavailable() -> Self {
        Self { chat_client: None }
    }

    /// Wire from an optional client, e.g. the result of
    /// [`crate::connector::MaritacaClient::from_env`].
    pub fn from_client(chat_client: Option<Arc<dyn ChatClient>>) -> Self {
        Self { chat_client }
    }

    pub fn is_available(&self) -> bool {
        self.chat_client.is_some()
    }

    /// Compose the prompt and request a completion.
    ///
    /// Returns the model's answer text verbatim, or a [`ResponderError`]
    /// whose `Display` rendering is the user-facing fallback message.
    /// Never panics; transport and parse failures surface as
    /// [`ResponderError::Generation`].
    pub async fn execute(
        &self,
        document: &str,
        objective: &str,
        question: &str,
        history: Option<&ConversationHistory>,
    ) -> Result<String, ResponderError> {
        let Some(client) = &self.chat_client else {
            warn!("AnswerQuestion: chat client unavailable, skipping request");
            return Err(ResponderError::ClientUnavailable);
        };

        let prompt = build_prompt(document, objective, question, history);
        debug!(
            prompt_chars = prompt.chars().count(),
            history_turns = history.map_or(0, |h| h.len()),
            "Composed question prompt"
        );

        let answer = client.complete(&prompt).await?;
        info!(answer_chars = answer.chars().count(), "Received answer");
        Ok(answer)
    }
}

/// Compose the context-augmented prompt sent to the model.
///
/// Layout, in order: two instruction lines carrying the objective, the
/// document truncated to [`DOCUMENT_CHAR_LIMIT`] characters, the
/// conversation history (rendered only when non-empty, oldest turn first),
/// and the current question.
pub fn build_prompt(
    document: &str,
    objective: &str,
    question: &str,
    history: Option<&ConversationHistory>,
) -> String {
    let mut prompt = format!(
        "Você é um assistente que leu um documento com o seguinte objetivo: '{objective}'.\n"
    );
    prompt.push_str(
        "Com base no documento e no objetivo, responda à seguinte pergunta de forma clara e concisa.\n\n",
    );

    prompt.push_str("Documento:\n");
    prompt.extend(document.chars().take(DOCUMENT_CHAR_LIMIT));
    prompt.push_str("\n\n");

    if let Some(history) = history.filter(|h| !h.is_empty()) {
        prompt.push_str("\nHistórico da conversa:\n");
        for turn in history.iter() {
            prompt.push_str(&format!("Usuário: {}\n", turn.question));
            prompt.push_str(&format!("Assistente: {}\n", turn.answer));
        }
        prompt.push('\n');
    }

    prompt.push_str(&format!("Pergunta atual: {question}"));
    prompt
}
