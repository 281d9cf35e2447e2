//! End-to-end tests wiring the responder use case to the HTTP adapter
//! against a mock chat-completions server.

use std::sync::Arc;

use lucid_chat::{AnswerQuestionUseCase, ConversationHistory, MaritacaClient};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn answers_a_question_about_a_document() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("Quarterly report with sales figures."))
        .and(body_string_contains("Summarize key points."))
        .and(body_string_contains("Pergunta atual: What is the report's objective?"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "The report covers Q3 sales." } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MaritacaClient::new("test-key", "sabia-3", server.uri());
    let responder = AnswerQuestionUseCase::new(Arc::new(client));

    let answer = responder
        .execute(
            "Quarterly report with sales figures.",
            "Summarize key points.",
            "What is the report's objective?",
            None,
        )
        .await
        .unwrap();

    assert_eq!(answer, "The report covers Q3 sales.");
}

#[tokio::test]
async fn history_reaches_the_wire_in_order() {
    let server = MockServer::start().await;

    // The prompt travels JSON-encoded, so its newlines appear as literal
    // `\n` sequences in the request body.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("Histórico da conversa:"))
        .and(body_string_contains("Usuário: Q1\\nAssistente: A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "ok" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = MaritacaClient::new("test-key", "sabia-3", server.uri());
    let responder = AnswerQuestionUseCase::new(Arc::new(client));

    let mut history = ConversationHistory::new();
    history.record("Q1", "A1");

    let answer = responder
        .execute("doc", "obj", "Q2", Some(&history))
        .await
        .unwrap();
    assert_eq!(answer, "ok");
}

#[tokio::test]
async fn provider_outage_surfaces_the_fixed_fallback_rendering() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = MaritacaClient::new("test-key", "sabia-3", server.uri());
    let responder = AnswerQuestionUseCase::new(Arc::new(client));

    let err = responder.execute("doc", "obj", "q", None).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Desculpe, ocorreu um erro ao gerar a resposta. Por favor, tente novamente."
    );
}

#[tokio::test]
async fn unavailable_responder_never_contacts_the_server() {
    let server = MockServer::start().await;

    // Zero expected requests: the sentinel short-circuits before any I/O.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let responder = AnswerQuestionUseCase::unavailable();
    let err = responder.execute("doc", "obj", "q", None).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Erro ao inicializar o cliente de IA. Por favor, tente novamente mais tarde."
    );
}
