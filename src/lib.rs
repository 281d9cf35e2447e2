pub mod application;
pub mod connector;
pub mod domain;

pub use application::{build_prompt, AnswerQuestionUseCase, ChatClient};

pub use connector::MaritacaClient;

pub use domain::{ConversationHistory, ConversationTurn, ResponderError, HISTORY_CAPACITY};
