use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of past exchanges a [`ConversationHistory`] retains.
pub const HISTORY_CAPACITY: usize = 10;

/// One past question/answer exchange supplied by the caller for context
/// continuity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub question: String,
    pub answer: String,
}

impl ConversationTurn {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A fixed-capacity rolling window of conversation turns, oldest first.
///
/// Owned and mutated by the calling session or request context; the
/// responder only reads it. Pushing beyond [`HISTORY_CAPACITY`] evicts the
/// oldest turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationHistory {
    turns: VecDeque<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        if self.turns.len() == HISTORY_CAPACITY {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    /// Convenience for `push(ConversationTurn::new(question, answer))`.
    pub fn record(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.push(ConversationTurn::new(question, answer));
    }

    /// Turns in chronological order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut history = ConversationHistory::new();
        history.record("first?", "one");
        history.record("second?", "two");

        let questions: Vec<&str> = history.iter().map(|t| t.question.as_str()).collect();
        assert_eq!(questions, vec!["first?", "second?"]);
    }

    #[test]
    fn evicts_oldest_turn_beyond_capacity() {
        let mut history = ConversationHistory::new();
        for i in 0..HISTORY_CAPACITY + 3 {
            history.record(format!("q{i}"), format!("a{i}"));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let first = history.iter().next().unwrap();
        assert_eq!(first.question, "q3");
        let last = history.iter().last().unwrap();
        assert_eq!(last.question, format!("q{}", HISTORY_CAPACITY + 2));
    }

    #[test]
    fn new_history_is_empty() {
        let history = ConversationHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }
}
