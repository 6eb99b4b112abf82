use std::collections::VecDeque;

use quiz_app_contract::{BlockQuestion, InitialPayload};
use serde_json::Value;

const LABEL_FIELDS: [&str; 3] = ["text", "question", "title"];

/// Returns display text for a record: the first string field among `text`, `question` and
/// `title`, the string itself for bare strings, else compact JSON.
pub fn question_label(question: &BlockQuestion) -> String {
    if let Some(label) = LABEL_FIELDS
        .iter()
        .find_map(|field| question.str_field(field))
    {
        return label.to_string();
    }
    match question.as_value() {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Walk state through the questions of an [`InitialPayload`].
pub struct QuizProgress {
    current: Option<BlockQuestion>,
    upcoming: VecDeque<BlockQuestion>,
    completed: usize,
}

impl QuizProgress {
    /// Starts at the first question of either payload shape.
    pub fn from_payload(payload: InitialPayload) -> Self {
        let (current, upcoming) = match payload {
            InitialPayload::FullList { block_questions } => {
                let (head, rest) = block_questions.split_head();
                (head, rest.into_iter().collect::<VecDeque<_>>())
            }
            InitialPayload::HeadTail {
                question,
                next_questions,
            } => (question, next_questions.into_iter().collect()),
        };
        let mut progress = Self {
            current,
            upcoming,
            completed: 0,
        };
        if progress.current.is_none() {
            progress.current = progress.upcoming.pop_front();
        }
        progress
    }

    /// Question on screen, if any remain.
    pub fn current(&self) -> Option<&BlockQuestion> {
        self.current.as_ref()
    }

    /// Questions queued after the current one.
    pub fn remaining(&self) -> usize {
        self.upcoming.len()
    }

    /// Questions already moved past.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// 1-based position of the current question; equals `completed` once finished.
    pub fn position(&self) -> usize {
        self.completed + usize::from(self.current.is_some())
    }

    /// Whether every question has been moved past.
    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// Moves to the next queued question.
    pub fn advance(&mut self) {
        if self.current.take().is_some() {
            self.completed += 1;
        }
        self.current = self.upcoming.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quiz_app_contract::{derive_payload, Fixture, PayloadShape};
    use serde_json::json;

    use super::*;

    fn fixture() -> Fixture {
        [
            json!({"id": 1, "text": "Q1"}),
            json!({"id": 2, "question": "Q2"}),
            json!({"id": 3}),
        ]
        .into_iter()
        .map(BlockQuestion::new)
        .collect()
    }

    #[test]
    fn both_payload_shapes_walk_the_same_questions() {
        for shape in [PayloadShape::FullList, PayloadShape::HeadTail] {
            let mut progress = QuizProgress::from_payload(derive_payload(shape, fixture()));
            let mut labels = Vec::new();
            while let Some(question) = progress.current() {
                labels.push(question_label(question));
                progress.advance();
            }
            assert_eq!(
                labels,
                vec!["Q1".to_string(), "Q2".to_string(), r#"{"id":3}"#.to_string()],
                "shape {}",
                shape.as_str()
            );
            assert_eq!(progress.completed(), 3);
            assert!(progress.is_finished());
        }
    }

    #[test]
    fn position_and_remaining_track_advances() {
        let mut progress =
            QuizProgress::from_payload(derive_payload(PayloadShape::HeadTail, fixture()));
        assert_eq!((progress.position(), progress.remaining()), (1, 2));
        progress.advance();
        assert_eq!((progress.position(), progress.remaining()), (2, 1));
        progress.advance();
        progress.advance();
        assert_eq!((progress.position(), progress.remaining()), (3, 0));
        progress.advance();
        assert_eq!(progress.completed(), 3);
    }

    #[test]
    fn empty_payload_starts_finished() {
        let progress =
            QuizProgress::from_payload(derive_payload(PayloadShape::HeadTail, Fixture::default()));
        assert!(progress.is_finished());
        assert_eq!(progress.position(), 0);
    }

    #[test]
    fn head_tail_without_head_promotes_first_queued_question() {
        let progress = QuizProgress::from_payload(InitialPayload::HeadTail {
            question: None,
            next_questions: fixture(),
        });
        assert_eq!(progress.current().map(question_label), Some("Q1".to_string()));
        assert_eq!(progress.remaining(), 2);
    }

    #[test]
    fn bare_string_records_label_as_themselves() {
        assert_eq!(question_label(&BlockQuestion::new(json!("plain"))), "plain");
        assert_eq!(
            question_label(&BlockQuestion::new(json!({"title": "T", "text": 4}))),
            "T"
        );
    }
}
