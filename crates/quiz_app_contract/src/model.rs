//! Fixture records and the initial payload handed to the embedded application.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One quiz record from the fixture.
///
/// The record shape belongs to the embedded application; the bootstrap passes it through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockQuestion(Value);

impl BlockQuestion {
    /// Wraps a raw JSON record.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the raw JSON record.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the wrapper and returns the raw record.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Returns a top-level string field when the record is an object carrying one.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Value> for BlockQuestion {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Ordered, immutable sequence of [`BlockQuestion`] records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixture(Vec<BlockQuestion>);

impl Fixture {
    /// Creates a fixture from records in order.
    pub fn new(questions: Vec<BlockQuestion>) -> Self {
        Self(questions)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the fixture has no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records in fixture order.
    pub fn as_slice(&self) -> &[BlockQuestion] {
        &self.0
    }

    /// Iterates records in fixture order.
    pub fn iter(&self) -> std::slice::Iter<'_, BlockQuestion> {
        self.0.iter()
    }

    /// Consumes the fixture and returns its records.
    pub fn into_vec(self) -> Vec<BlockQuestion> {
        self.0
    }

    /// Splits off the first record, keeping the remainder in order.
    pub fn split_head(self) -> (Option<BlockQuestion>, Fixture) {
        let mut records = self.0.into_iter();
        let head = records.next();
        (head, records.collect())
    }
}

impl FromIterator<BlockQuestion> for Fixture {
    fn from_iter<I: IntoIterator<Item = BlockQuestion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Fixture {
    type Item = BlockQuestion;
    type IntoIter = std::vec::IntoIter<BlockQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fixture {
    type Item = &'a BlockQuestion;
    type IntoIter = std::slice::Iter<'a, BlockQuestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Strategy used to shape the fixture into an [`InitialPayload`].
pub enum PayloadShape {
    /// Hand over the whole fixture as `blockQuestions`.
    #[default]
    FullList,
    /// Hand over the first record as `question` and the rest as `nextQuestions`.
    HeadTail,
}

impl PayloadShape {
    /// Returns a stable string token for configuration and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullList => "full-list",
            Self::HeadTail => "head-tail",
        }
    }
}

impl FromStr for PayloadShape {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "full-list" => Ok(Self::FullList),
            "head-tail" => Ok(Self::HeadTail),
            other => Err(format!(
                "unknown payload shape `{other}`; expected `full-list` or `head-tail`"
            )),
        }
    }
}

/// Value passed to the embedded application at mount time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialPayload {
    /// `{ "blockQuestions": [...] }`
    #[serde(rename_all = "camelCase")]
    FullList {
        /// Every fixture record, unmodified.
        block_questions: Fixture,
    },
    /// `{ "question": {...}, "nextQuestions": [...] }`
    #[serde(rename_all = "camelCase")]
    HeadTail {
        /// First fixture record; absent for an empty fixture.
        ///
        /// A present `question` key always holds a record, including a JSON `null` record.
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "present_question"
        )]
        question: Option<BlockQuestion>,
        /// Remaining records in fixture order.
        next_questions: Fixture,
    },
}

fn present_question<'de, D>(deserializer: D) -> Result<Option<BlockQuestion>, D::Error>
where
    D: Deserializer<'de>,
{
    BlockQuestion::deserialize(deserializer).map(Some)
}

impl InitialPayload {
    /// Returns the shape this payload was built with.
    pub const fn shape(&self) -> PayloadShape {
        match self {
            Self::FullList { .. } => PayloadShape::FullList,
            Self::HeadTail { .. } => PayloadShape::HeadTail,
        }
    }

    /// Total number of records carried by the payload.
    pub fn question_count(&self) -> usize {
        match self {
            Self::FullList { block_questions } => block_questions.len(),
            Self::HeadTail {
                question,
                next_questions,
            } => usize::from(question.is_some()) + next_questions.len(),
        }
    }
}

/// Shapes `fixture` into the payload selected by `shape`.
pub fn derive_payload(shape: PayloadShape, fixture: Fixture) -> InitialPayload {
    match shape {
        PayloadShape::FullList => InitialPayload::FullList {
            block_questions: fixture,
        },
        PayloadShape::HeadTail => {
            let (question, next_questions) = fixture.split_head();
            InitialPayload::HeadTail {
                question,
                next_questions,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn fixture_of(values: Vec<Value>) -> Fixture {
        values.into_iter().map(BlockQuestion::new).collect()
    }

    #[test]
    fn full_list_payload_is_the_fixture_unchanged() {
        let fixture = fixture_of(vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]);
        let payload = derive_payload(PayloadShape::FullList, fixture.clone());
        assert_eq!(
            payload,
            InitialPayload::FullList {
                block_questions: fixture
            }
        );
        assert_eq!(payload.question_count(), 3);

        let empty = derive_payload(PayloadShape::FullList, Fixture::default());
        assert_eq!(
            empty,
            InitialPayload::FullList {
                block_questions: Fixture::default()
            }
        );
    }

    #[test]
    fn head_tail_payload_splits_first_record_and_keeps_order() {
        let fixture = fixture_of(vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]);
        let InitialPayload::HeadTail {
            question,
            next_questions,
        } = derive_payload(PayloadShape::HeadTail, fixture)
        else {
            panic!("expected head/tail payload");
        };
        assert_eq!(question, Some(BlockQuestion::new(json!({"id": 1}))));
        assert_eq!(
            next_questions,
            fixture_of(vec![json!({"id": 2}), json!({"id": 3})])
        );
    }

    #[test]
    fn head_tail_payload_of_single_record_has_empty_tail() {
        let payload = derive_payload(PayloadShape::HeadTail, fixture_of(vec![json!("only")]));
        assert_eq!(
            payload,
            InitialPayload::HeadTail {
                question: Some(BlockQuestion::new(json!("only"))),
                next_questions: Fixture::default(),
            }
        );
        assert_eq!(payload.question_count(), 1);
    }

    #[test]
    fn head_tail_payload_of_empty_fixture_omits_question() {
        let payload = derive_payload(PayloadShape::HeadTail, Fixture::default());
        assert_eq!(
            payload,
            InitialPayload::HeadTail {
                question: None,
                next_questions: Fixture::default(),
            }
        );
        assert_eq!(
            serde_json::to_value(&payload).expect("serialize"),
            json!({"nextQuestions": []})
        );
        assert_eq!(payload.question_count(), 0);
    }

    #[test]
    fn payload_json_uses_camel_case_field_names() {
        let fixture = fixture_of(vec![
            json!({"id": 1, "text": "Q1"}),
            json!({"id": 2, "text": "Q2"}),
        ]);
        assert_eq!(
            serde_json::to_value(derive_payload(PayloadShape::FullList, fixture.clone()))
                .expect("serialize"),
            json!({"blockQuestions": [{"id": 1, "text": "Q1"}, {"id": 2, "text": "Q2"}]})
        );
        assert_eq!(
            serde_json::to_value(derive_payload(PayloadShape::HeadTail, fixture))
                .expect("serialize"),
            json!({
                "question": {"id": 1, "text": "Q1"},
                "nextQuestions": [{"id": 2, "text": "Q2"}]
            })
        );
    }

    #[test]
    fn payload_deserializes_back_into_matching_variant() {
        let payload: InitialPayload =
            serde_json::from_value(json!({"nextQuestions": [{"id": 2}]})).expect("parse");
        assert_eq!(payload.shape(), PayloadShape::HeadTail);
        assert_eq!(payload.question_count(), 1);

        let payload: InitialPayload =
            serde_json::from_value(json!({"blockQuestions": []})).expect("parse");
        assert_eq!(payload.shape(), PayloadShape::FullList);
    }

    #[test]
    fn null_head_record_survives_a_json_round_trip() {
        let payload = derive_payload(
            PayloadShape::HeadTail,
            fixture_of(vec![Value::Null, json!({"id": 2})]),
        );
        let encoded = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            encoded,
            json!({"question": null, "nextQuestions": [{"id": 2}]})
        );

        let decoded: InitialPayload = serde_json::from_value(encoded).expect("parse");
        assert_eq!(decoded, payload);
        assert_eq!(decoded.question_count(), 2);
    }

    #[test]
    fn payload_shape_parses_stable_tokens() {
        assert_eq!("full-list".parse::<PayloadShape>(), Ok(PayloadShape::FullList));
        assert_eq!(" head-tail ".parse::<PayloadShape>(), Ok(PayloadShape::HeadTail));
        assert!("split".parse::<PayloadShape>().is_err());
        assert_eq!(PayloadShape::default().as_str(), "full-list");
    }

    #[test]
    fn block_question_exposes_string_fields_only() {
        let question = BlockQuestion::new(json!({"text": "Q1", "id": 1}));
        assert_eq!(question.str_field("text"), Some("Q1"));
        assert_eq!(question.str_field("id"), None);
        assert_eq!(BlockQuestion::new(json!(3)).str_field("text"), None);
    }
}
