use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Deserialize, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Serialize, Debug, Clone, Eq, Hash, Deserialize, PartialEq)]
pub struct QuestionId(pub i32);

/// Payload for creating a question. Every field has to be present in the
/// request body; a missing or null field fails deserialization and the
/// request is rejected as unprocessable.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
