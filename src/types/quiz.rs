use serde::{Deserialize, Serialize};

/// What the play tab sends us: the ids the player has already seen plus the
/// category the round is restricted to. A `quiz_category` of 0 means the
/// round draws from all categories, and omitting the field means the same.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i32>>,
    #[serde(default)]
    pub quiz_category: i32,
}
