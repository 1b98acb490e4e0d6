use serde::{Deserialize, Serialize};

use handle_errors::Error;

use crate::store::Store;
use crate::types::question::Question;
use crate::types::quiz::QuizRequest;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuizResponse {
    success: bool,
    question: Option<Question>,
    quiz_category: i32,
}

pub async fn play_quiz(
    store: Store,
    quiz: QuizRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    let previous_questions = match quiz.previous_questions {
        Some(previous_questions) => previous_questions,
        None => return Err(warp::reject::custom(Error::MissingParameters)),
    };

    // 0 is the sentinel the play tab sends for "all categories".
    let category = match quiz.quiz_category {
        0 => None,
        category_id => Some(category_id),
    };

    match store.random_question(previous_questions, category).await {
        Ok(question) => Ok(warp::reply::json(&QuizResponse {
            success: true,
            question,
            quiz_category: quiz.quiz_category,
        })),
        Err(e) => Err(warp::reject::custom(e)),
    }
}
