use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};

use crate::types::{
    category::{Category, CategoryId},
    question::{NewQuestion, Question, QuestionId},
};

use handle_errors::Error;

#[derive(Debug, Clone)]
pub struct Store {
    pub connection: PgPool,
}

impl Store {
    pub async fn new(db_url: &str) -> Self {
        let db_pool = match PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await
        {
            Ok(pool) => pool,
            Err(e) => panic!("Couldn't establish DB connection: {}", e),
        };

        Store {
            connection: db_pool,
        }
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, Error> {
        match sqlx::query("SELECT * from categories ORDER BY id")
            .map(|row: PgRow| Category {
                id: CategoryId(row.get("id")),
                kind: row.get("type"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(categories) => Ok(categories),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn get_questions(&self) -> Result<Vec<Question>, Error> {
        match sqlx::query("SELECT * from questions ORDER BY id")
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: row.get("category"),
                difficulty: row.get("difficulty"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(questions) => Ok(questions),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn search_questions(&self, search: &str) -> Result<Vec<Question>, Error> {
        match sqlx::query("SELECT * from questions WHERE question ILIKE $1 ORDER BY id")
            .bind(format!("%{}%", search))
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: row.get("category"),
                difficulty: row.get("difficulty"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(questions) => Ok(questions),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn get_questions_by_category(&self, category_id: i32) -> Result<Vec<Question>, Error> {
        match sqlx::query("SELECT * from questions WHERE category = $1")
            .bind(category_id)
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: row.get("category"),
                difficulty: row.get("difficulty"),
            })
            .fetch_all(&self.connection)
            .await
        {
            Ok(questions) => Ok(questions),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn get_question(&self, question_id: i32) -> Result<Option<Question>, Error> {
        match sqlx::query("SELECT * from questions WHERE id = $1")
            .bind(question_id)
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: row.get("category"),
                difficulty: row.get("difficulty"),
            })
            .fetch_optional(&self.connection)
            .await
        {
            Ok(question) => Ok(question),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn add_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        match sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty",
        )
        .bind(new_question.question)
        .bind(new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .map(|row: PgRow| Question {
            id: QuestionId(row.get("id")),
            question: row.get("question"),
            answer: row.get("answer"),
            category: row.get("category"),
            difficulty: row.get("difficulty"),
        })
        .fetch_one(&self.connection)
        .await
        {
            Ok(question) => Ok(question),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    pub async fn delete_question(&self, question_id: i32) -> Result<(), Error> {
        match sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(question_id)
            .execute(&self.connection)
            .await
        {
            Ok(result) => {
                if result.rows_affected() == 0 {
                    return Err(Error::QuestionNotFound(question_id));
                }
                Ok(())
            }
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    /// Draws one question uniformly at random among the rows the player has
    /// not seen yet, optionally scoped to a single category. `None` means
    /// the pool is exhausted.
    pub async fn random_question(
        &self,
        excluded: Vec<i32>,
        category_id: Option<i32>,
    ) -> Result<Option<Question>, Error> {
        let query = match category_id {
            Some(category_id) => sqlx::query(
                "SELECT * from questions
                WHERE id <> ALL($1) AND category = $2
                ORDER BY RANDOM() LIMIT 1",
            )
            .bind(excluded)
            .bind(category_id),
            None => sqlx::query(
                "SELECT * from questions
                WHERE id <> ALL($1)
                ORDER BY RANDOM() LIMIT 1",
            )
            .bind(excluded),
        };

        match query
            .map(|row: PgRow| Question {
                id: QuestionId(row.get("id")),
                question: row.get("question"),
                answer: row.get("answer"),
                category: row.get("category"),
                difficulty: row.get("difficulty"),
            })
            .fetch_optional(&self.connection)
            .await
        {
            Ok(question) => Ok(question),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }
}
