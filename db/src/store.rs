//! Question storage backends.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use errors::Error;

use crate::models::{NewQuestion, Question};
use crate::{get_conn, PgPool};

/// Persistence for questions.
///
/// Lookups take the instant a question must be published by, so future
/// questions never leave the store.
pub trait QuestionStore: Send + Sync {
    /// Persists a question and returns it with its assigned id.
    fn insert(&self, question: NewQuestion) -> Result<Question, Error>;

    /// Fetches a question published at or before `published_by`.
    fn get(&self, id: i32, published_by: DateTime<Utc>) -> Result<Question, Error>;

    /// Questions published at or before `published_by`, newest first.
    fn list_ordered_desc(
        &self,
        published_by: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, Error>;
}

#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        PgQuestionStore { pool }
    }
}

impl QuestionStore for PgQuestionStore {
    fn insert(&self, question: NewQuestion) -> Result<Question, Error> {
        let conn = get_conn(&self.pool)?;
        Question::create(&conn, question)
    }

    fn get(&self, id: i32, published_by: DateTime<Utc>) -> Result<Question, Error> {
        let conn = get_conn(&self.pool)?;
        Question::find_published(&conn, id, published_by)
    }

    fn list_ordered_desc(
        &self,
        published_by: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, Error> {
        let conn = get_conn(&self.pool)?;
        Question::get_latest(&conn, published_by, limit)
    }
}

/// In-memory store backing the handler tests.
#[derive(Default)]
pub struct MemoryQuestionStore {
    questions: RwLock<Vec<Question>>,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuestionStore for MemoryQuestionStore {
    fn insert(&self, question: NewQuestion) -> Result<Question, Error> {
        let mut questions = self.questions.write();
        let question = Question {
            id: questions.len() as i32 + 1,
            question_text: question.question_text,
            pub_date: question.pub_date,
        };
        questions.push(question.clone());

        Ok(question)
    }

    fn get(&self, id: i32, published_by: DateTime<Utc>) -> Result<Question, Error> {
        self.questions
            .read()
            .iter()
            .find(|question| question.id == id && question.is_published_at(published_by))
            .cloned()
            .ok_or_else(|| Error::NotFound("Record not found".into()))
    }

    fn list_ordered_desc(
        &self,
        published_by: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, Error> {
        let mut latest: Vec<Question> = self
            .questions
            .read()
            .iter()
            .filter(|question| question.is_published_at(published_by))
            .cloned()
            .collect();

        // ties go to the most recently inserted
        latest.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
        latest.truncate(limit.max(0) as usize);

        Ok(latest)
    }
}
